use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

fn ytz_bin() -> String {
    env!("CARGO_BIN_EXE_ytz").to_string()
}

fn run(args: &[&str]) -> Output {
    Command::new(ytz_bin()).args(args).output().unwrap()
}

fn assert_ok(out: &Output) {
    assert!(
        out.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
}

fn ledger_lines(path: &Path) -> Vec<(String, u32)> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| {
            let (name, score) = l.rsplit_once('-').unwrap();
            (name.to_string(), score.parse().unwrap())
        })
        .collect()
}

#[test]
fn help_and_version_run() {
    let out = run(&["--help"]);
    assert_ok(&out);
    assert!(String::from_utf8_lossy(&out.stderr).contains("COMMANDS:"));

    let out = run(&["--version"]);
    assert_ok(&out);
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("ytz "));

    for cmd in ["score", "sim", "highscores"] {
        let out = run(&[cmd, "--help"]);
        assert_ok(&out);
        assert!(String::from_utf8_lossy(&out.stdout).contains(&format!("ytz {cmd}")));
    }
}

#[test]
fn unknown_command_and_bad_args_fail() {
    assert!(!run(&["bogus"]).status.success());
    assert!(!run(&["score"]).status.success());
    assert!(!run(&["score", "--dice", "1,2,3"]).status.success());
    assert!(!run(&["score", "--dice", "0,2,3,4,5"]).status.success());
    assert!(!run(&["sim", "--games"]).status.success());
    assert!(!run(&["sim", "--games", "many"]).status.success());
}

#[test]
fn score_prints_every_category() {
    let out = run(&["score", "--dice", "2,2,3,3,3"]);
    assert_ok(&out);
    let s = String::from_utf8_lossy(&out.stdout);

    let row = |name: &str| -> Vec<String> {
        s.lines()
            .map(|l| l.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .find(|cols| cols.first().map(String::as_str) == Some(name))
            .unwrap_or_else(|| panic!("no row for {name}:\n{s}"))
    };
    assert_eq!(row("full_house"), vec!["full_house", "yes", "25"]);
    assert_eq!(row("three_of_a_kind"), vec!["three_of_a_kind", "yes", "13"]);
    assert_eq!(row("threes"), vec!["threes", "yes", "9"]);
    assert_eq!(row("yahtzee"), vec!["yahtzee", "no", "0"]);
    assert_eq!(row("small_straight"), vec!["small_straight", "no", "0"]);
    assert_eq!(row("chance"), vec!["chance", "yes", "13"]);
}

#[test]
fn sim_keeps_top_eight_sorted_and_logs_events() {
    let dir = tempfile::tempdir().unwrap();
    let hs = dir.path().join("highscores.dat");
    let ev = dir.path().join("events.ndjson");

    let out = run(&[
        "sim",
        "--games",
        "12",
        "--seed",
        "3",
        "--player",
        "tester",
        "--highscores",
        hs.to_str().unwrap(),
        "--events",
        ev.to_str().unwrap(),
    ]);
    assert_ok(&out);
    assert!(String::from_utf8_lossy(&out.stdout).contains("Games: 12"));

    let lines = ledger_lines(&hs);
    assert_eq!(lines.len(), 8);
    assert!(lines.iter().all(|(n, _)| n == "tester"));
    assert!(lines.windows(2).all(|w| w[0].1 >= w[1].1));

    let text = fs::read_to_string(&ev).unwrap();
    let events: Vec<Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let count = |kind: &str| events.iter().filter(|e| e["event"] == kind).count();
    assert_eq!(count("game_completed"), 12);
    assert_eq!(count("turn_scored"), 12 * 13);

    // Every final score on the board came from a completed game.
    let finals: Vec<u64> = events
        .iter()
        .filter(|e| e["event"] == "game_completed")
        .map(|e| e["total_score"].as_u64().unwrap())
        .collect();
    let mut sorted = finals.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let board: Vec<u64> = lines.iter().map(|(_, s)| *s as u64).collect();
    assert_eq!(board, sorted[..8].to_vec());
}

#[test]
fn sim_is_reproducible_for_a_seed() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.dat");
    let b = dir.path().join("b.dat");
    for p in [&a, &b] {
        assert_ok(&run(&[
            "sim",
            "--games",
            "4",
            "--seed",
            "42",
            "--highscores",
            p.to_str().unwrap(),
        ]));
    }
    assert_eq!(fs::read_to_string(&a).unwrap(), fs::read_to_string(&b).unwrap());
}

#[test]
fn sim_appends_to_existing_board_and_honors_config() {
    let dir = tempfile::tempdir().unwrap();
    let hs = dir.path().join("scores.dat");
    fs::write(&hs, "legend-1575\n").unwrap();
    let cfg = dir.path().join("cfg.yaml");
    fs::write(
        &cfg,
        format!(
            "highscores:\n  path: \"{}\"\n  capacity: 3\n",
            hs.to_str().unwrap()
        ),
    )
    .unwrap();

    assert_ok(&run(&[
        "sim",
        "--games",
        "5",
        "--config",
        cfg.to_str().unwrap(),
    ]));

    let lines = ledger_lines(&hs);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], ("legend".to_string(), 1575));
}

#[test]
fn highscores_lists_board_with_empty_slots() {
    let dir = tempfile::tempdir().unwrap();
    let hs = dir.path().join("highscores.dat");
    fs::write(&hs, "bo-150\nann-200\n").unwrap();

    let out = run(&["highscores", "--file", hs.to_str().unwrap()]);
    assert_ok(&out);
    let s = String::from_utf8_lossy(&out.stdout);
    let ann = s.find("ann   -   200").unwrap();
    let bo = s.find("bo   -   150").unwrap();
    assert!(ann < bo);
    assert_eq!(s.matches("No highscore").count(), 6);
}

#[test]
fn highscores_rejects_corrupt_store() {
    let dir = tempfile::tempdir().unwrap();
    let hs = dir.path().join("highscores.dat");
    fs::write(&hs, "not a score line\n").unwrap();
    assert!(!run(&["highscores", "--file", hs.to_str().unwrap()])
        .status
        .success());
}

#[test]
fn oversized_capacity_in_config_is_a_clean_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("cfg.yaml");
    fs::write(
        &cfg,
        format!("highscores:\n  capacity: {}\n", usize::MAX),
    )
    .unwrap();

    for cmd in ["sim", "highscores"] {
        let out = run(&[cmd, "--config", cfg.to_str().unwrap()]);
        assert_eq!(out.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&out.stderr).contains("highscores.capacity"));
    }
}
