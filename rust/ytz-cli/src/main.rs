//! ytz: headless shell for the Yahtzee rules engine.
//!
//! Subcommands:
//! - score
//! - sim
//! - highscores

mod autoplay;

use std::env;
use std::path::PathBuf;
use std::process;

use serde::Serialize;
use ytz_core::{
    is_eligible, potential_score, Category, ChanceMode, Config, GameSession, ScoreOutcome,
    UPPER_BONUS, YAHTZEE_BONUS,
};
use ytz_highscore::{HighscoreEntry, HighscoreLedger};
use ytz_logging::{
    now_ms, BonusEventV1, GameCompletedEventV1, NdjsonWriter, TurnScoredEventV1, VersionInfoV1,
};

fn print_help() {
    eprintln!(
        r#"ytz - Yahtzee rules engine CLI

USAGE:
    ytz <COMMAND> [OPTIONS]

COMMANDS:
    score               Show eligibility and points of a roll in every category
    sim                 Auto-play games and record them on the highscore board
    highscores          Print the highscore board

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version

Run `ytz <COMMAND> --help` for command options.
"#
    );
}

fn print_version() {
    println!("ytz {}", env!("CARGO_PKG_VERSION"));
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    process::exit(1);
}

/// Value following a flag at `args[i]`.
fn flag_value<'a>(args: &'a [String], i: usize) -> &'a str {
    match args.get(i + 1) {
        Some(v) => v.as_str(),
        None => fail(format!("Missing value for {}", args[i])),
    }
}

fn parse_dice(s: &str) -> Result<[u8; 5], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 5 {
        return Err(format!("expected 5 comma-separated dice, got {}", parts.len()));
    }
    let mut dice = [0u8; 5];
    for (d, p) in dice.iter_mut().zip(parts) {
        *d = p
            .parse::<u8>()
            .ok()
            .filter(|v| (1..=6).contains(v))
            .ok_or_else(|| format!("invalid die value: {p:?}"))?;
    }
    Ok(dice)
}

fn load_config(path: Option<&str>) -> Config {
    match path {
        Some(p) => Config::load(p).unwrap_or_else(|e| fail(format!("Failed to load {p}: {e}"))),
        None => Config::default(),
    }
}

fn cmd_score(args: &[String]) {
    let mut dice: Option<[u8; 5]> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"ytz score

USAGE:
    ytz score --dice a,b,c,d,e

OPTIONS:
    --dice a,b,c,d,e    Five dice, each 1..6
"#
                );
                return;
            }
            "--dice" => {
                let v = flag_value(args, i);
                dice = Some(parse_dice(v).unwrap_or_else(|e| fail(format!("Invalid --dice: {e}"))));
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `ytz score`: {}", other);
                eprintln!("Run `ytz score --help` for usage.");
                process::exit(1);
            }
        }
    }

    let Some(dice) = dice else {
        fail("Missing --dice (e.g. `ytz score --dice 2,2,3,3,3`)");
    };

    println!("Roll: {:?}", dice);
    println!();
    println!("  {:<16} {:<9} {:>6}", "category", "eligible", "points");
    for cat in Category::ALL {
        let eligible = is_eligible(cat, dice);
        println!(
            "  {:<16} {:<9} {:>6}",
            cat.name(),
            if eligible { "yes" } else { "no" },
            potential_score(cat, dice)
        );
    }
}

struct SimOptions {
    games: u32,
    seed: u64,
    player: String,
    config: Config,
    highscores: PathBuf,
    events: Option<PathBuf>,
}

fn parse_sim_args(args: &[String]) -> Option<SimOptions> {
    let mut games: u32 = 1;
    let mut seed: u64 = 0;
    let mut player = "ytz-bot".to_string();
    let mut config_path: Option<String> = None;
    let mut highscores: Option<String> = None;
    let mut events: Option<String> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"ytz sim

USAGE:
    ytz sim [--games N] [--seed S] [--player NAME] [--config cfg.yaml] [--highscores PATH] [--events PATH]

OPTIONS:
    --games N            Number of games to play (default: 1)
    --seed S             Base dice seed; game g uses S+g (default: 0)
    --player NAME        Name recorded on the highscore board (default: ytz-bot)
    --config PATH        YAML config (default: built-in defaults)
    --highscores PATH    Highscore store (default: config highscores.path)
    --events PATH        Append NDJSON game events (default: config logging.events_path)
"#
                );
                return None;
            }
            "--games" => {
                let v = flag_value(args, i);
                games = v
                    .parse()
                    .unwrap_or_else(|_| fail(format!("Invalid --games value: {v}")));
                i += 2;
            }
            "--seed" => {
                let v = flag_value(args, i);
                seed = v
                    .parse()
                    .unwrap_or_else(|_| fail(format!("Invalid --seed value: {v}")));
                i += 2;
            }
            "--player" => {
                player = flag_value(args, i).to_string();
                i += 2;
            }
            "--config" => {
                config_path = Some(flag_value(args, i).to_string());
                i += 2;
            }
            "--highscores" => {
                highscores = Some(flag_value(args, i).to_string());
                i += 2;
            }
            "--events" => {
                events = Some(flag_value(args, i).to_string());
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `ytz sim`: {}", other);
                eprintln!("Run `ytz sim --help` for usage.");
                process::exit(1);
            }
        }
    }

    let config = load_config(config_path.as_deref());
    let highscores = PathBuf::from(highscores.unwrap_or_else(|| config.highscores.path.clone()));
    let events = events
        .or_else(|| config.logging.events_path.clone())
        .map(PathBuf::from);
    Some(SimOptions {
        games,
        seed,
        player,
        config,
        highscores,
        events,
    })
}

/// Event sink that degrades to a no-op after the first write failure.
struct EventLog {
    w: Option<NdjsonWriter>,
}

impl EventLog {
    fn open(path: Option<&PathBuf>, flush_every_lines: u64) -> Self {
        let w = path.and_then(|p| match NdjsonWriter::open_append_with_flush(p, flush_every_lines) {
            Ok(w) => Some(w),
            Err(e) => {
                eprintln!("warning: event log disabled ({}): {e}", p.display());
                None
            }
        });
        Self { w }
    }

    fn write<T: Serialize>(&mut self, ev: &T) {
        if let Some(w) = self.w.as_mut() {
            if let Err(e) = w.write_event(ev) {
                eprintln!("warning: event log disabled: {e}");
                self.w = None;
            }
        }
    }

    fn flush(&mut self) {
        if let Some(w) = self.w.as_mut() {
            if let Err(e) = w.flush() {
                eprintln!("warning: event log flush failed: {e}");
            }
        }
    }
}

#[derive(Default)]
struct SimStats {
    scores: Vec<u32>,
    upper_bonuses: u32,
    yahtzee_bonuses: u32,
}

fn play_game(
    game_id: u64,
    opts: &SimOptions,
    ledger: &mut HighscoreLedger,
    log: &mut EventLog,
    stats: &mut SimStats,
) {
    let mut session = GameSession::with_rerolls(opts.config.game.rerolls_allowed);
    let mut chance = ChanceMode::new_deterministic(opts.seed.wrapping_add(game_id));

    while !session.is_finished() {
        let t = autoplay::play_turn(&mut session, &mut chance)
            .unwrap_or_else(|e| fail(format!("game {game_id}: {e}")));

        for roll in t.rolls.iter().filter(|r| r.yahtzee_bonus_awarded) {
            stats.yahtzee_bonuses += 1;
            log.write(&BonusEventV1 {
                event: "bonus".to_string(),
                ts_ms: now_ms(),
                v: VersionInfoV1::default(),
                game_id,
                turn: t.turn,
                kind: "yahtzee".to_string(),
                points: YAHTZEE_BONUS,
                locked_out: roll.locked_out.iter().map(|c| c.name().to_string()).collect(),
            });
        }

        let points = match t.score.outcome {
            ScoreOutcome::Scored(p) => p,
            _ => 0,
        };
        log.write(&TurnScoredEventV1 {
            event: "turn_scored".to_string(),
            ts_ms: now_ms(),
            v: VersionInfoV1::default(),
            game_id,
            turn: t.turn,
            dice: t.dice,
            rerolls_used: t.rerolls_used,
            category: t.score.category.name().to_string(),
            points,
            scratched: t.scratched,
            total_score: session.total_score(),
        });

        if t.score.upper_bonus_awarded {
            stats.upper_bonuses += 1;
            log.write(&BonusEventV1 {
                event: "bonus".to_string(),
                ts_ms: now_ms(),
                v: VersionInfoV1::default(),
                game_id,
                turn: t.turn,
                kind: "upper".to_string(),
                points: UPPER_BONUS,
                locked_out: Vec::new(),
            });
        }
    }

    let card = session.scorecard();
    let total = session.total_score();
    let rank = ledger.record(HighscoreEntry::new(opts.player.clone(), total));
    if let Err(e) = ledger.save(&opts.highscores) {
        eprintln!(
            "warning: failed to save highscores to {}: {e}",
            opts.highscores.display()
        );
    }

    log.write(&GameCompletedEventV1 {
        event: "game_completed".to_string(),
        ts_ms: now_ms(),
        v: VersionInfoV1::default(),
        game_id,
        player: opts.player.clone(),
        upper_total: card.upper_total(),
        lower_total: card.lower_total(),
        bonus: card.bonus(),
        total_score: total,
        yahtzees: session.yahtzee_count(),
        highscore_rank: rank,
    });
    stats.scores.push(total);
}

fn print_board(ledger: &HighscoreLedger) {
    for (i, line) in ledger.display_lines().iter().enumerate() {
        println!("  {:>2}. {}", i + 1, line);
    }
}

fn cmd_sim(args: &[String]) {
    let Some(opts) = parse_sim_args(args) else {
        return;
    };

    let (mut ledger, warn) =
        HighscoreLedger::load_or_default(&opts.highscores, opts.config.highscores.capacity);
    if let Some(w) = warn {
        eprintln!("warning: {w}; starting with an empty board");
    }
    let mut log = EventLog::open(opts.events.as_ref(), opts.config.logging.flush_every_lines);

    let mut stats = SimStats::default();
    for g in 0..opts.games {
        play_game(g as u64, &opts, &mut ledger, &mut log, &mut stats);
    }
    log.flush();

    println!("Simulation:");
    println!("  - Games: {}", opts.games);
    if !stats.scores.is_empty() {
        let n = stats.scores.len() as f64;
        let mean = stats.scores.iter().map(|&s| s as f64).sum::<f64>() / n;
        let min = stats.scores.iter().min().copied().unwrap_or(0);
        let max = stats.scores.iter().max().copied().unwrap_or(0);
        println!("  - Score: mean={:.2}, min={}, max={}", mean, min, max);
        println!(
            "  - Upper bonus rate: {:.1}%",
            stats.upper_bonuses as f64 / n * 100.0
        );
        println!("  - Yahtzee bonuses: {}", stats.yahtzee_bonuses);
    }
    println!();
    println!("Highscores ({}):", opts.highscores.display());
    print_board(&ledger);
}

fn cmd_highscores(args: &[String]) {
    let mut config_path: Option<String> = None;
    let mut file: Option<String> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"ytz highscores

USAGE:
    ytz highscores [--config cfg.yaml] [--file PATH]

OPTIONS:
    --config PATH    YAML config (default: built-in defaults)
    --file PATH      Highscore store (default: config highscores.path)
"#
                );
                return;
            }
            "--config" => {
                config_path = Some(flag_value(args, i).to_string());
                i += 2;
            }
            "--file" => {
                file = Some(flag_value(args, i).to_string());
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `ytz highscores`: {}", other);
                eprintln!("Run `ytz highscores --help` for usage.");
                process::exit(1);
            }
        }
    }

    let config = load_config(config_path.as_deref());
    let path = PathBuf::from(file.unwrap_or_else(|| config.highscores.path.clone()));
    let ledger = HighscoreLedger::load(&path, config.highscores.capacity)
        .unwrap_or_else(|e| fail(format!("Failed to load {}: {e}", path.display())));
    println!("Highscores ({}):", path.display());
    print_board(&ledger);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_help();
        process::exit(0);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "-V" | "--version" => {
            print_version();
        }
        "score" => {
            cmd_score(&args[2..]);
        }
        "sim" => {
            cmd_sim(&args[2..]);
        }
        "highscores" => {
            cmd_highscores(&args[2..]);
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_help();
            process::exit(1);
        }
    }
}
