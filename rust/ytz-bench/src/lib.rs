//! Shared fixtures for the criterion benches.

use ytz_core::{categories_in, ChanceMode, GameSession};
use ytz_highscore::{HighscoreEntry, HighscoreLedger};

fn xorshift(x: &mut u64) -> u64 {
    *x ^= *x << 13;
    *x ^= *x >> 7;
    *x ^= *x << 17;
    *x
}

/// Deterministic pseudo-random rolls, no rand dependency.
pub fn gen_dice_samples(n: usize) -> Vec<[u8; 5]> {
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    (0..n)
        .map(|_| {
            let mut d = [0u8; 5];
            for v in d.iter_mut() {
                *v = (xorshift(&mut x) % 6) as u8 + 1;
            }
            d
        })
        .collect()
}

/// Deterministic final scores in the range a real game produces.
pub fn gen_scores(n: usize) -> Vec<u32> {
    let mut x: u64 = 0x0DDB_1A5E_5BAD_5EED;
    (0..n).map(|_| (xorshift(&mut x) % 400) as u32).collect()
}

/// A full board of `capacity` entries.
pub fn full_ledger(capacity: usize) -> HighscoreLedger {
    HighscoreLedger::from_entries(
        gen_scores(capacity)
            .into_iter()
            .enumerate()
            .map(|(i, s)| HighscoreEntry::new(format!("player{i}"), s)),
        capacity,
    )
}

/// Play one full game, always filling the last enabled category.
///
/// Panics if the session rejects a move; a bench must not time a broken game.
pub fn play_fill_last(seed: u64) -> u32 {
    let mut s = GameSession::new();
    let mut chance = ChanceMode::new_deterministic(seed);
    while !s.is_finished() {
        let dice = chance.initial_roll(s.turn_idx());
        s.begin_turn(dice).expect("begin_turn");
        let cat = categories_in(s.enabled_mask())
            .last()
            .expect("an enabled category");
        let mut r = s.score(cat).expect("score");
        if !r.outcome.is_scored() {
            r = s.scratch(cat).expect("scratch");
        }
        assert!(r.outcome.is_scored(), "turn {} did not fill {cat}", s.turn());
    }
    s.total_score()
}
