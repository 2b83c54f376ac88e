//! Dice generation for headless shells and tests.
//!
//! Rolling dice is the shell's job; the rules never draw randomness. Two
//! reproducible generators are provided so shells do not each hand-roll one:
//!
//! - event-keyed: dice are a pure function of (game_seed, turn_idx, roll_idx),
//!   so the same game replays identically regardless of earlier choices.
//! - rng: a seeded ChaCha8 stream.
//!
//! Keep masks are positional: bit `i` set keeps `dice[i]`. Kept dice never move.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

/// Keep-all mask for five dice.
pub const KEEP_ALL: u8 = 0b1_1111;

/// Structural event key for deterministic dice generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventKey {
    pub game_seed: u64,
    /// 0-based turn index (0..13).
    pub turn_idx: u8,
    /// 0 for the opening roll, then 1.. for rerolls.
    pub roll_idx: u8,
}

/// SplitMix64 step (fast, deterministic).
fn splitmix64_next(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

fn mix_seed(key: EventKey) -> u64 {
    // Fixed mixing; std Hash/RandomState is not stable across runs.
    let mut x = key.game_seed;
    x ^= (key.turn_idx as u64).wrapping_mul(0xA5A35625E4F7C1AD);
    x ^= (key.roll_idx as u64).wrapping_mul(0xD6E8FEB86659FD93);
    let mut s = x;
    splitmix64_next(&mut s)
}

/// Deterministically generate 5 dice for the given event key.
pub fn roll5(key: EventKey) -> [u8; 5] {
    let mut state = mix_seed(key);
    let mut out = [0u8; 5];
    for o in &mut out {
        let r = splitmix64_next(&mut state);
        *o = ((r % 6) + 1) as u8;
    }
    out
}

/// Replace the dice not kept by `keep_mask` with successive values from `draws`.
///
/// Which physical die gets rerolled does not change the draw it receives,
/// only how many dice are rerolled does.
pub fn apply_keepmask(prev: [u8; 5], keep_mask: u8, draws: [u8; 5]) -> [u8; 5] {
    assert!(keep_mask <= KEEP_ALL, "keep_mask out of range: {}", keep_mask);
    let mut next = prev;
    let mut j = 0usize;
    for (i, die) in next.iter_mut().enumerate() {
        if keep_mask & (1u8 << i) == 0 {
            *die = draws[j];
            j += 1;
        }
    }
    next
}

/// How dice are generated.
pub enum ChanceMode {
    /// Event-keyed stream; requires a game seed.
    DeterministicEventKeyed { game_seed: u64 },
    /// Pseudorandom dice stream backed by a small PRNG.
    Rng { rng: Box<ChaCha8Rng> },
}

impl ChanceMode {
    pub fn new_deterministic(game_seed: u64) -> Self {
        ChanceMode::DeterministicEventKeyed { game_seed }
    }

    pub fn new_rng(seed: u64) -> Self {
        ChanceMode::Rng {
            rng: Box::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    fn draw5(&mut self, turn_idx: u8, roll_idx: u8) -> [u8; 5] {
        match self {
            ChanceMode::DeterministicEventKeyed { game_seed } => roll5(EventKey {
                game_seed: *game_seed,
                turn_idx,
                roll_idx,
            }),
            ChanceMode::Rng { rng } => {
                let mut out = [0u8; 5];
                for o in &mut out {
                    *o = rng.gen_range(1..=6);
                }
                out
            }
        }
    }

    /// Opening roll of a turn (all five dice).
    pub fn initial_roll(&mut self, turn_idx: u8) -> [u8; 5] {
        self.draw5(turn_idx, 0)
    }

    /// Reroll every die not kept by `keep_mask`.
    pub fn reroll(&mut self, prev: [u8; 5], keep_mask: u8, turn_idx: u8, roll_idx: u8) -> [u8; 5] {
        if keep_mask == KEEP_ALL {
            return prev;
        }
        let draws = self.draw5(turn_idx, roll_idx);
        apply_keepmask(prev, keep_mask, draws)
    }
}
