//! ytz-core: Yahtzee rules, scoring, scorecard, game sessions, and configuration.

pub mod category;
pub mod chance;
pub mod config;
pub mod mask;
pub mod scorecard;
pub mod scoring;
pub mod session;

pub use category::{Category, Section, CAT_NAMES, NUM_CATS, NUM_UPPER};
pub use chance::{apply_keepmask, roll5, ChanceMode, EventKey, KEEP_ALL};
pub use config::{Config, ConfigError, MAX_HIGHSCORE_CAPACITY};
pub use mask::{bit_for_cat, categories_in, is_set, mask_of, to_u8_array, CategoryMask, FULL_MASK};
pub use scorecard::{
    ScoreOutcome, Scorecard, UPPER_BONUS, UPPER_BONUS_THRESHOLD, YAHTZEE_BONUS,
};
pub use scoring::{
    eligibility_mask, face_counts, is_eligible, longest_run, potential_score, scores_for_dice,
};
pub use session::{
    GameSession, RollReport, ScoreReport, SessionError, DEFAULT_REROLLS, MAX_TURNS,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}

#[cfg(test)]
mod chance_tests;
#[cfg(test)]
mod scorecard_tests;
