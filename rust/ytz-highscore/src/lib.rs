//! ytz-highscore: bounded, ranked highscore ledger + its plain-text store.

pub mod entry;
pub mod ledger;
pub mod store;

pub use entry::HighscoreEntry;
pub use ledger::{HighscoreLedger, DEFAULT_CAPACITY, EMPTY_SLOT, MAX_CAPACITY};
pub use store::LedgerError;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
