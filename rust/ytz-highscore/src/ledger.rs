//! In-memory ranked board.

use crate::entry::HighscoreEntry;

/// Board size used by the game.
pub const DEFAULT_CAPACITY: usize = 8;

/// Largest board a ledger will keep; bigger requests are clamped.
pub const MAX_CAPACITY: usize = 1000;

/// Placeholder shown for unused board slots.
pub const EMPTY_SLOT: &str = "No highscore";

/// Highest scores first, at most `capacity` entries.
///
/// Contract: insert, then evict the worst entry if over capacity. Entries with
/// equal scores keep insertion order (an older entry ranks above a newer one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighscoreLedger {
    entries: Vec<HighscoreEntry>,
    capacity: usize,
}

impl Default for HighscoreLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl HighscoreLedger {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// `capacity` is clamped to `MAX_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_CAPACITY);
        Self {
            entries: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY) + 1),
            capacity,
        }
    }

    /// Build a board by recording `entries` in order.
    pub fn from_entries<I: IntoIterator<Item = HighscoreEntry>>(entries: I, capacity: usize) -> Self {
        let mut ledger = Self::with_capacity(capacity);
        for e in entries {
            ledger.record(e);
        }
        ledger
    }

    /// Insert `entry` and drop whatever falls off the end.
    ///
    /// Returns the 0-based rank of the new entry, or `None` if it did not make
    /// the board.
    pub fn record(&mut self, entry: HighscoreEntry) -> Option<usize> {
        let rank = self
            .entries
            .partition_point(|e| e.score() >= entry.score());
        if rank >= self.capacity {
            return None;
        }
        self.entries.insert(rank, entry);
        self.entries.truncate(self.capacity);
        Some(rank)
    }

    /// Whether a game scoring `score` would make the board right now.
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.partition_point(|e| e.score() >= score) < self.capacity
    }

    /// Ranked entries, best first.
    pub fn entries(&self) -> &[HighscoreEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HighscoreEntry> {
        self.entries.iter()
    }

    pub fn best(&self) -> Option<&HighscoreEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// One line per board slot, padded with `EMPTY_SLOT` up to capacity.
    pub fn display_lines(&self) -> Vec<String> {
        (0..self.capacity)
            .map(|i| match self.entries.get(i) {
                Some(e) => e.to_string(),
                None => EMPTY_SLOT.to_string(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a HighscoreLedger {
    type Item = &'a HighscoreEntry;
    type IntoIter = std::slice::Iter<'a, HighscoreEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
