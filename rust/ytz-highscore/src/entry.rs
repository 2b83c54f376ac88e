use std::fmt;

/// One finished game on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HighscoreEntry {
    player: String,
    score: u32,
}

impl HighscoreEntry {
    /// Line breaks in `player` are replaced with spaces so every entry stays
    /// on one line of the store.
    pub fn new(player: impl Into<String>, score: u32) -> Self {
        let mut player = player.into();
        if player.contains(['\n', '\r']) {
            player = player.replace(['\n', '\r'], " ");
        }
        Self { player, score }
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl fmt::Display for HighscoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}   -   {}", self.player, self.score)
    }
}
