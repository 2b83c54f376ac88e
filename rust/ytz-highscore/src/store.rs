//! Plain-text highscore store.
//!
//! Format: one `<name>-<score>` record per line, best first, no header. The
//! score is everything after the last hyphen, so names may contain hyphens.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::entry::HighscoreEntry;
use crate::ledger::HighscoreLedger;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {msg}: {text:?}")]
    Parse {
        line: usize,
        msg: &'static str,
        text: String,
    },
}

fn parse_line(line_no: usize, line: &str) -> Result<HighscoreEntry, LedgerError> {
    let bad = |msg: &'static str| LedgerError::Parse {
        line: line_no,
        msg,
        text: line.to_string(),
    };
    let (name, score) = line.rsplit_once('-').ok_or_else(|| bad("missing '-' separator"))?;
    let score = score
        .trim()
        .parse::<u32>()
        .map_err(|_| bad("score is not a non-negative integer"))?;
    Ok(HighscoreEntry::new(name, score))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(".tmp");
    PathBuf::from(s)
}

impl HighscoreLedger {
    /// Parse store text. Blank lines are skipped; records need not be sorted.
    pub fn parse(text: &str, capacity: usize) -> Result<Self, LedgerError> {
        let mut ledger = Self::with_capacity(capacity);
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            ledger.record(parse_line(i + 1, line)?);
        }
        Ok(ledger)
    }

    /// Serialize in ranked order, one record per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for e in self {
            out.push_str(e.player());
            out.push('-');
            out.push_str(&e.score().to_string());
            out.push('\n');
        }
        out
    }

    /// Load a board; a missing or empty file is an empty board.
    pub fn load(path: impl AsRef<Path>, capacity: usize) -> Result<Self, LedgerError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, capacity),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::with_capacity(capacity)),
            Err(e) => Err(e.into()),
        }
    }

    /// Load a board, falling back to an empty one on any failure.
    ///
    /// The second element explains the fallback so the caller can warn.
    pub fn load_or_default(path: impl AsRef<Path>, capacity: usize) -> (Self, Option<String>) {
        let path = path.as_ref();
        match Self::load(path, capacity) {
            Ok(ledger) => (ledger, None),
            Err(e) => (
                Self::with_capacity(capacity),
                Some(format!("Failed to load {}: {e}", path.display())),
            ),
        }
    }

    /// Overwrite `path` with this board (tmp file + rename).
    ///
    /// The in-memory board is untouched whatever happens on disk.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LedgerError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = tmp_path(path);
        fs::write(&tmp, self.to_text())?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}
