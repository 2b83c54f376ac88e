//! ytz-logging: NDJSON game event logs.
//!
//! Append-only, one JSON object per line, so a log truncated by a crash is
//! still readable up to the last complete line.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event schema version.
pub const EVENT_SCHEMA_VERSION: u32 = 1;

/// Ruleset id stamped on every event.
pub const RULESET_ID: &str = "yahtzee_13cat_joker_lockout_v1";

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionInfoV1 {
    pub event_schema_version: u32,
    pub ruleset_id: String,
}

impl Default for VersionInfoV1 {
    fn default() -> Self {
        Self {
            event_schema_version: EVENT_SCHEMA_VERSION,
            ruleset_id: RULESET_ID.to_string(),
        }
    }
}

/// A category was filled (scored or scratched).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnScoredEventV1 {
    pub event: String,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub game_id: u64,
    pub turn: u8,
    pub dice: [u8; 5],
    pub rerolls_used: u8,
    pub category: String,
    pub points: u32,
    pub scratched: bool,
    pub total_score: u32,
}

/// A bonus was credited ("upper" or "yahtzee").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusEventV1 {
    pub event: String,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub game_id: u64,
    pub turn: u8,
    pub kind: String,
    pub points: u32,
    /// Categories disabled by the joker rule on this roll.
    #[serde(default)]
    pub locked_out: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameCompletedEventV1 {
    pub event: String,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub game_id: u64,
    pub player: String,
    pub upper_total: u32,
    pub lower_total: u32,
    pub bonus: u32,
    pub total_score: u32,
    pub yahtzees: u32,
    /// 0-based board rank, if the score made the highscore board.
    pub highscore_rank: Option<usize>,
}

#[derive(Debug, Error)]
pub enum NdjsonError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

/// Read every complete JSON line of an NDJSON file, skipping unparsable ones.
pub fn read_ndjson_lenient(path: impl AsRef<Path>) -> Result<Vec<serde_json::Value>, NdjsonError> {
    let s = std::fs::read_to_string(path)?;
    Ok(s.lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect())
}
