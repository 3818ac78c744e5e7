use serde::{Deserialize, Serialize};

use crate::engine::RoundStatus;
use crate::game::Game;
use crate::player::Position;

/// Snapshot of one seat at hand end.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatSummary {
    pub position: Position,
    pub is_human: bool,
    pub stack: u32,
    pub has_folded: bool,
}

/// Record of a finished hand: the encoded move history, the seat states,
/// and how the round ended. Serialized to JSONL for export; the engine
/// never reads these back.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// RNG seed the table was generated from, when one was used
    pub seed: Option<u64>,
    /// Compact move-history encoding, e.g. "cr0fa"
    pub moves: String,
    /// Final state of all six seats, in position order
    pub seats: Vec<SeatSummary>,
    /// Terminal status the round ended in
    pub outcome: RoundStatus,
    /// Whether an all-in occurred during the hand
    pub all_in: bool,
    /// Timestamp when the hand was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl HandRecord {
    /// Summarize a finished round.
    pub fn from_round(hand_id: String, game: &Game, outcome: RoundStatus) -> Self {
        Self {
            hand_id,
            seed: game.seed(),
            moves: game.moves().encoded(),
            seats: game
                .seats()
                .iter()
                .map(|s| SeatSummary {
                    position: s.position(),
                    is_human: s.is_human(),
                    stack: s.stack(),
                    has_folded: s.has_folded(),
                })
                .collect(),
            outcome,
            all_in: game.has_all_in(),
            ts: None,
            meta: None,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends one JSON object per hand to a record file, LF line endings only.
pub struct HandLogger {
    writer: Option<BufWriter<std::fs::File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
