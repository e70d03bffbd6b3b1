//! Append-only CSV session log
//!
//! One row per finished game. Best effort: the caller shows a warning on
//! failure and keeps playing, the game never aborts over the log.
//!
//! Columns: timestamp, both names as typed, the elimination count, the
//! surviving letter, and the category word. The header is written only when
//! the file is new or empty.

use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::game::Outcome;

const HEADER: &str = "timestamp,name1,name2,remaining_count,result_letter,result_word";

/// Session log failures. Surfaced as a warning, never fatal.
#[derive(Debug, Error)]
pub enum SessionLogError {
    #[error("could not write session log: {0}")]
    Io(#[from] std::io::Error),
}

/// One finished game, as it goes into the log.
#[derive(Clone, Debug)]
pub struct SessionRecord {
    pub timestamp: DateTime<Local>,
    pub name1: String,
    pub name2: String,
    pub remaining_count: usize,
    pub result_letter: char,
    pub result_word: String,
}

impl SessionRecord {
    /// Build a record from the names as typed and a finished game.
    pub fn from_outcome(name1: &str, name2: &str, outcome: &Outcome) -> Self {
        SessionRecord {
            timestamp: Local::now(),
            name1: name1.trim().to_string(),
            name2: name2.trim().to_string(),
            remaining_count: outcome.remaining,
            result_letter: outcome.category.letter(),
            result_word: outcome.category.label().to_string(),
        }
    }
}

/// Appends finished games to a CSV file.
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header first when the file is new.
    pub fn append(&self, record: &SessionRecord) -> Result<(), SessionLogError> {
        let needs_header = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if needs_header {
            writeln!(file, "{}", HEADER)?;
        }

        writeln!(
            file,
            "{},{},{},{},{},{}",
            record.timestamp.to_rfc3339(),
            csv_field(&record.name1),
            csv_field(&record.name2),
            record.remaining_count,
            record.result_letter,
            csv_field(&record.result_word)
        )?;

        debug!(path = %self.path.display(), "session record appended");
        Ok(())
    }
}

/// Quote a field when it would break the row, doubling inner quotes.
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
