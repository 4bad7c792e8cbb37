//! Progress derivation
//!
//! The single place that computes `progress`, `status` and `currentPage`
//! from a book's page count and its session ledger. Every caller that
//! mutates a ledger goes through here; nothing else writes derived fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::book::Session;

/// Reading status of a book, derived from its progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingStatus {
    ToRead,
    Reading,
    Completed,
}

impl ReadingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::ToRead => "to-read",
            ReadingStatus::Reading => "reading",
            ReadingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to-read" => Ok(ReadingStatus::ToRead),
            "reading" => Ok(ReadingStatus::Reading),
            "completed" => Ok(ReadingStatus::Completed),
            _ => Err(()),
        }
    }
}

/// Fields recomputed from the session ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derived {
    pub progress: i32,
    pub status: ReadingStatus,
    pub current_page: i32,
}

/// Compute derived fields from a book's total page count and its sessions.
///
/// An unknown page count (`total_pages == 0`) or an empty ledger never
/// yields nonzero progress. Page ranges are assumed valid; callers reject
/// malformed input before invoking (see `ledger`).
pub fn derive(total_pages: i32, sessions: &[Session]) -> Derived {
    if total_pages <= 0 || sessions.is_empty() {
        return Derived {
            progress: 0,
            status: ReadingStatus::ToRead,
            current_page: 0,
        };
    }

    // Highest end page across all sessions, not the sum of ranges:
    // re-reading a chapter must not inflate progress.
    let current_page = sessions.iter().map(|s| s.end_page).max().unwrap_or(0);
    let progress =
        ((current_page as f64 / total_pages as f64 * 100.0).round() as i32).min(100);

    Derived {
        progress,
        status: status_for(progress),
        current_page,
    }
}

/// Map a progress percentage to a reading status.
pub fn status_for(progress: i32) -> ReadingStatus {
    match progress {
        0 => ReadingStatus::ToRead,
        100 => ReadingStatus::Completed,
        _ => ReadingStatus::Reading,
    }
}
