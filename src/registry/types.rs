//! Location Registry core types
//!
//! Contains the lookup-table rows, ordering keys and errors shared by the
//! Quran and Iqra numbering spaces.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

// ============================================================
// Constants
// ============================================================

/// Lines on one mushaf page under the assumed 15-line convention
pub const LINES_PER_PAGE: u32 = 15;

/// Number of pages in the mushaf
pub const MUSHAF_PAGE_COUNT: u32 = 604;

/// Number of surahs
pub const SURAH_COUNT: u16 = 114;

/// Number of Iqra primer volumes
pub const IQRA_VOLUME_COUNT: usize = 6;

/// Default page count of each Iqra volume (volume 1 first)
pub const DEFAULT_IQRA_VOLUME_PAGES: [u32; IQRA_VOLUME_COUNT] = [31, 30, 30, 30, 30, 30];

/// Default Jaro-Winkler score required before a surah name is suggested
pub const DEFAULT_SUGGESTION_THRESHOLD: f64 = 0.85;

// ============================================================
// Error Types
// ============================================================

/// Registry lookup and construction errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown surah: {name}")]
    UnknownSurah {
        name: String,
        /// Closest known surah name, if one is similar enough
        suggestion: Option<&'static str>,
    },

    #[error("Verse {verse} is outside {surah} (1-{max})")]
    VerseOutOfRange { surah: String, verse: u32, max: u32 },

    #[error("No page entry for {surah}: {verse}")]
    VerseNotMapped { surah: String, verse: u32 },

    #[error("Iqra volume out of range: {0}")]
    IqraVolumeOutOfRange(u32),

    #[error("Iqra page out of range: {0}")]
    IqraPageOutOfRange(u32),

    #[error("Invalid location table: {0}")]
    InvalidTable(String),

    #[error("Location table not found: {0}")]
    TableNotFound(PathBuf),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RegistryError {
    /// Suggested surah name for an unknown-surah error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            RegistryError::UnknownSurah { suggestion, .. } => *suggestion,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

// ============================================================
// Core Data Structures
// ============================================================

/// Static metadata for one surah
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurahInfo {
    /// Position in recitation order (1-114)
    pub number: u16,
    /// Canonical display name
    pub name: &'static str,
    /// Number of verses
    pub verses: u32,
    /// Mushaf page the surah starts on
    pub start_page: u32,
    /// Alternate spellings accepted on input
    pub aliases: &'static [&'static str],
}

impl SurahInfo {
    /// Check whether a verse number exists in this surah
    pub fn contains_verse(&self, verse: u32) -> bool {
        (1..=self.verses).contains(&verse)
    }
}

/// One row of the Quran location table: a run of verses of one surah
/// printed on one mushaf page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntry {
    /// Surah name as written in the table
    pub surah: String,
    /// First verse of the run
    pub start_verse: u32,
    /// Last verse of the run (inclusive)
    pub end_verse: u32,
    /// Mushaf page
    pub page: u32,
    /// Surah number, filled in by the registry
    #[serde(default, skip_serializing_if = "is_zero")]
    pub surah_number: u16,
}

fn is_zero(n: &u16) -> bool {
    *n == 0
}

impl LocationEntry {
    /// Create a table row
    pub fn new(surah: impl Into<String>, start_verse: u32, end_verse: u32, page: u32) -> Self {
        Self {
            surah: surah.into(),
            start_verse,
            end_verse,
            page,
            surah_number: 0,
        }
    }

    /// Number of verses in this run
    pub fn verse_count(&self) -> u32 {
        self.end_verse + 1 - self.start_verse
    }

    /// Check whether this run holds the verse
    pub fn contains(&self, verse: u32) -> bool {
        verse >= self.start_verse && verse <= self.end_verse
    }
}

/// One row of the Iqra table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IqraLocationEntry {
    /// Volume number (1-6)
    pub volume: u32,
    /// Pages printed in this volume
    pub pages_in_volume: u32,
}

/// Recitation-order key of a Quran verse.
///
/// Field order matters: the derived `Ord` compares page first, then surah,
/// then verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuranPosition {
    pub page: u32,
    pub surah: u16,
    pub verse: u32,
}

/// Where a verse sits inside its mushaf page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpan {
    /// Mushaf page
    pub page: u32,
    /// 1-based index of the verse in the page's verse sequence
    pub offset: u32,
    /// Verses printed on the page
    pub total: u32,
}
