//! Calculator core types

use crate::range::{RangeError, RangeKind};
use crate::registry::{RegistryError, LINES_PER_PAGE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================
// Constants
// ============================================================

/// Smallest accepted lines-per-page setting
pub const MIN_LINES_PER_PAGE: u32 = 1;

// ============================================================
// Error Types
// ============================================================

/// Reasons a range yields no counts
#[derive(Debug, Error)]
pub enum CalcError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Range ends on page {end} before it starts on page {start}")]
    ReversedPages { start: u32, end: u32 },

    #[error("Range ends at verse offset {end} before offset {start} on page {page}")]
    ReversedVerses { page: u32, start: u32, end: u32 },
}

pub type Result<T> = std::result::Result<T, CalcError>;

// ============================================================
// Core Data Structures
// ============================================================

/// Counts covered by one recitation range.
///
/// `total_lines` is the unrounded line count; `pages` and `lines` are its
/// whole-page and remainder split. Iqra results never carry lines.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub valid: bool,
    pub pages: u32,
    pub lines: u32,
    pub total_lines: f64,
    pub is_iqra: bool,
}

impl CalculationResult {
    /// Result for a range that could not be measured
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Quran result from an unrounded line count
    pub fn quran(total_lines: f64, lines_per_page: u32) -> Self {
        let (pages, lines) = split_lines(total_lines, lines_per_page);
        Self {
            valid: true,
            pages,
            lines,
            total_lines,
            is_iqra: false,
        }
    }

    /// Iqra result from a page count
    pub fn iqra(pages: u32) -> Self {
        Self {
            valid: true,
            pages,
            lines: 0,
            total_lines: 0.0,
            is_iqra: true,
        }
    }

    /// Numbering space of the result
    pub fn kind(&self) -> RangeKind {
        if self.is_iqra {
            RangeKind::Iqra
        } else {
            RangeKind::Quran
        }
    }

    /// Serialize to JSON for storage alongside the range string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Split a real line count into whole pages and rounded remainder lines.
///
/// A remainder that rounds up to a full page is carried into `pages`.
pub fn split_lines(total_lines: f64, lines_per_page: u32) -> (u32, u32) {
    if !total_lines.is_finite() || total_lines <= 0.0 {
        return (0, 0);
    }

    let per_page = f64::from(lines_per_page.max(MIN_LINES_PER_PAGE));
    let mut pages = (total_lines / per_page).floor();
    let mut lines = (total_lines - pages * per_page).round();
    if lines >= per_page {
        pages += 1.0;
        lines = 0.0;
    }

    (pages as u32, lines as u32)
}

// ============================================================
// Options
// ============================================================

/// Calculator options, passed explicitly into every calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcOptions {
    /// Lines printed on one mushaf page
    pub lines_per_page: u32,
}

impl Default for CalcOptions {
    fn default() -> Self {
        Self {
            lines_per_page: LINES_PER_PAGE,
        }
    }
}

impl CalcOptions {
    /// Create a new options builder
    pub fn builder() -> CalcOptionsBuilder {
        CalcOptionsBuilder::default()
    }
}

/// Builder for CalcOptions
#[derive(Debug, Default)]
pub struct CalcOptionsBuilder {
    options: CalcOptions,
}

impl CalcOptionsBuilder {
    /// Set lines per page (at least 1)
    #[must_use]
    pub fn lines_per_page(mut self, lines: u32) -> Self {
        self.options.lines_per_page = lines.max(MIN_LINES_PER_PAGE);
        self
    }

    /// Build the options
    #[must_use]
    pub fn build(self) -> CalcOptions {
        self.options
    }
}
