//! Result formatting for report screens and printouts.
//!
//! Quran results show pages and lines together ("2 Halaman 7 Baris" or
//! "2H 7B"); Iqra results show pages only. Invalid results render as a
//! fixed placeholder.

use crate::calc::CalculationResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for a result that could not be calculated
pub const INVALID_PLACEHOLDER: &str = "-";

/// Display convention for counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// "2H 7B" / "12 Hal"
    Compact,
    /// "2 Halaman 7 Baris" / "12 Halaman"
    #[default]
    Long,
}

impl FormatStyle {
    /// Page unit label
    pub fn page_label(&self) -> &'static str {
        match self {
            FormatStyle::Compact => "H",
            FormatStyle::Long => "Halaman",
        }
    }

    /// Line unit label
    pub fn line_label(&self) -> &'static str {
        match self {
            FormatStyle::Compact => "B",
            FormatStyle::Long => "Baris",
        }
    }

    /// Iqra page unit label
    pub fn iqra_page_label(&self) -> &'static str {
        match self {
            FormatStyle::Compact => "Hal",
            FormatStyle::Long => "Halaman",
        }
    }
}

/// Renders calculation results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFormatter {
    style: FormatStyle,
    placeholder: String,
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(FormatStyle::default())
    }
}

impl ResultFormatter {
    /// Create a formatter with the default placeholder
    pub fn new(style: FormatStyle) -> Self {
        Self {
            style,
            placeholder: INVALID_PLACEHOLDER.to_string(),
        }
    }

    /// Compact formatter
    pub fn compact() -> Self {
        Self::new(FormatStyle::Compact)
    }

    /// Replace the placeholder; an empty one falls back to `"-"`
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        if !placeholder.trim().is_empty() {
            self.placeholder = placeholder;
        }
        self
    }

    /// Style in use
    pub fn style(&self) -> FormatStyle {
        self.style
    }

    /// Render a result
    pub fn format(&self, result: &CalculationResult) -> String {
        if !result.valid {
            return self.placeholder.clone();
        }
        if result.is_iqra {
            return self.format_iqra(result.pages);
        }
        self.format_quran(result.pages, result.lines)
    }

    /// Render Quran counts
    pub fn format_quran(&self, pages: u32, lines: u32) -> String {
        match self.style {
            FormatStyle::Compact => format!(
                "{}{} {}{}",
                pages,
                self.style.page_label(),
                lines,
                self.style.line_label()
            ),
            FormatStyle::Long => format!(
                "{} {} {} {}",
                pages,
                self.style.page_label(),
                lines,
                self.style.line_label()
            ),
        }
    }

    /// Render Iqra counts
    pub fn format_iqra(&self, pages: u32) -> String {
        format!("{} {}", pages, self.style.iqra_page_label())
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ResultFormatter::default().format(self))
    }
}
