//! Page/Line Calculator module
//!
//! Measures how much of the mushaf (in pages and lines) or of the Iqra
//! primer (in pages) a recitation range covers.
//!
//! Every public entry point returns a [`CalculationResult`]; malformed input,
//! unknown surahs and out-of-range verses yield an invalid result instead of
//! an error. Use the `try_` variants to learn why a range was rejected.
//!
//! # Example
//!
//! ```rust
//! use tahfizh_range::{CalcOptions, LocationRegistry, RangeCalculator};
//!
//! let calculator = RangeCalculator::new(LocationRegistry::shared(), CalcOptions::default());
//! let result = calculator.calculate_str("An-Naba: 1 - An-Naba: 10");
//! assert!(result.valid);
//! assert_eq!((result.pages, result.lines), (0, 5));
//! ```

// Submodules
mod iqra;
mod quran;
mod types;

// Re-export public API
pub use types::{
    split_lines, CalcError, CalcOptions, CalcOptionsBuilder, CalculationResult, Result,
    MIN_LINES_PER_PAGE,
};

use crate::range::{NormalizedRange, RangeEndpoint, RangeNormalizer};
use crate::registry::LocationRegistry;
use tracing::debug;

/// Range calculator bound to a registry and explicit options
#[derive(Debug, Clone, Copy)]
pub struct RangeCalculator<'a> {
    registry: &'a LocationRegistry,
    options: CalcOptions,
}

impl<'a> RangeCalculator<'a> {
    /// Create a calculator
    pub fn new(registry: &'a LocationRegistry, options: CalcOptions) -> Self {
        Self { registry, options }
    }

    /// Options in use
    pub fn options(&self) -> &CalcOptions {
        &self.options
    }

    /// Normalizer over the same registry
    pub fn normalizer(&self) -> RangeNormalizer<'a> {
        RangeNormalizer::new(self.registry)
    }

    /// Measure a range given as two endpoints in either order
    pub fn calculate(&self, from: &RangeEndpoint, to: &RangeEndpoint) -> CalculationResult {
        Self::or_invalid(self.try_calculate(from, to))
    }

    /// Measure a compact range string such as `"An-Naba: 1 - An-Naba: 10"`
    pub fn calculate_str(&self, text: &str) -> CalculationResult {
        Self::or_invalid(self.try_calculate_str(text))
    }

    /// Measure a range from four raw form fields
    pub fn calculate_fields(
        &self,
        from_name: &str,
        from_number: &str,
        to_name: &str,
        to_number: &str,
    ) -> CalculationResult {
        Self::or_invalid(
            self.normalizer()
                .normalize_fields(from_name, from_number, to_name, to_number)
                .map_err(CalcError::from)
                .and_then(|range| self.try_calculate_normalized(&range)),
        )
    }

    /// Measure an already normalized range
    pub fn calculate_normalized(&self, range: &NormalizedRange) -> CalculationResult {
        Self::or_invalid(self.try_calculate_normalized(range))
    }

    /// Like [`calculate`](Self::calculate), keeping the rejection reason
    pub fn try_calculate(&self, from: &RangeEndpoint, to: &RangeEndpoint) -> Result<CalculationResult> {
        let range = self.normalizer().normalize(from, to)?;
        self.try_calculate_normalized(&range)
    }

    /// Like [`calculate_str`](Self::calculate_str), keeping the rejection reason
    pub fn try_calculate_str(&self, text: &str) -> Result<CalculationResult> {
        let range = self.normalizer().normalize_str(text)?;
        self.try_calculate_normalized(&range)
    }

    /// Like [`calculate_normalized`](Self::calculate_normalized), keeping the rejection reason
    pub fn try_calculate_normalized(&self, range: &NormalizedRange) -> Result<CalculationResult> {
        match (range.start(), range.end()) {
            (
                RangeEndpoint::Quran { surah: from_surah, verse: from_verse },
                RangeEndpoint::Quran { surah: to_surah, verse: to_verse },
            ) => quran::quran_lines(
                self.registry,
                (from_surah.as_str(), *from_verse),
                (to_surah.as_str(), *to_verse),
                &self.options,
            ),
            (
                RangeEndpoint::Iqra { volume: from_volume, page: from_page },
                RangeEndpoint::Iqra { volume: to_volume, page: to_page },
            ) => iqra::iqra_pages(
                self.registry,
                (*from_volume, *from_page),
                (*to_volume, *to_page),
            ),
            _ => Err(crate::range::RangeError::MixedKinds.into()),
        }
    }

    fn or_invalid(result: Result<CalculationResult>) -> CalculationResult {
        result.unwrap_or_else(|e| {
            debug!("range rejected: {}", e);
            CalculationResult::invalid()
        })
    }
}
