//! tahfizh-range - Quran and Iqra recitation range calculator
//!
//! Measures how much a student recited or memorized in one session, given
//! the start and end points written on the report form.
//!
//! # Components
//!
//! - [`LocationRegistry`]: surah/verse to mushaf page, Iqra volume/page to absolute page
//! - [`RangeNormalizer`]: parses and orders endpoints, detects Quran vs Iqra
//! - [`RangeCalculator`]: pages and lines covered, with per-page interpolation
//! - [`ResultFormatter`]: "N Halaman M Baris" / "N Hal" display strings
//!
//! All lookups are pure reads over immutable tables; a registry can be
//! shared across threads without locking.
//!
//! # Example
//!
//! ```rust
//! use tahfizh_range::{CalcOptions, LocationRegistry, RangeCalculator, ResultFormatter};
//!
//! let calculator = RangeCalculator::new(LocationRegistry::shared(), CalcOptions::default());
//! let result = calculator.calculate_fields("An-Nazi'at", "5", "An-Naba", "1");
//! assert_eq!(ResultFormatter::default().format(&result), "1 Halaman 9 Baris");
//!
//! let iqra = calculator.calculate_str("Iqra' 1: 10 - Iqra' 2: 5");
//! assert_eq!(ResultFormatter::compact().format(&iqra), "27 Hal");
//! ```

pub mod calc;
pub mod config;
pub mod format;
pub mod range;
pub mod registry;

// Calculator
pub use calc::{
    split_lines, CalcError, CalcOptions, CalcOptionsBuilder, CalculationResult, RangeCalculator,
};

// Config
pub use config::{CalcConfig, Config, ConfigError, FormatConfig, RegistryConfig};

// Formatting
pub use format::{FormatStyle, ResultFormatter, INVALID_PLACEHOLDER};

// Range normalization
pub use range::{
    endpoint_from_fields, parse_endpoint, parse_range, render_range, NormalizedRange,
    RangeEndpoint, RangeError, RangeKind, RangeNormalizer,
};

// Location registry
pub use registry::{
    normalize_name, IqraLocationEntry, IqraTable, LocationEntry, LocationRegistry, PageSpan,
    QuranPosition, RegistryError, SurahInfo, LINES_PER_PAGE, MUSHAF_PAGE_COUNT,
};
