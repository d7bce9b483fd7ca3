//! Range Normalizer module
//!
//! Turns raw form input or stored compact strings into an ordered pair of
//! endpoints of one kind (Quran or Iqra).
//!
//! # Example
//!
//! ```rust
//! use tahfizh_range::{LocationRegistry, RangeNormalizer};
//!
//! let normalizer = RangeNormalizer::new(LocationRegistry::shared());
//! let range = normalizer.normalize_str("An-Nazi'at: 5 - an naba: 1").unwrap();
//! assert_eq!(range.to_string(), "An-Naba: 1 - An-Nazi'at: 5");
//! ```

// Submodules
mod codec;
mod normalize;
mod types;

// Re-export public API
pub use codec::{
    endpoint_from_fields, is_iqra_label, parse_endpoint, parse_range, render_endpoint,
    render_range,
};
pub use normalize::RangeNormalizer;
pub use types::{
    NormalizedRange, RangeEndpoint, RangeError, RangeKind, Result, IQRA_LABEL, IQRA_MARKERS,
    MISSING_SEGMENT,
};
