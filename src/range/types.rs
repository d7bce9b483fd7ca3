//! Range module core types

use crate::registry::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================
// Constants
// ============================================================

/// Rendered in place of a missing endpoint
pub const MISSING_SEGMENT: &str = "-";

/// Label used when rendering Iqra endpoints
pub const IQRA_LABEL: &str = "Iqra'";

/// Normalized markers that flag a name field as Iqra
pub const IQRA_MARKERS: &[&str] = &["iqra", "jilid"];

// ============================================================
// Error Types
// ============================================================

/// Range parsing and normalization errors
#[derive(Debug, Error)]
pub enum RangeError {
    #[error("Missing separator in range: {0}")]
    MissingSeparator(String),

    #[error("Empty range segment")]
    EmptySegment,

    #[error("Malformed endpoint: {0}")]
    MalformedEndpoint(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Range mixes Quran and Iqra endpoints")]
    MixedKinds,

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type Result<T> = std::result::Result<T, RangeError>;

// ============================================================
// Core Data Structures
// ============================================================

/// Numbering space of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeKind {
    /// Mushaf surah and verse
    #[default]
    Quran,
    /// Iqra volume and page
    Iqra,
}

/// One end of a recitation range
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RangeEndpoint {
    /// Surah name and verse number
    Quran { surah: String, verse: u32 },
    /// Iqra volume (1-6) and page within the volume
    Iqra { volume: u32, page: u32 },
}

impl RangeEndpoint {
    /// Quran endpoint
    pub fn quran(surah: impl Into<String>, verse: u32) -> Self {
        RangeEndpoint::Quran {
            surah: surah.into(),
            verse,
        }
    }

    /// Iqra endpoint
    pub fn iqra(volume: u32, page: u32) -> Self {
        RangeEndpoint::Iqra { volume, page }
    }

    /// Numbering space of this endpoint
    pub fn kind(&self) -> RangeKind {
        match self {
            RangeEndpoint::Quran { .. } => RangeKind::Quran,
            RangeEndpoint::Iqra { .. } => RangeKind::Iqra,
        }
    }

    /// Check whether this is an Iqra endpoint
    pub fn is_iqra(&self) -> bool {
        self.kind() == RangeKind::Iqra
    }
}

impl fmt::Display for RangeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeEndpoint::Quran { surah, verse } => write!(f, "{}: {}", surah, verse),
            RangeEndpoint::Iqra { volume, page } => write!(f, "{} {}: {}", IQRA_LABEL, volume, page),
        }
    }
}

/// An ordered, resolved pair of endpoints of one kind.
///
/// Only the normalizer builds these, so `from` never comes after `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRange {
    pub(crate) kind: RangeKind,
    pub(crate) from: RangeEndpoint,
    pub(crate) to: RangeEndpoint,
}

impl NormalizedRange {
    /// Numbering space of the range
    pub fn kind(&self) -> RangeKind {
        self.kind
    }

    /// Earlier endpoint
    pub fn start(&self) -> &RangeEndpoint {
        &self.from
    }

    /// Later endpoint
    pub fn end(&self) -> &RangeEndpoint {
        &self.to
    }

    /// Check whether this is an Iqra range
    pub fn is_iqra(&self) -> bool {
        self.kind == RangeKind::Iqra
    }

    /// Split into `(from, to)`
    pub fn into_endpoints(self) -> (RangeEndpoint, RangeEndpoint) {
        (self.from, self.to)
    }
}

impl fmt::Display for NormalizedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.from, self.to)
    }
}
