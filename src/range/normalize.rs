//! Range Normalizer
//!
//! Instructors enter the start and end of a session in either direction. The
//! normalizer resolves both endpoints, rewrites surah names to their
//! canonical spelling and swaps the pair when `from` comes after `to`.

use super::codec::{endpoint_from_fields, parse_range};
use super::types::{NormalizedRange, RangeEndpoint, RangeError, RangeKind, Result};
use crate::registry::{LocationRegistry, QuranPosition};
use tracing::trace;

/// Resolved ordering key of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Quran(QuranPosition),
    Iqra(u32),
}

/// Orders and validates endpoint pairs against a registry
#[derive(Debug, Clone, Copy)]
pub struct RangeNormalizer<'a> {
    registry: &'a LocationRegistry,
}

impl<'a> RangeNormalizer<'a> {
    /// Create a normalizer over a registry
    pub fn new(registry: &'a LocationRegistry) -> Self {
        Self { registry }
    }

    /// Order two endpoints of the same kind
    pub fn normalize(&self, from: &RangeEndpoint, to: &RangeEndpoint) -> Result<NormalizedRange> {
        let kind = from.kind();
        if to.kind() != kind {
            return Err(RangeError::MixedKinds);
        }

        let (from, from_key) = self.resolve(from)?;
        let (to, to_key) = self.resolve(to)?;

        if from_key > to_key {
            trace!(from = %from, to = %to, "swapping reversed range");
            return Ok(NormalizedRange {
                kind,
                from: to,
                to: from,
            });
        }

        Ok(NormalizedRange { kind, from, to })
    }

    /// Parse and order a compact range string
    pub fn normalize_str(&self, text: &str) -> Result<NormalizedRange> {
        let (from, to) = parse_range(text)?;
        self.normalize(&from, &to)
    }

    /// Build and order a range from four raw form fields
    pub fn normalize_fields(
        &self,
        from_name: &str,
        from_number: &str,
        to_name: &str,
        to_number: &str,
    ) -> Result<NormalizedRange> {
        let from = endpoint_from_fields(from_name, from_number)?;
        let to = endpoint_from_fields(to_name, to_number)?;
        self.normalize(&from, &to)
    }

    /// Canonical endpoint and its ordering key
    fn resolve(&self, endpoint: &RangeEndpoint) -> Result<(RangeEndpoint, SortKey)> {
        match endpoint {
            RangeEndpoint::Quran { surah, verse } => {
                let entry = self.registry.resolve_quran_verse(surah, *verse)?;
                let key = SortKey::Quran(QuranPosition {
                    page: entry.page,
                    surah: entry.surah_number,
                    verse: *verse,
                });
                Ok((RangeEndpoint::quran(entry.surah.as_str(), *verse), key))
            }
            RangeEndpoint::Iqra { volume, page } => {
                let absolute = self.registry.resolve_iqra_absolute_page(*volume, *page)?;
                Ok((endpoint.clone(), SortKey::Iqra(absolute)))
            }
        }
    }

    /// Kind of a raw endpoint pair, when both sides agree
    pub fn kind_of(from: &RangeEndpoint, to: &RangeEndpoint) -> Option<RangeKind> {
        (from.kind() == to.kind()).then_some(from.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::codec::render_range;
    use crate::registry::RegistryError;

    fn registry() -> &'static LocationRegistry {
        LocationRegistry::shared()
    }

    #[test]
    fn test_forward_range_unchanged() {
        let normalizer = RangeNormalizer::new(registry());
        let range = normalizer
            .normalize(
                &RangeEndpoint::quran("An-Naba", 1),
                &RangeEndpoint::quran("An-Naba", 10),
            )
            .unwrap();
        assert_eq!(range.kind(), RangeKind::Quran);
        assert_eq!(range.start(), &RangeEndpoint::quran("An-Naba", 1));
        assert_eq!(range.end(), &RangeEndpoint::quran("An-Naba", 10));
    }

    #[test]
    fn test_reversed_range_swapped() {
        let normalizer = RangeNormalizer::new(registry());
        let range = normalizer
            .normalize(
                &RangeEndpoint::quran("An-Nazi'at", 5),
                &RangeEndpoint::quran("An-Naba", 1),
            )
            .unwrap();
        assert_eq!(range.start(), &RangeEndpoint::quran("An-Naba", 1));
        assert_eq!(range.end(), &RangeEndpoint::quran("An-Nazi'at", 5));
    }

    #[test]
    fn test_same_page_orders_by_surah() {
        let normalizer = RangeNormalizer::new(registry());
        let range = normalizer
            .normalize(
                &RangeEndpoint::quran("An-Nas", 1),
                &RangeEndpoint::quran("Al-Ikhlas", 4),
            )
            .unwrap();
        assert_eq!(range.start(), &RangeEndpoint::quran("Al-Ikhlas", 4));
    }

    #[test]
    fn test_names_canonicalized() {
        let normalizer = RangeNormalizer::new(registry());
        let range = normalizer
            .normalize(
                &RangeEndpoint::quran("an naba'", 3),
                &RangeEndpoint::quran("AN-NAZI’AT", 2),
            )
            .unwrap();
        assert_eq!(range.to_string(), "An-Naba: 3 - An-Nazi'at: 2");
    }

    #[test]
    fn test_idempotent() {
        let normalizer = RangeNormalizer::new(registry());
        let once = normalizer
            .normalize(
                &RangeEndpoint::quran("At-Takwir", 29),
                &RangeEndpoint::quran("'Abasa", 3),
            )
            .unwrap();
        let twice = normalizer.normalize(once.start(), once.end()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_round_trip_through_text() {
        let normalizer = RangeNormalizer::new(registry());
        let range = normalizer
            .normalize(&RangeEndpoint::iqra(2, 5), &RangeEndpoint::iqra(1, 10))
            .unwrap();
        let text = render_range(Some(range.start()), Some(range.end()));
        assert_eq!(text, "Iqra' 1: 10 - Iqra' 2: 5");
        assert_eq!(normalizer.normalize_str(&text).unwrap(), range);
    }

    #[test]
    fn test_iqra_ordering() {
        let normalizer = RangeNormalizer::new(registry());
        let range = normalizer
            .normalize_fields("Jilid 3", "1", "Iqra' 2", "30")
            .unwrap();
        assert!(range.is_iqra());
        assert_eq!(range.start(), &RangeEndpoint::iqra(2, 30));
        assert_eq!(range.end(), &RangeEndpoint::iqra(3, 1));
    }

    #[test]
    fn test_mixed_kinds_rejected() {
        let normalizer = RangeNormalizer::new(registry());
        let result = normalizer.normalize(
            &RangeEndpoint::quran("An-Naba", 1),
            &RangeEndpoint::iqra(1, 1),
        );
        assert!(matches!(result, Err(RangeError::MixedKinds)));
        assert_eq!(
            RangeNormalizer::kind_of(&RangeEndpoint::iqra(1, 1), &RangeEndpoint::iqra(2, 1)),
            Some(RangeKind::Iqra)
        );
        assert_eq!(
            RangeNormalizer::kind_of(&RangeEndpoint::quran("An-Naba", 1), &RangeEndpoint::iqra(1, 1)),
            None
        );
    }

    #[test]
    fn test_unresolved_endpoint_rejected() {
        let normalizer = RangeNormalizer::new(registry());
        let result = normalizer.normalize(
            &RangeEndpoint::quran("Al-XYZ", 1),
            &RangeEndpoint::quran("An-Naba", 1),
        );
        assert!(matches!(
            result,
            Err(RangeError::Registry(RegistryError::UnknownSurah { .. }))
        ));

        let result = normalizer.normalize(&RangeEndpoint::iqra(1, 1), &RangeEndpoint::iqra(7, 1));
        assert!(matches!(
            result,
            Err(RangeError::Registry(RegistryError::IqraVolumeOutOfRange(7)))
        ));
    }

    #[test]
    fn test_malformed_string_rejected() {
        let normalizer = RangeNormalizer::new(registry());
        assert!(normalizer.normalize_str("Surah: 12").is_err());
        assert!(normalizer.normalize_str("").is_err());
        assert!(normalizer.normalize_str("An-Naba: 1 - -").is_err());
    }
}
