//! Location Registry module
//!
//! Authoritative lookup from a surah name and verse to its mushaf page, and
//! from an Iqra volume and page to an absolute curriculum page.
//!
//! # Features
//!
//! - Transliteration-tolerant surah name resolution with suggestions
//! - Per-page verse runs with page-level offsets
//! - Custom location tables loaded from JSON
//! - Configurable Iqra volume sizes
//!
//! # Example
//!
//! ```rust
//! use tahfizh_range::LocationRegistry;
//!
//! let registry = LocationRegistry::shared();
//! let entry = registry.resolve_quran_verse("an naba'", 10).unwrap();
//! assert_eq!(entry.page, 582);
//! assert_eq!(registry.resolve_iqra_absolute_page(2, 5).unwrap(), 36);
//! ```

// Submodules
mod iqra;
mod name;
mod pages;
mod surah;
mod types;

// Re-export public API
pub use iqra::IqraTable;
pub use name::normalize_name;
pub use surah::{surah_by_number, SURAHS};
pub use types::{
    IqraLocationEntry, LocationEntry, PageSpan, QuranPosition, RegistryError, Result, SurahInfo,
    DEFAULT_IQRA_VOLUME_PAGES, DEFAULT_SUGGESTION_THRESHOLD, IQRA_VOLUME_COUNT, LINES_PER_PAGE,
    MUSHAF_PAGE_COUNT, SURAH_COUNT,
};

use std::collections::HashMap;
use std::ops::Range;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Immutable lookup tables for both numbering spaces.
///
/// Built once and shared freely; every query takes `&self`.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    /// Table rows in recitation order
    entries: Vec<LocationEntry>,
    /// Surah number -> index range into `entries`
    by_surah: HashMap<u16, Range<usize>>,
    /// Normalized name or alias -> surah number
    by_name: HashMap<String, u16>,
    iqra: IqraTable,
    suggestion_threshold: f64,
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LocationRegistry {
    /// Registry over the built-in sample pages
    pub fn builtin() -> Self {
        Self::assemble(pages::builtin_entries())
    }

    /// Process-wide built-in registry, built on first use
    pub fn shared() -> &'static LocationRegistry {
        static SHARED: OnceLock<LocationRegistry> = OnceLock::new();
        SHARED.get_or_init(Self::builtin)
    }

    /// Build a registry from custom table rows.
    ///
    /// Rows may arrive in any order; they are sorted into recitation order
    /// and must then form contiguous, non-overlapping verse runs per surah
    /// with pages that never go backwards.
    pub fn from_entries(mut entries: Vec<LocationEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(RegistryError::InvalidTable("table is empty".to_string()));
        }

        for entry in entries.iter_mut() {
            let info = lookup_name(&entry.surah).ok_or_else(|| {
                RegistryError::InvalidTable(format!("unknown surah '{}'", entry.surah))
            })?;
            if entry.start_verse == 0
                || entry.start_verse > entry.end_verse
                || entry.end_verse > info.verses
            {
                return Err(RegistryError::InvalidTable(format!(
                    "{}: verses {}-{} outside 1-{}",
                    info.name, entry.start_verse, entry.end_verse, info.verses
                )));
            }
            if entry.page == 0 || entry.page > MUSHAF_PAGE_COUNT {
                return Err(RegistryError::InvalidTable(format!(
                    "{}: page {} outside 1-{}",
                    info.name, entry.page, MUSHAF_PAGE_COUNT
                )));
            }
            entry.surah_number = info.number;
            entry.surah = info.name.to_string();
        }

        entries.sort_by_key(|e| (e.surah_number, e.start_verse));

        for pair in entries.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.page < prev.page {
                return Err(RegistryError::InvalidTable(format!(
                    "{}: {} on page {} precedes page {}",
                    next.surah, next.start_verse, next.page, prev.page
                )));
            }
            if prev.surah_number == next.surah_number && next.start_verse != prev.end_verse + 1 {
                return Err(RegistryError::InvalidTable(format!(
                    "{}: runs {}-{} and {}-{} are not contiguous",
                    prev.surah, prev.start_verse, prev.end_verse, next.start_verse, next.end_verse
                )));
            }
        }

        Ok(Self::assemble(entries))
    }

    /// Build a registry from a JSON array of table rows
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<LocationEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a complete location table from a JSON file
    pub fn load_table(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RegistryError::TableNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            entries = registry.entries.len(),
            "loaded location table"
        );
        Ok(registry)
    }

    /// Replace the Iqra volume sizes
    #[must_use]
    pub fn with_iqra_volume_pages(mut self, pages: [u32; IQRA_VOLUME_COUNT]) -> Self {
        self.iqra = IqraTable::new(pages);
        self
    }

    /// Set the similarity score required for name suggestions (clamped to 0-1)
    #[must_use]
    pub fn with_suggestion_threshold(mut self, threshold: f64) -> Self {
        self.suggestion_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Index already-validated rows
    fn assemble(entries: Vec<LocationEntry>) -> Self {
        let mut by_surah: HashMap<u16, Range<usize>> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            by_surah
                .entry(entry.surah_number)
                .and_modify(|range| range.end = index + 1)
                .or_insert(index..index + 1);
        }

        Self {
            entries,
            by_surah,
            by_name: name_index(),
            iqra: IqraTable::default(),
            suggestion_threshold: DEFAULT_SUGGESTION_THRESHOLD,
        }
    }

    // ============================================================
    // Queries
    // ============================================================

    /// All table rows in recitation order
    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }

    /// The Iqra table in use
    pub fn iqra(&self) -> &IqraTable {
        &self.iqra
    }

    /// Look up a surah by name, alias or number
    pub fn surah(&self, name: &str) -> Result<&'static SurahInfo> {
        let key = normalize_name(name);
        let found = match key.parse::<u16>() {
            Ok(number) => surah_by_number(number),
            Err(_) => self.by_name.get(&key).and_then(|&n| surah_by_number(n)),
        };

        found.ok_or_else(|| RegistryError::UnknownSurah {
            name: name.trim().to_string(),
            suggestion: self.suggest(&key),
        })
    }

    /// Resolve a surah name and verse to the table row holding it
    pub fn resolve_quran_verse(&self, surah: &str, verse: u32) -> Result<&LocationEntry> {
        let info = self.surah(surah).inspect_err(|e| debug!("{}", e))?;
        if !info.contains_verse(verse) {
            let err = RegistryError::VerseOutOfRange {
                surah: info.name.to_string(),
                verse,
                max: info.verses,
            };
            debug!("{}", err);
            return Err(err);
        }

        self.by_surah
            .get(&info.number)
            .and_then(|range| self.entries[range.clone()].iter().find(|e| e.contains(verse)))
            .ok_or_else(|| {
                let err = RegistryError::VerseNotMapped {
                    surah: info.name.to_string(),
                    verse,
                };
                debug!("{}", err);
                err
            })
    }

    /// Recitation-order key of a verse
    pub fn position(&self, surah: &str, verse: u32) -> Result<QuranPosition> {
        let entry = self.resolve_quran_verse(surah, verse)?;
        Ok(QuranPosition {
            page: entry.page,
            surah: entry.surah_number,
            verse,
        })
    }

    /// Absolute Iqra page of `page` within `volume`
    pub fn resolve_iqra_absolute_page(&self, volume: u32, page: u32) -> Result<u32> {
        self.iqra.absolute_page(volume, page)
    }

    /// Table rows printed on a mushaf page
    pub fn entries_on_page(&self, page: u32) -> &[LocationEntry] {
        let start = self.entries.partition_point(|e| e.page < page);
        let end = self.entries.partition_point(|e| e.page <= page);
        &self.entries[start..end]
    }

    /// Verses printed on a mushaf page, 0 when the page is not in the table
    pub fn page_verse_count(&self, page: u32) -> u32 {
        self.entries_on_page(page)
            .iter()
            .map(LocationEntry::verse_count)
            .sum()
    }

    /// Locate a verse of `entry` within the full verse sequence of its page
    pub fn page_span(&self, entry: &LocationEntry, verse: u32) -> PageSpan {
        let mut before = 0;
        let mut total = 0;
        let mut seen = false;
        for row in self.entries_on_page(entry.page) {
            if row.surah_number == entry.surah_number && row.start_verse == entry.start_verse {
                seen = true;
            } else if !seen {
                before += row.verse_count();
            }
            total += row.verse_count();
        }
        if !seen {
            // Row from another registry; treat it as the whole page.
            before = 0;
            total = entry.verse_count();
        }

        PageSpan {
            page: entry.page,
            offset: before + verse.saturating_sub(entry.start_verse) + 1,
            total,
        }
    }

    /// Closest known surah name to a normalized key
    fn suggest(&self, key: &str) -> Option<&'static str> {
        if key.is_empty() {
            return None;
        }
        self.by_name
            .iter()
            .map(|(name, &number)| (strsim::jaro_winkler(key, name), number))
            .filter(|(score, _)| *score >= self.suggestion_threshold)
            .max_by(|a, b| a.0.total_cmp(&b.0).then(b.1.cmp(&a.1)))
            .and_then(|(_, number)| surah_by_number(number))
            .map(|info| info.name)
    }
}

/// Normalized name and alias keys for every surah
fn name_index() -> HashMap<String, u16> {
    SURAHS
        .iter()
        .flat_map(|info| {
            std::iter::once(info.name)
                .chain(info.aliases.iter().copied())
                .map(move |name| (normalize_name(name), info.number))
        })
        .collect()
}

fn lookup_name(name: &str) -> Option<&'static SurahInfo> {
    let key = normalize_name(name);
    SURAHS.iter().find(|info| {
        normalize_name(info.name) == key || info.aliases.iter().any(|a| normalize_name(a) == key)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passes_validation() {
        let builtin = LocationRegistry::builtin();
        let rebuilt = LocationRegistry::from_entries(builtin.entries().to_vec()).unwrap();
        assert_eq!(rebuilt.entries(), builtin.entries());
    }

    #[test]
    fn test_resolve_containment() {
        let registry = LocationRegistry::builtin();
        for entry in registry.entries() {
            for verse in entry.start_verse..=entry.end_verse {
                let found = registry.resolve_quran_verse(&entry.surah, verse).unwrap();
                assert_eq!(found, entry);
            }
        }
    }

    #[test]
    fn test_resolve_name_variants() {
        let registry = LocationRegistry::builtin();
        for name in ["An-Naba", "an naba", "An-Naba'", "AN-NABA", "'Amma", "78"] {
            let entry = registry.resolve_quran_verse(name, 10).unwrap();
            assert_eq!(entry.page, 582, "{}", name);
            assert_eq!(entry.surah, "An-Naba");
        }
        let entry = registry.resolve_quran_verse("An-Nazi’at", 5).unwrap();
        assert_eq!(entry.page, 583);
    }

    #[test]
    fn test_resolve_unknown_surah() {
        let registry = LocationRegistry::builtin();
        let err = registry.resolve_quran_verse("Al-XYZ", 1).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownSurah { .. }));
    }

    #[test]
    fn test_unknown_surah_suggestion() {
        let registry = LocationRegistry::builtin();
        let err = registry.surah("An-Nabaa").unwrap_err();
        assert_eq!(err.suggestion(), Some("An-Naba"));

        let err = registry.surah("qwertyuiop").unwrap_err();
        assert_eq!(err.suggestion(), None);
    }

    #[test]
    fn test_resolve_verse_out_of_range() {
        let registry = LocationRegistry::builtin();
        assert!(matches!(
            registry.resolve_quran_verse("An-Naba", 41),
            Err(RegistryError::VerseOutOfRange { max: 40, .. })
        ));
        assert!(matches!(
            registry.resolve_quran_verse("An-Naba", 0),
            Err(RegistryError::VerseOutOfRange { .. })
        ));
    }

    #[test]
    fn test_resolve_unmapped_verse() {
        let registry = LocationRegistry::builtin();
        // Yasin exists but its pages are not in the built-in table
        assert!(matches!(
            registry.resolve_quran_verse("Yasin", 1),
            Err(RegistryError::VerseNotMapped { .. })
        ));
        // Al-Baqarah is only mapped through Juz 1
        assert!(registry.resolve_quran_verse("Al-Baqarah", 141).is_ok());
        assert!(registry.resolve_quran_verse("Al-Baqarah", 142).is_err());
    }

    #[test]
    fn test_entries_on_page() {
        let registry = LocationRegistry::builtin();
        let rows = registry.entries_on_page(583);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].surah, "An-Naba");
        assert_eq!(rows[1].surah, "An-Nazi'at");
        assert_eq!(registry.page_verse_count(583), 25);
        assert_eq!(registry.page_verse_count(604), 15);
        assert!(registry.entries_on_page(300).is_empty());
        assert_eq!(registry.page_verse_count(300), 0);
    }

    #[test]
    fn test_page_span() {
        let registry = LocationRegistry::builtin();
        let naba = registry.resolve_quran_verse("An-Naba", 35).unwrap();
        assert_eq!(
            registry.page_span(naba, 35),
            PageSpan { page: 583, offset: 5, total: 25 }
        );
        let naziat = registry.resolve_quran_verse("An-Nazi'at", 5).unwrap();
        assert_eq!(
            registry.page_span(naziat, 5),
            PageSpan { page: 583, offset: 15, total: 25 }
        );
    }

    #[test]
    fn test_position_ordering() {
        let registry = LocationRegistry::builtin();
        let a = registry.position("An-Naba", 40).unwrap();
        let b = registry.position("An-Nazi'at", 1).unwrap();
        let c = registry.position("Al-Fatihah", 7).unwrap();
        assert!(c < a);
        assert!(a < b);
    }

    #[test]
    fn test_from_entries_sorts_and_fills_numbers() {
        let registry = LocationRegistry::from_entries(vec![
            LocationEntry::new("an-nazi'at", 1, 15, 583),
            LocationEntry::new("An-Naba", 31, 40, 583),
            LocationEntry::new("An-Naba", 1, 30, 582),
        ])
        .unwrap();
        let entries = registry.entries();
        assert_eq!(entries[0].page, 582);
        assert_eq!(entries[2].surah, "An-Nazi'at");
        assert_eq!(entries[2].surah_number, 79);
    }

    #[test]
    fn test_from_entries_rejects_bad_tables() {
        assert!(matches!(
            LocationRegistry::from_entries(Vec::new()),
            Err(RegistryError::InvalidTable(_))
        ));
        // Unknown surah
        assert!(LocationRegistry::from_entries(vec![LocationEntry::new("Al-XYZ", 1, 5, 1)]).is_err());
        // Verse past the end of the surah
        assert!(
            LocationRegistry::from_entries(vec![LocationEntry::new("Al-Fatihah", 1, 8, 1)]).is_err()
        );
        // Gap between runs
        assert!(LocationRegistry::from_entries(vec![
            LocationEntry::new("An-Naba", 1, 20, 582),
            LocationEntry::new("An-Naba", 25, 40, 583),
        ])
        .is_err());
        // Overlap between runs
        assert!(LocationRegistry::from_entries(vec![
            LocationEntry::new("An-Naba", 1, 30, 582),
            LocationEntry::new("An-Naba", 30, 40, 583),
        ])
        .is_err());
        // Page going backwards
        assert!(LocationRegistry::from_entries(vec![
            LocationEntry::new("An-Naba", 1, 30, 583),
            LocationEntry::new("An-Naba", 31, 40, 582),
        ])
        .is_err());
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"surah": "Yasin", "startVerse": 1, "endVerse": 12, "page": 440},
            {"surah": "Yasin", "startVerse": 13, "endVerse": 27, "page": 441}
        ]"#;
        let registry = LocationRegistry::from_json_str(json).unwrap();
        assert_eq!(registry.resolve_quran_verse("Ya Sin", 20).unwrap().page, 441);
        assert!(matches!(
            LocationRegistry::from_json_str("not json"),
            Err(RegistryError::JsonError(_))
        ));
    }

    #[test]
    fn test_load_table_missing() {
        let result = LocationRegistry::load_table(Path::new("/nonexistent/pages.json"));
        assert!(matches!(result, Err(RegistryError::TableNotFound(_))));
    }

    #[test]
    fn test_iqra_override() {
        let registry = LocationRegistry::builtin().with_iqra_volume_pages([32; 6]);
        assert_eq!(registry.resolve_iqra_absolute_page(2, 1).unwrap(), 33);
        assert!(registry.resolve_iqra_absolute_page(7, 1).is_err());
    }

    #[test]
    fn test_shared_is_builtin() {
        let shared = LocationRegistry::shared();
        assert_eq!(shared.entries().len(), LocationRegistry::builtin().entries().len());
        assert!(std::ptr::eq(shared, LocationRegistry::shared()));
    }
}
