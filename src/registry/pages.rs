//! Built-in mushaf page table
//!
//! Rows are `(surah number, first verse, last verse, page)` in recitation
//! order. Only Juz 1 (pages 1-21) and Juz 30 (pages 582-604) ship with the
//! crate; a complete 604-page table is loaded through
//! [`LocationRegistry::load_table`](super::LocationRegistry::load_table).

use super::surah::surah_by_number;
use super::types::LocationEntry;

pub(crate) const BUILTIN_PAGES: &[(u16, u32, u32, u32)] = &[
    // Juz 1
    (1, 1, 7, 1),
    (2, 1, 5, 2),
    (2, 6, 16, 3),
    (2, 17, 24, 4),
    (2, 25, 29, 5),
    (2, 30, 37, 6),
    (2, 38, 48, 7),
    (2, 49, 57, 8),
    (2, 58, 61, 9),
    (2, 62, 69, 10),
    (2, 70, 76, 11),
    (2, 77, 83, 12),
    (2, 84, 88, 13),
    (2, 89, 93, 14),
    (2, 94, 101, 15),
    (2, 102, 105, 16),
    (2, 106, 112, 17),
    (2, 113, 119, 18),
    (2, 120, 126, 19),
    (2, 127, 134, 20),
    (2, 135, 141, 21),
    // Juz 30
    (78, 1, 30, 582),
    (78, 31, 40, 583),
    (79, 1, 15, 583),
    (79, 16, 46, 584),
    (80, 1, 42, 585),
    (81, 1, 29, 586),
    (82, 1, 19, 587),
    (83, 1, 6, 587),
    (83, 7, 34, 588),
    (83, 35, 36, 589),
    (84, 1, 25, 589),
    (85, 1, 22, 590),
    (86, 1, 17, 591),
    (87, 1, 15, 591),
    (87, 16, 19, 592),
    (88, 1, 26, 592),
    (89, 1, 23, 593),
    (89, 24, 30, 594),
    (90, 1, 20, 594),
    (91, 1, 15, 595),
    (92, 1, 14, 595),
    (92, 15, 21, 596),
    (93, 1, 11, 596),
    (94, 1, 8, 596),
    (95, 1, 8, 597),
    (96, 1, 19, 597),
    (97, 1, 5, 598),
    (98, 1, 7, 598),
    (98, 8, 8, 599),
    (99, 1, 8, 599),
    (100, 1, 11, 599),
    (101, 1, 11, 600),
    (102, 1, 8, 600),
    (103, 1, 3, 601),
    (104, 1, 9, 601),
    (105, 1, 5, 601),
    (106, 1, 4, 602),
    (107, 1, 7, 602),
    (108, 1, 3, 602),
    (109, 1, 6, 603),
    (110, 1, 3, 603),
    (111, 1, 5, 603),
    (112, 1, 4, 604),
    (113, 1, 5, 604),
    (114, 1, 6, 604),
];

/// Expand the built-in rows into table entries
pub(crate) fn builtin_entries() -> Vec<LocationEntry> {
    BUILTIN_PAGES
        .iter()
        .filter_map(|&(number, start, end, page)| {
            surah_by_number(number).map(|info| LocationEntry {
                surah: info.name.to_string(),
                start_verse: start,
                end_verse: end,
                page,
                surah_number: number,
            })
        })
        .collect()
}
