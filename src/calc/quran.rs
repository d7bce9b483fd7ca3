//! Quran page/line interpolation
//!
//! The table stores which verses sit on each page, not which line a verse
//! starts on, so coverage inside a boundary page is approximated by the
//! share of the page's verses that were recited.

use super::types::{CalcError, CalculationResult, CalcOptions, Result};
use crate::registry::{LocationRegistry, PageSpan};

/// Lines covered between two ordered Quran endpoints
pub(crate) fn quran_lines(
    registry: &LocationRegistry,
    from: (&str, u32),
    to: (&str, u32),
    options: &CalcOptions,
) -> Result<CalculationResult> {
    let per_page = f64::from(options.lines_per_page);

    let start_entry = registry.resolve_quran_verse(from.0, from.1)?;
    let end_entry = registry.resolve_quran_verse(to.0, to.1)?;

    if end_entry.page < start_entry.page {
        return Err(CalcError::ReversedPages {
            start: start_entry.page,
            end: end_entry.page,
        });
    }

    let start = registry.page_span(start_entry, from.1);
    let end = registry.page_span(end_entry, to.1);

    let total_lines = if start.page == end.page {
        if end.offset < start.offset {
            return Err(CalcError::ReversedVerses {
                page: start.page,
                start: start.offset,
                end: end.offset,
            });
        }
        share(end.offset - start.offset + 1, &start) * per_page
    } else {
        let start_lines = share(start.total - start.offset + 1, &start) * per_page;
        let end_lines = share(end.offset, &end) * per_page;
        let middle_lines = f64::from(end.page - start.page - 1) * per_page;
        start_lines + middle_lines + end_lines
    };

    Ok(CalculationResult::quran(total_lines, options.lines_per_page))
}

/// Fraction of a page's verses
fn share(verses: u32, span: &PageSpan) -> f64 {
    f64::from(verses) / f64::from(span.total.max(1))
}
