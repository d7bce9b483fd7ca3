//! Iqra page counting
//!
//! Primer pages are not split into lines; a range counts whole pages,
//! both ends inclusive.

use super::types::{CalculationResult, Result};
use crate::registry::LocationRegistry;

/// Pages covered between two Iqra endpoints given as `(volume, page)`
pub(crate) fn iqra_pages(
    registry: &LocationRegistry,
    from: (u32, u32),
    to: (u32, u32),
) -> Result<CalculationResult> {
    let start = registry.resolve_iqra_absolute_page(from.0, from.1)?;
    let end = registry.resolve_iqra_absolute_page(to.0, to.1)?;

    let pages = (i64::from(end) - i64::from(start) + 1).max(0);
    Ok(CalculationResult::iqra(pages as u32))
}
