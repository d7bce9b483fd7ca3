//! Compact range encoding
//!
//! Ranges are stored and shown as `"<Surah>: <Verse> - <Surah>: <Verse>"` or
//! `"Iqra' <N>: <Page> - Iqra' <N>: <Page>"`. A missing endpoint renders as
//! `"-"`.

use super::types::{RangeEndpoint, RangeError, Result, IQRA_MARKERS, MISSING_SEGMENT};
use crate::registry::normalize_name;

/// Build an endpoint from the two raw form fields: the surah (or Iqra
/// volume) label and the verse (or page) number.
pub fn endpoint_from_fields(name: &str, number: &str) -> Result<RangeEndpoint> {
    let name = name.trim();
    let number = number.trim();
    if is_missing(name) || is_missing(number) {
        return Err(RangeError::EmptySegment);
    }

    let value: u32 = number
        .parse()
        .map_err(|_| RangeError::InvalidNumber(number.to_string()))?;
    if value == 0 {
        return Err(RangeError::InvalidNumber(number.to_string()));
    }

    if is_iqra_label(name) {
        let volume = first_number(name)
            .ok_or_else(|| RangeError::MalformedEndpoint(format!("{}: {}", name, number)))?;
        return Ok(RangeEndpoint::iqra(volume, value));
    }

    Ok(RangeEndpoint::quran(name, value))
}

/// Parse one endpoint such as `"An-Naba: 10"` or `"Iqra' 2: 5"`
pub fn parse_endpoint(text: &str) -> Result<RangeEndpoint> {
    let text = text.trim();
    if is_missing(text) {
        return Err(RangeError::EmptySegment);
    }

    let (name, number) = text
        .rsplit_once(':')
        .ok_or_else(|| RangeError::MalformedEndpoint(text.to_string()))?;
    endpoint_from_fields(name, number)
}

/// Parse a compact range into its two endpoints, in the order written
pub fn parse_range(text: &str) -> Result<(RangeEndpoint, RangeEndpoint)> {
    let text = text.trim();
    if is_missing(text) {
        return Err(RangeError::EmptySegment);
    }

    match split_range(text) {
        Some((from, to)) => Ok((parse_endpoint(from)?, parse_endpoint(to)?)),
        None if text.split(" - ").any(|part| is_missing(part.trim())) => {
            Err(RangeError::EmptySegment)
        }
        None => Err(RangeError::MissingSeparator(text.to_string())),
    }
}

/// Render a pair of endpoints, writing `"-"` for a missing one
pub fn render_range(from: Option<&RangeEndpoint>, to: Option<&RangeEndpoint>) -> String {
    format!("{} - {}", render_endpoint(from), render_endpoint(to))
}

/// Render one endpoint, writing `"-"` when missing
pub fn render_endpoint(endpoint: Option<&RangeEndpoint>) -> String {
    endpoint
        .map(ToString::to_string)
        .unwrap_or_else(|| MISSING_SEGMENT.to_string())
}

/// Check whether a surah field names an Iqra volume
pub fn is_iqra_label(name: &str) -> bool {
    let key = normalize_name(name);
    IQRA_MARKERS.iter().any(|marker| key.contains(marker))
}

fn is_missing(segment: &str) -> bool {
    segment.is_empty() || segment == MISSING_SEGMENT
}

/// Split at the first dash that follows a number. Surah names carry their
/// own dashes ("An-Naba") but never end in a digit.
fn split_range(text: &str) -> Option<(&str, &str)> {
    text.char_indices()
        .filter(|&(_, c)| c == '-' || c == '\u{2013}')
        .find(|&(index, _)| text[..index].trim_end().ends_with(|c: char| c.is_ascii_digit()))
        .map(|(index, c)| (&text[..index], &text[index + c.len_utf8()..]))
}

/// First run of ASCII digits in a label
fn first_number(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
