//! Timestamp normalization and parsing.
//!
//! Boundary text is normalized (Unicode space variants to ASCII space,
//! AM/PM uppercased) and then run through a fixed two-format fallback
//! chain. Anything that matches neither format is an invalid timestamp;
//! the record is still kept, just without calendar fields.

use chrono::NaiveDateTime;

/// Parse attempts in fixed order: 2-digit year first, then 4-digit.
/// The trailing `- ` is part of the boundary match and of the format.
const FORMATS: [&str; 2] = ["%d/%m/%y, %I:%M %p - ", "%d/%m/%Y, %I:%M %p - "];

/// Replaces narrow/no-break spaces with ordinary spaces and uppercases the
/// AM/PM marker.
pub(crate) fn normalize(timestamp_text: &str) -> String {
    timestamp_text
        .replace(['\u{202f}', '\u{a0}'], " ")
        .to_uppercase()
}

/// Parses boundary text into a wall-clock instant.
///
/// Returns `None` when both formats fail; no further heuristics are
/// attempted. Ambiguous 2-vs-4-digit-year strings are resolved entirely by
/// whichever parse succeeds first.
pub fn parse_timestamp(timestamp_text: &str) -> Option<NaiveDateTime> {
    let normalized = normalize(timestamp_text);
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
}
