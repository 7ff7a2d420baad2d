//! Message boundary detection.
//!
//! WhatsApp exports are a single text blob where every message starts with
//! a `date, time -` prefix. The splitter scans for that prefix and cuts the
//! blob into (timestamp-text, body-text) segments.

use regex::Regex;

/// Boundary pattern: `d/m/yy, h:mm AM -` with optional, case-insensitive,
/// optionally-dotted AM/PM. `\s` covers the narrow no-break space some
/// exports put before the AM/PM marker.
pub(crate) const BOUNDARY_PATTERN: &str =
    r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s?(?i:am|pm|a\.m\.|p\.m\.)?\s?-\s";

/// One raw transcript segment before attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The matched boundary text, e.g. `"15/03/23, 9:05 PM - "`.
    pub timestamp_text: &'a str,
    /// Everything between this boundary and the next one (or end of input),
    /// trailing newline included.
    pub body: &'a str,
}

/// Cuts a raw transcript blob into ordered segments.
pub struct Splitter {
    boundary: Regex,
}

impl Splitter {
    pub fn new() -> Self {
        Self {
            boundary: Regex::new(BOUNDARY_PATTERN).unwrap(),
        }
    }

    /// Splits the blob at every boundary match.
    ///
    /// Content before the first boundary is pre-transcript noise and is
    /// discarded. Zero matches yields an empty vector, not an error.
    pub fn split<'a>(&self, raw: &'a str) -> Vec<Segment<'a>> {
        let matches: Vec<_> = self.boundary.find_iter(raw).collect();
        let mut segments = Vec::with_capacity(matches.len());

        for (i, m) in matches.iter().enumerate() {
            let body_end = matches.get(i + 1).map_or(raw.len(), |next| next.start());
            segments.push(Segment {
                timestamp_text: m.as_str(),
                body: &raw[m.end()..body_end],
            });
        }

        segments
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_messages() {
        let raw = "15/03/23, 9:05 PM - Alice: hi\n15/03/23, 9:06 PM - Bob: hello\n";
        let segments = Splitter::new().split(raw);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].timestamp_text, "15/03/23, 9:05 PM - ");
        assert_eq!(segments[0].body, "Alice: hi\n");
        assert_eq!(segments[1].body, "Bob: hello\n");
    }

    #[test]
    fn test_noise_before_first_boundary_discarded() {
        let raw = "chat with Alice\n15/03/23, 9:05 PM - Alice: hi\n";
        let segments = Splitter::new().split(raw);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].body, "Alice: hi\n");
    }

    #[test]
    fn test_zero_boundaries_is_empty() {
        assert!(Splitter::new().split("no timestamps here at all").is_empty());
        assert!(Splitter::new().split("").is_empty());
    }

    #[test]
    fn test_multiline_body_stays_in_one_segment() {
        let raw = "15/03/23, 9:05 PM - Alice: first line\nsecond line\n15/03/23, 9:06 PM - Bob: ok\n";
        let segments = Splitter::new().split(raw);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].body, "Alice: first line\nsecond line\n");
    }

    #[test]
    fn test_lowercase_and_dotted_meridiem() {
        let raw = "15/03/23, 9:05 pm - Alice: hi\n15/03/23, 9:06 a.m. - Bob: hello\n";
        assert_eq!(Splitter::new().split(raw).len(), 2);
    }

    #[test]
    fn test_missing_meridiem_still_matches() {
        let raw = "15/03/23, 21:05 - Alice: hi\n";
        let segments = Splitter::new().split(raw);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].timestamp_text, "15/03/23, 21:05 - ");
    }

    #[test]
    fn test_narrow_no_break_space() {
        let raw = "15/03/23, 9:05\u{202f}PM - Alice: hi\n";
        let segments = Splitter::new().split(raw);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].timestamp_text.contains('\u{202f}'));
    }

    #[test]
    fn test_four_digit_year() {
        let raw = "15/03/2023, 9:05 PM - Alice: hi\n";
        assert_eq!(Splitter::new().split(raw).len(), 1);
    }
}
