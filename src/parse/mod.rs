//! Preprocessing pipeline: raw transcript text to enriched records.
//!
//! The stages run strictly one way:
//!
//! 1. [`Splitter`] cuts the blob at every `date, time -` boundary
//! 2. [`parse_timestamp`] turns boundary text into an instant (or marks it
//!    invalid via the two-format fallback chain)
//! 3. [`SenderAttributor`] separates `Name: ` prefixes from system
//!    notifications
//! 4. [`Record::with_timestamp`](crate::record::Record::with_timestamp)
//!    derives the calendar fields and period bucket
//!
//! [`preprocess`] wires them together.

mod sender;
mod splitter;
mod timestamp;

pub use sender::SenderAttributor;
pub use splitter::{Segment, Splitter};
pub use timestamp::parse_timestamp;

use crate::record::Record;

/// Runs the full preprocessing pipeline over a raw transcript blob.
///
/// Produces exactly one record per boundary match, in transcript order.
/// Segments whose timestamp matches neither date format keep
/// `timestamp = None` but are retained. Zero boundaries yields an empty
/// record set.
///
/// # Example
///
/// ```
/// use chatlens::parse::preprocess;
///
/// let records = preprocess("15/03/23, 9:05 PM - Alice: hi\n");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].sender, "Alice");
/// assert!(records[0].has_valid_date());
/// ```
pub fn preprocess(raw: &str) -> Vec<Record> {
    let splitter = Splitter::new();
    let attributor = SenderAttributor::new();

    splitter
        .split(raw)
        .into_iter()
        .map(|segment| {
            let (sender, message) = attributor.attribute(segment.body);
            let mut record = Record::new(sender, message);
            if let Some(ts) = timestamp::parse_timestamp(segment.timestamp_text) {
                record = record.with_timestamp(ts);
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::GROUP_NOTIFICATION;

    const SAMPLE: &str = "\
15/03/23, 9:05 PM - Alice: hi\n\
15/03/23, 9:06 PM - Bob: hello there\n\
15/03/23, 9:07 PM - Alice added Charlie\n\
15/03/2023, 9:08 PM - Charlie: <Media omitted>\n";

    #[test]
    fn test_one_record_per_boundary() {
        let records = preprocess(SAMPLE);
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_order_preserved() {
        let records = preprocess(SAMPLE);
        let senders: Vec<&str> = records.iter().map(|r| r.sender.as_str()).collect();
        assert_eq!(senders, ["Alice", "Bob", GROUP_NOTIFICATION, "Charlie"]);
    }

    #[test]
    fn test_four_digit_year_record_has_date() {
        let records = preprocess(SAMPLE);
        assert!(records[3].has_valid_date());
        assert_eq!(records[3].calendar.as_ref().unwrap().year, 2023);
    }

    #[test]
    fn test_invalid_timestamp_retained() {
        // 24-hour time: boundary matches, date formats do not.
        let records = preprocess("15/03/23, 21:05 - Alice: hi\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sender, "Alice");
        assert!(!records[0].has_valid_date());
    }

    #[test]
    fn test_empty_input() {
        assert!(preprocess("").is_empty());
    }
}
