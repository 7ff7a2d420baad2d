//! The enriched record type produced by preprocessing.
//!
//! This module provides [`Record`], one entry per parsed transcript segment,
//! together with the fixed lookup tables the analytics operate on: weekday
//! names, month names and the 24 hour-range period buckets.
//!
//! # Overview
//!
//! A record consists of:
//! - **Always present**: `sender` and `body`
//! - **Date-dependent**: `timestamp` and the derived [`CalendarFields`],
//!   absent when the timestamp text matched neither supported date format
//!
//! # Examples
//!
//! ```
//! use chatlens::record::Record;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 3, 15)
//!     .unwrap()
//!     .and_hms_opt(21, 5, 0)
//!     .unwrap();
//! let record = Record::new("Alice", "hi").with_timestamp(ts);
//!
//! let cal = record.calendar.as_ref().unwrap();
//! assert_eq!(cal.weekday_name, "Wednesday");
//! assert_eq!(cal.period_label, "9 PM - 10 PM");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Body text WhatsApp substitutes for attachments when media is excluded
/// from the export.
///
/// The trailing newline is part of the literal: the splitter keeps the
/// newline separating a body from the next boundary, so a media-only
/// message parses to exactly this string.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>\n";

/// Sentinel sender assigned to system notifications (group created, user
/// added or removed, subject changed, ...).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Weekday names in fixed Monday-first order, used for heatmap rows.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English month names, indexed by `month_number - 1`.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The 24 period-bucket labels, indexed by hour of day.
///
/// Hour 11 reads `"11 AM - 12 AM"` and hour 23 `"11 PM - 12 AM"`: the top
/// of a range that lands on 12 is written as 12 AM. The labels stay
/// pairwise distinct, so the table is a total 24-way partition of the day.
pub const PERIODS: [&str; 24] = [
    "12 AM - 1 AM",
    "1 AM - 2 AM",
    "2 AM - 3 AM",
    "3 AM - 4 AM",
    "4 AM - 5 AM",
    "5 AM - 6 AM",
    "6 AM - 7 AM",
    "7 AM - 8 AM",
    "8 AM - 9 AM",
    "9 AM - 10 AM",
    "10 AM - 11 AM",
    "11 AM - 12 AM",
    "12 PM - 1 PM",
    "1 PM - 2 PM",
    "2 PM - 3 PM",
    "3 PM - 4 PM",
    "4 PM - 5 PM",
    "5 PM - 6 PM",
    "6 PM - 7 PM",
    "7 PM - 8 PM",
    "8 PM - 9 PM",
    "9 PM - 10 PM",
    "10 PM - 11 PM",
    "11 PM - 12 AM",
];

/// Returns the period-bucket label for an hour of day.
///
/// Total over `0..=23`; panics on anything else.
pub fn period_label(hour: u32) -> &'static str {
    PERIODS[hour as usize]
}

/// Calendar fields derived from a successfully parsed timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarFields {
    /// Calendar date, used for the daily timeline.
    pub date: NaiveDate,
    pub year: i32,
    /// 1-based month number.
    pub month_number: u32,
    /// English month name from [`MONTHS`].
    pub month_name: &'static str,
    /// Day of month.
    pub day: u32,
    /// English weekday name from [`WEEKDAYS`].
    pub weekday_name: &'static str,
    /// Hour of day, `0..=23`.
    pub hour: u32,
    pub minute: u32,
    /// Period bucket from [`PERIODS`].
    pub period_label: &'static str,
}

impl CalendarFields {
    /// Expands a timestamp into its calendar fields and period bucket.
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        let hour = ts.hour();
        Self {
            date: ts.date(),
            year: ts.year(),
            month_number: ts.month(),
            month_name: MONTHS[ts.month0() as usize],
            day: ts.day(),
            weekday_name: WEEKDAYS[ts.weekday().num_days_from_monday() as usize],
            hour,
            minute: ts.minute(),
            period_label: period_label(hour),
        }
    }
}

/// One parsed transcript entry.
///
/// Records preserve transcript order, which is not necessarily
/// chronological: exports can contain out-of-order timestamps and those are
/// kept as-is. A record whose timestamp text failed to parse keeps
/// `timestamp = None` and carries no calendar fields; it still takes part
/// in the plain counting aggregations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Participant name, or [`GROUP_NOTIFICATION`] for system events.
    pub sender: String,

    /// Message text after sender attribution. May be the media placeholder
    /// or span multiple lines.
    pub body: String,

    /// Wall-clock instant from the transcript, if it parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,

    /// Derived calendar fields, present iff `timestamp` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarFields>,
}

impl Record {
    /// Creates a record with no timestamp.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            timestamp: None,
            calendar: None,
        }
    }

    /// Attaches a timestamp and derives the calendar fields from it.
    #[must_use]
    pub fn with_timestamp(mut self, ts: NaiveDateTime) -> Self {
        self.timestamp = Some(ts);
        self.calendar = Some(CalendarFields::from_timestamp(ts));
        self
    }

    /// Returns `true` for system notifications.
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    /// Returns `true` if the body is the media placeholder literal.
    pub fn is_media(&self) -> bool {
        self.body == MEDIA_PLACEHOLDER
    }

    /// Returns `true` if the timestamp parsed and calendar fields exist.
    pub fn has_valid_date(&self) -> bool {
        self.calendar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_period_table_pins() {
        assert_eq!(period_label(0), "12 AM - 1 AM");
        assert_eq!(period_label(1), "1 AM - 2 AM");
        assert_eq!(period_label(11), "11 AM - 12 AM");
        assert_eq!(period_label(12), "12 PM - 1 PM");
        assert_eq!(period_label(13), "1 PM - 2 PM");
        assert_eq!(period_label(23), "11 PM - 12 AM");
    }

    #[test]
    fn test_period_table_is_a_partition() {
        // 24 distinct labels, one per hour
        let mut seen = std::collections::HashSet::new();
        for hour in 0..24 {
            assert!(seen.insert(period_label(hour)));
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn test_calendar_fields() {
        let cal = CalendarFields::from_timestamp(ts(2023, 3, 15, 21, 5));
        assert_eq!(cal.year, 2023);
        assert_eq!(cal.month_number, 3);
        assert_eq!(cal.month_name, "March");
        assert_eq!(cal.day, 15);
        assert_eq!(cal.weekday_name, "Wednesday");
        assert_eq!(cal.hour, 21);
        assert_eq!(cal.minute, 5);
        assert_eq!(cal.period_label, "9 PM - 10 PM");
    }

    #[test]
    fn test_record_without_timestamp() {
        let record = Record::new("Alice", "hello");
        assert!(record.timestamp.is_none());
        assert!(!record.has_valid_date());
        assert!(!record.is_notification());
        assert!(!record.is_media());
    }

    #[test]
    fn test_record_with_timestamp() {
        let record = Record::new("Alice", "hello").with_timestamp(ts(2024, 1, 1, 0, 0));
        assert!(record.has_valid_date());
        let cal = record.calendar.unwrap();
        assert_eq!(cal.weekday_name, "Monday");
        assert_eq!(cal.period_label, "12 AM - 1 AM");
    }

    #[test]
    fn test_media_literal_requires_trailing_newline() {
        assert!(Record::new("Alice", "<Media omitted>\n").is_media());
        assert!(!Record::new("Alice", "<Media omitted>").is_media());
    }

    #[test]
    fn test_notification_sentinel() {
        let record = Record::new(GROUP_NOTIFICATION, "Alice added Bob\n");
        assert!(record.is_notification());
    }
}
