//! Weekday/month activity distributions and the 7x24 heatmap.

use chrono::Datelike;
use serde::Serialize;

use super::{Analyzer, SenderFilter};
use crate::record::{MONTHS, PERIODS, WEEKDAYS};

/// One row of an activity map: a weekday or month name with its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCount {
    pub name: &'static str,
    pub messages: usize,
}

/// Message counts indexed by weekday and period bucket.
///
/// The schema is fixed: rows are always the seven weekdays Monday first,
/// columns the 24 period labels in hour order, and cells are zero-filled
/// where nothing happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    pub rows: [&'static str; 7],
    pub columns: [&'static str; 24],
    pub counts: [[usize; 24]; 7],
}

impl Default for ActivityHeatmap {
    fn default() -> Self {
        Self {
            rows: WEEKDAYS,
            columns: PERIODS,
            counts: [[0; 24]; 7],
        }
    }
}

impl Analyzer {
    /// Message counts per weekday over valid-date records, busiest first.
    ///
    /// Weekdays with zero messages are omitted; ties keep the fixed
    /// Monday-first table order.
    pub fn week_activity_map(&self, filter: &SenderFilter) -> Vec<ActivityCount> {
        let mut counts = [0usize; 7];
        for record in self.filtered(filter) {
            if let Some(cal) = &record.calendar {
                counts[cal.date.weekday().num_days_from_monday() as usize] += 1;
            }
        }
        ranked(&WEEKDAYS, &counts)
    }

    /// Message counts per month name over valid-date records, busiest
    /// first. Same ordering rules as [`week_activity_map`](Self::week_activity_map).
    pub fn month_activity_map(&self, filter: &SenderFilter) -> Vec<ActivityCount> {
        let mut counts = [0usize; 12];
        for record in self.filtered(filter) {
            if let Some(cal) = &record.calendar {
                counts[(cal.month_number - 1) as usize] += 1;
            }
        }
        ranked(&MONTHS, &counts)
    }

    /// The 7x24 weekday-by-period heatmap over valid-date records.
    pub fn activity_heatmap(&self, filter: &SenderFilter) -> ActivityHeatmap {
        let mut heatmap = ActivityHeatmap::default();
        for record in self.filtered(filter) {
            if let Some(cal) = &record.calendar {
                let row = cal.date.weekday().num_days_from_monday() as usize;
                heatmap.counts[row][cal.hour as usize] += 1;
            }
        }
        heatmap
    }
}

/// Pairs names with nonzero counts and sorts descending; the stable sort
/// keeps the table order for ties.
fn ranked(names: &[&'static str], counts: &[usize]) -> Vec<ActivityCount> {
    let mut rows: Vec<ActivityCount> = names
        .iter()
        .zip(counts)
        .filter(|(_, count)| **count > 0)
        .map(|(name, count)| ActivityCount {
            name,
            messages: *count,
        })
        .collect();
    rows.sort_by(|a, b| b.messages.cmp(&a.messages));
    rows
}
