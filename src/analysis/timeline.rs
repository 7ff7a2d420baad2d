//! Monthly and daily message timelines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::{Analyzer, SenderFilter};
use crate::record::MONTHS;

/// One (year, month) group of the monthly timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    /// 1-based month number, the secondary sort key.
    pub month_number: u32,
    pub month_name: &'static str,
    /// Axis label, `"{Month}-{year}"`.
    pub label: String,
    pub messages: usize,
}

/// One calendar-date group of the daily timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub messages: usize,
}

impl Analyzer {
    /// Message counts grouped by (year, month), ordered by year then month
    /// number. Only records with a valid date take part.
    pub fn monthly_timeline(&self, filter: &SenderFilter) -> Vec<MonthlyCount> {
        let mut groups: BTreeMap<(i32, u32), usize> = BTreeMap::new();
        for record in self.filtered(filter) {
            if let Some(cal) = &record.calendar {
                *groups.entry((cal.year, cal.month_number)).or_default() += 1;
            }
        }

        groups
            .into_iter()
            .map(|((year, month_number), messages)| {
                let month_name = MONTHS[(month_number - 1) as usize];
                MonthlyCount {
                    year,
                    month_number,
                    month_name,
                    label: format!("{month_name}-{year}"),
                    messages,
                }
            })
            .collect()
    }

    /// Message counts grouped by calendar date, chronological. Only records
    /// with a valid date take part.
    pub fn daily_timeline(&self, filter: &SenderFilter) -> Vec<DailyCount> {
        let mut groups: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for record in self.filtered(filter) {
            if let Some(cal) = &record.calendar {
                *groups.entry(cal.date).or_default() += 1;
            }
        }

        groups
            .into_iter()
            .map(|(date, messages)| DailyCount { date, messages })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::LinkExtractor;
    use crate::parse::preprocess;
    use crate::stopwords::StopwordSet;

    fn analyzer(raw: &str) -> Analyzer {
        Analyzer::new(
            preprocess(raw),
            LinkExtractor::new(),
            StopwordSet::from_text(""),
        )
    }

    const SAMPLE: &str = "\
15/03/23, 9:05 PM - Alice: one\n\
16/03/23, 9:05 PM - Alice: two\n\
02/01/24, 9:05 AM - Bob: three\n\
15/03/23, 9:06 PM - Bob: four\n";

    #[test]
    fn test_monthly_grouping_and_order() {
        let timeline = analyzer(SAMPLE).monthly_timeline(&SenderFilter::Overall);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].label, "March-2023");
        assert_eq!(timeline[0].messages, 3);
        assert_eq!(timeline[1].label, "January-2024");
        assert_eq!(timeline[1].messages, 1);
    }

    #[test]
    fn test_daily_grouping_chronological() {
        let timeline = analyzer(SAMPLE).daily_timeline(&SenderFilter::Overall);
        let expected = [
            (NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(), 2),
            (NaiveDate::from_ymd_opt(2023, 3, 16).unwrap(), 1),
            (NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 1),
        ];
        let days: Vec<(NaiveDate, usize)> =
            timeline.iter().map(|d| (d.date, d.messages)).collect();
        assert_eq!(days, expected);
    }

    #[test]
    fn test_invalid_dates_excluded() {
        // Second record has a 24-hour time: no valid date.
        let raw = "15/03/23, 9:05 PM - Alice: one\n15/03/23, 21:06 - Alice: two\n";
        let a = analyzer(raw);
        assert_eq!(a.records().len(), 2);
        let timeline = a.monthly_timeline(&SenderFilter::Overall);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].messages, 1);
    }

    #[test]
    fn test_sender_filter() {
        let timeline = analyzer(SAMPLE).monthly_timeline(&SenderFilter::from_selection("Bob"));
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].messages, 1);
    }

    #[test]
    fn test_empty_result() {
        assert!(analyzer("").monthly_timeline(&SenderFilter::Overall).is_empty());
        assert!(analyzer("").daily_timeline(&SenderFilter::Overall).is_empty());
    }
}
