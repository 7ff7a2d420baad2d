//! The aggregation engine: pure queries over an immutable record set.
//!
//! [`Analyzer`] owns the record set plus its two external dependencies,
//! the [`LinkExtractor`] and the [`StopwordSet`]. Every query is a pure
//! read, optionally restricted to one participant via [`SenderFilter`];
//! running a query twice on the same analyzer gives identical results.
//!
//! | Query | Result |
//! |-------|--------|
//! | [`fetch_stats`](Analyzer::fetch_stats) | [`ChatStats`] scalars |
//! | [`monthly_timeline`](Analyzer::monthly_timeline) | [`MonthlyCount`] rows |
//! | [`daily_timeline`](Analyzer::daily_timeline) | [`DailyCount`] rows |
//! | [`week_activity_map`](Analyzer::week_activity_map) | [`ActivityCount`] rows |
//! | [`month_activity_map`](Analyzer::month_activity_map) | [`ActivityCount`] rows |
//! | [`activity_heatmap`](Analyzer::activity_heatmap) | [`ActivityHeatmap`] 7x24 |
//! | [`most_busy_users`](Analyzer::most_busy_users) | [`BusyUsers`] (overall only) |
//! | [`most_common_words`](Analyzer::most_common_words) | [`WordCount`] rows |
//! | [`emoji_frequency`](Analyzer::emoji_frequency) | [`EmojiCount`] rows |
//! | [`wordcloud_source`](Analyzer::wordcloud_source) | cleaned corpus string |
//!
//! Empty input, or a filter that matches nothing, produces the explicit
//! empty result of each query, never an error.

mod activity;
mod emoji;
mod report;
mod stats;
mod timeline;
mod users;
mod words;

pub use activity::{ActivityCount, ActivityHeatmap};
pub use emoji::EmojiCount;
pub use report::AnalysisReport;
pub use stats::ChatStats;
pub use timeline::{DailyCount, MonthlyCount};
pub use users::{BusyUsers, UserCount, UserShare};
pub use words::WordCount;

use std::collections::BTreeSet;

use crate::links::LinkExtractor;
use crate::record::{GROUP_NOTIFICATION, Record};
use crate::stopwords::StopwordSet;

use emoji::EmojiScanner;

/// Selector value the presentation layer uses for "no filter".
pub const OVERALL: &str = "Overall";

/// Restricts aggregations to one participant, or [`Overall`](SenderFilter::Overall)
/// for everyone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SenderFilter {
    /// No restriction.
    #[default]
    Overall,
    /// Only records whose sender equals the name exactly.
    Sender(String),
}

impl SenderFilter {
    /// Parses a selector value: the literal `"Overall"` means no filter,
    /// anything else names a participant.
    pub fn from_selection(value: &str) -> Self {
        if value == OVERALL {
            Self::Overall
        } else {
            Self::Sender(value.to_string())
        }
    }

    /// Returns `true` if the record passes the filter.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::Overall => true,
            Self::Sender(name) => record.sender == *name,
        }
    }

    /// The selector value this filter came from.
    pub fn selection(&self) -> &str {
        match self {
            Self::Overall => OVERALL,
            Self::Sender(name) => name,
        }
    }
}

/// Aggregation engine over one immutable record set.
///
/// # Example
///
/// ```
/// use chatlens::analysis::{Analyzer, SenderFilter};
/// use chatlens::links::LinkExtractor;
/// use chatlens::parse::preprocess;
/// use chatlens::stopwords::StopwordSet;
///
/// let records = preprocess("15/03/23, 9:05 PM - Alice: hi there\n");
/// let analyzer = Analyzer::new(records, LinkExtractor::new(), StopwordSet::from_text("hi"));
///
/// let stats = analyzer.fetch_stats(&SenderFilter::Overall);
/// assert_eq!(stats.messages, 1);
/// assert_eq!(stats.words, 2);
/// ```
pub struct Analyzer {
    records: Vec<Record>,
    links: LinkExtractor,
    stopwords: StopwordSet,
    emoji: EmojiScanner,
}

impl Analyzer {
    /// Builds the engine from a record set and its external dependencies.
    pub fn new(records: Vec<Record>, links: LinkExtractor, stopwords: StopwordSet) -> Self {
        Self {
            records,
            links,
            stopwords,
            emoji: EmojiScanner::new(),
        }
    }

    /// The underlying record set, in transcript order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct participant names for a selector list: sorted, sentinel
    /// excluded, `"Overall"` first.
    pub fn participants(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .records
            .iter()
            .map(|r| r.sender.as_str())
            .filter(|s| *s != GROUP_NOTIFICATION)
            .collect();

        let mut out = Vec::with_capacity(unique.len() + 1);
        out.push(OVERALL.to_string());
        out.extend(unique.into_iter().map(str::to_owned));
        out
    }

    pub(crate) fn filtered<'a>(
        &'a self,
        filter: &'a SenderFilter,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| filter.matches(r))
    }

    pub(crate) fn links(&self) -> &LinkExtractor {
        &self.links
    }

    pub(crate) fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub(crate) fn emoji_scanner(&self) -> &EmojiScanner {
        &self.emoji
    }
}
