//! One-call bundle of every aggregation for a filter selection.
//!
//! The presentation layer renders each widget from one field of
//! [`AnalysisReport`]; the whole struct serializes to JSON for the CLI
//! or any other consumer.

use serde::Serialize;

use super::{
    ActivityCount, ActivityHeatmap, Analyzer, BusyUsers, ChatStats, DailyCount, EmojiCount,
    MonthlyCount, SenderFilter, WordCount,
};

/// Every aggregation result for one filter selection.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// The selector value the report was built for (`"Overall"` or a
    /// participant name).
    pub selection: String,
    pub stats: ChatStats,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub week_activity: Vec<ActivityCount>,
    pub month_activity: Vec<ActivityCount>,
    pub heatmap: ActivityHeatmap,
    /// Present only for the overall view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub common_words: Vec<WordCount>,
    pub emoji: Vec<EmojiCount>,
    /// Absent when the stopword-filtered corpus is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordcloud_source: Option<String>,
}

impl Analyzer {
    /// Runs every query for the given filter and bundles the results.
    pub fn build_report(&self, filter: &SenderFilter) -> AnalysisReport {
        AnalysisReport {
            selection: filter.selection().to_string(),
            stats: self.fetch_stats(filter),
            monthly_timeline: self.monthly_timeline(filter),
            daily_timeline: self.daily_timeline(filter),
            week_activity: self.week_activity_map(filter),
            month_activity: self.month_activity_map(filter),
            heatmap: self.activity_heatmap(filter),
            busy_users: matches!(filter, SenderFilter::Overall)
                .then(|| self.most_busy_users()),
            common_words: self.most_common_words(filter),
            emoji: self.emoji_frequency(filter),
            wordcloud_source: self.wordcloud_source(filter),
        }
    }
}
