//! Headline counters: messages, words, media, links.

use serde::Serialize;

use super::{Analyzer, SenderFilter};

/// Scalar totals for one filter selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    /// Record count, unparseable-timestamp records included.
    pub messages: usize,
    /// Whitespace-split word count over every body.
    pub words: usize,
    /// Records whose body equals the media placeholder literal.
    pub media: usize,
    /// Link-like substrings found across bodies.
    pub links: usize,
}

impl Analyzer {
    /// Message, word, media and link totals over the filtered records.
    ///
    /// Counts every record that passes the filter, system notifications
    /// and invalid-timestamp records included.
    pub fn fetch_stats(&self, filter: &SenderFilter) -> ChatStats {
        let mut stats = ChatStats::default();
        for record in self.filtered(filter) {
            stats.messages += 1;
            stats.words += record.body.split_whitespace().count();
            if record.is_media() {
                stats.media += 1;
            }
            stats.links += self.links().count(&record.body);
        }
        stats
    }
}
