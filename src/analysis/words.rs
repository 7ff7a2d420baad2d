//! Stopword-filtered word frequency and the word-cloud corpus.
//!
//! Both queries share the same tokenization: lowercase, split on
//! whitespace, skip system notifications and media placeholders, drop
//! stopwords.

use std::collections::HashMap;

use serde::Serialize;

use super::{Analyzer, SenderFilter};
use crate::record::Record;

/// A token with its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl Analyzer {
    /// The 20 most frequent stopword-filtered tokens over the filtered
    /// records, ties broken by first-encountered order.
    pub fn most_common_words(&self, filter: &SenderFilter) -> Vec<WordCount> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut tallies: Vec<(String, usize)> = Vec::new();

        for record in self.word_records(filter) {
            for token in record.body.to_lowercase().split_whitespace() {
                if self.stopwords().contains(token) {
                    continue;
                }
                match index.get(token) {
                    Some(&i) => tallies[i].1 += 1,
                    None => {
                        index.insert(token.to_string(), tallies.len());
                        tallies.push((token.to_string(), 1));
                    }
                }
            }
        }
        tallies.sort_by(|a, b| b.1.cmp(&a.1));

        tallies
            .into_iter()
            .take(20)
            .map(|(word, count)| WordCount { word, count })
            .collect()
    }

    /// The cleaned corpus for word-cloud rendering: every surviving token
    /// joined by single spaces. `None` when the filtered corpus is empty,
    /// so the presentation layer can show "no data".
    pub fn wordcloud_source(&self, filter: &SenderFilter) -> Option<String> {
        let mut corpus = String::new();
        for record in self.word_records(filter) {
            for token in record.body.to_lowercase().split_whitespace() {
                if self.stopwords().contains(token) {
                    continue;
                }
                if !corpus.is_empty() {
                    corpus.push(' ');
                }
                corpus.push_str(token);
            }
        }

        if corpus.is_empty() { None } else { Some(corpus) }
    }

    /// Records that feed the word analyses: filtered, authored (not the
    /// sentinel), and not the media placeholder.
    fn word_records<'a>(
        &'a self,
        filter: &'a SenderFilter,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.filtered(filter)
            .filter(|r| !r.is_notification() && !r.is_media())
    }
}
