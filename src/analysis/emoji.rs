//! Emoji frequency over message bodies.

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;

use super::{Analyzer, SenderFilter};

/// Single-codepoint emoji class.
///
/// `Emoji_Presentation` covers characters that render as emoji by default;
/// `Extended_Pictographic` adds the text-presentation pictographs (hearts,
/// stars) without admitting plain digits, `#` or `*`, which the bare
/// `Emoji` property would.
const EMOJI_CLASS: &str = r"[\p{Emoji_Presentation}\p{Extended_Pictographic}]";

/// One emoji with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Character-level membership test against the emoji code-point class.
#[derive(Debug, Clone)]
pub(crate) struct EmojiScanner {
    class: Regex,
}

impl EmojiScanner {
    pub(crate) fn new() -> Self {
        Self {
            class: Regex::new(EMOJI_CLASS).unwrap(),
        }
    }

    /// Every emoji character in the text, one match per code point, in
    /// order of appearance.
    pub(crate) fn emojis<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.class.find_iter(text).map(|m| m.as_str())
    }
}

impl Analyzer {
    /// Frequency of every distinct emoji across the filtered bodies,
    /// descending count, no truncation.
    ///
    /// Every record is scanned, system notifications and media rows
    /// included. Ties keep first-encountered order.
    pub fn emoji_frequency(&self, filter: &SenderFilter) -> Vec<EmojiCount> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut tallies: Vec<(String, usize)> = Vec::new();

        for record in self.filtered(filter) {
            for emoji in self.emoji_scanner().emojis(&record.body) {
                match index.get(emoji) {
                    Some(&i) => tallies[i].1 += 1,
                    None => {
                        index.insert(emoji.to_string(), tallies.len());
                        tallies.push((emoji.to_string(), 1));
                    }
                }
            }
        }
        tallies.sort_by(|a, b| b.1.cmp(&a.1));

        tallies
            .into_iter()
            .map(|(emoji, count)| EmojiCount { emoji, count })
            .collect()
    }
}
