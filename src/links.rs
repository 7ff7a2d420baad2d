//! Link detection inside message bodies.
//!
//! The original kept a process-global URL extractor; here it is an
//! explicit value handed to the [`Analyzer`](crate::analysis::Analyzer) at
//! construction.

use regex::Regex;

/// Scheme-prefixed URLs plus bare `www.` links.
const LINK_PATTERN: &str = r#"(?:https?://|www\.)[^\s<>"']+"#;

/// Finds link-like substrings in message text.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    pattern: Regex,
}

impl LinkExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(LINK_PATTERN).unwrap(),
        }
    }

    /// Number of link-like substrings in one body.
    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }

    /// The link substrings themselves, in order of appearance.
    pub fn find<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern.find_iter(text).map(|m| m.as_str()).collect()
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}
