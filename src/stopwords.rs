//! Stopword list loading and membership.
//!
//! The list is a flat whitespace-separated token file (the original ships
//! one for Hinglish). It is loaded once and treated as an immutable set;
//! its absence is a fatal configuration error, not a silent fallback.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{ChatlensError, Result};

/// An immutable set of tokens excluded from the word-frequency analyses.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Loads a whitespace-separated stopword file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Stopwords`] when the file is missing or
    /// unreadable.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ChatlensError::stopwords(path, source))?;
        Ok(Self::from_text(&text))
    }

    /// Builds the set from an in-memory whitespace-separated token list.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Returns `true` if the token is a stopword.
    ///
    /// Tokens are compared as-is; callers lowercase before asking.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_text() {
        let set = StopwordSet::from_text("the a an\nand or\tto");
        assert_eq!(set.len(), 6);
        assert!(set.contains("the"));
        assert!(set.contains("to"));
        assert!(!set.contains("hello"));
    }

    #[test]
    fn test_empty_text() {
        let set = StopwordSet::from_text("");
        assert!(set.is_empty());
        assert!(!set.contains("anything"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "hai ho kya\nnahi").unwrap();
        let set = StopwordSet::load(file.path()).unwrap();
        assert_eq!(set.len(), 4);
        assert!(set.contains("kya"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = StopwordSet::load("definitely/not/here.txt").unwrap_err();
        assert!(err.is_stopwords());
    }
}
