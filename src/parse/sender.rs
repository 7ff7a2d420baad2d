//! Sender attribution.
//!
//! Decides whether a segment body is an authored message (`Name: text`) or
//! a system notification, which carries no sender prefix.

use regex::Regex;

use crate::record::GROUP_NOTIFICATION;

/// Non-greedy `anything: ` prefix. `(?s)` lets the sender span newlines,
/// and `.+?` forbids an empty capture before the colon.
pub(crate) const SENDER_PATTERN: &str = r"(?s)(.+?):\s";

/// Splits segment bodies into sender and message text.
pub struct SenderAttributor {
    pattern: Regex,
}

impl SenderAttributor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(SENDER_PATTERN).unwrap(),
        }
    }

    /// Attributes one body, returning `(sender, message)`.
    ///
    /// The first colon-plus-whitespace wins: the capture before it is the
    /// sender, and the rest is the message. The body is split at every
    /// further `x: ` occurrence and re-joined with single spaces, so
    /// internal colons are dropped exactly as the split produces them. No
    /// match at all means a system notification: the sentinel sender plus
    /// the unchanged body.
    pub fn attribute(&self, body: &str) -> (String, String) {
        let mut pieces: Vec<&str> = Vec::new();
        let mut consumed = 0;

        for caps in self.pattern.captures_iter(body) {
            let whole = caps.get(0).unwrap();
            pieces.push(&body[consumed..whole.start()]);
            pieces.push(caps.get(1).unwrap().as_str());
            consumed = whole.end();
        }
        pieces.push(&body[consumed..]);

        if pieces.len() > 1 {
            (pieces[1].to_string(), pieces[2..].join(" "))
        } else {
            (GROUP_NOTIFICATION.to_string(), body.to_string())
        }
    }
}

impl Default for SenderAttributor {
    fn default() -> Self {
        Self::new()
    }
}
