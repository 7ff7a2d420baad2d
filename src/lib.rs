//! # Chatlens
//!
//! A Rust library for turning raw WhatsApp chat exports into structured
//! records and answering a fixed set of analytical questions over them.
//!
//! ## Overview
//!
//! A WhatsApp export is a single text blob of interleaved timestamped
//! lines. Chatlens splits it at every `date, time -` boundary, parses the
//! ambiguous date encodings (2- and 4-digit years, Unicode space variants
//! around AM/PM), separates authored messages from system notifications,
//! derives calendar fields and hour-range period buckets, and then runs
//! pure aggregation queries over the resulting immutable record set:
//! message/word/media/link counts, monthly and daily timelines,
//! weekday/month activity maps, a 7x24 activity heatmap, busiest
//! participants, and stopword-filtered word and emoji frequencies.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let raw = "15/03/23, 9:05 PM - Alice: the plan sounds good\n\
//!            15/03/23, 9:06 PM - Bob: <Media omitted>\n";
//!
//! let records = preprocess(raw);
//! let analyzer = Analyzer::new(
//!     records,
//!     LinkExtractor::new(),
//!     StopwordSet::from_text("the"),
//! );
//!
//! let stats = analyzer.fetch_stats(&SenderFilter::Overall);
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.media, 1);
//!
//! let words = analyzer.most_common_words(&SenderFilter::Overall);
//! assert_eq!(words[0].word, "plan");
//! ```
//!
//! ## Module Structure
//!
//! - [`parse`] — the preprocessing pipeline
//!   - [`Splitter`](parse::Splitter) — boundary detection
//!   - [`parse_timestamp`](parse::parse_timestamp) — two-format date fallback
//!   - [`SenderAttributor`](parse::SenderAttributor) — sender vs. notification
//!   - [`preprocess`](parse::preprocess) — the whole pipeline in one call
//! - [`record`] — [`Record`], derived [`CalendarFields`](record::CalendarFields),
//!   and the fixed weekday/month/period lookup tables
//! - [`analysis`] — the aggregation engine
//!   - [`Analyzer`](analysis::Analyzer), [`SenderFilter`](analysis::SenderFilter),
//!     [`AnalysisReport`](analysis::AnalysisReport)
//! - [`stopwords`] — [`StopwordSet`](stopwords::StopwordSet)
//! - [`links`] — [`LinkExtractor`](links::LinkExtractor)
//! - [`error`] — [`ChatlensError`], [`Result`]
//! - [`cli`] — CLI argument types (requires the `cli` feature)
//! - [`prelude`] — convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod links;
pub mod parse;
pub mod record;
pub mod stopwords;

// Re-export the main types at the crate root for convenience
pub use analysis::{Analyzer, SenderFilter};
pub use error::{ChatlensError, Result};
pub use parse::preprocess;
pub use record::Record;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Record;

    pub use crate::error::{ChatlensError, Result};

    pub use crate::parse::{SenderAttributor, Splitter, parse_timestamp, preprocess};

    pub use crate::record::{CalendarFields, GROUP_NOTIFICATION, MEDIA_PLACEHOLDER};

    pub use crate::analysis::{
        ActivityHeatmap, AnalysisReport, Analyzer, BusyUsers, ChatStats, SenderFilter,
    };

    pub use crate::links::LinkExtractor;
    pub use crate::stopwords::StopwordSet;
}
