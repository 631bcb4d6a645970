//! # Chatlens
//!
//! A Rust library for parsing exported WhatsApp chat logs into structured
//! records and analysing them: keyword filtering, time-bucketing,
//! word-frequency counts, and burst detection.
//!
//! ## Overview
//!
//! One export line becomes one typed [`Record`]: a [`Comment`] with text,
//! a media placeholder, or an unparseable system line. A [`Chat`] holds
//! the ordered record sequence for a file and answers author and
//! start/end-time queries; everything in [`analysis`] is a pure function
//! over that immutable snapshot.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let chat = Chat::load("_chat.txt")?;
//!
//!     // Every comment mentioning a keyword
//!     let filter = CommentFilter::new().with_key_word("bradford");
//!     for comment in filter_comments(chat.comments(), &filter) {
//!         println!("{comment}");
//!     }
//!
//!     // Each author's most used words
//!     for author in chat.authors() {
//!         let top = author.word_counts(true);
//!         println!("{}: {:?}", author.name(), &top[..top.len().min(5)]);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`record`] — [`Record`], [`Comment`], [`MediaMarker`](record::MediaMarker), [`MediaKind`](record::MediaKind)
//! - [`parser`] — [`parse_line`](parser::parse_line), the line-to-record decomposition
//! - [`chat`] — [`Chat`] and the borrow-based [`Author`] view
//! - [`analysis`] — filtering, bucketing, and aggregation
//!   - [`analysis::filter`] — [`CommentFilter`](analysis::CommentFilter), [`filter_comments`](analysis::filter_comments)
//!   - [`analysis::bucket`] — [`bucket_by_date`](analysis::bucket_by_date), [`bucket_by_time_of_day`](analysis::bucket_by_time_of_day)
//!   - [`analysis::stats`] — [`word_counts`](analysis::word_counts), [`bursts`](analysis::bursts)
//! - [`cli`] — clap argument types for the binary
//! - [`error`] — [`ChatLensError`], [`Result`]
//! - [`prelude`] — convenient re-exports

pub mod analysis;
pub mod chat;
pub mod cli;
pub mod error;
pub mod parser;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use chat::{Author, Chat};
pub use error::{ChatLensError, Result};
pub use record::{Comment, Record};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::chat::{Author, Chat};
    pub use crate::record::{Comment, MediaKind, MediaMarker, Record};

    // Error types
    pub use crate::error::{ChatLensError, Result};

    // Parsing
    pub use crate::parser::parse_line;

    // Analysis
    pub use crate::analysis::{
        CommentFilter, DateBucket, MinuteBucket, bucket_by_date, bucket_by_time_of_day, bursts,
        bursts_with_gap, count_series, filter_comments, word_counts,
    };
}
