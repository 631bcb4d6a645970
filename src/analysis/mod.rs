//! Query and aggregation helpers over a loaded chat.
//!
//! Everything here is a pure function over the immutable record snapshot
//! held by [`Chat`](crate::Chat): filters compose predicates, buckets
//! partition comments into fixed-width time windows, and stats compute
//! word frequencies and burst groupings. Independent callers may run these
//! repeatedly or in parallel without coordination.

pub mod bucket;
pub mod filter;
pub mod stats;

// Re-export the most used items for convenience
pub use bucket::{DateBucket, MinuteBucket, bucket_by_date, bucket_by_time_of_day, count_series};
pub use filter::{CommentFilter, filter_comments};
pub use stats::{BURST_GAP_SECONDS, STOP_WORDS, bursts, bursts_with_gap, word_counts};
