//! Filter comments by author, keywords, time of day, and datetime range.
//!
//! [`CommentFilter`] composes optional predicates; [`filter_comments`]
//! applies them. Predicates are combined with AND logic, an omitted
//! predicate imposes no constraint, and the input's relative order is
//! always preserved.
//!
//! # Examples
//!
//! ```
//! use chatlens::Chat;
//! use chatlens::analysis::{CommentFilter, filter_comments};
//!
//! let chat = Chat::parse_str(
//!     "27/09/2018, 23:51:00 - Sil: Bradford were brilliant\n\
//!      27/09/2018, 23:52:00 - Aly: Bradford who?",
//! );
//!
//! let filter = CommentFilter::new()
//!     .with_author("Sil")
//!     .with_key_word("bradford");
//! let hits = filter_comments(chat.comments(), &filter);
//!
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].author_name, "Sil");
//! ```
//!
//! # Behavior Notes
//!
//! - Author matching is exact; keyword matching is case-insensitive and
//!   token-based (not substring-of-whole-text)
//! - `min_*` bounds are inclusive, `max_*` bounds are exclusive
//! - Hour bounds are shorthand for `60 * hour` minutes and only apply when
//!   the corresponding minute bound was not given explicitly

use chrono::{DateTime, Utc};

use crate::record::Comment;

/// Composable predicates over comments.
///
/// All predicates are optional and independent; a comment must satisfy
/// every supplied predicate to pass. Application order cannot affect the
/// result (pure set-intersection filters).
///
/// # Example
///
/// ```
/// use chatlens::analysis::CommentFilter;
///
/// // Evening comments mentioning both words
/// let filter = CommentFilter::new()
///     .with_key_words(["bradford", "city"])
///     .with_min_hour(18)
///     .with_max_hour(24);
/// assert!(filter.is_active());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommentFilter {
    /// Exact author name match.
    pub author_name: Option<String>,

    /// A word that must appear among the comment's tokens.
    pub key_word: Option<String>,

    /// Words that must all independently appear among the tokens.
    pub key_words: Vec<String>,

    /// Inclusive lower bound on minute of day (0–1439).
    pub min_minute: Option<u32>,

    /// Exclusive upper bound on minute of day.
    pub max_minute: Option<u32>,

    /// Shorthand for `min_minute = 60 * min_hour`; ignored when
    /// `min_minute` is set explicitly.
    pub min_hour: Option<u32>,

    /// Shorthand for `max_minute = 60 * max_hour`; ignored when
    /// `max_minute` is set explicitly.
    pub max_hour: Option<u32>,

    /// Inclusive lower datetime bound.
    pub min_datetime: Option<DateTime<Utc>>,

    /// Exclusive upper datetime bound.
    pub max_datetime: Option<DateTime<Utc>>,
}

impl CommentFilter {
    /// Creates an empty filter; all comments pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only comments by this author (exact match).
    #[must_use]
    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    /// Keeps only comments containing this word token (case-insensitive).
    #[must_use]
    pub fn with_key_word(mut self, word: impl Into<String>) -> Self {
        self.key_word = Some(word.into());
        self
    }

    /// Keeps only comments containing every one of these word tokens.
    #[must_use]
    pub fn with_key_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the inclusive minute-of-day lower bound.
    #[must_use]
    pub fn with_min_minute(mut self, minute: u32) -> Self {
        self.min_minute = Some(minute);
        self
    }

    /// Sets the exclusive minute-of-day upper bound.
    #[must_use]
    pub fn with_max_minute(mut self, minute: u32) -> Self {
        self.max_minute = Some(minute);
        self
    }

    /// Sets the hour-of-day lower bound (shorthand for `60 * hour` minutes).
    #[must_use]
    pub fn with_min_hour(mut self, hour: u32) -> Self {
        self.min_hour = Some(hour);
        self
    }

    /// Sets the hour-of-day upper bound (shorthand for `60 * hour` minutes).
    #[must_use]
    pub fn with_max_hour(mut self, hour: u32) -> Self {
        self.max_hour = Some(hour);
        self
    }

    /// Sets the inclusive datetime lower bound.
    #[must_use]
    pub fn with_min_datetime(mut self, dt: DateTime<Utc>) -> Self {
        self.min_datetime = Some(dt);
        self
    }

    /// Sets the exclusive datetime upper bound.
    #[must_use]
    pub fn with_max_datetime(mut self, dt: DateTime<Utc>) -> Self {
        self.max_datetime = Some(dt);
        self
    }

    /// Returns `true` if any predicate is set.
    pub fn is_active(&self) -> bool {
        self.author_name.is_some()
            || self.key_word.is_some()
            || !self.key_words.is_empty()
            || self.min_minute.is_some()
            || self.max_minute.is_some()
            || self.min_hour.is_some()
            || self.max_hour.is_some()
            || self.min_datetime.is_some()
            || self.max_datetime.is_some()
    }

    /// Effective minute bounds after folding in the hour shorthand.
    fn minute_bounds(&self) -> (Option<u32>, Option<u32>) {
        let min = self.min_minute.or(self.min_hour.map(|h| 60 * h));
        let max = self.max_minute.or(self.max_hour.map(|h| 60 * h));
        (min, max)
    }

    /// Returns `true` if the comment satisfies every supplied predicate.
    pub fn matches(&self, comment: &Comment) -> bool {
        if let Some(ref name) = self.author_name {
            if &comment.author_name != name {
                return false;
            }
        }

        if let Some(ref word) = self.key_word {
            if !comment.contains_word(word) {
                return false;
            }
        }

        if !self.key_words.iter().all(|w| comment.contains_word(w)) {
            return false;
        }

        let (min_minute, max_minute) = self.minute_bounds();
        let minute = comment.minute_of_day();
        if min_minute.is_some_and(|min| minute < min) {
            return false;
        }
        if max_minute.is_some_and(|max| minute >= max) {
            return false;
        }

        if self.min_datetime.is_some_and(|min| comment.timestamp < min) {
            return false;
        }
        if self.max_datetime.is_some_and(|max| comment.timestamp >= max) {
            return false;
        }

        true
    }
}

/// Filters a comment sequence, preserving its relative order.
///
/// # Example
///
/// ```
/// use chatlens::Chat;
/// use chatlens::analysis::{CommentFilter, filter_comments};
///
/// let chat = Chat::parse_str("27/09/2018, 23:51:00 - Sil: hello");
/// let all = filter_comments(chat.comments(), &CommentFilter::new());
/// assert_eq!(all.len(), 1);
/// ```
pub fn filter_comments<'a>(
    comments: impl IntoIterator<Item = &'a Comment>,
    filter: &CommentFilter,
) -> Vec<&'a Comment> {
    comments
        .into_iter()
        .filter(|c| filter.matches(c))
        .collect()
}
