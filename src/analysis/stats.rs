//! Per-author aggregation: word frequencies and burst detection.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};

use crate::record::Comment;

/// Common English words and contractions excluded from word counts.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "i", "to", "of", "you", "is", "and", "for", "in", "on", "it", "my", "be", "i'm",
    "that", "have", "are", "with", "at", "it's", "we", "me", "he", "your", "do", "no", "get",
    "not", "but", "just", "was", "like", "so", "oh", "if", "can", "this", "don't", "all", "got",
    "as", "will",
];

/// Two comments this many seconds (or more) apart belong to different
/// bursts.
pub const BURST_GAP_SECONDS: i64 = 10;

/// Counts word usage across a comment sequence, most used first.
///
/// Tokenization follows [`Comment::words`]: single-space split, empty
/// tokens discarded, lowercased. With `exclude_common_words`, any token in
/// [`STOP_WORDS`] is dropped before counting.
///
/// Ties are broken by first-seen order (a stable sort over the
/// accumulation order), which keeps the result deterministic without
/// implying any alphabetical ranking.
///
/// # Example
///
/// ```
/// use chatlens::Chat;
/// use chatlens::analysis::word_counts;
///
/// let chat = Chat::parse_str(
///     "27/09/2018, 23:51:00 - Sil: the ball hit the bar\n\
///      27/09/2018, 23:52:00 - Sil: ball over the bar again",
/// );
/// let counts = word_counts(chat.comments(), true);
/// assert_eq!(counts[0], ("ball".to_string(), 2));
/// // "the" is a stop word and never appears
/// assert!(counts.iter().all(|(w, _)| w != "the"));
/// ```
pub fn word_counts<'a>(
    comments: impl IntoIterator<Item = &'a Comment>,
    exclude_common_words: bool,
) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for comment in comments {
        for word in comment.lowercase_words() {
            if exclude_common_words && STOP_WORDS.contains(&word.as_str()) {
                continue;
            }
            if let Some(&i) = index.get(&word) {
                counts[i].1 += 1;
            } else {
                index.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    // Stable: equal counts keep their first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Groups comments into bursts with the default 10-second gap.
///
/// See [`bursts_with_gap`].
pub fn bursts<'a>(comments: &[&'a Comment]) -> Vec<Vec<&'a Comment>> {
    bursts_with_gap(comments, TimeDelta::seconds(BURST_GAP_SECONDS))
}

/// Groups comments into maximal runs posted in quick succession.
///
/// Scans in the given (chronological) order: a comment whose gap since the
/// previous one is `>= gap` starts a new burst, and the very first comment
/// always does. Every returned burst is non-empty.
///
/// # Example
///
/// ```
/// use chatlens::Chat;
/// use chatlens::analysis::bursts;
///
/// let chat = Chat::parse_str(
///     "27/09/2018, 23:51:00 - Sil: one\n\
///      27/09/2018, 23:51:05 - Sil: two\n\
///      27/09/2018, 23:52:00 - Sil: much later",
/// );
/// let comments = chat.comments();
/// let bursts = bursts(&comments);
/// assert_eq!(bursts.len(), 2);
/// assert_eq!(bursts[0].len(), 2);
/// ```
pub fn bursts_with_gap<'a>(comments: &[&'a Comment], gap: TimeDelta) -> Vec<Vec<&'a Comment>> {
    let mut bursts: Vec<Vec<&'a Comment>> = Vec::new();
    let mut last_time: Option<DateTime<Utc>> = None;

    for &comment in comments {
        let continues = last_time.is_some_and(|prev| comment.timestamp - prev < gap);
        match bursts.last_mut() {
            Some(burst) if continues => burst.push(comment),
            _ => bursts.push(vec![comment]),
        }
        last_time = Some(comment.timestamp);
    }

    bursts
}
