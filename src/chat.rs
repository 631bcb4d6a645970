//! A loaded chat export and its per-author views.
//!
//! [`Chat`] holds the ordered record sequence for one export file: one
//! record per physical line, file order preserved (which the export keeps
//! chronological; this is assumed, not verified). It is built once at load
//! time and read-only thereafter; every derived view (comments, authors,
//! filters, buckets, aggregates) is a pure function over that snapshot.
//!
//! # Example
//!
//! ```
//! use chatlens::Chat;
//!
//! let chat = Chat::parse_str(
//!     "27/09/2018, 23:51:00 - Sil: Bradford....\n\
//!      27/09/2018, 23:52:00 - Aly: lovely stuff",
//! );
//! assert_eq!(chat.author_names(), ["Sil", "Aly"]);
//! assert_eq!(chat.comments().len(), 2);
//! ```

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::analysis::stats;
use crate::error::{ChatLensError, Result};
use crate::parser::parse_line;
use crate::record::{Comment, Record};

/// One loaded WhatsApp chat export.
#[derive(Debug, Clone)]
pub struct Chat {
    records: Vec<Record>,
    author_names: Vec<String>,
}

impl Chat {
    /// Loads and parses a chat export from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ChatLensError::Io`] if the file cannot be opened or read.
    /// Malformed lines are not errors; they are retained as
    /// [`Record::Unparsed`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse_str(&content))
    }

    /// Parses a chat export already held in memory.
    ///
    /// Each physical line becomes exactly one record. Known limitation of
    /// the source format: a message body spanning multiple lines is not
    /// merged back into its comment; the continuation lines surface as
    /// [`Record::Unparsed`].
    pub fn parse_str(content: &str) -> Self {
        let records: Vec<Record> = content.lines().map(parse_line).collect();

        // Distinct comment authors in first-seen order, fixed at load so
        // downstream output is reproducible.
        let mut author_names: Vec<String> = Vec::new();
        for record in &records {
            if let Record::Comment(comment) = record {
                if !author_names.iter().any(|n| n == &comment.author_name) {
                    author_names.push(comment.author_name.clone());
                }
            }
        }

        Self {
            records,
            author_names,
        }
    }

    /// All records, in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The comment subsequence, in file order.
    ///
    /// Media markers and unparseable lines are excluded.
    pub fn comments(&self) -> Vec<&Comment> {
        self.records.iter().filter_map(Record::as_comment).collect()
    }

    /// Distinct comment authors, in first-seen order.
    pub fn author_names(&self) -> &[String] {
        &self.author_names
    }

    /// Per-author views over this chat, one per distinct comment author.
    pub fn authors(&self) -> Vec<Author<'_>> {
        self.author_names
            .iter()
            .map(|name| Author {
                name: name.as_str(),
                chat: self,
            })
            .collect()
    }

    /// Looks up the author with the given name (exact match).
    ///
    /// # Errors
    ///
    /// Returns [`ChatLensError::AuthorNotFound`] if no comment in the chat
    /// carries that author name. This is deliberately not an empty result:
    /// an author with zero comments cannot exist by construction, so a miss
    /// always means the name is wrong.
    pub fn author_with_name(&self, name: &str) -> Result<Author<'_>> {
        self.author_names
            .iter()
            .find(|n| *n == name)
            .map(|n| Author {
                name: n.as_str(),
                chat: self,
            })
            .ok_or_else(|| ChatLensError::author_not_found(name))
    }

    /// Timestamp of the first timestamped record in file order.
    ///
    /// # Errors
    ///
    /// Returns [`ChatLensError::EmptyChat`] if the chat has no timestamped
    /// records at all (empty file, or nothing but system lines).
    pub fn start_datetime(&self) -> Result<DateTime<Utc>> {
        self.records
            .iter()
            .find_map(Record::timestamp)
            .ok_or(ChatLensError::EmptyChat)
    }

    /// Timestamp of the last timestamped record in file order.
    ///
    /// # Errors
    ///
    /// Returns [`ChatLensError::EmptyChat`], as [`start_datetime`](Self::start_datetime).
    pub fn end_datetime(&self) -> Result<DateTime<Utc>> {
        self.records
            .iter()
            .rev()
            .find_map(Record::timestamp)
            .ok_or(ChatLensError::EmptyChat)
    }

    /// Number of records (= number of lines in the export).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the export contained no lines.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A participant in the chat, viewed through a borrow of its [`Chat`].
///
/// An author owns no records; it is a name plus a back-reference used for
/// querying, so it can be created and dropped freely.
#[derive(Debug, Clone, Copy)]
pub struct Author<'a> {
    name: &'a str,
    chat: &'a Chat,
}

impl<'a> Author<'a> {
    /// The author's display name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// This author's comments, in file order.
    pub fn comments(&self) -> Vec<&'a Comment> {
        self.chat
            .records
            .iter()
            .filter_map(Record::as_comment)
            .filter(|c| c.author_name == self.name)
            .collect()
    }

    /// Number of comments this author has posted.
    pub fn post_count(&self) -> usize {
        self.comments().len()
    }

    /// Word frequencies across this author's comments, most used first.
    ///
    /// See [`stats::word_counts`] for tokenization and tie-break rules.
    pub fn word_counts(&self, exclude_common_words: bool) -> Vec<(String, usize)> {
        stats::word_counts(self.comments(), exclude_common_words)
    }

    /// This author's comment bursts: maximal runs of consecutive comments
    /// each posted less than 10 seconds after the previous one.
    pub fn bursts(&self) -> Vec<Vec<&'a Comment>> {
        stats::bursts(&self.comments())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SAMPLE: &str = "\
27/09/2018, 23:50:00 - Messages to this group are now secured with end-to-end encryption.
27/09/2018, 23:51:00 - Sil: Bradford....
27/09/2018, 23:52:00 - Aly: lovely stuff
27/09/2018, 23:53:00 - Sil: GIF omitted
27/09/2018, 23:54:00 - Sil: top marks";

    #[test]
    fn test_parse_str_record_per_line() {
        let chat = Chat::parse_str(SAMPLE);
        assert_eq!(chat.len(), 5);
        assert_eq!(chat.comments().len(), 3);
    }

    #[test]
    fn test_unparsed_excluded_from_views() {
        let chat = Chat::parse_str(SAMPLE);
        // System line and media marker contribute no comments or authors.
        assert_eq!(chat.author_names(), ["Sil", "Aly"]);
        assert!(chat.comments().iter().all(|c| !c.text.contains("omitted")));
    }

    #[test]
    fn test_start_and_end_datetime() {
        let chat = Chat::parse_str(SAMPLE);
        // The leading system line has no timestamp, so the range starts at
        // the first parseable record.
        assert_eq!(
            chat.start_datetime().unwrap(),
            Utc.with_ymd_and_hms(2018, 9, 27, 23, 51, 0).unwrap()
        );
        assert_eq!(
            chat.end_datetime().unwrap(),
            Utc.with_ymd_and_hms(2018, 9, 27, 23, 54, 0).unwrap()
        );
    }

    #[test]
    fn test_empty_chat_errors() {
        let chat = Chat::parse_str("");
        assert!(chat.is_empty());
        assert!(matches!(
            chat.start_datetime(),
            Err(ChatLensError::EmptyChat)
        ));
        assert!(matches!(chat.end_datetime(), Err(ChatLensError::EmptyChat)));
    }

    #[test]
    fn test_only_system_lines_is_empty_chat() {
        let chat = Chat::parse_str("not a chat line\nanother one");
        assert_eq!(chat.len(), 2);
        assert!(matches!(
            chat.start_datetime(),
            Err(ChatLensError::EmptyChat)
        ));
    }

    #[test]
    fn test_author_with_name() {
        let chat = Chat::parse_str(SAMPLE);
        let sil = chat.author_with_name("Sil").unwrap();
        assert_eq!(sil.name(), "Sil");
        // Media marker does not count as a comment.
        assert_eq!(sil.post_count(), 2);
    }

    #[test]
    fn test_author_with_name_missing() {
        let chat = Chat::parse_str(SAMPLE);
        let err = chat.author_with_name("Nobody").unwrap_err();
        assert!(matches!(err, ChatLensError::AuthorNotFound { name } if name == "Nobody"));
    }

    #[test]
    fn test_author_lookup_is_exact_match() {
        let chat = Chat::parse_str(SAMPLE);
        assert!(chat.author_with_name("sil").is_err());
    }

    #[test]
    fn test_authors_first_seen_order() {
        let chat = Chat::parse_str(SAMPLE);
        let names: Vec<&str> = chat.authors().iter().map(Author::name).collect();
        assert_eq!(names, ["Sil", "Aly"]);
    }
}
