//! Typed representation of one chat-log line.
//!
//! Every physical line of a WhatsApp export becomes exactly one [`Record`]:
//! a [`Comment`] with text, a [`MediaMarker`] placeholder, or an
//! [`Record::Unparsed`] line (system events, name changes, anything the
//! parser could not decompose). Turning the line into a fixed-shape record
//! once at parse time replaces the repeated ad-hoc string splitting the
//! export format otherwise invites.
//!
//! # Examples
//!
//! ```
//! use chatlens::parser::parse_line;
//!
//! let record = parse_line("27/09/2018, 23:51:00 - Sil: Bradford....");
//! assert!(record.is_comment());
//! assert_eq!(record.author_name(), Some("Sil"));
//! ```

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// The kind of media a [`MediaMarker`] stands in for.
///
/// Variant order matches the parser's detection order: gif, audio, video,
/// image. A comment has no kind at all rather than a `None` kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// `GIF omitted` placeholder
    Gif,
    /// `audio omitted` placeholder
    Audio,
    /// `video omitted` placeholder
    Video,
    /// The exact `<image omitted>` marker (with its invisible LTR prefix)
    Image,
}

/// An actual chat message with free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// The original line as it appeared in the export.
    pub raw_line: String,

    /// When the comment was posted.
    pub timestamp: DateTime<Utc>,

    /// Display name of the person that posted the comment.
    pub author_name: String,

    /// Everything after `"{author}: "`.
    pub text: String,
}

impl Comment {
    /// Minute of the day this comment was posted, in `0..=1439`.
    pub fn minute_of_day(&self) -> u32 {
        60 * self.timestamp.hour() + self.timestamp.minute()
    }

    /// Iterates over the word tokens of the text.
    ///
    /// Tokens are split on single spaces; empty tokens (from runs of
    /// spaces) are discarded.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ').filter(|w| !w.is_empty())
    }

    /// Iterates over the word tokens of the text, lowercased.
    pub fn lowercase_words(&self) -> impl Iterator<Item = String> + '_ {
        self.words().map(str::to_lowercase)
    }

    /// Returns `true` if any word token equals `word`, case-insensitively.
    ///
    /// This is a token match, not a substring match: `"rain"` does not
    /// match a comment containing only `"training"`.
    pub fn contains_word(&self, word: &str) -> bool {
        let needle = word.to_lowercase();
        self.lowercase_words().any(|w| w == needle)
    }
}

impl std::fmt::Display for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.author_name,
            self.text
        )
    }
}

/// A placeholder left behind where the export omitted media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaMarker {
    /// The original line as it appeared in the export.
    pub raw_line: String,

    /// When the media was posted.
    pub timestamp: DateTime<Utc>,

    /// Display name of the person that posted the media.
    pub author_name: String,

    /// Which kind of media was omitted.
    pub kind: MediaKind,
}

/// One parsed unit derived from a single input line.
///
/// A record is exactly one variant. Unparseable lines are retained rather
/// than dropped so line-to-record correspondence survives for debugging,
/// but they are excluded from every derived view on
/// [`Chat`](crate::Chat).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    /// A chat message with text.
    Comment(Comment),

    /// A media placeholder (image, gif, audio, video).
    Media(MediaMarker),

    /// A system event, name change, or otherwise undecipherable line.
    Unparsed {
        /// The original line as it appeared in the export.
        raw_line: String,
    },
}

impl Record {
    /// The original line this record was parsed from.
    pub fn raw_line(&self) -> &str {
        match self {
            Record::Comment(c) => &c.raw_line,
            Record::Media(m) => &m.raw_line,
            Record::Unparsed { raw_line } => raw_line,
        }
    }

    /// The timestamp, absent on unparseable lines.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Record::Comment(c) => Some(c.timestamp),
            Record::Media(m) => Some(m.timestamp),
            Record::Unparsed { .. } => None,
        }
    }

    /// The author name, absent on unparseable lines.
    pub fn author_name(&self) -> Option<&str> {
        match self {
            Record::Comment(c) => Some(&c.author_name),
            Record::Media(m) => Some(&m.author_name),
            Record::Unparsed { .. } => None,
        }
    }

    /// The media kind, present only on media markers.
    pub fn media_kind(&self) -> Option<MediaKind> {
        match self {
            Record::Media(m) => Some(m.kind),
            _ => None,
        }
    }

    /// Returns `true` if this record is a comment.
    pub fn is_comment(&self) -> bool {
        matches!(self, Record::Comment(_))
    }

    /// Returns `true` if this record is a media marker.
    pub fn is_media(&self) -> bool {
        matches!(self, Record::Media(_))
    }

    /// Returns the inner [`Comment`], if this record is one.
    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Record::Comment(c) => Some(c),
            _ => None,
        }
    }
}
