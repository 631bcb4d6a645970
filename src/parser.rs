//! WhatsApp TXT export line parser.
//!
//! Exactly one export format is supported, the one observed in the wild
//! for this tool's inputs:
//!
//! ```text
//! 27/09/2018, 23:51:00 - Sil: Bradford....
//! ```
//!
//! i.e. `DD/MM/YYYY, HH:MM:SS - Author: message text` with 24-hour,
//! zero-padded timestamps. System lines (group created, name changes,
//! encryption notices) lack the `": "` after an author and become
//! [`Record::Unparsed`]. Parsing is infallible per line: a malformed line
//! never aborts the load of the rest of the chat.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::record::{Comment, MediaKind, MediaMarker, Record};

/// Timestamp layout at the start of every message line.
pub const DATE_TIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Marker substrings for omitted media, checked in this order.
const GIF_MARKER: &str = "GIF omitted";
const AUDIO_MARKER: &str = "audio omitted";
const VIDEO_MARKER: &str = "video omitted";

/// The image marker is an exact body match, prefixed by U+200E
/// (LEFT-TO-RIGHT MARK) in real exports.
const IMAGE_MARKER: &str = "<\u{200E}image omitted>";

/// Anchored message-line shape: timestamp, ` - `, author, `": "`, body.
///
/// The `[^:]+` author class means an author name that itself contains
/// `": "` mis-parses. That matches how the export format is actually
/// ambiguous; it is a documented limitation, not something to silently
/// repair.
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}/\d{2}/\d{4}, \d{2}:\d{2}:\d{2}) - ([^:]+): (.*)$").unwrap()
});

/// Parses one raw log line into a typed [`Record`].
///
/// Never fails: lines that do not decompose (system events, continuation
/// lines of wrapped messages, calendar-invalid dates) are demoted to
/// [`Record::Unparsed`] with the original text retained.
///
/// # Example
///
/// ```
/// use chatlens::parser::parse_line;
/// use chatlens::record::MediaKind;
///
/// let comment = parse_line("27/09/2018, 23:51:00 - Sil: Bradford....");
/// assert!(comment.is_comment());
///
/// let media = parse_line("27/09/2018, 23:52:00 - Sil: video omitted");
/// assert_eq!(media.media_kind(), Some(MediaKind::Video));
///
/// let system = parse_line("27/09/2018, 23:50:00 - You created this group");
/// assert!(!system.is_comment());
/// ```
pub fn parse_line(line: &str) -> Record {
    // Exports written on Windows carry a trailing CR past `lines()`.
    let line = line.strip_suffix('\r').unwrap_or(line);

    let Some(caps) = LINE_RE.captures(line) else {
        return Record::Unparsed {
            raw_line: line.to_string(),
        };
    };

    let date_str = caps.get(1).map_or("", |m| m.as_str());
    let author = caps.get(2).map_or("", |m| m.as_str());
    let body = caps.get(3).map_or("", |m| m.as_str());

    // A shape match with an impossible date (e.g. 31/02) still demotes.
    let Ok(naive) = NaiveDateTime::parse_from_str(date_str, DATE_TIME_FORMAT) else {
        return Record::Unparsed {
            raw_line: line.to_string(),
        };
    };
    let timestamp = naive.and_utc();

    if let Some(kind) = detect_media(body) {
        return Record::Media(MediaMarker {
            raw_line: line.to_string(),
            timestamp,
            author_name: author.to_string(),
            kind,
        });
    }

    Record::Comment(Comment {
        raw_line: line.to_string(),
        timestamp,
        author_name: author.to_string(),
        text: body.to_string(),
    })
}

/// Scans a message body for media-omission markers.
///
/// First match wins, in a fixed deterministic order: gif, audio, video,
/// image. The gif/audio/video markers are substring checks; the image
/// marker must be the entire body.
fn detect_media(body: &str) -> Option<MediaKind> {
    if body.contains(GIF_MARKER) {
        Some(MediaKind::Gif)
    } else if body.contains(AUDIO_MARKER) {
        Some(MediaKind::Audio)
    } else if body.contains(VIDEO_MARKER) {
        Some(MediaKind::Video)
    } else if body == IMAGE_MARKER {
        Some(MediaKind::Image)
    } else {
        None
    }
}
