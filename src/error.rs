//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatLensError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - Malformed chat lines are never errors: they degrade to
//!   [`Record::Unparsed`](crate::record::Record::Unparsed) so the rest of
//!   the file still loads

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Chat;
///
/// fn load_chat(path: &str) -> Result<Chat> {
///     Chat::load(path)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatLensError>;

/// The error type for all chatlens operations.
///
/// Structural and file-level failures get distinct variants so callers can
/// tell a missing file apart from an export that parsed to nothing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatLensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when the input file doesn't exist or cannot
    /// be read. Fatal, surfaced to the caller, not retried.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The chat contains no timestamped records.
    ///
    /// Raised by [`Chat::start_datetime`](crate::Chat::start_datetime) and
    /// [`Chat::end_datetime`](crate::Chat::end_datetime) when the record
    /// sequence is empty (or nothing in it carried a parseable timestamp).
    #[error("chat contains no timestamped records")]
    EmptyChat,

    /// Lookup of an author name that never posted a comment.
    ///
    /// An author with zero comments cannot exist by construction, so this
    /// always means "no such participant" rather than "quiet participant".
    #[error("no author named '{name}' in this chat")]
    AuthorNotFound {
        /// The name that was looked up
        name: String,
    },

    /// A bucketing request with a zero or negative width.
    #[error("invalid bucket range: {message}")]
    InvalidRange {
        /// Description of what's wrong
        message: String,
    },
}

impl ChatLensError {
    /// Creates an [`AuthorNotFound`](Self::AuthorNotFound) error.
    pub fn author_not_found(name: impl Into<String>) -> Self {
        ChatLensError::AuthorNotFound { name: name.into() }
    }

    /// Creates an [`InvalidRange`](Self::InvalidRange) error.
    pub fn invalid_range(message: impl Into<String>) -> Self {
        ChatLensError::InvalidRange {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_not_found_message() {
        let err = ChatLensError::author_not_found("Sil");
        assert_eq!(err.to_string(), "no author named 'Sil' in this chat");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: ChatLensError = io_err.into();
        assert!(matches!(err, ChatLensError::Io(_)));
    }

    #[test]
    fn test_invalid_range_message() {
        let err = ChatLensError::invalid_range("width must be positive");
        assert!(err.to_string().contains("width must be positive"));
    }
}
