//! Command-line interface definition using clap.
//!
//! The binary is a thin front end: every subcommand loads a chat through
//! the library and prints a plain-text view of one query. The heavy lifting
//! lives in [`analysis`](crate::analysis) and [`Chat`](crate::Chat).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Analyse an exported WhatsApp chat: search comments, count words,
/// list authors, chart activity over time.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens search _chat.txt bradford
    chatlens words _chat.txt --author Sil --limit 10
    chatlens authors _chat.txt
    chatlens activity _chat.txt --days 7")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// Available queries over a chat export.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every comment containing a keyword
    Search {
        /// Path to the exported chat file (e.g. _chat.txt)
        file: PathBuf,

        /// Word to search for (case-insensitive, whole-token match)
        keyword: String,
    },

    /// Print an author's most used words
    Words {
        /// Path to the exported chat file
        file: PathBuf,

        /// Author name (exact match)
        #[arg(short, long)]
        author: String,

        /// Number of words to print
        #[arg(short, long, default_value_t = 20)]
        limit: usize,

        /// Count common words (the, a, and, ...) too
        #[arg(long)]
        include_common: bool,
    },

    /// List chat participants with their comment counts
    Authors {
        /// Path to the exported chat file
        file: PathBuf,
    },

    /// Print per-author comment counts over fixed calendar intervals
    Activity {
        /// Path to the exported chat file
        file: PathBuf,

        /// Width of each interval in days
        #[arg(long, default_value_t = 7)]
        days: i64,
    },
}
