//! # chatlens CLI
//!
//! Thin command-line front end over the chatlens library.

use std::process;

use chrono::TimeDelta;
use clap::Parser;

use chatlens::analysis::{CommentFilter, bucket_by_date, count_series, filter_comments};
use chatlens::cli::{Args, Command};
use chatlens::{Chat, ChatLensError};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), ChatLensError> {
    let args = Args::parse();

    match args.command {
        Command::Search { file, keyword } => {
            let chat = Chat::load(file)?;
            let filter = CommentFilter::new().with_key_word(keyword);
            for comment in filter_comments(chat.comments(), &filter) {
                println!("{comment}");
            }
        }

        Command::Words {
            file,
            author,
            limit,
            include_common,
        } => {
            let chat = Chat::load(file)?;
            let author = chat.author_with_name(&author)?;
            for (word, count) in author.word_counts(!include_common).into_iter().take(limit) {
                println!("{word} - {count}");
            }
        }

        Command::Authors { file } => {
            let chat = Chat::load(file)?;
            for author in chat.authors() {
                println!("{} ({} comments)", author.name(), author.post_count());
            }
        }

        Command::Activity { file, days } => {
            let chat = Chat::load(file)?;
            let start = chat.start_datetime()?;
            let end = chat.end_datetime()?;
            for author in chat.authors() {
                let comments = author.comments();
                let buckets = bucket_by_date(&comments, start, end, TimeDelta::days(days))?;
                let series: Vec<String> = count_series(&buckets)
                    .into_iter()
                    .map(|n| n.to_string())
                    .collect();
                println!("{}: {}", author.name(), series.join(" "));
            }
        }
    }

    Ok(())
}
