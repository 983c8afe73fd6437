//! gitmoji-selector - suggest a gitmoji for a commit message
//!
//! Commit text is classified against a priority-ordered keyword table, and the
//! result is rendered as JSON or as a conventional commit line.

#![allow(clippy::uninlined_format_args)] // Style preference

pub mod cli;
pub mod commands;
pub mod config;
pub mod gitmoji;
pub mod logger;
pub mod types;
pub mod ui;

pub use config::Config;
pub use gitmoji::{Gitmoji, classify, extract_gitmoji_from_message};
pub use types::{
    ConventionalCommit, GitmojiSuggestion, format_conventional_commit, format_suggested_message,
};
