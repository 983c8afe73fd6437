//! Output types for gitmoji suggestions
//!
//! - Plain-message suggestions rendered as JSON
//! - Conventional commit lines

mod commit;

pub use self::commit::{
    ConventionalCommit, GitmojiSuggestion, format_conventional_commit, format_suggested_message,
};
