//! Commit message types and formatting

use crate::gitmoji::{self, Gitmoji};
use serde::Serialize;
use std::fmt::Write;

/// Result of classifying a free-text commit message
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GitmojiSuggestion {
    /// Suggested emoji
    pub emoji: String,
    /// `"<code> - <summary>"` of the matching rule
    pub description: String,
    /// The message with the emoji prefixed
    pub suggested_format: String,
}

impl GitmojiSuggestion {
    /// Classify `message` and build the suggestion for it
    pub fn for_message(message: &str) -> Self {
        let Gitmoji { emoji, description } = gitmoji::classify(message);
        let suggested_format = format_suggested_message(&emoji, message);
        Self {
            emoji,
            description,
            suggested_format,
        }
    }
}

/// A conventional commit header, `type(scope): message`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalCommit {
    pub commit_type: String,
    pub scope: Option<String>,
    pub message: String,
}

impl ConventionalCommit {
    pub fn new(
        commit_type: impl Into<String>,
        scope: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            commit_type: commit_type.into(),
            scope,
            message: message.into(),
        }
    }

    /// Text the classifier sees, the type followed by the message
    pub fn classification_text(&self) -> String {
        format!("{} {}", self.commit_type, self.message)
    }

    /// Gitmoji for this commit
    pub fn gitmoji(&self) -> Gitmoji {
        gitmoji::classify(&self.classification_text())
    }
}

/// `"<emoji> <message>"`
pub fn format_suggested_message(emoji: &str, message: &str) -> String {
    format!("{emoji} {message}")
}

/// Formats a conventional commit with its gitmoji prefixed
pub fn format_conventional_commit(commit: &ConventionalCommit) -> String {
    let mut line = String::new();
    let emoji = commit.gitmoji().emoji;

    write!(&mut line, "{emoji} {}", commit.commit_type).expect("write to string should not fail");
    // An empty scope renders like a missing one
    if let Some(scope) = commit.scope.as_deref().filter(|s| !s.is_empty()) {
        write!(&mut line, "({scope})").expect("write to string should not fail");
    }
    write!(&mut line, ": {}", commit.message).expect("write to string should not fail");

    line
}
