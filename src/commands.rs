use crate::config::Config;
use crate::gitmoji;
use crate::log_debug;
use crate::types::{ConventionalCommit, GitmojiSuggestion, format_conventional_commit};
use crate::ui;
use anyhow::{Context, Result};

/// Render the JSON suggestion for a plain message
pub fn render_suggestion(message: &str, pretty: bool) -> Result<String> {
    let suggestion = GitmojiSuggestion::for_message(message);
    log_debug!(
        "Suggested {} ({}) for {:?}",
        suggestion.emoji,
        suggestion.description,
        message
    );

    let rendered = if pretty {
        serde_json::to_string_pretty(&suggestion)
    } else {
        serde_json::to_string(&suggestion)
    };
    rendered.context("Failed to serialize gitmoji suggestion")
}

/// Handle a plain commit message
pub fn handle_message_command(message: &str, config: &Config) -> Result<()> {
    let _span = tracing::debug_span!("suggest", mode = "plain").entered();
    println!("{}", render_suggestion(message, config.pretty_json)?);
    Ok(())
}

/// Handle a `--conventional` invocation
pub fn handle_conventional_command(commit: &ConventionalCommit) {
    let _span = tracing::debug_span!(
        "suggest",
        mode = "conventional",
        commit_type = %commit.commit_type
    )
    .entered();
    log_debug!("Formatting conventional commit: {:?}", commit);
    println!("{}", format_conventional_commit(commit));
}

/// Handle `--list`
pub fn handle_list_command(config: &Config) {
    if config.color {
        print!("{}", ui::format_rule_table(gitmoji::rules()));
    } else {
        print!("{}", gitmoji::get_gitmoji_list());
    }
}
