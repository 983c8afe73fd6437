use crate::commands;
use crate::config::Config;
use crate::types::ConventionalCommit;
use crate::ui;
use crate::{log_debug, log_warn};
use clap::builder::{Styles, styling::AnsiColor};
use clap::error::ErrorKind;
use clap::{Parser, crate_version};
use std::process::ExitCode;
use thiserror::Error;

const LOG_FILE: &str = "gitmoji-selector-debug.log";

/// Name shown in the usage text
pub const BIN_NAME: &str = "gitmoji-selector";

const CONVENTIONAL_FLAG: &str = "--conventional";

/// CLI structure defining the available arguments
#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    version = crate_version!(),
    about = "Suggest a gitmoji for a commit message",
    long_about = "Classifies a commit message against an ordered keyword table and suggests a gitmoji, either as JSON or as a conventional commit line.",
    disable_version_flag = true,
    styles = get_styles(),
)]
pub struct Cli {
    /// Treat the words as `<type> [scope] <message>`
    #[arg(
        long = "conventional",
        help = "Format as a conventional commit: <type> [scope] <message>"
    )]
    pub conventional: bool,

    /// List the gitmoji rules in priority order
    #[arg(long = "list", help = "List the gitmoji rules in priority order")]
    pub list: bool,

    /// Log debug messages to a file
    #[arg(short = 'l', long = "log", help = "Log debug messages to a file")]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(
        long = "log-file",
        help = "Specify a custom log file path ('-' for stderr)"
    )]
    pub log_file: Option<String>,

    /// Display the version
    #[arg(short = 'v', long = "version", help = "Display the version")]
    pub version: bool,

    /// Commit message words
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "MESSAGE")]
    pub words: Vec<String>,
}

/// Misuse of the command line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("no commit message given")]
    MissingMessage,
}

/// What a single run should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Classify free text and emit JSON
    Message(String),
    /// Emit a conventional commit line
    Conventional(ConventionalCommit),
}

impl Invocation {
    /// Interpret the positional words.
    ///
    /// With `--conventional`, two words are `type message` and three or more
    /// are `type scope message...`. Fewer than two falls back to a plain
    /// message over the raw arguments, flag included.
    pub fn from_words(conventional: bool, words: &[String]) -> Result<Self, UsageError> {
        if conventional {
            return Ok(match words {
                [commit_type, message] => {
                    Self::Conventional(ConventionalCommit::new(commit_type, None, message))
                }
                [commit_type, scope, message @ ..] => {
                    Self::Conventional(ConventionalCommit::new(
                        commit_type,
                        Some(scope.clone()),
                        message.join(" "),
                    ))
                }
                _ => {
                    let raw: Vec<&str> = std::iter::once(CONVENTIONAL_FLAG)
                        .chain(words.iter().map(String::as_str))
                        .collect();
                    Self::Message(raw.join(" "))
                }
            });
        }

        if words.is_empty() {
            return Err(UsageError::MissingMessage);
        }
        Ok(Self::Message(words.join(" ")))
    }
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

fn setup_logging(cli: &Cli) -> anyhow::Result<()> {
    if !cli.log {
        crate::logger::disable_logging();
        return Ok(());
    }

    if let Err(e) = crate::logger::init() {
        ui::print_error(&format!("Logging unavailable: {e}"));
        return Ok(());
    }
    crate::logger::enable_logging();

    match cli.log_file.as_deref() {
        Some("-") => crate::logger::set_log_to_stderr(true),
        file => crate::logger::set_log_file(file.unwrap_or(LOG_FILE))?,
    }
    Ok(())
}

fn load_config() -> Config {
    match Config::load() {
        Ok(config) => {
            crate::logger::set_verbose_logging(config.verbose_logging);
            config
        }
        Err(e) => {
            log_warn!("Ignoring unreadable configuration: {:#}", e);
            Config::default()
        }
    }
}

/// Main function to parse arguments and handle the command
pub fn main() -> anyhow::Result<ExitCode> {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => {
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        // Any other clap failure is a usage error, reported the same way
        Err(_) => {
            ui::print_usage(BIN_NAME);
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.version {
        ui::print_version(crate_version!());
        return Ok(ExitCode::SUCCESS);
    }

    setup_logging(&cli)?;
    let config = load_config();

    if cli.list {
        commands::handle_list_command(&config);
        return Ok(ExitCode::SUCCESS);
    }

    handle_command(&cli, &config)
}

/// Dispatch a parsed command line
pub fn handle_command(cli: &Cli, config: &Config) -> anyhow::Result<ExitCode> {
    log_debug!(
        "Handling invocation: conventional: {}, words: {:?}",
        cli.conventional,
        cli.words
    );

    match Invocation::from_words(cli.conventional, &cli.words) {
        Ok(Invocation::Message(message)) => commands::handle_message_command(&message, config)?,
        Ok(Invocation::Conventional(commit)) => commands::handle_conventional_command(&commit),
        Err(e) => {
            log_debug!("Usage error: {}", e);
            ui::print_usage(BIN_NAME);
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
