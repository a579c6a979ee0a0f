//! Typo-tolerant help/version argument handling for CLI programs.
//!
//! This crate detects whether command-line arguments request "help" or
//! "version" output — matching common misspellings and flag variants
//! (`-h`, `--help`, `helpp`, `--version`, `versiion`, ...) — and prints a
//! configured name/version/usage dialogue to a chosen output stream. It is
//! a convenience helper embedded into a program's argument handling, not an
//! argument parser: there is no positional or flag-value parsing and no
//! subcommand support.
//!
//! # Main entry points
//!
//! - [`HelpHandler`] — the configuration object: set name, version, output
//!   target and behavior flags, then call
//!   [`handle`](HelpHandler::handle) from your argument loop.
//! - [`HelpHandler::classify`] — matching and resolution only, producing a
//!   serializable [`MatchReport`] without printing anything.
//! - [`handle`] / [`classify_args`] — one-shot convenience functions using
//!   a default handler.
//!
//! # Example
//!
//! ```
//! use helpmatch_core::{Dialogue, HelpHandler};
//!
//! let mut handler = HelpHandler::new();
//! handler.set_name("mytool").unwrap();
//! handler.set_version_text("1.2.0").unwrap();
//!
//! let args: Vec<String> = ["mytool", "--hellp"].iter().map(|s| s.to_string()).collect();
//! let report = handler.classify(&args).unwrap();
//! assert_eq!(report.dialogue, Dialogue::Help);
//! assert_eq!(report.help_index, Some(1));
//! ```
//!
//! # Matching strategies
//!
//! The default [`PatternStrategy`] uses permissive case-insensitive regexes
//! tolerating duplicated letters (and dropped trailing letters for
//! "version"). The [`LiteralStrategy`] fallback accepts exactly a frozen
//! list of known spellings; choose it with
//! [`HelpHandler::with_strategy`]`(`[`StrategyKind::Literal`]`)`.

pub mod config;
pub mod diag;
pub mod error;
pub mod handler;
pub mod matcher;
pub mod output;
pub mod report;
pub mod resolve;

pub use config::{AppInfo, AppVersion, HandlerOptions, MAX_TEXT_LEN};
pub use diag::{ErrorLog, LOG_CAPACITY, LOG_ENTRY_LEN, Severity};
pub use error::{HandlerError, Result};
pub use handler::HelpHandler;
pub use matcher::{
    KeywordFamily, LiteralStrategy, MatchStrategy, PatternStrategy, StrategyKind, first_match,
};
pub use output::OutputTarget;
pub use report::{MatchReport, ReportFormat, format_report};
pub use resolve::{Dialogue, resolve, unknown_argument_notice};

/// One-shot handling with a default-configured handler.
///
/// Matches `args` against both keyword families and prints the resolved
/// dialogue (using `help_text`) to stdout. For anything beyond a single
/// call, construct a [`HelpHandler`] and configure it instead.
///
/// # Errors
///
/// See [`HelpHandler::handle`].
pub fn handle(args: &[String], help_text: &str) -> Result<Dialogue> {
    HelpHandler::new().handle(args, help_text)
}

/// One-shot classification with a default-configured handler.
///
/// # Errors
///
/// See [`HelpHandler::classify`].
///
/// # Examples
///
/// ```
/// use helpmatch_core::{Dialogue, classify_args};
///
/// let args: Vec<String> = ["prog", "--version"].iter().map(|s| s.to_string()).collect();
/// let report = classify_args(&args).unwrap();
/// assert_eq!(report.dialogue, Dialogue::Version);
/// ```
pub fn classify_args(args: &[String]) -> Result<MatchReport> {
    let mut handler = HelpHandler::new();
    handler.set_error_output(false);
    handler.classify(args)
}
