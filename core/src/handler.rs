//! The help handler: configuration object tying matching, resolution, and
//! output together.
//!
//! A [`HelpHandler`] is an explicit, self-contained value — independent
//! instances never share state. Configure it with the setter methods, then
//! call [`handle`](HelpHandler::handle) from your argument loop.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::config::{AppInfo, HandlerOptions, NO_HELP_TEXT};
use crate::diag::{self, ErrorLog, Severity};
use crate::error::{HandlerError, Result};
use crate::matcher::{
    self, KeywordFamily, LiteralStrategy, MatchStrategy, PatternStrategy, StrategyKind,
};
use crate::output::{self, OutputTarget};
use crate::report::MatchReport;
use crate::resolve::{self, Dialogue};

/// Detects help/version requests in argument lists and prints the configured
/// dialogue.
///
/// # Examples
///
/// ```
/// use helpmatch_core::{Dialogue, HelpHandler};
///
/// let mut handler = HelpHandler::new();
/// handler.set_name("mytool").unwrap();
/// handler.set_version_text("1.2.0").unwrap();
///
/// let args: Vec<String> = ["mytool", "--hellp"].iter().map(|s| s.to_string()).collect();
/// let report = handler.classify(&args).unwrap();
/// assert_eq!(report.dialogue, Dialogue::Help);
/// assert_eq!(report.help_index, Some(1));
/// ```
#[derive(Debug)]
pub struct HelpHandler {
    options: HandlerOptions,
    info: AppInfo,
    target: OutputTarget,
    strategy: StrategyKind,
    log: ErrorLog,
    print_diagnostics: bool,
}

impl Default for HelpHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpHandler {
    /// Creates a handler with default options and pattern-based matching.
    pub fn new() -> Self {
        Self {
            options: HandlerOptions::default(),
            info: AppInfo::default(),
            target: OutputTarget::default(),
            strategy: StrategyKind::default(),
            log: ErrorLog::default(),
            print_diagnostics: true,
        }
    }

    /// Creates a handler using the given matching strategy.
    pub fn with_strategy(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            ..Self::new()
        }
    }

    /// Sets all three behavior flags at once.
    pub fn configure(&mut self, extra_strings: bool, no_arg_help: bool, unknown_arg_help: bool) {
        self.options = HandlerOptions {
            extra_strings,
            no_arg_help,
            unknown_arg_help,
        };
    }

    pub fn options(&self) -> &HandlerOptions {
        &self.options
    }

    pub fn info(&self) -> &AppInfo {
        &self.info
    }

    /// Sets the application name printed in help dialogues.
    ///
    /// # Errors
    ///
    /// Empty or oversized input fails without mutating prior state; the
    /// failure is recorded in the error log.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.info.set_name(name).map_err(|e| self.fail(e))
    }

    /// Sets the version as free-form text.
    ///
    /// # Errors
    ///
    /// Same contract as [`set_name`](HelpHandler::set_name).
    pub fn set_version_text(&mut self, version: &str) -> Result<()> {
        self.info.set_version_text(version).map_err(|e| self.fail(e))
    }

    /// Sets the version as an unsigned integer, rendered as decimal.
    pub fn set_version_number(&mut self, version: u32) {
        self.info.set_version_number(version);
    }

    /// Sets the version as a floating-point value, rendered with fixed
    /// 6-digit precision.
    pub fn set_version_decimal(&mut self, version: f64) {
        self.info.set_version_decimal(version);
    }

    /// Sets version text, then name. On a version failure the name is left
    /// untouched.
    pub fn set_info(&mut self, name: &str, version: &str) -> Result<()> {
        self.set_version_text(version)?;
        self.set_name(name)
    }

    /// Selects the destination stream for all printed output.
    pub fn set_output_target(&mut self, target: OutputTarget) {
        self.target = target;
    }

    /// Selects the output stream by name (`"stdout"`/`"stderr"`,
    /// case-insensitive; anything else selects the default stream).
    ///
    /// An empty name is reported as a warning and leaves the target
    /// unchanged.
    pub fn set_output_target_name(&mut self, name: &str) {
        if name.is_empty() {
            self.diagnose(Severity::Warning, "output target name is empty");
            return;
        }
        self.target = OutputTarget::from_name(name);
    }

    pub fn output_target(&self) -> OutputTarget {
        self.target
    }

    /// Enables or disables immediate printing of diagnostics. Messages are
    /// stored in the error log either way.
    pub fn set_error_output(&mut self, enabled: bool) {
        self.print_diagnostics = enabled;
    }

    /// Read access to the bounded error log.
    pub fn error_log(&self) -> &ErrorLog {
        &self.log
    }

    /// Most recent diagnostic message, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.log.last()
    }

    /// Replays every retained log entry through the output target.
    pub fn print_errors(&self) -> std::io::Result<()> {
        for entry in self.log.iter() {
            self.target.write(&format!("helpmatch: logged error: {entry}\n"))?;
        }
        Ok(())
    }

    /// Classifies an argument list without printing any dialogue output.
    ///
    /// Entry 0 is the program name and is skipped by matching.
    ///
    /// # Errors
    ///
    /// Contract violations (empty list, empty program name) and pattern
    /// compilation failures; each failure adds one entry to the error log.
    pub fn classify(&mut self, args: &[String]) -> Result<MatchReport> {
        matcher::check_args(args).map_err(|e| self.fail(e))?;
        let strategy = self.build_strategy()?;

        let help_index = matcher::scan(args, KeywordFamily::Help, strategy.as_ref());
        let version_index = matcher::scan(args, KeywordFamily::Version, strategy.as_ref());
        let dialogue = resolve::resolve(help_index, version_index);
        let extra_args = args.len() - 1;

        Ok(MatchReport {
            program: args[0].clone(),
            dialogue,
            help_index,
            version_index,
            extra_args,
            strategy: strategy.name().to_string(),
            unknown_arguments: dialogue == Dialogue::NoMatch && extra_args > 0,
        })
    }

    /// Runs the full flow — match, resolve, format — writing output to the
    /// configured target.
    ///
    /// With only the program name present and `no_arg_help` enabled, the
    /// help dialogue is printed directly, bypassing matching (reported as
    /// [`Dialogue::Help`]). Empty `help_text` falls back to a stock message
    /// and is noted silently in the error log.
    ///
    /// # Errors
    ///
    /// See [`classify`](HelpHandler::classify); additionally
    /// [`Io`](HandlerError::Io) when writing to the target fails.
    pub fn handle(&mut self, args: &[String], help_text: &str) -> Result<Dialogue> {
        let mut buffer = Vec::new();
        let dialogue = self.handle_to(args, help_text, &mut buffer)?;
        self.target.write_bytes(&buffer)?;
        Ok(dialogue)
    }

    /// Platform-native variant of [`handle`](HelpHandler::handle): accepts
    /// `OsString` arguments (e.g. from `std::env::args_os`) and converts
    /// them with lossy UTF-8.
    pub fn handle_os(&mut self, args: &[OsString], help_text: &str) -> Result<Dialogue> {
        let converted: Vec<String> = args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        self.handle(&converted, help_text)
    }

    /// Like [`handle`](HelpHandler::handle), but the help text is read from
    /// `path` (as raw bytes, converted with lossy UTF-8).
    ///
    /// # Errors
    ///
    /// [`Io`](HandlerError::Io) when the file cannot be read and
    /// [`EmptyHelpFile`](HandlerError::EmptyHelpFile) when it contains no
    /// bytes; both are recorded in the error log.
    pub fn handle_from_file(&mut self, args: &[String], path: impl AsRef<Path>) -> Result<Dialogue> {
        let bytes = fs::read(path).map_err(|e| self.fail(HandlerError::Io(e)))?;
        if bytes.is_empty() {
            return Err(self.fail(HandlerError::EmptyHelpFile));
        }
        let help_text = String::from_utf8_lossy(&bytes).into_owned();
        self.handle(args, &help_text)
    }

    /// Like [`handle`](HelpHandler::handle), but writes the rendered
    /// dialogue into `out` instead of the configured target. Useful for
    /// capturing output in tests or embedding in other sinks.
    pub fn handle_to<W: std::io::Write>(
        &mut self,
        args: &[String],
        help_text: &str,
        out: &mut W,
    ) -> Result<Dialogue> {
        let help = if help_text.is_empty() {
            self.diagnose(Severity::Silent, "help text is empty");
            NO_HELP_TEXT
        } else {
            help_text
        };

        if args.len() == 1 && self.options.no_arg_help {
            out.write_all(output::render_no_arg_help(&self.info, help).as_bytes())?;
            return Ok(Dialogue::Help);
        }

        let report = self.classify(args)?;
        match report.dialogue {
            Dialogue::NoMatch => {
                if self.options.unknown_arg_help {
                    if let Some(notice) = resolve::unknown_argument_notice(report.extra_args) {
                        out.write_all(notice.as_bytes())?;
                        out.write_all(b"\n")?;
                    }
                }
            }
            dialogue => {
                out.write_all(output::render_dialogue(dialogue, &self.info, help).as_bytes())?;
            }
        }
        Ok(report.dialogue)
    }

    fn build_strategy(&mut self) -> Result<Box<dyn MatchStrategy>> {
        match self.strategy {
            StrategyKind::Pattern => match PatternStrategy::new(&self.options) {
                Ok(strategy) => Ok(Box::new(strategy)),
                Err(e) => Err(self.fail(e)),
            },
            StrategyKind::Literal => Ok(Box::new(LiteralStrategy::new(&self.options))),
        }
    }

    /// Records a failing error and passes it through.
    fn fail(&mut self, err: HandlerError) -> HandlerError {
        self.diagnose(Severity::Error, &err.to_string());
        err
    }

    /// Stores a diagnostic, emits a tracing event, and prints it unless
    /// silenced.
    fn diagnose(&mut self, severity: Severity, message: &str) {
        self.log.push(message);
        match severity {
            Severity::Silent => {}
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
        if self.print_diagnostics {
            if let Some(text) = diag::printed_form(severity, message) {
                // Diagnostics printing is best-effort.
                let _ = self.target.write(&text);
            }
        }
    }
}
