use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use helpmatch_core::{HelpHandler, ReportFormat, StrategyKind, format_report};

/// CLI-specific report format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliReportFormat {
    Json,
    Yaml,
    Table,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(fmt: CliReportFormat) -> Self {
        match fmt {
            CliReportFormat::Json => Self::Json,
            CliReportFormat::Yaml => Self::Yaml,
            CliReportFormat::Table => Self::Table,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "helpmatch")]
#[command(about = "Typo-tolerant help/version argument classification")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify an argument list and print a match report.
    Classify(ClassifyArgs),
    /// Run the full handle flow: match, resolve, and print the dialogue.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct ClassifyArgs {
    #[command(flatten)]
    matching: MatchingArgs,
    /// Output format for the report (default: table).
    #[arg(long, default_value = "table")]
    format: CliReportFormat,
    /// Program name followed by the arguments to classify
    /// (e.g. `-- mytool --hellp`).
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct RunArgs {
    #[command(flatten)]
    matching: MatchingArgs,
    /// Application name printed in help dialogues.
    #[arg(long)]
    name: Option<String>,
    /// Version string printed in version dialogues.
    #[arg(long)]
    app_version: Option<String>,
    /// Help text printed in help dialogues.
    #[arg(long)]
    help_text: Option<String>,
    /// File whose contents become the help text (overrides --help-text).
    #[arg(long)]
    help_file: Option<PathBuf>,
    /// Do not print help when only the program name is present.
    #[arg(long)]
    no_zero_arg_help: bool,
    /// Report unrecognized extra arguments.
    #[arg(long)]
    unknown_arg_help: bool,
    /// Output target: stdout or stderr.
    #[arg(long, default_value = "stdout")]
    output: String,
    /// Program name followed by the arguments to handle.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Matching options shared by both subcommands.
#[derive(Debug, Args)]
struct MatchingArgs {
    /// Use the literal fallback spelling lists instead of pattern matching.
    #[arg(long)]
    literal: bool,
    /// Disable abbreviated single-letter forms (h, v).
    #[arg(long)]
    no_extra_strings: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("helpmatch: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Classify(args) => cmd_classify(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn cmd_classify(args: ClassifyArgs) -> Result<(), String> {
    let mut handler = build_handler(&args.matching, true, false);
    handler.set_error_output(false);

    let report = handler.classify(&args.args).map_err(|e| e.to_string())?;
    let text = format_report(&report, args.format.into())?;
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> Result<(), String> {
    let mut handler = build_handler(&args.matching, !args.no_zero_arg_help, args.unknown_arg_help);
    handler.set_output_target_name(&args.output);

    if let Some(name) = &args.name {
        handler.set_name(name).map_err(|e| e.to_string())?;
    }
    if let Some(version) = &args.app_version {
        handler.set_version_text(version).map_err(|e| e.to_string())?;
    }

    let result = match &args.help_file {
        Some(path) => handler.handle_from_file(&args.args, path),
        None => handler.handle(&args.args, args.help_text.as_deref().unwrap_or("")),
    };
    result.map(|_| ()).map_err(|e| e.to_string())
}

fn build_handler(matching: &MatchingArgs, no_arg_help: bool, unknown_arg_help: bool) -> HelpHandler {
    let kind = if matching.literal {
        StrategyKind::Literal
    } else {
        StrategyKind::Pattern
    };
    let mut handler = HelpHandler::with_strategy(kind);
    handler.configure(!matching.no_extra_strings, no_arg_help, unknown_arg_help);
    handler
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpmatch_core::{Dialogue, OutputTarget};

    fn matching(literal: bool, no_extra_strings: bool) -> MatchingArgs {
        MatchingArgs {
            literal,
            no_extra_strings,
        }
    }

    #[test]
    fn test_build_handler_flags() {
        let handler = build_handler(&matching(false, true), true, true);
        assert!(!handler.options().extra_strings);
        assert!(handler.options().no_arg_help);
        assert!(handler.options().unknown_arg_help);
    }

    #[test]
    fn test_build_handler_literal_strategy() {
        let mut handler = build_handler(&matching(true, false), true, false);
        handler.set_error_output(false);
        let args: Vec<String> = ["prog", "heellp"].iter().map(|s| s.to_string()).collect();
        // In the literal list the pattern-only spelling does not match.
        let report = handler.classify(&args).unwrap();
        assert_eq!(report.dialogue, Dialogue::NoMatch);
        assert_eq!(report.strategy, "literal");
    }

    #[test]
    fn test_run_output_target_selection() {
        let mut handler = build_handler(&matching(false, false), true, false);
        handler.set_output_target_name("stderr");
        assert_eq!(handler.output_target(), OutputTarget::Stderr);
    }
}
