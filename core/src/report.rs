//! Serializable match reports and their output formats.
//!
//! [`MatchReport`] is what [`classify`](crate::HelpHandler::classify)
//! produces: the resolved dialogue plus the evidence behind it, suitable for
//! JSON/YAML emission or a compact human-readable table.

use serde::{Deserialize, Serialize};

use crate::resolve::Dialogue;

/// Result of classifying an argument list, without printing anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Program name (entry 0 of the argument list).
    pub program: String,
    /// Resolved dialogue outcome.
    pub dialogue: Dialogue,
    /// Index of the first help-like argument, when one was found.
    pub help_index: Option<usize>,
    /// Index of the first version-like argument, when one was found.
    pub version_index: Option<usize>,
    /// Number of arguments beyond the program name.
    pub extra_args: usize,
    /// Matching strategy that produced the result.
    pub strategy: String,
    /// Whether extra arguments were present but nothing matched.
    pub unknown_arguments: bool,
}

/// Supported report output formats.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ReportFormat {
    Json,
    Yaml,
    Table,
}

/// Formats a report in the requested output format.
pub fn format_report(report: &MatchReport, format: ReportFormat) -> Result<String, String> {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        ReportFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        ReportFormat::Table => Ok(report_to_table(report)),
    }
}

fn report_to_table(report: &MatchReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Program: {}  Dialogue: {:?}  Strategy: {}\n",
        report.program, report.dialogue, report.strategy
    ));

    if let Some(index) = report.help_index {
        out.push_str(&format!("  help match at argument {index}\n"));
    }
    if let Some(index) = report.version_index {
        out.push_str(&format!("  version match at argument {index}\n"));
    }
    if report.unknown_arguments {
        out.push_str(&format!(
            "  {} unrecognized extra argument(s)\n",
            report.extra_args
        ));
    }

    out
}
