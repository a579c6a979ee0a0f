//! Combining per-family match results into a single dialogue outcome.

use serde::{Deserialize, Serialize};

/// Which dialogue the argument list requested.
///
/// Richer than a plain success flag: callers can distinguish help-only,
/// version-only, and combined requests. [`NoMatch`](Dialogue::NoMatch) is
/// not an error, just "no recognized argument".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialogue {
    /// Both a help-like and a version-like argument were found.
    HelpVersion,
    /// Only a help-like argument was found.
    Help,
    /// Only a version-like argument was found.
    Version,
    /// No recognized argument.
    NoMatch,
}

/// Resolves the per-family match indexes into a [`Dialogue`].
pub fn resolve(help_index: Option<usize>, version_index: Option<usize>) -> Dialogue {
    match (help_index, version_index) {
        (Some(_), Some(_)) => Dialogue::HelpVersion,
        (Some(_), None) => Dialogue::Help,
        (None, Some(_)) => Dialogue::Version,
        (None, None) => Dialogue::NoMatch,
    }
}

/// Informational notice for unrecognized extra arguments.
///
/// Singular when exactly one argument beyond the program name was supplied,
/// plural otherwise. Returns `None` when there were no extra arguments.
pub fn unknown_argument_notice(extra_args: usize) -> Option<&'static str> {
    match extra_args {
        0 => None,
        1 => Some("Unknown argument given"),
        _ => Some("Unknown arguments given"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_combinations() {
        assert_eq!(resolve(Some(1), Some(2)), Dialogue::HelpVersion);
        assert_eq!(resolve(Some(1), None), Dialogue::Help);
        assert_eq!(resolve(None, Some(1)), Dialogue::Version);
        assert_eq!(resolve(None, None), Dialogue::NoMatch);
    }

    #[test]
    fn test_unknown_argument_notice_pluralization() {
        assert_eq!(unknown_argument_notice(0), None);
        assert_eq!(unknown_argument_notice(1), Some("Unknown argument given"));
        assert_eq!(unknown_argument_notice(2), Some("Unknown arguments given"));
        assert_eq!(unknown_argument_notice(9), Some("Unknown arguments given"));
    }

    #[test]
    fn test_dialogue_serializes_snake_case() {
        let json = serde_json::to_string(&Dialogue::HelpVersion).unwrap();
        assert_eq!(json, "\"help_version\"");
        let back: Dialogue = serde_json::from_str("\"no_match\"").unwrap();
        assert_eq!(back, Dialogue::NoMatch);
    }
}
