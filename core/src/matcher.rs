//! Typo-tolerant matching of help/version keywords against argument lists.
//!
//! Two interchangeable strategies implement [`MatchStrategy`]:
//!
//! - [`PatternStrategy`] (the default) builds a permissive case-insensitive
//!   regex per keyword family, tolerating duplicated letters in both
//!   keywords and dropped trailing letters in "version".
//! - [`LiteralStrategy`] compares against a frozen list of accepted
//!   spellings. The lists are a deliberate, documented policy: membership
//!   is exact and nothing outside them matches.

use regex::Regex;

use crate::config::HandlerOptions;
use crate::error::{HandlerError, Result};

/// Keyword family a token can be matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordFamily {
    Help,
    Version,
}

/// Capability seam between pattern-based and literal-list matching.
///
/// Chosen at handler construction via [`StrategyKind`]; both implementations
/// honor the `extra_strings` flag by dropping abbreviated one-letter forms
/// when it is off.
pub trait MatchStrategy {
    /// Short identifier used in reports (`"pattern"` or `"literal"`).
    fn name(&self) -> &'static str;

    /// Returns `true` when `arg` is an accepted spelling for `family`.
    fn matches(&self, arg: &str, family: KeywordFamily) -> bool;
}

/// Which [`MatchStrategy`] a handler constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Regex-based tolerant matching (the default).
    #[default]
    Pattern,
    /// Enumerated-spelling fallback matching.
    Literal,
}

/// Regex-based tolerant matcher.
///
/// Patterns are anchored: zero or more leading dashes, then the keyword with
/// every letter allowed to repeat (`helpp`, `heellp`), and for "version"
/// the trailing letters `s`, `i`, `o`, `n` allowed to drop entirely
/// (`vers`, `versin`). Arbitrary trailing characters are accepted after a
/// complete keyword. With `extra_strings` on, the bare abbreviations
/// (`-*h+`, `-*v`) are accepted as an alternative.
///
/// # Examples
///
/// ```
/// use helpmatch_core::{HandlerOptions, KeywordFamily, MatchStrategy, PatternStrategy};
///
/// let strategy = PatternStrategy::new(&HandlerOptions::default()).unwrap();
/// assert!(strategy.matches("--hellp", KeywordFamily::Help));
/// assert!(strategy.matches("versiion", KeywordFamily::Version));
/// assert!(!strategy.matches("install", KeywordFamily::Help));
/// ```
pub struct PatternStrategy {
    help: Regex,
    version: Regex,
}

impl PatternStrategy {
    /// Compiles the family patterns for the given options.
    ///
    /// # Errors
    ///
    /// [`Pattern`](HandlerError::Pattern) if compilation fails.
    pub fn new(options: &HandlerOptions) -> Result<Self> {
        let (help, version) = if options.extra_strings {
            (
                r"(?i)^-*(h+e+l+p+.*|h+)$",
                r"(?i)^(-*v+e+r+s*i*o*n*.*|-*v)$",
            )
        } else {
            (r"(?i)^-*h+e+l+p+.*$", r"(?i)^-*v+e+r+s*i*o*n*.*$")
        };

        Ok(Self {
            help: Regex::new(help)?,
            version: Regex::new(version)?,
        })
    }
}

impl MatchStrategy for PatternStrategy {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn matches(&self, arg: &str, family: KeywordFamily) -> bool {
        match family {
            KeywordFamily::Help => self.help.is_match(arg),
            KeywordFamily::Version => self.version.is_match(arg),
        }
    }
}

/// Accepted help spellings for the literal fallback, abbreviations first.
const HELP_SPELLINGS: &[&str] = &[
    "h", "-h", "--h",
    "help", "-help", "--help",
    "hhelp", "heelp", "hellp", "helpp",
    "-hhelp", "-heelp", "-hellp", "-helpp",
    "--hhelp", "--heelp", "--hellp", "--helpp",
];

/// Accepted version spellings for the literal fallback, abbreviations first.
const VERSION_SPELLINGS: &[&str] = &[
    "v", "-v", "--v",
    "version", "-version", "--version",
    "vversion", "veersion", "verrsion", "verssion", "versiion", "versioon", "versionn",
    "-vversion", "-veersion", "-verrsion", "-verssion", "-versiion", "-versioon", "-versionn",
    "--vversion", "--veersion", "--verrsion", "--verssion", "--versiion", "--versioon", "--versionn",
];

/// Leading entries of each spelling list that are abbreviated forms.
const ABBREVIATED_FORMS: usize = 3;

/// Literal-list fallback matcher.
///
/// Compares case-insensitively against the enumerated spelling lists. With
/// `extra_strings` off, the abbreviated leading entries are skipped.
pub struct LiteralStrategy {
    skip_abbreviated: bool,
}

impl LiteralStrategy {
    pub fn new(options: &HandlerOptions) -> Self {
        Self {
            skip_abbreviated: !options.extra_strings,
        }
    }
}

impl MatchStrategy for LiteralStrategy {
    fn name(&self) -> &'static str {
        "literal"
    }

    fn matches(&self, arg: &str, family: KeywordFamily) -> bool {
        let spellings = match family {
            KeywordFamily::Help => HELP_SPELLINGS,
            KeywordFamily::Version => VERSION_SPELLINGS,
        };
        let start = if self.skip_abbreviated {
            ABBREVIATED_FORMS
        } else {
            0
        };
        spellings[start..]
            .iter()
            .any(|spelling| spelling.eq_ignore_ascii_case(arg))
    }
}

/// Validates the argument-list contract shared by all matching entry points.
///
/// The list must be non-empty and its first entry (conventionally the
/// program name) must be a non-empty string.
pub(crate) fn check_args(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err(HandlerError::EmptyArgList);
    }
    if args[0].is_empty() {
        return Err(HandlerError::EmptyProgramName);
    }
    Ok(())
}

/// Scans `args` (skipping the program name) for the first token matching
/// `family`, assuming the list contract has already been checked.
pub(crate) fn scan(
    args: &[String],
    family: KeywordFamily,
    strategy: &dyn MatchStrategy,
) -> Option<usize> {
    args.iter()
        .enumerate()
        .skip(1)
        .find(|(_, arg)| strategy.matches(arg, family))
        .map(|(index, _)| index)
}

/// Finds the first argument matching `family`, or `None` when nothing does.
///
/// Entry 0 is the program name and is skipped; the returned index is the
/// matched argument's position in `args`.
///
/// # Errors
///
/// [`EmptyArgList`](HandlerError::EmptyArgList) or
/// [`EmptyProgramName`](HandlerError::EmptyProgramName) on contract
/// violations.
pub fn first_match(
    args: &[String],
    family: KeywordFamily,
    strategy: &dyn MatchStrategy,
) -> Result<Option<usize>> {
    check_args(args)?;
    Ok(scan(args, family, strategy))
}
