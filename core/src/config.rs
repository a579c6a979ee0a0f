//! Handler configuration: behavior flags and application identity.
//!
//! [`HandlerOptions`] carries the three behavior toggles, [`AppInfo`] holds
//! the name and version reported in dialogue output. Name and version text
//! are stored as owned strings but remain subject to a deliberate
//! bounded-memory cap ([`MAX_TEXT_LEN`]).

use crate::error::{HandlerError, Result};

/// Maximum accepted byte length for application name and version text.
///
/// Longer input is rejected without mutating previously stored state. The
/// cap is a deliberate bounded-memory guarantee, not a storage limitation.
pub const MAX_TEXT_LEN: usize = 511;

/// Fallback rendered when a version is requested but none was configured.
pub(crate) const NO_VERSION_TEXT: &str = "No version is available";

/// Fallback used when the caller supplies empty help text.
pub(crate) const NO_HELP_TEXT: &str = "No usage help is available";

/// Behavior flags controlling matching and output.
///
/// # Examples
///
/// ```
/// use helpmatch_core::HandlerOptions;
///
/// let options = HandlerOptions::default();
/// assert!(options.extra_strings);
/// assert!(options.no_arg_help);
/// assert!(!options.unknown_arg_help);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HandlerOptions {
    /// Accept abbreviated single-letter forms (`h`, `-h`, `v`, `-v`, ...).
    pub extra_strings: bool,
    /// Print the help dialogue when only the program name is present.
    pub no_arg_help: bool,
    /// Report unrecognized extra arguments with an informational notice.
    pub unknown_arg_help: bool,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            extra_strings: true,
            no_arg_help: true,
            unknown_arg_help: false,
        }
    }
}

/// Version representation: exactly one of text, integer, or decimal.
///
/// Setting a new representation replaces the previous one, so "exactly one
/// active" holds by construction.
///
/// # Examples
///
/// ```
/// use helpmatch_core::AppVersion;
///
/// assert_eq!(AppVersion::Text("2.4-rc1".into()).render(), "2.4-rc1");
/// assert_eq!(AppVersion::Number(3).render(), "3");
/// assert_eq!(AppVersion::Decimal(1.5).render(), "1.500000");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AppVersion {
    /// Free-form version string (e.g. `"1.2.0-beta"`).
    Text(String),
    /// Unsigned integer version, rendered as decimal.
    Number(u32),
    /// Floating-point version, rendered with fixed 6-digit precision.
    Decimal(f64),
}

impl AppVersion {
    /// Renders the stored representation exactly as it will be printed.
    pub fn render(&self) -> String {
        match self {
            AppVersion::Text(text) => text.clone(),
            AppVersion::Number(n) => format!("{n}"),
            AppVersion::Decimal(v) => format!("{v:.6}"),
        }
    }
}

/// Application identity printed in dialogue output.
///
/// Both fields are optional; unset fields are either omitted (name) or
/// replaced by a fallback text (version) when rendered.
#[derive(Debug, Clone, Default)]
pub struct AppInfo {
    pub name: Option<String>,
    pub version: Option<AppVersion>,
}

impl AppInfo {
    /// Stores the application name, trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// [`EmptyText`](HandlerError::EmptyText) for empty or whitespace-only
    /// input, [`TextTooLong`](HandlerError::TextTooLong) past
    /// [`MAX_TEXT_LEN`]. Prior state is untouched on failure.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = Some(checked_trim(name, "app name")?);
        Ok(())
    }

    /// Stores a version string, trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Same contract as [`set_name`](AppInfo::set_name).
    pub fn set_version_text(&mut self, version: &str) -> Result<()> {
        self.version = Some(AppVersion::Text(checked_trim(version, "version")?));
        Ok(())
    }

    /// Stores an integer version.
    pub fn set_version_number(&mut self, version: u32) {
        self.version = Some(AppVersion::Number(version));
    }

    /// Stores a floating-point version.
    pub fn set_version_decimal(&mut self, version: f64) {
        self.version = Some(AppVersion::Decimal(version));
    }

    /// Renders the version, falling back to a stock text when unset.
    pub fn version_text(&self) -> String {
        self.version
            .as_ref()
            .map_or_else(|| NO_VERSION_TEXT.to_string(), AppVersion::render)
    }
}

/// Validates and trims a user-supplied text input.
fn checked_trim(text: &str, what: &'static str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(HandlerError::EmptyText { what });
    }
    if trimmed.len() > MAX_TEXT_LEN {
        return Err(HandlerError::TextTooLong {
            what,
            len: trimmed.len(),
            max: MAX_TEXT_LEN,
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = HandlerOptions::default();
        assert!(options.extra_strings);
        assert!(options.no_arg_help);
        assert!(!options.unknown_arg_help);
    }

    #[test]
    fn test_set_name_trims() {
        let mut info = AppInfo::default();
        info.set_name("  mytool  ").unwrap();
        assert_eq!(info.name.as_deref(), Some("mytool"));
    }

    #[test]
    fn test_set_name_rejects_empty() {
        let mut info = AppInfo::default();
        assert!(info.set_name("").is_err());
        assert!(info.set_name("   ").is_err());
        assert!(info.name.is_none());
    }

    #[test]
    fn test_version_cap_boundary() {
        let mut info = AppInfo::default();
        assert!(info.set_version_text(&"9".repeat(MAX_TEXT_LEN)).is_ok());
        assert!(info.set_version_text(&"9".repeat(MAX_TEXT_LEN + 1)).is_err());
    }

    #[test]
    fn test_oversized_version_keeps_prior_state() {
        let mut info = AppInfo::default();
        info.set_version_text("1.0").unwrap();
        let err = info.set_version_text(&"x".repeat(600)).unwrap_err();
        assert!(matches!(
            err,
            crate::HandlerError::TextTooLong { len: 600, max, .. } if max == MAX_TEXT_LEN
        ));
        assert_eq!(info.version, Some(AppVersion::Text("1.0".to_string())));
    }

    #[test]
    fn test_exactly_one_version_representation() {
        let mut info = AppInfo::default();
        info.set_version_text("1.0").unwrap();
        info.set_version_number(7);
        assert_eq!(info.version, Some(AppVersion::Number(7)));
        info.set_version_decimal(2.5);
        assert_eq!(info.version, Some(AppVersion::Decimal(2.5)));
    }

    #[test]
    fn test_version_render_formats() {
        assert_eq!(AppVersion::Text("v3".into()).render(), "v3");
        assert_eq!(AppVersion::Number(42).render(), "42");
        assert_eq!(AppVersion::Decimal(0.25).render(), "0.250000");
    }

    #[test]
    fn test_version_fallback_text() {
        let info = AppInfo::default();
        assert_eq!(info.version_text(), "No version is available");
    }
}
