//! Output target selection and dialogue rendering.
//!
//! Rendering is pure string building; the [`OutputTarget`] decides where the
//! rendered text (and any diagnostics) is written.

use std::io::{self, Write};

use crate::config::AppInfo;
use crate::resolve::Dialogue;

/// Destination stream for all printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Unspecified; routes to stdout.
    #[default]
    Default,
    Stdout,
    Stderr,
}

impl OutputTarget {
    /// Selects a target by case-insensitive name.
    ///
    /// `"stdout"` and `"stderr"` map to their streams; anything else falls
    /// back to [`Default`](OutputTarget::Default).
    ///
    /// # Examples
    ///
    /// ```
    /// use helpmatch_core::OutputTarget;
    ///
    /// assert_eq!(OutputTarget::from_name("STDERR"), OutputTarget::Stderr);
    /// assert_eq!(OutputTarget::from_name("console"), OutputTarget::Default);
    /// ```
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("stdout") {
            OutputTarget::Stdout
        } else if name.eq_ignore_ascii_case("stderr") {
            OutputTarget::Stderr
        } else {
            OutputTarget::Default
        }
    }

    /// Writes and flushes `text` to the selected stream.
    pub fn write(&self, text: &str) -> io::Result<()> {
        self.write_bytes(text.as_bytes())
    }

    pub(crate) fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            OutputTarget::Default | OutputTarget::Stdout => {
                let mut out = io::stdout();
                out.write_all(bytes)?;
                out.flush()
            }
            OutputTarget::Stderr => {
                let mut out = io::stderr();
                out.write_all(bytes)?;
                // stderr is unbuffered, but flush in case it was redirected.
                out.flush()
            }
        }
    }
}

/// Renders the output for a resolved dialogue.
///
/// Layout, each piece newline-terminated:
///
/// - [`Dialogue::HelpVersion`]: `<name> Version <version>\n<help>\n`
/// - [`Dialogue::Help`]: `<name> <help>\n`
/// - [`Dialogue::Version`]: `<version>\n`
/// - [`Dialogue::NoMatch`]: nothing
///
/// The name segment and its trailing space are omitted when no name is set.
pub(crate) fn render_dialogue(dialogue: Dialogue, info: &AppInfo, help_text: &str) -> String {
    let mut out = String::new();
    match dialogue {
        Dialogue::HelpVersion => {
            if let Some(name) = &info.name {
                out.push_str(name);
                out.push_str(" Version ");
            }
            out.push_str(&info.version_text());
            out.push('\n');
            out.push_str(help_text);
            out.push('\n');
        }
        Dialogue::Help => {
            if let Some(name) = &info.name {
                out.push_str(name);
                out.push(' ');
            }
            out.push_str(help_text);
            out.push('\n');
        }
        Dialogue::Version => {
            out.push_str(&info.version_text());
            out.push('\n');
        }
        Dialogue::NoMatch => {}
    }
    out
}

/// Renders the zero-argument help output (same layout as the help dialogue).
pub(crate) fn render_no_arg_help(info: &AppInfo, help_text: &str) -> String {
    render_dialogue(Dialogue::Help, info, help_text)
}
