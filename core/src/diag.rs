//! Bounded diagnostics log and severity handling.
//!
//! Every contract violation or warning is stored in an [`ErrorLog`] — a
//! fixed-capacity ring where the oldest entries are overwritten silently —
//! and optionally printed through the handler's output target. Warnings and
//! errors additionally emit [`tracing`] events.

/// Number of entries the log retains before overwriting the oldest.
pub const LOG_CAPACITY: usize = 32;

/// Maximum stored byte length of a single log entry.
pub const LOG_ENTRY_LEN: usize = 64;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Logged only, never printed.
    Silent,
    /// Printed unless error output is disabled.
    Warning,
    /// Printed unless error output is disabled.
    Error,
}

impl Severity {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Severity::Silent => "silent",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Bounded ring buffer of diagnostic messages.
///
/// Holds up to [`LOG_CAPACITY`] entries of at most [`LOG_ENTRY_LEN`] bytes
/// each; the total count keeps rising after the ring wraps.
///
/// # Examples
///
/// ```
/// use helpmatch_core::ErrorLog;
///
/// let mut log = ErrorLog::default();
/// log.push("first");
/// log.push("second");
/// assert_eq!(log.total(), 2);
/// assert_eq!(log.last(), Some("second"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ErrorLog {
    entries: Vec<String>,
    total: usize,
}

impl ErrorLog {
    /// Appends a message, truncated to [`LOG_ENTRY_LEN`] bytes, overwriting
    /// the oldest entry once the ring is full.
    pub fn push(&mut self, message: &str) {
        let entry = truncate_entry(message);
        if self.entries.len() < LOG_CAPACITY {
            self.entries.push(entry);
        } else {
            self.entries[self.total % LOG_CAPACITY] = entry;
        }
        self.total += 1;
    }

    /// Total number of messages ever pushed, including overwritten ones.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of entries currently retained.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently pushed message.
    pub fn last(&self) -> Option<&str> {
        if self.total == 0 {
            return None;
        }
        self.entries
            .get((self.total - 1) % LOG_CAPACITY)
            .map(String::as_str)
    }

    /// Iterates retained entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let start = if self.total > LOG_CAPACITY {
            self.total % LOG_CAPACITY
        } else {
            0
        };
        self.entries[start..]
            .iter()
            .chain(self.entries[..start].iter())
            .map(String::as_str)
    }
}

/// Truncates to [`LOG_ENTRY_LEN`] bytes on a character boundary.
fn truncate_entry(message: &str) -> String {
    if message.len() <= LOG_ENTRY_LEN {
        return message.to_string();
    }
    let mut end = LOG_ENTRY_LEN;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    message[..end].to_string()
}

/// Renders the printed form of a diagnostic, or `None` for silent ones.
pub(crate) fn printed_form(severity: Severity, message: &str) -> Option<String> {
    match severity {
        Severity::Silent => None,
        Severity::Warning | Severity::Error => {
            Some(format!("helpmatch: {}: {message}\n", severity.label()))
        }
    }
}
