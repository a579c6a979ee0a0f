//! Error types for help/version argument handling.
//!
//! Provides a unified error type covering all failure modes: input-contract
//! violations, capacity violations, file I/O, and pattern compilation.

use thiserror::Error;

/// Errors that can occur while configuring or running a handler.
///
/// All variants are recoverable: the caller receives the error and may retry
/// with corrected input. The library never aborts the process.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The argument list was empty (it should contain at least the program
    /// name as its first entry).
    #[error("argument list is empty (should always contain the program name)")]
    EmptyArgList,

    /// The first argument (the program name) was an empty string.
    #[error("program name (first argument) is empty")]
    EmptyProgramName,

    /// A required text input was empty.
    #[error("{what} is empty")]
    EmptyText { what: &'static str },

    /// A text input exceeded the bounded-memory cap.
    #[error("{what} is {len} bytes, larger than the allowed {max}")]
    TextTooLong {
        what: &'static str,
        len: usize,
        max: usize,
    },

    /// A help-text file existed but contained no bytes.
    #[error("given help file is empty")]
    EmptyHelpFile,

    /// File or stream I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Keyword pattern failed to compile.
    #[error("failed to compile keyword pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenience alias for results with [`HandlerError`].
pub type Result<T> = std::result::Result<T, HandlerError>;
