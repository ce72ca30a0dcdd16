//! Error types for hask-ide
//!
//! Lexing itself never fails; these errors only report requests that name
//! lines or edits the document does not have.

use thiserror::Error;

/// Error type for document operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdeError {
    /// A line index past the end of the document
    #[error("Line out of range: {line} (document has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },

    /// A splice whose removed range does not fit in the document
    #[error("Invalid edit: cannot remove {removed} lines at line {start} (document has {line_count} lines)")]
    InvalidEdit {
        start: usize,
        removed: usize,
        line_count: usize,
    },
}

/// Result type alias for document operations
pub type Result<T> = std::result::Result<T, IdeError>;
