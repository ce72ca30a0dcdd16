//! Error handling module for the haskt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the haskt CLI application.
#[derive(Error, Debug)]
pub enum HasktError {
    /// Error when the configuration cannot be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command finishes but reports a failure.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the document layer.
    #[error("Document error: {0}")]
    Ide(#[from] hask_ide::IdeError),

    /// Error when the worker pool cannot be started.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type alias using HasktError.
pub type Result<T> = std::result::Result<T, HasktError>;
