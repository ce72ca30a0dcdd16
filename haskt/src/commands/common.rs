//! Common types and utilities for haskt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, error};

use crate::commands::traits::FileTally;
use crate::error::{HasktError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One record per output line
    Text,
    /// One JSON document per input file
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Resolve the effective format: the flag if given, else the config.
    pub fn resolve(flag: Option<&str>, configured: &str) -> Result<Self> {
        if let Some(format) = flag {
            return Self::parse(format).ok_or_else(|| {
                HasktError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, format))
            });
        }

        Self::parse(configured).ok_or_else(|| {
            HasktError::Config(format!(
                "{} {}",
                error_messages::INVALID_CONFIG_FORMAT,
                configured
            ))
        })
    }
}

// ============================================================================
// Input Files
// ============================================================================

/// Validate that input files are provided.
pub fn validate_inputs(inputs: &[PathBuf]) -> Result<()> {
    if inputs.is_empty() {
        return Err(HasktError::Validation(error_messages::NO_INPUT_FILES.to_string()));
    }
    Ok(())
}

/// Read a source file, checking that it exists and is a file.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(HasktError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(HasktError::FileOperation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read source");
    Ok(text)
}

/// Run `process` on every input on a pool of `jobs` workers.
///
/// Results come back in input order.
pub fn process_files<T, F>(inputs: &[PathBuf], jobs: u32, process: F) -> Result<Vec<Result<T>>>
where
    T: Send,
    F: Fn(&Path) -> Result<T> + Sync,
{
    let threads = usize::try_from(jobs.max(1)).unwrap_or(1);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    debug!(files = inputs.len(), threads, "processing files");

    Ok(pool.install(|| inputs.par_iter().map(|path| process(path)).collect()))
}

/// Print each successful output in input order and log each failure.
///
/// Returns an error if any file failed.
pub fn emit_outputs(inputs: &[PathBuf], outputs: Vec<Result<String>>) -> Result<FileTally> {
    let mut tally = FileTally::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for (path, output) in inputs.iter().zip(outputs) {
        tally.record(&output);
        match output {
            Ok(text) => out.write_all(text.as_bytes())?,
            Err(e) => error!("Failed to process {}: {}", path.display(), e),
        }
    }
    out.flush()?;

    check_for_failures(tally)?;
    Ok(tally)
}

/// Return an error if any file failed.
pub fn check_for_failures(tally: FileTally) -> Result<()> {
    if tally.failed > 0 {
        return Err(HasktError::CommandExecution(format!(
            "{} {}",
            tally.failed,
            error_messages::FILES_FAILED
        )));
    }
    Ok(())
}

/// Header printed before a file's output when several files are given.
pub fn file_header(path: &Path) -> String {
    format!("==> {} <==\n", path.display())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when config has invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration:";

    /// Error when files failed to process.
    pub const FILES_FAILED: &str = "file(s) failed to process";

    /// Error when strict brace checking finds unmatched brackets.
    pub const UNMATCHED_BRACKETS: &str = "unmatched bracket(s)";

    /// Error when a `--at` position is not `line:offset`.
    pub const INVALID_POSITION: &str = "Invalid position (expected LINE:OFFSET):";
}
