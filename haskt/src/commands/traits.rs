//! Command traits for the haskt CLI.
//!
//! Every subcommand is a value built from its arguments and the loaded
//! configuration, then executed once.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all haskt commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance from its arguments and configuration.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Human-readable description of a command.
pub trait CommandDescription {
    /// A brief one-line description.
    fn description() -> &'static str;

    /// Multi-line help text explaining usage.
    fn help() -> &'static str;
}

/// Per-file tally of a command run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTally {
    /// Files handled successfully.
    pub processed: usize,
    /// Files that could not be read.
    pub failed: usize,
}

impl FileTally {
    /// Counts one outcome.
    pub fn record<T>(&mut self, outcome: &Result<T>) {
        match outcome {
            Ok(_) => self.processed += 1,
            Err(_) => self.failed += 1,
        }
    }
}
