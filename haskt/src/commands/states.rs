//! States command implementation.
//!
//! Prints the state each line ends in. A file that ends inside a block
//! comment is almost always a mistake, so that case is also logged as a
//! warning.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use hask_lex::{forward_lines, LineState};
use tracing::{debug, info, warn};

use crate::commands::common::{
    emit_outputs, file_header, process_files, read_source, validate_inputs,
};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the states command.
#[derive(Debug, Clone, Default)]
pub struct StatesArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files.
    pub input: Vec<PathBuf>,
    /// Number of parallel jobs.
    pub jobs: Option<u32>,
}

/// Outgoing states of every line, and the state the file ends in.
pub fn line_states(text: &str) -> (Vec<LineState>, LineState) {
    let states: Vec<LineState> = forward_lines(LineState::Normal, text.lines())
        .into_iter()
        .map(|scanned| scanned.state)
        .collect();
    let last = states.last().copied().unwrap_or_default();
    (states, last)
}

/// Renders states as `line<TAB>integer<TAB>name` rows.
pub fn render_states(states: &[LineState]) -> String {
    let mut out = String::new();
    for (index, state) in states.iter().enumerate() {
        let _ = writeln!(out, "{}\t{}\t{}", index + 1, state.to_u32(), state);
    }
    out
}

/// States command handler.
pub struct StatesCommand {
    args: StatesArgs,
    config: Config,
}

impl StatesCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        validate_inputs(&self.args.input)?;
        let with_headers = self.args.input.len() > 1;
        let jobs = self.args.jobs.unwrap_or(self.config.run.jobs);
        debug!(command = Self::name(), files = self.args.input.len(), jobs, "starting");

        let outputs = process_files(&self.args.input, jobs, |path| {
            let body = self.states_for(path)?;
            Ok(if with_headers {
                file_header(path) + &body
            } else {
                body
            })
        })?;

        let tally = emit_outputs(&self.args.input, outputs)?;
        if self.args.verbose {
            info!("Checked {} file(s)", tally.processed);
        }
        Ok(())
    }

    fn states_for(&self, path: &Path) -> Result<String> {
        let text = read_source(path)?;
        let (states, last) = line_states(&text);
        if last.in_comment() {
            warn!(
                "{} ends inside a block comment (depth {})",
                path.display(),
                last.comment_depth()
            );
        }
        Ok(render_states(&states))
    }
}

impl Command for StatesCommand {
    type Args = StatesArgs;
    type Output = ();

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "states"
    }
}

impl CommandDescription for StatesCommand {
    fn description() -> &'static str {
        "Print the state each line ends in"
    }

    fn help() -> &'static str {
        "Prints one row per line: the line number, the integer state \
         (0 outside comments, n inside n nested block comments) and its \
         name. Warns when a file ends inside a block comment."
    }
}

/// Run the states command.
pub fn run_states(args: StatesArgs, config: Config) -> Result<()> {
    StatesCommand::new(args, config).execute()
}
