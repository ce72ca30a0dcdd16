//! Braces command implementation.
//!
//! Pairs every bracket of each input file, ignoring brackets inside
//! comments and literals, and reports the ones left over.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use hask_ide::braces::{bracket_pairs, find_match, BracketReport, Position};
use hask_ide::Document;
use tracing::{debug, error, info, warn};

use crate::commands::common::{
    check_for_failures, error_messages, file_header, process_files, read_source, validate_inputs,
};
use crate::commands::traits::{Command, CommandDescription, FileTally};
use crate::config::Config;
use crate::error::{HasktError, Result};

/// Arguments for the braces command.
#[derive(Debug, Clone, Default)]
pub struct BracesArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files.
    pub input: Vec<PathBuf>,
    /// Fail if any bracket is unmatched.
    pub strict: bool,
    /// Bracket to find the partner of, as `line:offset` (1-based line).
    pub at: Option<String>,
    /// Number of parallel jobs.
    pub jobs: Option<u32>,
}

/// Pairs and unmatched brackets of one file, plus the partner lookup
/// requested with `--at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBraces {
    /// Every bracket of the file.
    pub report: BracketReport,
    /// The queried bracket and its partner, if any.
    pub partner: Option<(Position, Option<Position>)>,
}

/// Parses `line:offset` with a 1-based line and a 0-based byte offset.
pub fn parse_position(s: &str) -> Result<Position> {
    let invalid = || {
        HasktError::Validation(format!("{} {}", error_messages::INVALID_POSITION, s))
    };
    let (line, offset) = s.split_once(':').ok_or_else(invalid)?;
    let line: usize = line.trim().parse().map_err(|_| invalid())?;
    let offset: usize = offset.trim().parse().map_err(|_| invalid())?;
    let line = line.checked_sub(1).ok_or_else(invalid)?;
    Ok(Position::new(line, offset))
}

fn render_position(position: Position) -> String {
    format!("{}:{}", position.line + 1, position.offset)
}

/// Renders the answer to a partner lookup.
pub fn render_partner(at: Position, partner: Option<Position>) -> String {
    match partner {
        Some(partner) => format!("match {} {}\n", render_position(at), render_position(partner)),
        None => format!("match {} none\n", render_position(at)),
    }
}

/// Renders a bracket report with 1-based line numbers.
pub fn render_report(report: &BracketReport) -> String {
    let mut out = String::new();
    for pair in &report.pairs {
        let _ = writeln!(
            out,
            "pair {}:{} {}:{}",
            pair.open.line + 1,
            pair.open.offset,
            pair.close.line + 1,
            pair.close.offset
        );
    }
    for unmatched in &report.unmatched {
        let _ = writeln!(
            out,
            "unmatched {} {}:{}",
            unmatched.kind,
            unmatched.position.line + 1,
            unmatched.position.offset
        );
    }
    out
}

/// Braces command handler.
pub struct BracesCommand {
    args: BracesArgs,
    config: Config,
}

impl BracesCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        validate_inputs(&self.args.input)?;
        let with_headers = self.args.input.len() > 1;
        let jobs = self.args.jobs.unwrap_or(self.config.run.jobs);
        let at = self.args.at.as_deref().map(parse_position).transpose()?;
        debug!(command = Self::name(), files = self.args.input.len(), jobs, ?at, "starting");

        let outputs = process_files(&self.args.input, jobs, |path| self.check_file(path, at))?;

        let mut tally = FileTally::default();
        let mut unmatched = 0;
        let mut out = String::new();
        for (path, output) in self.args.input.iter().zip(outputs) {
            tally.record(&output);
            match output {
                Ok(braces) => {
                    unmatched += braces.report.unmatched.len();
                    if with_headers {
                        out.push_str(&file_header(path));
                    }
                    out.push_str(&render_report(&braces.report));
                    if let Some((at, partner)) = braces.partner {
                        out.push_str(&render_partner(at, partner));
                    }
                }
                Err(e) => error!("Failed to process {}: {}", path.display(), e),
            }
        }
        print!("{out}");

        check_for_failures(tally)?;
        if self.args.verbose {
            info!("Checked {} file(s), {} unmatched bracket(s)", tally.processed, unmatched);
        }
        if self.args.strict && unmatched > 0 {
            return Err(HasktError::CommandExecution(format!(
                "{} {}",
                unmatched,
                error_messages::UNMATCHED_BRACKETS
            )));
        }
        Ok(())
    }

    fn check_file(&self, path: &Path, at: Option<Position>) -> Result<FileBraces> {
        let text = read_source(path)?;
        let document = Document::new(&text);
        let partner = match at {
            Some(at) => Some((at, find_match(&document, at)?)),
            None => None,
        };
        let report = bracket_pairs(&document);
        if !report.is_balanced() {
            warn!(
                "{} has {} unmatched bracket(s)",
                path.display(),
                report.unmatched.len()
            );
        }
        Ok(FileBraces { report, partner })
    }
}

impl Command for BracesCommand {
    type Args = BracesArgs;
    type Output = ();

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "braces"
    }
}

impl CommandDescription for BracesCommand {
    fn description() -> &'static str {
        "Match brackets across lines"
    }

    fn help() -> &'static str {
        "Pairs every (), [] and {} in each file, skipping brackets inside \
         comments and literals, then prints the pairs and any unmatched \
         brackets. With --strict, exits with an error if any bracket is \
         unmatched. With --at LINE:OFFSET, also prints the partner of the \
         bracket at that position."
    }
}

/// Run the braces command.
pub fn run_braces(args: BracesArgs, config: Config) -> Result<()> {
    BracesCommand::new(args, config).execute()
}
