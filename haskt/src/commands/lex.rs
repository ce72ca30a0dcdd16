//! Lex command implementation.
//!
//! Prints the lexemes of every line of each input file, threading the
//! comment state from line to line exactly as an editor would.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use hask_lex::{forward_lines, LineState};
use serde::Serialize;
use tracing::{debug, info};

use crate::commands::common::{
    emit_outputs, file_header, process_files, read_source, validate_inputs, OutputFormat,
};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files to lex.
    pub input: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<String>,
    /// Integer state to start the first line in.
    pub state: Option<u32>,
    /// Print each line's outgoing state.
    pub show_state: bool,
    /// Leave out lines without lexemes.
    pub skip_empty: bool,
    /// Number of parallel jobs.
    pub jobs: Option<u32>,
}

/// One lexeme in the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexemeRecord {
    /// Byte offset within the line.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
    /// Kind name.
    pub kind: &'static str,
    /// The lexeme text.
    pub text: String,
}

/// One line in the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRecord {
    /// 1-based line number.
    pub line: usize,
    /// Outgoing state in integer form.
    pub state: u32,
    /// Lexemes of the line.
    pub lexemes: Vec<LexemeRecord>,
}

/// One file in the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Input path as given.
    pub path: String,
    /// State the first line started in.
    pub initial_state: u32,
    /// State after the last line.
    pub final_state: u32,
    /// Per-line records.
    pub lines: Vec<LineRecord>,
}

/// Lexes `text` from `initial` and builds the file record.
pub fn lex_text(path: &str, text: &str, initial: LineState, skip_empty: bool) -> FileRecord {
    let lines: Vec<&str> = text.lines().collect();
    let scanned = forward_lines(initial, lines.iter().copied());
    let final_state = scanned.last().map_or(initial, |s| s.state);

    let records = scanned
        .into_iter()
        .zip(&lines)
        .enumerate()
        .filter(|(_, (s, _))| !(skip_empty && s.lexemes.is_empty()))
        .map(|(index, (s, line))| LineRecord {
            line: index + 1,
            state: s.state.to_u32(),
            lexemes: s
                .lexemes
                .iter()
                .map(|l| LexemeRecord {
                    start: l.start,
                    len: l.len,
                    kind: l.kind.name(),
                    text: l.text(line).to_string(),
                })
                .collect(),
        })
        .collect();

    FileRecord {
        path: path.to_string(),
        initial_state: initial.to_u32(),
        final_state: final_state.to_u32(),
        lines: records,
    }
}

/// Renders a file record as text, one lexeme per output line.
pub fn render_text(record: &FileRecord, show_state: bool) -> String {
    let mut out = String::new();
    for line in &record.lines {
        for lexeme in &line.lexemes {
            let _ = writeln!(
                out,
                "{}:{}+{} {} {:?}",
                line.line, lexeme.start, lexeme.len, lexeme.kind, lexeme.text
            );
        }
        if show_state {
            let _ = writeln!(out, "{} state {}", line.line, LineState::from_u32(line.state));
        }
    }
    out
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        validate_inputs(&self.args.input)?;
        let format = OutputFormat::resolve(self.args.format.as_deref(), &self.config.lex.format)?;
        let initial = LineState::from_u32(self.args.state.unwrap_or(0));
        let show_state = self.args.show_state || self.config.lex.show_state;
        let skip_empty = self.args.skip_empty || self.config.lex.skip_empty;
        let with_headers = self.args.input.len() > 1 && format == OutputFormat::Text;
        debug!(command = Self::name(), ?format, %initial, show_state, skip_empty, "starting");

        let outputs = process_files(&self.args.input, self.jobs(), |path| {
            let record = self.lex_file(path, initial, skip_empty)?;
            match format {
                OutputFormat::Text => {
                    let body = render_text(&record, show_state);
                    Ok(if with_headers {
                        file_header(path) + &body
                    } else {
                        body
                    })
                }
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&record)? + "\n"),
            }
        })?;

        let tally = emit_outputs(&self.args.input, outputs)?;
        if self.args.verbose {
            info!("Lexed {} file(s)", tally.processed);
        }
        Ok(())
    }

    fn lex_file(&self, path: &Path, initial: LineState, skip_empty: bool) -> Result<FileRecord> {
        let text = read_source(path)?;
        Ok(lex_text(&path.display().to_string(), &text, initial, skip_empty))
    }

    fn jobs(&self) -> u32 {
        self.args.jobs.unwrap_or(self.config.run.jobs)
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = ();

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "lex"
    }
}

impl CommandDescription for LexCommand {
    fn description() -> &'static str {
        "Print the lexemes of each line"
    }

    fn help() -> &'static str {
        "Lexes each input file line by line, carrying block comment state \
         from one line to the next, and prints every lexeme as \
         `line:start+len kind \"text\"`. Use --format json for one JSON \
         document per file, and --state to start inside a comment."
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs, config: Config) -> Result<()> {
    LexCommand::new(args, config).execute()
}
