//! Haskt CLI - Command-line front end for the hask editor lexer.
//!
//! This is the main entry point for the haskt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::traits::CommandDescription;
use commands::{
    run_braces, run_lex, run_states, BracesArgs, BracesCommand, LexArgs, LexCommand, StatesArgs,
    StatesCommand,
};
use config::Config;
use error::{HasktError, Result};

/// Haskt - Inspect how the hask editor lexer sees a file
#[derive(Parser, Debug)]
#[command(name = "haskt")]
#[command(author = "Hask Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect how the hask editor lexer sees a file", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "HASKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "HASKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "HASKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the haskt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = LexCommand::description(), long_about = LexCommand::help())]
    Lex(LexOptions),

    #[command(about = StatesCommand::description(), long_about = StatesCommand::help())]
    States(StatesOptions),

    #[command(about = BracesCommand::description(), long_about = BracesCommand::help())]
    Braces(BracesOptions),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexOptions {
    /// Input files to lex
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Integer state the first line starts in (0 = normal, n = n nested comments)
    #[arg(short, long)]
    state: Option<u32>,

    /// Print the state after each line
    #[arg(long)]
    show_state: bool,

    /// Leave out lines without lexemes
    #[arg(long)]
    skip_empty: bool,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,
}

/// Arguments for the states subcommand.
#[derive(Parser, Debug)]
struct StatesOptions {
    /// Input files
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,
}

/// Arguments for the braces subcommand.
#[derive(Parser, Debug)]
struct BracesOptions {
    /// Input files
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Exit with an error if any bracket is unmatched
    #[arg(long)]
    strict: bool,

    /// Print the partner of the bracket at LINE:OFFSET (1-based line)
    #[arg(long, value_name = "LINE:OFFSET")]
    at: Option<String>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,
}

/// Main entry point for the haskt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first so its verbose flag can raise the log level
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout carries only command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| HasktError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, verbose, config),
        Commands::States(args) => execute_states(args, verbose, config),
        Commands::Braces(args) => execute_braces(args, verbose, config),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexOptions, verbose: bool, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        verbose,
        input: args.input,
        format: args.format,
        state: args.state,
        show_state: args.show_state,
        skip_empty: args.skip_empty,
        jobs: args.jobs,
    };
    run_lex(lex_args, config)
}

/// Execute the states command.
fn execute_states(args: StatesOptions, verbose: bool, config: Config) -> Result<()> {
    let states_args = StatesArgs {
        verbose,
        input: args.input,
        jobs: args.jobs,
    };
    run_states(states_args, config)
}

/// Execute the braces command.
fn execute_braces(args: BracesOptions, verbose: bool, config: Config) -> Result<()> {
    let braces_args = BracesArgs {
        verbose,
        input: args.input,
        strict: args.strict,
        at: args.at,
        jobs: args.jobs,
    };
    run_braces(braces_args, config)
}
