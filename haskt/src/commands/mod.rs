//! Command modules for the haskt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod braces;
pub mod lex;
pub mod states;

// Re-export command types and functions
pub use braces::{run_braces, BracesArgs, BracesCommand};
pub use lex::{run_lex, LexArgs, LexCommand};
pub use states::{run_states, StatesArgs, StatesCommand};
