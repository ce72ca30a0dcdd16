//! Lexer module.
//!
//! This module organizes the per-line lexer into smaller, focused components:
//! - `core` - Lexer struct, dispatch loop and the `forward` entry point
//! - `identifier` - Identifier and keyword lexing
//! - `operator` - Symbol runs, reserved operators and `--` comments
//! - `string` - String and character literal lexing
//! - `comment` - Nested block comments and line comments

mod comment;
mod core;
mod identifier;
mod operator;
mod string;

pub use self::core::{forward, forward_lines, Lexer, ScannedLine};
