//! hask-ide - Editor services built on hask-lex
//!
//! The lexer answers one question: given the state at the start of a line,
//! what are that line's lexemes and the state at its end? This crate
//! supplies what an editor wraps around that answer.
//!
//! - [`document`] - Line texts with the outgoing state of each line cached,
//!   and incremental re-lexing after edits
//! - [`highlight`] - Lexemes mapped to colours and caret triggers
//! - [`braces`] - Bracket matching across lines
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```
//! use hask_ide::braces::{find_match, Position};
//! use hask_ide::Document;
//!
//! let mut doc = Document::new("main = print (\n  1 + 2)");
//! assert_eq!(find_match(&doc, Position::new(0, 13)).unwrap(), Some(Position::new(1, 7)));
//!
//! doc.set_line(0, "main = print {- (").unwrap();
//! assert_eq!(find_match(&doc, Position::new(0, 16)).unwrap(), None);
//! ```

pub mod braces;
pub mod document;
pub mod error;
pub mod highlight;

pub use braces::{bracket_pairs, find_match, BracketPair, BracketReport, Position, Unmatched};
pub use document::{Document, RelexReport};
pub use error::{IdeError, Result};
pub use highlight::{highlight_line, LineScanner, TokenColor, TokenInfo, TokenTrigger, TokenType};
