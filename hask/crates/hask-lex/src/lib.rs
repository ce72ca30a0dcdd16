//! hask-lex - Line-oriented lexer for Hask source in editors
//!
//! This crate tokenizes Haskell-style source one line at a time for syntax
//! colouring and brace matching. It never parses or validates grammar; it
//! only decides, for each span of a line, whether it is a keyword, a
//! comment, a literal, a bracket, or something else.
//!
//! # Overview
//!
//! Block comments (`{- ... -}`) nest and may span lines, so a line cannot be
//! lexed in isolation. Instead each line is lexed from a small [`LineState`]
//! carried over from the end of the previous line. An editor stores the
//! outgoing state of every line and, after an edit, re-lexes from the edited
//! line only until the outgoing state matches what it had cached.
//!
//! # Example Usage
//!
//! ```
//! use hask_lex::{forward, LineState, TokenKind};
//!
//! let line = "import qualified Data.Map as M -- maps";
//! let scanned = forward(LineState::Normal, line);
//!
//! let keywords: Vec<&str> = scanned
//!     .lexemes
//!     .iter()
//!     .filter(|l| l.kind == TokenKind::Keyword)
//!     .map(|l| l.text(line))
//!     .collect();
//! assert_eq!(keywords, ["import", "qualified", "as"]);
//! assert_eq!(scanned.state, LineState::Normal);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and lexemes
//! - [`lexer`] - The per-line scanner
//! - [`state`] - State carried between lines
//! - [`bracket`] - Open/close delimiter pairing
//! - [`split`] - Word splitting inside comments and literals
//! - [`keywords`] - Reserved identifiers and operators
//! - [`cursor`] - Character cursor for line traversal
//! - [`unicode`] - Character classification
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `case`, `class`, `data`, `deriving`, `do`, `else`, `forall`, `if`,
//! `import`, `in`, `infix`, `infixl`, `infixr`, `instance`, `let`, `module`,
//! `newtype`, `of`, `then`, `type`, `where`, and the operators `->`, `<-`,
//! `::`, `@`, `=`, `|`, `\`. After `import`, the words `hiding`,
//! `qualified` and `as` are keywords too, up to the next `(` or `;`.
//!
//! ## Comments and Literals
//!
//! Comments (`--` to end of line, nested `{- -}`) and literals (`"..."`,
//! `'...'`) are split into word-sized lexemes so editors can select and
//! highlight words inside them.
//!
//! ## Brackets
//!
//! `()`, `[]`, `{}`. A `{` directly followed by `-` opens a comment instead.
//!
//! ## Malformed Input
//!
//! There are no lexical errors. Unterminated literals and comments run to
//! the end of the line, and no lexeme ever extends past the line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bracket;
pub mod cursor;
pub mod keywords;
pub mod lexer;
pub mod split;
pub mod state;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use bracket::{is_bracket, is_closing, is_opening, matching_kind, Delimiter};
pub use cursor::Cursor;
pub use lexer::{forward, forward_lines, Lexer, ScannedLine};
pub use state::LineState;
pub use token::{Lexeme, TokenKind};
