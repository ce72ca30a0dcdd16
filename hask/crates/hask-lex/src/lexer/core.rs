//! Core lexer implementation.
//!
//! This module contains the per-line `Lexer` struct, its dispatch loop and
//! the `forward` entry point.

use crate::bracket;
use crate::cursor::Cursor;
use crate::split::{split, RunClass};
use crate::state::LineState;
use crate::token::{Lexeme, TokenKind};
use crate::unicode::{is_ident_start, is_symbol, is_white};

/// The lexemes of one line and the state to carry into the next line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScannedLine {
    /// Lexemes in increasing, non-overlapping start order.
    pub lexemes: Vec<Lexeme>,
    /// State at the end of the line.
    pub state: LineState,
}

/// Lexer for a single line of Hask source.
///
/// A `Lexer` is created for one line, consumed by [`Lexer::scan`], and
/// never reused. Everything it needs to know about earlier lines arrives
/// through the [`LineState`] argument, so scanning is a pure function of
/// `(state, line)`.
pub struct Lexer<'a> {
    /// Character cursor over the line.
    pub(crate) cursor: Cursor<'a>,

    /// Lexemes emitted so far.
    pub(crate) lexemes: Vec<Lexeme>,

    /// Set after the identifier `import`; cleared at the next `(` or `;`.
    pub(crate) import_mode: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for `line`, which must not contain a line terminator.
    pub fn new(line: &'a str) -> Self {
        Self {
            cursor: Cursor::new(line),
            lexemes: Vec::new(),
            import_mode: false,
        }
    }

    /// Scans the whole line starting in `state`.
    ///
    /// A line that starts inside a block comment first finishes (or fails
    /// to finish) that comment; the rest of the line is lexed normally.
    pub fn scan(mut self, state: LineState) -> ScannedLine {
        if let LineState::InComment(depth) = state {
            let depth = self.lex_block_comment(depth.get());
            if depth != 0 {
                return self.finish(LineState::with_depth(depth));
            }
        }

        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if is_white(c) {
                self.cursor.advance();
                continue;
            }

            self.import_mode = self.import_mode && c != '(' && c != ';';

            if is_symbol(c) {
                if self.lex_symbol() {
                    break;
                }
            } else if is_ident_start(c) {
                self.lex_identifier();
            } else if c == '"' || c == '\'' {
                self.lex_quoted(c);
            } else if c == '{' && self.cursor.peek_byte(1) == Some(b'-') {
                let depth = self.lex_block_comment(0);
                if depth != 0 {
                    return self.finish(LineState::with_depth(depth));
                }
            } else {
                let start = self.cursor.position();
                self.cursor.advance();
                let kind = bracket::kind_for_char(c).unwrap_or(TokenKind::Unknown);
                self.push(start, self.cursor.position() - start, kind);
            }
        }

        self.finish(LineState::Normal)
    }

    /// Emits one lexeme.
    pub(crate) fn push(&mut self, start: usize, len: usize, kind: TokenKind) {
        if len > 0 {
            self.lexemes.push(Lexeme::new(start, len, kind));
        }
    }

    /// Emits the non-whitespace runs of `start..end` as lexemes of `kind`.
    pub(crate) fn push_split(&mut self, start: usize, end: usize, kind: TokenKind) {
        let source = self.cursor.source();
        for run in split(&source[start..end]) {
            if run.class != RunClass::Space {
                self.lexemes.push(Lexeme::new(start + run.start, run.len, kind));
            }
        }
    }

    fn finish(self, state: LineState) -> ScannedLine {
        ScannedLine {
            lexemes: self.lexemes,
            state,
        }
    }
}

/// Lexes one line, given the state the previous line ended in.
///
/// This is the editor's per-line entry point. The result depends only on
/// `state` and `line`, so an editor may cache each line's outgoing state and
/// re-lex only from an edited line until the outgoing state stops changing.
///
/// # Example
///
/// ```
/// use hask_lex::{forward, LineState, TokenKind};
///
/// let first = forward(LineState::Normal, "x = 1 {- start");
/// assert_eq!(first.state, LineState::with_depth(1));
///
/// let second = forward(first.state, "end -} y");
/// assert_eq!(second.state, LineState::Normal);
/// assert_eq!(second.lexemes.last().map(|l| l.kind), Some(TokenKind::Unknown));
/// ```
pub fn forward(state: LineState, line: &str) -> ScannedLine {
    Lexer::new(line).scan(state)
}

/// Lexes consecutive lines, threading the state from each to the next.
///
/// Returns the result for every line; the last result's state (or `state`
/// itself when `lines` is empty) is the state after the final line.
pub fn forward_lines<'a, I>(state: LineState, lines: I) -> Vec<ScannedLine>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = state;
    lines
        .into_iter()
        .map(|line| {
            let scanned = forward(state, line);
            state = scanned.state;
            scanned
        })
        .collect()
}
