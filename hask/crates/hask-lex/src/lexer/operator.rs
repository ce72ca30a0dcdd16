//! Operator lexing.
//!
//! Operators are maximal runs of symbol characters. A run made only of
//! dashes, at least two long, is a line comment instead.

use crate::keywords::is_reserved_op;
use crate::token::TokenKind;
use crate::unicode::is_symbol;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a run of symbol characters.
    ///
    /// Returns true if the run started a line comment, in which case the
    /// rest of the line has been consumed.
    pub fn lex_symbol(&mut self) -> bool {
        let start = self.cursor.position();
        let count = self.cursor.eat_while(is_symbol);
        let run = self.cursor.slice_from(start);

        if count >= 2 && run.bytes().all(|b| b == b'-') {
            self.lex_line_comment(start);
            return true;
        }

        let kind = if is_reserved_op(run) {
            TokenKind::Keyword
        } else {
            TokenKind::Unknown
        };
        self.push(start, run.len(), kind);
        false
    }
}
