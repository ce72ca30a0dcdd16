//! Comment lexing.
//!
//! Line comments run to the end of the line. Block comments nest and may
//! span lines; an unfinished one hands its depth to the next line.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a block comment starting at the cursor with `depth` openers
    /// already unmatched.
    ///
    /// Call with depth 0 when the cursor sits on `{-`, or with the carried
    /// depth at the start of a line that begins inside a comment. Emits the
    /// consumed span as comment lexemes and returns the depth left over:
    /// 0 if the comment closed on this line (cursor just after `-}`),
    /// otherwise the open depth with the cursor at end of line.
    pub fn lex_block_comment(&mut self, depth: u32) -> u32 {
        let start = self.cursor.position();
        let depth = self.skip_block_comment(depth);
        let end = self.cursor.position();
        self.push_split(start, end, TokenKind::Comment);
        depth
    }

    /// Advances over nested block comment text, tracking depth.
    ///
    /// A `}` only closes when preceded by a `-` on the same line at or
    /// after where this scan began, so `{-}` opens and closes in one go.
    fn skip_block_comment(&mut self, mut depth: u32) -> u32 {
        let origin = self.cursor.position();

        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if c == '{' && self.cursor.peek_byte(1) == Some(b'-') {
                depth = depth.saturating_add(1);
            } else if c == '}'
                && self.cursor.position() > origin
                && self.cursor.prev_byte() == Some(b'-')
            {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    self.cursor.advance();
                    return 0;
                }
            }
            self.cursor.advance();
        }

        depth
    }

    /// Lexes a line comment that begins at byte `start`.
    ///
    /// Everything from `start` to the end of the line is comment.
    pub fn lex_line_comment(&mut self, start: usize) {
        self.cursor.advance_to_end();
        let end = self.cursor.position();
        self.push_split(start, end, TokenKind::Comment);
    }
}
