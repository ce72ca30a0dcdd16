//! String and character literal lexing.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a literal opened by `quote` (`"` or `'`).
    ///
    /// Runs to the next unescaped `quote`. A backslash always swallows the
    /// character after it. Without a closing quote the literal runs to the
    /// end of the line; a trailing backslash is clamped to the line.
    pub fn lex_quoted(&mut self, quote: char) {
        let start = self.cursor.position();
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            self.cursor.advance();
            if c == quote {
                break;
            }
            if c == '\\' {
                self.cursor.advance();
            }
        }

        let kind = if quote == '"' {
            TokenKind::String
        } else {
            TokenKind::Char
        };
        let end = self.cursor.position();
        self.push_split(start, end, kind);
    }
}

#[cfg(test)]
mod tests {
    use crate::{forward, LineState, TokenKind};

    fn lex(line: &str) -> Vec<(&str, TokenKind)> {
        forward(LineState::Normal, line)
            .lexemes
            .iter()
            .map(|l| (l.text(line), l.kind))
            .collect()
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(lex("test = \"more\""), [
            ("test", TokenKind::Unknown),
            ("=", TokenKind::Keyword),
            ("\"", TokenKind::String),
            ("more", TokenKind::String),
            ("\"", TokenKind::String),
        ]);
    }

    #[test]
    fn test_string_words() {
        let lexemes = lex("test = \"mor stuff\"");
        let strings: Vec<_> = lexemes
            .iter()
            .filter(|(_, kind)| *kind == TokenKind::String)
            .map(|(text, _)| *text)
            .collect();
        assert_eq!(strings, ["\"", "mor", "stuff", "\""]);
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(lex("test = \"mor"), [
            ("test", TokenKind::Unknown),
            ("=", TokenKind::Keyword),
            ("\"", TokenKind::String),
            ("mor", TokenKind::String),
        ]);
    }

    #[test]
    fn test_char_literal_then_keyword() {
        assert_eq!(lex("test = 'mor stuff' where"), [
            ("test", TokenKind::Unknown),
            ("=", TokenKind::Keyword),
            ("'", TokenKind::Char),
            ("mor", TokenKind::Char),
            ("stuff", TokenKind::Char),
            ("'", TokenKind::Char),
            ("where", TokenKind::Keyword),
        ]);
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        assert_eq!(lex("test = \"mor \\\"stuff\""), [
            ("test", TokenKind::Unknown),
            ("=", TokenKind::Keyword),
            ("\"", TokenKind::String),
            ("mor", TokenKind::String),
            ("\\\"", TokenKind::String),
            ("stuff", TokenKind::String),
            ("\"", TokenKind::String),
        ]);
    }

    #[test]
    fn test_trailing_backslash_is_clamped() {
        let line = "test = \"mor \\";
        let scanned = forward(LineState::Normal, line);
        let last = scanned.lexemes.last().copied().unwrap();
        assert_eq!(last.text(line), "\\");
        assert_eq!(last.end(), line.len());
        assert_eq!(last.kind, TokenKind::String);
    }

    #[test]
    fn test_escaped_multibyte_char() {
        let line = "'\\λ' x";
        let lexemes = lex(line);
        assert_eq!(lexemes.last(), Some(&("x", TokenKind::Unknown)));
        assert!(lexemes[..lexemes.len() - 1].iter().all(|(_, k)| *k == TokenKind::Char));
    }

    #[test]
    fn test_comment_markers_inside_string() {
        assert_eq!(lex("\"{- --\" x"), [
            ("\"{-", TokenKind::String),
            ("--\"", TokenKind::String),
            ("x", TokenKind::Unknown),
        ]);
    }

    #[test]
    fn test_string_does_not_change_state() {
        let scanned = forward(LineState::Normal, "\"{- unclosed");
        assert_eq!(scanned.state, LineState::Normal);
    }
}
