//! Identifier and keyword lexing.

use crate::keywords::{is_import_id, is_reserved_id};
use crate::token::TokenKind;
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits, underscores or primes. Reserved identifiers are keywords;
    /// `hiding`, `qualified` and `as` are keywords only while import mode is
    /// on. Reading `import` turns import mode on.
    pub fn lex_identifier(&mut self) {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);

        let ident = self.cursor.slice_from(start);
        let kind = if is_reserved_id(ident) || (self.import_mode && is_import_id(ident)) {
            TokenKind::Keyword
        } else {
            TokenKind::Unknown
        };
        if ident == "import" {
            self.import_mode = true;
        }

        self.push(start, ident.len(), kind);
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
    fn test_keyword_module() {
        assert_eq!(lex("module"), [("module", TokenKind::Keyword)]);
    }

    #[test]
    fn test_constructor_is_not_keyword() {
        assert_eq!(lex("Foo"), [("Foo", TokenKind::Unknown)]);
    }

    #[test]
    fn test_primes_and_underscores() {
        assert_eq!(lex("foldl' _x x''"), [
            ("foldl'", TokenKind::Unknown),
            ("_x", TokenKind::Unknown),
            ("x''", TokenKind::Unknown),
        ]);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex("letter iff"), [("letter", TokenKind::Unknown), ("iff", TokenKind::Unknown)]);
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(lex("λάμδα"), [("λάμδα", TokenKind::Unknown)]);
    }

    #[test]
    fn test_module_export_list() {
        assert_eq!(lex("module (A,B(..),C) where"), [
            ("module", TokenKind::Keyword),
            ("(", TokenKind::OpenParen),
            ("A", TokenKind::Unknown),
            (",", TokenKind::Unknown),
            ("B", TokenKind::Unknown),
            ("(", TokenKind::OpenParen),
            ("..", TokenKind::Unknown),
            (")", TokenKind::CloseParen),
            (",", TokenKind::Unknown),
            ("C", TokenKind::Unknown),
            (")", TokenKind::CloseParen),
            ("where", TokenKind::Keyword),
        ]);
    }

    #[test]
    fn test_import_words_without_import() {
        assert_eq!(lex("qualified = as"), [
            ("qualified", TokenKind::Unknown),
            ("=", TokenKind::Keyword),
            ("as", TokenKind::Unknown),
        ]);
    }

    #[test]
    fn test_import_qualified_as() {
        assert_eq!(lex("import qualified Foo as Bar"), [
            ("import", TokenKind::Keyword),
            ("qualified", TokenKind::Keyword),
            ("Foo", TokenKind::Unknown),
            ("as", TokenKind::Keyword),
            ("Bar", TokenKind::Unknown),
        ]);
    }

    #[test]
    fn test_import_dotted_module() {
        assert_eq!(lex("import qualified Prelude.Bar as Foo"), [
            ("import", TokenKind::Keyword),
            ("qualified", TokenKind::Keyword),
            ("Prelude", TokenKind::Unknown),
            (".", TokenKind::Unknown),
            ("Bar", TokenKind::Unknown),
            ("as", TokenKind::Keyword),
            ("Foo", TokenKind::Unknown),
        ]);
    }

    #[test]
    fn test_import_mode_ends_at_paren() {
        assert_eq!(lex("import qualified Prelude.Bar hiding (as)"), [
            ("import", TokenKind::Keyword),
            ("qualified", TokenKind::Keyword),
            ("Prelude", TokenKind::Unknown),
            (".", TokenKind::Unknown),
            ("Bar", TokenKind::Unknown),
            ("hiding", TokenKind::Keyword),
            ("(", TokenKind::OpenParen),
            ("as", TokenKind::Unknown),
            (")", TokenKind::CloseParen),
        ]);
    }

    #[test]
    fn test_import_mode_ends_at_semicolon() {
        let lexemes = lex("import A; as");
        assert_eq!(lexemes.last(), Some(&("as", TokenKind::Unknown)));
    }

    #[test]
    fn test_import_mode_survives_paren_in_string() {
        let lexemes = lex("import A \"(\" as");
        assert_eq!(lexemes.last(), Some(&("as", TokenKind::Keyword)));
        let lexemes = lex("import A ';' qualified");
        assert_eq!(lexemes.last(), Some(&("qualified", TokenKind::Keyword)));
    }

    #[test]
    fn test_import_mode_survives_semicolon_in_comment() {
        let lexemes = lex("import A {- ; ( -} hiding");
        assert_eq!(lexemes.last(), Some(&("hiding", TokenKind::Keyword)));
    }

    #[test]
    fn test_import_mode_ends_at_bare_paren() {
        assert_eq!(lex("import A (as"), [
            ("import", TokenKind::Keyword),
            ("A", TokenKind::Unknown),
            ("(", TokenKind::OpenParen),
            ("as", TokenKind::Unknown),
        ]);
    }

    #[test]
    fn test_import_mode_does_not_cross_lines() {
        let first = forward(LineState::Normal, "import A");
        let line = "as B";
        let second = forward(first.state, line);
        assert_eq!(second.lexemes[0].kind, TokenKind::Unknown);
    }
}
