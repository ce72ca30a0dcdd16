//! Token kinds and lexemes.

use std::fmt;

use crate::bracket;

/// The classification of a lexeme.
///
/// The six bracket kinds come in open/close pairs; see [`crate::bracket`]
/// for the pairing. The remaining kinds are presentation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenSquare,
    /// `]`
    CloseSquare,
    /// `{` that does not start a block comment
    OpenCurly,
    /// `}`
    CloseCurly,
    /// Identifiers, operators and any other character.
    Unknown,
    /// Part of a double-quoted string literal.
    String,
    /// Part of a single-quoted character literal.
    Char,
    /// Part of a line or block comment.
    Comment,
    /// Reserved identifier or reserved operator.
    Keyword,
}

impl TokenKind {
    /// Every kind, brackets first.
    pub const ALL: [TokenKind; 11] = [
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenSquare,
        TokenKind::CloseSquare,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::Unknown,
        TokenKind::String,
        TokenKind::Char,
        TokenKind::Comment,
        TokenKind::Keyword,
    ];

    /// Returns true for comment lexemes.
    pub fn is_comment(self) -> bool {
        self == TokenKind::Comment
    }

    /// Returns true for string and character literal lexemes.
    pub fn is_string(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Char)
    }

    /// Returns true for keyword lexemes.
    pub fn is_keyword(self) -> bool {
        self == TokenKind::Keyword
    }

    /// Returns true for the six bracket kinds.
    pub fn is_bracket(self) -> bool {
        bracket::is_bracket(self)
    }

    /// Short lowercase name, used in dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::OpenParen => "open-paren",
            TokenKind::CloseParen => "close-paren",
            TokenKind::OpenSquare => "open-square",
            TokenKind::CloseSquare => "close-square",
            TokenKind::OpenCurly => "open-curly",
            TokenKind::CloseCurly => "close-curly",
            TokenKind::Unknown => "unknown",
            TokenKind::String => "string",
            TokenKind::Char => "char",
            TokenKind::Comment => "comment",
            TokenKind::Keyword => "keyword",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified span of one line.
///
/// `start` and `len` are byte offsets relative to the start of the line;
/// `len` is always positive and `start + len` never exceeds the line length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lexeme {
    /// Byte offset of the first character.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
    /// Classification.
    pub kind: TokenKind,
}

impl Lexeme {
    /// Creates a lexeme.
    pub fn new(start: usize, len: usize, kind: TokenKind) -> Self {
        debug_assert!(len > 0, "lexemes are never empty");
        Self { start, len, kind }
    }

    /// Byte offset one past the last character.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns the text this lexeme covers in `line`.
    ///
    /// # Example
    ///
    /// ```
    /// use hask_lex::{Lexeme, TokenKind};
    ///
    /// let lexeme = Lexeme::new(4, 3, TokenKind::Keyword);
    /// assert_eq!(lexeme.text("foo let x"), "let");
    /// ```
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end()]
    }

    /// Returns true if byte offset `offset` falls inside this lexeme.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end()
    }
}
