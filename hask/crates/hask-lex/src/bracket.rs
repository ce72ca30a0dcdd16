//! The fixed pairing between opening and closing delimiters.
//!
//! This is a pure lookup table with no state. Editors use it to find the
//! partner of a bracket lexeme when highlighting matching pairs.

use crate::token::TokenKind;

/// Each opening kind paired with its closing kind.
pub const PAIRS: [(TokenKind, TokenKind); 3] = [
    (TokenKind::OpenParen, TokenKind::CloseParen),
    (TokenKind::OpenSquare, TokenKind::CloseSquare),
    (TokenKind::OpenCurly, TokenKind::CloseCurly),
];

/// The three delimiter families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `(` `)`
    Paren,
    /// `[` `]`
    Square,
    /// `{` `}`
    Curly,
}

/// Returns true if `kind` is a bracket.
pub fn is_bracket(kind: TokenKind) -> bool {
    is_opening(kind) || is_closing(kind)
}

/// Returns true if `kind` opens a delimited region.
pub fn is_opening(kind: TokenKind) -> bool {
    PAIRS.iter().any(|(open, _)| *open == kind)
}

/// Returns true if `kind` closes a delimited region.
pub fn is_closing(kind: TokenKind) -> bool {
    PAIRS.iter().any(|(_, close)| *close == kind)
}

/// Returns the partner of a bracket kind, or `None` for non-brackets.
///
/// # Example
///
/// ```
/// use hask_lex::bracket::matching_kind;
/// use hask_lex::TokenKind;
///
/// assert_eq!(matching_kind(TokenKind::OpenParen), Some(TokenKind::CloseParen));
/// assert_eq!(matching_kind(TokenKind::CloseCurly), Some(TokenKind::OpenCurly));
/// assert_eq!(matching_kind(TokenKind::Comment), None);
/// ```
pub fn matching_kind(kind: TokenKind) -> Option<TokenKind> {
    PAIRS.iter().find_map(|&(open, close)| {
        if open == kind {
            Some(close)
        } else if close == kind {
            Some(open)
        } else {
            None
        }
    })
}

/// Returns the delimiter family of a bracket kind.
pub fn delimiter(kind: TokenKind) -> Option<Delimiter> {
    match kind {
        TokenKind::OpenParen | TokenKind::CloseParen => Some(Delimiter::Paren),
        TokenKind::OpenSquare | TokenKind::CloseSquare => Some(Delimiter::Square),
        TokenKind::OpenCurly | TokenKind::CloseCurly => Some(Delimiter::Curly),
        _ => None,
    }
}

/// Returns the bracket kind for a single character, if it is one.
///
/// Whether `{` starts a block comment instead is decided by the scanner.
pub fn kind_for_char(c: char) -> Option<TokenKind> {
    match c {
        '(' => Some(TokenKind::OpenParen),
        ')' => Some(TokenKind::CloseParen),
        '[' => Some(TokenKind::OpenSquare),
        ']' => Some(TokenKind::CloseSquare),
        '{' => Some(TokenKind::OpenCurly),
        '}' => Some(TokenKind::CloseCurly),
        _ => None,
    }
}
