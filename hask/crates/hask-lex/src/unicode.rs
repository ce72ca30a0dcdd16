//! Character classification for the Hask lexer.
//!
//! This module provides the character predicates the scanner dispatches on.
//! Letters, digits and symbols are decided by Unicode general category so
//! that operators such as `→` or `∘` lex the same way as their ASCII
//! counterparts.

use unicode_general_category::{get_general_category, GeneralCategory};

/// ASCII characters that may appear in a symbolic operator.
pub const ASCII_SYMBOLS: &str = "!#$%&*+./<=>?@\\^|-~:";

/// Checks if a character is whitespace.
///
/// Uses the Unicode `White_Space` property.
#[inline]
pub fn is_white(c: char) -> bool {
    c.is_whitespace()
}

/// Checks if a character is a letter (general categories `Lu`, `Ll`, `Lt`,
/// `Lm`, `Lo`).
///
/// # Example
///
/// ```
/// use hask_lex::unicode::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('λ'));
/// assert!(!is_letter('1'));
/// assert!(!is_letter('_'));
/// ```
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Checks if a character is a decimal digit (general category `Nd`).
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Checks if a character may appear in a symbolic operator.
///
/// This is the fixed ASCII set [`ASCII_SYMBOLS`] plus every character in a
/// Unicode symbol category (`Sm`, `Sc`, `Sk`, `So`). Brackets, quotes, `,`
/// and `;` are not symbols.
///
/// # Example
///
/// ```
/// use hask_lex::unicode::is_symbol;
///
/// assert!(is_symbol('-'));
/// assert!(is_symbol('>'));
/// assert!(is_symbol('→'));
/// assert!(!is_symbol('('));
/// assert!(!is_symbol(','));
/// assert!(!is_symbol('"'));
/// ```
pub fn is_symbol(c: char) -> bool {
    if ASCII_SYMBOLS.contains(c) {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

/// Checks if a character is valid as the start of an identifier.
///
/// Valid identifier start characters are letters and the underscore.
///
/// # Example
///
/// ```
/// use hask_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('\''));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || is_letter(c)
}

/// Checks if a character is valid as a continuation of an identifier.
///
/// Continuation characters are letters, digits, the underscore and the
/// prime (`'`), so `foldl'` and `x''` are single identifiers.
///
/// # Example
///
/// ```
/// use hask_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('1'));
/// assert!(is_ident_continue('\''));
/// assert!(!is_ident_continue('.'));
/// assert!(!is_ident_continue(' '));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '\'' || is_letter(c) || is_digit(c)
}

/// Checks if a character belongs to a word inside a comment or literal
/// (letter, digit or underscore).
pub fn is_word(c: char) -> bool {
    c == '_' || is_letter(c) || is_digit(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_symbols_are_symbols() {
        for c in ASCII_SYMBOLS.chars() {
            assert!(is_symbol(c), "{c:?} should be a symbol");
        }
    }

    #[test]
    fn test_unicode_symbol_categories() {
        assert!(is_symbol('∘'));
        assert!(is_symbol('€'));
        assert!(is_symbol('`'));
        assert!(is_symbol('★'));
    }

    #[test]
    fn test_punctuation_is_not_symbol() {
        for c in ['(', ')', '[', ']', '{', '}', ',', ';', '"', '\'', '_'] {
            assert!(!is_symbol(c), "{c:?} should not be a symbol");
        }
    }

    #[test]
    fn test_unicode_letters_and_digits() {
        assert!(is_letter('Ж'));
        assert!(is_letter('ǅ'));
        assert!(is_digit('٣'));
        assert!(!is_letter('٣'));
        assert!(is_ident_continue('٣'));
        assert!(!is_ident_start('٣'));
    }

    #[test]
    fn test_word_excludes_prime() {
        assert!(is_word('_'));
        assert!(is_word('x'));
        assert!(is_word('9'));
        assert!(!is_word('\''));
        assert!(!is_word('-'));
    }

    #[test]
    fn test_whitespace() {
        assert!(is_white(' '));
        assert!(is_white('\t'));
        assert!(is_white('\u{00A0}'));
        assert!(!is_white('x'));
    }
}
