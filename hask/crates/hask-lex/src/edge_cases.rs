//! Edge case tests for hask-lex

use crate::unicode::is_white;
use crate::{forward, forward_lines, LineState, ScannedLine, TokenKind};

fn texts(line: &str) -> Vec<(&str, TokenKind)> {
    forward(LineState::Normal, line)
        .lexemes
        .iter()
        .map(|l| (l.text(line), l.kind))
        .collect()
}

/// Checks the structural guarantees every scanned line must satisfy.
fn assert_well_formed(line: &str, scanned: &ScannedLine) {
    let mut previous_end = 0;
    for lexeme in &scanned.lexemes {
        assert!(lexeme.len > 0, "empty lexeme in {line:?}");
        assert!(lexeme.start >= previous_end, "overlap in {line:?}");
        assert!(lexeme.end() <= line.len(), "lexeme past end of {line:?}");
        assert!(line.is_char_boundary(lexeme.start));
        assert!(line.is_char_boundary(lexeme.end()));
        assert!(!lexeme.text(line).chars().any(is_white), "whitespace in lexeme of {line:?}");
        previous_end = lexeme.end();
    }

    for (offset, c) in line.char_indices() {
        let covered = scanned.lexemes.iter().any(|l| l.contains(offset));
        assert_eq!(covered, !is_white(c), "offset {offset} of {line:?}");
    }
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_line() {
    assert!(texts("").is_empty());
}

#[test]
fn test_edge_single_char_ident() {
    assert_eq!(texts("x"), [("x", TokenKind::Unknown)]);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let line = format!("let {name} = 1");
    let lexemes = texts(&line);
    assert_eq!(lexemes[1], (name.as_str(), TokenKind::Unknown));
}

#[test]
fn test_edge_digits_are_single_lexemes() {
    assert_eq!(
        texts("42"),
        [("4", TokenKind::Unknown), ("2", TokenKind::Unknown)]
    );
}

#[test]
fn test_edge_digit_then_identifier() {
    assert_eq!(
        texts("1x'"),
        [("1", TokenKind::Unknown), ("x'", TokenKind::Unknown)]
    );
}

#[test]
fn test_edge_backtick_is_symbol() {
    assert_eq!(
        texts("a `div` b"),
        [
            ("a", TokenKind::Unknown),
            ("`", TokenKind::Unknown),
            ("div", TokenKind::Unknown),
            ("`", TokenKind::Unknown),
            ("b", TokenKind::Unknown),
        ]
    );
}

#[test]
fn test_edge_lone_opening_curly() {
    assert_eq!(texts("{"), [("{", TokenKind::OpenCurly)]);
    assert_eq!(forward(LineState::Normal, "{").state, LineState::Normal);
}

#[test]
fn test_edge_curly_then_space_dash() {
    assert_eq!(
        texts("{ -x }"),
        [
            ("{", TokenKind::OpenCurly),
            ("-", TokenKind::Unknown),
            ("x", TokenKind::Unknown),
            ("}", TokenKind::CloseCurly),
        ]
    );
}

#[test]
fn test_edge_stray_closer_outside_comment() {
    assert_eq!(
        texts("-}"),
        [("-", TokenKind::Unknown), ("}", TokenKind::CloseCurly)]
    );
}

#[test]
fn test_edge_opener_at_end_of_line() {
    let scanned = forward(LineState::Normal, "x {-");
    assert_eq!(scanned.state, LineState::with_depth(1));
}

#[test]
fn test_edge_deep_nesting() {
    let line = "{-".repeat(500);
    let scanned = forward(LineState::Normal, &line);
    assert_eq!(scanned.state, LineState::with_depth(500));

    let closers = "-}".repeat(499);
    let scanned = forward(scanned.state, &closers);
    assert_eq!(scanned.state, LineState::with_depth(1));
}

#[test]
fn test_edge_depth_saturates() {
    let scanned = forward(LineState::with_depth(u32::MAX), "{- more");
    assert_eq!(scanned.state, LineState::with_depth(u32::MAX));
}

#[test]
fn test_edge_empty_line_inside_comment() {
    let lines = ["{- open", "", "   ", "close -} x"];
    let scanned = forward_lines(LineState::Normal, lines);
    assert_eq!(scanned[1].state, LineState::with_depth(1));
    assert_eq!(scanned[2].state, LineState::with_depth(1));
    assert_eq!(scanned[3].state, LineState::Normal);
}

#[test]
fn test_edge_forward_lines_empty() {
    assert!(forward_lines(LineState::with_depth(2), std::iter::empty::<&str>()).is_empty());
}

#[test]
fn test_edge_multibyte_text() {
    let line = "πr² = \"ünïcödé\" -- ☃ snow";
    let scanned = forward(LineState::Normal, line);
    assert_well_formed(line, &scanned);
    assert_eq!(scanned.lexemes[0].text(line), "πr");
}

#[test]
fn test_edge_tabs_and_unicode_spaces() {
    let line = "\tx\u{00A0}=\u{2003}y";
    let scanned = forward(LineState::Normal, line);
    assert_well_formed(line, &scanned);
    assert_eq!(scanned.lexemes.len(), 3);
}

#[test]
fn test_edge_quote_at_end_of_line() {
    assert_eq!(texts("x = '"), [
        ("x", TokenKind::Unknown),
        ("=", TokenKind::Keyword),
        ("'", TokenKind::Char),
    ]);
}

#[test]
fn test_edge_line_comment_after_string() {
    let line = "s = \"a\" -- b";
    let kinds: Vec<_> = texts(line).into_iter().map(|(_, kind)| kind).collect();
    assert_eq!(kinds.last(), Some(&TokenKind::Comment));
    assert_eq!(forward(LineState::Normal, line).state, LineState::Normal);
}

// ==================== PROPERTY TESTS ====================

#[test]
fn test_property_lexemes_tile_non_whitespace() {
    use proptest::prelude::*;

    proptest!(|(line in "[ -~λ∘é\t]{0,80}", depth in 0u32..4)| {
        let scanned = forward(LineState::from_u32(depth), &line);
        assert_well_formed(&line, &scanned);
    });
}

#[test]
fn test_property_forward_is_deterministic() {
    use proptest::prelude::*;

    proptest!(|(line in "[ -~]{0,80}", depth in 0u32..4)| {
        let state = LineState::from_u32(depth);
        prop_assert_eq!(forward(state, &line), forward(state, &line));
    });
}

#[test]
fn test_property_plain_text_keeps_state() {
    use proptest::prelude::*;

    // No braces at all, so no comment can open or close.
    proptest!(|(line in "[a-z0-9 =+*]{0,60}", depth in 0u32..5)| {
        let state = LineState::from_u32(depth);
        prop_assert_eq!(forward(state, &line).state, state);
    });
}

#[test]
fn test_property_inside_comment_everything_is_comment() {
    use proptest::prelude::*;

    proptest!(|(line in "[a-z0-9 ()\\[\\]\"'=]{0,60}")| {
        let scanned = forward(LineState::with_depth(1), &line);
        prop_assert!(scanned.lexemes.iter().all(|l| l.kind == TokenKind::Comment));
        prop_assert_eq!(scanned.state, LineState::with_depth(1));
    });
}

#[test]
fn test_property_identifiers() {
    use proptest::prelude::*;

    proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_']{0,40}")| {
        let scanned = forward(LineState::Normal, &input);
        prop_assert_eq!(scanned.lexemes.len(), 1);
        prop_assert_eq!(scanned.lexemes[0].len, input.len());
    });
}
