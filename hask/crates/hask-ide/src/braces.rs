//! Brace matching across lines.
//!
//! Brackets inside comments and literals are never bracket lexemes, so
//! walking the lexeme stream skips them for free. Only brackets of the same
//! family are counted: in `( [ )` the `)` matches the `(`.

use hask_lex::bracket::{delimiter, is_opening, Delimiter};
use hask_lex::{Lexeme, TokenKind};

use crate::document::Document;
use crate::error::Result;

/// A byte position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line index
    pub line: usize,
    /// Byte offset within the line
    pub offset: usize,
}

impl Position {
    /// Creates a position.
    pub const fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }
}

/// An opening bracket and the closing bracket that matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BracketPair {
    /// Delimiter family
    pub delimiter: Delimiter,
    /// Position of the opener
    pub open: Position,
    /// Position of the closer
    pub close: Position,
}

/// A bracket with no partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unmatched {
    /// The bracket kind
    pub kind: TokenKind,
    /// Where it is
    pub position: Position,
}

/// Every bracket of a document, paired where possible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketReport {
    /// Matched pairs, ordered by the position of the closer
    pub pairs: Vec<BracketPair>,
    /// Brackets with no partner, in document order
    pub unmatched: Vec<Unmatched>,
}

impl BracketReport {
    /// Returns true if every bracket has a partner.
    pub fn is_balanced(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Finds the partner of the bracket at `position`.
///
/// Returns `Ok(None)` if no bracket lexeme covers `position` or the bracket
/// has no partner. Openers search forward, closers backward.
///
/// # Examples
///
/// ```
/// use hask_ide::braces::{find_match, Position};
/// use hask_ide::Document;
///
/// let doc = Document::new("f (x, {- ) -} [y]\n  )");
/// let partner = find_match(&doc, Position::new(0, 2)).unwrap();
/// assert_eq!(partner, Some(Position::new(1, 2)));
/// ```
pub fn find_match(document: &Document, position: Position) -> Result<Option<Position>> {
    let lexemes = document.lexemes(position.line)?;
    let Some(index) = lexemes.iter().position(|l| l.contains(position.offset)) else {
        return Ok(None);
    };
    let origin = lexemes[index];
    let Some(family) = delimiter(origin.kind) else {
        return Ok(None);
    };

    let searching_forward = is_opening(origin.kind);
    let mut depth = 0usize;
    let mut step = |lexeme: &Lexeme| -> bool {
        if delimiter(lexeme.kind) != Some(family) {
            return false;
        }
        if is_opening(lexeme.kind) == searching_forward {
            depth += 1;
            false
        } else if depth == 0 {
            true
        } else {
            depth -= 1;
            false
        }
    };

    if searching_forward {
        for lexeme in &lexemes[index + 1..] {
            if step(lexeme) {
                return Ok(Some(Position::new(position.line, lexeme.start)));
            }
        }
        for line in position.line + 1..document.line_count() {
            for lexeme in document.lexemes(line)? {
                if step(&lexeme) {
                    return Ok(Some(Position::new(line, lexeme.start)));
                }
            }
        }
    } else {
        for lexeme in lexemes[..index].iter().rev() {
            if step(lexeme) {
                return Ok(Some(Position::new(position.line, lexeme.start)));
            }
        }
        for line in (0..position.line).rev() {
            for lexeme in document.lexemes(line)?.iter().rev() {
                if step(lexeme) {
                    return Ok(Some(Position::new(line, lexeme.start)));
                }
            }
        }
    }

    Ok(None)
}

/// Pairs up every bracket in `document`.
///
/// Each delimiter family keeps its own stack, so the pairs agree with
/// [`find_match`].
pub fn bracket_pairs(document: &Document) -> BracketReport {
    let mut report = BracketReport::default();
    let mut stacks: [Vec<Position>; 3] = Default::default();

    for (line, scanned) in document.scan_all().enumerate() {
        for lexeme in scanned.lexemes {
            let Some(family) = delimiter(lexeme.kind) else {
                continue;
            };
            let position = Position::new(line, lexeme.start);
            let stack = &mut stacks[family_index(family)];

            if is_opening(lexeme.kind) {
                stack.push(position);
            } else if let Some(open) = stack.pop() {
                report.pairs.push(BracketPair {
                    delimiter: family,
                    open,
                    close: position,
                });
            } else {
                report.unmatched.push(Unmatched {
                    kind: lexeme.kind,
                    position,
                });
            }
        }
    }

    for (family, stack) in [Delimiter::Paren, Delimiter::Square, Delimiter::Curly]
        .into_iter()
        .zip(stacks)
    {
        let kind = opener_kind(family);
        report
            .unmatched
            .extend(stack.into_iter().map(|position| Unmatched { kind, position }));
    }
    report.unmatched.sort_by_key(|u| u.position);

    report
}

fn family_index(family: Delimiter) -> usize {
    match family {
        Delimiter::Paren => 0,
        Delimiter::Square => 1,
        Delimiter::Curly => 2,
    }
}

fn opener_kind(family: Delimiter) -> TokenKind {
    match family {
        Delimiter::Paren => TokenKind::OpenParen,
        Delimiter::Square => TokenKind::OpenSquare,
        Delimiter::Curly => TokenKind::OpenCurly,
    }
}
