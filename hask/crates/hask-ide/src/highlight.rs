//! Highlighting - Lexemes mapped to what an editor paints.
//!
//! Editors colour by a small fixed palette and only need to know which
//! tokens are delimiters, so that moving the caret next to one asks for its
//! partner. [`TokenInfo`] carries exactly that. Columns use the host
//! convention: `start` and an inclusive `end`, both shifted by the column at
//! which the scanned text begins.

use hask_lex::{forward, Lexeme, LineState, TokenKind};

/// Colour class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenColor {
    /// Plain text
    Text,
    /// Reserved word or operator
    Keyword,
    /// Comment
    Comment,
    /// String or character literal
    String,
}

impl From<TokenKind> for TokenColor {
    fn from(kind: TokenKind) -> Self {
        if kind.is_keyword() {
            TokenColor::Keyword
        } else if kind.is_comment() {
            TokenColor::Comment
        } else if kind.is_string() {
            TokenColor::String
        } else {
            TokenColor::Text
        }
    }
}

/// Structural role of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Anything that is not a bracket
    Unknown,
    /// One of `()[]{}`
    Delimiter,
}

/// Editor action a token triggers when the caret reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenTrigger {
    /// No action
    None,
    /// Highlight the matching bracket
    MatchBraces,
}

/// One token as presented to an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenInfo {
    /// First column
    pub start: usize,
    /// Last column (inclusive)
    pub end: usize,
    /// Colour class
    pub color: TokenColor,
    /// Structural role
    pub token_type: TokenType,
    /// Caret action
    pub trigger: TokenTrigger,
}

impl TokenInfo {
    /// Maps a lexeme of text that begins at column `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hask_ide::highlight::{TokenColor, TokenInfo, TokenTrigger};
    /// use hask_lex::{Lexeme, TokenKind};
    ///
    /// let info = TokenInfo::from_lexeme(&Lexeme::new(2, 5, TokenKind::Keyword), 4);
    /// assert_eq!((info.start, info.end), (6, 10));
    /// assert_eq!(info.color, TokenColor::Keyword);
    /// assert_eq!(info.trigger, TokenTrigger::None);
    /// ```
    pub fn from_lexeme(lexeme: &Lexeme, offset: usize) -> Self {
        let bracket = lexeme.kind.is_bracket();
        let start = offset + lexeme.start;
        Self {
            start,
            // Inclusive; an empty lexeme ends where it starts.
            end: start + lexeme.len.saturating_sub(1),
            color: lexeme.kind.into(),
            token_type: if bracket {
                TokenType::Delimiter
            } else {
                TokenType::Unknown
            },
            trigger: if bracket {
                TokenTrigger::MatchBraces
            } else {
                TokenTrigger::None
            },
        }
    }
}

/// Pull-style scanner over one line, handing out one [`TokenInfo`] at a
/// time.
///
/// The line is lexed lazily on the first call to `next`. `text` is the part
/// of the line from column `offset` onward.
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    text: &'a str,
    offset: usize,
    incoming: LineState,
    outgoing: Option<LineState>,
    lexemes: Vec<Lexeme>,
    index: usize,
}

impl<'a> LineScanner<'a> {
    /// Creates a scanner over `text`, which starts at column `offset` and
    /// is entered in state `incoming`.
    pub fn new(text: &'a str, offset: usize, incoming: LineState) -> Self {
        Self {
            text,
            offset,
            incoming,
            outgoing: None,
            lexemes: Vec::new(),
            index: 0,
        }
    }

    /// State at the end of the text.
    pub fn outgoing_state(&mut self) -> LineState {
        self.ensure_scanned()
    }

    fn ensure_scanned(&mut self) -> LineState {
        match self.outgoing {
            Some(state) => state,
            None => {
                let scanned = forward(self.incoming, self.text);
                self.lexemes = scanned.lexemes;
                self.outgoing = Some(scanned.state);
                scanned.state
            }
        }
    }
}

impl Iterator for LineScanner<'_> {
    type Item = TokenInfo;

    fn next(&mut self) -> Option<TokenInfo> {
        self.ensure_scanned();
        let lexeme = self.lexemes.get(self.index)?;
        self.index += 1;
        Some(TokenInfo::from_lexeme(lexeme, self.offset))
    }
}

/// Maps every lexeme of `text` (starting at column `offset`) to a
/// [`TokenInfo`], and returns the state at the end of the text.
pub fn highlight_line(state: LineState, text: &str, offset: usize) -> (Vec<TokenInfo>, LineState) {
    let scanned = forward(state, text);
    let infos = scanned
        .lexemes
        .iter()
        .map(|lexeme| TokenInfo::from_lexeme(lexeme, offset))
        .collect();
    (infos, scanned.state)
}
