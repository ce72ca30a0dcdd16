//! Lexical state carried from the end of one line to the start of the next.

use std::fmt;
use std::num::NonZeroU32;

/// The lexical context at a line boundary.
///
/// Only block comments span lines, so the state is either normal code or
/// the nesting depth of the unclosed block comment. A fresh document starts
/// in [`LineState::Normal`].
///
/// The state has a compact integer encoding for hosts that store it in a
/// plain integer slot: `0` is `Normal`, `n > 0` is `InComment(n)`.
///
/// ```
/// use hask_lex::LineState;
///
/// let state = LineState::from_u32(2);
/// assert_eq!(state.comment_depth(), 2);
/// assert_eq!(state.to_u32(), 2);
/// assert_eq!(LineState::from_u32(0), LineState::Normal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineState {
    /// Outside any block comment.
    #[default]
    Normal,
    /// Inside a block comment nested `depth` deep.
    InComment(NonZeroU32),
}

impl LineState {
    /// Builds the state for a comment depth; depth 0 is `Normal`.
    pub fn with_depth(depth: u32) -> Self {
        match NonZeroU32::new(depth) {
            Some(depth) => LineState::InComment(depth),
            None => LineState::Normal,
        }
    }

    /// Decodes the integer form.
    pub fn from_u32(value: u32) -> Self {
        Self::with_depth(value)
    }

    /// Encodes to the integer form.
    pub fn to_u32(self) -> u32 {
        self.comment_depth()
    }

    /// Block comment nesting depth, 0 when normal.
    pub fn comment_depth(self) -> u32 {
        match self {
            LineState::Normal => 0,
            LineState::InComment(depth) => depth.get(),
        }
    }

    /// Returns true inside a block comment.
    pub fn in_comment(self) -> bool {
        matches!(self, LineState::InComment(_))
    }
}

impl From<u32> for LineState {
    fn from(value: u32) -> Self {
        LineState::from_u32(value)
    }
}

impl From<LineState> for u32 {
    fn from(state: LineState) -> Self {
        state.to_u32()
    }
}

impl fmt::Display for LineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineState::Normal => f.write_str("normal"),
            LineState::InComment(depth) => write!(f, "comment({depth})"),
        }
    }
}
