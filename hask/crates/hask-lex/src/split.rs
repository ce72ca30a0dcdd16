//! Word splitting for comment and literal spans.
//!
//! Once the scanner knows where a comment or literal begins and ends, the
//! span is cut into maximal runs of whitespace, word characters
//! (letters, digits, `_`) and everything else. Editors highlight and select
//! by these runs, so `-- see foo_bar` yields `--`, `see` and `foo_bar`.

use crate::unicode::{is_white, is_word};

/// The class of a run produced by [`Splitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunClass {
    /// Whitespace.
    Space,
    /// Letters, digits and underscores.
    Word,
    /// Anything else.
    Other,
}

impl RunClass {
    fn of(c: char) -> Self {
        if is_white(c) {
            RunClass::Space
        } else if is_word(c) {
            RunClass::Word
        } else {
            RunClass::Other
        }
    }
}

/// A maximal run of one class, as byte offsets into the split text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Byte offset of the run within the split text.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
    /// What the run is made of.
    pub class: RunClass,
}

/// Iterator over the runs of a text span.
///
/// The runs are in order and cover the input exactly.
///
/// # Example
///
/// ```
/// use hask_lex::split::{RunClass, Splitter};
///
/// let runs: Vec<_> = Splitter::new("{- hi -}").collect();
/// let classes: Vec<_> = runs.iter().map(|run| run.class).collect();
/// assert_eq!(
///     classes,
///     [RunClass::Other, RunClass::Space, RunClass::Word, RunClass::Space, RunClass::Other]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Splitter<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Splitter<'a> {
    /// Creates a splitter over `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }
}

impl Iterator for Splitter<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let rest = &self.text[self.position..];
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let class = RunClass::of(first);
        let len = chars
            .find(|&(_, c)| RunClass::of(c) != class)
            .map_or(rest.len(), |(offset, _)| offset);

        let run = Run {
            start: self.position,
            len,
            class,
        };
        self.position += len;
        Some(run)
    }
}

/// Splits `text` into its runs.
pub fn split(text: &str) -> Splitter<'_> {
    Splitter::new(text)
}
