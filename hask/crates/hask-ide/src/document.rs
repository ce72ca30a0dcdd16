//! Document - Line texts plus the cached state at the end of each line.
//!
//! An editor never re-lexes a whole file after a keystroke. It keeps the
//! outgoing [`LineState`] of every line, re-lexes from the first edited
//! line, and stops as soon as a line below the edit ends in the same state
//! it had before. Everything past that line is unaffected by the edit.
//!
//! # Examples
//!
//! ```
//! use hask_ide::Document;
//! use hask_lex::LineState;
//!
//! let mut doc = Document::new("a = 1\nb = 2\nc = 3");
//! assert_eq!(doc.outgoing_state(2).unwrap(), LineState::Normal);
//!
//! // Opening a comment on line 0 changes every line after it.
//! let report = doc.set_line(0, "a = 1 {-").unwrap();
//! assert_eq!(report.rescanned, 0..3);
//! assert!(!report.fixed_point);
//! assert_eq!(doc.outgoing_state(2).unwrap(), LineState::with_depth(1));
//! ```

use std::ops::Range;

use hask_lex::{forward, Lexeme, LineState, ScannedLine};
use tracing::debug;

use crate::error::{IdeError, Result};

/// What a call to [`Document::replace_lines`] re-lexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelexReport {
    /// Line indices (after the edit) that were lexed again.
    pub rescanned: Range<usize>,
    /// True when the states settled; false when re-lexing ran off the end
    /// of the document with states still changing.
    pub fixed_point: bool,
}

impl RelexReport {
    /// Number of lines lexed again.
    pub fn line_count(&self) -> usize {
        self.rescanned.len()
    }
}

/// A source text held as lines, with each line's outgoing state cached.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<String>,
    states: Vec<LineState>,
}

impl Document {
    /// Creates a document from `text`, lexing every line once.
    ///
    /// Lines are split on `\n`; a `\r` before the `\n` is dropped. The
    /// empty text is one empty line.
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();

        let mut state = LineState::Normal;
        let states = lines
            .iter()
            .map(|line| {
                state = forward(state, line).state;
                state
            })
            .collect();

        Self { lines, states }
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of line `index`, if it exists.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Iterates over the line texts.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// The whole text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// State at the start of line `index`.
    pub fn incoming_state(&self, index: usize) -> Result<LineState> {
        self.check_line(index)?;
        Ok(self.incoming_unchecked(index))
    }

    /// Cached state at the end of line `index`.
    pub fn outgoing_state(&self, index: usize) -> Result<LineState> {
        self.check_line(index)?;
        Ok(self.states[index])
    }

    /// State at the end of the last line; `Normal` for an empty document.
    pub fn final_state(&self) -> LineState {
        self.states.last().copied().unwrap_or_default()
    }

    /// Lexes line `index` from its cached incoming state.
    pub fn scan(&self, index: usize) -> Result<ScannedLine> {
        self.check_line(index)?;
        Ok(forward(self.incoming_unchecked(index), &self.lines[index]))
    }

    /// Lexes every line from its cached incoming state, in order.
    pub fn scan_all(&self) -> impl Iterator<Item = ScannedLine> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(index, line)| forward(self.incoming_unchecked(index), line))
    }

    /// Lexemes of line `index`.
    pub fn lexemes(&self, index: usize) -> Result<Vec<Lexeme>> {
        self.scan(index).map(|scanned| scanned.lexemes)
    }

    /// Replaces `removed` lines starting at `start` with `inserted`, then
    /// re-lexes from `start` until the states settle.
    ///
    /// `start` may equal the line count to append. The inserted lines are
    /// always lexed. Re-lexing stops at the end of the inserted block if it
    /// ends in the state the removed block ended in, otherwise at the first
    /// later line whose new outgoing state equals its cached one.
    pub fn replace_lines<I, S>(&mut self, start: usize, removed: usize, inserted: I) -> Result<RelexReport>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let line_count = self.lines.len();
        let end = start
            .checked_add(removed)
            .filter(|&end| end <= line_count)
            .ok_or(IdeError::InvalidEdit {
                start,
                removed,
                line_count,
            })?;

        // State that fed the first line after the removed block.
        let boundary = match end {
            0 => LineState::Normal,
            _ => self.states[end - 1],
        };

        let inserted: Vec<String> = inserted.into_iter().map(Into::into).collect();
        let inserted_len = inserted.len();
        self.lines.splice(start..end, inserted);
        self.states.splice(
            start..end,
            std::iter::repeat(LineState::Normal).take(inserted_len),
        );

        let report = self.relex_from(start, start + inserted_len, boundary);
        debug!(
            start,
            removed,
            inserted = inserted_len,
            rescanned = report.line_count(),
            fixed_point = report.fixed_point,
            "relexed document"
        );
        Ok(report)
    }

    /// Replaces the text of line `index`.
    pub fn set_line(&mut self, index: usize, text: impl Into<String>) -> Result<RelexReport> {
        self.check_line(index)?;
        self.replace_lines(index, 1, [text.into()])
    }

    /// Inserts `lines` before line `index`.
    pub fn insert_lines<I, S>(&mut self, index: usize, lines: I) -> Result<RelexReport>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replace_lines(index, 0, lines)
    }

    /// Removes `count` lines starting at `index`.
    pub fn remove_lines(&mut self, index: usize, count: usize) -> Result<RelexReport> {
        self.replace_lines(index, count, std::iter::empty::<String>())
    }

    /// Re-lexes the inserted block `start..settled`, then the lines after
    /// it until one ends in its cached state.
    fn relex_from(&mut self, start: usize, settled: usize, boundary: LineState) -> RelexReport {
        let mut state = self.incoming_unchecked(start);
        for index in start..settled {
            state = forward(state, &self.lines[index]).state;
            self.states[index] = state;
        }
        if state == boundary {
            return RelexReport {
                rescanned: start..settled,
                fixed_point: true,
            };
        }

        for index in settled..self.lines.len() {
            let outgoing = forward(state, &self.lines[index]).state;
            let previous = std::mem::replace(&mut self.states[index], outgoing);
            if outgoing == previous {
                return RelexReport {
                    rescanned: start..index + 1,
                    fixed_point: true,
                };
            }
            state = outgoing;
        }

        RelexReport {
            rescanned: start..self.lines.len(),
            fixed_point: false,
        }
    }

    fn incoming_unchecked(&self, index: usize) -> LineState {
        match index {
            0 => LineState::Normal,
            _ => self.states[index - 1],
        }
    }

    fn check_line(&self, line: usize) -> Result<()> {
        if line < self.lines.len() {
            Ok(())
        } else {
            Err(IdeError::LineOutOfRange {
                line,
                line_count: self.lines.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hask_lex::TokenKind;

    fn states(doc: &Document) -> Vec<u32> {
        (0..doc.line_count())
            .map(|i| doc.outgoing_state(i).unwrap().to_u32())
            .collect()
    }

    /// States computed from scratch, for comparison with the cache.
    fn fresh_states(doc: &Document) -> Vec<u32> {
        if doc.is_empty() {
            return Vec::new();
        }
        states(&Document::new(&doc.text()))
    }

    #[test]
    fn test_new_splits_lines() {
        let doc = Document::new("a\r\nb\n\nc");
        assert_eq!(doc.lines().collect::<Vec<_>>(), ["a", "b", "", "c"]);
        assert_eq!(Document::new("").line_count(), 1);
    }

    #[test]
    fn test_new_threads_states() {
        let doc = Document::new("x {- a\n{- b\n-} c\n-} d");
        assert_eq!(states(&doc), [1, 2, 1, 0]);
        assert_eq!(doc.incoming_state(0).unwrap(), LineState::Normal);
        assert_eq!(doc.incoming_state(2).unwrap(), LineState::with_depth(2));
        assert_eq!(doc.final_state(), LineState::Normal);
    }

    #[test]
    fn test_lexemes_use_incoming_state() {
        let doc = Document::new("{- open\nstill comment -} x");
        let line = doc.line(1).unwrap();
        let lexemes = doc.lexemes(1).unwrap();
        let last = lexemes.last().unwrap();
        assert_eq!(last.text(line), "x");
        assert_eq!(last.kind, TokenKind::Unknown);
        assert!(lexemes[..lexemes.len() - 1].iter().all(|l| l.kind.is_comment()));
    }

    #[test]
    fn test_scan_all_matches_per_line_scan() {
        let doc = Document::new("x {- a\n{- b -} (\n-} y )\n");
        let all: Vec<_> = doc.scan_all().collect();
        assert_eq!(all.len(), doc.line_count());
        for (index, scanned) in all.iter().enumerate() {
            assert_eq!(*scanned, doc.scan(index).unwrap());
            assert_eq!(scanned.state, doc.outgoing_state(index).unwrap());
        }
    }

    #[test]
    fn test_out_of_range() {
        let doc = Document::new("a\nb");
        assert_eq!(
            doc.lexemes(2),
            Err(IdeError::LineOutOfRange {
                line: 2,
                line_count: 2
            })
        );
        assert!(doc.incoming_state(5).is_err());
        assert!(doc.outgoing_state(2).is_err());
    }

    #[test]
    fn test_invalid_edit() {
        let mut doc = Document::new("a\nb");
        assert_eq!(
            doc.replace_lines(1, 2, ["x"]),
            Err(IdeError::InvalidEdit {
                start: 1,
                removed: 2,
                line_count: 2
            })
        );
        assert!(doc.replace_lines(3, 0, ["x"]).is_err());
        assert!(doc.replace_lines(usize::MAX, 2, ["x"]).is_err());
        assert!(doc.set_line(2, "x").is_err());
        assert_eq!(doc.text(), "a\nb");
    }

    #[test]
    fn test_edit_without_state_change_stops_immediately() {
        let mut doc = Document::new("a = 1\nb = 2\nc = 3\nd = 4");
        let report = doc.set_line(1, "b = 20").unwrap();
        assert_eq!(report.rescanned, 1..2);
        assert!(report.fixed_point);
    }

    #[test]
    fn test_closing_comment_relexes_until_settled() {
        let mut doc = Document::new("a {-\nb\nc -}\nd\ne");
        assert_eq!(states(&doc), [1, 1, 0, 0, 0]);

        let report = doc.set_line(0, "a").unwrap();
        assert_eq!(states(&doc), [0, 0, 0, 0, 0]);
        // Line 2 had state 0 before and after; it stops the relex.
        assert_eq!(report.rescanned, 0..3);
        assert!(report.fixed_point);
    }

    #[test]
    fn test_insert_lines_in_comment() {
        let mut doc = Document::new("x\n{- a\nb -}\ny");
        let report = doc.insert_lines(2, ["{- inner", "-}"]).unwrap();
        assert_eq!(doc.text(), "x\n{- a\n{- inner\n-}\nb -}\ny");
        assert_eq!(states(&doc), [0, 1, 2, 1, 0, 0]);
        // The inserted block ends in the same state the old line 1 did.
        assert_eq!(report.rescanned, 2..4);
        assert!(report.fixed_point);
    }

    #[test]
    fn test_remove_lines() {
        let mut doc = Document::new("a {-\nb -}\nc\nd");
        let report = doc.remove_lines(1, 1).unwrap();
        assert_eq!(doc.text(), "a {-\nc\nd");
        assert_eq!(states(&doc), [1, 1, 1]);
        assert_eq!(report.rescanned, 1..3);
        assert!(!report.fixed_point);
    }

    #[test]
    fn test_append_at_end() {
        let mut doc = Document::new("a");
        let report = doc.insert_lines(1, ["{- b"]).unwrap();
        assert_eq!(report.rescanned, 1..2);
        assert!(!report.fixed_point);
        assert_eq!(doc.final_state(), LineState::with_depth(1));
    }

    #[test]
    fn test_remove_everything() {
        let mut doc = Document::new("a\nb");
        let report = doc.remove_lines(0, 2).unwrap();
        assert!(doc.is_empty());
        assert_eq!(report.rescanned, 0..0);
        assert!(report.fixed_point);
        assert_eq!(doc.final_state(), LineState::Normal);
    }

    #[test]
    fn test_cache_matches_fresh_document() {
        let mut doc = Document::new("module M where\n{- doc\n-}\nf = 1");
        doc.set_line(2, "still open").unwrap();
        assert_eq!(states(&doc), fresh_states(&doc));
        doc.insert_lines(0, ["{-", "{-"]).unwrap();
        assert_eq!(states(&doc), fresh_states(&doc));
        doc.remove_lines(1, 3).unwrap();
        assert_eq!(states(&doc), fresh_states(&doc));
    }

    #[test]
    fn test_property_cache_matches_fresh_document() {
        use proptest::prelude::*;

        let line = "[a-z {}\\-\"]{0,12}";
        proptest!(|(
            initial in prop::collection::vec(line, 1..8),
            start_seed in 0usize..8,
            removed_seed in 0usize..8,
            inserted in prop::collection::vec(line, 0..4),
        )| {
            let mut doc = Document::new(&initial.join("\n"));
            let start = start_seed % (doc.line_count() + 1);
            let removed = removed_seed % (doc.line_count() - start + 1);
            doc.replace_lines(start, removed, inserted).unwrap();
            prop_assert_eq!(states(&doc), fresh_states(&doc));
        });
    }
}
