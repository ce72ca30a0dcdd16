//! Character cursor for traversing a single line of source.
//!
//! This module provides the `Cursor` struct which maintains a byte position
//! while walking the characters of one line. It handles UTF-8 encoding
//! correctly and never moves past the end of the text, so every span taken
//! with [`Cursor::slice_from`] is clamped to the line.

/// A cursor over the characters of one line.
///
/// # Example
///
/// ```
/// use hask_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 42");
///
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The line being traversed.
    source: &'a str,

    /// Current byte position in the line.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use hask_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// assert_eq!(Cursor::new("").current_char(), '\0');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        if self.position >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Returns the byte `offset` bytes ahead of the current position.
    ///
    /// Delimiters the lexer looks ahead for (`-`, `}`) are ASCII, so a byte
    /// comparison is exact even when the text contains multi-byte characters.
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.position + offset).copied()
    }

    /// Returns the byte just before the current position, if any.
    #[inline]
    pub fn prev_byte(&self) -> Option<u8> {
        self.position
            .checked_sub(1)
            .and_then(|pos| self.source.as_bytes().get(pos).copied())
    }

    /// Advances the cursor by one character.
    ///
    /// Does nothing if already at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use hask_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("é!");
    /// cursor.advance();
    /// assert_eq!(cursor.position(), 2);
    /// assert_eq!(cursor.current_char(), '!');
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            return;
        }

        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// Returns the number of characters consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use hask_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abc123");
    /// assert_eq!(cursor.eat_while(|c| c.is_ascii_alphabetic()), 3);
    /// assert_eq!(cursor.current_char(), '1');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Moves the cursor to the end of the line.
    pub fn advance_to_end(&mut self) {
        self.position = self.source.len();
    }

    /// Returns true if the cursor is at the end of the line.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the line.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use hask_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c != ' ');
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full line.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
