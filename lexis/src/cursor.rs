/// A cursor for traversing input text during a scan.
///
/// The offset is a byte offset that only ever moves forward and always
/// sits on a `char` boundary.
#[derive(Debug, Clone)]
pub struct Cursor<'input> {
    input: &'input str,
    current: usize,
}

impl<'input> Cursor<'input> {
    /// Creates a new cursor at the start of the input.
    pub fn new(input: &'input str) -> Self {
        Self { input, current: 0 }
    }

    /// Returns the whole input, independent of the current offset.
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns the current offset in bytes.
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Returns true if the cursor is at the end of the input.
    pub fn is_eof(&self) -> bool {
        self.current >= self.input.len()
    }

    /// Returns the next character without advancing the cursor.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns the remaining input from the current position.
    pub fn remaining(&self) -> &'input str {
        &self.input[self.current..]
    }

    /// Returns the text between `start` and the current offset.
    pub fn slice_from(&self, start: usize) -> &'input str {
        &self.input[start..self.current]
    }

    /// Advances the cursor by one character.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    /// Advances the cursor past `len` bytes of already matched text.
    ///
    /// The step is clamped to the end of the input.
    pub fn advance_by(&mut self, len: usize) -> usize {
        let step = len.min(self.input.len() - self.current);
        debug_assert!(self.input.is_char_boundary(self.current + step));
        self.current += step;
        self.current
    }
}
