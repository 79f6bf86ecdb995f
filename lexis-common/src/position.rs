/// Represents where a token starts in the source text.
///
/// Lines are 1-indexed and columns are 0-indexed, so the very first
/// character of any input sits at line 1, column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    /// Byte offset from the start of the input
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (0-indexed, counted in characters)
    pub column: usize,
}

impl Position {
    /// Creates a new position at the start of the input.
    pub const fn new() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    /// Creates a position with the given values.
    pub const fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

/// Running line/column accumulator.
///
/// Text must be fed in the order it was consumed from the input. Every
/// call reports where the fed text *starts* and then moves past it, so a
/// line break inside one piece of text only affects the next piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTracker {
    position: Position,
}

impl LineTracker {
    /// Creates a tracker positioned at the start of the input.
    pub const fn new() -> Self {
        Self {
            position: Position::new(),
        }
    }

    /// Returns the position the next piece of text will start at.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Moves past `text`, returning the position where it started.
    pub fn advance(&mut self, text: &str) -> Position {
        let start = self.position;

        for ch in text.chars() {
            if ch == '\n' {
                self.position.line += 1;
                self.position.column = 0;
            } else {
                self.position.column += 1;
            }
        }
        self.position.offset += text.len();

        start
    }
}
