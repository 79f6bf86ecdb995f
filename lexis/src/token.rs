use crate::scan::Fragment;
use lexis_common::Position;
use std::fmt;
use std::sync::Arc;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: Arc<str>,
    value: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    position: Position,
}

impl Token {
    pub fn new<K, V>(kind: K, value: V, position: Position) -> Self
    where
        K: Into<Arc<str>>,
        V: Into<String>,
    {
        Self {
            kind: kind.into(),
            value: value.into(),
            position,
        }
    }

    pub(crate) fn from_fragment(fragment: Fragment<'_>, position: Position) -> Self {
        Self {
            kind: fragment.kind,
            value: fragment.value.to_string(),
            position,
        }
    }

    /// The token type name.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The matched text. Empty only for the end-of-input token.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Where the token starts.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} at {}:{}",
            self.kind, self.value, self.position.line, self.position.column
        )
    }
}

/// The complete output of [`Lexer::analyze`](crate::Lexer::analyze).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnalyzeResult {
    pub values: Vec<Token>,
}

/// The output of [`Lexer::lex`](crate::Lexer::lex), which stops at the
/// first character no rule matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LexResult {
    /// Tokens matched before scanning stopped.
    pub tokens: Vec<Token>,
    /// True when the whole input was consumed.
    pub done: bool,
    /// Offset where scanning stopped.
    pub offset: usize,
}
