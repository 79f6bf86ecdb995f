use thiserror::Error;

/// Raised while building a [`Lexer`](crate::Lexer) from a grammar.
///
/// Scanning itself never fails; unmatched input becomes unknown tokens.
/// Every variant names the offending rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A pattern rule was declared with the `g` flag. Matching is always
    /// anchored at the scan position, so global search cannot be honored.
    #[error("pattern rule `{kind}` must not use the global flag `g`")]
    GlobalPattern { kind: String },

    /// A pattern rule carries a flag letter the engine does not know.
    #[error("pattern rule `{kind}` has unsupported flag `{flag}`")]
    UnsupportedFlag { kind: String, flag: char },

    /// The regular expression of a pattern rule failed to compile.
    #[error("pattern rule `{kind}` failed to compile: {message}")]
    InvalidPattern { kind: String, message: String },

    /// A literal rule with empty text would match without consuming input.
    #[error("literal rule `{kind}` must not be empty")]
    EmptyLiteral { kind: String },
}

impl ConfigurationError {
    /// Returns the type name of the rule that caused the error.
    pub fn kind(&self) -> &str {
        match self {
            ConfigurationError::GlobalPattern { kind }
            | ConfigurationError::UnsupportedFlag { kind, .. }
            | ConfigurationError::InvalidPattern { kind, .. }
            | ConfigurationError::EmptyLiteral { kind } => kind,
        }
    }
}
