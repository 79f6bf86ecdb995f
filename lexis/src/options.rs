/// Default type name of coalesced unmatched text.
pub const DEFAULT_UNKNOWN: &str = "UNKNOWN";

/// Default type name of the end-of-input token.
pub const DEFAULT_EOF: &str = "EOF";

/// Controls the terminal token appended after the last real token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Eof {
    /// No terminal token is emitted.
    Disabled,
    /// A terminal token named [`DEFAULT_EOF`] is emitted.
    #[default]
    DefaultName,
    /// A terminal token with the given name is emitted.
    Named(String),
}

impl Eof {
    /// Returns the terminal token name, or `None` when disabled.
    pub fn name(&self) -> Option<&str> {
        match self {
            Eof::Disabled => None,
            Eof::DefaultName => Some(DEFAULT_EOF),
            Eof::Named(name) => Some(name),
        }
    }
}

impl From<bool> for Eof {
    fn from(enabled: bool) -> Self {
        if enabled {
            Eof::DefaultName
        } else {
            Eof::Disabled
        }
    }
}

impl From<&str> for Eof {
    fn from(name: &str) -> Self {
        Eof::Named(name.to_string())
    }
}

impl From<String> for Eof {
    fn from(name: String) -> Self {
        Eof::Named(name)
    }
}

/// Which pattern rule wins when several match the same, longest, length.
///
/// Literal rules are unaffected: among equally long literals the first
/// declared one always wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// The rule declared last wins.
    #[default]
    LastDeclared,
    /// The rule declared first wins.
    FirstDeclared,
}

/// Construction options of a [`Lexer`](crate::Lexer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerOptions {
    pub unknown_type: String,
    pub eof: Eof,
    pub tie_break: TieBreak,
}

impl LexerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the type name used for unmatched text.
    pub fn unknown_type<S: Into<String>>(mut self, unknown_type: S) -> Self {
        self.unknown_type = unknown_type.into();
        self
    }

    /// Configures the terminal token. Accepts `bool`, a name, or [`Eof`].
    pub fn eof<E: Into<Eof>>(mut self, eof: E) -> Self {
        self.eof = eof.into();
        self
    }

    /// Sets the tie policy for equally long pattern matches.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            unknown_type: DEFAULT_UNKNOWN.to_string(),
            eof: Eof::default(),
            tie_break: TieBreak::default(),
        }
    }
}
