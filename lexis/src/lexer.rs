use crate::annotate::{annotate, Annotate};
use crate::compile::CompiledRuleTable;
use crate::error::ConfigurationError;
use crate::grammar::Grammar;
use crate::options::LexerOptions;
use crate::scan::{Fragments, ScanSettings};
use crate::token::{AnalyzeResult, LexResult};
use std::sync::Arc;

/// Positioned tokens of one input, produced lazily.
pub type Tokens<'l, 'input> = Annotate<Fragments<'l, 'input>>;

/// A lexer built from a declarative grammar.
///
/// The grammar is compiled once in the constructor; scanning only reads
/// the compiled tables, so a `Lexer` can be shared across threads.
///
/// ```
/// use lexis::{Grammar, Lexer, Pattern};
///
/// let lexer = Lexer::new(
///     Grammar::new()
///         .literal("LET", "let")
///         .pattern("NUMBER", r"\d+")
///         .pattern_with_flags("IDENT", "[a-z]+", "i")
///         .literal("ASSIGN", "=")
///         .literal("SEMICOLON", ";")
///         .ignore("WS", Pattern::regex(r"\s+")),
/// )
/// .unwrap();
///
/// let kinds: Vec<_> = lexer
///     .analyze("let sum = 100;")
///     .values
///     .iter()
///     .map(|token| token.kind().to_string())
///     .collect();
/// assert_eq!(kinds, ["LET", "IDENT", "ASSIGN", "NUMBER", "SEMICOLON", "EOF"]);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    table: CompiledRuleTable,
    settings: ScanSettings,
}

impl Lexer {
    /// Creates a lexer with default options.
    pub fn new(grammar: Grammar) -> Result<Self, ConfigurationError> {
        Self::with_options(grammar, LexerOptions::default())
    }

    /// Creates a lexer with the given options.
    ///
    /// Fails if any rule is malformed, most notably a pattern declared
    /// with the global flag.
    pub fn with_options(
        grammar: Grammar,
        options: LexerOptions,
    ) -> Result<Self, ConfigurationError> {
        let table = CompiledRuleTable::compile(&grammar)?;
        let settings = ScanSettings {
            unknown: Arc::from(options.unknown_type),
            eof: options.eof.name().map(Arc::from),
            tie_break: options.tie_break,
        };

        Ok(Self { table, settings })
    }

    /// Returns the compiled rule tables.
    pub fn rules(&self) -> &CompiledRuleTable {
        &self.table
    }

    /// Scans `input` into raw fragments, without positions.
    pub fn fragments<'l, 'input>(&'l self, input: &'input str) -> Fragments<'l, 'input> {
        Fragments::new(&self.table, &self.settings, input)
    }

    /// Scans `input` lazily into positioned tokens.
    pub fn tokens<'l, 'input>(&'l self, input: &'input str) -> Tokens<'l, 'input> {
        annotate(self.fragments(input))
    }

    /// Analyzes the whole input.
    ///
    /// Never fails: unmatched text becomes unknown tokens and, unless
    /// disabled, an empty end-of-input token closes the sequence.
    pub fn analyze(&self, input: &str) -> AnalyzeResult {
        AnalyzeResult {
            values: self.tokens(input).collect(),
        }
    }

    /// Tokenizes until the first character no rule matches.
    ///
    /// Neither unknown nor end-of-input tokens are produced; `done` tells
    /// whether the whole input was consumed.
    pub fn lex(&self, input: &str) -> LexResult {
        let mut stopped_at = None;

        let tokens = annotate(
            self.fragments(input)
                .take_while(|fragment| {
                    if fragment.is_unknown() {
                        stopped_at = Some(fragment.offset);
                    }
                    stopped_at.is_none()
                })
                .filter(|fragment| !fragment.is_eof()),
        )
        .collect();

        LexResult {
            tokens,
            done: stopped_at.is_none(),
            offset: stopped_at.unwrap_or(input.len()),
        }
    }
}
