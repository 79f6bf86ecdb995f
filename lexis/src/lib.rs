//! A declarative, rule-driven lexer.
//!
//! A [`Grammar`] maps token type names to literal strings or regular
//! expressions. [`Lexer`] compiles it once and then scans any number of
//! inputs, always picking the longest match at the current position:
//! literals first (longest literal wins), then patterns (longest match
//! wins). Unmatched characters are folded into unknown tokens, and an
//! end-of-input token closes the sequence.

pub mod annotate;
pub mod compile;
pub mod cursor;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod options;
pub mod resolver;
pub mod scan;
pub mod token;

pub use annotate::{annotate, Annotate};
pub use compile::{CompiledRule, CompiledRuleTable, Matcher};
pub use cursor::Cursor;
pub use error::ConfigurationError;
pub use grammar::{Grammar, Pattern, RegexSource, RuleOptions};
pub use lexer::{Lexer, Tokens};
pub use lexis_common::{LineTracker, Position};
pub use options::{Eof, LexerOptions, TieBreak, DEFAULT_EOF, DEFAULT_UNKNOWN};
pub use resolver::{resolve, Match};
pub use scan::{Fragment, Fragments, Origin};
pub use token::{AnalyzeResult, LexResult, Token};
