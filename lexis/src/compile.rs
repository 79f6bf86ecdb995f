//! Rule compilation.
//!
//! A [`Grammar`] is split into literal and pattern rules once, when the
//! lexer is built. Literals are ordered longest first so that a prefix
//! search finds the longest literal. Patterns keep declaration order and
//! are compiled so every search is anchored at the requested offset.

use crate::error::ConfigurationError;
use crate::grammar::{Grammar, Pattern, RegexSource};
use log::debug;
use regex_automata::meta::Regex;
use regex_automata::util::syntax;
use regex_automata::{Anchored, Input};
use std::cmp::Reverse;
use std::sync::Arc;

/// Parsed pattern flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Flags {
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    ignore_whitespace: bool,
}

impl Flags {
    fn parse(kind: &str, flags: &str) -> Result<Self, ConfigurationError> {
        let mut parsed = Flags::default();

        for flag in flags.chars() {
            match flag {
                'g' => {
                    return Err(ConfigurationError::GlobalPattern {
                        kind: kind.to_string(),
                    })
                }
                'i' => parsed.case_insensitive = true,
                'm' => parsed.multi_line = true,
                's' => parsed.dot_matches_new_line = true,
                'x' => parsed.ignore_whitespace = true,
                // Unicode is always on and every search is already sticky.
                'u' | 'y' => {}
                flag => {
                    return Err(ConfigurationError::UnsupportedFlag {
                        kind: kind.to_string(),
                        flag,
                    })
                }
            }
        }

        Ok(parsed)
    }

    fn syntax(self) -> syntax::Config {
        syntax::Config::new()
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
    }
}

/// How a compiled rule recognizes text.
#[derive(Debug, Clone)]
pub enum Matcher {
    Literal(String),
    Pattern(Regex),
}

impl Matcher {
    /// Returns the byte length of the match starting exactly at `offset`.
    ///
    /// A pattern may report a zero-length match; callers decide what to do
    /// with it.
    pub fn match_at(&self, input: &str, offset: usize) -> Option<usize> {
        match self {
            Matcher::Literal(text) => input
                .get(offset..)
                .is_some_and(|rest| rest.starts_with(text.as_str()))
                .then_some(text.len()),
            Matcher::Pattern(regex) => {
                let search = Input::new(input).range(offset..).anchored(Anchored::Yes);
                regex.find(search).map(|found| found.end() - offset)
            }
        }
    }
}

/// A rule ready for matching.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    kind: Arc<str>,
    ignore: bool,
    matcher: Matcher,
}

impl CompiledRule {
    /// The token type name.
    pub fn kind(&self) -> &Arc<str> {
        &self.kind
    }

    pub fn ignore(&self) -> bool {
        self.ignore
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    fn literal_len(&self) -> usize {
        match &self.matcher {
            Matcher::Literal(text) => text.len(),
            Matcher::Pattern(_) => 0,
        }
    }
}

/// The immutable matching tables derived from a grammar.
#[derive(Debug, Clone)]
pub struct CompiledRuleTable {
    literals: Vec<CompiledRule>,
    patterns: Vec<CompiledRule>,
}

impl CompiledRuleTable {
    /// Compiles `grammar` into literal and pattern tables.
    pub fn compile(grammar: &Grammar) -> Result<Self, ConfigurationError> {
        let mut literals = Vec::new();
        let mut patterns = Vec::new();

        for (kind, rule) in grammar.iter() {
            let matcher = match &rule.pattern {
                Pattern::Literal(text) => {
                    if text.is_empty() {
                        return Err(ConfigurationError::EmptyLiteral {
                            kind: kind.to_string(),
                        });
                    }
                    Matcher::Literal(text.clone())
                }
                Pattern::Regex(source) => Matcher::Pattern(compile_regex(kind, source)?),
            };

            let compiled = CompiledRule {
                kind: Arc::from(kind),
                ignore: rule.ignore,
                matcher,
            };

            if rule.pattern.is_literal() {
                literals.push(compiled);
            } else {
                patterns.push(compiled);
            }
        }

        // Stable, so equally long literals keep declaration order.
        literals.sort_by_key(|rule| Reverse(rule.literal_len()));

        debug!(
            "compiled {} literal rules and {} pattern rules",
            literals.len(),
            patterns.len()
        );

        Ok(Self { literals, patterns })
    }

    /// Literal rules, longest first.
    pub fn literals(&self) -> &[CompiledRule] {
        &self.literals
    }

    /// Pattern rules, in declaration order.
    pub fn patterns(&self) -> &[CompiledRule] {
        &self.patterns
    }
}

fn compile_regex(kind: &str, source: &RegexSource) -> Result<Regex, ConfigurationError> {
    let flags = Flags::parse(kind, &source.flags)?;

    Regex::builder()
        .syntax(flags.syntax())
        .build(&source.source)
        .map_err(|err| ConfigurationError::InvalidPattern {
            kind: kind.to_string(),
            // The build error alone only says which pattern failed to parse.
            message: err
                .syntax_error()
                .map_or_else(|| err.to_string(), ToString::to_string),
        })
}
