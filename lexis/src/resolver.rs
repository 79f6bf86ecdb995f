//! Per-position match resolution.

use crate::compile::{CompiledRule, CompiledRuleTable};
use crate::options::TieBreak;

/// The rule that won at a given offset, with the text it matched.
#[derive(Debug, Clone, Copy)]
pub struct Match<'t, 'input> {
    pub rule: &'t CompiledRule,
    pub text: &'input str,
}

/// Finds the single best match for `input` at `offset`.
///
/// Literal rules are tried first and the first one that matches wins
/// outright; the table lists them longest first. Only when no literal
/// matches are the pattern rules tried, and the longest non-empty pattern
/// match wins, with `tie_break` deciding between equally long ones.
pub fn resolve<'t, 'input>(
    table: &'t CompiledRuleTable,
    input: &'input str,
    offset: usize,
    tie_break: TieBreak,
) -> Option<Match<'t, 'input>> {
    resolve_literal(table.literals(), input, offset)
        .or_else(|| resolve_pattern(table.patterns(), input, offset, tie_break))
}

fn resolve_literal<'t, 'input>(
    literals: &'t [CompiledRule],
    input: &'input str,
    offset: usize,
) -> Option<Match<'t, 'input>> {
    literals.iter().find_map(|rule| {
        let len = rule.matcher().match_at(input, offset)?;
        Some(Match {
            rule,
            text: &input[offset..offset + len],
        })
    })
}

fn resolve_pattern<'t, 'input>(
    patterns: &'t [CompiledRule],
    input: &'input str,
    offset: usize,
    tie_break: TieBreak,
) -> Option<Match<'t, 'input>> {
    let mut best: Option<(&CompiledRule, usize)> = None;

    for rule in patterns {
        let len = match rule.matcher().match_at(input, offset) {
            Some(len) if len > 0 => len,
            _ => continue,
        };

        let replace = match best {
            None => true,
            Some((_, best_len)) => match tie_break {
                TieBreak::LastDeclared => len >= best_len,
                TieBreak::FirstDeclared => len > best_len,
            },
        };
        if replace {
            best = Some((rule, len));
        }
    }

    best.map(|(rule, len)| Match {
        rule,
        text: &input[offset..offset + len],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;

    fn winner(
        grammar: Grammar,
        input: &str,
        offset: usize,
        tie_break: TieBreak,
    ) -> Option<(String, String)> {
        let table = CompiledRuleTable::compile(&grammar).unwrap();
        resolve(&table, input, offset, tie_break)
            .map(|found| (found.rule.kind().to_string(), found.text.to_string()))
    }

    #[test]
    fn test_longest_literal_wins() {
        let grammar = Grammar::new().literal("A", "a").literal("AA", "aa");
        assert_eq!(
            winner(grammar, "aaa", 0, TieBreak::default()),
            Some(("AA".to_string(), "aa".to_string()))
        );
    }

    #[test]
    fn test_literal_beats_longer_pattern() {
        let grammar = Grammar::new().pattern("AS", "a+").literal("A", "a");
        assert_eq!(
            winner(grammar, "aaaa", 0, TieBreak::default()),
            Some(("A".to_string(), "a".to_string()))
        );
    }

    #[test]
    fn test_longest_pattern_wins() {
        let grammar = Grammar::new().pattern("AA", "aa").pattern("AAA", "aaa").pattern("A", "a");
        assert_eq!(
            winner(grammar, "aaaa", 0, TieBreak::default()),
            Some(("AAA".to_string(), "aaa".to_string()))
        );
    }

    #[test]
    fn test_tie_break_last_declared() {
        let grammar = Grammar::new().pattern("INT", "INT").pattern("IDENT", "[A-Z]+");
        assert_eq!(
            winner(grammar, "INT", 0, TieBreak::LastDeclared),
            Some(("IDENT".to_string(), "INT".to_string()))
        );
    }

    #[test]
    fn test_tie_break_first_declared() {
        let grammar = Grammar::new().pattern("INT", "INT").pattern("IDENT", "[A-Z]+");
        assert_eq!(
            winner(grammar, "INT", 0, TieBreak::FirstDeclared),
            Some(("INT".to_string(), "INT".to_string()))
        );
    }

    #[test]
    fn test_empty_pattern_match_is_no_match() {
        let grammar = Grammar::new().pattern("MAYBE", "a*");
        assert_eq!(winner(grammar, "bbb", 0, TieBreak::default()), None);
    }

    #[test]
    fn test_no_match_at_offset() {
        let grammar = Grammar::new().literal("X", "x");
        assert_eq!(winner(grammar, "axb", 0, TieBreak::default()), None);
    }

    #[test]
    fn test_match_from_middle_offset() {
        let grammar = Grammar::new().pattern("NUM", "[0-9]+");
        assert_eq!(
            winner(grammar, "x=42;", 2, TieBreak::default()),
            Some(("NUM".to_string(), "42".to_string()))
        );
    }
}
