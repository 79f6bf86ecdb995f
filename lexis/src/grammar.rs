/// The source of a regular-expression rule before compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexSource {
    /// The expression itself, in `regex` crate syntax.
    pub source: String,
    /// Single-letter flags such as `"i"` or `"ms"`.
    pub flags: String,
}

/// What a rule matches: an exact string or a regular expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Literal(String),
    Regex(RegexSource),
}

impl Pattern {
    /// Creates a literal pattern.
    pub fn literal<S: Into<String>>(text: S) -> Self {
        Pattern::Literal(text.into())
    }

    /// Creates a regular-expression pattern without flags.
    pub fn regex<S: Into<String>>(source: S) -> Self {
        Self::regex_with_flags(source, "")
    }

    /// Creates a regular-expression pattern with the given flags.
    pub fn regex_with_flags<S, F>(source: S, flags: F) -> Self
    where
        S: Into<String>,
        F: Into<String>,
    {
        Pattern::Regex(RegexSource {
            source: source.into(),
            flags: flags.into(),
        })
    }

    /// Returns true if this is a literal pattern.
    pub fn is_literal(&self) -> bool {
        matches!(self, Pattern::Literal(_))
    }
}

/// A single rule of a grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOptions {
    pub pattern: Pattern,
    /// Matches of an ignored rule are consumed but never emitted.
    pub ignore: bool,
}

impl RuleOptions {
    /// Creates a rule whose matches are emitted.
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            ignore: false,
        }
    }

    /// Creates a rule whose matches are consumed silently.
    pub fn ignored(pattern: Pattern) -> Self {
        Self {
            pattern,
            ignore: true,
        }
    }
}

impl From<Pattern> for RuleOptions {
    fn from(pattern: Pattern) -> Self {
        Self::new(pattern)
    }
}

/// An ordered mapping from token type names to rules.
///
/// Declaration order matters: it breaks ties between literals of equal
/// length and between patterns that match the same amount of text.
/// Declaring a name twice replaces the earlier rule but keeps its slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    rules: Vec<(String, RuleOptions)>,
}

impl Grammar {
    /// Creates an empty grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a rule.
    pub fn rule<K, R>(mut self, kind: K, rule: R) -> Self
    where
        K: Into<String>,
        R: Into<RuleOptions>,
    {
        self.insert(kind, rule);
        self
    }

    /// Declares a literal rule.
    pub fn literal<K, S>(self, kind: K, text: S) -> Self
    where
        K: Into<String>,
        S: Into<String>,
    {
        self.rule(kind, Pattern::literal(text))
    }

    /// Declares a regular-expression rule.
    pub fn pattern<K, S>(self, kind: K, source: S) -> Self
    where
        K: Into<String>,
        S: Into<String>,
    {
        self.rule(kind, Pattern::regex(source))
    }

    /// Declares a regular-expression rule with flags.
    pub fn pattern_with_flags<K, S, F>(self, kind: K, source: S, flags: F) -> Self
    where
        K: Into<String>,
        S: Into<String>,
        F: Into<String>,
    {
        self.rule(kind, Pattern::regex_with_flags(source, flags))
    }

    /// Declares a rule whose matches are consumed but not emitted.
    pub fn ignore<K>(self, kind: K, pattern: Pattern) -> Self
    where
        K: Into<String>,
    {
        self.rule(kind, RuleOptions::ignored(pattern))
    }

    /// Inserts a rule in place, replacing any rule with the same name.
    pub fn insert<K, R>(&mut self, kind: K, rule: R)
    where
        K: Into<String>,
        R: Into<RuleOptions>,
    {
        let kind = kind.into();
        let rule = rule.into();

        match self.rules.iter_mut().find(|(name, _)| *name == kind) {
            Some((_, existing)) => *existing = rule,
            None => self.rules.push((kind, rule)),
        }
    }

    /// Returns the rule declared for `kind`.
    pub fn get(&self, kind: &str) -> Option<&RuleOptions> {
        self.rules
            .iter()
            .find(|(name, _)| name == kind)
            .map(|(_, rule)| rule)
    }

    /// Iterates over the rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleOptions)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<K, R> FromIterator<(K, R)> for Grammar
where
    K: Into<String>,
    R: Into<RuleOptions>,
{
    fn from_iter<T: IntoIterator<Item = (K, R)>>(iter: T) -> Self {
        let mut grammar = Grammar::new();
        for (kind, rule) in iter {
            grammar.insert(kind, rule);
        }
        grammar
    }
}
