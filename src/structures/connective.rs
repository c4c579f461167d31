/*!
Connective specifications and the table a parser is generated from.

A [ConnectiveSpec] records everything the parser and the formula pretty-printer
need to know about one connective symbol: its arity, its binding strength
relative to other connectives (`precedence`), how same-precedence applications
nest (`associativity`), and whether it is written before its single argument
(prefix, e.g. `~p`) or between its two arguments (infix, e.g. `p & q`).

A [ConnectiveTable] is simply an ordered collection of these, built once per
[logic definition](crate::logic::LogicDefinition) and shared read-only from then on.
*/

use std::collections::HashMap;

/// How same-precedence applications of an infix connective nest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
    /// The connective never repeats at the same precedence level without parentheses
    /// (e.g. a prefix connective has no associativity to speak of).
    None,
}

/// Whether a connective is written before its argument or between its arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fixity {
    /// `symbol operand`, arity 1.
    Prefix,
    /// `left symbol right`, arity 2.
    Infix,
}

/// A single connective's grammar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectiveSpec {
    pub symbol: String,
    pub arity: usize,
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
}

impl ConnectiveSpec {
    pub fn prefix(symbol: impl Into<String>, precedence: u8) -> Self {
        ConnectiveSpec {
            symbol: symbol.into(),
            arity: 1,
            precedence,
            associativity: Associativity::None,
            fixity: Fixity::Prefix,
        }
    }

    pub fn infix(symbol: impl Into<String>, precedence: u8, associativity: Associativity) -> Self {
        ConnectiveSpec {
            symbol: symbol.into(),
            arity: 2,
            precedence,
            associativity,
            fixity: Fixity::Infix,
        }
    }
}

/// The connective table of a logic definition.
///
/// Ordered by declaration (which the parser additionally indexes by precedence);
/// within equal precedence, declaration order breaks ties just as it does for
/// rule scheduling in the tableau engine.
#[derive(Clone, Debug, Default)]
pub struct ConnectiveTable {
    specs: Vec<ConnectiveSpec>,
    by_symbol: HashMap<String, usize>,
}

impl ConnectiveTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a connective to the table. Declaration order is preserved for tokenising
    /// (longest-match is handled separately, in [Self::longest_matching_symbol]).
    pub fn push(&mut self, spec: ConnectiveSpec) -> &mut Self {
        self.by_symbol.insert(spec.symbol.clone(), self.specs.len());
        self.specs.push(spec);
        self
    }

    /// The specification for `symbol`, if declared.
    pub fn get(&self, symbol: &str) -> Option<&ConnectiveSpec> {
        self.by_symbol.get(symbol).map(|&i| &self.specs[i])
    }

    /// All declared connectives, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ConnectiveSpec> {
        self.specs.iter()
    }

    /// All connectives with the given [Fixity], in declaration order.
    pub fn with_fixity(&self, fixity: Fixity) -> impl Iterator<Item = &ConnectiveSpec> {
        self.specs.iter().filter(move |spec| spec.fixity == fixity)
    }

    /// Given the text starting at a tokeniser cursor, finds the declared symbol which
    /// is both a prefix of `text` and the *longest* such declared symbol (so `->` is
    /// preferred over `-` when both are declared and `text` begins with `->`).
    pub fn longest_matching_symbol(&self, text: &str) -> Option<&str> {
        self.specs
            .iter()
            .map(|spec| spec.symbol.as_str())
            .filter(|symbol| text.starts_with(symbol))
            .max_by_key(|symbol| symbol.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_match_prefers_arrow_over_dash() {
        let mut table = ConnectiveTable::new();
        table.push(ConnectiveSpec::infix("-", 5, Associativity::Left));
        table.push(ConnectiveSpec::infix("->", 1, Associativity::Right));

        assert_eq!(table.longest_matching_symbol("->q"), Some("->"));
        assert_eq!(table.longest_matching_symbol("-q"), Some("-"));
    }
}
