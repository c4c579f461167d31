/*!
Tableau rules: the patterns a [logic definition](crate::logic::LogicDefinition)
declares for decomposing a signed compound formula into simpler signed formulas.

A rule's premise is a single signed pattern `s : symbol(A, B, ...)`, where
`A`, `B`, ... are metavariables bound positionally to the premise's subformulas.
Its conclusions are a list of *branch extensions*; more than one extension makes
the rule branching (a β-rule), exactly one makes it non-branching (an α-rule).
*/

use crate::structures::sign::Sign;

/// Whether a rule extends its branch in place (α) or splits it into alternatives (β).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RuleKind {
    Alpha,
    Beta,
}

/// A pattern term: either a metavariable (bound during matching) or a compound shape
/// with its own nested pattern terms (rarely needed --- tableau rules typically bind
/// a whole subformula to a metavariable rather than matching into its structure, but
/// nested shapes are supported for logics that need them).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternTerm {
    /// Binds the formula at this position to `name`.
    Meta(String),
    /// Matches a compound with this connective symbol, recursing into `args`.
    Compound(String, Vec<PatternTerm>),
}

/// A signed pattern: a sign together with a pattern term for the formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedPattern {
    pub sign: Sign,
    pub term: PatternTerm,
}

impl SignedPattern {
    pub fn new(sign: impl Into<Sign>, term: PatternTerm) -> Self {
        SignedPattern { sign: sign.into(), term }
    }
}

/// A single tableau rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableauRule {
    pub name: String,
    pub kind: RuleKind,
    pub premise: SignedPattern,
    /// Each inner `Vec` is one branch extension; more than one extension makes the
    /// rule branching.
    pub conclusions: Vec<Vec<SignedPattern>>,
    pub priority: i32,
}

impl TableauRule {
    /// The connective symbol this rule's premise decomposes, if the premise pattern
    /// is a compound shape (as every tableau rule's premise must be, per the
    /// completeness contract checked at registration).
    pub fn premise_symbol(&self) -> Option<&str> {
        match &self.premise.term {
            PatternTerm::Compound(symbol, _) => Some(symbol.as_str()),
            PatternTerm::Meta(_) => None,
        }
    }
}

/// Convenience constructor for a metavariable pattern term.
pub fn meta(name: &str) -> PatternTerm {
    PatternTerm::Meta(name.to_string())
}

/// Convenience constructor for a compound pattern term over bare metavariables.
pub fn shape(symbol: &str, args: &[&str]) -> PatternTerm {
    PatternTerm::Compound(symbol.to_string(), args.iter().map(|a| meta(a)).collect())
}
