/*!
Signs and the sign system of a logic.

A [Sign] is a symbol drawn from a logic's finite, closed sign alphabet (`T`, `F`,
`U`, `M`, `N`, ...). The [SignSystem] records that alphabet together with a
symmetric, irreflexive *contradiction relation*: if `s1` contradicts `s2`, no
tableau branch may assert both `s1:phi` and `s2:phi` for the same formula `phi`
without closing.
*/

use std::collections::HashSet;

/// A sign, drawn from some logic's sign alphabet.
///
/// Represented as a short symbol (`"T"`, `"F"`, `"U"`, `"M"`, `"N"`, ...) rather than
/// a fixed enum so that third-party logic definitions may declare their own alphabets
/// without modifying this crate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sign(pub String);

impl Sign {
    pub fn new(symbol: impl Into<String>) -> Self {
        Sign(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Sign {
    fn from(value: &str) -> Self {
        Sign::new(value)
    }
}

/// The sign alphabet of a logic, its contradiction relation, and the signs used to
/// judge satisfiability.
#[derive(Clone, Debug)]
pub struct SignSystem {
    /// The finite, closed alphabet of signs this logic uses.
    signs: Vec<Sign>,

    /// The sign a seed formula is given when `solve` is called without an explicit sign.
    default_sign: Sign,

    /// Signs which, when asserted of the seed formula, count towards "satisfiable".
    designated: HashSet<Sign>,

    /// The symmetric, irreflexive contradiction relation, stored as unordered pairs.
    contradictions: HashSet<(Sign, Sign)>,
}

impl SignSystem {
    /// Builds a sign system, normalising `contradictions` into a symmetric closure.
    ///
    /// # Panics (caught and reported as [RegistrationError](crate::types::err::RegistrationError) by the registry)
    /// Validity (non-empty alphabet, non-empty contradictions, designated subset of
    /// alphabet) is *not* checked here: it is checked once, on logic registration, by
    /// [LogicDefinition::validate](crate::logic::LogicDefinition::validate).
    pub fn new(
        signs: Vec<Sign>,
        default_sign: Sign,
        designated: Vec<Sign>,
        contradictions: Vec<(Sign, Sign)>,
    ) -> Self {
        let mut closed = HashSet::new();
        for (a, b) in contradictions {
            closed.insert((a.clone(), b.clone()));
            closed.insert((b, a));
        }

        SignSystem {
            signs,
            default_sign,
            designated: designated.into_iter().collect(),
            contradictions: closed,
        }
    }

    pub fn signs(&self) -> &[Sign] {
        &self.signs
    }

    pub fn contains(&self, sign: &Sign) -> bool {
        self.signs.contains(sign)
    }

    pub fn default_sign(&self) -> &Sign {
        &self.default_sign
    }

    pub fn designated(&self) -> &HashSet<Sign> {
        &self.designated
    }

    pub fn is_designated(&self, sign: &Sign) -> bool {
        self.designated.contains(sign)
    }

    /// Whether `a` and `b` mutually exclude each other on a single branch.
    ///
    /// Irreflexive: `contradicts(s, s)` is always `false`, since a sign trivially
    /// coexists with itself.
    pub fn contradicts(&self, a: &Sign, b: &Sign) -> bool {
        a != b && self.contradictions.contains(&(a.clone(), b.clone()))
    }

    /// Every contradicting pair, each listed once (`a < b` by field order as declared).
    pub fn contradiction_pairs(&self) -> impl Iterator<Item = &(Sign, Sign)> {
        self.contradictions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contradiction_relation_is_symmetric_and_irreflexive() {
        let t = Sign::new("T");
        let f = Sign::new("F");
        let system = SignSystem::new(
            vec![t.clone(), f.clone()],
            t.clone(),
            vec![t.clone()],
            vec![(t.clone(), f.clone())],
        );

        assert!(system.contradicts(&t, &f));
        assert!(system.contradicts(&f, &t));
        assert!(!system.contradicts(&t, &t));
    }
}
