/*!
The rule matcher: binds a [TableauRule]'s premise pattern against a concrete
[SignedFormula], producing a substitution, or instantiates a rule's conclusions
under an already-found substitution.

Matching is purely structural and knows nothing about signs' semantics or
closure; it is the one place pattern metavariables (`A`, `B`, ...) are resolved
to concrete [Formula] values.
*/

use std::collections::HashMap;

use crate::rules::{PatternTerm, SignedPattern, TableauRule};
use crate::structures::formula::{Formula, FormulaArena};
use crate::structures::signed_formula::SignedFormula;
use crate::types::err::MatchError;

/// A binding from pattern metavariables to concrete subformulas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Substitution(HashMap<String, Formula>);

impl Substitution {
    pub fn get(&self, name: &str) -> Option<&Formula> {
        self.0.get(name)
    }
}

/// Attempts to match `signed` against `rule`'s premise, returning the substitution
/// on success.
pub fn match_rule(signed: &SignedFormula, rule: &TableauRule) -> Result<Substitution, MatchError> {
    if signed.sign != rule.premise.sign {
        return Err(MatchError::SignMismatch);
    }

    let mut substitution = Substitution::default();
    match_term(&rule.premise.term, &signed.formula, &mut substitution)?;
    Ok(substitution)
}

fn match_term(
    pattern: &PatternTerm,
    formula: &Formula,
    substitution: &mut Substitution,
) -> Result<(), MatchError> {
    match pattern {
        PatternTerm::Meta(name) => {
            if let Some(bound) = substitution.0.get(name) {
                if bound != formula {
                    return Err(MatchError::InconsistentBinding {
                        metavariable: name.clone(),
                    });
                }
            } else {
                substitution.0.insert(name.clone(), formula.clone());
            }
            Ok(())
        }

        PatternTerm::Compound(symbol, args) => {
            let Some((formula_symbol, formula_args)) = formula.as_compound() else {
                return Err(MatchError::ShapeMismatch);
            };

            if formula_symbol != symbol || formula_args.len() != args.len() {
                return Err(MatchError::ShapeMismatch);
            }

            for (sub_pattern, sub_formula) in args.iter().zip(formula_args.iter()) {
                match_term(sub_pattern, sub_formula, substitution)?;
            }

            Ok(())
        }
    }
}

/// Instantiates every signed pattern in `extension` under `substitution`, producing
/// the ground signed formulas a rule application adds to a branch.
pub fn instantiate_extension(
    extension: &[SignedPattern],
    substitution: &Substitution,
    arena: &mut FormulaArena,
) -> Vec<SignedFormula> {
    extension
        .iter()
        .map(|pattern| instantiate(pattern, substitution, arena))
        .collect()
}

fn instantiate(
    pattern: &SignedPattern,
    substitution: &Substitution,
    arena: &mut FormulaArena,
) -> SignedFormula {
    let formula = instantiate_term(&pattern.term, substitution, arena);
    SignedFormula::new(pattern.sign.clone(), formula)
}

fn instantiate_term(term: &PatternTerm, substitution: &Substitution, arena: &mut FormulaArena) -> Formula {
    match term {
        PatternTerm::Meta(name) => substitution
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("unbound metavariable '{name}' in rule conclusion")),

        PatternTerm::Compound(symbol, args) => {
            let resolved = args
                .iter()
                .map(|arg| instantiate_term(arg, substitution, arena))
                .collect();
            arena
                .compound(symbol, resolved)
                .expect("rule conclusions are built with the connective's declared arity")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::classical;
    use crate::rules::meta;
    use crate::structures::sign::Sign;

    #[test]
    fn matches_and_binds_conjunction_operands() {
        let logic = classical::define();
        let mut arena = FormulaArena::new();
        let p = arena.atom("p");
        let q = arena.atom("q");
        let conj = arena.compound("&", vec![p.clone(), q.clone()]).unwrap();
        let signed = SignedFormula::new(Sign::new("T"), conj);

        let rule = logic
            .rules()
            .iter()
            .find(|r| r.name == "T&")
            .expect("classical logic declares a T-conjunction rule");

        let substitution = match_rule(&signed, rule).unwrap();
        assert_eq!(substitution.get("A"), Some(&p));
        assert_eq!(substitution.get("B"), Some(&q));
    }

    #[test]
    fn sign_mismatch_is_reported() {
        let logic = classical::define();
        let mut arena = FormulaArena::new();
        let p = arena.atom("p");
        let q = arena.atom("q");
        let conj = arena.compound("&", vec![p, q]).unwrap();
        let signed = SignedFormula::new(Sign::new("F"), conj);

        let rule = logic.rules().iter().find(|r| r.name == "T&").unwrap();
        assert_eq!(match_rule(&signed, rule), Err(MatchError::SignMismatch));
    }

    #[test]
    fn inconsistent_binding_is_rejected() {
        // A pattern reusing the same metavariable for both operands should fail to
        // match a conjunction of two distinct atoms.
        let mut arena = FormulaArena::new();
        let p = arena.atom("p");
        let q = arena.atom("q");
        let conj = arena.compound("&", vec![p, q]).unwrap();
        let signed = SignedFormula::new(Sign::new("T"), conj);

        let rule = TableauRule {
            name: "self-conjunction".into(),
            kind: crate::rules::RuleKind::Alpha,
            premise: SignedPattern::new(Sign::new("T"), crate::rules::shape("&", &["A", "A"])),
            conclusions: vec![vec![]],
            priority: 0,
        };

        assert!(matches!(
            match_rule(&signed, &rule),
            Err(MatchError::InconsistentBinding { .. })
        ));
    }

    #[test]
    fn unused_meta_helper_is_exercised() {
        assert_eq!(meta("A"), PatternTerm::Meta("A".to_string()));
    }
}
