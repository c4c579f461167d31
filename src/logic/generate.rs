/*!
A table-driven generator for tableau decomposition rules.

Many-valued signed tableaux (after Carnielli) decompose `s : c(A1, ..., An)` by
enumerating every tuple of operand signs whose truth function evaluates to `s`,
and branching over those tuples (one branch per tuple, the tuple's signed
subformulas as that branch's extension). Classical two-valued tableaux are the
special case where every premise sign has exactly one such tuple, i.e. every
rule turns out to be an α-rule. Building rules this way --- from the semantic
function rather than by hand --- guarantees the coverage contract checked at
registration (every sign/connective pair gets a rule) for free, and ties each
rule directly to the truth table it implements.
*/

use crate::rules::{meta, RuleKind, SignedPattern, TableauRule};
use crate::structures::sign::Sign;

/// Generates one [TableauRule] per sign in `signs`, decomposing `connective` (whose
/// declared arity is `operand_names.len()`) according to `value_fn`.
pub fn rules_from_semantics(
    signs: &[Sign],
    connective: &str,
    operand_names: &[&str],
    value_fn: impl Fn(&[Sign]) -> Sign,
    priority: i32,
) -> Vec<TableauRule> {
    let arity = operand_names.len();
    let tuples = cartesian_power(signs, arity);

    signs
        .iter()
        .map(|premise_sign| {
            let conclusions: Vec<Vec<SignedPattern>> = tuples
                .iter()
                .filter(|tuple| &value_fn(tuple) == premise_sign)
                .map(|tuple| {
                    operand_names
                        .iter()
                        .zip(tuple.iter())
                        .map(|(name, sign)| SignedPattern::new(sign.clone(), meta(name)))
                        .collect()
                })
                .collect();

            let kind = if conclusions.len() <= 1 {
                RuleKind::Alpha
            } else {
                RuleKind::Beta
            };

            TableauRule {
                name: format!("{premise_sign}{connective}"),
                kind,
                premise: SignedPattern::new(
                    premise_sign.clone(),
                    crate::rules::shape(connective, operand_names),
                ),
                conclusions,
                priority,
            }
        })
        .collect()
}

/// All tuples of length `n` drawn from `values`, in lexicographic order of `values`.
fn cartesian_power(values: &[Sign], n: usize) -> Vec<Vec<Sign>> {
    if n == 0 {
        return vec![vec![]];
    }

    let smaller = cartesian_power(values, n - 1);
    let mut tuples = Vec::with_capacity(smaller.len() * values.len());
    for value in values {
        for prefix in &smaller {
            let mut tuple = prefix.clone();
            tuple.push(value.clone());
            tuples.push(tuple);
        }
    }
    tuples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cartesian_power_has_expected_size() {
        let signs = vec![Sign::new("T"), Sign::new("F"), Sign::new("U")];
        assert_eq!(cartesian_power(&signs, 2).len(), 9);
        assert_eq!(cartesian_power(&signs, 0).len(), 1);
    }

    #[test]
    fn bijective_unary_function_yields_only_alpha_rules() {
        let t = Sign::new("T");
        let f = Sign::new("F");
        let signs = vec![t.clone(), f.clone()];
        let negate = |tuple: &[Sign]| if tuple[0] == t { f.clone() } else { t.clone() };

        let rules = rules_from_semantics(&signs, "~", &["A"], negate, 0);
        assert_eq!(rules.len(), 2);
        assert!(rules.iter().all(|r| r.kind == RuleKind::Alpha));
    }
}
