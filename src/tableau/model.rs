/*!
Model extraction: turning an open, saturated branch into one or more truth-value
assignments for the atoms of the seed formula.
*/

use std::collections::BTreeMap;

use crate::logic::LogicDefinition;
use crate::structures::atom::AtomTable;
use crate::structures::formula::Formula;
use crate::tableau::branch::Branch;
use crate::types::err::ErrorKind;

/// A truth-value assignment to atom names. Ordered (`BTreeMap`) so two structurally
/// identical models compare and serialise identically regardless of discovery order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub struct Model(pub BTreeMap<String, String>);

/// Extracts every model an open branch admits, per §4.5.4: atoms with exactly one
/// sign get that sign's value; atoms with no sign range over the logic's designated
/// values (one model per choice); atoms with several non-contradicting signs are
/// joined into a single value by the logic.
///
/// `relevant_atoms` are the atomic subformulas of whatever was seeded (a `solve`
/// call's formula, or `entails`'s combined premises and conclusion) --- these, not
/// every atom ever interned in the arena, are what a model needs to report.
pub fn extract_models(
    branch: &Branch,
    logic: &LogicDefinition,
    atoms: &AtomTable,
    relevant_atoms: &[Formula],
) -> Result<Vec<Model>, ErrorKind> {
    let truth_values = logic.truth_values();

    // `choices[i]` is the list of possible (name, value) pairs for `relevant_atoms[i]`.
    let mut choices: Vec<Vec<(String, String)>> = Vec::with_capacity(relevant_atoms.len());

    for formula in relevant_atoms {
        let atom_id = formula
            .as_atom()
            .expect("relevant_atoms contains only atomic formulas");
        let name = atoms.name(atom_id).unwrap_or("?").to_string();

        let signs = branch.signs_of(formula);
        let values: Vec<String> = match signs {
            None => truth_values
                .designated()
                .iter()
                .map(|value| value.as_str().to_string())
                .collect(),
            Some(signs) if signs.is_empty() => truth_values
                .designated()
                .iter()
                .map(|value| value.as_str().to_string())
                .collect(),
            Some(signs) if signs.len() == 1 => {
                let sign = signs.iter().next().unwrap();
                let value = truth_values.value_of_sign(sign).ok_or_else(|| {
                    ErrorKind::InternalInvariantViolated(format!(
                        "sign {sign} has no truth-value mapping in logic {}",
                        logic.name()
                    ))
                })?;
                vec![value.as_str().to_string()]
            }
            Some(signs) => {
                let values: Vec<_> = signs
                    .iter()
                    .map(|sign| {
                        truth_values.value_of_sign(sign).cloned().ok_or_else(|| {
                            ErrorKind::InternalInvariantViolated(format!(
                                "sign {sign} has no truth-value mapping in logic {}",
                                logic.name()
                            ))
                        })
                    })
                    .collect::<Result<_, _>>()?;
                let joined = truth_values.join(&values).ok_or_else(|| {
                    ErrorKind::InternalInvariantViolated(format!(
                        "atom {name} carries multiple non-contradicting signs but logic {} defines no join",
                        logic.name()
                    ))
                })?;
                vec![joined.as_str().to_string()]
            }
        };

        choices.push(values.into_iter().map(|value| (name.clone(), value)).collect());
    }

    Ok(cartesian_models(&choices))
}

/// Every combination across `choices`, each inner vec being one atom's options.
fn cartesian_models(choices: &[Vec<(String, String)>]) -> Vec<Model> {
    let mut models = vec![Model::default()];

    for options in choices {
        let mut next = Vec::with_capacity(models.len() * options.len().max(1));
        for model in &models {
            for (name, value) in options {
                let mut extended = model.clone();
                extended.0.insert(name.clone(), value.clone());
                next.push(extended);
            }
        }
        models = next;
    }

    models
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::classical;
    use crate::structures::formula::FormulaArena;
    use crate::structures::sign::Sign;
    use crate::structures::signed_formula::SignedFormula;

    #[test]
    fn single_signed_atom_yields_one_model() {
        let logic = classical::define();
        let mut arena = FormulaArena::new();
        let p = arena.atom("p");

        let branch = Branch::seeded(SignedFormula::new(Sign::new("T"), p.clone()), logic.sign_system());
        let models = extract_models(&branch, &logic, arena.atoms(), &[p]).unwrap();

        assert_eq!(models.len(), 1);
        assert_eq!(models[0].0.get("p"), Some(&"True".to_string()));
    }

    #[test]
    fn free_atom_ranges_over_designated_values() {
        let logic = classical::define();
        let mut arena = FormulaArena::new();
        let p = arena.atom("p");
        let q = arena.atom("q");

        let branch = Branch::seeded(SignedFormula::new(Sign::new("T"), p.clone()), logic.sign_system());
        let models = extract_models(&branch, &logic, arena.atoms(), &[p, q]).unwrap();

        // classical's designated set is {True}, so q has exactly one choice too.
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].0.get("q"), Some(&"True".to_string()));
    }
}
