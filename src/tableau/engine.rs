/*!
The expansion loop.

Drives a set of branches from a single seeded branch to saturation, selecting at
each step the unprocessed signed formula due for expansion under the priority
`(kind = alpha first, priority ascending, insertion order)`, applying its rule,
and checking closure after every insertion.
*/

use std::time::Instant;

use crate::config::Config;
use crate::logic::LogicDefinition;
use crate::matcher::{instantiate_extension, match_rule};
use crate::reports::{SolveResult, Stats, Status, Tristate};
use crate::rules::{RuleKind, TableauRule};
use crate::structures::formula::{Formula, FormulaArena};
use crate::structures::signed_formula::SignedFormula;
use crate::tableau::branch::Branch;
use crate::tableau::model::{self, Model};
use crate::types::err::ErrorKind;

/// Runs the tableau to saturation (or until a configured bound triggers), starting
/// from a single branch holding `seed`.
pub fn solve(
    logic: &LogicDefinition,
    arena: &mut FormulaArena,
    seed: SignedFormula,
    config: &Config,
) -> Result<SolveResult, ErrorKind> {
    let relevant_atoms = seed.formula.atom_formulas();
    let branches = vec![Branch::seeded(seed, logic.sign_system())];
    let (branches, status, stats) = expand_to_saturation(logic, arena, branches, config)?;

    log::debug!(
        "solve finished: {status:?}, {} branches, {} rule applications, {}ms",
        branches.len(),
        stats.rule_applications,
        stats.elapsed_ms
    );

    let mut models = Vec::new();
    for branch in &branches {
        if branch.is_open() {
            models.extend(model::extract_models(branch, logic, arena.atoms(), &relevant_atoms)?);
        }
    }
    dedupe_preserving_order(&mut models);

    let satisfiable = branches.iter().any(Branch::is_open);

    Ok(SolveResult {
        satisfiable,
        models,
        status,
        stats,
    })
}

/// Satisfiability-based entailment, per the multi-valued form: `premises` entail
/// `conclusion` unless some model designates every premise while leaving the
/// conclusion non-designated. A single formula combining `¬conclusion` with the
/// premises cannot stand in for this in general --- negation need not map every
/// designated sign to a non-designated one (four-valued `~` fixes `M`, itself
/// designated) --- so instead every premise is seeded under every designated sign
/// and the conclusion under every non-designated sign, and each such combination
/// is checked as its own branch: an open one is a genuine counterexample.
pub fn entails(
    logic: &LogicDefinition,
    arena: &mut FormulaArena,
    premises: &[Formula],
    conclusion: Formula,
    config: &Config,
) -> Result<Tristate, ErrorKind> {
    let sign_system = logic.sign_system();
    let designated: Vec<_> = sign_system.designated().iter().cloned().collect();
    let non_designated: Vec<_> = sign_system
        .signs()
        .iter()
        .filter(|sign| !sign_system.designated().contains(sign))
        .cloned()
        .collect();

    if non_designated.is_empty() {
        // Every sign designates: the conclusion can never take a non-designated
        // value, so no counterexample is possible and entailment holds vacuously.
        return Ok(Tristate::True);
    }

    let mut seed_sets: Vec<Vec<SignedFormula>> = vec![Vec::new()];
    for premise in premises {
        let mut next = Vec::with_capacity(seed_sets.len() * designated.len());
        for partial in &seed_sets {
            for sign in &designated {
                let mut extended = partial.clone();
                extended.push(SignedFormula::new(sign.clone(), premise.clone()));
                next.push(extended);
            }
        }
        seed_sets = next;
    }

    let mut branches = Vec::with_capacity(seed_sets.len() * non_designated.len());
    for partial in &seed_sets {
        for sign in &non_designated {
            let mut seeds = partial.clone();
            seeds.push(SignedFormula::new(sign.clone(), conclusion.clone()));
            branches.push(Branch::seeded_many(seeds, sign_system));
        }
    }

    let (branches, status, _stats) = expand_to_saturation(logic, arena, branches, config)?;
    let counterexample_found = branches.iter().any(Branch::is_open);

    Ok(match (counterexample_found, status) {
        (true, _) => Tristate::False,
        (false, Status::Ok) => Tristate::True,
        (false, Status::Timeout | Status::Exhausted) => Tristate::Unknown,
    })
}

/// Expands every branch in `branches` to saturation (or until a configured bound
/// triggers), applying rules in the `(alpha before beta, priority ascending,
/// insertion order)` order across whichever branch is due next. Shared by [solve],
/// which starts from one seeded branch, and [entails], which starts from the
/// cross product of premise/conclusion sign choices.
fn expand_to_saturation(
    logic: &LogicDefinition,
    arena: &mut FormulaArena,
    mut branches: Vec<Branch>,
    config: &Config,
) -> Result<(Vec<Branch>, Status, Stats), ErrorKind> {
    let start = Instant::now();
    let mut stats = Stats {
        branches_created: branches.len(),
        ..Stats::default()
    };
    let mut status = Status::Ok;

    'expand: loop {
        if let Some(limit) = config.time_limit {
            if start.elapsed() > limit {
                status = Status::Timeout;
                break;
            }
        }

        if branches.len() > config.max_branches {
            status = Status::Exhausted;
            break;
        }

        let mut advanced = false;

        for i in 0..branches.len() {
            if branches[i].is_closed() {
                continue;
            }

            let Some((formula_index, rule)) = select_next(&branches[i], logic)? else {
                continue;
            };

            let signed = branches[i].entries()[formula_index].signed.clone();
            branches[i].mark_processed(formula_index);
            stats.rule_applications += 1;
            log::trace!("branch {i}: applying rule {} to entry {formula_index}", rule.name);

            let substitution = match_rule(&signed, rule).map_err(|e| {
                ErrorKind::InternalInvariantViolated(format!("rule {} selected but did not match: {e}", rule.name))
            })?;

            match rule.kind {
                RuleKind::Alpha => match rule.conclusions.first() {
                    Some(extension) => {
                        let additions = instantiate_extension(extension, &substitution, arena);

                        if branches[i].entries().len() + additions.len() > config.max_depth {
                            status = Status::Exhausted;
                            break 'expand;
                        }

                        for addition in additions {
                            branches[i].push(addition, logic.sign_system());
                        }
                    }
                    None => {
                        // The premise sign is unreachable for this connective under the
                        // logic's truth function: no tuple of operand signs produces it,
                        // so the formula could never have carried it. Close rather than
                        // decompose into nothing.
                        log::trace!("branch {i}: rule {} has no reachable decomposition, closing", rule.name);
                        branches[i].close();
                    }
                },

                RuleKind::Beta => {
                    let mut children = Vec::with_capacity(rule.conclusions.len());
                    for extension in &rule.conclusions {
                        let mut child = branches[i].clone();
                        let additions = instantiate_extension(extension, &substitution, arena);
                        for addition in additions {
                            child.push(addition, logic.sign_system());
                        }
                        children.push(child);
                    }
                    stats.branches_created += children.len();
                    branches.splice(i..i + 1, children);
                }
            }

            if config.subsumption {
                prune_subsumed(&mut branches);
            }

            advanced = true;
            break;
        }

        if !advanced {
            break;
        }
    }

    stats.elapsed_ms = start.elapsed().as_millis();
    Ok((branches, status, stats))
}

/// The unprocessed (formula index, rule) pair due for expansion next on `branch`,
/// per the `(alpha before beta, priority ascending, insertion order)` contract.
/// `Err` if some unprocessed compound formula has no matching rule --- a logic
/// definition misconfiguration that should have been caught at registration.
fn select_next<'a>(
    branch: &Branch,
    logic: &'a LogicDefinition,
) -> Result<Option<(usize, &'a TableauRule)>, ErrorKind> {
    let mut best: Option<(usize, &TableauRule)> = None;

    for (index, entry) in branch.entries().iter().enumerate() {
        if entry.processed {
            continue;
        }

        let Some(symbol) = entry.signed.formula.symbol() else {
            continue;
        };

        let rule = logic
            .rules()
            .iter()
            .find(|r| r.premise.sign == entry.signed.sign && r.premise_symbol() == Some(symbol))
            .ok_or_else(|| ErrorKind::RuleSetIncomplete {
                sign: entry.signed.sign.to_string(),
                symbol: symbol.to_string(),
            })?;

        let better = match &best {
            None => true,
            Some((_, current)) => (rule.kind, rule.priority) < (current.kind, current.priority),
        };

        if better {
            best = Some((index, rule));
        }
    }

    Ok(best)
}

/// Drops any open branch whose signed-formula set is a (non-strict, index-tiebroken)
/// superset of another open branch's --- it would only reproduce models the smaller
/// branch already accounts for.
fn prune_subsumed(branches: &mut Vec<Branch>) {
    let sets: Vec<_> = branches.iter().map(Branch::formula_signs).collect();
    let mut keep = vec![true; branches.len()];

    for i in 0..branches.len() {
        if branches[i].is_closed() {
            continue;
        }
        for j in 0..branches.len() {
            if i == j || !keep[j] || branches[j].is_closed() {
                continue;
            }
            let dominates = sets[i].is_subset(&sets[j]) && (sets[i].len() < sets[j].len() || i < j);
            if dominates {
                keep[j] = false;
            }
        }
    }

    let mut index = 0;
    branches.retain(|_| {
        let retained = keep[index];
        index += 1;
        retained
    });
}

fn dedupe_preserving_order(models: &mut Vec<Model>) {
    let mut seen = std::collections::HashSet::new();
    models.retain(|m| seen.insert(m.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{classical, four_valued, weak_kleene};
    use crate::structures::sign::Sign;

    fn parse_classical(input: &str, arena: &mut FormulaArena) -> Formula {
        let logic = classical::define();
        crate::parser::parse(input, logic.connectives(), arena).unwrap()
    }

    #[test]
    fn contradictory_seed_is_unsatisfiable() {
        let logic = classical::define();
        let mut arena = FormulaArena::new();
        let formula = parse_classical("p & ~p", &mut arena);
        let result = solve(&logic, &mut arena, SignedFormula::new(Sign::new("T"), formula), &Config::default()).unwrap();
        assert!(!result.satisfiable);
        assert!(result.models.is_empty());
    }

    #[test]
    fn disjunction_has_three_models() {
        let logic = classical::define();
        let mut arena = FormulaArena::new();
        let formula = parse_classical("p | q", &mut arena);
        let result = solve(&logic, &mut arena, SignedFormula::new(Sign::new("T"), formula), &Config::default()).unwrap();
        assert!(result.satisfiable);
        assert_eq!(result.models.len(), 3);
    }

    #[test]
    fn modus_ponens_counterexample_is_unsatisfiable() {
        let logic = classical::define();
        let mut arena = FormulaArena::new();
        let formula = parse_classical("(p -> q) & p & ~q", &mut arena);
        let result = solve(&logic, &mut arena, SignedFormula::new(Sign::new("T"), formula), &Config::default()).unwrap();
        assert!(!result.satisfiable);
    }

    #[test]
    fn weak_kleene_conjunction_with_undefined_sign_is_satisfiable() {
        let logic = weak_kleene::define();
        let mut arena = FormulaArena::new();
        let formula = crate::parser::parse("p & ~p", logic.connectives(), &mut arena).unwrap();
        let result = solve(&logic, &mut arena, SignedFormula::new(Sign::new("U"), formula), &Config::default()).unwrap();
        assert!(result.satisfiable);
        assert_eq!(result.models.len(), 1);
        assert_eq!(result.models[0].0.get("p"), Some(&"U".to_string()));
    }

    #[test]
    fn weak_kleene_excluded_middle_fails() {
        let logic = weak_kleene::define();
        let mut arena = FormulaArena::new();
        let formula = crate::parser::parse("p | ~p", logic.connectives(), &mut arena).unwrap();
        let result = solve(&logic, &mut arena, SignedFormula::new(Sign::new("U"), formula), &Config::default()).unwrap();
        assert!(result.satisfiable);
    }

    #[test]
    fn four_valued_conjunction_with_both_sign_is_satisfiable() {
        let logic = four_valued::define();
        let mut arena = FormulaArena::new();
        let formula = crate::parser::parse("p & ~p", logic.connectives(), &mut arena).unwrap();
        let result = solve(&logic, &mut arena, SignedFormula::new(Sign::new("M"), formula), &Config::default()).unwrap();
        assert!(result.satisfiable);
        assert!(result.models.iter().any(|m| m.0.get("p") == Some(&"M".to_string())));
    }

    #[test]
    fn four_valued_explosion_does_not_entail_unrelated_atom() {
        let logic = four_valued::define();
        let mut arena = FormulaArena::new();
        let premise = crate::parser::parse("p & ~p", logic.connectives(), &mut arena).unwrap();
        let conclusion = arena.atom("q");
        let verdict = entails(&logic, &mut arena, &[premise], conclusion, &Config::default()).unwrap();
        assert_eq!(verdict, Tristate::False);
    }

    #[test]
    fn four_valued_premise_entails_itself() {
        // Regression: a `designated : (premises & ~conclusion)` construction is
        // unsound here, since four-valued negation fixes `M` and `M` is designated
        // --- asserting `~p` designated is not the same as asserting `p`
        // non-designated. Reflexivity (p |= p) must hold regardless.
        let logic = four_valued::define();
        let mut arena = FormulaArena::new();
        let p = crate::parser::parse("p", logic.connectives(), &mut arena).unwrap();
        let conclusion = crate::parser::parse("p", logic.connectives(), &mut arena).unwrap();
        let verdict = entails(&logic, &mut arena, &[p], conclusion, &Config::default()).unwrap();
        assert_eq!(verdict, Tristate::True);
    }

    #[test]
    fn classical_tautology_is_entailed_by_nothing() {
        let logic = classical::define();
        let mut arena = FormulaArena::new();
        let conclusion = crate::parser::parse("p | ~p", logic.connectives(), &mut arena).unwrap();
        let verdict = entails(&logic, &mut arena, &[], conclusion, &Config::default()).unwrap();
        assert_eq!(verdict, Tristate::True);
    }

    #[test]
    fn unreachable_premise_sign_closes_the_branch_instead_of_erroring() {
        use crate::logic::generate::rules_from_semantics;
        use crate::logic::LogicDefinition;
        use crate::structures::connective::{ConnectiveSpec, ConnectiveTable};
        use crate::structures::sign::SignSystem;
        use crate::structures::truth_value::{TruthValue, TruthValueSystem};

        // A deliberately non-surjective "always true" unary connective: no tuple of
        // operand signs ever yields F, so the F-signed decomposition rule has zero
        // conclusions.
        let t = Sign::new("T");
        let f = Sign::new("F");
        let signs = vec![t.clone(), f.clone()];
        let always_true = |_: &[Sign]| t.clone();

        let mut connectives = ConnectiveTable::new();
        connectives.push(ConnectiveSpec::prefix("!", 4));

        let rules = rules_from_semantics(&signs, "!", &["A"], always_true, 0);
        assert!(rules.iter().any(|r| r.premise.sign == f && r.conclusions.is_empty()));

        let sign_system = SignSystem::new(signs.clone(), t.clone(), vec![t.clone()], vec![(t.clone(), f.clone())]);
        let values: Vec<TruthValue> = signs.iter().map(|s| TruthValue::new(s.as_str())).collect();
        let mut connective_fns = std::collections::HashMap::new();
        connective_fns.insert("!".to_string(), (|vs: &[TruthValue]| vs[0].clone()) as crate::structures::truth_value::ConnectiveFn);
        let sign_to_value = signs.iter().map(|s| (s.clone(), TruthValue::new(s.as_str()))).collect();
        let truth_values = TruthValueSystem::new(values, vec![TruthValue::new("T")], connective_fns, sign_to_value, None);

        let logic = LogicDefinition::new("always-true", connectives, sign_system, truth_values, rules);
        assert!(logic.validate().is_ok());

        let mut arena = FormulaArena::new();
        let p = arena.atom("p");
        let formula = arena.compound("!", vec![p]).unwrap();
        let result = solve(&logic, &mut arena, SignedFormula::new(f, formula), &Config::default()).unwrap();
        assert!(!result.satisfiable);
    }

    #[test]
    fn solving_twice_is_deterministic() {
        let logic = classical::define();
        let mut arena = FormulaArena::new();
        let formula = parse_classical("p | q", &mut arena);
        let first = solve(&logic, &mut arena, SignedFormula::new(Sign::new("T"), formula.clone()), &Config::default()).unwrap();
        let second = solve(&logic, &mut arena, SignedFormula::new(Sign::new("T"), formula), &Config::default()).unwrap();
        assert_eq!(first.models, second.models);
    }
}
