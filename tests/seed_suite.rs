use tableaux::config::Config;
use tableaux::context::Context;
use tableaux::reports::Tristate;

#[test]
fn classical_conjunction_with_its_negation_is_unsatisfiable() {
    let mut ctx = Context::with_builtin_logics();
    let formula = ctx.parse("classical", "p & ~p").unwrap();
    let result = ctx.solve("classical", formula, Some("T"), &Config::default()).unwrap();
    assert!(!result.satisfiable);
}

#[test]
fn classical_excluded_middle_under_false_is_unsatisfiable() {
    let mut ctx = Context::with_builtin_logics();
    let formula = ctx.parse("classical", "p | ~p").unwrap();
    let result = ctx.solve("classical", formula, Some("F"), &Config::default()).unwrap();
    assert!(!result.satisfiable);
}

#[test]
fn classical_disjunction_has_exactly_three_models() {
    let mut ctx = Context::with_builtin_logics();
    let formula = ctx.parse("classical", "p | q").unwrap();
    let result = ctx.solve("classical", formula, Some("T"), &Config::default()).unwrap();

    assert!(result.satisfiable);

    let expected: std::collections::HashSet<Vec<(&str, &str)>> = [
        vec![("p", "True"), ("q", "False")],
        vec![("p", "False"), ("q", "True")],
        vec![("p", "True"), ("q", "True")],
    ]
    .into_iter()
    .collect();

    let found: std::collections::HashSet<Vec<(&str, &str)>> = result
        .models
        .iter()
        .map(|model| {
            let mut pairs: Vec<(&str, &str)> = model.0.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            pairs.sort();
            pairs
        })
        .collect();

    assert_eq!(found, expected);
}

#[test]
fn classical_modus_ponens_counterexample_is_unsatisfiable() {
    let mut ctx = Context::with_builtin_logics();
    let formula = ctx.parse("classical", "(p -> q) & p & ~q").unwrap();
    let result = ctx.solve("classical", formula, Some("T"), &Config::default()).unwrap();
    assert!(!result.satisfiable);
}

#[test]
fn weak_kleene_conjunction_with_negation_is_satisfiable_under_undefined() {
    let mut ctx = Context::with_builtin_logics();
    let formula = ctx.parse("weak-kleene", "p & ~p").unwrap();
    let result = ctx.solve("weak-kleene", formula, Some("U"), &Config::default()).unwrap();

    assert!(result.satisfiable);
    assert_eq!(result.models.len(), 1);
    assert_eq!(result.models[0].0.get("p"), Some(&"U".to_string()));
}

#[test]
fn weak_kleene_excluded_middle_fails_under_undefined() {
    let mut ctx = Context::with_builtin_logics();
    let formula = ctx.parse("weak-kleene", "p | ~p").unwrap();
    let result = ctx.solve("weak-kleene", formula, Some("U"), &Config::default()).unwrap();
    assert!(result.satisfiable);
}

#[test]
fn four_valued_conjunction_with_negation_is_satisfiable_under_both() {
    let mut ctx = Context::with_builtin_logics();
    let formula = ctx.parse("four-valued", "p & ~p").unwrap();
    let result = ctx.solve("four-valued", formula, Some("M"), &Config::default()).unwrap();

    assert!(result.satisfiable);
    assert!(result.models.iter().any(|m| m.0.get("p") == Some(&"M".to_string())));
}

#[test]
fn four_valued_explosion_does_not_entail_an_unrelated_atom() {
    let mut ctx = Context::with_builtin_logics();
    let premise = ctx.parse("four-valued", "p & ~p").unwrap();
    let q = ctx.atom("q");
    let verdict = ctx.entails("four-valued", &[premise], q, &Config::default()).unwrap();
    assert_eq!(verdict, Tristate::False);
}
