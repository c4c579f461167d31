use tableaux::config::Config;
use tableaux::context::Context;
use tableaux::logic::classical;
use tableaux::structures::formula::FormulaArena;

#[test]
fn parse_print_round_trips_for_a_nested_formula() {
    #[cfg(feature = "log")]
    env_logger::init();

    let logic = classical::define();
    let mut arena = FormulaArena::new();
    let formula = tableaux::parser::parse("(p & q) | (~p -> r)", logic.connectives(), &mut arena).unwrap();

    let printed = formula.display(arena.atoms(), logic.connectives()).to_string();
    let reparsed = tableaux::parser::parse(&printed, logic.connectives(), &mut arena).unwrap();

    assert_eq!(formula, reparsed);
}

#[test]
fn repeated_solves_are_byte_identical() {
    let mut first_ctx = Context::with_builtin_logics();
    let first_formula = first_ctx.parse("classical", "(p | q) & ~r").unwrap();
    let first = first_ctx
        .solve("classical", first_formula, Some("T"), &Config::default())
        .unwrap();

    let mut second_ctx = Context::with_builtin_logics();
    let second_formula = second_ctx.parse("classical", "(p | q) & ~r").unwrap();
    let second = second_ctx
        .solve("classical", second_formula, Some("T"), &Config::default())
        .unwrap();

    assert_eq!(
        serde_json::to_string(&first.models).unwrap(),
        serde_json::to_string(&second.models).unwrap()
    );
    assert_eq!(first.satisfiable, second.satisfiable);
}

#[test]
fn every_rule_conclusion_uses_only_the_premises_own_subformulas() {
    use tableaux::logic::{four_valued, weak_kleene};
    use tableaux::rules::PatternTerm;

    fn premise_metavariables(term: &PatternTerm, into: &mut Vec<String>) {
        match term {
            PatternTerm::Meta(name) => into.push(name.clone()),
            PatternTerm::Compound(_, args) => {
                for arg in args {
                    premise_metavariables(arg, into);
                }
            }
        }
    }

    fn conclusion_metavariables(term: &PatternTerm, into: &mut Vec<String>) {
        premise_metavariables(term, into)
    }

    for logic in [classical::define(), weak_kleene::define(), four_valued::define()] {
        for rule in logic.rules() {
            let mut premise_vars = Vec::new();
            premise_metavariables(&rule.premise.term, &mut premise_vars);

            for extension in &rule.conclusions {
                for pattern in extension {
                    let mut used = Vec::new();
                    conclusion_metavariables(&pattern.term, &mut used);
                    for var in used {
                        assert!(
                            premise_vars.contains(&var),
                            "rule {} in logic {} introduces metavariable {var} absent from its premise",
                            rule.name,
                            logic.name()
                        );
                    }
                }
            }
        }
    }
}
