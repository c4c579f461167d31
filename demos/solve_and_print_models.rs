use tableaux::config::Config;
use tableaux::context::Context;

/// Solves a formula under each built-in logic and prints every model found.
fn main() {
    let mut ctx = Context::with_builtin_logics();
    let config = Config::default();

    for (logic, formula_text, sign) in [
        ("classical", "p | q", "T"),
        ("weak-kleene", "p & ~p", "U"),
        ("four-valued", "p & ~p", "M"),
    ] {
        let formula = ctx.parse(logic, formula_text).expect("formula parses");
        let result = ctx
            .solve(logic, formula, Some(sign), &config)
            .expect("built-in logics never fail to decompose a well-formed formula");

        println!("{logic}: {formula_text} under {sign} -- satisfiable: {}", result.satisfiable);
        for model in &result.models {
            let rendering = model
                .0
                .iter()
                .map(|(atom, value)| format!("{atom}={value}"))
                .collect::<Vec<_>>()
                .join(" ");
            println!("  {rendering}");
        }
    }
}
