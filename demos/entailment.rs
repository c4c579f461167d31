use tableaux::config::Config;
use tableaux::context::Context;

/// Compares classical explosion against four-valued paraconsistency on the same premise.
fn main() {
    let mut ctx = Context::with_builtin_logics();
    let config = Config::default();

    let classical_premise = ctx.parse("classical", "p & ~p").expect("formula parses");
    let classical_q = ctx.atom("q");
    let classical_verdict = ctx
        .entails("classical", &[classical_premise], classical_q, &config)
        .expect("built-in classical logic never fails to decompose a well-formed formula");
    println!("classical: (p & ~p) entails q? {classical_verdict}");

    let paraconsistent_premise = ctx.parse("four-valued", "p & ~p").expect("formula parses");
    let paraconsistent_q = ctx.atom("q");
    let paraconsistent_verdict = ctx
        .entails("four-valued", &[paraconsistent_premise], paraconsistent_q, &config)
        .expect("built-in four-valued logic never fails to decompose a well-formed formula");
    println!("four-valued: (p & ~p) entails q? {paraconsistent_verdict}");
}
