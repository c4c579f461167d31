/*!
The context --- to which logics are registered, formulas are built and parsed, and
within which solves and entailment checks take place.

A [Context] bundles a [LogicRegistry](crate::logic::LogicRegistry) with the
[FormulaArena](crate::structures::formula::FormulaArena) that interns every formula
built against it. Keeping the two together means a formula handle obtained from one
call (`atom`, `parse`) stays valid for every later call on the same context.

# Example
```rust
# use tableaux::context::Context;
# use tableaux::config::Config;
let mut ctx = Context::with_builtin_logics();

let formula = ctx.parse("classical", "p & ~p").unwrap();
let result = ctx.solve("classical", formula, None, &Config::default()).unwrap();
assert!(!result.satisfiable);
```
*/

use crate::config::Config;
use crate::logic::{LogicDefinition, LogicRegistry};
use crate::reports::{SolveResult, Tristate};
use crate::structures::formula::{Formula, FormulaArena};
use crate::structures::sign::Sign;
use crate::structures::signed_formula::SignedFormula;
use crate::tableau;
use crate::types::err::ErrorKind;

/// The programmatic entry point: registered logics plus the arena every formula
/// built through this context is interned into.
pub struct Context {
    logics: LogicRegistry,
    arena: FormulaArena,
}

impl Context {
    /// An empty context with no logics registered.
    pub fn new() -> Self {
        Context {
            logics: LogicRegistry::new(),
            arena: FormulaArena::new(),
        }
    }

    /// A context pre-populated with the classical, weak-Kleene, and four-valued logics.
    pub fn with_builtin_logics() -> Self {
        Context {
            logics: LogicRegistry::with_builtins(),
            arena: FormulaArena::new(),
        }
    }

    /// Registers a third-party logic definition under its own name.
    pub fn register_logic(&mut self, logic: LogicDefinition) -> Result<(), ErrorKind> {
        self.logics.register(logic).map_err(ErrorKind::from)
    }

    /// Looks up a registered logic by name, failing with [ErrorKind::Registration]
    /// if none is registered under it.
    pub fn open_logic(&self, name: &str) -> Result<&LogicDefinition, ErrorKind> {
        self.logics.get(name).map_err(ErrorKind::from)
    }

    /// Interns (or reuses) the atomic formula named `name`.
    pub fn atom(&mut self, name: &str) -> Formula {
        self.arena.atom(name)
    }

    /// Parses `input` against `logic`'s connective table, interning the result into
    /// this context's arena.
    pub fn parse(&mut self, logic: &str, input: &str) -> Result<Formula, ErrorKind> {
        let logic = self.open_logic(logic)?.clone();
        crate::parser::parse(input, logic.connectives(), &mut self.arena).map_err(ErrorKind::from)
    }

    /// Runs the tableau on `formula` under `logic`, seeded with `sign` (or the logic's
    /// default sign if `None`).
    pub fn solve(
        &mut self,
        logic: &str,
        formula: Formula,
        sign: Option<&str>,
        config: &Config,
    ) -> Result<SolveResult, ErrorKind> {
        let logic = self.logics.get(logic)?.clone();
        let sign = match sign {
            Some(symbol) => {
                let sign = Sign::new(symbol);
                if !logic.sign_system().contains(&sign) {
                    return Err(ErrorKind::Registration(crate::types::err::RegistrationError::UnknownSign(
                        symbol.to_string(),
                    )));
                }
                sign
            }
            None => logic.sign_system().default_sign().clone(),
        };

        tableau::solve(&logic, &mut self.arena, SignedFormula::new(sign, formula), config)
    }

    /// Whether `premises` entail `conclusion` under `logic`, generalised over every
    /// designated sign (see [tableau::entails](crate::tableau::entails)).
    pub fn entails(
        &mut self,
        logic: &str,
        premises: &[Formula],
        conclusion: Formula,
        config: &Config,
    ) -> Result<Tristate, ErrorKind> {
        let logic = self.logics.get(logic)?.clone();
        tableau::entails(&logic, &mut self.arena, premises, conclusion, config)
    }

    /// The arena backing this context, for rendering formulas or inspecting atoms.
    pub fn arena(&self) -> &FormulaArena {
        &self.arena
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_logic_is_reported() {
        let mut ctx = Context::with_builtin_logics();
        assert!(ctx.parse("modal", "p").is_err());
    }

    #[test]
    fn solve_with_explicit_sign_matches_weak_kleene_contagion() {
        let mut ctx = Context::with_builtin_logics();
        let formula = ctx.parse("weak-kleene", "p & ~p").unwrap();
        let result = ctx.solve("weak-kleene", formula, Some("U"), &Config::default()).unwrap();
        assert!(result.satisfiable);
    }

    #[test]
    fn solve_without_sign_uses_the_logics_default() {
        let mut ctx = Context::with_builtin_logics();
        let formula = ctx.parse("classical", "p & ~p").unwrap();
        let result = ctx.solve("classical", formula, None, &Config::default()).unwrap();
        assert!(!result.satisfiable);
    }

    #[test]
    fn unknown_sign_is_reported() {
        let mut ctx = Context::with_builtin_logics();
        let formula = ctx.parse("classical", "p").unwrap();
        assert!(ctx.solve("classical", formula, Some("Q"), &Config::default()).is_err());
    }

    #[test]
    fn entails_reports_explosion_as_not_entailing() {
        let mut ctx = Context::with_builtin_logics();
        let premise = ctx.parse("four-valued", "p & ~p").unwrap();
        let q = ctx.atom("q");
        let verdict = ctx.entails("four-valued", &[premise], q, &Config::default()).unwrap();
        assert_eq!(verdict, Tristate::False);
    }
}
