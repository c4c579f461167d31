/*!
A library for determining the satisfiability of, and entailment between, formulas
of a propositional logic, via the analytic tableau method.

tableaux is parameterised over the logic itself: a [LogicDefinition](logic::LogicDefinition)
supplies the sign alphabet, the connective grammar, the decomposition rules, and
(for model extraction only) the truth-value semantics, so that classical, weak-Kleene,
and four-valued paraconsistent logics are three *values* of one type rather than three
separate engines. Third parties may register their own logics through the same
[LogicRegistry](logic::LogicRegistry) the built-ins use.

# Orientation

The library is organised around a [Context], to which logics are registered and
against which formulas are parsed and solved.

- [structures] holds the data model: [atoms](structures::atom), [formulas](structures::formula),
  [connectives](structures::connective), [signs](structures::sign), [truth values](structures::truth_value),
  and [signed formulas](structures::signed_formula).
- [rules] and [matcher] define and apply the patterns a logic decomposes its
  connectives with.
- [logic] bundles a sign system, connective table, rule set, and truth-value
  system into one [LogicDefinition](logic::LogicDefinition), and registers the
  three built-ins.
- [tableau] is the expansion loop itself: [branches](tableau::branch), [model
  extraction](tableau::model), and the [solve](tableau::solve)/[entails](tableau::entails)
  entry points.
- [config] holds the resource bounds (branch/depth/time limits, subsumption) a
  solve runs under.
- [reports] defines the result and status types a solve or entailment check returns.

# Examples

+ Solve a formula under classical logic and inspect its models.

```rust
# use tableaux::context::Context;
# use tableaux::config::Config;
let mut ctx = Context::with_builtin_logics();

let formula = ctx.parse("classical", "p | q").unwrap();
let result = ctx.solve("classical", formula, None, &Config::default()).unwrap();

assert!(result.satisfiable);
assert_eq!(result.models.len(), 3);
```

+ Check entailment in a paraconsistent logic: a contradiction does not explode.

```rust
# use tableaux::context::Context;
# use tableaux::config::Config;
# use tableaux::reports::Tristate;
let mut ctx = Context::with_builtin_logics();

let premise = ctx.parse("four-valued", "p & ~p").unwrap();
let q = ctx.atom("q");
let verdict = ctx.entails("four-valued", &[premise], q, &Config::default()).unwrap();

assert_eq!(verdict, Tristate::False);
```

# Logs

Calls to [log!](log) mark rule selection and branch closure at trace level; enable
with, for example, `RUST_LOG=tableaux=trace` when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/).
*/

#![allow(clippy::collapsible_else_if)]
#![allow(clippy::derivable_impls)]

pub mod config;
pub mod context;
pub mod logic;
pub mod matcher;
pub mod parser;
pub mod reports;
pub mod rules;
pub mod structures;
pub mod tableau;
pub mod types;
