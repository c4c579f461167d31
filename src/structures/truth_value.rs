/*!
Truth values and the truth-value system of a logic.

Truth values are used only for [model extraction](crate::tableau::model) and optional
semantic validation; the tableau engine itself is purely syntactic over
[signed formulas](crate::structures::signed_formula::SignedFormula) and never consults
a [TruthValueSystem] while expanding a branch.
*/

use std::collections::HashMap;

use crate::structures::sign::Sign;

/// A truth value, drawn from some logic's finite value set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TruthValue(pub String);

impl TruthValue {
    pub fn new(name: impl Into<String>) -> Self {
        TruthValue(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TruthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A connective's semantic function: maps a tuple of operand values (in argument order)
/// to a result value. Stored as a plain function pointer since the built-in logics need
/// no captured state; third-party logics needing a closure may box one behind a thin
/// function-pointer shim.
pub type ConnectiveFn = fn(&[TruthValue]) -> TruthValue;

/// A logic's truth-value set, designated subset, per-connective semantics, and the
/// bookkeeping model extraction needs: a sign-to-value map for atoms carrying exactly
/// one sign, and an optional join for atoms carrying several non-contradicting signs.
#[derive(Clone, Debug)]
pub struct TruthValueSystem {
    values: Vec<TruthValue>,
    designated: Vec<TruthValue>,
    connective_fns: HashMap<String, ConnectiveFn>,
    sign_to_value: HashMap<Sign, TruthValue>,
    /// `join(&[v1, v2, ...]) -> Some(value)` when several signs jointly denote one
    /// value (e.g. four-valued logic's `T` and `M` jointly read as "both"); `None`
    /// when the logic never has a branch-open atom with more than one sign.
    join: Option<fn(&[TruthValue]) -> Option<TruthValue>>,
}

impl TruthValueSystem {
    pub fn new(
        values: Vec<TruthValue>,
        designated: Vec<TruthValue>,
        connective_fns: HashMap<String, ConnectiveFn>,
        sign_to_value: HashMap<Sign, TruthValue>,
        join: Option<fn(&[TruthValue]) -> Option<TruthValue>>,
    ) -> Self {
        TruthValueSystem {
            values,
            designated,
            connective_fns,
            sign_to_value,
            join,
        }
    }

    pub fn values(&self) -> &[TruthValue] {
        &self.values
    }

    pub fn designated(&self) -> &[TruthValue] {
        &self.designated
    }

    pub fn is_designated(&self, value: &TruthValue) -> bool {
        self.designated.contains(value)
    }

    /// The semantic function for `symbol`, if the logic declares one.
    pub fn connective_fn(&self, symbol: &str) -> Option<ConnectiveFn> {
        self.connective_fns.get(symbol).copied()
    }

    /// The truth value an atom takes when it carries exactly one sign on an open branch.
    pub fn value_of_sign(&self, sign: &Sign) -> Option<&TruthValue> {
        self.sign_to_value.get(sign)
    }

    /// Joins several truth values, for an atom carrying several non-contradicting signs.
    pub fn join(&self, values: &[TruthValue]) -> Option<TruthValue> {
        self.join.and_then(|join_fn| join_fn(values))
    }
}
