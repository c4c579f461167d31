/*!
Four-valued paraconsistent logic (FDE-style, after Belnap and Dunn).

Signs `{T, F, M, N}`: `T` (only true), `F` (only false), `M` (both, "more than
consistent"), `N` (neither, "gap"). Each sign corresponds to a pair of
booleans `(verified, refuted)`:

| sign | verified | refuted |
|------|----------|---------|
| T    | true     | false   |
| F    | false    | true    |
| M    | true     | true    |
| N    | false    | false   |

Negation swaps the pair. Conjunction is componentwise AND on `verified` and OR
on `refuted`; disjunction is the dual.

Contradictions are `T<->F`, `T<->N`, `F<->M`, `M<->N` --- exactly the pairs whose
`verified` component disagrees. `T` does not contradict `M` (both agree the
formula is at least verified), and `F` does not contradict `N` (both agree it
is not verified); this is what makes the logic paraconsistent rather than
every pair of distinct signs closing a branch as they would in a system where
signs partition truth values exhaustively. Designated: `{T, M}`, since a
formula is satisfiable here whenever it comes out at least true.
*/

use std::collections::HashMap;

use crate::logic::generate::rules_from_semantics;
use crate::logic::LogicDefinition;
use crate::structures::connective::{Associativity, ConnectiveSpec, ConnectiveTable};
use crate::structures::sign::{Sign, SignSystem};
use crate::structures::truth_value::{TruthValue, TruthValueSystem};

pub fn sign_true() -> Sign {
    Sign::new("T")
}

pub fn sign_false() -> Sign {
    Sign::new("F")
}

pub fn sign_both() -> Sign {
    Sign::new("M")
}

pub fn sign_neither() -> Sign {
    Sign::new("N")
}

fn pair_of(sign: &Sign) -> (bool, bool) {
    match sign.as_str() {
        "T" => (true, false),
        "F" => (false, true),
        "M" => (true, true),
        _ => (false, false),
    }
}

fn sign_of_pair(pair: (bool, bool)) -> Sign {
    match pair {
        (true, false) => sign_true(),
        (false, true) => sign_false(),
        (true, true) => sign_both(),
        (false, false) => sign_neither(),
    }
}

fn connectives() -> ConnectiveTable {
    let mut table = ConnectiveTable::new();
    table.push(ConnectiveSpec::prefix("~", 4));
    table.push(ConnectiveSpec::infix("&", 3, Associativity::Left));
    table.push(ConnectiveSpec::infix("|", 2, Associativity::Left));
    table
}

fn not(tuple: &[Sign]) -> Sign {
    let (verified, refuted) = pair_of(&tuple[0]);
    sign_of_pair((refuted, verified))
}

fn and(tuple: &[Sign]) -> Sign {
    let (v1, r1) = pair_of(&tuple[0]);
    let (v2, r2) = pair_of(&tuple[1]);
    sign_of_pair((v1 && v2, r1 || r2))
}

fn or(tuple: &[Sign]) -> Sign {
    let (v1, r1) = pair_of(&tuple[0]);
    let (v2, r2) = pair_of(&tuple[1]);
    sign_of_pair((v1 || v2, r1 && r2))
}

fn not_value(values: &[TruthValue]) -> TruthValue {
    value_of_sign(&not(&[sign_of_value(&values[0])]))
}

fn and_value(values: &[TruthValue]) -> TruthValue {
    value_of_sign(&and(&[sign_of_value(&values[0]), sign_of_value(&values[1])]))
}

fn or_value(values: &[TruthValue]) -> TruthValue {
    value_of_sign(&or(&[sign_of_value(&values[0]), sign_of_value(&values[1])]))
}

fn value_of_sign(sign: &Sign) -> TruthValue {
    TruthValue::new(sign.as_str())
}

fn sign_of_value(value: &TruthValue) -> Sign {
    Sign::new(value.as_str())
}

/// Joins several non-contradicting signs held by one atom on an open branch into the
/// single value their conjunction denotes (e.g. an atom asserted both `T` and `M`
/// reads as `M`, since `M` already reports "also true").
fn join(values: &[TruthValue]) -> Option<TruthValue> {
    let mut verified = false;
    let mut refuted = false;
    for value in values {
        let (v, r) = pair_of(&sign_of_value(value));
        verified |= v;
        refuted |= r;
    }
    Some(value_of_sign(&sign_of_pair((verified, refuted))))
}

/// The built-in four-valued logic definition.
pub fn define() -> LogicDefinition {
    let signs = vec![sign_true(), sign_false(), sign_both(), sign_neither()];
    let connectives = connectives();

    let mut rules = Vec::new();
    rules.extend(rules_from_semantics(&signs, "~", &["A"], not, 0));
    rules.extend(rules_from_semantics(&signs, "&", &["A", "B"], and, 0));
    rules.extend(rules_from_semantics(&signs, "|", &["A", "B"], or, 0));

    let sign_system = SignSystem::new(
        signs.clone(),
        sign_true(),
        vec![sign_true(), sign_both()],
        vec![
            (sign_true(), sign_false()),
            (sign_true(), sign_neither()),
            (sign_false(), sign_both()),
            (sign_both(), sign_neither()),
        ],
    );

    let values: Vec<TruthValue> = signs.iter().map(value_of_sign).collect();
    let designated = vec![value_of_sign(&sign_true()), value_of_sign(&sign_both())];

    let mut connective_fns: HashMap<String, crate::structures::truth_value::ConnectiveFn> = HashMap::new();
    connective_fns.insert("~".to_string(), not_value);
    connective_fns.insert("&".to_string(), and_value);
    connective_fns.insert("|".to_string(), or_value);

    let sign_to_value = signs.iter().map(|s| (s.clone(), value_of_sign(s))).collect();

    let truth_values = TruthValueSystem::new(values, designated, connective_fns, sign_to_value, Some(join));

    LogicDefinition::new("four-valued", connectives, sign_system, truth_values, rules)
}
