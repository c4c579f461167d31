/*!
Weak-Kleene three-valued logic (K3_w).

Signs `{T, F, U}`, contradictions `T <-> F`, `T <-> U`, `F <-> U` (every pair of
distinct signs contradicts, since a formula takes exactly one of the three truth
values), designated `{T}`. Unlike strong Kleene, `U` is *contagious*: any
operand valued `U` forces the whole compound to `U`, regardless of the other
operand's value.
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

pub fn sign_undefined() -> Sign {
    Sign::new("U")
}

fn connectives() -> ConnectiveTable {
    let mut table = ConnectiveTable::new();
    table.push(ConnectiveSpec::prefix("~", 4));
    table.push(ConnectiveSpec::infix("&", 3, Associativity::Left));
    table.push(ConnectiveSpec::infix("|", 2, Associativity::Left));
    table.push(ConnectiveSpec::infix("->", 1, Associativity::Right));
    table
}

fn not(tuple: &[Sign]) -> Sign {
    match &tuple[0] {
        s if *s == sign_true() => sign_false(),
        s if *s == sign_false() => sign_true(),
        _ => sign_undefined(),
    }
}

fn and(tuple: &[Sign]) -> Sign {
    let (a, b) = (&tuple[0], &tuple[1]);
    if *a == sign_undefined() || *b == sign_undefined() {
        return sign_undefined();
    }
    if *a == sign_true() && *b == sign_true() {
        sign_true()
    } else {
        sign_false()
    }
}

fn or(tuple: &[Sign]) -> Sign {
    let (a, b) = (&tuple[0], &tuple[1]);
    if *a == sign_undefined() || *b == sign_undefined() {
        return sign_undefined();
    }
    if *a == sign_true() || *b == sign_true() {
        sign_true()
    } else {
        sign_false()
    }
}

fn implies(tuple: &[Sign]) -> Sign {
    let (a, b) = (&tuple[0], &tuple[1]);
    if *a == sign_undefined() || *b == sign_undefined() {
        return sign_undefined();
    }
    if *a == sign_false() || *b == sign_true() {
        sign_true()
    } else {
        sign_false()
    }
}

fn value_of_sign(sign: &Sign) -> TruthValue {
    TruthValue::new(sign.as_str())
}

fn sign_of_value(value: &TruthValue) -> Sign {
    Sign::new(value.as_str())
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

fn implies_value(values: &[TruthValue]) -> TruthValue {
    value_of_sign(&implies(&[sign_of_value(&values[0]), sign_of_value(&values[1])]))
}

/// The built-in weak-Kleene logic definition.
pub fn define() -> LogicDefinition {
    let signs = vec![sign_true(), sign_false(), sign_undefined()];
    let connectives = connectives();

    let mut rules = Vec::new();
    rules.extend(rules_from_semantics(&signs, "~", &["A"], not, 0));
    rules.extend(rules_from_semantics(&signs, "&", &["A", "B"], and, 0));
    rules.extend(rules_from_semantics(&signs, "|", &["A", "B"], or, 0));
    rules.extend(rules_from_semantics(&signs, "->", &["A", "B"], implies, 0));

    let sign_system = SignSystem::new(
        signs.clone(),
        sign_true(),
        vec![sign_true()],
        vec![
            (sign_true(), sign_false()),
            (sign_true(), sign_undefined()),
            (sign_false(), sign_undefined()),
        ],
    );

    let values: Vec<TruthValue> = signs.iter().map(value_of_sign).collect();
    let designated = vec![value_of_sign(&sign_true())];

    let mut connective_fns: HashMap<String, crate::structures::truth_value::ConnectiveFn> = HashMap::new();
    connective_fns.insert("~".to_string(), not_value);
    connective_fns.insert("&".to_string(), and_value);
    connective_fns.insert("|".to_string(), or_value);
    connective_fns.insert("->".to_string(), implies_value);

    let sign_to_value = signs.iter().map(|s| (s.clone(), value_of_sign(s))).collect();

    let truth_values = TruthValueSystem::new(values, designated, connective_fns, sign_to_value, None);

    LogicDefinition::new("weak-kleene", connectives, sign_system, truth_values, rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_set_covers_every_sign_and_connective() {
        let logic = define();
        assert!(logic.validate().is_ok());
    }

    #[test]
    fn undefined_is_contagious_through_conjunction() {
        assert_eq!(and(&[sign_undefined(), sign_true()]), sign_undefined());
        assert_eq!(and(&[sign_false(), sign_undefined()]), sign_undefined());
    }

    #[test]
    fn sign_contradictions_are_pairwise_over_all_three_signs() {
        let logic = define();
        let system = logic.sign_system();
        assert!(system.contradicts(&sign_true(), &sign_false()));
        assert!(system.contradicts(&sign_true(), &sign_undefined()));
        assert!(system.contradicts(&sign_false(), &sign_undefined()));
    }
}
