/*!
Classical two-valued propositional logic.

Signs `{T, F}`, contradiction `T <-> F`, designated `{T}`. Connectives `~`, `&`,
`|`, `->` exactly as declared in the formula string grammar (negation prefix at
precedence 4; conjunction left-associative at precedence 3; disjunction
left-associative at precedence 2; implication right-associative at precedence 1).
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

fn value_of(sign: &Sign) -> bool {
    *sign == sign_true()
}

fn sign_of(value: bool) -> Sign {
    if value {
        sign_true()
    } else {
        sign_false()
    }
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
    sign_of(!value_of(&tuple[0]))
}

fn and(tuple: &[Sign]) -> Sign {
    sign_of(value_of(&tuple[0]) && value_of(&tuple[1]))
}

fn or(tuple: &[Sign]) -> Sign {
    sign_of(value_of(&tuple[0]) || value_of(&tuple[1]))
}

fn implies(tuple: &[Sign]) -> Sign {
    sign_of(!value_of(&tuple[0]) || value_of(&tuple[1]))
}

/// The built-in classical logic definition.
pub fn define() -> LogicDefinition {
    let signs = vec![sign_true(), sign_false()];
    let connectives = connectives();

    let mut rules = Vec::new();
    rules.extend(rules_from_semantics(&signs, "~", &["A"], not, 0));
    rules.extend(rules_from_semantics(&signs, "&", &["A", "B"], and, 0));
    rules.extend(rules_from_semantics(&signs, "|", &["A", "B"], or, 0));
    rules.extend(rules_from_semantics(&signs, "->", &["A", "B"], implies, 0));

    let sign_system = SignSystem::new(
        signs,
        sign_true(),
        vec![sign_true()],
        vec![(sign_true(), sign_false())],
    );

    let true_value = TruthValue::new("True");
    let false_value = TruthValue::new("False");

    let mut connective_fns: HashMap<String, crate::structures::truth_value::ConnectiveFn> = HashMap::new();
    connective_fns.insert(
        "~".to_string(),
        (|values: &[TruthValue]| truth_value_of(!bool_value(&values[0]))) as _,
    );
    connective_fns.insert(
        "&".to_string(),
        (|values: &[TruthValue]| truth_value_of(bool_value(&values[0]) && bool_value(&values[1]))) as _,
    );
    connective_fns.insert(
        "|".to_string(),
        (|values: &[TruthValue]| truth_value_of(bool_value(&values[0]) || bool_value(&values[1]))) as _,
    );
    connective_fns.insert(
        "->".to_string(),
        (|values: &[TruthValue]| truth_value_of(!bool_value(&values[0]) || bool_value(&values[1]))) as _,
    );

    let mut sign_to_value = HashMap::new();
    sign_to_value.insert(sign_true(), true_value.clone());
    sign_to_value.insert(sign_false(), false_value.clone());

    let truth_values = TruthValueSystem::new(
        vec![true_value.clone(), false_value],
        vec![true_value],
        connective_fns,
        sign_to_value,
        None,
    );

    LogicDefinition::new("classical", connectives, sign_system, truth_values, rules)
}

fn bool_value(value: &TruthValue) -> bool {
    value.as_str() == "True"
}

fn truth_value_of(value: bool) -> TruthValue {
    if value {
        TruthValue::new("True")
    } else {
        TruthValue::new("False")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_set_covers_every_sign_and_connective() {
        let logic = define();
        assert!(logic.validate().is_ok());
        assert_eq!(logic.rules().len(), 8);
    }
}
