/*!
Logic definitions and the registry that holds them.

A [LogicDefinition] bundles everything the [tableau engine](crate::tableau) needs
to stay agnostic of which logic it is running: a [connective table](ConnectiveTable),
a [sign system](SignSystem), a [truth-value system](TruthValueSystem), and a sorted
list of [tableau rules](TableauRule). Classical, weak-Kleene, and four-valued logics
are three *values* of this one type, not three different engines.
*/

pub mod classical;
pub mod four_valued;
pub mod generate;
pub mod weak_kleene;

use std::collections::{HashMap, HashSet};

use crate::rules::{RuleKind, TableauRule};
use crate::structures::connective::ConnectiveTable;
use crate::structures::sign::{Sign, SignSystem};
use crate::structures::truth_value::TruthValueSystem;
use crate::types::err::RegistrationError;

/// An immutable bundle of everything needed to run the tableau engine for one logic.
#[derive(Clone, Debug)]
pub struct LogicDefinition {
    name: String,
    connectives: ConnectiveTable,
    sign_system: SignSystem,
    truth_values: TruthValueSystem,
    rules: Vec<TableauRule>,
}

impl LogicDefinition {
    pub fn new(
        name: impl Into<String>,
        connectives: ConnectiveTable,
        sign_system: SignSystem,
        truth_values: TruthValueSystem,
        mut rules: Vec<TableauRule>,
    ) -> Self {
        // Sorted once, at construction, so the engine always sees (kind=alpha first,
        // priority ascending, declaration order) without re-sorting per solve.
        rules.sort_by(|a, b| {
            let kind_key = |k: &RuleKind| match k {
                RuleKind::Alpha => 0,
                RuleKind::Beta => 1,
            };
            kind_key(&a.kind)
                .cmp(&kind_key(&b.kind))
                .then(a.priority.cmp(&b.priority))
        });

        LogicDefinition {
            name: name.into(),
            connectives,
            sign_system,
            truth_values,
            rules,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connectives(&self) -> &ConnectiveTable {
        &self.connectives
    }

    pub fn sign_system(&self) -> &SignSystem {
        &self.sign_system
    }

    pub fn truth_values(&self) -> &TruthValueSystem {
        &self.truth_values
    }

    /// Rules, already sorted `(kind=alpha first, priority ascending, declaration order)`.
    pub fn rules(&self) -> &[TableauRule] {
        &self.rules
    }

    /// Checks the registration contracts of §4.3: every rule's premise sign is in the
    /// alphabet, every (sign, connective) pair has a decomposition rule, designated
    /// signs are non-empty, and the contradiction relation is non-empty.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.sign_system.designated().is_empty() {
            return Err(RegistrationError::NoDesignatedSigns);
        }

        if self.sign_system.contradiction_pairs().next().is_none() {
            return Err(RegistrationError::NoContradictions);
        }

        for rule in &self.rules {
            if !self.sign_system.contains(&rule.premise.sign) {
                return Err(RegistrationError::PremiseSignNotInAlphabet {
                    rule: rule.name.clone(),
                    sign: rule.premise.sign.to_string(),
                });
            }
        }

        let mut covered: HashSet<(Sign, String)> = HashSet::new();
        for rule in &self.rules {
            if let Some(symbol) = rule.premise_symbol() {
                covered.insert((rule.premise.sign.clone(), symbol.to_string()));
            }
        }

        for sign in self.sign_system.signs() {
            for connective in self.connectives.iter() {
                let key = (sign.clone(), connective.symbol.clone());
                if !covered.contains(&key) {
                    return Err(RegistrationError::MissingDecomposition {
                        sign: sign.to_string(),
                        symbol: connective.symbol.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Maps logic names to registered [LogicDefinition]s.
///
/// Registration is append-only: re-registering under an existing name is rejected
/// unless explicitly overridden via [Self::register_overriding].
#[derive(Clone, Default)]
pub struct LogicRegistry {
    logics: HashMap<String, LogicDefinition>,
}

impl LogicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the three built-in logics.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register(classical::define())
            .expect("built-in classical logic is well-formed");
        registry
            .register(weak_kleene::define())
            .expect("built-in weak-Kleene logic is well-formed");
        registry
            .register(four_valued::define())
            .expect("built-in four-valued logic is well-formed");
        registry
    }

    /// Registers `logic`, validating it first. Fails if the name is already taken
    /// or the definition does not satisfy §4.3's contracts.
    pub fn register(&mut self, logic: LogicDefinition) -> Result<(), RegistrationError> {
        if self.logics.contains_key(&logic.name) {
            return Err(RegistrationError::DuplicateLogic(logic.name));
        }
        logic.validate()?;
        self.logics.insert(logic.name.clone(), logic);
        Ok(())
    }

    /// As [Self::register], but replaces any existing logic registered under the
    /// same name instead of failing.
    pub fn register_overriding(&mut self, logic: LogicDefinition) -> Result<(), RegistrationError> {
        logic.validate()?;
        self.logics.insert(logic.name.clone(), logic);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&LogicDefinition, RegistrationError> {
        self.logics
            .get(name)
            .ok_or_else(|| RegistrationError::UnknownLogic(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.logics.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_register_cleanly() {
        let registry = LogicRegistry::with_builtins();
        assert!(registry.get("classical").is_ok());
        assert!(registry.get("weak-kleene").is_ok());
        assert!(registry.get("four-valued").is_ok());
    }

    #[test]
    fn unknown_logic_is_reported() {
        let registry = LogicRegistry::with_builtins();
        assert_eq!(
            registry.get("modal").unwrap_err(),
            RegistrationError::UnknownLogic("modal".to_string())
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = LogicRegistry::with_builtins();
        assert_eq!(
            registry.register(classical::define()).unwrap_err(),
            RegistrationError::DuplicateLogic("classical".to_string())
        );
    }

    #[test]
    fn overriding_registration_replaces_the_definition() {
        let mut registry = LogicRegistry::with_builtins();
        assert!(registry.register_overriding(classical::define()).is_ok());
        assert!(registry.get("classical").is_ok());
    }
}
