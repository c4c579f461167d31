//! Key structures: atoms, formulas, connectives, signs, truth values, and signed formulas.
//!
//! # Formulas
//!
//! A [formula](formula) is either an atom or a connective applied to subformulas, built
//! and hash-consed through a [FormulaArena](formula::FormulaArena) so that structural
//! equality reduces to pointer identity.
//!
//! # Signs and truth values
//!
//! A [sign](sign) asserts the semantic status of a formula on a tableau branch (`T`,
//! `F`, `U`, `M`, `N`, ...); a [truth value](truth_value) is an element of a logic's
//! semantic domain, used only for model extraction and validation, never by the engine
//! itself. Both alphabets are declared per [logic definition](crate::logic::LogicDefinition)
//! rather than hardcoded, so that classical, weak-Kleene, and four-valued logics share
//! this one set of types.
//!
//! # Signed formulas
//!
//! A [signed formula](signed_formula::SignedFormula) --- a `(sign, formula)` pair --- is
//! the atomic unit flowing through the [tableau engine](crate::tableau).

pub mod atom;
pub mod connective;
pub mod formula;
pub mod sign;
pub mod signed_formula;
pub mod truth_value;
