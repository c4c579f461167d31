/*!
Immutable, hash-consed formula terms.

A [Formula] is either an atom or a compound: a connective symbol applied to an
ordered tuple of subformulas. Formulas are built exclusively through a
[FormulaArena], which interns every node bottom-up so that structurally equal
formulas become the *same* `Rc`-backed value. This lets [Formula]'s [PartialEq]
and [Hash] implementations compare pointers rather than walk the tree, matching
the "intern subterms so equality reduces to identity" guidance of the data model.

# Examples

```rust
# use tableaux::structures::formula::FormulaArena;
let mut arena = FormulaArena::new();
let p = arena.atom("p");
let not_p_a = arena.compound("~", vec![p.clone()]).unwrap();
let not_p_b = arena.compound("~", vec![p.clone()]).unwrap();

// Interning means the two constructions share one node.
assert_eq!(not_p_a, not_p_b);
```
*/

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::structures::atom::{Atom, AtomTable};
use crate::structures::connective::ConnectiveTable;
use crate::types::err::ArityError;

/// The shape of a formula node: an atom, or a connective applied to subformulas.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum FormulaKind {
    Atom(Atom),
    Compound(Rc<str>, Vec<Formula>),
}

#[derive(Debug)]
struct FormulaNode {
    kind: FormulaKind,
    /// Lazily computed, cached set of atoms occurring in the formula.
    atoms: std::cell::OnceCell<Vec<Atom>>,
}

/// An immutable, interned formula.
///
/// Equality and hashing are by identity of the underlying interned node: two
/// [Formula] values compare equal iff they were produced (directly or as a
/// subformula) by the same call to [FormulaArena::intern].
#[derive(Clone, Debug)]
pub struct Formula(Rc<FormulaNode>);

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl Formula {
    /// `Some(atom)` if this formula is atomic, `None` if it is a compound.
    pub fn as_atom(&self) -> Option<Atom> {
        match &self.0.kind {
            FormulaKind::Atom(a) => Some(*a),
            FormulaKind::Compound(..) => None,
        }
    }

    /// The connective symbol and subformulas, if this formula is a compound.
    pub fn as_compound(&self) -> Option<(&str, &[Formula])> {
        match &self.0.kind {
            FormulaKind::Atom(_) => None,
            FormulaKind::Compound(symbol, args) => Some((symbol.as_ref(), args.as_slice())),
        }
    }

    /// Whether this formula is an atom (as opposed to a compound).
    pub fn is_atom(&self) -> bool {
        self.as_atom().is_some()
    }

    /// The connective symbol of a compound formula, or `None` for an atom.
    pub fn symbol(&self) -> Option<&str> {
        self.as_compound().map(|(symbol, _)| symbol)
    }

    /// The subformulas of a compound formula, or `&[]` for an atom.
    pub fn subformulas(&self) -> &[Formula] {
        self.as_compound().map(|(_, args)| args).unwrap_or(&[])
    }

    /// The set of distinct atoms occurring in this formula, computed on first
    /// access and cached thereafter.
    pub fn atom_set(&self) -> &[Atom] {
        self.0.atoms.get_or_init(|| {
            let mut atoms = Vec::new();
            Self::collect_atoms(self, &mut atoms);
            atoms.sort_unstable();
            atoms.dedup();
            atoms
        })
    }

    fn collect_atoms(formula: &Formula, into: &mut Vec<Atom>) {
        match &formula.0.kind {
            FormulaKind::Atom(a) => into.push(*a),
            FormulaKind::Compound(_, args) => {
                for arg in args {
                    Self::collect_atoms(arg, into);
                }
            }
        }
    }

    /// The distinct atomic subformulas occurring in this formula, as [Formula] values
    /// rather than bare [Atom] ids --- useful when the caller needs to index into
    /// something keyed by `Formula` (e.g. a branch's closure index) rather than by atom
    /// identity alone.
    pub fn atom_formulas(&self) -> Vec<Formula> {
        let mut seen = std::collections::HashSet::new();
        let mut into = Vec::new();
        Self::collect_atom_formulas(self, &mut seen, &mut into);
        into
    }

    fn collect_atom_formulas(formula: &Formula, seen: &mut std::collections::HashSet<Formula>, into: &mut Vec<Formula>) {
        match &formula.0.kind {
            FormulaKind::Atom(_) => {
                if seen.insert(formula.clone()) {
                    into.push(formula.clone());
                }
            }
            FormulaKind::Compound(_, args) => {
                for arg in args {
                    Self::collect_atom_formulas(arg, seen, into);
                }
            }
        }
    }

    /// Renders the canonical parenthesised form of the formula using `connectives`
    /// to decide, per the teacher convention, whether a symbol is displayed prefix
    /// or infix and whether surrounding parentheses are required.
    pub fn display<'a>(&'a self, atoms: &'a AtomTable, connectives: &'a ConnectiveTable) -> FormulaDisplay<'a> {
        FormulaDisplay {
            formula: self,
            atoms,
            connectives,
        }
    }
}

/// A display adapter pairing a [Formula] with the tables needed to render it.
pub struct FormulaDisplay<'a> {
    formula: &'a Formula,
    atoms: &'a AtomTable,
    connectives: &'a ConnectiveTable,
}

impl fmt::Display for FormulaDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_formula(f, self.formula, self.atoms, self.connectives)
    }
}

fn write_formula(
    f: &mut fmt::Formatter<'_>,
    formula: &Formula,
    atoms: &AtomTable,
    connectives: &ConnectiveTable,
) -> fmt::Result {
    match &formula.0.kind {
        FormulaKind::Atom(atom) => write!(f, "{}", atoms.name(*atom).unwrap_or("?")),
        FormulaKind::Compound(symbol, args) => {
            let spec = connectives.get(symbol);
            let is_prefix = spec.map(|s| s.fixity == crate::structures::connective::Fixity::Prefix).unwrap_or(false);

            if is_prefix && args.len() == 1 {
                write!(f, "{symbol}")?;
                write_operand(f, &args[0], atoms, connectives)
            } else if args.len() == 2 {
                write_operand(f, &args[0], atoms, connectives)?;
                write!(f, " {symbol} ")?;
                write_operand(f, &args[1], atoms, connectives)
            } else {
                write!(f, "{symbol}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_formula(f, arg, atoms, connectives)?;
                }
                write!(f, ")")
            }
        }
    }
}

fn write_operand(
    f: &mut fmt::Formatter<'_>,
    operand: &Formula,
    atoms: &AtomTable,
    connectives: &ConnectiveTable,
) -> fmt::Result {
    if operand.is_atom() {
        write_formula(f, operand, atoms, connectives)
    } else {
        write!(f, "(")?;
        write_formula(f, operand, atoms, connectives)?;
        write!(f, ")")
    }
}

/// A hash-consing arena for [Formula] terms and the [AtomTable] backing their atoms.
#[derive(Debug, Default)]
pub struct FormulaArena {
    atoms: AtomTable,
    interned: HashMap<FormulaKind, Formula>,
}

impl FormulaArena {
    /// A fresh, empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// The atom table backing this arena, for resolving atom names.
    pub fn atoms(&self) -> &AtomTable {
        &self.atoms
    }

    /// Interns (creating or reusing) the atomic formula named `name`.
    pub fn atom(&mut self, name: &str) -> Formula {
        let atom = self.atoms.intern(name);
        self.intern(FormulaKind::Atom(atom))
    }

    /// Interns (creating or reusing) a compound formula.
    ///
    /// Fails with [ArityError] if `subformulas.len()` does not equal `arity`.
    pub fn compound(
        &mut self,
        symbol: &str,
        subformulas: Vec<Formula>,
    ) -> Result<Formula, ArityError> {
        Ok(self.compound_with_arity(symbol, subformulas, None)?)
    }

    /// As [compound](Self::compound), but checks `subformulas.len()` against an
    /// explicit expected arity rather than trusting the caller.
    pub fn compound_with_arity(
        &mut self,
        symbol: &str,
        subformulas: Vec<Formula>,
        expected_arity: Option<usize>,
    ) -> Result<Formula, ArityError> {
        if let Some(expected) = expected_arity {
            if subformulas.len() != expected {
                return Err(ArityError {
                    symbol: symbol.to_string(),
                    expected,
                    found: subformulas.len(),
                });
            }
        }

        let key = FormulaKind::Compound(Rc::from(symbol), subformulas);
        Ok(self.intern(key))
    }

    fn intern(&mut self, kind: FormulaKind) -> Formula {
        if let Some(existing) = self.interned.get(&kind) {
            return existing.clone();
        }

        let formula = Formula(Rc::new(FormulaNode {
            kind: kind.clone(),
            atoms: std::cell::OnceCell::new(),
        }));
        self.interned.insert(kind, formula.clone());
        formula
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_dedupes_structurally_equal_formulas() {
        let mut arena = FormulaArena::new();
        let p1 = arena.atom("p");
        let p2 = arena.atom("p");
        assert_eq!(p1, p2);

        let conj1 = arena.compound("&", vec![p1.clone(), p2.clone()]).unwrap();
        let conj2 = arena.compound("&", vec![p1.clone(), p2.clone()]).unwrap();
        assert_eq!(conj1, conj2);
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let mut arena = FormulaArena::new();
        let p = arena.atom("p");
        let err = arena
            .compound_with_arity("~", vec![p.clone(), p], Some(1))
            .unwrap_err();
        assert_eq!(err.expected, 1);
        assert_eq!(err.found, 2);
    }

    #[test]
    fn atom_set_is_deduplicated_and_sorted() {
        let mut arena = FormulaArena::new();
        let p = arena.atom("p");
        let q = arena.atom("q");
        let disjunction = arena.compound("|", vec![q, p.clone()]).unwrap();
        let formula = arena.compound("&", vec![p, disjunction]).unwrap();
        assert_eq!(formula.atom_set().len(), 2);
    }

    #[test]
    fn atom_formulas_are_deduplicated_interned_values() {
        let mut arena = FormulaArena::new();
        let p = arena.atom("p");
        let not_p = arena.compound("~", vec![p.clone()]).unwrap();
        let conj = arena.compound("&", vec![p.clone(), not_p]).unwrap();

        let atoms = conj.atom_formulas();
        assert_eq!(atoms.len(), 1);
        assert_eq!(atoms[0], p);
    }
}
