/*!
(The internal representation of) an atom (aka. a propositional variable).

An atom is identified by a name drawn from the alphabet `[A-Za-z][A-Za-z0-9_]*`.
Names are interned: the [AtomTable] maps each distinct name to a small `u32` index
and back, so that once parsed an atom may be compared, hashed, and used as a map
key without touching the underlying string again.

# Notes
- In the SAT literature these are often called 'variables', in the logic literature
  'atoms' or 'propositional letters'. This library follows the logic-literature name
  throughout, matching the vocabulary of the tableau method itself.
*/

use std::collections::HashMap;

/// An atom, i.e. a propositional variable, represented as an index into an [AtomTable].
pub type Atom = u32;

/// Interns atom names, handing out stable indices.
///
/// Two calls to [intern](AtomTable::intern) with the same name return the same [Atom],
/// so structural equality of atoms reduces to equality of `u32`s.
#[derive(Clone, Debug, Default)]
pub struct AtomTable {
    names: Vec<String>,
    by_name: HashMap<String, Atom>,
}

impl AtomTable {
    /// A fresh, empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `name`, returning its existing atom if already known or allocating a fresh one.
    pub fn intern(&mut self, name: &str) -> Atom {
        if let Some(atom) = self.by_name.get(name) {
            return *atom;
        }

        let atom = self.names.len() as Atom;
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), atom);
        atom
    }

    /// The name originally interned for `atom`, if any.
    pub fn name(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom as usize).map(String::as_str)
    }

    /// The number of distinct atoms interned so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no atom has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// An iterator over every interned `(atom, name)` pair, in interning order.
    pub fn iter(&self) -> impl Iterator<Item = (Atom, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (i as Atom, name.as_str()))
    }
}
