/*!
A single branch of a tableau: an ordered list of signed formulas together with
the index used for O(1) amortised closure checks.
*/

use std::collections::{HashMap, HashSet};

use crate::structures::formula::Formula;
use crate::structures::sign::{Sign, SignSystem};
use crate::structures::signed_formula::SignedFormula;

/// One signed formula on a branch, together with whether it has already been
/// decomposed by the expansion loop.
#[derive(Clone, Debug)]
pub struct BranchEntry {
    pub signed: SignedFormula,
    pub processed: bool,
}

/// A branch of the tableau: the signed formulas asserted on it, in the order they
/// were added, and whether it has closed.
#[derive(Clone, Debug)]
pub struct Branch {
    entries: Vec<BranchEntry>,
    index: HashMap<Formula, HashSet<Sign>>,
    closed: bool,
}

impl Branch {
    /// A fresh branch holding only `seed`.
    pub fn seeded(seed: SignedFormula, sign_system: &SignSystem) -> Self {
        Self::seeded_many(vec![seed], sign_system)
    }

    /// A fresh branch holding every formula in `seeds`, pushed in order. Used to
    /// assert several signed formulas at once (e.g. a set of premises plus a
    /// conclusion) without a combining connective joining them into one formula.
    pub fn seeded_many(seeds: Vec<SignedFormula>, sign_system: &SignSystem) -> Self {
        let mut branch = Branch {
            entries: Vec::new(),
            index: HashMap::new(),
            closed: false,
        };
        for seed in seeds {
            branch.push(seed, sign_system);
        }
        branch
    }

    pub fn entries(&self) -> &[BranchEntry] {
        &self.entries
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_open(&self) -> bool {
        !self.closed
    }

    /// Appends `signed` to the branch, updating the closure index. Atoms are marked
    /// processed immediately: no rule ever decomposes a bare atom.
    pub fn push(&mut self, signed: SignedFormula, sign_system: &SignSystem) {
        let signs = self.index.entry(signed.formula.clone()).or_default();

        if self.closed {
            // Still record the formula (useful for inspection), but there is nothing
            // further to check: the branch is already known unsatisfiable.
            signs.insert(signed.sign.clone());
        } else if signs.iter().any(|existing| sign_system.contradicts(existing, &signed.sign)) {
            signs.insert(signed.sign.clone());
            self.closed = true;
            log::trace!("branch closed on sign {}", signed.sign);
        } else {
            signs.insert(signed.sign.clone());
        }

        let processed = signed.formula.is_atom();
        self.entries.push(BranchEntry { signed, processed });
    }

    pub fn mark_processed(&mut self, index: usize) {
        self.entries[index].processed = true;
    }

    /// Closes the branch directly, without a contradicting pair of entries --- used
    /// when a rule determines the premise sign is unreachable under its connective's
    /// semantics (an empty decomposition), rather than by two entries contradicting.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// The signs asserted of `formula` on this branch.
    pub fn signs_of(&self, formula: &Formula) -> Option<&HashSet<Sign>> {
        self.index.get(formula)
    }

    /// The (sign, formula) pairs on this branch, for subsumption comparisons.
    pub fn formula_signs(&self) -> HashSet<(Sign, Formula)> {
        self.entries
            .iter()
            .map(|entry| (entry.signed.sign.clone(), entry.signed.formula.clone()))
            .collect()
    }

    /// Whether every unprocessed entry on this branch is an atom, i.e. no further
    /// rule application is possible.
    pub fn is_saturated(&self) -> bool {
        self.entries.iter().all(|entry| entry.processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::formula::FormulaArena;

    fn sign_system() -> SignSystem {
        SignSystem::new(
            vec![Sign::new("T"), Sign::new("F")],
            Sign::new("T"),
            vec![Sign::new("T")],
            vec![(Sign::new("T"), Sign::new("F"))],
        )
    }

    #[test]
    fn contradictory_signs_close_the_branch() {
        let system = sign_system();
        let mut arena = FormulaArena::new();
        let p = arena.atom("p");

        let mut branch = Branch::seeded(SignedFormula::new(Sign::new("T"), p.clone()), &system);
        assert!(branch.is_open());

        branch.push(SignedFormula::new(Sign::new("F"), p), &system);
        assert!(branch.is_closed());
    }

    #[test]
    fn atoms_are_marked_processed_on_insertion() {
        let system = sign_system();
        let mut arena = FormulaArena::new();
        let p = arena.atom("p");

        let branch = Branch::seeded(SignedFormula::new(Sign::new("T"), p), &system);
        assert!(branch.is_saturated());
    }
}
