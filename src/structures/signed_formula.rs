/*!
The signed formula: the atomic unit flowing through the tableau engine.
*/

use crate::structures::atom::AtomTable;
use crate::structures::connective::ConnectiveTable;
use crate::structures::formula::Formula;
use crate::structures::sign::Sign;

/// A formula paired with a sign asserting its semantic status on a branch.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignedFormula {
    pub sign: Sign,
    pub formula: Formula,
}

impl SignedFormula {
    pub fn new(sign: Sign, formula: Formula) -> Self {
        SignedFormula { sign, formula }
    }

    /// Renders `sign:formula`. Takes the tables explicitly, as [Formula] alone does
    /// not carry enough context to print atom names or connective fixity.
    pub fn render(&self, atoms: &AtomTable, connectives: &ConnectiveTable) -> String {
        format!("{}:{}", self.sign, self.formula.display(atoms, connectives))
    }
}
