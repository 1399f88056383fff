//! Depth-ordered merge of atoms and bonds into a single draw sequence.

use crate::model::atom::Atom;
use crate::model::bond::Bond;
use crate::model::molecule::Molecule;

/// One directive of the painter's-algorithm draw sequence.
#[derive(Debug, Clone, Copy)]
pub enum DrawOp<'a> {
    Atom(&'a Atom),
    Bond(&'a Bond),
}

impl DrawOp<'_> {
    /// Depth coordinate the directive was ordered by.
    pub fn z(&self) -> f64 {
        match self {
            DrawOp::Atom(atom) => atom.z(),
            DrawOp::Bond(bond) => bond.z(),
        }
    }
}

/// Merges the molecule's atom and bond sequences into one ascending-z draw order.
///
/// Precondition: both sequences are already ascending by z (see
/// [`Molecule::sort_by_z`]); this function never sorts. The merge is the classic
/// two-pointer walk, and when an atom and a bond share exactly the same depth the bond is
/// emitted first so the atom disk is painted over it. The non-decreasing z order of the
/// result is the sole contract the emitter relies on.
pub fn composite(molecule: &Molecule) -> Vec<DrawOp<'_>> {
    let atoms = molecule.atoms();
    let bonds = molecule.bonds();

    let mut ops = Vec::with_capacity(atoms.len() + bonds.len());
    let mut ai = 0;
    let mut bi = 0;

    while ai < atoms.len() && bi < bonds.len() {
        if atoms[ai].z() < bonds[bi].z() {
            ops.push(DrawOp::Atom(&atoms[ai]));
            ai += 1;
        } else {
            ops.push(DrawOp::Bond(&bonds[bi]));
            bi += 1;
        }
    }

    ops.extend(atoms[ai..].iter().map(DrawOp::Atom));
    ops.extend(bonds[bi..].iter().map(DrawOp::Bond));
    ops
}
