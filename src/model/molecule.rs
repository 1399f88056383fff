//! Owning store for the atom and bond sequences of one molecule.
//!
//! The molecule is the unit the whole pipeline operates on: the reader appends into it,
//! the transform engine moves its coordinates, `sort_by_z` establishes draw order, and the
//! compositor walks the sorted sequences. Bond geometry snapshots are refreshed inside
//! every position-mutating operation, so no public call sequence can observe a stale
//! snapshot.

use super::atom::Atom;
use super::bond::Bond;
use super::error::Error;
use super::types::Point;

/// Ordered atom and bond collections with exclusive ownership.
///
/// Atom identity is the index in the atom sequence. `sort_by_z` permutes the sequence but
/// rewrites every bond's endpoint indices through the same permutation, so a bond keeps
/// referring to the same two atoms across sorts.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl Molecule {
    /// Creates an empty molecule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an atom and returns its index.
    ///
    /// Always succeeds; the store grows as needed.
    pub fn append_atom(&mut self, element: &str, x: f64, y: f64, z: f64) -> usize {
        self.atoms.push(Atom::new(element, Point::new(x, y, z)));
        self.atoms.len() - 1
    }

    /// Appends a bond between two existing atoms and returns its index.
    ///
    /// The geometry snapshot is computed from the current endpoint positions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReference`] when either index does not refer to an
    /// existing atom.
    pub fn append_bond(&mut self, a1: usize, a2: usize, epairs: u8) -> Result<usize, Error> {
        let atom_count = self.atoms.len();
        if a1 >= atom_count {
            return Err(Error::invalid_reference(a1, atom_count));
        }
        if a2 >= atom_count {
            return Err(Error::invalid_reference(a2, atom_count));
        }

        let bond = Bond::new(a1, a2, epairs, &self.atoms[a1], &self.atoms[a2]);
        self.bonds.push(bond);
        Ok(self.bonds.len() - 1)
    }

    /// Bounds-checked read access to an atom.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] outside the half-open valid range.
    pub fn atom(&self, index: usize) -> Result<&Atom, Error> {
        self.atoms
            .get(index)
            .ok_or_else(|| Error::index_out_of_range("atom", index, self.atoms.len()))
    }

    /// Bounds-checked read access to a bond.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] outside the half-open valid range.
    pub fn bond(&self, index: usize) -> Result<&Bond, Error> {
        self.bonds
            .get(index)
            .ok_or_else(|| Error::index_out_of_range("bond", index, self.bonds.len()))
    }

    /// The atom sequence in its current order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// The bond sequence in its current order.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty() && self.bonds.is_empty()
    }

    /// Applies a position map to every atom, then refreshes every bond snapshot.
    ///
    /// This is the only public way to move atoms, which makes stale bond geometry
    /// structurally impossible: the snapshots are recomputed before the call returns.
    pub fn transform_positions<F>(&mut self, f: F)
    where
        F: Fn(&Point) -> Point,
    {
        for atom in &mut self.atoms {
            atom.pos = f(&atom.pos);
        }
        self.refresh_bond_geometry();
    }

    /// Stably reorders atoms ascending by z and bonds ascending by representative z.
    ///
    /// Bond endpoint indices are rewritten through the atom permutation, so every bond
    /// still references the same two atoms afterwards. Both sequences being ascending is
    /// the compositor's precondition; the compositor itself never sorts.
    pub fn sort_by_z(&mut self) {
        let mut order: Vec<usize> = (0..self.atoms.len()).collect();
        order.sort_by(|&i, &j| self.atoms[i].pos.z.total_cmp(&self.atoms[j].pos.z));

        let mut new_index = vec![0usize; order.len()];
        for (new, &old) in order.iter().enumerate() {
            new_index[old] = new;
        }

        let mut sorted = Vec::with_capacity(self.atoms.len());
        for &old in &order {
            sorted.push(self.atoms[old].clone());
        }
        self.atoms = sorted;

        for bond in &mut self.bonds {
            bond.a1 = new_index[bond.a1];
            bond.a2 = new_index[bond.a2];
        }
        self.bonds.sort_by(|a, b| a.z().total_cmp(&b.z()));
    }

    fn refresh_bond_geometry(&mut self) {
        let atoms = &self.atoms;
        for bond in &mut self.bonds {
            bond.refresh(&atoms[bond.a1], &atoms[bond.a2]);
        }
    }
}
