//! Fundamental atom representation comprising an element code and a Cartesian position.
//!
//! This module defines the smallest structural unit used throughout `molsvg`. Atoms are
//! instantiated by the structure-file reader, rotated by the transform engine, and turned
//! into disks by the SVG emitter. The element code is kept as a short string rather than a
//! closed enum because downstream styling must also resolve codes it has never seen.

use super::types::Point;
use smol_str::SmolStr;
use std::fmt;

/// Point entity with an element code and a mutable position.
///
/// An atom's identity is its index in the owning molecule's atom sequence; the struct
/// itself carries no id. Keeping the element code next to the coordinate lets the emitter
/// resolve per-element styling without a side lookup structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Element code as it appears in the source file (e.g. `C`, `Cl`).
    pub element: SmolStr,
    /// Cartesian coordinates measured in ångströms.
    pub pos: Point,
}

impl Atom {
    /// Creates a new atom from an element code and a position.
    ///
    /// The code is stored as-is; no periodic-table validation is performed. The position
    /// is copied without normalization.
    ///
    /// # Arguments
    ///
    /// * `element` - Element code such as `"C"` or `"Cl"`.
    /// * `pos` - `Point` describing the Cartesian coordinates in ångströms.
    ///
    /// # Returns
    ///
    /// A fully initialized `Atom` instance.
    pub fn new(element: &str, pos: Point) -> Self {
        Self {
            element: SmolStr::new(element),
            pos,
        }
    }

    /// Depth coordinate used for draw ordering.
    pub fn z(&self) -> f64 {
        self.pos.z
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Atom {{ element: \"{}\", pos: [{:.4}, {:.4}, {:.4}] }}",
            self.element, self.pos.x, self.pos.y, self.pos.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atom_new_creates_correct_atom() {
        let pos = Point::new(1.0, 2.0, 3.0);
        let atom = Atom::new("C", pos);

        assert_eq!(atom.element, "C");
        assert_eq!(atom.pos, pos);
    }

    #[test]
    fn atom_keeps_unrecognized_element_codes() {
        let atom = Atom::new("Xx", Point::new(0.0, 0.0, 0.0));

        assert_eq!(atom.element, "Xx");
    }

    #[test]
    fn atom_z_returns_depth_coordinate() {
        let atom = Atom::new("O", Point::new(1.5, -2.5, 4.25));

        assert!((atom.z() - 4.25).abs() < 1e-12);
    }

    #[test]
    fn atom_display_formats_correctly() {
        let atom = Atom::new("N", Point::new(1.2345, -5.6789, 9.0));

        let display = format!("{}", atom);
        let expected = "Atom { element: \"N\", pos: [1.2345, -5.6789, 9.0000] }";

        assert_eq!(display, expected);
    }

    #[test]
    fn atom_clone_creates_identical_copy() {
        let atom = Atom::new("S", Point::new(7.89, -1.23, 4.56));
        let cloned = atom.clone();

        assert_eq!(atom, cloned);
    }
}
