//! Edge entity connecting two atoms, carrying a cached geometric snapshot for rendering.
//!
//! A bond references its endpoints by index into the owning molecule's atom sequence and
//! stores a [`BondGeometry`] derived from the endpoint positions at creation time. The
//! snapshot must always equal a pure function of the referenced atoms' current positions;
//! [`crate::Molecule`] refreshes it whenever atom positions change.

use super::atom::Atom;
use super::types::Point;
use std::fmt;

/// Derived render geometry of a bond, recomputed whenever atom positions change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondGeometry {
    /// Position of the first endpoint at snapshot time.
    pub from: Point,
    /// Position of the second endpoint at snapshot time.
    pub to: Point,
    /// Representative depth: midpoint of the endpoint z coordinates.
    pub z: f64,
    /// Length of the bond projected onto the x/y plane.
    pub len: f64,
    /// Unit direction of the projected bond, x component.
    pub dx: f64,
    /// Unit direction of the projected bond, y component.
    pub dy: f64,
}

impl BondGeometry {
    /// Computes the snapshot for the bond between two atoms.
    ///
    /// The perpendicular basis (`dx`, `dy`) is the projected direction normalized by the
    /// planar length. When both endpoints project onto the same x/y point the direction is
    /// undefined; the snapshot then stores a zero length and a zero basis so the rendered
    /// polygon collapses instead of propagating non-finite values.
    pub fn between(a: &Atom, b: &Atom) -> Self {
        let from = a.pos;
        let to = b.pos;
        let z = (from.z + to.z) / 2.0;
        let len = (to.x - from.x).hypot(to.y - from.y);
        let (dx, dy) = if len > 0.0 {
            ((to.x - from.x) / len, (to.y - from.y) / len)
        } else {
            (0.0, 0.0)
        };

        Self {
            from,
            to,
            z,
            len,
            dx,
            dy,
        }
    }
}

/// Covalent bond between two atoms of the owning molecule.
///
/// Endpoint order is preserved as given; it determines the winding of the emitted
/// polygon. The geometry snapshot is private so it can only be produced from atom
/// positions, never patched independently of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    /// Index of the first endpoint atom.
    pub a1: usize,
    /// Index of the second endpoint atom.
    pub a2: usize,
    /// Number of electron pairs in the bond.
    pub epairs: u8,
    geometry: BondGeometry,
}

impl Bond {
    /// Creates a bond and its initial geometry snapshot.
    ///
    /// Callers are expected to pass the atoms that `a1`/`a2` reference; the molecule
    /// store is the only constructor site and guarantees this.
    pub(crate) fn new(a1: usize, a2: usize, epairs: u8, first: &Atom, second: &Atom) -> Self {
        Self {
            a1,
            a2,
            epairs,
            geometry: BondGeometry::between(first, second),
        }
    }

    /// Read access to the cached geometry snapshot.
    pub fn geometry(&self) -> &BondGeometry {
        &self.geometry
    }

    /// Representative depth coordinate used for draw ordering.
    pub fn z(&self) -> f64 {
        self.geometry.z
    }

    /// Recomputes the snapshot from the current endpoint positions.
    pub(crate) fn refresh(&mut self, first: &Atom, second: &Atom) {
        self.geometry = BondGeometry::between(first, second);
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bond {{ a1: {}, a2: {}, epairs: {}, z: {:.4}, len: {:.4} }}",
            self.a1, self.a2, self.epairs, self.geometry.z, self.geometry.len
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(element: &str, x: f64, y: f64, z: f64) -> Atom {
        Atom::new(element, Point::new(x, y, z))
    }

    #[test]
    fn geometry_captures_endpoints_and_midpoint_depth() {
        let a = atom("C", 0.0, 0.0, 1.0);
        let b = atom("O", 3.0, 4.0, 3.0);

        let geometry = BondGeometry::between(&a, &b);

        assert_eq!(geometry.from, a.pos);
        assert_eq!(geometry.to, b.pos);
        assert!((geometry.z - 2.0).abs() < 1e-12);
    }

    #[test]
    fn geometry_length_is_planar_only() {
        // Endpoints differ in z as well, but len must come from x/y alone.
        let a = atom("C", 0.0, 0.0, 0.0);
        let b = atom("C", 3.0, 4.0, 7.0);

        let geometry = BondGeometry::between(&a, &b);

        assert!((geometry.len - 5.0).abs() < 1e-12);
        assert!((geometry.dx - 0.6).abs() < 1e-12);
        assert!((geometry.dy - 0.8).abs() < 1e-12);
    }

    #[test]
    fn geometry_direction_is_unit_length() {
        let a = atom("N", -1.5, 2.0, 0.0);
        let b = atom("H", 4.0, -3.25, 0.0);

        let geometry = BondGeometry::between(&a, &b);

        let norm = geometry.dx.hypot(geometry.dy);
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn geometry_of_vertically_stacked_atoms_is_degenerate() {
        let a = atom("C", 1.0, 2.0, 0.0);
        let b = atom("C", 1.0, 2.0, 5.0);

        let geometry = BondGeometry::between(&a, &b);

        assert_eq!(geometry.len, 0.0);
        assert_eq!(geometry.dx, 0.0);
        assert_eq!(geometry.dy, 0.0);
        assert!((geometry.z - 2.5).abs() < 1e-12);
    }

    #[test]
    fn bond_refresh_tracks_moved_atoms() {
        let a = atom("C", 0.0, 0.0, 0.0);
        let b = atom("C", 1.0, 0.0, 0.0);
        let mut bond = Bond::new(0, 1, 1, &a, &b);

        let moved = atom("C", 1.0, 1.0, 4.0);
        bond.refresh(&a, &moved);

        assert_eq!(bond.geometry().to, moved.pos);
        assert!((bond.z() - 2.0).abs() < 1e-12);
    }
}
