//! SVG document emission for depth-sorted molecules.
//!
//! The emitter walks the compositor's draw sequence and writes one primitive per
//! directive: a gradient-filled disk per atom and a filled quadrilateral per bond. The
//! projection is orthographic: x/y are scaled and offset onto the canvas, and z only ever
//! influenced the draw order. All layout constants are fixed configuration.

use crate::model::atom::Atom;
use crate::model::bond::Bond;
use crate::model::molecule::Molecule;
use crate::model::types::PlanePoint;
use crate::render::compositor::{composite, DrawOp};
use crate::render::style::{ElementStyle, StyleSheet, DEFAULT_GROUP, DEFAULT_STOPS};

/// Multiplier from model coordinates to document units.
pub const SCALE: f64 = 100.0;

/// Horizontal canvas offset in document units.
pub const OFFSET_X: f64 = 500.0;

/// Vertical canvas offset in document units.
pub const OFFSET_Y: f64 = 500.0;

/// Half-thickness of a rendered bond in document units.
pub const BOND_THICKNESS: f64 = 10.0;

/// Square canvas edge length in document units.
const CANVAS_SIZE: u32 = 1000;

/// Fill applied to every bond polygon.
const BOND_FILL: &str = "green";

const FOOTER: &str = "</svg>\n";

/// Renders the molecule as a complete SVG document.
///
/// The molecule must already be depth-sorted (see [`Molecule::sort_by_z`]). The header
/// carries one radial-gradient definition per style entry plus the default, the body one
/// primitive per compositor directive, and the footer closes the document.
pub fn render_molecule(molecule: &Molecule, styles: &StyleSheet) -> String {
    let ops = composite(molecule);

    let mut document = document_header(styles);
    for op in &ops {
        match op {
            DrawOp::Atom(atom) => document.push_str(&atom_svg(atom, styles)),
            DrawOp::Bond(bond) => document.push_str(&bond_svg(bond)),
        }
    }
    document.push_str(FOOTER);

    log::debug!(
        "rendered {} draw directives into a {} byte document",
        ops.len(),
        document.len()
    );

    document
}

/// Drawing primitive for one atom: a filled disk at the projected position.
///
/// Radius and fill resolve through the style sheet, falling back to the default entry
/// for unknown element codes.
pub fn atom_svg(atom: &Atom, styles: &StyleSheet) -> String {
    let center = project(atom.pos.x, atom.pos.y);
    let style = styles.resolve(&atom.element);

    format!(
        "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"url(#{})\"/>\n",
        center.x, center.y, style.radius, style.color_group
    )
}

/// Drawing primitive for one bond: a filled quadrilateral with visual thickness.
///
/// Each projected endpoint is offset by the cached perpendicular of the bond scaled by
/// the thickness constant, yielding the corners near-left, near-right, far-right,
/// far-left in winding order.
pub fn bond_svg(bond: &Bond) -> String {
    let geometry = bond.geometry();
    let near = project(geometry.from.x, geometry.from.y);
    let far = project(geometry.to.x, geometry.to.y);

    let offset_x = geometry.dy * BOND_THICKNESS;
    let offset_y = geometry.dx * BOND_THICKNESS;

    let near_left = PlanePoint::new(near.x + offset_x, near.y - offset_y);
    let near_right = PlanePoint::new(near.x - offset_x, near.y + offset_y);
    let far_right = PlanePoint::new(far.x - offset_x, far.y + offset_y);
    let far_left = PlanePoint::new(far.x + offset_x, far.y - offset_y);

    format!(
        "  <polygon points=\"{:.2},{:.2} {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}\" fill=\"{}\"/>\n",
        near_left.x,
        near_left.y,
        near_right.x,
        near_right.y,
        far_right.x,
        far_right.y,
        far_left.x,
        far_left.y,
        BOND_FILL
    )
}

fn project(x: f64, y: f64) -> PlanePoint {
    PlanePoint::new(x * SCALE + OFFSET_X, y * SCALE + OFFSET_Y)
}

fn document_header(styles: &StyleSheet) -> String {
    let mut header = format!(
        "<svg version=\"1.1\" width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        CANVAS_SIZE, CANVAS_SIZE
    );

    header.push_str(&radial_gradient(
        DEFAULT_GROUP,
        DEFAULT_STOPS[0],
        DEFAULT_STOPS[1],
        DEFAULT_STOPS[2],
    ));
    for (_, style) in styles.entries_sorted() {
        header.push_str(&gradient_for(style));
    }

    header
}

fn gradient_for(style: &ElementStyle) -> String {
    radial_gradient(
        &style.color_group,
        &style.stops[0],
        &style.stops[1],
        &style.stops[2],
    )
}

fn radial_gradient(id: &str, stop0: &str, stop1: &str, stop2: &str) -> String {
    format!(
        concat!(
            "  <radialGradient id=\"{}\" cx=\"-50%\" cy=\"-50%\" r=\"220%\" fx=\"20%\" fy=\"20%\">\n",
            "    <stop offset=\"0%\" stop-color=\"#{}\"/>\n",
            "    <stop offset=\"50%\" stop-color=\"#{}\"/>\n",
            "    <stop offset=\"100%\" stop-color=\"#{}\"/>\n",
            "  </radialGradient>\n"
        ),
        id, stop0, stop1, stop2
    )
}
