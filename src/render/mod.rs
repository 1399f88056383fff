mod compositor;
mod style;
mod svg;

pub use compositor::{composite, DrawOp};
pub use style::{ElementStyle, StyleSheet, DEFAULT_GROUP, DEFAULT_RADIUS, DEFAULT_STOPS};
pub use svg::{atom_svg, bond_svg, render_molecule, BOND_THICKNESS, OFFSET_X, OFFSET_Y, SCALE};
