//! # molsvg
//!
//! **molsvg** is a pure-Rust rendering engine that ingests small-molecule structure files and emits deterministic, depth-ordered 2-D vector drawings. The crate favors explicit data flow, strong typing, and clean error surfaces so the surrounding service can treat parse → transform → sort → composite → emit as one auditable pipeline.
//!
//! ## Features
//!
//! - **Ergonomic molecule model** – Lightweight [`Atom`], [`Bond`], and [`Molecule`] types backed by `nalgebra` own the atom/bond sequences and keep every bond's cached render geometry consistent with the atom positions it derives from.
//! - **Structure-file parsing** – A buffered reader for the line-indexed structure format with a single unified malformed-input error and no partial results.
//! - **Rigid-body transforms** – Axis rotations under `ops` built on `nalgebra::Rotation3`, with bond geometry refreshed after every applied matrix.
//! - **Deterministic compositing** – A two-pointer depth merge under `render` whose tie-break and ordering contract the SVG emitter relies on.
//! - **Value-passed styling** – Element style sheets are TOML-loadable values threaded into each render call; nothing styling-related lives in process-global state.

mod model;

pub mod io;
pub mod ops;
pub mod render;

pub use model::atom::Atom;
pub use model::bond::{Bond, BondGeometry};
pub use model::error::Error as ModelError;
pub use model::molecule::Molecule;
pub use model::types::{PlanePoint, Point};

pub use ops::{Rotations, Transform};

pub use render::{render_molecule, DrawOp, ElementStyle, StyleSheet};
