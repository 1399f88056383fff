//! Rigid-body rotation transforms for molecules.
//!
//! This module provides axis rotations over all atom coordinates of a molecule. Every
//! rotation goes through [`Molecule::transform_positions`], which refreshes the bond
//! geometry snapshots before returning, so a rotated molecule is always consistent when
//! it reaches the sort and render stages.

use crate::model::molecule::Molecule;
use nalgebra::{Rotation3, Vector3};

/// Number of frames produced per axis by [`Transform::spin`].
pub const SPIN_FRAMES: usize = 72;

/// Angle step between consecutive spin frames, in degrees.
pub const SPIN_STEP_DEGREES: f64 = 5.0;

/// Collection of rotation operations over molecules.
///
/// The `Transform` type groups static methods that mutate molecule coordinates in place
/// using standard right-handed rotation matrices.
pub struct Transform;

impl Transform {
    /// Rotates the molecule about the x-axis by the specified angle.
    ///
    /// # Arguments
    ///
    /// * `molecule` - Mutable molecule to be rotated.
    /// * `radians` - Rotation angle in radians.
    pub fn rotate_x(molecule: &mut Molecule, radians: f64) {
        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), radians);
        Self::apply_rotation(molecule, rotation);
    }

    /// Rotates the molecule about the y-axis by the specified angle.
    ///
    /// # Arguments
    ///
    /// * `molecule` - Mutable molecule to be rotated.
    /// * `radians` - Rotation angle in radians.
    pub fn rotate_y(molecule: &mut Molecule, radians: f64) {
        let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), radians);
        Self::apply_rotation(molecule, rotation);
    }

    /// Rotates the molecule about the z-axis by the specified angle.
    ///
    /// # Arguments
    ///
    /// * `molecule` - Mutable molecule to be rotated.
    /// * `radians` - Rotation angle in radians.
    pub fn rotate_z(molecule: &mut Molecule, radians: f64) {
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), radians);
        Self::apply_rotation(molecule, rotation);
    }

    /// Applies the render-time rotation triple: pitch, then yaw, then roll.
    ///
    /// Each axis rotation is applied sequentially and independently, and only when its
    /// angle is non-zero, in the fixed order x-axis, y-axis, z-axis. Bond geometry is
    /// refreshed after every applied rotation.
    ///
    /// # Arguments
    ///
    /// * `molecule` - Mutable molecule to be rotated.
    /// * `pitch` - Rotation about the x-axis in degrees.
    /// * `yaw` - Rotation about the y-axis in degrees.
    /// * `roll` - Rotation about the z-axis in degrees.
    pub fn rotate(molecule: &mut Molecule, pitch: f64, yaw: f64, roll: f64) {
        if pitch != 0.0 {
            Self::rotate_x(molecule, pitch.to_radians());
        }
        if yaw != 0.0 {
            Self::rotate_y(molecule, yaw.to_radians());
        }
        if roll != 0.0 {
            Self::rotate_z(molecule, roll.to_radians());
        }
    }

    /// Produces every 5-degree rotation frame of the molecule about each axis.
    ///
    /// Frame `i` of an axis is a clone of the input rotated by `i * 5` degrees about
    /// that axis and sorted by depth, ready for compositing. The input is not modified.
    pub fn spin(molecule: &Molecule) -> Rotations {
        let mut rotations = Rotations {
            x: Vec::with_capacity(SPIN_FRAMES),
            y: Vec::with_capacity(SPIN_FRAMES),
            z: Vec::with_capacity(SPIN_FRAMES),
        };

        for i in 0..SPIN_FRAMES {
            let radians = (i as f64 * SPIN_STEP_DEGREES).to_radians();

            let mut frame = molecule.clone();
            Self::rotate_x(&mut frame, radians);
            frame.sort_by_z();
            rotations.x.push(frame);

            let mut frame = molecule.clone();
            Self::rotate_y(&mut frame, radians);
            frame.sort_by_z();
            rotations.y.push(frame);

            let mut frame = molecule.clone();
            Self::rotate_z(&mut frame, radians);
            frame.sort_by_z();
            rotations.z.push(frame);
        }

        rotations
    }

    fn apply_rotation(molecule: &mut Molecule, rotation: Rotation3<f64>) {
        molecule.transform_positions(|pos| rotation * *pos);
    }
}

/// Depth-sorted rotation frames of one molecule, one sequence per axis.
#[derive(Debug, Clone)]
pub struct Rotations {
    /// Frames rotated about the x-axis, 5 degrees apart.
    pub x: Vec<Molecule>,
    /// Frames rotated about the y-axis, 5 degrees apart.
    pub y: Vec<Molecule>,
    /// Frames rotated about the z-axis, 5 degrees apart.
    pub z: Vec<Molecule>,
}

#[cfg(test)]
mod tests {
    use super::{Rotations, SPIN_FRAMES, Transform};
    use crate::model::molecule::Molecule;
    use crate::model::types::Point;

    fn molecule_with_points(points: &[(f64, f64, f64)]) -> Molecule {
        let mut molecule = Molecule::new();
        for &(x, y, z) in points {
            molecule.append_atom("C", x, y, z);
        }
        molecule
    }

    fn assert_point_close(actual: &Point, expected: &Point) {
        assert!((actual.x - expected.x).abs() < 1e-6);
        assert!((actual.y - expected.y).abs() < 1e-6);
        assert!((actual.z - expected.z).abs() < 1e-6);
    }

    #[test]
    fn rotate_z_rotates_atoms_about_origin() {
        let mut molecule = molecule_with_points(&[(1.0, 0.0, 0.0), (0.0, 2.0, 0.0)]);

        Transform::rotate_z(&mut molecule, std::f64::consts::FRAC_PI_2);

        assert_point_close(&molecule.atoms()[0].pos, &Point::new(0.0, 1.0, 0.0));
        assert_point_close(&molecule.atoms()[1].pos, &Point::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn rotate_x_rotates_atoms_about_origin() {
        let mut molecule = molecule_with_points(&[(0.0, 1.0, 0.0)]);

        Transform::rotate_x(&mut molecule, std::f64::consts::FRAC_PI_2);

        assert_point_close(&molecule.atoms()[0].pos, &Point::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn rotate_y_rotates_atoms_about_origin() {
        let mut molecule = molecule_with_points(&[(0.0, 0.0, 1.0)]);

        Transform::rotate_y(&mut molecule, std::f64::consts::FRAC_PI_2);

        assert_point_close(&molecule.atoms()[0].pos, &Point::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn zero_angle_rotation_is_identity() {
        let mut molecule = molecule_with_points(&[(1.25, -2.5, 3.75), (0.5, 0.5, 0.5)]);
        molecule.append_bond(0, 1, 2).unwrap();
        let before = molecule.clone();

        Transform::rotate(&mut molecule, 0.0, 0.0, 0.0);

        assert_eq!(molecule.atoms(), before.atoms());
        assert_eq!(molecule.bonds(), before.bonds());
    }

    #[test]
    fn rotation_followed_by_its_negative_restores_coordinates() {
        let mut molecule = molecule_with_points(&[(1.0, 2.0, 3.0), (-0.5, 4.0, -1.5)]);
        molecule.append_bond(0, 1, 1).unwrap();
        let before = molecule.clone();

        Transform::rotate(&mut molecule, 37.0, 0.0, 0.0);
        Transform::rotate(&mut molecule, -37.0, 0.0, 0.0);

        for (restored, original) in molecule.atoms().iter().zip(before.atoms()) {
            assert_point_close(&restored.pos, &original.pos);
        }
    }

    #[test]
    fn bond_snapshots_stay_coherent_across_rotation_sequences() {
        let mut molecule = molecule_with_points(&[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0), (2.0, 0.0, -1.0)]);
        molecule.append_bond(0, 1, 1).unwrap();
        molecule.append_bond(1, 2, 2).unwrap();

        for (pitch, yaw, roll) in [(45.0, 0.0, 0.0), (0.0, 30.0, 60.0), (10.0, 20.0, 30.0)] {
            Transform::rotate(&mut molecule, pitch, yaw, roll);

            for bond in molecule.bonds() {
                // Snapshot equality is exact: refresh recomputes from the same values.
                assert_eq!(bond.geometry().from, molecule.atoms()[bond.a1].pos);
                assert_eq!(bond.geometry().to, molecule.atoms()[bond.a2].pos);
            }
        }
    }

    #[test]
    fn rotation_order_is_pitch_then_yaw_then_roll() {
        let mut sequential = molecule_with_points(&[(1.0, 2.0, 3.0)]);
        Transform::rotate(&mut sequential, 90.0, 90.0, 0.0);

        let mut manual = molecule_with_points(&[(1.0, 2.0, 3.0)]);
        Transform::rotate_x(&mut manual, std::f64::consts::FRAC_PI_2);
        Transform::rotate_y(&mut manual, std::f64::consts::FRAC_PI_2);

        assert_point_close(&sequential.atoms()[0].pos, &manual.atoms()[0].pos);
    }

    #[test]
    fn spin_produces_72_sorted_frames_per_axis() {
        let mut molecule = molecule_with_points(&[(0.0, 1.0, 2.0), (1.0, 0.0, -2.0)]);
        molecule.append_bond(0, 1, 1).unwrap();

        let Rotations { x, y, z } = Transform::spin(&molecule);

        assert_eq!(x.len(), SPIN_FRAMES);
        assert_eq!(y.len(), SPIN_FRAMES);
        assert_eq!(z.len(), SPIN_FRAMES);
        for frames in [&x, &y, &z] {
            for frame in frames.iter() {
                let zs: Vec<f64> = frame.atoms().iter().map(|a| a.z()).collect();
                assert!(zs.windows(2).all(|w| w[0] <= w[1]));
            }
        }
        // Frame zero is the unrotated molecule in depth order.
        let mut sorted = molecule.clone();
        sorted.sort_by_z();
        assert_eq!(x[0].atoms(), sorted.atoms());
    }
}
