//! Right-handed 3-D rotation matrices from angles in degrees.
//!
//! The composed rotation applies yaw about z first, then pitch about y, then
//! roll about x: `R = Rx(roll) · Ry(pitch) · Rz(yaw)`. The order is fixed;
//! callers needing a different composition can multiply the individual
//! factors themselves.

use crate::orientation::Orientation;
use ndarray::{array, Array2};

/// Rotation about the z axis (yaw). At 90 degrees: (x, y, z) -> (-y, x, z).
pub fn yaw_matrix(yaw: f64) -> Array2<f64> {
    let (sin, cos) = yaw.to_radians().sin_cos();
    array![[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]]
}

/// Rotation about the y axis (pitch). At 90 degrees: (x, y, z) -> (z, y, -x).
pub fn pitch_matrix(pitch: f64) -> Array2<f64> {
    let (sin, cos) = pitch.to_radians().sin_cos();
    array![[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]]
}

/// Rotation about the x axis (roll). At 90 degrees: (x, y, z) -> (x, -z, y).
pub fn roll_matrix(roll: f64) -> Array2<f64> {
    let (sin, cos) = roll.to_radians().sin_cos();
    array![[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]]
}

/// Composed rotation matrix for an orientation, yaw applied first.
pub fn rotation_matrix(orientation: &Orientation) -> Array2<f64> {
    roll_matrix(orientation.roll)
        .dot(&pitch_matrix(orientation.pitch))
        .dot(&yaw_matrix(orientation.yaw))
}
