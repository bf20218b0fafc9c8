//! Rigid microphone-array geometry.

use crate::angles::wrap_to_180;
use crate::error::{Result, ValidationError};
use crate::orientation::Orientation;
use crate::rotation::rotation_matrix;
use ndarray::{Array1, Array2, Axis};

/// A rigid set of microphone positions in world coordinates.
///
/// Positions are an N x 3 array of meters. The centroid (`center`), the
/// centroid-relative offsets (`centered_positions`) and the array `radius`
/// (largest center-to-microphone distance, i.e. half the array span) are
/// derived on construction and kept consistent by every mutation.
///
/// `translate` mutates in place; `new_rotated_array` returns an independent
/// copy and leaves the original untouched, so callers may rotate copies of
/// the same base geometry concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayGeometry {
    positions: Array2<f64>,
    center: Array1<f64>,
    centered_positions: Array2<f64>,
    radius: f64,
}

impl ArrayGeometry {
    /// Create an array geometry from world-coordinate positions (N x 3).
    pub fn new(positions: Array2<f64>) -> Result<Self> {
        if positions.nrows() == 0 {
            return Err(ValidationError::EmptyArray);
        }
        if positions.ncols() != 3 {
            return Err(ValidationError::InvalidPositionsShape {
                rows: positions.nrows(),
                cols: positions.ncols(),
            });
        }

        let center = positions.sum_axis(Axis(0)) / positions.nrows() as f64;
        let centered_positions = &positions - &center;
        let radius = max_radius(&centered_positions);

        Ok(Self {
            positions,
            center,
            centered_positions,
            radius,
        })
    }

    /// Microphone positions in world coordinates (N x 3).
    pub fn positions(&self) -> &Array2<f64> {
        &self.positions
    }

    /// Centroid of the microphone positions.
    pub fn center(&self) -> &Array1<f64> {
        &self.center
    }

    /// Positions relative to the centroid (N x 3), invariant under translation.
    pub fn centered_positions(&self) -> &Array2<f64> {
        &self.centered_positions
    }

    /// Largest distance from the center to any microphone.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of microphones.
    pub fn num_mics(&self) -> usize {
        self.positions.nrows()
    }

    /// Move the array so its center sits at `to` (3 elements).
    ///
    /// Centered positions and radius are unchanged; world positions become
    /// `centered_positions + to`.
    pub fn translate(&mut self, to: &Array1<f64>) {
        self.positions = &self.centered_positions + to;
        self.center = to.clone();
    }

    /// Return a new array rotated about its center, leaving `self` unchanged.
    ///
    /// The centered positions are rotated by the composed yaw/pitch/roll
    /// matrix (yaw applied first); the center is preserved. The returned
    /// geometry shares no storage with the original.
    pub fn new_rotated_array(&self, orientation: &Orientation) -> ArrayGeometry {
        let rot = rotation_matrix(orientation);
        // row vectors: v' = v · R^T
        let centered_positions = self.centered_positions.dot(&rot.t());
        let positions = &centered_positions + &self.center;
        let radius = max_radius(&centered_positions);

        ArrayGeometry {
            positions,
            center: self.center.clone(),
            centered_positions,
            radius,
        }
    }

    /// Spherical coordinates of a world point relative to the array center.
    ///
    /// Returns `(distance, azimuth, elevation)` with angles in degrees:
    /// azimuth is measured in the x-y plane with 0 straight ahead on +x and
    /// wrapped to [-180, 180); elevation is positive above the horizontal
    /// plane. `point` must have 3 elements.
    pub fn spherical_relative_to_array(&self, point: &Array1<f64>) -> (f64, f64, f64) {
        let direction = point - &self.center;
        let (dx, dy, dz) = (direction[0], direction[1], direction[2]);

        let distance = direction.dot(&direction).sqrt();
        let azimuth = wrap_to_180(dy.atan2(dx).to_degrees());
        let elevation = dz.atan2((dx * dx + dy * dy).sqrt()).to_degrees();

        (distance, azimuth, elevation)
    }
}

fn max_radius(centered_positions: &Array2<f64>) -> f64 {
    centered_positions
        .axis_iter(Axis(0))
        .map(|row| row.dot(&row).sqrt())
        .fold(0.0, f64::max)
}
