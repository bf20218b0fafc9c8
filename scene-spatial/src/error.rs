//! Error types for spatial scene operations.
//!
//! All validation is eager: an invalid angle, placement or geometry input is
//! reported before any partial result is produced.

use crate::angles::AngleKind;
use crate::placement::Axis;
use thiserror::Error;

/// Errors raised when validating angles, placements or array geometries.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// An angle value lies outside the closed domain of its convention.
    #[error("{kind} angle out of range: {value} (must be within [{min}, {max}] degrees)")]
    AngleOutOfRange {
        /// The angle convention being checked
        kind: AngleKind,
        /// The offending value in degrees
        value: f64,
        /// Lower domain bound in degrees
        min: f64,
        /// Upper domain bound in degrees
        max: f64,
    },

    /// An angle kind name could not be parsed.
    #[error("unknown angle kind: {name}")]
    UnknownAngleKind {
        /// The unrecognized name
        name: String,
    },

    /// A placement range did not have exactly two elements.
    #[error("placement range must have exactly two elements, got {len}")]
    MalformedRange {
        /// Number of elements supplied
        len: usize,
    },

    /// An explicit placement coordinate was negative.
    #[error("negative {axis} coordinate: {value}")]
    NegativeCoordinate {
        /// Axis the coordinate belongs to
        axis: Axis,
        /// The offending coordinate
        value: f64,
    },

    /// The wall margin was negative.
    #[error("negative wall margin: {margin}")]
    NegativeMargin {
        /// The offending margin
        margin: f64,
    },

    /// The object radius was negative.
    #[error("negative object radius: {radius}")]
    NegativeRadius {
        /// The offending radius
        radius: f64,
    },

    /// Constraints left no valid interval along an axis.
    #[error("empty placement range for {axis} axis: [{min}, {max}]")]
    InvertedRange {
        /// Axis whose resolved range inverted
        axis: Axis,
        /// Resolved lower bound
        min: f64,
        /// Resolved upper bound
        max: f64,
    },

    /// A room extent was zero or negative.
    #[error("room extent along {axis} must be positive, got {value}")]
    InvalidRoomDimension {
        /// Axis of the offending extent
        axis: Axis,
        /// The offending extent
        value: f64,
    },

    /// A microphone array was created without any positions.
    #[error("microphone array must contain at least one position")]
    EmptyArray,

    /// Microphone positions were not an N x 3 array.
    #[error("microphone positions must be N x 3, got {rows} x {cols}")]
    InvalidPositionsShape {
        /// Number of rows supplied
        rows: usize,
        /// Number of columns supplied
        cols: usize,
    },
}

/// A specialized `Result` type for spatial validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

impl ValidationError {
    /// Returns `true` if this is an angle-domain error.
    pub fn is_angle_error(&self) -> bool {
        matches!(
            self,
            ValidationError::AngleOutOfRange { .. } | ValidationError::UnknownAngleKind { .. }
        )
    }

    /// Returns `true` if this is a placement-constraint error.
    pub fn is_placement_error(&self) -> bool {
        matches!(
            self,
            ValidationError::MalformedRange { .. }
                | ValidationError::NegativeCoordinate { .. }
                | ValidationError::NegativeMargin { .. }
                | ValidationError::NegativeRadius { .. }
                | ValidationError::InvertedRange { .. }
                | ValidationError::InvalidRoomDimension { .. }
        )
    }

    /// Returns `true` if this is an array-geometry error.
    pub fn is_geometry_error(&self) -> bool {
        matches!(
            self,
            ValidationError::EmptyArray | ValidationError::InvalidPositionsShape { .. }
        )
    }
}
