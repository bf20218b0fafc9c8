//! Placement constraints and their resolution into sampling ranges.
//!
//! A placement constrains where an object (a source or a microphone array)
//! may sit inside a room: each axis is either free, pinned to a coordinate,
//! or limited to an interval, with a common minimum distance to the walls
//! and the object's own radius keeping it clear of the boundaries.

use crate::error::{Result, ValidationError};
use log::debug;
use ndarray::{Array1, Array2};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Room axes, in the storage order of resolved ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Width axis
    X,
    /// Depth axis
    Y,
    /// Vertical axis
    Height,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Height];

    /// Row index of this axis in a resolved 3 x 2 range.
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Height => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Height => "height",
        };
        f.write_str(name)
    }
}

/// Interior extents of a rectangular room in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    /// Extent along x
    pub x: f64,
    /// Extent along y
    pub y: f64,
    /// Extent along the vertical axis
    pub height: f64,
}

impl RoomDimensions {
    /// Create room dimensions; every extent must be strictly positive.
    pub fn new(x: f64, y: f64, height: f64) -> Result<Self> {
        let dim = Self { x, y, height };
        for axis in Axis::ALL {
            let value = dim.extent(axis);
            if value.is_nan() || value <= 0.0 {
                return Err(ValidationError::InvalidRoomDimension { axis, value });
            }
        }
        Ok(dim)
    }

    /// Extent along the given axis.
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Height => self.height,
        }
    }
}

/// Constraint for a single placement axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisPlacement {
    /// Free anywhere within the room bounds
    #[default]
    Unconstrained,
    /// Pinned to a single coordinate
    Fixed(f64),
    /// Limited to a [min, max] interval
    Range(f64, f64),
}

impl AxisPlacement {
    /// Build a range constraint from a dynamic list of coordinates.
    ///
    /// Anything but exactly two elements is rejected; this is where a
    /// one-element "range" coming from a loosely-typed scene description
    /// surfaces as an error.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        match values {
            [min, max] => Ok(AxisPlacement::Range(*min, *max)),
            _ => Err(ValidationError::MalformedRange { len: values.len() }),
        }
    }

    fn resolve(&self, axis: Axis, extent: f64, margin: f64) -> Result<(f64, f64)> {
        let lo = margin;
        let hi = extent - margin;
        match *self {
            AxisPlacement::Unconstrained => Ok((lo, hi)),
            AxisPlacement::Fixed(value) => {
                if value < 0.0 {
                    return Err(ValidationError::NegativeCoordinate { axis, value });
                }
                Ok((value, value))
            }
            AxisPlacement::Range(min, max) => {
                for value in [min, max] {
                    if value < 0.0 {
                        return Err(ValidationError::NegativeCoordinate { axis, value });
                    }
                }
                if min < lo || max > hi {
                    debug!(
                        "clipping requested {axis} range [{min}, {max}] to walls [{lo}, {hi}]"
                    );
                }
                Ok((min.max(lo), max.min(hi)))
            }
        }
    }
}

/// Placement constraints for one object in a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSpec {
    /// Constraint along x
    pub x: AxisPlacement,
    /// Constraint along y
    pub y: AxisPlacement,
    /// Constraint along the vertical axis
    pub height: AxisPlacement,
    /// Minimum distance from the object surface to any wall, meters
    pub min_to_wall: f64,
}

impl PlacementSpec {
    /// Constraint for the given axis.
    pub fn axis(&self, axis: Axis) -> AxisPlacement {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Height => self.height,
        }
    }

    /// Set the x constraint.
    pub fn with_x(mut self, x: AxisPlacement) -> Self {
        self.x = x;
        self
    }

    /// Set the y constraint.
    pub fn with_y(mut self, y: AxisPlacement) -> Self {
        self.y = y;
        self
    }

    /// Set the height constraint.
    pub fn with_height(mut self, height: AxisPlacement) -> Self {
        self.height = height;
        self
    }

    /// Set the wall margin.
    pub fn with_min_to_wall(mut self, min_to_wall: f64) -> Self {
        self.min_to_wall = min_to_wall;
        self
    }
}

/// Resolve placement constraints into a 3 x 2 array of [min, max] per axis.
///
/// For each axis, the valid interval keeps the whole object (of radius
/// `object_radius`) at least `min_to_wall` away from every wall: a free
/// axis resolves to `[radius + margin, extent - radius - margin]`, a pinned
/// coordinate to a degenerate interval, and an explicit range is
/// intersected with the wall-clearance interval.
///
/// Validation is eager and the whole computation fails on the first
/// problem: negative margins, radii or coordinates are rejected, and an
/// axis whose resolved interval inverts (for example when the clearances
/// exceed the room extent) is an error rather than an inverted range.
pub fn convert_placement_to_range(
    placement: &PlacementSpec,
    room_dim: &RoomDimensions,
    object_radius: f64,
) -> Result<Array2<f64>> {
    if placement.min_to_wall < 0.0 {
        return Err(ValidationError::NegativeMargin {
            margin: placement.min_to_wall,
        });
    }
    if object_radius < 0.0 {
        return Err(ValidationError::NegativeRadius {
            radius: object_radius,
        });
    }

    let margin = object_radius + placement.min_to_wall;
    let mut range = Array2::zeros((3, 2));

    for axis in Axis::ALL {
        let (min, max) = placement
            .axis(axis)
            .resolve(axis, room_dim.extent(axis), margin)?;
        if min > max {
            return Err(ValidationError::InvertedRange { axis, min, max });
        }
        range[[axis.index(), 0]] = min;
        range[[axis.index(), 1]] = max;
    }

    Ok(range)
}

/// Draw a uniform position from a resolved [min, max] range per axis.
///
/// The range is typically the output of [`convert_placement_to_range`];
/// degenerate intervals yield their pinned coordinate.
pub fn sample_within_range<R: Rng + ?Sized>(range: &Array2<f64>, rng: &mut R) -> Array1<f64> {
    let mut point = Array1::zeros(range.nrows());
    for i in 0..range.nrows() {
        let u: f64 = rng.random();
        point[i] = range[[i, 0]] + u * (range[[i, 1]] - range[[i, 0]]);
    }
    point
}
