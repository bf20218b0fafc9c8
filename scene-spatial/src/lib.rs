//! Spatial utilities for multichannel acoustic scene simulation
//!
//! This crate provides the geometric side of synthetic scene generation for
//! multi-microphone speech data:
//!
//! - Angular conventions (azimuth, elevation, yaw, pitch, roll) with
//!   validation and wrapping to the canonical [-180, 180) interval
//! - Right-handed yaw/pitch/roll rotation matrices
//! - Rigid microphone-array geometry with translation, rotation and
//!   world-to-array spherical conversion
//! - Resolution of per-axis placement constraints against room dimensions
//!   into concrete sampling ranges
//!
//! # Example
//! ```
//! use ndarray::array;
//! use scene_sim_spatial::ArrayGeometry;
//!
//! let positions = array![[0.0, 0.0, 0.0], [0.1, 0.0, 0.0]];
//! let array = ArrayGeometry::new(positions).unwrap();
//! println!("array radius: {}", array.radius());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod angles;
mod array;
mod error;
mod orientation;
mod placement;
mod rotation;

pub use angles::*;
pub use array::*;
pub use error::*;
pub use orientation::*;
pub use placement::*;
pub use rotation::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
