//! Array orientation expressed as yaw, pitch and roll in degrees.

use crate::angles::{check_angle, AngleKind};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Orientation of a rigid body as a yaw/pitch/roll triple in degrees.
///
/// Construction validates each component against its angle convention, so an
/// `Orientation` always satisfies the domain invariants (yaw and roll in
/// [-180, 180], pitch in [-90, 90]). The default orientation is the
/// identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Orientation {
    /// Rotation about the z axis in degrees
    pub yaw: f64,
    /// Rotation about the y axis in degrees
    pub pitch: f64,
    /// Rotation about the x axis in degrees
    pub roll: f64,
}

impl Orientation {
    /// Create a validated orientation.
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Result<Self> {
        check_angle(AngleKind::Yaw, &[yaw])?;
        check_angle(AngleKind::Pitch, &[pitch])?;
        check_angle(AngleKind::Roll, &[roll])?;
        Ok(Self { yaw, pitch, roll })
    }

    /// Pure yaw rotation.
    pub fn with_yaw(yaw: f64) -> Result<Self> {
        Self::new(yaw, 0.0, 0.0)
    }

    /// Pure pitch rotation.
    pub fn with_pitch(pitch: f64) -> Result<Self> {
        Self::new(0.0, pitch, 0.0)
    }

    /// Pure roll rotation.
    pub fn with_roll(roll: f64) -> Result<Self> {
        Self::new(0.0, 0.0, roll)
    }

    /// Returns `true` for the identity orientation.
    pub fn is_identity(&self) -> bool {
        self.yaw == 0.0 && self.pitch == 0.0 && self.roll == 0.0
    }
}
