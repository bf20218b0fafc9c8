//! Angular conventions, validation and wrapping.
//!
//! All angles are degrees. Azimuth, yaw and roll live in the closed interval
//! [-180, 180]; elevation and pitch live in [-90, 90]. Validation happens at
//! the producer side: values are checked before they enter geometry code.

use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Angular conventions used in scene descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleKind {
    /// Horizontal-plane angle of a point relative to the forward axis
    Azimuth,
    /// Vertical angle of a point relative to the horizontal plane
    Elevation,
    /// Rotation about the z axis
    Yaw,
    /// Rotation about the y axis
    Pitch,
    /// Rotation about the x axis
    Roll,
}

impl AngleKind {
    /// Closed validity interval in degrees for this convention.
    pub fn domain(&self) -> (f64, f64) {
        match self {
            AngleKind::Azimuth | AngleKind::Yaw | AngleKind::Roll => (-180.0, 180.0),
            AngleKind::Elevation | AngleKind::Pitch => (-90.0, 90.0),
        }
    }

    /// Canonical lowercase name of this convention.
    pub fn name(&self) -> &'static str {
        match self {
            AngleKind::Azimuth => "azimuth",
            AngleKind::Elevation => "elevation",
            AngleKind::Yaw => "yaw",
            AngleKind::Pitch => "pitch",
            AngleKind::Roll => "roll",
        }
    }
}

impl fmt::Display for AngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AngleKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "azimuth" => Ok(AngleKind::Azimuth),
            "elevation" => Ok(AngleKind::Elevation),
            "yaw" => Ok(AngleKind::Yaw),
            "pitch" => Ok(AngleKind::Pitch),
            "roll" => Ok(AngleKind::Roll),
            _ => Err(ValidationError::UnknownAngleKind {
                name: s.to_string(),
            }),
        }
    }
}

/// Check that every value lies within the closed domain of `kind`.
///
/// Returns `Ok(true)` when all values are valid. The first out-of-domain
/// value is reported as [`ValidationError::AngleOutOfRange`]; non-finite
/// values count as out of domain.
pub fn check_angle(kind: AngleKind, values: &[f64]) -> Result<bool> {
    let (min, max) = kind.domain();
    for &value in values {
        if !(min..=max).contains(&value) {
            return Err(ValidationError::AngleOutOfRange {
                kind,
                value,
                min,
                max,
            });
        }
    }
    Ok(true)
}

/// Wrap an angle in degrees to the canonical [-180, 180) interval.
///
/// Computed as `((angle + 180) mod 360) - 180` with a Euclidean modulus, so
/// integer-degree inputs map to integer-degree outputs with no drift.
pub fn wrap_to_180(angle: f64) -> f64 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_domains() {
        assert_eq!(AngleKind::Azimuth.domain(), (-180.0, 180.0));
        assert_eq!(AngleKind::Yaw.domain(), (-180.0, 180.0));
        assert_eq!(AngleKind::Roll.domain(), (-180.0, 180.0));
        assert_eq!(AngleKind::Elevation.domain(), (-90.0, 90.0));
        assert_eq!(AngleKind::Pitch.domain(), (-90.0, 90.0));
    }

    #[test]
    fn test_check_angle_in_domain() {
        assert!(check_angle(AngleKind::Azimuth, &[-180.0, 0.0, 180.0]).unwrap());
        assert!(check_angle(AngleKind::Elevation, &[-90.0, 45.0, 90.0]).unwrap());
        assert!(check_angle(AngleKind::Roll, &[]).unwrap());
    }

    #[test]
    fn test_check_angle_out_of_domain() {
        for kind in [AngleKind::Azimuth, AngleKind::Yaw, AngleKind::Roll] {
            assert!(check_angle(kind, &[-200.0, 200.0]).is_err());
        }
        for kind in [AngleKind::Elevation, AngleKind::Pitch] {
            assert!(check_angle(kind, &[-100.0, 100.0]).is_err());
        }
        // a single bad element fails the whole batch
        let err = check_angle(AngleKind::Pitch, &[0.0, 30.0, 91.0]).unwrap_err();
        assert!(err.is_angle_error());
    }

    #[test]
    fn test_check_angle_non_finite() {
        assert!(check_angle(AngleKind::Azimuth, &[f64::NAN]).is_err());
        assert!(check_angle(AngleKind::Azimuth, &[f64::INFINITY]).is_err());
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            AngleKind::Azimuth,
            AngleKind::Elevation,
            AngleKind::Yaw,
            AngleKind::Pitch,
            AngleKind::Roll,
        ] {
            assert_eq!(kind.to_string().parse::<AngleKind>().unwrap(), kind);
        }
        assert!("tilt".parse::<AngleKind>().is_err());
    }

    #[test]
    fn test_wrap_to_180() {
        let cases = [
            (0.0, 0.0),
            (45.0, 45.0),
            (-30.0, -30.0),
            (179.0, 179.0),
            (-179.0, -179.0),
            (180.0, -180.0),
            (181.0, -179.0),
            (-181.0, 179.0),
            (270.0, -90.0),
            (-270.0, 90.0),
            (359.0, -1.0),
            (360.0, 0.0),
            (-360.0, 0.0),
        ];
        for (angle, wrapped) in cases {
            assert_eq!(wrap_to_180(angle), wrapped, "angle {angle}");
        }
    }

    #[test]
    fn test_wrap_idempotent_and_periodic() {
        for i in -720..=720 {
            let angle = i as f64 * 0.5;
            let wrapped = wrap_to_180(angle);
            assert!((-180.0..180.0).contains(&wrapped));
            assert_relative_eq!(wrap_to_180(wrapped), wrapped, epsilon = 1e-12);
            assert_relative_eq!(wrap_to_180(angle + 360.0), wrapped, epsilon = 1e-12);
        }
    }
}
