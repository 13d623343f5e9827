//! Plane angles, stored as radians.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::float_cmp::{float_eq, float_gt, float_lt};

// The truncated constant is part of the observable behaviour; conversions and
// comparisons downstream rely on these exact bit patterns. Do not replace
// with `f32::consts::PI`.
#[allow(clippy::approx_constant)]
const PI_F32: f32 = 3.141592;
const DEGREES_TO_RADIANS: f32 = PI_F32 / 180.0;
const RADIANS_TO_DEGREES: f32 = 180.0 / PI_F32;

/// Half a turn.
pub const PI: Angle = Angle::from_pi_factor(1.0);

/// An angle, normalized to radians at construction and never range-wrapped:
/// values beyond ±2π are kept as-is.
#[derive(Clone, Copy, Debug, Default)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub const fn from_radians(radians: f32) -> Self {
        Self { radians }
    }

    pub const fn from_degrees(degrees: f32) -> Self {
        Self {
            radians: degrees * DEGREES_TO_RADIANS,
        }
    }

    /// An angle of `pi_factor` half-turns.
    pub const fn from_pi_factor(pi_factor: f32) -> Self {
        Self {
            radians: pi_factor * PI_F32,
        }
    }

    pub const fn radians(self) -> f32 {
        self.radians
    }

    pub const fn degrees(self) -> f32 {
        self.radians * RADIANS_TO_DEGREES
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.radians += rhs.radians;
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        self.radians -= rhs.radians;
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        float_eq(self.radians, other.radians)
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if float_lt(self.radians, other.radians) {
            Some(Ordering::Less)
        } else if float_gt(self.radians, other.radians) {
            Some(Ordering::Greater)
        } else if self.radians.is_nan() || other.radians.is_nan() {
            None
        } else {
            Some(Ordering::Equal)
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_deg", self.degrees())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Angle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.radians)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Angle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f32::deserialize(deserializer).map(Angle::from_radians)
    }
}

#[cfg(test)]
mod tests {
    use crate::float_cmp::float_eq;

    use super::*;

    #[test]
    fn create_from_degrees() {
        let angle = Angle::from_degrees(123.45);

        assert!(float_eq(angle.degrees(), 123.45));
        assert!(float_eq(angle.radians(), 2.154609));
    }

    #[test]
    fn create_from_radians() {
        let angle = Angle::from_radians(2.154609);

        assert!(float_eq(angle.radians(), 2.154609));
        assert!(float_eq(angle.degrees(), 123.45));
    }

    #[test]
    fn create_from_pi_factor() {
        assert!(float_eq(Angle::from_pi_factor(1.0).radians(), 3.141592));
        assert!(float_eq(Angle::from_pi_factor(-1.0).degrees(), -180.0));
        assert!(float_eq(PI.degrees(), 180.0));
    }

    #[test]
    fn round_trips() {
        assert!(float_eq(Angle::from_degrees(42.0).degrees(), 42.0));
        assert!(float_eq(Angle::from_radians(1.25).radians(), 1.25));
    }

    #[test]
    fn arithmetic() {
        let quarter = Angle::from_pi_factor(0.5);
        let half = quarter + quarter;
        assert!(float_eq(half.degrees(), 180.0));

        let mut angle = Angle::from_degrees(90.0);
        angle += Angle::from_degrees(45.0);
        assert!(float_eq(angle.degrees(), 135.0));
        angle -= Angle::from_degrees(135.0);
        assert!(float_eq(angle.degrees(), 0.0));

        assert!(float_eq((quarter - quarter).radians(), 0.0));
        assert!(float_eq((-quarter).degrees(), -90.0));
    }

    #[test]
    fn comparisons() {
        assert_eq!(Angle::from_degrees(180.0), Angle::from_pi_factor(1.0));
        assert_ne!(Angle::from_degrees(10.0), Angle::from_degrees(11.0));

        assert!(Angle::from_degrees(10.0) < Angle::from_degrees(11.0));
        assert!(Angle::from_degrees(11.0) > Angle::from_degrees(10.0));
        assert!(Angle::from_degrees(10.0) <= Angle::from_degrees(10.0));
        assert!(Angle::from_degrees(10.0) >= Angle::from_degrees(10.0));
    }

    #[test]
    fn displays_as_degrees() {
        assert_eq!(format!("{}", Angle::from_radians(0.0)), "0_deg");
        assert_eq!(format!("{}", Angle::default()), "0_deg");
    }
}
