//! Space-tagged points and vectors in homogeneous coordinates.
//!
//! Points carry `w = 1`, vectors carry `w = 0`. The `w` component is a
//! contract, not a data-dependent condition: feeding a homogeneous column
//! with the wrong `w` into a constructor is a programming bug and panics
//! rather than returning an error.

use std::fmt;

use measure::float_cmp::float_eq;
use nalgebra as na;

use crate::space::{MatchesSpace, Space, SpaceMismatch, check_spaces_match};

/// A position in the frame tagged by `S`.
#[derive(Clone, Copy)]
pub struct Point<S: Space> {
    space: S,
    hom: na::Vector4<f32>,
}

/// A displacement in the frame tagged by `S`.
#[derive(Clone, Copy)]
pub struct Vector<S: Space> {
    space: S,
    hom: na::Vector4<f32>,
}

impl<S: Space> fmt::Debug for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} in {}", self.hom, std::any::type_name::<S>())
    }
}

impl<S: Space> fmt::Debug for Vector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} in {}", self.hom, std::any::type_name::<S>())
    }
}

impl<S: Space> Point<S> {
    pub fn new(position: na::Vector3<f32>, space: S) -> Self {
        Self {
            space,
            hom: position.push(1.0),
        }
    }

    /// Wraps an already-homogeneous column. Panics unless `w` is 1.
    pub fn from_homogeneous(hom: na::Vector4<f32>, space: S) -> Self {
        assert!(float_eq(hom.w, 1.0), "a point's homogeneous w must be 1");
        Self { space, hom }
    }

    pub fn space(&self) -> &S {
        &self.space
    }

    pub fn homogeneous(&self) -> na::Vector4<f32> {
        self.hom
    }

    pub fn xyz(&self) -> na::Vector3<f32> {
        self.hom.xyz()
    }

    /// Moves the point by a displacement in the same frame.
    pub fn checked_translate(&self, rhs: &Vector<S>) -> Result<Self, SpaceMismatch>
    where
        S: MatchesSpace<S>,
    {
        check_spaces_match(&self.space, &rhs.space)?;
        Ok(Self {
            space: self.space,
            hom: self.hom + rhs.hom,
        })
    }

    /// The displacement from `rhs` to `self`, in the shared frame.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Vector<S>, SpaceMismatch>
    where
        S: MatchesSpace<S>,
    {
        check_spaces_match(&self.space, &rhs.space)?;
        Ok(Vector {
            space: self.space,
            hom: self.hom - rhs.hom,
        })
    }
}

impl<S: Space> Vector<S> {
    pub fn new(displacement: na::Vector3<f32>, space: S) -> Self {
        Self {
            space,
            hom: displacement.push(0.0),
        }
    }

    /// Wraps an already-homogeneous column. Panics unless `w` is 0.
    pub fn from_homogeneous(hom: na::Vector4<f32>, space: S) -> Self {
        assert!(float_eq(hom.w, 0.0), "a vector's homogeneous w must be 0");
        Self { space, hom }
    }

    pub fn space(&self) -> &S {
        &self.space
    }

    pub fn homogeneous(&self) -> na::Vector4<f32> {
        self.hom
    }

    pub fn xyz(&self) -> na::Vector3<f32> {
        self.hom.xyz()
    }

    pub fn checked_add(&self, rhs: &Self) -> Result<Self, SpaceMismatch>
    where
        S: MatchesSpace<S>,
    {
        check_spaces_match(&self.space, &rhs.space)?;
        Ok(Self {
            space: self.space,
            hom: self.hom + rhs.hom,
        })
    }

    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, SpaceMismatch>
    where
        S: MatchesSpace<S>,
    {
        check_spaces_match(&self.space, &rhs.space)?;
        Ok(Self {
            space: self.space,
            hom: self.hom - rhs.hom,
        })
    }
}
