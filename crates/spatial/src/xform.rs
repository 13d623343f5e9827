//! Transforms between tagged coordinate frames.

use std::fmt;

use nalgebra as na;

use crate::pair::CompressedPair;
use crate::point::{Point, Vector};
use crate::space::{MatchesSpace, Space, SpaceMismatch, check_spaces_match};

/// The numeric collaborator all composition and application delegates to.
pub type Matrix = na::Matrix4<f32>;

/// A transform taking coordinates in frame `F` to frame `T`.
///
/// The two tags ride in a [`CompressedPair`], so a transform between
/// stateless frames is exactly one [`Matrix`] wide.
#[derive(Clone, Copy)]
pub struct Xform<F: Space, T: Space> {
    spaces: CompressedPair<F, T>,
    matrix: Matrix,
}

impl<F: Space, T: Space> fmt::Debug for Xform<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} ({} -> {})",
            self.matrix,
            std::any::type_name::<F>(),
            std::any::type_name::<T>(),
        )
    }
}

impl<F: Space + Default, T: Space + Default> Default for Xform<F, T> {
    fn default() -> Self {
        Self::from_spaces(F::default(), T::default())
    }
}

impl<F: Space, T: Space> Xform<F, T> {
    pub fn new(matrix: Matrix, from_space: F, to_space: T) -> Self {
        Self {
            spaces: CompressedPair::new(from_space, to_space),
            matrix,
        }
    }

    /// The identity transform between the two frames.
    pub fn from_spaces(from_space: F, to_space: T) -> Self {
        Self::new(Matrix::identity(), from_space, to_space)
    }

    pub fn from_space(&self) -> &F {
        self.spaces.first()
    }

    pub fn to_space(&self) -> &T {
        self.spaces.second()
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Chains `self` with a following transform: the result applies `self`
    /// first, then `rhs`.
    ///
    /// `self`'s target frame must match `rhs`'s source frame. Incompatible
    /// frame *types* do not build; statically-compatible frames whose runtime
    /// data disagrees (two different frame numbers) are reported as a
    /// [`SpaceMismatch`].
    pub fn then<T2, To>(self, rhs: Xform<T2, To>) -> Result<Xform<F, To>, SpaceMismatch>
    where
        T2: Space,
        To: Space,
        T: MatchesSpace<T2>,
    {
        check_spaces_match(self.to_space(), rhs.from_space())?;
        Ok(Xform::new(
            rhs.matrix * self.matrix,
            *self.from_space(),
            *rhs.to_space(),
        ))
    }

    /// In-place variant of [`Xform::then`] for accumulation loops; the target
    /// frame type is preserved, only its instance data is replaced.
    pub fn accumulate<T2>(&mut self, rhs: &Xform<T2, T>) -> Result<(), SpaceMismatch>
    where
        T2: Space,
        T: MatchesSpace<T2>,
    {
        check_spaces_match(self.to_space(), rhs.from_space())?;
        let from_space = *self.from_space();
        self.matrix = rhs.matrix * self.matrix;
        self.spaces = CompressedPair::new(from_space, *rhs.to_space());
        Ok(())
    }

    /// Takes a point in the source frame to the target frame.
    pub fn apply_to_point<PS>(&self, point: &Point<PS>) -> Result<Point<T>, SpaceMismatch>
    where
        PS: Space,
        F: MatchesSpace<PS>,
    {
        check_spaces_match(self.from_space(), point.space())?;
        Ok(Point::from_homogeneous(
            self.matrix * point.homogeneous(),
            *self.to_space(),
        ))
    }

    /// Takes a displacement in the source frame to the target frame.
    pub fn apply_to_vector<VS>(&self, vector: &Vector<VS>) -> Result<Vector<T>, SpaceMismatch>
    where
        VS: Space,
        F: MatchesSpace<VS>,
    {
        check_spaces_match(self.from_space(), vector.space())?;
        Ok(Vector::from_homogeneous(
            self.matrix * vector.homogeneous(),
            *self.to_space(),
        ))
    }
}

/// Free-function spelling of [`Xform::then`].
pub fn in_sequence<F, T, T2, To>(
    lhs: Xform<F, T>,
    rhs: Xform<T2, To>,
) -> Result<Xform<F, To>, SpaceMismatch>
where
    F: Space,
    T: Space,
    T2: Space,
    To: Space,
    T: MatchesSpace<T2>,
{
    lhs.then(rhs)
}
