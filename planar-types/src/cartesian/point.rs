use nalgebra::{Scalar, Vector2};
use num_traits::{Float, Num};

/// A point in 2-dimensional cartesian coordinate space.
///
/// Only the `x` and `y` ordinates take part in the planar algorithms of this crate, so any additional ordinates a type
/// carries (like elevation) are invisible through this trait.
pub trait CartesianPoint2d {
    /// Numeric type of the ordinates.
    type Num: Num + Copy + PartialOrd + Scalar;

    /// X ordinate.
    fn x(&self) -> Self::Num;
    /// Y ordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both points have exactly the same `x` and `y` ordinates.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared euclidean distance between the points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let v = self.sub(other);
        v.x * v.x + v.y * v.y
    }
}

/// Methods of [`CartesianPoint2d`] that require floating point ordinates.
pub trait CartesianPoint2dFloat<N: Float + Scalar = f64>: CartesianPoint2d<Num = N> {
    /// Euclidean distance between the points.
    fn distance(&self, other: &impl CartesianPoint2d<Num = N>) -> N {
        self.distance_sq(other).sqrt()
    }
}

impl<N: Float + Scalar, T: CartesianPoint2d<Num = N>> CartesianPoint2dFloat<N> for T {}
