//! Coordinate value type.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, CartesianPoint2dFloat};

/// A point in the plane with an optional elevation (`z`) ordinate.
///
/// Coordinates are plain values: copying one never shares state with the source.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    x: f64,
    y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    z: Option<f64>,
}

impl Coord {
    /// Creates a 2d coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Creates a 3d coordinate.
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// X ordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y ordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z ordinate, if the coordinate has one.
    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// Compares `x` and `y` ordinates exactly, ignoring `z`.
    pub fn equals_2d(&self, other: &Coord) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Compares all three ordinates exactly. Two missing `z` values are considered equal.
    pub fn equals_3d(&self, other: &Coord) -> bool {
        self.equals_2d(other) && self.z == other.z
    }

    /// Planar euclidean distance to the `other` coordinate.
    pub fn distance(&self, other: &Coord) -> f64 {
        <Self as CartesianPoint2dFloat>::distance(self, other)
    }

    pub(crate) fn map_ordinates(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
            z: self.z.map(&f),
        }
    }
}

impl CartesianPoint2d for Coord {
    type Num = f64;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl AbsDiffEq for Coord {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}
