use crate::cartesian::CartesianPoint2d;
use nalgebra::Scalar;
use num_traits::Num;
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    x_min: N,
    y_min: N,
    x_max: N,
    y_max: N,
}

impl<N: Num + Copy + PartialOrd + Scalar> Rect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Minimum x of the rectangle.
    pub fn x_min(&self) -> N {
        self.x_min
    }

    /// Maximum x of the rectangle.
    pub fn x_max(&self) -> N {
        self.x_max
    }

    /// Minimum y of the rectangle.
    pub fn y_min(&self) -> N {
        self.y_min
    }

    /// Maximum y of the rectangle.
    pub fn y_max(&self) -> N {
        self.y_max
    }

    /// Width of the rectangle.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// Rectangle consisting of a single point.
    pub fn from_point(p: &impl CartesianPoint2d<Num = N>) -> Self {
        Self {
            x_min: p.x(),
            x_max: p.x(),
            y_min: p.y(),
            y_max: p.y(),
        }
    }

    /// Smallest rectangle containing all the given points, or `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let mut rect = Self::from_point(first);

        for p in points {
            if rect.x_min > p.x() {
                rect.x_min = p.x();
            }
            if rect.y_min > p.y() {
                rect.y_min = p.y();
            }
            if rect.x_max < p.x() {
                rect.x_max = p.x();
            }
            if rect.y_max < p.y() {
                rect.y_max = p.y();
            }
        }

        Some(rect)
    }

    /// Returns true if the point is inside the rectangle or on its border.
    pub fn contains(&self, point: &impl CartesianPoint2d<Num = N>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }

    /// Returns true if the rectangles have at least one common point.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x_min <= other.x_max
            && self.x_max >= other.x_min
            && self.y_min <= other.y_max
            && self.y_max >= other.y_min
    }
}
