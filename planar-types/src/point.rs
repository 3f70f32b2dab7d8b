//! Point geometry.

use serde::{Deserialize, Serialize};

use crate::cartesian::Rect;
use crate::coord::Coord;
use crate::dimension::Dimension;
use crate::geometry::{Geometry, GeometryKind};

/// A geometry consisting of a single coordinate, or an empty point.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    coord: Option<Coord>,
}

impl Point {
    /// Creates a point at the given coordinate.
    pub fn new(coord: Coord) -> Self {
        Self { coord: Some(coord) }
    }

    /// Creates an empty point.
    pub fn empty() -> Self {
        Self { coord: None }
    }

    /// Coordinate of the point, `None` if the point is empty.
    pub fn coord(&self) -> Option<&Coord> {
        self.coord.as_ref()
    }
}

impl From<Option<Coord>> for Point {
    fn from(coord: Option<Coord>) -> Self {
        Self { coord }
    }
}

impl Geometry for Point {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Point
    }

    fn dimension(&self) -> Dimension {
        Dimension::Point
    }

    fn boundary_dimension(&self) -> Dimension {
        Dimension::False
    }

    fn is_empty(&self) -> bool {
        self.coord.is_none()
    }

    fn coordinates(&self) -> &[Coord] {
        match &self.coord {
            Some(coord) => std::slice::from_ref(coord),
            None => &[],
        }
    }

    fn envelope(&self) -> Option<Rect> {
        self.coord.as_ref().map(|coord| Rect::from_point(coord))
    }
}
