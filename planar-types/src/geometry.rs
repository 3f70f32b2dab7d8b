//! Common contract of all geometry kinds.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::cartesian::Rect;
use crate::coord::Coord;
use crate::dimension::Dimension;
use crate::line_string::LineString;
use crate::point::Point;

/// Discriminator of geometry kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    /// See [`Point`].
    Point,
    /// See [`LineString`].
    LineString,
}

impl GeometryKind {
    /// Name of the geometry kind, e.g. `"LineString"`.
    pub fn as_str(self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
        }
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base contract shared by every geometry kind.
pub trait Geometry {
    /// Kind of the geometry.
    fn kind(&self) -> GeometryKind;

    /// Name of the geometry type, e.g. `"LineString"`.
    fn geometry_type(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Topological dimension of the geometry. Does not depend on whether the geometry is empty.
    fn dimension(&self) -> Dimension;

    /// Dimension of the geometry's boundary, or [`Dimension::False`] if the geometry has no boundary.
    fn boundary_dimension(&self) -> Dimension;

    /// Whether the geometry contains no points.
    fn is_empty(&self) -> bool;

    /// All the coordinates of the geometry in their defining order.
    fn coordinates(&self) -> &[Coord];

    /// Bounding rectangle of the geometry, or `None` for empty geometries.
    fn envelope(&self) -> Option<Rect>;

    /// Returns true if the `other` geometry is of the same kind, so that the two can be compared structurally.
    fn is_equivalent_class(&self, other: &dyn Geometry) -> bool {
        self.kind() == other.kind()
    }

    /// Structural equality: same kind and pairwise equal coordinates in the same order, compared with
    /// [`coordinates_equal`].
    fn equals_exact(&self, other: &dyn Geometry, tolerance: f64) -> bool {
        if !self.is_equivalent_class(other) {
            return false;
        }

        let (own, others) = (self.coordinates(), other.coordinates());
        own.len() == others.len()
            && own
                .iter()
                .zip(others)
                .all(|(a, b)| coordinates_equal(a, b, tolerance))
    }
}

/// Compares two coordinates with the given tolerance.
///
/// Zero tolerance means exact comparison of `x` and `y`. Otherwise the planar distance between the coordinates must not
/// exceed `tolerance`. The `z` ordinate is never compared.
pub fn coordinates_equal(a: &Coord, b: &Coord, tolerance: f64) -> bool {
    if tolerance == 0.0 {
        a.equals_2d(b)
    } else {
        a.distance(b) <= tolerance
    }
}

/// Any geometry supported by the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Geom {
    /// Point.
    Point(Point),
    /// Line string.
    LineString(LineString),
}

impl Geometry for Geom {
    fn kind(&self) -> GeometryKind {
        match self {
            Geom::Point(v) => v.kind(),
            Geom::LineString(v) => v.kind(),
        }
    }

    fn dimension(&self) -> Dimension {
        match self {
            Geom::Point(v) => v.dimension(),
            Geom::LineString(v) => v.dimension(),
        }
    }

    fn boundary_dimension(&self) -> Dimension {
        match self {
            Geom::Point(v) => v.boundary_dimension(),
            Geom::LineString(v) => v.boundary_dimension(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Geom::Point(v) => v.is_empty(),
            Geom::LineString(v) => v.is_empty(),
        }
    }

    fn coordinates(&self) -> &[Coord] {
        match self {
            Geom::Point(v) => v.coordinates(),
            Geom::LineString(v) => v.coordinates(),
        }
    }

    fn envelope(&self) -> Option<Rect> {
        match self {
            Geom::Point(v) => v.envelope(),
            Geom::LineString(v) => v.envelope(),
        }
    }
}

impl From<Point> for Geom {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geom {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: &[(f64, f64)]) -> LineString {
        LineString::new(points.iter().copied().map(Coord::from).collect()).unwrap()
    }

    #[test]
    fn coordinates_equal_with_tolerance() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(0.05, 0.0);

        assert!(coordinates_equal(&a, &a, 0.0));
        assert!(!coordinates_equal(&a, &b, 0.0));
        assert!(coordinates_equal(&a, &b, 0.1));
        assert!(!coordinates_equal(&a, &b, 0.01));
        assert!(coordinates_equal(
            &Coord::new_3d(1.0, 1.0, 0.0),
            &Coord::new_3d(1.0, 1.0, 5.0),
            0.0
        ));
    }

    #[test]
    fn geom_dispatch() {
        let geom = Geom::from(line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]));
        assert_eq!(geom.kind(), GeometryKind::LineString);
        assert_eq!(geom.geometry_type(), "LineString");
        assert_eq!(geom.dimension(), Dimension::Curve);
        assert_eq!(geom.boundary_dimension(), Dimension::False);
        assert_eq!(geom.coordinates().len(), 4);
        assert_eq!(geom.envelope(), Some(Rect::new(0.0, 0.0, 1.0, 1.0)));

        let geom = Geom::from(Point::new(Coord::new(1.0, 2.0)));
        assert_eq!(geom.kind(), GeometryKind::Point);
        assert_eq!(geom.geometry_type(), "Point");
        assert_eq!(geom.dimension(), Dimension::Point);
        assert!(!geom.is_empty());
    }

    #[test]
    fn different_kinds_are_never_equal() {
        let point: Geom = Point::new(Coord::new(0.0, 0.0)).into();
        let empty_point: Geom = Point::empty().into();
        let empty_line: Geom = LineString::empty().into();

        assert!(!point.is_equivalent_class(&empty_line));
        assert!(!empty_point.equals_exact(&empty_line, 0.0));
        assert!(!empty_line.equals_exact(&empty_point, 0.0));
        assert!(empty_line.equals_exact(&Geom::from(LineString::empty()), 0.0));
    }

    #[test]
    fn kind_display() {
        assert_eq!(GeometryKind::LineString.to_string(), "LineString");
        assert_eq!(GeometryKind::Point.to_string(), "Point");
    }
}
