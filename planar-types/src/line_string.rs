//! Line string is an ordered sequence of coordinates connected by straight segments.
//!
//! A line string either has no coordinates at all (the empty geometry), or at least two of them. It is considered:
//! * **closed** - when its first and last coordinates are equal in `x` and `y`;
//! * **ring** - when it is closed and does not intersect itself.
//!
//! Consecutive coordinates are expected to differ, but this is not checked by [`LineString::new`]. Use a
//! [`GeometryFactory`](crate::GeometryFactory) with [`RepeatedPoints::Reject`](crate::RepeatedPoints::Reject) policy
//! if the check is required.
//!
//! Line strings have no mutators. Any structural change is done by constructing a new instance, e.g. with
//! [`LineString::reverse`] or from a copy of [`Geometry::coordinates`].

use std::fmt::{Debug, Formatter};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::cartesian::Rect;
use crate::coord::Coord;
use crate::dimension::Dimension;
use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, GeometryKind};
use crate::segment::Segment;
use crate::simple::{SegmentIntersectionOracle, SimplicityOracle};

/// Ordered sequence of coordinates. See module level documentation for details.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coord>", into = "Vec<Coord>")]
pub struct LineString {
    points: Vec<Coord>,
    envelope: OnceLock<Option<Rect>>,
}

impl LineString {
    /// Creates a line string from the given coordinates.
    ///
    /// The vector is stored as is, without copying. Returns [`GeometryError::InvalidGeometry`] if exactly one
    /// coordinate is given, since a single point cannot form a line.
    pub fn new(points: Vec<Coord>) -> Result<Self> {
        if points.len() == 1 {
            log::debug!("Rejected line string construction from a single point");
            return Err(GeometryError::InvalidGeometry(format!(
                "invalid number of points in LineString (found {} - must be 0 or >= 2)",
                points.len()
            )));
        }

        Ok(Self {
            points,
            envelope: OnceLock::new(),
        })
    }

    /// Same as [`LineString::new`], but absent input creates an empty line string.
    pub fn from_optional(points: Option<Vec<Coord>>) -> Result<Self> {
        Self::new(points.unwrap_or_default())
    }

    /// Creates an empty line string.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of coordinates in the line string.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the coordinate at the given index.
    pub fn coordinate_n(&self, n: usize) -> Result<&Coord> {
        self.points.get(n).ok_or(GeometryError::IndexOutOfRange {
            index: n,
            len: self.points.len(),
        })
    }

    /// First coordinate of the line string, or `None` if the line string is empty.
    pub fn first_coordinate(&self) -> Option<&Coord> {
        if self.is_empty() {
            return None;
        }

        self.coordinate_n(0).ok()
    }

    /// Last coordinate of the line string, or `None` if the line string is empty.
    pub fn last_coordinate(&self) -> Option<&Coord> {
        self.points.last()
    }

    /// Whether the first and the last coordinates are equal. Only `x` and `y` are compared.
    ///
    /// Empty line strings are not closed.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.equals_2d(last),
            _ => false,
        }
    }

    /// Whether the line string is closed and has no self-intersections.
    ///
    /// Uses [`SegmentIntersectionOracle`], which is quadratic in the number of points.
    pub fn is_ring(&self) -> bool {
        self.is_ring_with(&SegmentIntersectionOracle)
    }

    /// Same as [`LineString::is_ring`], but the self-intersection test is done by the given `oracle`. The oracle is not
    /// consulted for line strings that are not closed.
    pub fn is_ring_with(&self, oracle: &impl SimplicityOracle) -> bool {
        if !self.is_closed() {
            return false;
        }

        let is_simple = oracle.is_simple(&self.points);
        if !is_simple {
            log::trace!(
                "Closed line string of {} points is not a ring: it intersects itself",
                self.points.len()
            );
        }

        is_simple
    }

    /// Whether the line string has no self-intersections other than the closing point.
    pub fn is_simple(&self) -> bool {
        SegmentIntersectionOracle.is_simple(&self.points)
    }

    /// Returns true if two consecutive coordinates are equal in `x` and `y`.
    pub fn has_repeated_points(&self) -> bool {
        self.points.windows(2).any(|pair| pair[0].equals_2d(&pair[1]))
    }

    /// Iterates over the segments between consecutive coordinates.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Coord>> {
        self.points.windows(2).map(|pair| Segment(&pair[0], &pair[1]))
    }

    /// Planar length of the line string. Zero for empty line strings.
    pub fn length(&self) -> f64 {
        self.iter_segments()
            .map(|Segment(a, b)| a.distance(b))
            .sum()
    }

    /// Creates a new line string with the same coordinates in the opposite order.
    pub fn reverse(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
            envelope: self.envelope.clone(),
        }
    }

    /// Consumes the line string and returns its coordinates.
    pub fn into_coordinates(self) -> Vec<Coord> {
        self.points
    }
}

impl Geometry for LineString {
    fn kind(&self) -> GeometryKind {
        GeometryKind::LineString
    }

    fn dimension(&self) -> Dimension {
        Dimension::Curve
    }

    fn boundary_dimension(&self) -> Dimension {
        if self.is_closed() {
            Dimension::False
        } else {
            Dimension::Point
        }
    }

    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn coordinates(&self) -> &[Coord] {
        &self.points
    }

    fn envelope(&self) -> Option<Rect> {
        *self
            .envelope
            .get_or_init(|| Rect::from_points(self.points.iter()))
    }
}

impl TryFrom<Vec<Coord>> for LineString {
    type Error = GeometryError;

    fn try_from(value: Vec<Coord>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<LineString> for Vec<Coord> {
    fn from(value: LineString) -> Self {
        value.points
    }
}

/// Structural equality of all ordinates including `z`. Use [`Geometry::equals_exact`] to compare only `x` and `y`.
impl PartialEq for LineString {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl Debug for LineString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LineString").field(&self.points).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn coords(points: &[(f64, f64)]) -> Vec<Coord> {
        points.iter().copied().map(Coord::from).collect()
    }

    fn line(points: &[(f64, f64)]) -> LineString {
        LineString::new(coords(points)).unwrap()
    }

    #[test]
    fn empty_construction() {
        for line in [
            LineString::new(vec![]).unwrap(),
            LineString::from_optional(None).unwrap(),
            LineString::empty(),
        ] {
            assert!(line.is_empty());
            assert_eq!(line.coordinates().len(), 0);
            assert_eq!(line.num_points(), 0);
            assert_eq!(line.dimension(), Dimension::Curve);
            assert_eq!(line.first_coordinate(), None);
            assert_eq!(line.last_coordinate(), None);
            assert!(!line.is_closed());
            assert!(!line.is_ring());
            assert_eq!(line.envelope(), None);
            assert_eq!(line.length(), 0.0);
        }
    }

    #[test]
    fn single_point_is_rejected() {
        assert_matches!(
            LineString::new(coords(&[(1.0, 1.0)])),
            Err(GeometryError::InvalidGeometry(_))
        );
        assert_matches!(
            LineString::from_optional(Some(coords(&[(1.0, 1.0)]))),
            Err(GeometryError::InvalidGeometry(_))
        );
        assert_matches!(
            LineString::try_from(coords(&[(1.0, 1.0)])),
            Err(GeometryError::InvalidGeometry(_))
        );
    }

    #[test]
    fn construction_keeps_points() {
        let line = line(&[(0.0, 0.0), (1.0, 1.0)]);
        assert!(!line.is_empty());
        assert_eq!(line.dimension(), Dimension::Curve);
        assert_eq!(line.geometry_type(), "LineString");
        assert_eq!(line.coordinates(), &coords(&[(0.0, 0.0), (1.0, 1.0)])[..]);
    }

    #[test]
    fn repeated_points_are_accepted() {
        let line = line(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(line.num_points(), 3);
        assert!(line.has_repeated_points());
        assert!(!self::line(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]).has_repeated_points());
    }

    #[test]
    fn coordinate_n() {
        let line = line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert_eq!(line.coordinate_n(1), Ok(&Coord::new(1.0, 0.0)));
        assert_eq!(line.first_coordinate(), Some(&Coord::new(0.0, 0.0)));
        assert_eq!(line.last_coordinate(), Some(&Coord::new(1.0, 1.0)));
        assert_matches!(
            line.coordinate_n(3),
            Err(GeometryError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_matches!(
            LineString::empty().coordinate_n(0),
            Err(GeometryError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn closedness() {
        let closed = line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        assert!(closed.is_closed());
        assert_eq!(closed.boundary_dimension(), Dimension::False);

        let open = line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert!(!open.is_closed());
        assert_eq!(open.boundary_dimension(), Dimension::Point);
    }

    #[test]
    fn closedness_ignores_z() {
        let line = LineString::new(vec![
            Coord::new_3d(0.0, 0.0, 0.0),
            Coord::new_3d(1.0, 0.0, 0.0),
            Coord::new_3d(1.0, 1.0, 0.0),
            Coord::new_3d(0.0, 0.0, 10.0),
        ])
        .unwrap();
        assert!(line.is_closed());
    }

    #[test]
    fn ring() {
        assert!(line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]).is_ring());

        let bow_tie = line(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0), (0.0, 0.0)]);
        assert!(bow_tie.is_closed());
        assert!(!bow_tie.is_ring());

        let open = line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert!(open.is_simple());
        assert!(!open.is_ring());
    }

    #[test]
    fn ring_with_custom_oracle() {
        let closed = line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        assert!(closed.is_ring_with(&|_: &[Coord]| true));
        assert!(!closed.is_ring_with(&|_: &[Coord]| false));

        let open = line(&[(0.0, 0.0), (1.0, 0.0)]);
        let panicking = |_: &[Coord]| -> bool { panic!("must not be called for open lines") };
        assert!(!open.is_ring_with(&panicking));
    }

    #[test]
    fn equals_exact() {
        let a = line(&[(0.0, 0.0), (1.0, 1.0)]);

        assert!(a.equals_exact(&line(&[(0.0, 0.0), (1.0, 1.0)]), 0.0));
        assert!(!a.equals_exact(&line(&[(1.0, 1.0), (0.0, 0.0)]), 0.0));
        assert!(!a.equals_exact(&line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]), 0.0));

        let displaced = line(&[(0.05, 0.0), (1.05, 1.0)]);
        assert!(a.equals_exact(&displaced, 0.1));
        assert!(!a.equals_exact(&displaced, 0.01));

        assert!(!a.equals_exact(&crate::Point::new(Coord::new(0.0, 0.0)), 1.0));
    }

    #[test]
    fn clone_is_deep() {
        let original = line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let clone = original.clone();
        assert!(clone.equals_exact(&original, 0.0));

        let mut points = original.into_coordinates();
        points[0] = Coord::new(10.0, 10.0);

        assert_eq!(clone.coordinate_n(0), Ok(&Coord::new(0.0, 0.0)));
        assert_ne!(clone.coordinates(), &points[..]);
    }

    #[test]
    fn clone_equals_original() {
        for original in [
            LineString::empty(),
            line(&[(0.0, 0.0), (1.0, 1.0)]),
            line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
        ] {
            assert!(original.clone().equals_exact(&original, 0.0));
            assert_eq!(original.clone(), original);
        }
    }

    #[test]
    fn partial_eq_compares_z() {
        let flat = line(&[(0.0, 0.0), (1.0, 1.0)]);
        let elevated =
            LineString::new(vec![Coord::new_3d(0.0, 0.0, 5.0), Coord::new(1.0, 1.0)]).unwrap();

        assert!(flat.equals_exact(&elevated, 0.0));
        assert_ne!(flat, elevated);
    }

    #[test]
    fn envelope() {
        let line = line(&[(0.0, 3.0), (-1.0, 1.0), (2.0, 0.0)]);
        let expected = Some(Rect::new(-1.0, 0.0, 2.0, 3.0));
        assert_eq!(line.envelope(), expected);
        assert_eq!(line.envelope(), expected);
        assert_eq!(line.clone().envelope(), expected);
        assert_eq!(line.reverse().envelope(), expected);
    }

    #[test]
    fn length_and_reverse() {
        let line = line(&[(0.0, 0.0), (3.0, 4.0), (3.0, 0.0)]);
        assert_eq!(line.length(), 9.0);
        assert_eq!(line.iter_segments().count(), 2);

        let reversed = line.reverse();
        assert_eq!(reversed.coordinates(), &coords(&[(3.0, 0.0), (3.0, 4.0), (0.0, 0.0)])[..]);
        assert!(!reversed.equals_exact(&line, 0.0));
        assert!(reversed.reverse().equals_exact(&line, 0.0));
    }

    #[test]
    fn serialization() {
        let line = line(&[(0.0, 0.0), (1.0, 1.0)]);
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"[{"x":0.0,"y":0.0},{"x":1.0,"y":1.0}]"#);
        assert_eq!(serde_json::from_str::<LineString>(&json).unwrap(), line);

        assert!(serde_json::from_str::<LineString>(r#"[{"x":0.0,"y":0.0}]"#).is_err());
    }

    #[test]
    fn concurrent_readers() {
        let line = line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| (line.is_ring(), line.envelope())))
                .collect();
            for handle in handles {
                assert_eq!(
                    handle.join().unwrap(),
                    (true, Some(Rect::new(0.0, 0.0, 1.0, 1.0)))
                );
            }
        });
    }
}
