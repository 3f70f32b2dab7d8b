//! Self-intersection tests for coordinate sequences.

use crate::cartesian::CartesianPoint2d;
use crate::coord::Coord;
use crate::segment::Segment;

/// Decides whether a coordinate sequence, treated as a polyline, is free of self-intersections.
pub trait SimplicityOracle {
    /// Returns true if the polyline defined by `coords` does not intersect itself.
    ///
    /// The only common point allowed between non-adjacent segments is the closing point of a closed sequence.
    fn is_simple(&self, coords: &[Coord]) -> bool;
}

impl<F> SimplicityOracle for F
where
    F: Fn(&[Coord]) -> bool,
{
    fn is_simple(&self, coords: &[Coord]) -> bool {
        self(coords)
    }
}

/// Tests every pair of segments of the polyline against each other.
///
/// Runs in `O(n²)` time for `n` coordinates and allocates one vector of segments. Repeated consecutive points are
/// ignored.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SegmentIntersectionOracle;

impl SimplicityOracle for SegmentIntersectionOracle {
    fn is_simple(&self, coords: &[Coord]) -> bool {
        let segments: Vec<Segment<Coord>> = coords
            .windows(2)
            .map(|pair| Segment(&pair[0], &pair[1]))
            .filter(|segment| !segment.is_degenerate())
            .collect();

        if segments.len() < 2 {
            return true;
        }

        let is_closed = match (coords.first(), coords.last()) {
            (Some(first), Some(last)) => first.equal(last),
            _ => false,
        };
        let last = segments.len() - 1;
        let bounds: Vec<_> = segments.iter().map(Segment::bounding_rect).collect();

        for i in 0..last {
            for j in (i + 1)..=last {
                if !bounds[i].intersects(&bounds[j]) {
                    continue;
                }

                let (a, b) = (&segments[i], &segments[j]);
                let is_simple_pair = if j == i + 1 {
                    a.touches_only_at(b, a.1)
                } else if is_closed && i == 0 && j == last {
                    a.touches_only_at(b, a.0)
                } else {
                    !a.intersects(b)
                };

                if !is_simple_pair {
                    return false;
                }
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(points: &[(f64, f64)]) -> Vec<Coord> {
        points.iter().copied().map(Coord::from).collect()
    }

    fn is_simple(points: &[(f64, f64)]) -> bool {
        SegmentIntersectionOracle.is_simple(&coords(points))
    }

    #[test]
    fn trivial_sequences_are_simple() {
        assert!(is_simple(&[]));
        assert!(is_simple(&[(0.0, 0.0), (1.0, 1.0)]));
        assert!(is_simple(&[(0.0, 0.0), (0.0, 0.0)]));
    }

    #[test]
    fn open_lines() {
        assert!(is_simple(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]));
        assert!(is_simple(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]));
        assert!(is_simple(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (1.0, 1.0)]));

        // crossing
        assert!(!is_simple(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]));
        // going back along itself
        assert!(!is_simple(&[(0.0, 0.0), (2.0, 0.0), (1.0, 0.0)]));
        // end touches the interior
        assert!(!is_simple(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 0.0)]));
    }

    #[test]
    fn closed_lines() {
        assert!(is_simple(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]));
        assert!(is_simple(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0)
        ]));

        // bow tie
        assert!(!is_simple(&[
            (0.0, 0.0),
            (2.0, 2.0),
            (2.0, 0.0),
            (0.0, 2.0),
            (0.0, 0.0)
        ]));
        // there and back again
        assert!(!is_simple(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]));
    }

    #[test]
    fn closure_oracle() {
        let never = |_: &[Coord]| false;
        assert!(!never.is_simple(&coords(&[(0.0, 0.0), (1.0, 1.0)])));
    }
}
