use crate::cartesian::{CartesianPoint2d, Orientation, Rect};
use num_traits::Zero;

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P> Clone for Segment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Segment<'_, P> {}

impl<P: CartesianPoint2d> Segment<'_, P> {
    /// Returns true if both endpoints of the segment are at the same location.
    pub fn is_degenerate(&self) -> bool {
        self.0.equal(self.1)
    }

    /// Bounding rectangle of the segment.
    pub fn bounding_rect(&self) -> Rect<P::Num> {
        let (x_min, x_max) = min_max(self.0.x(), self.1.x());
        let (y_min, y_max) = min_max(self.0.y(), self.1.y());
        Rect::new(x_min, y_min, x_max, y_max)
    }

    /// Returns true, if the segment has at least one common point with the `other` segment.
    pub fn intersects<Point: CartesianPoint2d<Num = P::Num>>(
        &self,
        other: &Segment<Point>,
    ) -> bool {
        let o1 = Orientation::triplet(self.0, self.1, other.0);
        let o2 = Orientation::triplet(self.0, self.1, other.1);
        let o3 = Orientation::triplet(other.0, other.1, self.0);
        let o4 = Orientation::triplet(other.0, other.1, self.1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o1 == Orientation::Collinear && on_segment(self.0, other.0, self.1))
            || (o2 == Orientation::Collinear && on_segment(self.0, other.1, self.1))
            || (o3 == Orientation::Collinear && on_segment(other.0, self.0, other.1))
            || (o4 == Orientation::Collinear && on_segment(other.0, self.1, other.1))
    }

    /// Returns true if the only common point of the two segments is `shared`, which must be an endpoint of both
    /// segments. Neither segment may be degenerate.
    pub fn touches_only_at<Point: CartesianPoint2d<Num = P::Num>>(
        &self,
        other: &Segment<Point>,
        shared: &impl CartesianPoint2d<Num = P::Num>,
    ) -> bool {
        let self_far = if self.0.equal(shared) { self.1 } else { self.0 };
        let other_far = if other.0.equal(shared) {
            other.1
        } else {
            other.0
        };

        if Orientation::triplet(self.0, self.1, other_far) != Orientation::Collinear {
            return true;
        }

        // Collinear segments overlap when both go the same way from the shared vertex.
        let a = self_far.sub(shared);
        let b = other_far.sub(shared);
        a.x * b.x + a.y * b.y <= P::Num::zero()
    }
}

/// Checks if `q` lies within the bounding box of `p`-`r`. Only meaningful for collinear triplets.
fn on_segment<Num: num_traits::Num + PartialOrd + Copy>(
    p: &impl CartesianPoint2d<Num = Num>,
    q: &impl CartesianPoint2d<Num = Num>,
    r: &impl CartesianPoint2d<Num = Num>,
) -> bool {
    let (x_min, x_max) = min_max(p.x(), r.x());
    let (y_min, y_max) = min_max(p.y(), r.y());

    q.x() <= x_max && q.x() >= x_min && q.y() <= y_max && q.y() >= y_min
}

fn min_max<Num: PartialOrd>(a: Num, b: Num) -> (Num, Num) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
