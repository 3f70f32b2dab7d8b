//! Types and functions on geometries in cartesian coordinates.

mod orient;
mod point;
mod rect;

pub use orient::Orientation;
pub use point::{CartesianPoint2d, CartesianPoint2dFloat};
pub use rect::Rect;
