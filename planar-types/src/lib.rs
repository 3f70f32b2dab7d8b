//! Planar vector geometries built on a strict coordinate sequence model.
//!
//! The central type of the crate is [`LineString`]: an ordered, immutable sequence of [`Coord`] values with structural
//! predicates (closed, ring, simple, empty) and value semantics (exact equality with tolerance, deep copy).
//!
//! All geometries implement the [`Geometry`] trait, and can be put together into the [`Geom`] enum when the kind of
//! the geometry is only known at runtime.
//!
//! ```
//! use planar_types::{Coord, Dimension, Geometry, LineString};
//!
//! let line = LineString::new(vec![
//!     Coord::new(0.0, 0.0),
//!     Coord::new(1.0, 0.0),
//!     Coord::new(1.0, 1.0),
//!     Coord::new(0.0, 0.0),
//! ])?;
//!
//! assert!(line.is_closed());
//! assert!(line.is_ring());
//! assert_eq!(line.boundary_dimension(), Dimension::False);
//! # Ok::<(), planar_types::GeometryError>(())
//! ```

pub mod cartesian;
mod coord;
mod dimension;
mod error;
mod factory;
#[cfg(feature = "geo-types")]
mod geo_types;
mod geometry;
mod line_string;
mod point;
mod segment;
mod simple;

pub use coord::Coord;
pub use dimension::Dimension;
pub use error::{GeometryError, Result};
pub use factory::{GeometryFactory, PrecisionModel, RepeatedPoints};
pub use geometry::{coordinates_equal, Geom, Geometry, GeometryKind};
pub use line_string::LineString;
pub use point::Point;
pub use segment::Segment;
pub use simple::{SegmentIntersectionOracle, SimplicityOracle};
