//! Topological dimension of geometries and their boundaries.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Topological dimension.
///
/// [`Dimension::False`] is the dimension of the empty set. It is returned as the boundary dimension of geometries that
/// have no boundary, like closed line strings or points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Empty set, "no boundary".
    False,
    /// Point (0).
    Point,
    /// Curve (1).
    Curve,
    /// Surface (2).
    Surface,
}

impl Dimension {
    /// Numeric code of the dimension: `-1` for [`Dimension::False`], `0`, `1` and `2` for the rest.
    pub fn value(self) -> i8 {
        match self {
            Dimension::False => -1,
            Dimension::Point => 0,
            Dimension::Curve => 1,
            Dimension::Surface => 2,
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::False => write!(f, "F"),
            other => write!(f, "{}", other.value()),
        }
    }
}
