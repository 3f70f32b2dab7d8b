//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GeometryError {
    /// The input cannot form a geometry of the requested kind.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A coordinate was requested by an index outside of the coordinate sequence.
    #[error("coordinate index {index} is out of range for a sequence of {len} coordinates")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeometryError>;
