//! Construction policy for geometries.

use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::error::{GeometryError, Result};
use crate::line_string::LineString;
use crate::point::Point;

/// Defines how ordinates of the created geometries are rounded.
///
/// Deserialization fails for fixed models with a scale that is not positive and finite.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", try_from = "RawPrecisionModel")]
pub enum PrecisionModel {
    /// Ordinates are stored as given.
    #[default]
    Floating,
    /// Ordinates are rounded to the grid of `1 / scale` step. `scale` must be positive and finite.
    Fixed {
        /// Number of grid steps per unit.
        scale: f64,
    },
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawPrecisionModel {
    Floating,
    Fixed { scale: f64 },
}

impl TryFrom<RawPrecisionModel> for PrecisionModel {
    type Error = GeometryError;

    fn try_from(value: RawPrecisionModel) -> Result<Self> {
        let model = match value {
            RawPrecisionModel::Floating => PrecisionModel::Floating,
            RawPrecisionModel::Fixed { scale } => PrecisionModel::Fixed { scale },
        };
        model.validate()?;
        Ok(model)
    }
}

impl PrecisionModel {
    /// Returns [`GeometryError::InvalidGeometry`] if the model is fixed and its scale is not positive and finite.
    pub fn validate(&self) -> Result<()> {
        match self {
            PrecisionModel::Fixed { scale } if !(scale.is_finite() && *scale > 0.0) => {
                Err(GeometryError::InvalidGeometry(format!(
                    "fixed precision model scale must be positive and finite (found {scale})"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Rounds the value according to the precision model.
    pub fn make_precise(&self, value: f64) -> f64 {
        match self {
            PrecisionModel::Floating => value,
            PrecisionModel::Fixed { scale } => (value * scale).round() / scale,
        }
    }

    fn make_coord_precise(&self, coord: Coord) -> Coord {
        match self {
            PrecisionModel::Floating => coord,
            PrecisionModel::Fixed { .. } => coord.map_ordinates(|v| self.make_precise(v)),
        }
    }
}

/// What to do with equal consecutive points when constructing a line string.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatedPoints {
    /// Keep the points as given.
    #[default]
    Allow,
    /// Fail the construction with [`GeometryError::InvalidGeometry`].
    Reject,
}

/// Creates geometries following the configured construction policy.
///
/// The factory can be deserialized from a configuration, missing fields take their default values:
///
/// ```
/// use planar_types::{GeometryFactory, PrecisionModel, RepeatedPoints};
///
/// let factory: GeometryFactory = serde_json::from_str(r#"{"repeated_points": "reject"}"#).unwrap();
/// assert_eq!(factory.precision(), PrecisionModel::Floating);
/// assert_eq!(factory.repeated_points(), RepeatedPoints::Reject);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryFactory {
    precision: PrecisionModel,
    repeated_points: RepeatedPoints,
}

impl GeometryFactory {
    /// Creates a factory with floating precision that allows repeated points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the precision model.
    pub fn with_precision(mut self, precision: PrecisionModel) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the repeated points policy.
    pub fn with_repeated_points(mut self, repeated_points: RepeatedPoints) -> Self {
        self.repeated_points = repeated_points;
        self
    }

    /// Precision model of the factory.
    pub fn precision(&self) -> PrecisionModel {
        self.precision
    }

    /// Repeated points policy of the factory.
    pub fn repeated_points(&self) -> RepeatedPoints {
        self.repeated_points
    }

    /// Creates a line string. The points are rounded by the precision model before the repeated points check.
    ///
    /// Fails with [`GeometryError::InvalidGeometry`] if the precision model is invalid.
    pub fn line_string(&self, points: Vec<Coord>) -> Result<LineString> {
        self.precision.validate()?;
        let points: Vec<Coord> = match self.precision {
            PrecisionModel::Floating => points,
            PrecisionModel::Fixed { .. } => points
                .into_iter()
                .map(|p| self.precision.make_coord_precise(p))
                .collect(),
        };

        let line = LineString::new(points)?;
        if self.repeated_points == RepeatedPoints::Reject && line.has_repeated_points() {
            log::debug!("Rejected line string with repeated consecutive points");
            return Err(GeometryError::InvalidGeometry(
                "LineString has equal consecutive points".into(),
            ));
        }

        if line.has_repeated_points() {
            log::trace!("Line string created with repeated consecutive points");
        }

        Ok(line)
    }

    /// Same as [`GeometryFactory::line_string`], but absent input creates an empty line string.
    pub fn line_string_from(&self, points: Option<Vec<Coord>>) -> Result<LineString> {
        self.line_string(points.unwrap_or_default())
    }

    /// Creates an empty line string.
    pub fn empty_line_string(&self) -> LineString {
        LineString::empty()
    }

    /// Creates a point, or an empty point if `coord` is `None`.
    ///
    /// Fails with [`GeometryError::InvalidGeometry`] if the precision model is invalid.
    pub fn point(&self, coord: Option<Coord>) -> Result<Point> {
        self.precision.validate()?;
        Ok(coord.map(|c| self.precision.make_coord_precise(c)).into())
    }
}
