//! Conversions between the crate types and [`geo_types`](::geo_types).
//!
//! `geo_types` coordinates have no `z` ordinate, so it is dropped on conversion.

use ::geo_types::coord;

use crate::coord::Coord;
use crate::error::GeometryError;
use crate::geometry::Geometry;
use crate::line_string::LineString;

impl From<::geo_types::Coord<f64>> for Coord {
    fn from(value: ::geo_types::Coord<f64>) -> Self {
        Coord::new(value.x, value.y)
    }
}

impl From<Coord> for ::geo_types::Coord<f64> {
    fn from(value: Coord) -> Self {
        coord!(x: value.x(), y: value.y())
    }
}

impl From<&LineString> for ::geo_types::LineString<f64> {
    fn from(value: &LineString) -> Self {
        ::geo_types::LineString::new(value.coordinates().iter().map(|&c| c.into()).collect())
    }
}

impl TryFrom<::geo_types::LineString<f64>> for LineString {
    type Error = GeometryError;

    fn try_from(value: ::geo_types::LineString<f64>) -> Result<Self, Self::Error> {
        LineString::new(value.0.into_iter().map(Coord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn line_string_conversion() {
        let line = LineString::new(vec![
            Coord::new_3d(0.0, 0.0, 5.0),
            Coord::new(1.0, 0.0),
            Coord::new(1.0, 1.0),
            Coord::new(0.0, 0.0),
        ])
        .unwrap();

        let converted = ::geo_types::LineString::from(&line);
        assert_eq!(converted.0.len(), 4);
        assert_eq!(converted.is_closed(), line.is_closed());

        let back = LineString::try_from(converted).unwrap();
        assert!(back.equals_exact(&line, 0.0));
        assert_eq!(back.coordinate_n(0).unwrap().z(), None);
    }

    #[test]
    fn single_point_geo_line_string_is_rejected() {
        let single = ::geo_types::LineString::new(vec![coord!(x: 1.0, y: 1.0)]);
        assert_matches!(
            LineString::try_from(single),
            Err(GeometryError::InvalidGeometry(_))
        );
    }
}
