// File: crates/m3-core/src/series.rs
// Summary: Point and Series data model; series path rendering entry point.
// Notes:
// - Points are validated on construction; a Series accepts any point order
//   and is sorted only when a path is built.

use crate::diagnostics::{DataWarning, Diagnostics};
use crate::error::{ChartError, Result};
use crate::geometry::{aggregate, Bounded, Range};
use crate::path::build_path;
use crate::scale::ScaleTransform;

/// A single (x, y) sample. x is conventionally integer ms since epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Construct a point, rejecting NaN and infinite coordinates.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() {
            return Err(ChartError::mismatch("x", "a finite number"));
        }
        if !y.is_finite() {
            return Err(ChartError::mismatch("y", "a finite number"));
        }
        Ok(Self { x, y })
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Bounded for Point {
    fn range_with(&self, diag: &dyn Diagnostics) -> Result<Range> {
        if self.x.fract() != 0.0 {
            diag.warn(DataWarning::NonIntegralTimestamp { x: self.x });
        }
        Ok(Range::at(self.x, self.y))
    }
}

/// Named, ordered collection of points.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    name: String,
    points: Vec<Point>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self { name: name.into(), points }
    }

    /// Build from raw `(x, y)` pairs, validating each pair.
    pub fn from_xy(name: impl Into<String>, data: &[(f64, f64)]) -> Result<Self> {
        let points = data
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(name, points))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Report empty and single-point series to `diag`.
    pub(crate) fn check_degenerate(&self, diag: &dyn Diagnostics) {
        match self.points.len() {
            0 => diag.warn(DataWarning::EmptySeries { name: self.name.clone() }),
            1 => diag.warn(DataWarning::SinglePointSeries { name: self.name.clone() }),
            _ => {}
        }
    }

    /// Closed, mirrored SVG path description of this series under `scale`.
    pub fn to_path_string<S: ScaleTransform + ?Sized>(&self, scale: &S) -> String {
        build_path(self, scale)
    }
}

impl Bounded for Series {
    fn range_with(&self, diag: &dyn Diagnostics) -> Result<Range> {
        if self.points.len() == 1 {
            diag.warn(DataWarning::SinglePointSeries { name: self.name.clone() });
        }
        aggregate(&format!("series '{}'", self.name), &self.points, diag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Recorder;

    #[test]
    fn nan_coordinates_are_type_mismatches() {
        assert_eq!(
            Point::new(f64::NAN, 1.0),
            Err(ChartError::TypeMismatch { field: "x", expected: "a finite number" })
        );
        assert!(Point::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn fractional_timestamp_is_only_a_warning() {
        let rec = Recorder::new();
        let p = Point::new(1.5, 2.0).unwrap();
        let r = p.range_with(&rec).unwrap();
        assert_eq!(r, Range::at(1.5, 2.0));
        assert_eq!(rec.warnings(), vec![DataWarning::NonIntegralTimestamp { x: 1.5 }]);
    }

    #[test]
    fn empty_series_has_no_range() {
        let rec = Recorder::new();
        let s = Series::new("empty", Vec::new());
        assert!(matches!(s.range_with(&rec), Err(ChartError::InvalidRange(_))));
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn series_range_keeps_baseline_visible() {
        let s = Series::from_xy("A", &[(3.0, 4.0), (2.0, 8.0), (5.0, 10.0)]).unwrap();
        let r = s.range().unwrap();
        assert_eq!(r, Range { x_min: 2.0, x_max: 5.0, y_min: 0.0, y_max: 10.0 });
    }

    #[test]
    fn from_xy_stops_at_first_bad_pair() {
        let err = Series::from_xy("bad", &[(0.0, 1.0), (1.0, f64::NAN)]).unwrap_err();
        assert_eq!(err, ChartError::TypeMismatch { field: "y", expected: "a finite number" });
    }
}
