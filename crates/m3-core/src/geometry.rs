// File: crates/m3-core/src/geometry.rs
// Summary: Bounding ranges and the recursive aggregation shared by Point, Series and Graph.

use std::fmt;

use crate::diagnostics::{DataWarning, Diagnostics, SILENT};
use crate::error::{ChartError, Result};

/// Which axis a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisKind {
    X,
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// Axis-aligned bounding box over a dataset.
/// Contract: `x_min <= x_max` and `y_min <= y_max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Range {
    /// Zero-area range at a single sample.
    pub const fn at(x: f64, y: f64) -> Self {
        Self { x_min: x, x_max: x, y_min: y, y_max: y }
    }

    /// Build a range, checking both axis orderings.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        let r = Self { x_min, x_max, y_min, y_max };
        r.check()?;
        Ok(r)
    }

    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Bounds of one axis as `(min, max)`.
    pub fn bounds(&self, axis: AxisKind) -> (f64, f64) {
        match axis {
            AxisKind::X => (self.x_min, self.x_max),
            AxisKind::Y => (self.y_min, self.y_max),
        }
    }

    /// Smallest range covering both.
    pub fn union(&self, other: &Range) -> Range {
        Range {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Stretch the y bounds so that y = 0 is always inside.
    pub fn with_baseline(self) -> Range {
        Range {
            y_min: if self.y_min > 0.0 { 0.0 } else { self.y_min },
            y_max: if self.y_max < 0.0 { 0.0 } else { self.y_max },
            ..self
        }
    }

    fn check(&self) -> Result<()> {
        // `!(a <= b)` also catches NaN bounds.
        if !(self.x_min <= self.x_max) {
            return Err(ChartError::range(format!(
                "(x) minimum {} exceeds maximum {}",
                self.x_min, self.x_max
            )));
        }
        if !(self.y_min <= self.y_max) {
            return Err(ChartError::range(format!(
                "(y) minimum {} exceeds maximum {}",
                self.y_min, self.y_max
            )));
        }
        Ok(())
    }
}

/// Anything that can report a bounding [`Range`] over itself or its children.
pub trait Bounded {
    /// Range with advisories sent to `diag`.
    fn range_with(&self, diag: &dyn Diagnostics) -> Result<Range>;

    /// Range with advisories discarded.
    fn range(&self) -> Result<Range> {
        self.range_with(&SILENT)
    }
}

/// Merge the ranges of `children`, then apply the baseline-visibility clamp.
///
/// `node` names the container in errors and warnings. An empty child set has
/// no defined range and is reported as [`ChartError::InvalidRange`].
pub fn aggregate<'a, T, I>(node: &str, children: I, diag: &dyn Diagnostics) -> Result<Range>
where
    T: Bounded + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut merged: Option<Range> = None;
    for child in children {
        let r = child.range_with(diag)?;
        merged = Some(match merged {
            Some(m) => m.union(&r),
            None => r,
        });
    }

    let Some(merged) = merged else {
        diag.warn(DataWarning::EmptyRange { node: node.to_string() });
        return Err(ChartError::range(format!("{node} has no data to bound")));
    };

    let out = merged.with_baseline();
    out.check()?;
    Ok(out)
}
