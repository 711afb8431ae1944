// File: crates/m3-core/src/scale.rs
// Summary: Normalization (domain -> [0,1]) and pixel scaling (domain -> surface) transforms.

use std::fmt;

use crate::diagnostics::{DataWarning, Diagnostics};
use crate::error::{ChartError, Result};
use crate::geometry::{AxisKind, Range};
use crate::types::Dimensions;

/// Domain-to-pixel transform consumed by the path builder.
pub trait ScaleTransform {
    fn to_screen_x(&self, x: f64) -> f64;
    fn to_screen_y(&self, y: f64) -> f64;
    /// Observer for advisories raised while transforming.
    fn diagnostics(&self) -> &dyn Diagnostics;
}

/// Linear map of one axis onto [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisNorm {
    pub axis: AxisKind,
    pub min: f64,
    pub max: f64,
}

impl AxisNorm {
    /// Contract: `min < max`, both finite, and `max - min` finite. Equal
    /// bounds would divide by zero; an overflowing span yields NaN.
    pub fn new(axis: AxisKind, min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::range(format!("{axis} bounds must be finite")));
        }
        if min >= max {
            return Err(ChartError::range(format!(
                "degenerate {axis} normalization bounds [{min}, {max}]"
            )));
        }
        if !(max - min).is_finite() {
            return Err(ChartError::range(format!(
                "{axis} span of [{min}, {max}] overflows"
            )));
        }
        Ok(Self { axis, min, max })
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        (v - self.min) / (self.max - self.min)
    }
}

/// Per-axis normalizers bound to one range.
#[derive(Clone, Copy)]
pub struct Normalize<'d> {
    x: AxisNorm,
    y: AxisNorm,
    diag: &'d dyn Diagnostics,
}

impl<'d> Normalize<'d> {
    pub fn new(range: &Range, diag: &'d dyn Diagnostics) -> Result<Self> {
        Ok(Self {
            x: AxisNorm::new(AxisKind::X, range.x_min, range.x_max)?,
            y: AxisNorm::new(AxisKind::Y, range.y_min, range.y_max)?,
            diag,
        })
    }

    pub fn x(&self, v: f64) -> f64 {
        self.checked(&self.x, v)
    }

    pub fn y(&self, v: f64) -> f64 {
        self.checked(&self.y, v)
    }

    pub fn axis(&self, axis: AxisKind) -> &AxisNorm {
        match axis {
            AxisKind::X => &self.x,
            AxisKind::Y => &self.y,
        }
    }

    pub fn diagnostics(&self) -> &'d dyn Diagnostics {
        self.diag
    }

    // Out-of-range input usually means data changed after this range was taken.
    fn checked(&self, norm: &AxisNorm, v: f64) -> f64 {
        let k = norm.apply(v);
        if !(0.0..=1.0).contains(&k) {
            self.diag.warn(DataWarning::OutOfBounds { axis: norm.axis, value: v, normalized: k });
        }
        k
    }
}

impl fmt::Debug for Normalize<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalize").field("x", &self.x).field("y", &self.y).finish_non_exhaustive()
    }
}

/// Maps domain values onto a drawing surface. Pixel rows grow downward, so
/// larger y values land on smaller row numbers.
#[derive(Clone, Copy)]
pub struct Scale<'d> {
    norm: Normalize<'d>,
    width: f64,
    height: f64,
}

impl<'d> Scale<'d> {
    pub fn new(range: &Range, surface: Dimensions, diag: &'d dyn Diagnostics) -> Result<Self> {
        if !(surface.width.is_finite() && surface.width > 0.0) {
            return Err(ChartError::mismatch("surface.width", "a positive pixel length"));
        }
        if !(surface.height.is_finite() && surface.height > 0.0) {
            return Err(ChartError::mismatch("surface.height", "a positive pixel length"));
        }
        Ok(Self { norm: Normalize::new(range, diag)?, width: surface.width, height: surface.height })
    }

    pub fn normalize(&self) -> &Normalize<'d> {
        &self.norm
    }

    pub fn surface(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

impl ScaleTransform for Scale<'_> {
    #[inline]
    fn to_screen_x(&self, x: f64) -> f64 {
        self.norm.x(x) * self.width
    }

    #[inline]
    fn to_screen_y(&self, y: f64) -> f64 {
        self.height - self.norm.y(y) * self.height
    }

    fn diagnostics(&self) -> &dyn Diagnostics {
        self.norm.diag
    }
}

impl fmt::Debug for Scale<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scale")
            .field("norm", &self.norm)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
