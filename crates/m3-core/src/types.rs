// File: crates/m3-core/src/types.rs
// Summary: Graph configuration: pixel dimensions per region and drawing-surface styling.

use serde::Deserialize;

use crate::error::{ChartError, Result};

/// Default drawing-surface width in pixels.
pub const WIDTH: f64 = 900.0;
/// Default drawing-surface height in pixels.
pub const HEIGHT: f64 = 260.0;

/// Width/height pair, in pixels.
/// Contract: both fields finite and positive once validated.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn validate(&self, width_field: &'static str, height_field: &'static str) -> Result<()> {
        check_length(self.width, width_field)?;
        check_length(self.height, height_field)
    }
}

/// Drawing-surface size plus the styling applied to every series path.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: f64,
    pub height: f64,
    pub stroke: String,
    pub fill: String,
    pub stroke_weight: f64,
}

impl SurfaceConfig {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            stroke: "steelblue".to_string(),
            fill: "steelblue".to_string(),
            stroke_weight: 2.0,
        }
    }
}

/// Per-graph layout configuration. Missing fields take the defaults below.
///
/// | region           | width | height |
/// |------------------|-------|--------|
/// | container        | 650   | 260    |
/// | gesture_region   | 570   | 260    |
/// | x_axis           | 900   | 50     |
/// | y_axis           | 80    | 260    |
/// | drawing_surface  | 900   | 260    |
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub container: Dimensions,
    pub gesture_region: Dimensions,
    pub x_axis: Dimensions,
    pub y_axis: Dimensions,
    pub drawing_surface: SurfaceConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            container: Dimensions::new(650.0, 260.0),
            gesture_region: Dimensions::new(570.0, 260.0),
            x_axis: Dimensions::new(900.0, 50.0),
            y_axis: Dimensions::new(80.0, 260.0),
            drawing_surface: SurfaceConfig::default(),
        }
    }
}

impl GraphConfig {
    /// Reject non-positive or non-finite pixel lengths and blank style strings.
    pub fn validate(&self) -> Result<()> {
        self.container.validate("container.width", "container.height")?;
        self.gesture_region.validate("gesture_region.width", "gesture_region.height")?;
        self.x_axis.validate("x_axis.width", "x_axis.height")?;
        self.y_axis.validate("y_axis.width", "y_axis.height")?;
        let s = &self.drawing_surface;
        s.dimensions().validate("drawing_surface.width", "drawing_surface.height")?;
        if !s.stroke_weight.is_finite() || s.stroke_weight < 0.0 {
            return Err(ChartError::mismatch(
                "drawing_surface.stroke_weight",
                "a non-negative number",
            ));
        }
        if s.stroke.trim().is_empty() {
            return Err(ChartError::mismatch("drawing_surface.stroke", "a color name"));
        }
        if s.fill.trim().is_empty() {
            return Err(ChartError::mismatch("drawing_surface.fill", "a color name"));
        }
        Ok(())
    }
}

fn check_length(v: f64, field: &'static str) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ChartError::mismatch(field, "a positive pixel length"))
    }
}
