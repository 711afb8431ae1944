// File: crates/m3-core/src/chart.rs
// Summary: Graph struct; boundary API for range, scale, units, labels and rendering.

use crate::axis::{select_units, Units};
use crate::diagnostics::{Diagnostics, SILENT};
use crate::error::Result;
use crate::geometry::{aggregate, Bounded, Range};
use crate::labels::{fit_labels, format_time, format_value, Label, X_LABEL_BLOCK, Y_LABEL_BLOCK};
use crate::scale::{Normalize, Scale};
use crate::series::Series;
use crate::surface::{Region, Surface};
use crate::theme::PathStyle;
use crate::types::{GraphConfig, SurfaceConfig};

/// Label sets for both axes.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabels {
    pub x: Vec<Label>,
    pub y: Vec<Label>,
}

/// Named collection of series plus layout configuration.
///
/// Every derived value (range, scale, units) is recomputed on demand; a
/// `Scale` taken from one graph says nothing about another.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    name: String,
    series: Vec<Series>,
    config: GraphConfig,
}

impl Graph {
    /// Construct with an explicit configuration, validated up front.
    pub fn new(name: impl Into<String>, series: Vec<Series>, config: GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { name: name.into(), series, config })
    }

    /// Construct with [`GraphConfig::default`].
    pub fn with_defaults(name: impl Into<String>, series: Vec<Series>) -> Self {
        Self { name: name.into(), series, config: GraphConfig::default() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn normalize(&self) -> Result<Normalize<'static>> {
        self.normalize_with(&SILENT)
    }

    pub fn normalize_with<'d>(&self, diag: &'d dyn Diagnostics) -> Result<Normalize<'d>> {
        Normalize::new(&self.range_with(diag)?, diag)
    }

    /// Pixel scale onto `surface` (usually `config().drawing_surface`).
    pub fn scale(&self, surface: &SurfaceConfig) -> Result<Scale<'static>> {
        self.scale_with(surface, &SILENT)
    }

    pub fn scale_with<'d>(&self, surface: &SurfaceConfig, diag: &'d dyn Diagnostics) -> Result<Scale<'d>> {
        Scale::new(&self.range_with(diag)?, surface.dimensions(), diag)
    }

    pub fn units(&self) -> Result<Units> {
        self.units_with(&SILENT)
    }

    pub fn units_with(&self, diag: &dyn Diagnostics) -> Result<Units> {
        let range = self.range_with(diag)?;
        select_units(&range, self.config.x_axis.width, self.config.y_axis.height)
    }

    pub fn labels(&self) -> Result<AxisLabels> {
        self.labels_with(&SILENT)
    }

    /// x labels lean toward later times, y labels toward the baseline.
    pub fn labels_with(&self, diag: &dyn Diagnostics) -> Result<AxisLabels> {
        let range = self.range_with(diag)?;
        let x_len = self.config.x_axis.width;
        let y_len = self.config.y_axis.height;
        let units = select_units(&range, x_len, y_len)?;

        let x_factor = units.x.factor();
        let x_unit_px = x_factor / range.x_span() * x_len;
        let x = fit_labels(X_LABEL_BLOCK, x_len, x_unit_px, true, diag)?
            .into_iter()
            .map(|p| Label {
                text: format_time(range.x_min + p.units as f64 * x_factor, units.x),
                x: p.offset,
                y: 0.0,
            })
            .collect();

        let y_factor = units.y.factor;
        let y_unit_px = y_factor / range.y_span() * y_len;
        let y = fit_labels(Y_LABEL_BLOCK, y_len, y_unit_px, false, diag)?
            .into_iter()
            .map(|p| Label {
                text: format_value(range.y_min + p.units as f64 * y_factor),
                x: 0.0,
                // pixel rows grow downward
                y: y_len - p.offset - Y_LABEL_BLOCK,
            })
            .collect();

        Ok(AxisLabels { x, y })
    }

    /// Path description per series, in series order.
    pub fn paths(&self) -> Result<Vec<String>> {
        self.paths_with(&SILENT)
    }

    pub fn paths_with(&self, diag: &dyn Diagnostics) -> Result<Vec<String>> {
        let scale = self.scale_with(&self.config.drawing_surface, diag)?;
        Ok(self.series.iter().map(|s| s.to_path_string(&scale)).collect())
    }

    /// Draw every series path and both label sets onto `surface`.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        self.render_with(surface, &SILENT)
    }

    pub fn render_with<S: Surface + ?Sized>(&self, surface: &mut S, diag: &dyn Diagnostics) -> Result<()> {
        let style = PathStyle::from_surface(&self.config.drawing_surface)?;
        for d in self.paths_with(diag)? {
            surface.draw_path(&d, &style);
        }
        let labels = self.labels_with(diag)?;
        for l in &labels.x {
            surface.draw_label(Region::XAxis, l);
        }
        for l in &labels.y {
            surface.draw_label(Region::YAxis, l);
        }
        Ok(())
    }
}

impl Bounded for Graph {
    fn range_with(&self, diag: &dyn Diagnostics) -> Result<Range> {
        aggregate(&format!("graph '{}'", self.name), &self.series, diag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let mut cfg = GraphConfig::default();
        cfg.drawing_surface.height = -1.0;
        assert!(matches!(Graph::new("g", Vec::new(), cfg), Err(ChartError::TypeMismatch { .. })));
    }

    #[test]
    fn empty_series_stops_render_before_drawing() {
        let a = Series::from_xy("A", &[(0.0, 1.0), (2.0, 3.0)]).unwrap();
        let g = Graph::with_defaults("g", vec![a, Series::new("empty", Vec::new())]);
        let mut doc = crate::surface::SvgDocument::new(g.config());
        assert!(matches!(g.render(&mut doc), Err(ChartError::InvalidRange(_))));
        assert!(doc.is_empty());
    }

    #[test]
    fn empty_graph_has_no_range() {
        let g = Graph::with_defaults("empty", Vec::new());
        assert!(matches!(g.range(), Err(ChartError::InvalidRange(_))));
    }
}
