// File: crates/m3-core/src/surface.rs
// Summary: Rendering-surface abstraction and an SVG document implementation.

use crate::labels::Label;
use crate::theme::PathStyle;
use crate::types::GraphConfig;

/// Area of the widget a label belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    XAxis,
    YAxis,
}

/// Receives finished geometry. Drawing never fails; backends report their
/// own errors when the output is finalized.
pub trait Surface {
    /// Draw a path description onto the plot area.
    fn draw_path(&mut self, d: &str, style: &PathStyle);
    /// Draw label text positioned relative to its axis region.
    fn draw_label(&mut self, region: Region, label: &Label);
}

/// Accumulates an SVG document: plot area top-left, x-axis strip below it,
/// y-axis strip to its right.
#[derive(Debug)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    plot_width: f64,
    plot_height: f64,
    font_size: f64,
    content: Vec<String>,
}

impl SvgDocument {
    pub fn new(config: &GraphConfig) -> Self {
        let plot_width = config.drawing_surface.width.max(config.x_axis.width);
        let plot_height = config.drawing_surface.height.max(config.y_axis.height);
        Self {
            width: plot_width + config.y_axis.width,
            height: plot_height + config.x_axis.height,
            plot_width,
            plot_height,
            font_size: 12.0,
            content: Vec::new(),
        }
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Number of drawn elements so far.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Render the final SVG string.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n  {}\n</svg>\n",
            self.content.join("\n  "),
            w = self.width,
            h = self.height,
        )
    }
}

impl Surface for SvgDocument {
    fn draw_path(&mut self, d: &str, style: &PathStyle) {
        self.content.push(format!(
            "<path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            d,
            style.fill.to_hex(),
            style.stroke.to_hex(),
            style.stroke_weight
        ));
    }

    fn draw_label(&mut self, region: Region, label: &Label) {
        let (ox, oy) = match region {
            Region::XAxis => (0.0, self.plot_height),
            Region::YAxis => (self.plot_width, 0.0),
        };
        self.content.push(format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" dominant-baseline=\"hanging\">{}</text>",
            ox + label.x,
            oy + label.y,
            self.font_size,
            escape_xml(&label.text)
        ));
    }
}

/// Escape the five XML special characters.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
