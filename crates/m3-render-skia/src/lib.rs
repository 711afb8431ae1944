// File: crates/m3-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; implements the m3 `Surface` trait and encodes PNGs.

use anyhow::Result;
use skia_safe as skia;

use m3_core::{GraphConfig, Label, PathStyle, Region, Rgba, Surface};

/// Raster surface laid out like `SvgDocument`: plot area top-left, x-axis
/// strip below, y-axis strip to the right.
pub struct SkiaSurface {
    surface: skia::Surface,
    plot_width: f32,
    plot_height: f32,
    font: skia::Font,
    text_color: skia::Color,
    skipped: usize,
}

impl SkiaSurface {
    pub fn new(config: &GraphConfig) -> Result<Self> {
        let plot_width = config.drawing_surface.width.max(config.x_axis.width);
        let plot_height = config.drawing_surface.height.max(config.y_axis.height);
        let width = (plot_width + config.y_axis.width).ceil() as i32;
        let height = (plot_height + config.x_axis.height).ceil() as i32;

        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        surface.canvas().clear(skia::Color::WHITE);

        let mut font = skia::Font::default();
        font.set_size(12.0);

        Ok(Self {
            surface,
            plot_width: plot_width as f32,
            plot_height: plot_height as f32,
            font,
            text_color: skia::Color::from_argb(255, 60, 60, 70),
            skipped: 0,
        })
    }

    pub fn size(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    /// Paths whose description Skia could not parse.
    pub fn skipped_paths(&self) -> usize {
        self.skipped
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

impl Surface for SkiaSurface {
    fn draw_path(&mut self, d: &str, style: &PathStyle) {
        let Some(path) = skia::Path::from_svg(d) else {
            tracing::warn!(target: "m3::render", "skipping unparsable path ({} bytes)", d.len());
            self.skipped += 1;
            return;
        };
        let canvas = self.surface.canvas();

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(to_color(style.fill));
        canvas.draw_path(&path, &fill);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(style.stroke_weight as f32);
        stroke.set_color(to_color(style.stroke));
        canvas.draw_path(&path, &stroke);
    }

    fn draw_label(&mut self, region: Region, label: &Label) {
        let (ox, oy) = match region {
            Region::XAxis => (0.0, self.plot_height),
            Region::YAxis => (self.plot_width, 0.0),
        };
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(self.text_color);
        // label y is the block top; draw_str wants a baseline
        let origin = (ox + label.x as f32, oy + label.y as f32 + self.font.size());
        let font = self.font.clone();
        self.surface.canvas().draw_str(&label.text, origin, &font, &paint);
    }
}

fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}
