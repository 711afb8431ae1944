// File: crates/m3-demo/src/main.rs
// Summary: Demo loads `series,x,y` rows from CSV (plus optional TOML config) and renders SVG + PNG.

use anyhow::{Context, Result};
use m3_core::{Bounded, Graph, GraphConfig, Point, Series, SvgDocument, TracingDiagnostics};
use m3_render_skia::SkiaSurface;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Usage: m3-demo [data.csv] [config.toml]
    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from);
    let config_path = args.next().map(PathBuf::from);

    let config = match &config_path {
        Some(p) => load_config(p).with_context(|| format!("failed to load config '{}'", p.display()))?,
        None => GraphConfig::default(),
    };

    let (name, series) = match &input {
        Some(p) => {
            let series = load_series_csv(p).with_context(|| format!("failed to load CSV '{}'", p.display()))?;
            let name = p.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
            (name, series)
        }
        None => {
            tracing::info!("no input given; rendering built-in sample");
            ("sample".to_string(), sample_series()?)
        }
    };
    if series.is_empty() {
        anyhow::bail!("no series loaded - check headers (series,x,y).");
    }
    tracing::info!(series = series.len(), points = series.iter().map(Series::len).sum::<usize>(), "loaded data");

    let graph = Graph::new(name.clone(), series, config)?;
    let diag = TracingDiagnostics;

    let range = graph.range_with(&diag)?;
    let units = graph.units_with(&diag)?;
    tracing::info!(
        x_min = range.x_min, x_max = range.x_max, y_min = range.y_min, y_max = range.y_max,
        x_unit = units.x.label(), y_step = units.y.factor,
        "computed range"
    );

    // 1) SVG document
    let mut doc = SvgDocument::new(graph.config());
    graph.render_with(&mut doc, &diag)?;
    let out_svg = out_name(&name, "svg");
    std::fs::write(&out_svg, doc.finish()).with_context(|| format!("writing {}", out_svg.display()))?;
    println!("Wrote {}", out_svg.display());

    // 2) PNG via Skia
    let mut raster = SkiaSurface::new(graph.config())?;
    graph.render_with(&mut raster, &diag)?;
    let out_png = out_name(&name, "png");
    raster.write_png(&out_png)?;
    println!("Wrote {}", out_png.display());

    Ok(())
}

fn load_config(path: &Path) -> Result<GraphConfig> {
    let text = std::fs::read_to_string(path)?;
    let config: GraphConfig = toml::from_str(&text)?;
    Ok(config)
}

/// Produce output file name like target/out/chart_<name>.<ext>
fn out_name(name: &str, ext: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{}.{}", name, ext));
    out
}

/// Load `series,x,y` rows; series keep first-appearance order.
fn load_series_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_name = idx(&["series", "name"]);
    let i_x = idx(&["x", "time", "timestamp"]).context("missing x/time column")?;
    let i_y = idx(&["y", "value"]).context("missing y/value column")?;

    let mut groups: Vec<(String, Vec<Point>)> = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = i_name.and_then(|i| rec.get(i)).unwrap_or("series").to_string();
        let field = |i: usize| -> Result<f64> {
            let raw = rec.get(i).unwrap_or("");
            raw.parse::<f64>().with_context(|| format!("row {}: '{}' is not a number", row + 1, raw))
        };
        let point = Point::new(field(i_x)?, field(i_y)?).with_context(|| format!("row {}", row + 1))?;

        match groups.iter_mut().find(|(n, _)| *n == name) {
            Some((_, points)) => points.push(point),
            None => groups.push((name, vec![point])),
        }
    }
    Ok(groups.into_iter().map(|(name, points)| Series::new(name, points)).collect())
}

fn sample_series() -> Result<Vec<Series>> {
    Ok(vec![
        Series::from_xy("A", &[(3.0, 4.0), (2.0, 8.0), (5.0, 10.0)])?,
        Series::from_xy("B", &[(1.0, 100.0), (4.0, 2.0), (5.0, 8.0)])?,
    ])
}
