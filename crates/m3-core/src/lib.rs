// File: crates/m3-core/src/lib.rs
// Summary: Core library entry point; exports the area-chart geometry pipeline.

pub mod axis;
pub mod chart;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod path;
pub mod scale;
pub mod series;
pub mod surface;
pub mod theme;
pub mod types;

pub use axis::{TimeUnit, Units, ValueUnit};
pub use chart::{AxisLabels, Graph};
pub use diagnostics::{DataWarning, Diagnostics, Recorder, Silent, TracingDiagnostics};
pub use error::{ChartError, Result};
pub use geometry::{AxisKind, Bounded, Range};
pub use labels::{fit_labels, Label, Placement};
pub use path::build_path;
pub use scale::{Normalize, Scale, ScaleTransform};
pub use series::{Point, Series};
pub use surface::{Region, Surface, SvgDocument};
pub use theme::{PathStyle, Rgba};
pub use types::{Dimensions, GraphConfig, SurfaceConfig};
