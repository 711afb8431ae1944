// File: crates/m3-core/src/diagnostics.rs
// Summary: Data-quality warnings and the observer trait that receives them.
// Notes:
// - Warnings never change computed output; they only describe it.
// - The library default is `Silent`; callers opt into logging with
//   `TracingDiagnostics` or capture warnings with `Recorder`.

use std::cell::RefCell;
use std::fmt;

use crate::geometry::AxisKind;

/// Non-fatal advisories about the data flowing through the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum DataWarning {
    /// Series has no points; it cannot be drawn or bounded.
    EmptySeries { name: String },
    /// Series has a single point; its path is a zero-length stroke.
    SinglePointSeries { name: String },
    /// x is expected to be integer milliseconds since epoch.
    NonIntegralTimestamp { x: f64 },
    /// A value normalized outside [0, 1]; the scale is probably stale.
    OutOfBounds { axis: AxisKind, value: f64, normalized: f64 },
    /// A label block is larger than the axis it should sit on.
    OversizedLabel { block: f64, axis_length: f64 },
    /// Range requested over a node without children.
    EmptyRange { node: String },
}

impl fmt::Display for DataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySeries { name } => write!(f, "series '{name}' contains no data points"),
            Self::SinglePointSeries { name } => {
                write!(f, "series '{name}' contains only one data point")
            }
            Self::NonIntegralTimestamp { x } => {
                write!(f, "expected x to be integer ms since epoch, got {x}")
            }
            Self::OutOfBounds { axis, value, normalized } => write!(
                f,
                "{axis} value {value} outside of expected bounds (normalized {normalized})"
            ),
            Self::OversizedLabel { block, axis_length } => {
                write!(f, "axis of {axis_length}px is too small for {block}px labels")
            }
            Self::EmptyRange { node } => write!(f, "range requested over empty {node}"),
        }
    }
}

/// Observer for [`DataWarning`]s. Implementations must not panic.
pub trait Diagnostics {
    fn warn(&self, warning: DataWarning);
}

/// Discards every warning.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Diagnostics for Silent {
    fn warn(&self, _warning: DataWarning) {}
}

pub(crate) static SILENT: Silent = Silent;

/// Forwards warnings to `tracing` at WARN level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, warning: DataWarning) {
        tracing::warn!(target: "m3::data", "{warning}");
    }
}

/// Keeps warnings in memory, in arrival order.
#[derive(Debug, Default)]
pub struct Recorder {
    seen: RefCell<Vec<DataWarning>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<DataWarning> {
        self.seen.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.borrow().is_empty()
    }
}

impl Diagnostics for Recorder {
    fn warn(&self, warning: DataWarning) {
        self.seen.borrow_mut().push(warning);
    }
}
