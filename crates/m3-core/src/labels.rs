// File: crates/m3-core/src/labels.rs
// Summary: Axis label fitting (even spacing, no overlap, biased toward one end) and label text.

use chrono::{DateTime, Utc};

use crate::axis::TimeUnit;
use crate::diagnostics::{DataWarning, Diagnostics};
use crate::error::{ChartError, Result};

/// Pixel length reserved for each x-axis label.
pub const X_LABEL_BLOCK: f64 = 100.0;
/// Pixel length reserved for each y-axis label.
pub const Y_LABEL_BLOCK: f64 = 50.0;

/// Where a label block starts along its axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Pixels from the axis' low-value end to the start of the block.
    pub offset: f64,
    /// Whole units between the low-value end and this label.
    pub units: u64,
}

/// Positioned label text, in pixels relative to its axis region.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Fit label blocks of `block` px onto an axis of `axis_len` px whose
/// meaningful unit spans `unit_px` px.
///
/// Labels start on whole-unit boundaries and are spaced
/// `max(1, ceil(block / unit_px))` units apart, so no two blocks overlap.
/// With `bias_large` the chain ends at the last unit boundary that still
/// fits; otherwise it starts at 0. The result is ascending by offset.
pub fn fit_labels(
    block: f64,
    axis_len: f64,
    unit_px: f64,
    bias_large: bool,
    diag: &dyn Diagnostics,
) -> Result<Vec<Placement>> {
    if !(block.is_finite() && block > 0.0) {
        return Err(ChartError::mismatch("label block", "a positive pixel length"));
    }
    if !(axis_len.is_finite() && axis_len > 0.0) {
        return Err(ChartError::mismatch("axis length", "a positive pixel length"));
    }
    if !(unit_px.is_finite() && unit_px > 0.0) {
        return Err(ChartError::range(format!("label unit of {unit_px}px cannot be laid out")));
    }
    if block > axis_len {
        diag.warn(DataWarning::OversizedLabel { block, axis_length: axis_len });
        return Ok(Vec::new());
    }

    let last = ((axis_len - block) / unit_px).floor() as u64;
    let step = ((block / unit_px).ceil() as u64).max(1);
    let first = if bias_large { last % step } else { 0 };

    Ok((first..=last)
        .step_by(step as usize)
        .map(|units| Placement { offset: units as f64 * unit_px, units })
        .collect())
}

/// Timestamp text at the granularity of `unit`. Out-of-range timestamps
/// fall back to the raw number.
pub fn format_time(ms: f64, unit: TimeUnit) -> String {
    let Some(t) = DateTime::<Utc>::from_timestamp_millis(ms.round() as i64) else {
        return format_value(ms);
    };
    let pattern = match unit {
        TimeUnit::Millisecond => "%H:%M:%S%.3f",
        TimeUnit::Second => "%H:%M:%S",
        TimeUnit::Minute | TimeUnit::Hour => "%H:%M",
        TimeUnit::Day | TimeUnit::Week => "%b %d",
        TimeUnit::Month => "%b %Y",
        TimeUnit::Year | TimeUnit::Decade => "%Y",
    };
    t.format(pattern).to_string()
}

/// Numeric label text with float noise rounded off (six decimals).
pub fn format_value(v: f64) -> String {
    // `+ 0.0` folds -0 into 0.
    let v = (v * 1e6).round() / 1e6 + 0.0;
    format!("{v}")
}
