// File: crates/m3-core/src/axis.rs
// Summary: Axis unit selection; picks gridline granularity from the pixel-to-domain ratio.

use crate::error::{ChartError, Result};
use crate::geometry::Range;

/// Time units for the x axis, ascending. Month and year assume 30 and 365 days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Decade,
}

impl TimeUnit {
    pub const LADDER: [TimeUnit; 9] = [
        TimeUnit::Millisecond,
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
        TimeUnit::Decade,
    ];

    /// Milliseconds per unit.
    pub const fn factor(self) -> f64 {
        match self {
            Self::Millisecond => 1.0,
            Self::Second => 1_000.0,
            Self::Minute => 60_000.0,
            Self::Hour => 3_600_000.0,
            Self::Day => 86_400_000.0,
            Self::Week => 604_800_000.0,
            Self::Month => 2_592_000_000.0,
            Self::Year => 31_536_000_000.0,
            Self::Decade => 315_360_000_000.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Decade => "decade",
        }
    }
}

/// Y-axis step multipliers, ascending.
pub const VALUE_LADDER: [f64; 12] =
    [1.0, 2.0, 5.0, 10.0, 20.0, 25.0, 50.0, 100.0, 200.0, 250.0, 500.0, 1000.0];

/// Y-axis unit. `label` is unset: the ladder carries bare multipliers.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueUnit {
    pub factor: f64,
    pub label: Option<String>,
}

/// Units chosen for both axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Units {
    pub x: TimeUnit,
    pub y: ValueUnit,
}

/// Largest time unit strictly exceeded by the time shown per 100 px;
/// millisecond when none is.
pub fn time_unit(x_span: f64, x_axis_px: f64) -> TimeUnit {
    let per_hundred_px = x_span / x_axis_px * 100.0;
    let exceeded = TimeUnit::LADDER.iter().filter(|u| per_hundred_px > u.factor()).count();
    TimeUnit::LADDER[exceeded.saturating_sub(1)]
}

/// First ladder rung not exceeded by `ceil(y per 10 px)`; past the ladder's
/// end, that raw per-10-px value is the step itself.
pub fn value_unit(y_span: f64, y_axis_px: f64) -> ValueUnit {
    let per_ten_px = (y_span / y_axis_px * 10.0).ceil();
    let exceeded = VALUE_LADDER.iter().filter(|&&rung| per_ten_px > rung).count();
    let factor = VALUE_LADDER.get(exceeded).copied().unwrap_or(per_ten_px);
    ValueUnit { factor, label: None }
}

/// Pick units for `range` drawn on axes of the given pixel lengths.
pub fn select_units(range: &Range, x_axis_px: f64, y_axis_px: f64) -> Result<Units> {
    if !(x_axis_px.is_finite() && x_axis_px > 0.0) {
        return Err(ChartError::mismatch("x_axis.width", "a positive pixel length"));
    }
    if !(y_axis_px.is_finite() && y_axis_px > 0.0) {
        return Err(ChartError::mismatch("y_axis.height", "a positive pixel length"));
    }
    Ok(Units {
        x: time_unit(range.x_span(), x_axis_px),
        y: value_unit(range.y_span(), y_axis_px),
    })
}
