// File: crates/m3-core/src/path.rs
// Summary: Builds closed SVG path descriptions for area series by mirroring the forward trace.

use std::cmp::Ordering;
use std::fmt::Write as _;

use crate::scale::ScaleTransform;
use crate::series::Series;

/// Path-description keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    MoveTo,
    LineTo,
    Close,
}

impl Directive {
    pub const fn keyword(self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::Close => 'Z',
        }
    }
}

/// One coordinate-carrying step of a path, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStep {
    pub directive: Directive,
    pub x: f64,
    pub y: f64,
}

/// Forward trace followed by the same trace walked back to its start.
///
/// Points are stably sorted by x first. For N points this yields 2N steps:
/// `M p0, L p1 .. L pN-1` then `L pN-1 .. L p0`. The caller appends `Z`.
pub fn mirrored_steps<S: ScaleTransform + ?Sized>(series: &Series, scale: &S) -> Vec<PathStep> {
    let mut points = series.points().to_vec();
    // slice::sort_by is stable; ties (including -0 vs 0) keep insertion order.
    points.sort_by(|a, b| a.x().partial_cmp(&b.x()).unwrap_or(Ordering::Equal));

    let forward: Vec<PathStep> = points
        .iter()
        .enumerate()
        .map(|(i, p)| PathStep {
            directive: if i == 0 { Directive::MoveTo } else { Directive::LineTo },
            x: scale.to_screen_x(p.x()),
            y: scale.to_screen_y(p.y()),
        })
        .collect();

    let mut steps = Vec::with_capacity(forward.len() * 2);
    steps.extend_from_slice(&forward);
    steps.extend(forward.iter().rev().map(|s| PathStep { directive: Directive::LineTo, ..*s }));
    steps
}

/// Render `series` as `M x y L x y ... Z`, tokens joined by single spaces.
///
/// Empty series yield an empty string; degenerate input is reported to the
/// scale's diagnostics and otherwise drawn as-is.
pub fn build_path<S: ScaleTransform + ?Sized>(series: &Series, scale: &S) -> String {
    series.check_degenerate(scale.diagnostics());
    if series.is_empty() {
        return String::new();
    }

    let steps = mirrored_steps(series, scale);
    let mut out = String::with_capacity(steps.len() * 16 + 1);
    for step in &steps {
        // Writing into a String cannot fail.
        let _ = write!(out, "{} {} {} ", step.directive.keyword(), step.x, step.y);
    }
    out.push(Directive::Close.keyword());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DataWarning, Diagnostics, Recorder, Silent};

    /// Identity transform so expected strings stay readable.
    struct Identity<'a>(&'a dyn Diagnostics);

    impl ScaleTransform for Identity<'_> {
        fn to_screen_x(&self, x: f64) -> f64 {
            x
        }
        fn to_screen_y(&self, y: f64) -> f64 {
            y
        }
        fn diagnostics(&self) -> &dyn Diagnostics {
            self.0
        }
    }

    #[test]
    fn sorts_then_mirrors() {
        let s = Series::from_xy("A", &[(3.0, 4.0), (2.0, 8.0), (5.0, 10.0)]).unwrap();
        assert_eq!(
            build_path(&s, &Identity(&Silent)),
            "M 2 8 L 3 4 L 5 10 L 5 10 L 3 4 L 2 8 Z"
        );
    }

    #[test]
    fn ties_keep_original_order() {
        let s = Series::from_xy("T", &[(1.0, 5.0), (0.0, 0.0), (1.0, 7.0)]).unwrap();
        assert_eq!(
            build_path(&s, &Identity(&Silent)),
            "M 0 0 L 1 5 L 1 7 L 1 7 L 1 5 L 0 0 Z"
        );
    }

    #[test]
    fn signed_zero_timestamps_are_ties() {
        let s = Series::from_xy("Z", &[(0.0, 1.0), (-0.0, 2.0), (5.0, 3.0)]).unwrap();
        assert_eq!(
            build_path(&s, &Identity(&Silent)),
            "M 0 1 L -0 2 L 5 3 L 5 3 L -0 2 L 0 1 Z"
        );
    }

    #[test]
    fn single_point_warns_and_still_closes() {
        let rec = Recorder::new();
        let s = Series::from_xy("one", &[(4.0, 2.0)]).unwrap();
        assert_eq!(build_path(&s, &Identity(&rec)), "M 4 2 L 4 2 Z");
        assert_eq!(rec.warnings(), vec![DataWarning::SinglePointSeries { name: "one".into() }]);
    }

    #[test]
    fn empty_series_yields_empty_path() {
        let rec = Recorder::new();
        let s = Series::new("none", Vec::new());
        assert_eq!(build_path(&s, &Identity(&rec)), "");
        assert_eq!(rec.warnings(), vec![DataWarning::EmptySeries { name: "none".into() }]);
    }

    #[test]
    fn mirrored_steps_has_two_steps_per_point() {
        let s = Series::from_xy("B", &[(1.0, 100.0), (4.0, 2.0), (5.0, 8.0)]).unwrap();
        let steps = mirrored_steps(&s, &Identity(&Silent));
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0].directive, Directive::MoveTo);
        assert!(steps[1..].iter().all(|s| s.directive == Directive::LineTo));
        assert_eq!((steps[0].x, steps[0].y), (steps[5].x, steps[5].y));
    }
}
