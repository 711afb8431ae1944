// File: crates/m3-core/tests/properties.rs
// Purpose: Invariants of range, normalize, scale and path building over a spread of datasets.

use m3_core::{
    Bounded, ChartError, DataWarning, Graph, Normalize, Range, Recorder, ScaleTransform, Series,
    Silent, SvgDocument,
};

fn datasets() -> Vec<Vec<(f64, f64)>> {
    vec![
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
        vec![(10.0, -4.0), (5.0, -9.0), (7.0, -1.0)],
        vec![(-3.0, 12.0), (3.0, -12.0)],
        vec![(1_357_000_000_000.0, 40.0), (1_357_003_600_000.0, 41.5), (1_356_990_000_000.0, 39.0)],
        (0..50).map(|i| (i as f64 * 1000.0, ((i as f64) * 0.3).sin() * 10.0 + 3.0)).collect(),
    ]
}

/// Split `M x y L x y ... Z` into (keyword, x, y) triples plus the trailing keyword.
fn parse_path(d: &str) -> (Vec<(String, f64, f64)>, String) {
    let tokens: Vec<&str> = d.split(' ').collect();
    let (body, tail) = tokens.split_at(tokens.len() - 1);
    assert_eq!(body.len() % 3, 0, "path tokens not in triples: {d}");
    let steps = body
        .chunks(3)
        .map(|c| (c[0].to_string(), c[1].parse().unwrap(), c[2].parse().unwrap()))
        .collect();
    (steps, tail[0].to_string())
}

#[test]
fn ranges_are_ordered_and_show_the_baseline() {
    for data in datasets() {
        let s = Series::from_xy("s", &data).unwrap();
        let r = s.range().unwrap();
        assert!(r.x_min <= r.x_max);
        assert!(r.y_min <= r.y_max);
        assert!(r.y_min <= 0.0 && 0.0 <= r.y_max, "baseline hidden in {r:?}");
    }
}

#[test]
fn normalize_hits_both_endpoints_exactly() {
    for data in datasets() {
        let graph = Graph::with_defaults("g", vec![Series::from_xy("s", &data).unwrap()]);
        let r = graph.range().unwrap();
        let n = graph.normalize().unwrap();
        assert_eq!(n.x(r.x_min), 0.0);
        assert_eq!(n.x(r.x_max), 1.0);
        assert_eq!(n.y(r.y_min), 0.0);
        assert_eq!(n.y(r.y_max), 1.0);
    }
}

#[test]
fn degenerate_bounds_fail_normalization() {
    let flat = Range::new(2.0, 2.0, -1.0, 1.0).unwrap();
    assert!(matches!(Normalize::new(&flat, &Silent), Err(ChartError::InvalidRange(_))));

    // a single point has no x extent
    let one = Graph::with_defaults("one", vec![Series::from_xy("s", &[(5.0, 5.0)]).unwrap()]);
    assert!(matches!(one.normalize(), Err(ChartError::InvalidRange(_))));
}

#[test]
fn scale_y_reverses_order() {
    for data in datasets() {
        let graph = Graph::with_defaults("g", vec![Series::from_xy("s", &data).unwrap()]);
        let scale = graph.scale(&graph.config().drawing_surface).unwrap();
        let r = graph.range().unwrap();
        let (a, b) = (r.y_min + r.y_span() * 0.25, r.y_min + r.y_span() * 0.75);
        assert!(scale.to_screen_y(a) > scale.to_screen_y(b));
    }
}

#[test]
fn paths_have_two_steps_per_point_and_close() {
    for data in datasets() {
        let graph = Graph::with_defaults("g", vec![Series::from_xy("s", &data).unwrap()]);
        let path = &graph.paths().unwrap()[0];
        let (steps, tail) = parse_path(path);
        assert_eq!(steps.len(), 2 * data.len());
        assert_eq!(tail, "Z");
        assert_eq!(steps[0].0, "M");
        assert!(steps[1..].iter().all(|s| s.0 == "L"));
        let (first, last) = (&steps[0], &steps[steps.len() - 1]);
        assert_eq!((first.1, first.2), (last.1, last.2));
        // mirrored: step i and step 2N-1-i land on the same pixel
        for i in 0..data.len() {
            let j = steps.len() - 1 - i;
            assert_eq!((steps[i].1, steps[i].2), (steps[j].1, steps[j].2));
        }
    }
}

#[test]
fn outputs_are_deterministic() {
    let series: Vec<Series> =
        datasets().iter().enumerate().map(|(i, d)| Series::from_xy(format!("s{i}"), d).unwrap()).collect();
    let graph = Graph::with_defaults("many", series);

    assert_eq!(graph.range().unwrap(), graph.range().unwrap());
    assert_eq!(graph.paths().unwrap(), graph.paths().unwrap());
    assert_eq!(graph.units().unwrap(), graph.units().unwrap());
    assert_eq!(graph.labels().unwrap(), graph.labels().unwrap());

    let render = || {
        let mut doc = SvgDocument::new(graph.config());
        graph.render(&mut doc).unwrap();
        doc.finish()
    };
    assert_eq!(render(), render());
}

#[test]
fn warnings_do_not_change_output() {
    let data = [(0.5, 1.0), (2.0, 4.0), (1.0, 3.0)];
    let graph = Graph::with_defaults("g", vec![Series::from_xy("s", &data).unwrap()]);
    let rec = Recorder::new();
    assert_eq!(graph.paths_with(&rec).unwrap(), graph.paths().unwrap());
    assert!(rec.warnings().contains(&DataWarning::NonIntegralTimestamp { x: 0.5 }));
}

#[test]
fn stale_scale_reports_out_of_bounds() {
    let old = Graph::with_defaults("old", vec![Series::from_xy("s", &[(0.0, 1.0), (10.0, 5.0)]).unwrap()]);
    let rec = Recorder::new();
    let scale = old.scale_with(&old.config().drawing_surface, &rec).unwrap();

    // data grew past the range the scale was taken from
    let newer = Series::from_xy("s", &[(0.0, 1.0), (10.0, 5.0), (20.0, 9.0)]).unwrap();
    let path = newer.to_path_string(&scale);
    assert!(!path.is_empty());
    assert!(rec.warnings().iter().any(|w| matches!(w, DataWarning::OutOfBounds { .. })));
}

#[test]
fn empty_series_inside_graph_fails_range() {
    let graph = Graph::with_defaults(
        "g",
        vec![Series::from_xy("ok", &[(0.0, 1.0), (1.0, 2.0)]).unwrap(), Series::new("empty", Vec::new())],
    );
    let rec = Recorder::new();
    assert!(matches!(graph.range_with(&rec), Err(ChartError::InvalidRange(_))));
    assert_eq!(rec.warnings(), vec![DataWarning::EmptyRange { node: "series 'empty'".into() }]);
}

#[test]
fn extreme_but_finite_bounds_never_leak_nan_into_paths() {
    let s = Series::from_xy("wide", &[(-1e308, 1.0), (1e308, 2.0)]).unwrap();
    let g = Graph::with_defaults("wide", vec![s]);
    assert!(matches!(g.normalize(), Err(ChartError::InvalidRange(_))));
    assert!(matches!(g.paths(), Err(ChartError::InvalidRange(_))));
}
