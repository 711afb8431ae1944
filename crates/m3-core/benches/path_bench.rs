use m3_core::{Graph, Series};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_series(n: usize) -> Series {
    // shuffled-ish x order so the sort does real work
    let data: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let x = ((i * 7919) % n) as f64 * 1000.0;
            (x, (x * 0.00001).sin() * 10.0 + 12.0)
        })
        .collect();
    Series::from_xy("bench", &data).expect("finite data")
}

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_path_string");
    for &n in &[1_000usize, 10_000usize, 100_000usize] {
        let graph = Graph::with_defaults("bench", vec![gen_series(n)]);
        let scale = graph.scale(&graph.config().drawing_surface).expect("scale");
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &n, |b, _| {
            b.iter(|| black_box(graph.series()[0].to_path_string(&scale)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_paths);
criterion_main!(benches);
