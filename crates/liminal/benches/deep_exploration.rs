use criterion::{criterion_group, criterion_main, Criterion};
use liminal_core::{Depth, ExplorationEngine, ExplorerConfig};
use std::hint::black_box;

fn bench_deep_exploration(c: &mut Criterion) {
    let engine = ExplorationEngine::new(ExplorerConfig::default()).unwrap();
    let context = "The system architecture uses a pipeline of services. \
        Each component talks to a module through an integration layer. \
        Should we rethink the workflow?"
        .repeat(20);
    let focus = vec!["security".to_string(), "latency".to_string()];

    c.bench_function("explore_deep_20x", |b| {
        b.iter(|| engine.perform_deep_exploration(black_box(&context), Depth::Deep, &focus));
    });

    c.bench_function("explore_surface_20x", |b| {
        b.iter(|| engine.perform_deep_exploration(black_box(&context), Depth::Surface, &focus));
    });
}

fn bench_analyze_segment(c: &mut Criterion) {
    c.bench_function("analyze_segment_growing_clusters", |b| {
        b.iter(|| {
            let mut engine = ExplorationEngine::new(ExplorerConfig::default()).unwrap();
            for text in [
                "the service and the module",
                "a pipeline feeding the system",
                "restart the service",
                "the module finished its workflow",
            ] {
                black_box(engine.analyze_segment(text));
            }
        });
    });
}

criterion_group!(benches, bench_deep_exploration, bench_analyze_segment);
criterion_main!(benches);
