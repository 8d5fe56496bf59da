use criterion::{criterion_group, criterion_main, Criterion};
use liminal_core::{SegmentMonitor, Thresholds, Vocabulary};
use std::hint::black_box;

const SEGMENTS: &[&str] = &[
    "We finished wiring the service into the pipeline. What else should we check?",
    "The architecture follows a clear pattern for each workflow and component",
    "ok",
    "Next, let's look at how the interface and the framework relate to the model and the algorithm in this design",
];

fn bench_add_segment_100(c: &mut Criterion) {
    c.bench_function("monitor_add_segment_100", |b| {
        b.iter(|| {
            let mut monitor = SegmentMonitor::new(Thresholds::default(), Vocabulary::default());
            for i in 0..100 {
                let signal = monitor.add_segment(black_box(SEGMENTS[i % SEGMENTS.len()]));
                if signal.should_explore {
                    monitor.reset_triggers();
                }
            }
        });
    });
}

fn bench_add_segment_long_history(c: &mut Criterion) {
    let mut monitor = SegmentMonitor::new(Thresholds::default(), Vocabulary::default());
    for i in 0..10_000 {
        monitor.add_segment(SEGMENTS[i % SEGMENTS.len()]);
    }

    c.bench_function("monitor_add_segment_after_10k", |b| {
        b.iter(|| {
            let mut m = monitor.clone();
            m.add_segment(black_box(SEGMENTS[1]));
        });
    });
}

criterion_group!(benches, bench_add_segment_100, bench_add_segment_long_history);
criterion_main!(benches);
