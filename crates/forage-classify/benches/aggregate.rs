use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forage_classify::{most_common, Prediction};
use forage_core::{DeterministicRng, SplitMix64};

fn bench_most_common(c: &mut Criterion) {
    let mut rng = SplitMix64::new(11);
    let batch: Vec<Vec<f32>> = (0..256)
        .map(|_| (0..120).map(|_| rng.next_unit()).collect())
        .collect();

    c.bench_function("forage-classify/most_common(samples=256,classes=120)", |b| {
        b.iter(|| {
            let leaders = most_common(batch.iter(), |scores| Prediction::new(scores.clone()));
            black_box(leaders.primary());
        })
    });
}

criterion_group!(benches, bench_most_common);
criterion_main!(benches);
