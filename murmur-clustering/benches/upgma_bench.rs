use criterion::{criterion_group, criterion_main, Criterion};

use murmur_clustering::{merge_step, normalized_distance, DistanceMatrix};

/// 200 short texts sharing a handful of stems, so merges happen at varied distances.
fn make_texts(n: usize) -> Vec<String> {
    let stems = [
        "release notes for version",
        "server maintenance window tonight",
        "new blog post about rust",
        "conference talk slides are up",
    ];
    (0..n)
        .map(|i| format!("{} {}", stems[i % stems.len()], i * 7 % 13))
        .collect()
}

fn bench_distance_matrix(c: &mut Criterion) {
    let texts = make_texts(200);
    c.bench_function("distance_matrix_200_texts", |b| {
        b.iter(|| {
            DistanceMatrix::from_fn(texts.len(), |i, j| normalized_distance(&texts[i], &texts[j]))
                .unwrap()
        });
    });
}

fn bench_full_merge(c: &mut Criterion) {
    let texts = make_texts(100);
    let distances =
        DistanceMatrix::from_fn(texts.len(), |i, j| normalized_distance(&texts[i], &texts[j]))
            .unwrap();
    let labels: Vec<Vec<usize>> = (0..texts.len()).map(|i| vec![i]).collect();

    c.bench_function("upgma_merge_to_one_100_groups", |b| {
        b.iter(|| {
            let mut labels = labels.clone();
            let mut distances = distances.clone();
            while labels.len() > 1 {
                let step = merge_step(&labels, &distances).unwrap();
                labels = step.labels;
                distances = step.distances;
            }
            labels
        });
    });
}

criterion_group!(benches, bench_distance_matrix, bench_full_merge);
criterion_main!(benches);
