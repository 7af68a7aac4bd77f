use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rivulet::{collectors, Stream, UbStream};

fn bench_pull_pipeline(c: &mut Criterion) {
    let data: Vec<i64> = (0..10_000).collect();

    c.bench_function("pull_map_filter_sum", |b| {
        b.iter(|| {
            let stream = Stream::from_slice(black_box(&data));
            stream
                .map(|x| x * 2)
                .filter(|x| x % 3 == 0)
                .sum()
                .unwrap()
        })
    });

    c.bench_function("pull_sorted_distinct", |b| {
        b.iter(|| {
            let stream = Stream::from_slice(black_box(&data));
            stream.map(|x| x % 97).distinct().count().unwrap()
        })
    });
}

fn bench_push_pipeline(c: &mut Criterion) {
    let data: Vec<i64> = (0..10_000).collect();

    c.bench_function("push_sliding_window_sums", |b| {
        b.iter(|| {
            let stream = UbStream::from_slice(black_box(&data));
            stream
                .sliding(16)
                .map(|window| window.iter().sum::<i64>())
                .to_vec()
                .unwrap()
        })
    });
}

fn bench_collectors(c: &mut Criterion) {
    let data: Vec<i64> = (0..10_000).collect();

    c.bench_function("collect_grouping_by", |b| {
        b.iter(|| {
            let stream = Stream::from_slice(black_box(&data));
            stream
                .collect(&collectors::grouping_by(|x: &i64| x % 16))
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_pull_pipeline,
    bench_push_pipeline,
    bench_collectors
);
criterion_main!(benches);
