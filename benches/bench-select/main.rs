use bounded_topk::{select_top_k_by, BoundedSelector, ParallelSelection, SelectionConfig, TopKCollector};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::seq::SliceRandom;
use std::time::Duration;

const INPUT_SIZES: &[usize] = &[10_000, 1_000_000];
const LIMITS: &[i64] = &[10, 1_000];

fn shuffled(len: usize) -> Vec<f64> {
    let mut values: Vec<f64> = (0..len).map(|i| i as f64).collect();
    values.shuffle(&mut rand::thread_rng());
    values
}

fn descending(a: &f64, b: &f64) -> std::cmp::Ordering {
    b.total_cmp(a)
}

fn bench_select(c: &mut Criterion) {
    let mut g = c.benchmark_group("select");
    g.measurement_time(Duration::from_secs(10));
    let parallel = ParallelSelection::new(SelectionConfig::default()).expect("selection pool");

    for &len in INPUT_SIZES {
        let input = shuffled(len);
        g.throughput(Throughput::Elements(len as u64));
        for &limit in LIMITS {
            let id = format!("{len}/{limit}");
            g.bench_with_input(BenchmarkId::new("bounded", &id), &input, |b, input| {
                b.iter(|| select_top_k_by(input, limit, descending))
            });
            g.bench_with_input(BenchmarkId::new("full_sort", &id), &input, |b, input| {
                b.iter(|| {
                    let mut sorted = input.clone();
                    sorted.sort_by(descending);
                    sorted.truncate(limit as usize);
                    sorted
                })
            });
            g.bench_with_input(BenchmarkId::new("parallel", &id), &input, |b, input| {
                let collector = TopKCollector::new(limit, descending).expect("collector");
                b.iter(|| parallel.collect(&collector, input.clone()))
            });
        }
    }
    g.finish();
}

fn bench_offer(c: &mut Criterion) {
    let mut g = c.benchmark_group("offer");
    // Ascending input against a descending order admits every element, the worst case.
    let worst: Vec<f64> = (0..100_000).map(|i| i as f64).collect();
    let best: Vec<f64> = worst.iter().rev().copied().collect();
    g.throughput(Throughput::Elements(worst.len() as u64));
    for (name, input) in [("early_discard", &best), ("always_admit", &worst)] {
        g.bench_with_input(BenchmarkId::new(name, 100), input, |b, input| {
            b.iter(|| {
                let mut selector = BoundedSelector::with_capacity(100, descending);
                selector.extend(input.iter().copied());
                selector.drain()
            })
        });
    }
    g.finish();
}

criterion_group!(benches, bench_select, bench_offer);
criterion_main!(benches);
