use chained_hashmap::chain::Chain;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn bench_push_back(c: &mut Criterion) {
    c.bench_function("chain_push_back_1k", |b| {
        b.iter_batched(
            Chain::<u64>::new,
            |mut chain| {
                for n in 0..1_000u64 {
                    chain.push_back(n);
                }
                black_box(chain)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_tail(c: &mut Criterion) {
    c.bench_function("chain_find_last_of_64", |b| {
        let mut chain = Chain::new();
        for n in 0..64u64 {
            chain.push_back(n);
        }
        b.iter(|| black_box(chain.find(|&n| n == 63)))
    });
}

fn bench_remove_head(c: &mut Criterion) {
    c.bench_function("chain_drain_from_head_64", |b| {
        b.iter_batched(
            || {
                let mut chain = Chain::new();
                for n in 0..64u64 {
                    chain.push_back(n);
                }
                chain
            },
            |mut chain| {
                while chain.remove_at(0).is_some() {}
                black_box(chain)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_push_back, bench_find_tail, bench_remove_head
}
criterion_main!(benches);
