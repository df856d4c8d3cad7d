use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tris_stalker::generator::{generate, CombinationCount, Seed};
use tris_stalker::ranking::RankingTable;

fn setup_table() -> RankingTable {
    // Five columns with different first-seen orders, as a long history would give.
    let orders: [Vec<u8>; 5] = std::array::from_fn(|c| {
        (0..200u32)
            .map(|i| ((i * 7 + c as u32 * 3) % 10) as u8)
            .collect()
    });
    RankingTable::build(&orders)
}

fn bench_generation(c: &mut Criterion) {
    let table = setup_table();
    let seed = Seed::parse("00112233445566778899").unwrap();
    let short_seed = Seed::parse("13579").unwrap();
    let count = CombinationCount::new(100).unwrap();

    c.bench_function("generate_100_rich_seed", |b| {
        b.iter(|| generate(black_box(&table), black_box(&seed), count))
    });

    c.bench_function("generate_100_short_seed", |b| {
        b.iter(|| generate(black_box(&table), black_box(&short_seed), count))
    });
}

fn bench_ranking(c: &mut Criterion) {
    let observations: [Vec<u8>; 5] =
        std::array::from_fn(|c| (0..5000u32).map(|i| ((i * 31 + c as u32) % 10) as u8).collect());

    c.bench_function("build_ranking_table_5000_rows", |b| {
        b.iter(|| RankingTable::build(black_box(&observations)))
    });
}

criterion_group!(benches, bench_generation, bench_ranking);
criterion_main!(benches);
