use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use othello_core::board::Board;
use othello_core::perft::perft;

const BENCH_DEPTHS: [u32; 3] = [4, 5, 6];
const REFERENCE_COUNTS: &[(u32, u64)] = &[
    (1, 4),
    (2, 12),
    (3, 56),
    (4, 244),
    (5, 1_396),
    (6, 8_200),
];

fn expected_nodes(depth: u32) -> Option<u64> {
    REFERENCE_COUNTS
        .iter()
        .find_map(|&(d, nodes)| (d == depth).then_some(nodes))
}

fn perft_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.measurement_time(Duration::from_secs(5));

    for &depth in &BENCH_DEPTHS {
        let expected = expected_nodes(depth)
            .unwrap_or_else(|| panic!("no reference node count recorded for perft depth {depth}"));

        assert_eq!(
            perft(Board::new(), depth),
            expected,
            "reference node count mismatch at depth {depth}"
        );

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let nodes = perft(black_box(Board::new()), black_box(depth));
                black_box(nodes)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);
