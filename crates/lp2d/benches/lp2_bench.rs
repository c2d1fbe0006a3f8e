//! Criterion benchmarks for candidate enumeration and the solve pipeline.
//! Focus sizes: m in {2, 5, 10, 20, 50} constraints.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p lp2d

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lp2d::exercise::{draw_problem, ConstraintCount, ProblemCfg, ReplayToken};
use lp2d::lp::{find_all_notable_points, Problem};
use lp2d::SolveCfg;

fn random_problem(m: usize, seed: u64) -> Problem {
    let cfg = ProblemCfg {
        constraint_count: ConstraintCount::Fixed(m),
        coef_max: 9,
        rhs_max: 40,
        ..ProblemCfg::default()
    };
    draw_problem(&cfg, ReplayToken::new(seed, m as u64)).expect("generator emits valid rows")
}

fn bench_lp2(c: &mut Criterion) {
    let mut group = c.benchmark_group("lp2");
    for &m in &[2usize, 5, 10, 20, 50] {
        group.bench_with_input(BenchmarkId::new("notable_points", m), &m, |b, &m| {
            b.iter_batched(
                || random_problem(m, 43).lines(),
                |lines| {
                    let _pts = find_all_notable_points(&lines);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("solve", m), &m, |b, &m| {
            let cfg = SolveCfg::default();
            b.iter_batched(
                || random_problem(m, 44),
                |p| {
                    let _sol = p.solve(&cfg);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lp2);
criterion_main!(benches);
