//! Benchmarks for the explicit and implicit steppers.
//!
//! Run with: `cargo bench --bench stepper_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pme_rs::{barenblatt, BoundaryKind, PorousMediumSolver, SolverConfig};

type Solver = PorousMediumSolver<fn(f64) -> f64, fn(f64) -> f64, fn(f64) -> f64>;

fn initial(x: f64) -> f64 {
    barenblatt(x, 0.01, 1.0)
}

fn zero(_t: f64) -> f64 {
    0.0
}

/// Build a solver on the standard wide-domain test problem.
fn setup_solver(space_points: usize, time_points: usize) -> Solver {
    let config = SolverConfig {
        m: 1.0,
        space_points,
        time_points,
        x_bounds: (-8.0, 8.0),
        t_bounds: (0.01, 2.01),
    };
    PorousMediumSolver::new(
        config,
        initial as fn(f64) -> f64,
        zero as fn(f64) -> f64,
        zero as fn(f64) -> f64,
    )
    .unwrap()
}

/// Benchmark full explicit runs at increasing spatial resolution.
fn bench_forward_euler(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_euler");
    group.sample_size(20);

    for space_points in [45, 90, 180] {
        // k scales with h² to stay inside the stability bound
        let time_points = 2000 * (space_points / 45) * (space_points / 45);
        let solver = setup_solver(space_points, time_points);

        group.bench_with_input(
            BenchmarkId::new("dirichlet", format!("{space_points}x{time_points}")),
            &space_points,
            |b, _| {
                b.iter(|| {
                    solver
                        .forward_euler(black_box(BoundaryKind::Dirichlet))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark full implicit runs, coarse time grids included.
fn bench_backward_euler(c: &mut Criterion) {
    let mut group = c.benchmark_group("backward_euler");
    group.sample_size(20);

    for (space_points, time_points) in [(100, 200), (200, 400), (400, 400)] {
        let solver = setup_solver(space_points, time_points);

        group.bench_with_input(
            BenchmarkId::new("dirichlet", format!("{space_points}x{time_points}")),
            &space_points,
            |b, _| {
                b.iter(|| {
                    solver
                        .backward_euler(black_box(BoundaryKind::Dirichlet))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a small space-convergence study end to end.
fn bench_convergence_study(c: &mut Criterion) {
    let mut group = c.benchmark_group("convergence_study");
    group.sample_size(10);

    let solver = setup_solver(88, 4000);
    let analytic = |x: f64, t: f64| barenblatt(x, t, 1.0);

    group.bench_function("forward_space_2_refinements", |b| {
        b.iter(|| {
            solver
                .forward_euler_convergence_space(black_box(analytic), 2)
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_forward_euler,
    bench_backward_euler,
    bench_convergence_study
);
criterion_main!(benches);
