//! Porous medium equation runs with both steppers.
//!
//! Solves ∂u/∂t = ∂²(u²)/∂x² (m = 1) with the Barenblatt profile at
//! t = 0.01 as initial data, under Dirichlet and under zero-flux Neumann
//! boundaries, and reports the error against the analytic solution.
//!
//! The returned (x, t, U, h, k) bundle is exactly what a surface plotter
//! consumes; here the summary statistics take its place.

use pme_rs::{barenblatt, BoundaryKind, ErrorNorms, PorousMediumSolver, SolverConfig, SolverOutput};

fn initial(x: f64) -> f64 {
    barenblatt(x, 0.01, 1.0)
}

fn analytic(x: f64, t: f64) -> f64 {
    barenblatt(x, t, 1.0)
}

fn zero(_t: f64) -> f64 {
    0.0
}

fn report(label: &str, output: &SolverOutput) {
    let norms = ErrorNorms::against(output, analytic);
    let last = output.t.len() - 1;
    println!("{label}");
    println!(
        "  grid: {} x {} points, h = {:.4e}, k = {:.4e}",
        output.x.len(),
        output.t.len(),
        output.h,
        output.k
    );
    println!(
        "  range: [{:.4}, {:.4}], final mass: {:.4}",
        output.u.min(),
        output.u.max(),
        output.u.total_mass(last, output.h)
    );
    println!(
        "  error vs Barenblatt: L1 = {:.4e}, L2 = {:.4e}, Linf = {:.4e}",
        norms.l1, norms.l2, norms.linf
    );
    println!();
}

fn main() {
    println!("Porous medium equation, m = 1");
    println!("=============================");
    println!();

    // Dirichlet runs on a wide domain: the support never reaches the walls
    let forward = PorousMediumSolver::new(
        SolverConfig {
            m: 1.0,
            space_points: 90,
            time_points: 5000,
            x_bounds: (-8.0, 8.0),
            t_bounds: (0.01, 2.01),
        },
        initial,
        zero,
        zero,
    )
    .unwrap();

    let backward = PorousMediumSolver::new(
        SolverConfig {
            m: 1.0,
            space_points: 200,
            time_points: 400,
            x_bounds: (-8.0, 8.0),
            t_bounds: (0.01, 2.01),
        },
        initial,
        zero,
        zero,
    )
    .unwrap();

    report(
        "forward Euler, Dirichlet",
        &forward.forward_euler(BoundaryKind::Dirichlet).unwrap(),
    );
    report(
        "backward Euler, Dirichlet (12x coarser time grid)",
        &backward.backward_euler(BoundaryKind::Dirichlet).unwrap(),
    );

    // Neumann runs on a narrow domain: the bump hits the zero-flux walls
    // and mass accumulates instead of leaving
    let forward = PorousMediumSolver::new(
        SolverConfig {
            m: 1.0,
            space_points: 90,
            time_points: 20000,
            x_bounds: (-2.0, 2.0),
            t_bounds: (0.01, 2.01),
        },
        initial,
        zero,
        zero,
    )
    .unwrap();

    let backward = PorousMediumSolver::new(
        SolverConfig {
            m: 1.0,
            space_points: 100,
            time_points: 700,
            x_bounds: (-2.0, 2.0),
            t_bounds: (0.01, 2.01),
        },
        initial,
        zero,
        zero,
    )
    .unwrap();

    report(
        "forward Euler, Neumann",
        &forward.forward_euler(BoundaryKind::Neumann).unwrap(),
    );
    report(
        "backward Euler, Neumann",
        &backward.backward_euler(BoundaryKind::Neumann).unwrap(),
    );

    // A perturbation experiment: damp one initial grid point
    let mut perturbed = PorousMediumSolver::new(
        SolverConfig {
            m: 1.0,
            space_points: 90,
            time_points: 5000,
            x_bounds: (-8.0, 8.0),
            t_bounds: (0.01, 2.01),
        },
        initial,
        zero,
        zero,
    )
    .unwrap();
    perturbed.add_impulse(44, 0.75).unwrap();

    report(
        "forward Euler, Dirichlet, impulse at the bump center",
        &perturbed.forward_euler(BoundaryKind::Dirichlet).unwrap(),
    );
}
