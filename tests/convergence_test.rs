//! Empirical convergence of both steppers against the Barenblatt
//! solution under successive spatial and temporal refinement.
//!
//! The initial data is the Barenblatt profile at t = 0.5, which keeps the
//! moving support inside the domain over the whole time window. The
//! solution has a Lipschitz kink at the support edge, so the observed
//! spatial order lands below the smooth-case 2.0; the assertions use a
//! band rather than the nominal order.

use pme_rs::{barenblatt, ConvergenceStudy, PorousMediumSolver, SolverConfig};

fn initial(x: f64) -> f64 {
    barenblatt(x, 0.5, 1.0)
}

fn analytic(x: f64, t: f64) -> f64 {
    barenblatt(x, t, 1.0)
}

fn zero(_t: f64) -> f64 {
    0.0
}

fn config(space_points: usize, time_points: usize) -> SolverConfig {
    SolverConfig {
        m: 1.0,
        space_points,
        time_points,
        x_bounds: (-8.0, 8.0),
        t_bounds: (0.5, 2.5),
    }
}

fn print_study(label: &str, study: &ConvergenceStudy) {
    println!("{label}:");
    let orders = study.observed_orders();
    for i in 0..study.runs() {
        if i > 0 {
            println!(
                "  step={:9.4e}: L1={:.4e}, L2={:.4e}, Linf={:.4e}, order={:+.2}",
                study.step_sizes[i],
                study.l1[i],
                study.l2[i],
                study.linf[i],
                orders[i - 1]
            );
        } else {
            println!(
                "  step={:9.4e}: L1={:.4e}, L2={:.4e}, Linf={:.4e}",
                study.step_sizes[i], study.l1[i], study.l2[i], study.linf[i]
            );
        }
    }
}

#[test]
fn test_forward_euler_space_convergence() {
    // Large N keeps the temporal error floor well below the spatial
    // error on every level.
    let solver = PorousMediumSolver::new(config(90, 20000), initial, zero, zero).unwrap();
    let study = solver.forward_euler_convergence_space(analytic, 4).unwrap();

    print_study("forward Euler, space refinement", &study);

    assert_eq!(study.runs(), 5);
    // Errors shrink as h shrinks, at least from the mid resolutions on
    for i in 1..study.runs() - 1 {
        assert!(
            study.l1[i + 1] < study.l1[i],
            "L1 should decrease: {:.4e} -> {:.4e}",
            study.l1[i],
            study.l1[i + 1]
        );
    }
    // Second-order in space away from the front; the kink drags the
    // observed rate down, so accept anything clearly superlinear.
    let orders = study.observed_orders();
    let finest = orders[orders.len() - 1];
    assert!(
        finest > 1.3,
        "finest-pair observed order should exceed 1.3, got {finest:.2}"
    );
}

#[test]
fn test_backward_euler_space_convergence() {
    let solver = PorousMediumSolver::new(config(200, 900), initial, zero, zero).unwrap();
    let study = solver.backward_euler_convergence_space(analytic, 4).unwrap();

    print_study("backward Euler, space refinement", &study);

    assert_eq!(study.runs(), 5);
    // The fixed time grid puts an O(k) floor under the finest levels, so
    // check the coarse half where the spatial error dominates.
    assert!(study.l1[1] < study.l1[0]);
    assert!(study.l1[2] < study.l1[1]);
    let orders = study.observed_orders();
    assert!(
        orders[0] > 1.0,
        "coarsest-pair observed order should exceed 1.0, got {:.2}",
        orders[0]
    );
}

#[test]
fn test_backward_euler_time_convergence() {
    let solver = PorousMediumSolver::new(config(200, 900), initial, zero, zero).unwrap();
    let study = solver.backward_euler_convergence_time(analytic, 4).unwrap();

    print_study("backward Euler, time refinement", &study);

    assert_eq!(study.runs(), 5);
    // Backward Euler is first order in time; the coarsest pair sits
    // furthest from the spatial error floor.
    assert!(study.l1[1] < study.l1[0]);
    assert!(study.l1[2] < study.l1[1]);
    let orders = study.observed_orders();
    assert!(
        orders[0] > 0.5,
        "coarsest-pair observed order should exceed 0.5, got {:.2}",
        orders[0]
    );
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_study_matches_sequential() {
    let solver = PorousMediumSolver::new(config(90, 4000), initial, zero, zero).unwrap();

    let sequential = solver.forward_euler_convergence_space(analytic, 3).unwrap();
    let parallel = solver
        .forward_euler_convergence_space_parallel(analytic, 3)
        .unwrap();

    assert_eq!(sequential.step_sizes, parallel.step_sizes);
    assert_eq!(sequential.l1, parallel.l1);
    assert_eq!(sequential.l2, parallel.l2);
    assert_eq!(sequential.linf, parallel.linf);
}
