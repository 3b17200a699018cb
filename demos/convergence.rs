//! Convergence studies for both steppers.
//!
//! Refines space (explicit and implicit) and time (implicit), printing
//! step sizes, error norms, and observed orders. The printed columns are
//! the same arrays a log-log convergence plotter consumes.

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

fn print_study(label: &str, step_label: &str, study: &ConvergenceStudy) {
    println!("{label}");
    println!(
        "  {:>12}  {:>12}  {:>12}  {:>12}  {:>7}",
        step_label, "L1", "L2", "Linf", "order"
    );
    let orders = study.observed_orders();
    for i in 0..study.runs() {
        let order = if i > 0 {
            format!("{:+.2}", orders[i - 1])
        } else {
            String::from("-")
        };
        println!(
            "  {:>12.4e}  {:>12.4e}  {:>12.4e}  {:>12.4e}  {:>7}",
            study.step_sizes[i], study.l1[i], study.l2[i], study.linf[i], order
        );
    }
    println!();
}

fn main() {
    println!("Convergence against the Barenblatt solution, m = 1");
    println!("==================================================");
    println!();

    let explicit = PorousMediumSolver::new(
        SolverConfig {
            m: 1.0,
            space_points: 90,
            time_points: 20000,
            x_bounds: (-8.0, 8.0),
            t_bounds: (0.5, 2.5),
        },
        initial,
        zero,
        zero,
    )
    .unwrap();

    let study = explicit
        .forward_euler_convergence_space(analytic, 4)
        .unwrap();
    print_study("forward Euler, space refinement", "h", &study);

    let implicit = PorousMediumSolver::new(
        SolverConfig {
            m: 1.0,
            space_points: 200,
            time_points: 900,
            x_bounds: (-8.0, 8.0),
            t_bounds: (0.5, 2.5),
        },
        initial,
        zero,
        zero,
    )
    .unwrap();

    let study = implicit
        .backward_euler_convergence_space(analytic, 4)
        .unwrap();
    print_study("backward Euler, space refinement", "h", &study);

    let study = implicit
        .backward_euler_convergence_time(analytic, 4)
        .unwrap();
    print_study("backward Euler, time refinement", "k", &study);
}
