//! # pme-rs
//!
//! Finite-difference solvers for the one-dimensional porous medium equation
//!
//! ```text
//! ∂u/∂t = ∂²(u^(m+1))/∂x²,    m ≥ 1
//! ```
//!
//! a nonlinear degenerate diffusion equation. The crate provides:
//! - Uniform space/time grid construction
//! - An explicit (forward Euler) stepper
//! - A fully implicit (backward Euler) stepper with a fixed-point solve of
//!   the nonlinear tridiagonal system per time step
//! - Dirichlet and zero-flux Neumann boundary handling
//! - Empirical convergence studies (L1, L2, L∞ norms against an analytic
//!   reference) under successive spatial or temporal refinement
//! - The closed-form Barenblatt source solution for validation
//!
//! # Example
//!
//! ```
//! use pme_rs::{barenblatt, BoundaryKind, ErrorNorms, PorousMediumSolver, SolverConfig};
//!
//! let config = SolverConfig {
//!     m: 1.0,
//!     space_points: 60,
//!     time_points: 2000,
//!     x_bounds: (-8.0, 8.0),
//!     t_bounds: (0.5, 1.5),
//! };
//!
//! let solver = PorousMediumSolver::new(
//!     config,
//!     |x| barenblatt(x, 0.5, 1.0),
//!     |_t| 0.0,
//!     |_t| 0.0,
//! )
//! .unwrap();
//!
//! let output = solver.forward_euler(BoundaryKind::Dirichlet).unwrap();
//! let norms = ErrorNorms::against(&output, |x, t| barenblatt(x, t, 1.0));
//! assert!(norms.linf < 0.1);
//! ```

pub mod analysis;
pub mod boundary;
pub mod equations;
pub mod error;
pub mod grid;
pub mod solver;

// Re-export main types for convenience
pub use analysis::{barenblatt, observed_orders, ConvergenceStudy, ErrorNorms};
pub use boundary::BoundaryKind;
pub use equations::PorousMediumEquation;
pub use error::SolverError;
pub use grid::Grid1D;
pub use solver::{
    Impulse, IterationControl, PorousMediumSolver, SolutionField, SolverConfig, SolverOutput,
};
