//! Explicit (forward Euler) time stepping.
//!
//! Column j+1 is computed from column j alone:
//!
//! ```text
//! u[i][j+1] = u[i][j] + (k/h²)·(w[i+1] - 2·w[i] + w[i-1]),   w = u^(m+1)
//! ```
//!
//! The update is stable while the effective diffusion number
//! (m+1)·u_max^m·k/h² stays below 1/2. That bound is the caller's
//! responsibility; a violated bound shows up as blow-up, which the stepper
//! detects per column and reports instead of propagating NaNs.

use crate::boundary::{self, BoundaryKind};
use crate::equations::PorousMediumEquation;
use crate::error::SolverError;
use crate::grid::Grid1D;
use crate::solver::SolutionField;

/// March the field from its initial column to the final time level.
///
/// Column 0 must already hold the initial data. Boundary rows of every
/// computed column are set right after its interior update.
pub(crate) fn advance<G1, G2>(
    equation: &PorousMediumEquation,
    grid: &Grid1D,
    u: &mut SolutionField,
    left_bc: &G1,
    right_bc: &G2,
    boundary: BoundaryKind,
) -> Result<(), SolverError>
where
    G1: Fn(f64) -> f64,
    G2: Fn(f64) -> f64,
{
    let m = grid.space_points();
    let n = grid.time_points();
    let r = grid.mesh_ratio();

    // Transformed variable of the known column, rebuilt each step.
    let mut w = vec![0.0; m];

    for j in 0..n - 1 {
        let (prev, next) = u.columns_split(j);

        for (wi, &ui) in w.iter_mut().zip(prev.iter()) {
            *wi = equation.transformed(ui);
        }

        for i in 1..m - 1 {
            next[i] = prev[i] + r * (w[i + 1] - 2.0 * w[i] + w[i - 1]);
        }

        match boundary {
            BoundaryKind::Dirichlet => {
                let t_next = grid.t[j + 1];
                boundary::apply_dirichlet(next, left_bc(t_next), right_bc(t_next));
            }
            BoundaryKind::Neumann => boundary::apply_neumann(next),
        }

        if let Some(i) = next.iter().position(|v| !v.is_finite()) {
            return Err(SolverError::NumericalInstability {
                time_index: j + 1,
                reason: format!("non-finite value at spatial index {i}"),
            });
        }
    }

    Ok(())
}
