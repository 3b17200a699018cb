//! Implicit (backward Euler) time stepping.
//!
//! Each step solves the nonlinear system
//!
//! ```text
//! u[i][j+1] - (k/h²)·(w[i+1] - 2·w[i] + w[i-1])[j+1] = u[i][j]
//! ```
//!
//! with w = u^(m+1) evaluated at the unknown column. Writing w = D(u)·u
//! with D the diffusivity at the current iterate turns each sweep into a
//! linear tridiagonal solve; the iterate is relaxed until the maximum
//! change between sweeps drops below the configured tolerance.
//!
//! The per-step solve is unconditionally stable in the linear sense, so
//! this stepper tolerates far larger time steps than the explicit one.

use crate::boundary::{self, BoundaryKind};
use crate::equations::PorousMediumEquation;
use crate::error::SolverError;
use crate::grid::Grid1D;
use crate::solver::{tridiag, IterationControl, SolutionField};

/// March the field from its initial column to the final time level.
///
/// Column 0 must already hold the initial data.
pub(crate) fn advance<G1, G2>(
    equation: &PorousMediumEquation,
    grid: &Grid1D,
    u: &mut SolutionField,
    left_bc: &G1,
    right_bc: &G2,
    boundary: BoundaryKind,
    control: &IterationControl,
) -> Result<(), SolverError>
where
    G1: Fn(f64) -> f64,
    G2: Fn(f64) -> f64,
{
    let m = grid.space_points();
    let n = grid.time_points();
    let r = grid.mesh_ratio();

    let mut sub = vec![0.0; m];
    let mut diag = vec![0.0; m];
    let mut sup = vec![0.0; m];
    let mut rhs = vec![0.0; m];

    for j in 0..n - 1 {
        let target = u.time_slice(j).to_vec();
        let mut iterate = target.clone();
        let mut residual = f64::INFINITY;
        let mut converged = false;

        for _ in 0..control.max_iterations {
            for i in 1..m - 1 {
                sub[i] = -r * equation.diffusivity(iterate[i - 1]);
                diag[i] = 1.0 + 2.0 * r * equation.diffusivity(iterate[i]);
                sup[i] = -r * equation.diffusivity(iterate[i + 1]);
                rhs[i] = target[i];
            }
            match boundary {
                BoundaryKind::Dirichlet => {
                    let t_next = grid.t[j + 1];
                    boundary::dirichlet_rows(
                        &mut sub,
                        &mut diag,
                        &mut sup,
                        &mut rhs,
                        left_bc(t_next),
                        right_bc(t_next),
                    );
                }
                BoundaryKind::Neumann => {
                    boundary::neumann_rows(&mut sub, &mut diag, &mut sup, &mut rhs);
                }
            }

            let solved = tridiag::solve(&sub, &diag, &sup, &rhs).ok_or_else(|| {
                SolverError::NumericalInstability {
                    time_index: j + 1,
                    reason: "singular tridiagonal system".to_string(),
                }
            })?;

            residual = solved
                .iter()
                .zip(iterate.iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max);
            iterate = solved;

            if residual < control.tolerance {
                converged = true;
                break;
            }
        }

        if !converged {
            return Err(SolverError::NonConvergence {
                time_index: j + 1,
                residual,
                iterations: control.max_iterations,
            });
        }
        if let Some(i) = iterate.iter().position(|v| !v.is_finite()) {
            return Err(SolverError::NumericalInstability {
                time_index: j + 1,
                reason: format!("non-finite value at spatial index {i}"),
            });
        }

        u.time_slice_mut(j + 1).copy_from_slice(&iterate);
    }

    Ok(())
}
