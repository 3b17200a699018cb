//! Solver configuration, state, and the two time-stepping schemes.

mod explicit;
mod implicit;
mod solution;
pub(crate) mod tridiag;

pub use solution::SolutionField;

use crate::boundary::BoundaryKind;
use crate::equations::PorousMediumEquation;
use crate::error::SolverError;
use crate::grid::Grid1D;

/// Domain and discretization parameters of one solver instance.
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Nonlinearity exponent m of the diffusivity u^m
    pub m: f64,
    /// Number of spatial grid points M
    pub space_points: usize,
    /// Number of temporal grid points N
    pub time_points: usize,
    /// Spatial bounds (X_low, X_high)
    pub x_bounds: (f64, f64),
    /// Temporal bounds (T_low, T_high)
    pub t_bounds: (f64, f64),
}

/// Budget for the implicit fixed-point iteration.
#[derive(Clone, Copy, Debug)]
pub struct IterationControl {
    /// Maximum sweeps per time step before giving up
    pub max_iterations: usize,
    /// Convergence threshold on the maximum change between sweeps
    pub tolerance: f64,
}

impl Default for IterationControl {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance: 1e-8,
        }
    }
}

/// A deliberate perturbation of one initial grid point.
#[derive(Clone, Copy, Debug)]
pub struct Impulse {
    /// Spatial index of the perturbed point
    pub index: usize,
    /// Factor the initial value is scaled by
    pub ratio: f64,
}

/// Result of one stepping run: the grids, the full solution field, and
/// the step sizes. This is the shape surface-plotting consumers expect.
#[derive(Clone, Debug)]
pub struct SolverOutput {
    /// Spatial coordinates, length M
    pub x: Vec<f64>,
    /// Temporal coordinates, length N
    pub t: Vec<f64>,
    /// Solution values over the full grid
    pub u: SolutionField,
    /// Spatial step size
    pub h: f64,
    /// Temporal step size
    pub k: f64,
}

/// One-dimensional porous medium equation solver.
///
/// Owns the grid, the equation, and the caller-supplied initial and
/// boundary functions. Each stepping run allocates its own solution
/// field; the solver itself is never mutated by a run, so one instance
/// can drive many runs (the convergence studies rely on this).
pub struct PorousMediumSolver<F, G1, G2>
where
    F: Fn(f64) -> f64,
    G1: Fn(f64) -> f64,
    G2: Fn(f64) -> f64,
{
    equation: PorousMediumEquation,
    grid: Grid1D,
    initial: F,
    left_bc: G1,
    right_bc: G2,
    impulses: Vec<Impulse>,
    iteration: IterationControl,
}

impl<F, G1, G2> PorousMediumSolver<F, G1, G2>
where
    F: Fn(f64) -> f64,
    G1: Fn(f64) -> f64,
    G2: Fn(f64) -> f64,
{
    /// Create a solver from domain parameters, the initial condition
    /// f(x), and the boundary value functions g1(t) (left) and g2(t)
    /// (right).
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidDomain`] for malformed parameters;
    /// validation happens here, not at stepping time.
    pub fn new(
        config: SolverConfig,
        initial: F,
        left_bc: G1,
        right_bc: G2,
    ) -> Result<Self, SolverError> {
        let equation = PorousMediumEquation::new(config.m)?;
        let grid = Grid1D::new(
            config.x_bounds,
            config.t_bounds,
            config.space_points,
            config.time_points,
        )?;

        Ok(Self {
            equation,
            grid,
            initial,
            left_bc,
            right_bc,
            impulses: Vec::new(),
            iteration: IterationControl::default(),
        })
    }

    /// Replace the implicit iteration budget.
    pub fn with_iteration_control(mut self, control: IterationControl) -> Self {
        self.iteration = control;
        self
    }

    /// Scale the initial value at spatial index `index` by `ratio`.
    ///
    /// The perturbation is applied to the initial column when a run
    /// starts, before any time step. Repeated calls stack in order.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidDomain`] if the index is out of
    /// range or the ratio is not finite.
    pub fn add_impulse(&mut self, index: usize, ratio: f64) -> Result<(), SolverError> {
        if index >= self.grid.space_points() {
            return Err(SolverError::InvalidDomain(format!(
                "impulse index {index} out of range for {} spatial points",
                self.grid.space_points()
            )));
        }
        if !ratio.is_finite() {
            return Err(SolverError::InvalidDomain(format!(
                "impulse ratio must be finite, got {ratio}"
            )));
        }
        self.impulses.push(Impulse { index, ratio });
        Ok(())
    }

    /// The grid this solver was configured with.
    pub fn grid(&self) -> &Grid1D {
        &self.grid
    }

    /// The equation this solver was configured with.
    pub fn equation(&self) -> &PorousMediumEquation {
        &self.equation
    }

    /// Advance with the explicit forward difference scheme.
    ///
    /// Stability is the caller's precondition: the effective diffusion
    /// number (see [`PorousMediumEquation::diffusion_number`]) must stay
    /// below 1/2, which ties the admissible k to h² and to the solution
    /// magnitude. Blow-up from a violated bound is reported as
    /// [`SolverError::NumericalInstability`].
    pub fn forward_euler(&self, boundary: BoundaryKind) -> Result<SolverOutput, SolverError> {
        self.run_explicit_on(&self.grid, true, boundary)
    }

    /// Advance with the fully implicit backward difference scheme,
    /// solving the nonlinear tridiagonal system at every time step.
    pub fn backward_euler(&self, boundary: BoundaryKind) -> Result<SolverOutput, SolverError> {
        self.run_implicit_on(&self.grid, true, boundary)
    }

    /// Evaluate the initial condition onto a column, optionally applying
    /// the registered impulses.
    fn inject_initial(&self, grid: &Grid1D, apply_impulses: bool, column: &mut [f64]) {
        for (value, &x) in column.iter_mut().zip(grid.x.iter()) {
            *value = (self.initial)(x);
        }
        if apply_impulses {
            for impulse in &self.impulses {
                column[impulse.index] *= impulse.ratio;
            }
        }
    }

    pub(crate) fn run_explicit_on(
        &self,
        grid: &Grid1D,
        apply_impulses: bool,
        boundary: BoundaryKind,
    ) -> Result<SolverOutput, SolverError> {
        let mut u = SolutionField::zeros(grid.space_points(), grid.time_points());
        self.inject_initial(grid, apply_impulses, u.time_slice_mut(0));
        explicit::advance(
            &self.equation,
            grid,
            &mut u,
            &self.left_bc,
            &self.right_bc,
            boundary,
        )?;
        Ok(SolverOutput {
            x: grid.x.clone(),
            t: grid.t.clone(),
            u,
            h: grid.h,
            k: grid.k,
        })
    }

    pub(crate) fn run_implicit_on(
        &self,
        grid: &Grid1D,
        apply_impulses: bool,
        boundary: BoundaryKind,
    ) -> Result<SolverOutput, SolverError> {
        let mut u = SolutionField::zeros(grid.space_points(), grid.time_points());
        self.inject_initial(grid, apply_impulses, u.time_slice_mut(0));
        implicit::advance(
            &self.equation,
            grid,
            &mut u,
            &self.left_bc,
            &self.right_bc,
            boundary,
            &self.iteration,
        )?;
        Ok(SolverOutput {
            x: grid.x.clone(),
            t: grid.t.clone(),
            u,
            h: grid.h,
            k: grid.k,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero(_t: f64) -> f64 {
        0.0
    }

    fn bump(x: f64) -> f64 {
        (1.0 - x * x).max(0.0)
    }

    fn config() -> SolverConfig {
        SolverConfig {
            m: 1.0,
            space_points: 11,
            time_points: 101,
            x_bounds: (-2.0, 2.0),
            t_bounds: (0.0, 0.1),
        }
    }

    #[test]
    fn test_impulse_scales_initial_point() {
        let mut solver = PorousMediumSolver::new(config(), bump, zero, zero).unwrap();
        solver.add_impulse(5, 0.75).unwrap();

        let output = solver.forward_euler(BoundaryKind::Dirichlet).unwrap();
        let x_mid = output.x[5];
        assert!((output.u.at(5, 0) - 0.75 * bump(x_mid)).abs() < 1e-14);
        // Neighbors keep their unscaled initial values
        assert!((output.u.at(4, 0) - bump(output.x[4])).abs() < 1e-14);
    }

    #[test]
    fn test_impulse_validation() {
        let mut solver = PorousMediumSolver::new(config(), bump, zero, zero).unwrap();
        assert!(matches!(
            solver.add_impulse(11, 0.5),
            Err(SolverError::InvalidDomain(_))
        ));
        assert!(matches!(
            solver.add_impulse(3, f64::NAN),
            Err(SolverError::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let bad = SolverConfig {
            m: 0.5,
            ..config()
        };
        assert!(matches!(
            PorousMediumSolver::new(bad, bump, zero, zero),
            Err(SolverError::InvalidDomain(_))
        ));

        let bad = SolverConfig {
            space_points: 1,
            ..config()
        };
        assert!(matches!(
            PorousMediumSolver::new(bad, bump, zero, zero),
            Err(SolverError::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_output_shapes() {
        let solver = PorousMediumSolver::new(config(), bump, zero, zero).unwrap();
        let output = solver.backward_euler(BoundaryKind::Dirichlet).unwrap();

        assert_eq!(output.x.len(), 11);
        assert_eq!(output.t.len(), 101);
        assert_eq!(output.u.space_points(), 11);
        assert_eq!(output.u.time_points(), 101);
        assert!((output.h - 0.4).abs() < 1e-14);
        assert!((output.k - 0.001).abs() < 1e-14);
    }
}
