//! Empirical convergence studies under successive grid refinement.
//!
//! Each study re-runs a stepper over a sequence of resolutions obtained
//! by successively halving either the spatial or the temporal point
//! count, holding the other fixed, and measures the error against an
//! analytic reference on every run. Results are ordered coarsest first,
//! i.e. by decreasing step size, ready for log-log regression.
//!
//! Runs within a study are independent of each other. With the
//! `parallel` feature the `*_parallel` variants fan them out with rayon
//! while keeping the deterministic result order.

use crate::analysis::ErrorNorms;
use crate::boundary::BoundaryKind;
use crate::error::SolverError;
use crate::grid::Grid1D;
use crate::solver::PorousMediumSolver;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Step sizes and error norms of one refinement sequence.
///
/// All vectors have one entry per run, ordered by decreasing step size.
#[derive(Clone, Debug)]
pub struct ConvergenceStudy {
    /// Step size of each run (h for space studies, k for time studies)
    pub step_sizes: Vec<f64>,
    /// Mean absolute errors
    pub l1: Vec<f64>,
    /// Root-mean-square errors
    pub l2: Vec<f64>,
    /// Maximum absolute errors
    pub linf: Vec<f64>,
}

impl ConvergenceStudy {
    /// Number of runs in the study.
    pub fn runs(&self) -> usize {
        self.step_sizes.len()
    }

    /// Observed orders of accuracy from the L1 errors, one per pair of
    /// successive runs.
    pub fn observed_orders(&self) -> Vec<f64> {
        observed_orders(&self.step_sizes, &self.l1)
    }

    fn from_runs(runs: Vec<(f64, ErrorNorms)>) -> Self {
        let mut study = Self {
            step_sizes: Vec::with_capacity(runs.len()),
            l1: Vec::with_capacity(runs.len()),
            l2: Vec::with_capacity(runs.len()),
            linf: Vec::with_capacity(runs.len()),
        };
        for (step, norms) in runs {
            study.step_sizes.push(step);
            study.l1.push(norms.l1);
            study.l2.push(norms.l2);
            study.linf.push(norms.linf);
        }
        study
    }
}

/// Observed order of accuracy between successive runs: the log-log slope
/// log(e_i / e_{i+1}) / log(s_i / s_{i+1}).
pub fn observed_orders(step_sizes: &[f64], errors: &[f64]) -> Vec<f64> {
    step_sizes
        .windows(2)
        .zip(errors.windows(2))
        .map(|(s, e)| (e[0] / e[1]).ln() / (s[0] / s[1]).ln())
        .collect()
}

/// Which stepper a convergence study drives.
#[derive(Clone, Copy)]
enum Scheme {
    Explicit,
    Implicit,
}

/// Which discretization axis is refined.
#[derive(Clone, Copy)]
enum Refined {
    Space,
    Time,
}

impl<F, G1, G2> PorousMediumSolver<F, G1, G2>
where
    F: Fn(f64) -> f64,
    G1: Fn(f64) -> f64,
    G2: Fn(f64) -> f64,
{
    /// Space-convergence study of the explicit stepper: `refinements`
    /// successive halvings of the spatial point count, N held fixed.
    ///
    /// Coarsening in space shrinks k/h², so a configuration that is
    /// stable at full resolution stays stable on every coarser run.
    pub fn forward_euler_convergence_space<A>(
        &self,
        analytic: A,
        refinements: usize,
    ) -> Result<ConvergenceStudy, SolverError>
    where
        A: Fn(f64, f64) -> f64,
    {
        self.study(Scheme::Explicit, Refined::Space, &analytic, refinements)
    }

    /// Space-convergence study of the implicit stepper.
    pub fn backward_euler_convergence_space<A>(
        &self,
        analytic: A,
        refinements: usize,
    ) -> Result<ConvergenceStudy, SolverError>
    where
        A: Fn(f64, f64) -> f64,
    {
        self.study(Scheme::Implicit, Refined::Space, &analytic, refinements)
    }

    /// Time-convergence study of the implicit stepper: `refinements`
    /// successive halvings of the temporal point count, M held fixed.
    ///
    /// Only the implicit stepper supports this study; coarsening the
    /// time axis under the explicit scheme walks into its stability
    /// bound.
    pub fn backward_euler_convergence_time<A>(
        &self,
        analytic: A,
        refinements: usize,
    ) -> Result<ConvergenceStudy, SolverError>
    where
        A: Fn(f64, f64) -> f64,
    {
        self.study(Scheme::Implicit, Refined::Time, &analytic, refinements)
    }

    /// Parallel variant of [`Self::forward_euler_convergence_space`].
    #[cfg(feature = "parallel")]
    pub fn forward_euler_convergence_space_parallel<A>(
        &self,
        analytic: A,
        refinements: usize,
    ) -> Result<ConvergenceStudy, SolverError>
    where
        A: Fn(f64, f64) -> f64 + Sync,
        F: Sync,
        G1: Sync,
        G2: Sync,
    {
        self.study_parallel(Scheme::Explicit, Refined::Space, &analytic, refinements)
    }

    /// Parallel variant of [`Self::backward_euler_convergence_space`].
    #[cfg(feature = "parallel")]
    pub fn backward_euler_convergence_space_parallel<A>(
        &self,
        analytic: A,
        refinements: usize,
    ) -> Result<ConvergenceStudy, SolverError>
    where
        A: Fn(f64, f64) -> f64 + Sync,
        F: Sync,
        G1: Sync,
        G2: Sync,
    {
        self.study_parallel(Scheme::Implicit, Refined::Space, &analytic, refinements)
    }

    /// Parallel variant of [`Self::backward_euler_convergence_time`].
    #[cfg(feature = "parallel")]
    pub fn backward_euler_convergence_time_parallel<A>(
        &self,
        analytic: A,
        refinements: usize,
    ) -> Result<ConvergenceStudy, SolverError>
    where
        A: Fn(f64, f64) -> f64 + Sync,
        F: Sync,
        G1: Sync,
        G2: Sync,
    {
        self.study_parallel(Scheme::Implicit, Refined::Time, &analytic, refinements)
    }

    fn study<A>(
        &self,
        scheme: Scheme,
        axis: Refined,
        analytic: &A,
        refinements: usize,
    ) -> Result<ConvergenceStudy, SolverError>
    where
        A: Fn(f64, f64) -> f64,
    {
        let levels = self.refined_levels(axis, refinements)?;
        let runs = levels
            .into_iter()
            .map(|(m_points, n_points)| {
                self.convergence_run(scheme, axis, m_points, n_points, analytic)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ConvergenceStudy::from_runs(runs))
    }

    #[cfg(feature = "parallel")]
    fn study_parallel<A>(
        &self,
        scheme: Scheme,
        axis: Refined,
        analytic: &A,
        refinements: usize,
    ) -> Result<ConvergenceStudy, SolverError>
    where
        A: Fn(f64, f64) -> f64 + Sync,
        F: Sync,
        G1: Sync,
        G2: Sync,
    {
        let levels = self.refined_levels(axis, refinements)?;
        let runs = levels
            .into_par_iter()
            .map(|(m_points, n_points)| {
                self.convergence_run(scheme, axis, m_points, n_points, analytic)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ConvergenceStudy::from_runs(runs))
    }

    /// Resolution sequence of a study, coarsest first. Every level must
    /// keep at least 3 points on the refined axis so an interior remains.
    fn refined_levels(
        &self,
        axis: Refined,
        refinements: usize,
    ) -> Result<Vec<(usize, usize)>, SolverError> {
        let base_m = self.grid().space_points();
        let base_n = self.grid().time_points();

        let mut levels = Vec::with_capacity(refinements + 1);
        for level in (0..=refinements).rev() {
            let (m_points, n_points) = match axis {
                Refined::Space => (base_m >> level, base_n),
                Refined::Time => (base_m, base_n >> level),
            };
            let refined = match axis {
                Refined::Space => m_points,
                Refined::Time => n_points,
            };
            if refined < 3 {
                return Err(SolverError::InvalidDomain(format!(
                    "{refinements} halvings leave only {refined} points on the refined axis \
                     (need at least 3)"
                )));
            }
            levels.push((m_points, n_points));
        }
        Ok(levels)
    }

    /// One run of a study: solve on the refined grid (Dirichlet, no
    /// impulses) and measure the error over every grid point.
    fn convergence_run<A>(
        &self,
        scheme: Scheme,
        axis: Refined,
        m_points: usize,
        n_points: usize,
        analytic: &A,
    ) -> Result<(f64, ErrorNorms), SolverError>
    where
        A: Fn(f64, f64) -> f64,
    {
        let base = self.grid();
        let grid = Grid1D::new(
            (base.x_low, base.x_high),
            (base.t_low, base.t_high),
            m_points,
            n_points,
        )?;
        let output = match scheme {
            Scheme::Explicit => self.run_explicit_on(&grid, false, BoundaryKind::Dirichlet)?,
            Scheme::Implicit => self.run_implicit_on(&grid, false, BoundaryKind::Dirichlet)?,
        };
        let step = match axis {
            Refined::Space => output.h,
            Refined::Time => output.k,
        };
        Ok((step, ErrorNorms::against(&output, analytic)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::barenblatt;
    use crate::solver::SolverConfig;

    fn initial(x: f64) -> f64 {
        barenblatt(x, 0.5, 1.0)
    }

    fn analytic(x: f64, t: f64) -> f64 {
        barenblatt(x, t, 1.0)
    }

    fn zero(_t: f64) -> f64 {
        0.0
    }

    #[test]
    fn test_observed_orders_exact_second_order() {
        let steps = vec![4.0, 2.0, 1.0];
        let errors = vec![16.0, 4.0, 1.0];
        let orders = observed_orders(&steps, &errors);

        assert_eq!(orders.len(), 2);
        assert!((orders[0] - 2.0).abs() < 1e-12);
        assert!((orders[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_study_shape_and_ordering() {
        let config = SolverConfig {
            m: 1.0,
            space_points: 24,
            time_points: 400,
            x_bounds: (-8.0, 8.0),
            t_bounds: (0.5, 1.5),
        };
        let solver = PorousMediumSolver::new(config, initial, zero, zero).unwrap();
        let study = solver.forward_euler_convergence_space(analytic, 2).unwrap();

        assert_eq!(study.runs(), 3);
        assert_eq!(study.l1.len(), 3);
        assert_eq!(study.l2.len(), 3);
        assert_eq!(study.linf.len(), 3);
        // Coarsest first: step sizes strictly decreasing
        assert!(study.step_sizes[0] > study.step_sizes[1]);
        assert!(study.step_sizes[1] > study.step_sizes[2]);
        for &e in &study.l1 {
            assert!(e.is_finite());
        }
    }

    #[test]
    fn test_too_many_refinements() {
        let config = SolverConfig {
            m: 1.0,
            space_points: 10,
            time_points: 50,
            x_bounds: (-2.0, 2.0),
            t_bounds: (0.5, 1.0),
        };
        let solver = PorousMediumSolver::new(config, initial, zero, zero).unwrap();

        assert!(matches!(
            solver.forward_euler_convergence_space(analytic, 3),
            Err(SolverError::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_time_study_reports_time_steps() {
        let config = SolverConfig {
            m: 1.0,
            space_points: 40,
            time_points: 200,
            x_bounds: (-8.0, 8.0),
            t_bounds: (0.5, 1.5),
        };
        let solver = PorousMediumSolver::new(config, initial, zero, zero).unwrap();
        let study = solver.backward_euler_convergence_time(analytic, 2).unwrap();

        // Finest run uses the configured N, so its step is the base k
        let base_k = solver.grid().k;
        assert!((study.step_sizes[2] - base_k).abs() < 1e-14);
        assert!(study.step_sizes[0] > study.step_sizes[2]);
    }
}
