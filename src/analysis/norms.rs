//! Error norms of a computed solution against an analytic reference.

use crate::solver::SolverOutput;

/// L1 (mean absolute), L2 (root-mean-square), and L∞ (maximum) error of
/// a run against an analytic solution, taken over every grid point.
#[derive(Clone, Copy, Debug)]
pub struct ErrorNorms {
    /// Mean absolute error
    pub l1: f64,
    /// Root-mean-square error
    pub l2: f64,
    /// Maximum absolute error
    pub linf: f64,
}

impl ErrorNorms {
    /// Compare a run against `analytic(x, t)` evaluated on the same grid.
    pub fn against<A>(output: &SolverOutput, analytic: A) -> Self
    where
        A: Fn(f64, f64) -> f64,
    {
        let mut abs_sum = 0.0;
        let mut sq_sum = 0.0;
        let mut max_abs: f64 = 0.0;

        for (j, &t) in output.t.iter().enumerate() {
            for (i, &x) in output.x.iter().enumerate() {
                let diff = output.u.at(i, j) - analytic(x, t);
                abs_sum += diff.abs();
                sq_sum += diff * diff;
                max_abs = max_abs.max(diff.abs());
            }
        }

        let n = (output.x.len() * output.t.len()) as f64;
        Self {
            l1: abs_sum / n,
            l2: (sq_sum / n).sqrt(),
            linf: max_abs,
        }
    }

    /// Compare a single time slice of a run against `analytic(x, t)`.
    pub fn at_time_slice<A>(output: &SolverOutput, j: usize, analytic: A) -> Self
    where
        A: Fn(f64, f64) -> f64,
    {
        let t = output.t[j];
        let mut abs_sum = 0.0;
        let mut sq_sum = 0.0;
        let mut max_abs: f64 = 0.0;

        for (i, &x) in output.x.iter().enumerate() {
            let diff = output.u.at(i, j) - analytic(x, t);
            abs_sum += diff.abs();
            sq_sum += diff * diff;
            max_abs = max_abs.max(diff.abs());
        }

        let n = output.x.len() as f64;
        Self {
            l1: abs_sum / n,
            l2: (sq_sum / n).sqrt(),
            linf: max_abs,
        }
    }
}
