//! Uniform space/time grid for 1D initial-boundary value problems.
//!
//! A grid is a pair of uniform partitions: M points covering the spatial
//! interval [x_low, x_high] and N points covering the time interval
//! [t_low, t_high]. It is immutable once built.

use crate::error::SolverError;

/// Uniform discretization of a space-time rectangle.
#[derive(Clone, Debug)]
pub struct Grid1D {
    /// Left endpoint of the spatial domain
    pub x_low: f64,
    /// Right endpoint of the spatial domain
    pub x_high: f64,
    /// Start of the time interval
    pub t_low: f64,
    /// End of the time interval
    pub t_high: f64,
    /// Spatial coordinates, strictly increasing, length M
    pub x: Vec<f64>,
    /// Temporal coordinates, strictly increasing, length N
    pub t: Vec<f64>,
    /// Spatial step h = (x_high - x_low) / (M - 1)
    pub h: f64,
    /// Temporal step k = (t_high - t_low) / (N - 1)
    pub k: f64,
}

impl Grid1D {
    /// Build a uniform grid with `space_points` spatial and `time_points`
    /// temporal coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidDomain`] if either point count is
    /// below 2, a bound is non-finite, or the bounds are non-increasing.
    pub fn new(
        x_bounds: (f64, f64),
        t_bounds: (f64, f64),
        space_points: usize,
        time_points: usize,
    ) -> Result<Self, SolverError> {
        let (x_low, x_high) = x_bounds;
        let (t_low, t_high) = t_bounds;

        if space_points < 2 {
            return Err(SolverError::InvalidDomain(format!(
                "need at least 2 spatial points, got {space_points}"
            )));
        }
        if time_points < 2 {
            return Err(SolverError::InvalidDomain(format!(
                "need at least 2 time points, got {time_points}"
            )));
        }
        if !(x_low.is_finite() && x_high.is_finite() && t_low.is_finite() && t_high.is_finite()) {
            return Err(SolverError::InvalidDomain(
                "domain bounds must be finite".to_string(),
            ));
        }
        if x_high <= x_low {
            return Err(SolverError::InvalidDomain(format!(
                "x_high ({x_high}) must be greater than x_low ({x_low})"
            )));
        }
        if t_high <= t_low {
            return Err(SolverError::InvalidDomain(format!(
                "t_high ({t_high}) must be greater than t_low ({t_low})"
            )));
        }

        let h = (x_high - x_low) / (space_points - 1) as f64;
        let k = (t_high - t_low) / (time_points - 1) as f64;

        let x: Vec<f64> = (0..space_points).map(|i| x_low + i as f64 * h).collect();
        let t: Vec<f64> = (0..time_points).map(|j| t_low + j as f64 * k).collect();

        Ok(Self {
            x_low,
            x_high,
            t_low,
            t_high,
            x,
            t,
            h,
            k,
        })
    }

    /// Number of spatial grid points M.
    pub fn space_points(&self) -> usize {
        self.x.len()
    }

    /// Number of temporal grid points N.
    pub fn time_points(&self) -> usize {
        self.t.len()
    }

    /// The mesh ratio k / h² that scales the discrete diffusion term.
    pub fn mesh_ratio(&self) -> f64 {
        self.k / (self.h * self.h)
    }
}
