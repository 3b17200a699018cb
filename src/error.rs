//! Error types for solver construction and time stepping.

use thiserror::Error;

/// Error type for grid construction and stepping failures.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Malformed grid or equation parameters, detected at construction.
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    /// The implicit nonlinear iteration exhausted its iteration budget
    /// without meeting the convergence tolerance.
    #[error(
        "implicit solve failed to converge at time index {time_index}: \
         residual {residual:.3e} after {iterations} iterations"
    )]
    NonConvergence {
        /// Index of the time level being solved for.
        time_index: usize,
        /// Maximum absolute change between the last two iterates.
        residual: f64,
        /// Number of iterations performed before giving up.
        iterations: usize,
    },

    /// The computed solution left the representable range (NaN or Inf),
    /// typically because the explicit stability bound was violated.
    #[error("numerical instability at time index {time_index}: {reason}")]
    NumericalInstability {
        /// Index of the first time level containing a non-finite value.
        time_index: usize,
        /// Short description of what was detected.
        reason: String,
    },
}
