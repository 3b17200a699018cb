//! The porous medium equation ∂u/∂t = ∂²(u^(m+1))/∂x².
//!
//! The solution-dependent diffusivity D(u) = u^m vanishes where u = 0,
//! which makes the equation degenerate: compactly supported initial data
//! stays compactly supported and spreads with a finite front speed.
//!
//! Both steppers difference the transformed variable w = D(u)·u = u^(m+1):
//! the discrete Laplacian of w approximates the right-hand side, and the
//! implicit scheme linearizes w as D(v)·u around the current iterate v.

use crate::error::SolverError;

/// The porous medium equation with diffusivity exponent `m`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PorousMediumEquation {
    m: f64,
}

impl PorousMediumEquation {
    /// Create the equation with diffusivity D(u) = u^m.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidDomain`] if `m` is below 1 or not
    /// finite. The degenerate-diffusion regime requires m ≥ 1.
    pub fn new(m: f64) -> Result<Self, SolverError> {
        if !m.is_finite() || m < 1.0 {
            return Err(SolverError::InvalidDomain(format!(
                "nonlinearity exponent must be finite and at least 1, got {m}"
            )));
        }
        Ok(Self { m })
    }

    /// The nonlinearity exponent m.
    pub fn exponent(&self) -> f64 {
        self.m
    }

    /// Solution-dependent diffusivity D(u) = u^m.
    #[inline]
    pub fn diffusivity(&self, u: f64) -> f64 {
        u.powf(self.m)
    }

    /// Transformed variable w = D(u)·u = u^(m+1).
    #[inline]
    pub fn transformed(&self, u: f64) -> f64 {
        self.diffusivity(u) * u
    }

    /// Effective diffusion number (m+1)·u_max^m · k / h² of the explicit
    /// scheme.
    ///
    /// The forward update is stable while this number stays below 1/2.
    /// The bound is a documented precondition, not a runtime check: the
    /// stepper runs regardless and reports blow-up only after the fact.
    pub fn diffusion_number(&self, u_max: f64, h: f64, k: f64) -> f64 {
        (self.m + 1.0) * u_max.powf(self.m) * k / (h * h)
    }
}
