//! Closed-form Barenblatt source solution, the ground truth for error
//! measurement.

/// The one-dimensional Barenblatt profile for ∂u/∂t = ∂²(u^(m+1))/∂x².
///
/// With γ = m + 1 and α = 1 / (m + 2):
///
/// ```text
/// u(x, t) = t^(-α) · max(1/2 - α·(γ-1)/(2γ) · x² · t^(-2α), 0)^(1/(γ-1))
/// ```
///
/// The profile is a compactly supported bump spreading from a point
/// source; it matches a solver configured with the same exponent `m`.
/// Requires `t > 0` (the profile degenerates to a Dirac mass at t = 0).
pub fn barenblatt(x: f64, t: f64, m: f64) -> f64 {
    let gamma = m + 1.0;
    let alpha = 1.0 / (m + 2.0);
    let coeff = alpha * (gamma - 1.0) / (2.0 * gamma);
    let s = 0.5 - coeff * x * x / t.powf(2.0 * alpha);
    t.powf(-alpha) * s.max(0.0).powf(1.0 / (gamma - 1.0))
}
