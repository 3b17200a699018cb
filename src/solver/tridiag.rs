//! Thomas algorithm for tridiagonal systems.
//!
//! One forward elimination sweep followed by back substitution, O(n).
//! The implicit stepper assembles strictly diagonally dominant systems,
//! for which the algorithm is stable without pivoting.

/// Solve the tridiagonal system with sub-diagonal `sub` (first entry
/// unused), main diagonal `diag`, super-diagonal `sup` (last entry unused)
/// and right-hand side `rhs`.
///
/// Returns `None` if elimination encounters a vanishing pivot.
pub(crate) fn solve(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Option<Vec<f64>> {
    let n = rhs.len();
    debug_assert!(n >= 2);
    debug_assert_eq!(sub.len(), n);
    debug_assert_eq!(diag.len(), n);
    debug_assert_eq!(sup.len(), n);

    let mut sup_prime = vec![0.0; n];
    let mut rhs_prime = vec![0.0; n];

    if diag[0].abs() < f64::EPSILON {
        return None;
    }
    sup_prime[0] = sup[0] / diag[0];
    rhs_prime[0] = rhs[0] / diag[0];

    for i in 1..n {
        let pivot = diag[i] - sub[i] * sup_prime[i - 1];
        if pivot.abs() < f64::EPSILON {
            return None;
        }
        if i < n - 1 {
            sup_prime[i] = sup[i] / pivot;
        }
        rhs_prime[i] = (rhs[i] - sub[i] * rhs_prime[i - 1]) / pivot;
    }

    let mut x = vec![0.0; n];
    x[n - 1] = rhs_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = rhs_prime[i] - sup_prime[i] * x[i + 1];
    }

    Some(x)
}
