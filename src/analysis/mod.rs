//! Error measurement, convergence studies, and the analytic reference
//! solution.

mod barenblatt;
mod convergence;
mod norms;

pub use barenblatt::barenblatt;
pub use convergence::{observed_orders, ConvergenceStudy};
pub use norms::ErrorNorms;
