use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while solving for a target profit.
#[derive(Debug, Error)]
pub enum GivenProfitError {
    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best profit residual achieved, in euros.
        ///
        /// This is the smallest absolute difference between projected and
        /// target profit encountered during iteration.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
