use twine_solvers::equation::bisection;

/// Solver configuration for iterative profit matching.
#[derive(Debug, Clone, Copy)]
pub struct GivenProfitConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the varied parameter, in its conventional unit.
    pub knob_tol: f64,

    /// Absolute tolerance for the profit residual, in euros.
    pub profit_tol: f64,
}

impl Default for GivenProfitConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            knob_tol: 1e-9,
            profit_tol: 1e-6,
        }
    }
}

impl GivenProfitConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.knob_tol,
            x_rel_tol: 0.0,
            residual_tol: self.profit_tol,
        }
    }
}
