//! Iterative solver for a target profit.
//!
//! This module provides iterative solving to meet a target profit by varying
//! a single continuous parameter over its bound interval until the projected
//! profit converges to the desired value.

mod config;
mod error;
mod problem;

pub use config::GivenProfitConfig;
pub use error::GivenProfitError;

use twine_solvers::equation::bisection;

use crate::models::synthesis::plant::core::{
    EconomicResult, ParameterField, Plant, ProcessParameters,
};

use problem::{GivenProfitModel, GivenProfitProblem};

/// A parameter set together with its projected economics.
#[derive(Debug, Clone)]
pub struct OperatingPoint {
    /// Parameters at the operating point.
    pub parameters: ProcessParameters,

    /// Economics projected at those parameters.
    pub economics: EconomicResult,
}

/// Solves for the value of one continuous parameter that meets a target
/// profit.
///
/// Uses bisection bracketed by the knob's bound interval; all other
/// parameters are held at their base values.
///
/// # Errors
///
/// Returns [`GivenProfitError`] if the target profit is not bracketed by the
/// bound interval or the solver fails to converge.
pub(super) fn given_profit(
    plant: &Plant,
    base: &ProcessParameters,
    knob: ParameterField,
    target_profit: f64,
    config: GivenProfitConfig,
) -> Result<OperatingPoint, GivenProfitError> {
    let (lower, upper) = plant.config().bounds.raw_span(knob);

    let model = GivenProfitModel::new(plant, base, knob);
    let problem = GivenProfitProblem::new(target_profit);

    let solution = bisection::solve(
        &model,
        &problem,
        [lower, upper],
        &config.bisection(),
        |_: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenProfitError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::volume_rate::cubic_meter_per_hour;

    use crate::models::synthesis::plant::core::{CatalystGrade, test_support};

    #[test]
    fn converges_on_the_flow_rate_for_a_reachable_profit() {
        let plant = Plant::default();
        let base = test_support::optimum_parameters(CatalystGrade::Normal);

        let point = given_profit(
            &plant,
            &base,
            ParameterField::FlowRate,
            18_000.0,
            GivenProfitConfig::default(),
        )
        .expect("profit solve should succeed");

        assert_relative_eq!(point.economics.profit, 18_000.0, epsilon = 1e-3);
        // Analytic root of the profit curve on the below-optimum branch.
        assert_relative_eq!(
            point.parameters.flow_rate().get::<cubic_meter_per_hour>(),
            12_547.619_047_619_048,
            epsilon = 1e-3
        );
    }

    #[test]
    fn solved_point_keeps_the_base_values_for_other_fields() {
        let plant = Plant::default();
        let base = test_support::optimum_parameters(CatalystGrade::Normal);

        let point = given_profit(
            &plant,
            &base,
            ParameterField::FlowRate,
            18_000.0,
            GivenProfitConfig::default(),
        )
        .expect("profit solve should succeed");

        assert_eq!(point.parameters.pressure(), base.pressure());
        assert_eq!(point.parameters.purge(), base.purge());
        assert_eq!(point.parameters.catalyst(), base.catalyst());
    }

    #[test]
    fn unreachable_target_fails() {
        let plant = Plant::default();
        let base = test_support::optimum_parameters(CatalystGrade::Normal);

        // Maximum profit over the flow interval is 20 000 € at the optimum.
        let result = given_profit(
            &plant,
            &base,
            ParameterField::FlowRate,
            1_000_000.0,
            GivenProfitConfig::default(),
        );

        assert!(result.is_err());
    }
}
