//! Parametric yield and economics core for an ammonia synthesis plant.
//!
//! The model maps five continuous process parameters and a catalyst grade to
//! a dimensionless efficiency, then projects production, revenue, cost, and
//! profit from it. All computation is pure arithmetic over validated inputs;
//! results are produced fresh per call and carry no state.

mod catalyst;
mod config;
mod economics;
mod efficiency;
mod error;
mod given_profit;
mod parameters;

#[cfg(test)]
mod test_support;

pub use catalyst::CatalystGrade;
pub use config::{
    CatalystEffect, CatalystEffects, DeviationCurve, EconomicsConfig, EfficiencyCurves,
    ParameterBounds, PlantConfig, SlopeCurve,
};
pub use economics::EconomicResult;
pub use efficiency::Efficiency;
pub use error::{ParameterError, ParameterField};
pub use given_profit::{GivenProfitConfig, GivenProfitError, OperatingPoint};
pub use parameters::ProcessParameters;

/// Entry point for evaluating plant scenarios against one configuration.
///
/// The configuration is fixed at construction; [`Plant::default`] carries the
/// canonical constant table documented on [`PlantConfig`].
#[derive(Debug, Clone, Default)]
pub struct Plant {
    config: PlantConfig,
}

impl Plant {
    /// Creates a plant model with the given configuration.
    #[must_use]
    pub fn new(config: PlantConfig) -> Self {
        Self { config }
    }

    /// Returns the plant configuration.
    #[must_use]
    pub fn config(&self) -> &PlantConfig {
        &self.config
    }

    /// Computes the dimensionless efficiency for the given parameters.
    #[must_use]
    pub fn efficiency(&self, parameters: &ProcessParameters) -> Efficiency {
        efficiency::compute(parameters, &self.config)
    }

    /// Projects production and economics for the given parameters.
    #[must_use]
    pub fn economics(&self, parameters: &ProcessParameters) -> EconomicResult {
        economics::project(parameters, &self.config)
    }

    /// Solves for the value of one continuous parameter that meets a target
    /// profit, holding the remaining parameters at `base`.
    ///
    /// # Errors
    ///
    /// Returns a [`GivenProfitError`] if the target profit is not bracketed
    /// by the knob's bound interval or the solver fails to converge.
    pub fn given_profit(
        &self,
        base: &ProcessParameters,
        knob: ParameterField,
        target_profit: f64,
        config: GivenProfitConfig,
    ) -> Result<OperatingPoint, GivenProfitError> {
        given_profit::given_profit(self, base, knob, target_profit, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass::ton, ratio::ratio};

    use super::test_support::optimum_parameters;

    #[test]
    fn reference_scenario_with_improved_catalyst() {
        let plant = Plant::default();
        let parameters = optimum_parameters(CatalystGrade::Improved);

        let efficiency = plant.efficiency(&parameters);
        assert_relative_eq!(efficiency.get::<ratio>(), 1.03, epsilon = 1e-12);

        let result = plant.economics(&parameters);
        assert_relative_eq!(result.production.get::<ton>(), 1_442.0, epsilon = 1e-9);
        assert_relative_eq!(result.variable_cost, 230_720.0, epsilon = 1e-6);
        assert_relative_eq!(result.fixed_cost, 70_000.0);
        assert_relative_eq!(result.total_cost, 300_720.0, epsilon = 1e-6);
        assert_relative_eq!(result.revenue, 311_904.6, epsilon = 1e-6);
        assert_relative_eq!(result.profit, 11_184.6, epsilon = 1e-6);
    }

    #[test]
    fn optimum_with_normal_catalyst_hits_base_capacity() {
        let plant = Plant::default();
        let parameters = optimum_parameters(CatalystGrade::Normal);

        assert_relative_eq!(plant.efficiency(&parameters).get::<ratio>(), 1.0, epsilon = 1e-12);

        let result = plant.economics(&parameters);
        assert_relative_eq!(result.production.get::<ton>(), 1_400.0, epsilon = 1e-9);
        assert_relative_eq!(result.revenue, 294_000.0, epsilon = 1e-6);
        assert_relative_eq!(result.total_cost, 274_000.0, epsilon = 1e-6);
        assert_relative_eq!(result.profit, 20_000.0, epsilon = 1e-6);
    }
}
