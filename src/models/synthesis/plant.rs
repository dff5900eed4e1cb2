//! Ammonia synthesis plant economics model.
//!
//! Maps five continuous process parameters and a catalyst grade to a
//! dimensionless efficiency and an economics projection. The computational
//! core is in the internal `core` module; [`PlantModel`] is the thin
//! [`twine_core::Model`] adapter over it.

mod core;

pub use self::core::{
    CatalystEffect, CatalystEffects, CatalystGrade, DeviationCurve, EconomicResult,
    EconomicsConfig, Efficiency, EfficiencyCurves, GivenProfitConfig, GivenProfitError,
    OperatingPoint, ParameterBounds, ParameterError, ParameterField, Plant, PlantConfig,
    ProcessParameters, SlopeCurve,
};

use std::convert::Infallible;

use twine_core::Model;

/// [`twine_core::Model`] adapter for plant economics.
///
/// Validation happens when [`ProcessParameters`] are constructed, so
/// projecting economics from them cannot fail.
#[derive(Debug, Clone, Default)]
pub struct PlantModel {
    plant: Plant,
}

impl PlantModel {
    /// Creates an adapter around the given plant.
    #[must_use]
    pub fn new(plant: Plant) -> Self {
        Self { plant }
    }
}

impl Model for PlantModel {
    type Input = ProcessParameters;
    type Output = EconomicResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.plant.economics(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::mass::ton;

    #[test]
    fn adapter_delegates_to_the_core() {
        let model = PlantModel::default();
        let parameters = ProcessParameters::from_raw(
            250.0,
            425.0,
            15_500.0,
            3.0,
            10.0,
            "normal",
            &Plant::default().config().bounds,
        )
        .unwrap();

        let result = model.call(&parameters).unwrap();

        assert_relative_eq!(result.production.get::<ton>(), 1_400.0, epsilon = 1e-9);
        assert_relative_eq!(result.profit, 20_000.0, epsilon = 1e-6);
    }
}
