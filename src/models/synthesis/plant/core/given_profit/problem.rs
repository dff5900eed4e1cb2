//! Problem formulation for target-profit solving.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use crate::models::synthesis::plant::core::{ParameterField, Plant, ProcessParameters};

use super::OperatingPoint;

/// Model adapter for target-profit solving.
///
/// Wraps the plant economics projection and exposes the varied parameter's
/// value, in its conventional unit, as the sole input variable to the model.
pub(super) struct GivenProfitModel<'a> {
    plant: &'a Plant,
    base: &'a ProcessParameters,
    knob: ParameterField,
}

impl<'a> GivenProfitModel<'a> {
    pub(super) fn new(
        plant: &'a Plant,
        base: &'a ProcessParameters,
        knob: ParameterField,
    ) -> Self {
        Self { plant, base, knob }
    }
}

impl Model for GivenProfitModel<'_> {
    type Input = f64;
    type Output = OperatingPoint;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let parameters = self.base.with_raw_value(self.knob, *input);
        let economics = self.plant.economics(&parameters);
        Ok(OperatingPoint {
            parameters,
            economics,
        })
    }
}

/// Equation problem definition for profit matching.
///
/// Computes the residual as `projected_profit - target_profit`.
pub(super) struct GivenProfitProblem {
    target_profit: f64,
}

impl GivenProfitProblem {
    pub(super) fn new(target_profit: f64) -> Self {
        Self { target_profit }
    }
}

impl EquationProblem<1> for GivenProfitProblem {
    type Input = f64;
    type Output = OperatingPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.economics.profit - self.target_profit])
    }
}
