//! Dimensionless plant efficiency.

use std::ops::Deref;

use uom::si::{
    f64::Ratio,
    pressure::atmosphere,
    ratio::{percent, ratio},
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

use super::{PlantConfig, ProcessParameters};

/// How close the plant operates to its modeled optimum.
///
/// An efficiency of 1.0 means every continuous parameter sits at its optimum
/// with a normal catalyst. Better catalysts push the value slightly above
/// 1.0; the value is never negative, and there is no upper cap beyond the
/// natural bound from the catalyst multiplier.
#[derive(Debug, Clone, Copy)]
pub struct Efficiency(Constrained<Ratio, NonNegative>);

impl Efficiency {
    /// Creates an [`Efficiency`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative or not a number.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Creates an [`Efficiency`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is negative or not a number.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?))
    }
}

impl Deref for Efficiency {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Maps process parameters to a dimensionless efficiency.
///
/// Each continuous parameter contributes a multiplicative factor from its
/// configured curve. The factor product is floored at zero before the
/// catalyst multiplier applies.
pub(super) fn compute(parameters: &ProcessParameters, config: &PlantConfig) -> Efficiency {
    let curves = &config.curves;
    let product = curves
        .pressure
        .factor(parameters.pressure().get::<atmosphere>())
        * curves
            .temperature
            .factor(parameters.temperature().get::<degree_celsius>())
        * curves
            .flow_rate
            .factor(parameters.flow_rate().get::<cubic_meter_per_hour>())
        * curves.purge.factor(parameters.purge().get::<percent>())
        * curves
            .cooling
            .factor(parameters.cooling().get::<degree_celsius>());
    let multiplier = config.catalyst.for_grade(parameters.catalyst()).multiplier;

    Efficiency::new(product.max(0.0) * multiplier)
        .expect("floored factor product times a positive multiplier is non-negative")
}
