//! Plant model configuration.
//!
//! All constants of the model live here as immutable plain-data records so
//! the reference table is explicit and alternate tunings stay expressible
//! without code changes. Curve constants are expressed in each parameter's
//! conventional unit (atm, °C, m³/h, %).

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature, VolumeRate},
    pressure::atmosphere,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::interval::Interval;

use super::{CatalystGrade, ParameterField};

/// A deviation-penalty efficiency curve.
///
/// The factor is 1 at the optimum and falls off linearly with the absolute
/// deviation, normalized by `scale`.
#[derive(Debug, Clone, Copy)]
pub struct DeviationCurve {
    /// Parameter value at which the factor is 1.
    pub optimal: f64,

    /// Normalization span for the deviation.
    ///
    /// Usually equal to `optimal`; the cooling curve uses a fixed 100 °C
    /// span instead because its optimum sits near zero.
    pub scale: f64,

    /// Sensitivity weight applied to the normalized deviation.
    pub weight: f64,
}

impl DeviationCurve {
    /// Evaluates the factor for a parameter value in its conventional unit.
    #[must_use]
    pub fn factor(&self, value: f64) -> f64 {
        1.0 - ((self.optimal - value).abs() / self.scale) * self.weight
    }
}

/// A signed-slope efficiency curve.
///
/// The factor crosses 1 at the optimum and decreases linearly as the
/// parameter rises above it; below the optimum it slightly exceeds 1.
#[derive(Debug, Clone, Copy)]
pub struct SlopeCurve {
    /// Parameter value at which the factor is 1.
    pub optimal: f64,

    /// Normalization span for the excursion above or below the optimum.
    pub span: f64,

    /// Sensitivity weight applied to the normalized excursion.
    pub weight: f64,
}

impl SlopeCurve {
    /// Evaluates the factor for a parameter value in its conventional unit.
    #[must_use]
    pub fn factor(&self, value: f64) -> f64 {
        1.0 - (value - self.optimal) / self.span * self.weight
    }
}

/// Per-parameter efficiency curves.
///
/// The default table is the canonical reference model: deviation penalties
/// for pressure (250 atm, weight 0.1), temperature (425 °C, 0.15), flow rate
/// (15500 m³/h, 0.15), and cooling (10 °C over a 100 °C span, 0.15), and a
/// signed slope for purge (3 % over the 20 % range, 0.15).
#[derive(Debug, Clone, Copy)]
pub struct EfficiencyCurves {
    pub pressure: DeviationCurve,
    pub temperature: DeviationCurve,
    pub flow_rate: DeviationCurve,
    pub purge: SlopeCurve,
    pub cooling: DeviationCurve,
}

impl Default for EfficiencyCurves {
    fn default() -> Self {
        Self {
            pressure: DeviationCurve {
                optimal: 250.0,
                scale: 250.0,
                weight: 0.1,
            },
            temperature: DeviationCurve {
                optimal: 425.0,
                scale: 425.0,
                weight: 0.15,
            },
            flow_rate: DeviationCurve {
                optimal: 15_500.0,
                scale: 15_500.0,
                weight: 0.15,
            },
            purge: SlopeCurve {
                optimal: 3.0,
                span: 20.0,
                weight: 0.15,
            },
            cooling: DeviationCurve {
                optimal: 10.0,
                scale: 100.0,
                weight: 0.15,
            },
        }
    }
}

/// Economic effect of one catalyst grade.
#[derive(Debug, Clone, Copy)]
pub struct CatalystEffect {
    /// Multiplier applied to both efficiency and market price.
    pub multiplier: f64,

    /// Surcharge added to the fixed cost, in euros.
    pub surcharge: f64,
}

/// Catalyst effects per grade.
#[derive(Debug, Clone, Copy)]
pub struct CatalystEffects {
    pub normal: CatalystEffect,
    pub improved: CatalystEffect,
    pub excellent: CatalystEffect,
}

impl CatalystEffects {
    /// Returns the effect for a grade.
    #[must_use]
    pub fn for_grade(&self, grade: CatalystGrade) -> CatalystEffect {
        match grade {
            CatalystGrade::Normal => self.normal,
            CatalystGrade::Improved => self.improved,
            CatalystGrade::Excellent => self.excellent,
        }
    }
}

impl Default for CatalystEffects {
    fn default() -> Self {
        Self {
            normal: CatalystEffect {
                multiplier: 1.0,
                surcharge: 0.0,
            },
            improved: CatalystEffect {
                multiplier: 1.03,
                surcharge: 20_000.0,
            },
            excellent: CatalystEffect {
                multiplier: 1.06,
                surcharge: 30_000.0,
            },
        }
    }
}

/// Economics constants.
#[derive(Debug, Clone, Copy)]
pub struct EconomicsConfig {
    /// Production at efficiency 1.0, in tons.
    pub base_yield_capacity: f64,

    /// Variable cost per produced ton, in euros.
    pub variable_cost_per_ton: f64,

    /// Fixed cost before the catalyst surcharge, in euros.
    pub base_fixed_cost: f64,

    /// Market price per ton before the catalyst multiplier, in euros.
    pub market_price_per_ton: f64,
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        Self {
            base_yield_capacity: 1_400.0,
            variable_cost_per_ton: 160.0,
            base_fixed_cost: 50_000.0,
            market_price_per_ton: 210.0,
        }
    }
}

/// Closed bound intervals for the five continuous parameters.
///
/// Values are accepted inclusively at both ends and rejected outside; the
/// model never clamps.
#[derive(Debug, Clone, Copy)]
pub struct ParameterBounds {
    pub pressure: Interval<Pressure>,
    pub temperature: Interval<ThermodynamicTemperature>,
    pub flow_rate: Interval<VolumeRate>,
    pub purge: Interval<Ratio>,
    pub cooling: Interval<ThermodynamicTemperature>,
}

impl ParameterBounds {
    /// Bound endpoints for a field, in its conventional display unit.
    pub(super) fn raw_span(&self, field: ParameterField) -> (f64, f64) {
        match field {
            ParameterField::Pressure => (
                self.pressure.min().get::<atmosphere>(),
                self.pressure.max().get::<atmosphere>(),
            ),
            ParameterField::Temperature => (
                self.temperature.min().get::<degree_celsius>(),
                self.temperature.max().get::<degree_celsius>(),
            ),
            ParameterField::FlowRate => (
                self.flow_rate.min().get::<cubic_meter_per_hour>(),
                self.flow_rate.max().get::<cubic_meter_per_hour>(),
            ),
            ParameterField::Purge => (
                self.purge.min().get::<percent>(),
                self.purge.max().get::<percent>(),
            ),
            ParameterField::Cooling => (
                self.cooling.min().get::<degree_celsius>(),
                self.cooling.max().get::<degree_celsius>(),
            ),
        }
    }
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            pressure: Interval::new(
                Pressure::new::<atmosphere>(100.0),
                Pressure::new::<atmosphere>(1_000.0),
            )
            .expect("canonical bounds are ordered"),
            temperature: Interval::new(
                ThermodynamicTemperature::new::<degree_celsius>(200.0),
                ThermodynamicTemperature::new::<degree_celsius>(600.0),
            )
            .expect("canonical bounds are ordered"),
            flow_rate: Interval::new(
                VolumeRate::new::<cubic_meter_per_hour>(10_600.0),
                VolumeRate::new::<cubic_meter_per_hour>(16_600.0),
            )
            .expect("canonical bounds are ordered"),
            purge: Interval::new(Ratio::new::<percent>(1.0), Ratio::new::<percent>(20.0))
                .expect("canonical bounds are ordered"),
            cooling: Interval::new(
                ThermodynamicTemperature::new::<degree_celsius>(-150.0),
                ThermodynamicTemperature::new::<degree_celsius>(90.0),
            )
            .expect("canonical bounds are ordered"),
        }
    }
}

/// Full plant model configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantConfig {
    /// Bound intervals enforced at validation.
    pub bounds: ParameterBounds,

    /// Per-parameter efficiency curves.
    pub curves: EfficiencyCurves,

    /// Per-grade catalyst effects.
    pub catalyst: CatalystEffects,

    /// Economics constants.
    pub economics: EconomicsConfig,
}
