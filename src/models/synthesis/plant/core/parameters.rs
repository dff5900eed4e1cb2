//! Validated process parameters.

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature, VolumeRate},
    pressure::atmosphere,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::interval::Interval;

use super::{CatalystGrade, ParameterBounds, ParameterError, ParameterField};

/// The operating point of the synthesis loop.
///
/// Every continuous field has been checked against its closed bound interval
/// at construction, so the efficiency and economics computations accept the
/// parameters without re-validating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessParameters {
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    flow_rate: VolumeRate,
    purge: Ratio,
    cooling: ThermodynamicTemperature,
    catalyst: CatalystGrade,
}

impl ProcessParameters {
    /// Constructs validated parameters from typed quantities.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::OutOfRange`] naming the first field that
    /// falls outside its bound interval. Values are never clamped.
    pub fn validated(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        flow_rate: VolumeRate,
        purge: Ratio,
        cooling: ThermodynamicTemperature,
        catalyst: CatalystGrade,
        bounds: &ParameterBounds,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            pressure: admit(ParameterField::Pressure, pressure, &bounds.pressure, |p| {
                p.get::<atmosphere>()
            })?,
            temperature: admit(
                ParameterField::Temperature,
                temperature,
                &bounds.temperature,
                |t| t.get::<degree_celsius>(),
            )?,
            flow_rate: admit(ParameterField::FlowRate, flow_rate, &bounds.flow_rate, |f| {
                f.get::<cubic_meter_per_hour>()
            })?,
            purge: admit(ParameterField::Purge, purge, &bounds.purge, |s| {
                s.get::<percent>()
            })?,
            cooling: admit(ParameterField::Cooling, cooling, &bounds.cooling, |c| {
                c.get::<degree_celsius>()
            })?,
            catalyst,
        })
    }

    /// Constructs validated parameters from the raw slider/entry-form
    /// contract: five scalars in conventional units plus a catalyst label.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::UnknownCatalyst`] for an unrecognized label,
    /// or [`ParameterError::OutOfRange`] for an out-of-bounds scalar.
    pub fn from_raw(
        pressure_atm: f64,
        temperature_celsius: f64,
        flow_cubic_meters_per_hour: f64,
        purge_percent: f64,
        cooling_celsius: f64,
        catalyst_label: &str,
        bounds: &ParameterBounds,
    ) -> Result<Self, ParameterError> {
        Self::validated(
            Pressure::new::<atmosphere>(pressure_atm),
            ThermodynamicTemperature::new::<degree_celsius>(temperature_celsius),
            VolumeRate::new::<cubic_meter_per_hour>(flow_cubic_meters_per_hour),
            Ratio::new::<percent>(purge_percent),
            ThermodynamicTemperature::new::<degree_celsius>(cooling_celsius),
            catalyst_label.parse()?,
            bounds,
        )
    }

    /// Constructs parameters without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the values lie within the bound table in use;
    /// the computations stay total for any input, but projections for
    /// out-of-bounds values carry no meaning.
    #[must_use]
    pub fn new_unchecked(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        flow_rate: VolumeRate,
        purge: Ratio,
        cooling: ThermodynamicTemperature,
        catalyst: CatalystGrade,
    ) -> Self {
        Self {
            pressure,
            temperature,
            flow_rate,
            purge,
            cooling,
            catalyst,
        }
    }

    /// Returns the converter pressure.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Returns the converter temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns the synthesis gas flow rate.
    #[must_use]
    pub fn flow_rate(&self) -> VolumeRate {
        self.flow_rate
    }

    /// Returns the purge fraction of the recycle loop.
    #[must_use]
    pub fn purge(&self) -> Ratio {
        self.purge
    }

    /// Returns the condenser cooling temperature.
    #[must_use]
    pub fn cooling(&self) -> ThermodynamicTemperature {
        self.cooling
    }

    /// Returns the catalyst grade.
    #[must_use]
    pub fn catalyst(&self) -> CatalystGrade {
        self.catalyst
    }

    /// Returns a copy with one continuous field replaced by a value given in
    /// its conventional unit, bypassing bound checks.
    pub(super) fn with_raw_value(mut self, field: ParameterField, value: f64) -> Self {
        match field {
            ParameterField::Pressure => self.pressure = Pressure::new::<atmosphere>(value),
            ParameterField::Temperature => {
                self.temperature = ThermodynamicTemperature::new::<degree_celsius>(value);
            }
            ParameterField::FlowRate => {
                self.flow_rate = VolumeRate::new::<cubic_meter_per_hour>(value);
            }
            ParameterField::Purge => self.purge = Ratio::new::<percent>(value),
            ParameterField::Cooling => {
                self.cooling = ThermodynamicTemperature::new::<degree_celsius>(value);
            }
        }
        self
    }
}

/// Admits a quantity into the parameter set if its bound interval contains it.
fn admit<T: PartialOrd + Copy>(
    field: ParameterField,
    value: T,
    allowed: &Interval<T>,
    in_unit: impl Fn(T) -> f64,
) -> Result<T, ParameterError> {
    if allowed.contains(value) {
        Ok(value)
    } else {
        Err(ParameterError::OutOfRange {
            field,
            value: in_unit(value),
            min: in_unit(allowed.min()),
            max: in_unit(allowed.max()),
        })
    }
}
