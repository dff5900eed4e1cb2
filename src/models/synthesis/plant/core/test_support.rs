//! Shared helpers for core tests.

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature, VolumeRate},
    pressure::atmosphere,
    ratio::percent,
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_meter_per_hour,
};

use super::{CatalystGrade, ProcessParameters};

/// Parameters with every continuous field at its canonical optimum.
pub(super) fn optimum_parameters(catalyst: CatalystGrade) -> ProcessParameters {
    ProcessParameters::new_unchecked(
        Pressure::new::<atmosphere>(250.0),
        ThermodynamicTemperature::new::<degree_celsius>(425.0),
        VolumeRate::new::<cubic_meter_per_hour>(15_500.0),
        Ratio::new::<percent>(3.0),
        ThermodynamicTemperature::new::<degree_celsius>(10.0),
        catalyst,
    )
}
