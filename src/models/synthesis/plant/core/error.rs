use std::fmt;

use thiserror::Error;

/// Identifies one of the five continuous process parameters.
///
/// Also selects the knob varied by
/// [`Plant::given_profit`](super::Plant::given_profit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterField {
    /// Converter pressure, atm.
    Pressure,
    /// Converter temperature, °C.
    Temperature,
    /// Synthesis gas flow rate, m³/h.
    FlowRate,
    /// Purge fraction of the recycle loop, %.
    Purge,
    /// Condenser cooling temperature, °C.
    Cooling,
}

impl ParameterField {
    /// The conventional display unit for this field.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Pressure => "atm",
            Self::Temperature | Self::Cooling => "°C",
            Self::FlowRate => "m³/h",
            Self::Purge => "%",
        }
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pressure => "pressure",
            Self::Temperature => "temperature",
            Self::FlowRate => "flow rate",
            Self::Purge => "purge",
            Self::Cooling => "cooling",
        };
        f.write_str(name)
    }
}

/// Errors raised while validating caller-supplied inputs.
///
/// Efficiency and economics computation assume validated parameters and
/// cannot fail; this error is only produced at the input boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A bounded scalar fell outside its closed interval.
    #[error("{field} must lie between {min} and {max} {unit}, got {value}", unit = .field.unit())]
    OutOfRange {
        /// The violated field.
        field: ParameterField,
        /// The offending value, in the field's conventional unit.
        value: f64,
        /// Lower bound, inclusive, in the field's conventional unit.
        min: f64,
        /// Upper bound, inclusive, in the field's conventional unit.
        max: f64,
    },

    /// A catalyst grade label did not match any known grade.
    #[error("unrecognized catalyst grade: {0:?}")]
    UnknownCatalyst(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_field_bounds_and_unit() {
        let err = ParameterError::OutOfRange {
            field: ParameterField::Pressure,
            value: 1200.0,
            min: 100.0,
            max: 1000.0,
        };
        assert_eq!(
            err.to_string(),
            "pressure must lie between 100 and 1000 atm, got 1200"
        );
    }

    #[test]
    fn unknown_catalyst_message_quotes_the_label() {
        let err = ParameterError::UnknownCatalyst("platinum".to_string());
        assert_eq!(err.to_string(), "unrecognized catalyst grade: \"platinum\"");
    }
}
