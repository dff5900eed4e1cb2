use std::{fmt, str::FromStr};

use super::ParameterError;

/// The catalyst grade loaded in the converter.
///
/// The grade scales efficiency and market price and adds a fixed-cost
/// surcharge; the per-grade numbers live in
/// [`CatalystEffects`](super::CatalystEffects).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalystGrade {
    /// Baseline iron catalyst.
    #[default]
    Normal,
    /// Promoted catalyst with a modest activity gain.
    Improved,
    /// Premium catalyst with the largest activity gain.
    Excellent,
}

impl CatalystGrade {
    fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Improved => "improved",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for CatalystGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a catalyst grade label, ASCII-case-insensitively.
///
/// Unrecognized labels are rejected rather than silently mapped to
/// [`CatalystGrade::Normal`], so a typo in a caller-supplied label surfaces
/// as an error instead of an unexpectedly pessimistic projection.
impl FromStr for CatalystGrade {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        [Self::Normal, Self::Improved, Self::Excellent]
            .into_iter()
            .find(|grade| label.eq_ignore_ascii_case(grade.label()))
            .ok_or_else(|| ParameterError::UnknownCatalyst(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("normal".parse::<CatalystGrade>(), Ok(CatalystGrade::Normal));
        assert_eq!(
            "Improved".parse::<CatalystGrade>(),
            Ok(CatalystGrade::Improved)
        );
        assert_eq!(
            " EXCELLENT ".parse::<CatalystGrade>(),
            Ok(CatalystGrade::Excellent)
        );
    }

    #[test]
    fn rejects_unknown_labels() {
        assert_eq!(
            "platinum".parse::<CatalystGrade>(),
            Err(ParameterError::UnknownCatalyst("platinum".to_string()))
        );
    }

    #[test]
    fn display_round_trips() {
        for grade in [
            CatalystGrade::Normal,
            CatalystGrade::Improved,
            CatalystGrade::Excellent,
        ] {
            assert_eq!(grade.to_string().parse::<CatalystGrade>(), Ok(grade));
        }
    }
}
