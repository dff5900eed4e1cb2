//! Closed intervals for runtime-configured bounds.
//!
//! Unlike the marker types in [`constraint`](crate::support::constraint),
//! which encode fixed invariants at the type level, an [`Interval`] carries
//! its bounds as data. Models use intervals for bound tables that are
//! configuration, not physics.

use std::cmp::Ordering;

use thiserror::Error;

/// An error returned when constructing an ill-formed [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// The lower bound exceeds the upper bound.
    #[error("interval bounds are reversed")]
    Reversed,
    /// The bounds are not comparable (e.g. a bound is NaN).
    #[error("interval bounds are not comparable")]
    Unordered,
}

/// A closed interval `[min, max]`, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Copy> Interval<T> {
    /// Constructs a closed interval from ordered bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `min > max` or the bounds are not comparable.
    pub fn new(min: T, max: T) -> Result<Self, IntervalError> {
        match min.partial_cmp(&max) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Self { min, max }),
            Some(Ordering::Greater) => Err(IntervalError::Reversed),
            None => Err(IntervalError::Unordered),
        }
    }

    /// Returns the lower bound.
    pub fn min(&self) -> T {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> T {
        self.max
    }

    /// Returns `true` if the value lies within the interval, inclusive.
    ///
    /// An unordered value (e.g. NaN) is never contained.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Pressure, pressure::atmosphere};

    #[test]
    fn bounds_are_inclusive() {
        let interval = Interval::new(100.0, 1000.0).unwrap();
        assert!(interval.contains(100.0));
        assert!(interval.contains(1000.0));
        assert!(interval.contains(250.0));
        assert!(!interval.contains(99.0));
        assert!(!interval.contains(1001.0));
        assert!(!interval.contains(f64::NAN));
    }

    #[test]
    fn degenerate_interval_is_allowed() {
        let interval = Interval::new(5.0, 5.0).unwrap();
        assert!(interval.contains(5.0));
        assert!(!interval.contains(5.1));
    }

    #[test]
    fn rejects_ill_formed_bounds() {
        assert_eq!(Interval::new(2.0, 1.0), Err(IntervalError::Reversed));
        assert_eq!(Interval::new(f64::NAN, 1.0), Err(IntervalError::Unordered));
    }

    #[test]
    fn quantities() {
        let interval = Interval::new(
            Pressure::new::<atmosphere>(100.0),
            Pressure::new::<atmosphere>(1000.0),
        )
        .unwrap();
        assert!(interval.contains(Pressure::new::<atmosphere>(250.0)));
        assert!(!interval.contains(Pressure::new::<atmosphere>(1200.0)));
    }
}
