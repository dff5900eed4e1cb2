//! Session bookkeeping for repeated scenario evaluations.

/// An in-memory record of profit outcomes across a session.
///
/// Interactive callers typically evaluate many scenarios in a row and want a
/// running summary of how the outcomes spread. The ledger keeps the recorded
/// profits for the lifetime of the value only; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct ProfitLedger {
    profits: Vec<f64>,
}

impl ProfitLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a profit outcome, in euros.
    pub fn record(&mut self, profit: f64) {
        self.profits.push(profit);
    }

    /// Returns the number of recorded outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profits.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profits.is_empty()
    }

    /// Returns the smallest recorded profit, or `None` if the ledger is empty.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.profits.iter().copied().reduce(f64::min)
    }

    /// Returns the largest recorded profit, or `None` if the ledger is empty.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.profits.iter().copied().reduce(f64::max)
    }

    /// Returns the mean recorded profit, or `None` if the ledger is empty.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.profits.is_empty() {
            return None;
        }
        let count = self.profits.len() as f64;
        Some(self.profits.iter().sum::<f64>() / count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn empty_ledger_has_no_summary() {
        let ledger = ProfitLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.min(), None);
        assert_eq!(ledger.max(), None);
        assert_eq!(ledger.mean(), None);
    }

    #[test]
    fn summary_tracks_recorded_profits() {
        let mut ledger = ProfitLedger::new();
        ledger.record(11_184.6);
        ledger.record(-3_000.0);
        ledger.record(20_000.0);

        assert_eq!(ledger.len(), 3);
        assert_relative_eq!(ledger.min().unwrap(), -3_000.0);
        assert_relative_eq!(ledger.max().unwrap(), 20_000.0);
        assert_relative_eq!(ledger.mean().unwrap(), 9_394.866_666_666_667, epsilon = 1e-9);
    }
}
