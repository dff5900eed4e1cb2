//! Economics projection over validated parameters.

use uom::si::{f64::Mass, mass::ton, ratio::ratio};

use super::{PlantConfig, ProcessParameters, efficiency};

/// Projected production and economics for one operating point.
///
/// Produced fresh per call; all currency amounts are unscaled euros.
/// Display scaling (e.g. thousands) is the caller's choice.
#[derive(Debug, Clone, Copy)]
pub struct EconomicResult {
    /// Ammonia produced.
    pub production: Mass,

    /// Sales at the catalyst-adjusted market price, in euros.
    pub revenue: f64,

    /// Production-proportional cost, in euros.
    pub variable_cost: f64,

    /// Fixed cost including the catalyst surcharge, in euros.
    pub fixed_cost: f64,

    /// Fixed plus variable cost, in euros.
    pub total_cost: f64,

    /// Revenue minus total cost, in euros. May be negative.
    pub profit: f64,
}

/// Projects yield and economics from the efficiency score.
pub(super) fn project(parameters: &ProcessParameters, config: &PlantConfig) -> EconomicResult {
    let efficiency = efficiency::compute(parameters, config).get::<ratio>();
    let effect = config.catalyst.for_grade(parameters.catalyst());
    let economics = &config.economics;

    let production_tons = (economics.base_yield_capacity * efficiency).max(0.0);
    let variable_cost = production_tons * economics.variable_cost_per_ton;
    let fixed_cost = economics.base_fixed_cost + effect.surcharge;
    let total_cost = fixed_cost + variable_cost;
    let revenue = production_tons * economics.market_price_per_ton * effect.multiplier;

    EconomicResult {
        production: Mass::new::<ton>(production_tons),
        revenue,
        variable_cost,
        fixed_cost,
        total_cost,
        profit: revenue - total_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::mass::kilogram;

    use crate::models::synthesis::plant::core::{CatalystGrade, ParameterField, test_support};

    #[test]
    fn cost_and_profit_identities_hold_exactly() {
        let config = PlantConfig::default();
        for (pressure, purge, grade) in [
            (250.0, 3.0, CatalystGrade::Normal),
            (600.0, 12.0, CatalystGrade::Improved),
            (1_000.0, 20.0, CatalystGrade::Excellent),
        ] {
            let parameters = test_support::optimum_parameters(grade)
                .with_raw_value(ParameterField::Pressure, pressure)
                .with_raw_value(ParameterField::Purge, purge);
            let result = project(&parameters, &config);

            assert_eq!(result.profit, result.revenue - result.total_cost);
            assert_eq!(result.total_cost, result.fixed_cost + result.variable_cost);
        }
    }

    #[test]
    fn excellent_catalyst_raises_both_revenue_and_cost() {
        let config = PlantConfig::default();
        let normal = project(
            &test_support::optimum_parameters(CatalystGrade::Normal),
            &config,
        );
        let excellent = project(
            &test_support::optimum_parameters(CatalystGrade::Excellent),
            &config,
        );

        assert!(excellent.revenue > normal.revenue);
        assert!(excellent.total_cost > normal.total_cost);
        assert!(excellent.production.get::<kilogram>() > normal.production.get::<kilogram>());
    }

    #[test]
    fn dead_plant_still_pays_the_fixed_cost() {
        let config = PlantConfig::default();
        let parameters = test_support::optimum_parameters(CatalystGrade::Improved)
            .with_raw_value(ParameterField::Cooling, -10_000.0);
        let result = project(&parameters, &config);

        assert_relative_eq!(result.production.get::<ton>(), 0.0);
        assert_relative_eq!(result.revenue, 0.0);
        assert_relative_eq!(result.variable_cost, 0.0);
        assert_relative_eq!(result.total_cost, 70_000.0);
        assert_relative_eq!(result.profit, -70_000.0);
    }
}
