//! Walks a few operating scenarios and prints a compact economics report.
//!
//! Run with `cargo run --example plant_report`.

use ammonia_plant_models::models::synthesis::plant::{
    GivenProfitConfig, ParameterField, Plant, ProcessParameters,
};
use ammonia_plant_models::support::ledger::ProfitLedger;
use uom::si::{mass::ton, ratio::ratio, volume_rate::cubic_meter_per_hour};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let plant = Plant::default();
    let bounds = plant.config().bounds;
    let mut ledger = ProfitLedger::new();

    let scenarios = [
        ("reference", 250.0, 425.0, 15_500.0, 3.0, 10.0, "improved"),
        ("hot and lean", 250.0, 500.0, 12_000.0, 8.0, 25.0, "normal"),
        ("premium catalyst", 300.0, 425.0, 15_500.0, 3.0, 10.0, "excellent"),
    ];

    for (name, pressure, temperature, flow, purge, cooling, catalyst) in scenarios {
        let parameters = ProcessParameters::from_raw(
            pressure,
            temperature,
            flow,
            purge,
            cooling,
            catalyst,
            &bounds,
        )?;
        let efficiency = plant.efficiency(&parameters);
        let economics = plant.economics(&parameters);
        ledger.record(economics.profit);

        println!("{name}:");
        println!("  efficiency  {:.4}", efficiency.get::<ratio>());
        println!("  production  {:.1} t", economics.production.get::<ton>());
        println!("  revenue     {:.2} k€", economics.revenue / 1_000.0);
        println!("  total cost  {:.2} k€", economics.total_cost / 1_000.0);
        println!("  profit      {:.2} k€", economics.profit / 1_000.0);
    }

    if let (Some(min), Some(mean), Some(max)) = (ledger.min(), ledger.mean(), ledger.max()) {
        println!(
            "session profit: min {:.2} k€, mean {:.2} k€, max {:.2} k€ over {} scenarios",
            min / 1_000.0,
            mean / 1_000.0,
            max / 1_000.0,
            ledger.len()
        );
    }

    let base = ProcessParameters::from_raw(250.0, 425.0, 15_500.0, 3.0, 10.0, "normal", &bounds)?;
    let point = plant.given_profit(
        &base,
        ParameterField::FlowRate,
        18_000.0,
        GivenProfitConfig::default(),
    )?;
    println!(
        "flow rate for an 18 k€ profit: {:.0} m³/h",
        point.parameters.flow_rate().get::<cubic_meter_per_hour>()
    );

    Ok(())
}
