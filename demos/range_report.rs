//! Range Report
//!
//! This example shows how ambient temperature changes a vehicle's range.
//!
//! Key concepts:
//! - Clamped construction (out-of-range input is normalized)
//! - Temperature-based efficiency derating
//! - Custom efficiency models loaded from JSON
//!
//! Run with: cargo run --example range_report

use ev_range::config::load_model_json;
use ev_range::ElectricVehicle;

fn main() {
    println!("=== EV Range Report ===\n");

    let mut fleet = vec![
        ElectricVehicle::new("Porsche Taycan", 120.0, 0.9, 3.0),
        ElectricVehicle::new("Nissan Leaf", 40.0, 0.6, 4.0),
        // Out-of-range values are clamped: 200 kWh -> 150, 1.3 SOC -> 1.0
        ElectricVehicle::new("", 200.0, 1.3, 2.5),
    ];

    for temp in [70.0, 85.0, 50.0, -10.0] {
        println!("At {temp:.0}°F:");
        for ev in &mut fleet {
            ev.update_efficiency(temp);
            println!("  {ev}");
        }
        println!();
    }

    let mild_winter = load_model_json(r#"{ "max_cold_reduction": 0.3 }"#)
        .expect("demo model is valid");
    let mut ev = ElectricVehicle::builder()
        .name("Porsche Taycan (mild winter model)")
        .battery_size(120.0)
        .state_of_charge(0.9)
        .default_efficiency(3.0)
        .efficiency_model(mild_winter)
        .build()
        .expect("all required fields set");

    ev.update_efficiency(-10.0);
    println!("Custom model at -10°F:");
    println!("  {ev}");

    println!("\n=== Example Complete ===");
}
