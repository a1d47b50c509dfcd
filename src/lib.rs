//! ev_range: driving range of an electric vehicle
//!
//! Models one vehicle's energy state and computes how far it can drive as a
//! function of battery size, state of charge and ambient temperature.
//!
//! The crate follows an "always succeed, normalize silently" policy for
//! vehicle inputs: out-of-range numbers are clamped to their bounds and a
//! missing name becomes `"unknown EV"`. Only the builder (for missing
//! inputs) and the configuration loader (for unusable models) return errors.
//!
//! # Core Concepts
//!
//! - **ElectricVehicle**: the entity, with clamped construction and mutation
//! - **EfficiencyModel**: the temperature derating rule
//! - **Bounds**: the shared clamp routine behind every numeric input
//!
//! # Example
//!
//! ```rust
//! use ev_range::ElectricVehicle;
//!
//! let mut ev = ElectricVehicle::new("Porsche Taycan", 120.0, 0.9, 3.0);
//! assert_eq!(ev.range(), 3.0 * 0.9 * 120.0);
//!
//! ev.update_efficiency(80.0);
//! println!("{ev}");
//! ```

pub mod builder;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ElectricVehicleBuilder};
pub use config::ConfigError;
pub use core::{EfficiencyModel, ElectricVehicle, TemperatureBand, VehicleProfile};
