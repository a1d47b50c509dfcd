//! Core vehicle types and logic.
//!
//! This module contains the pure domain model:
//! - Bounds and the shared clamp routine
//! - The temperature derating model
//! - The `ElectricVehicle` entity
//!
//! Nothing here performs I/O or returns errors.

mod efficiency;
mod limits;
mod vehicle;

pub use efficiency::{EfficiencyModel, TemperatureBand};
pub use limits::{
    normalize_name, Bounds, BATTERY_SIZE_KWH, DEFAULT_EFFICIENCY, STATE_OF_CHARGE, UNKNOWN_NAME,
};
pub use vehicle::{ElectricVehicle, VehicleProfile};
