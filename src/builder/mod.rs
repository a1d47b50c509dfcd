//! Builder API for vehicle construction.
//!
//! [`ElectricVehicle::new`](crate::ElectricVehicle::new) covers the common
//! case. The builder adds an optional name and a custom efficiency model.

pub mod error;
pub mod vehicle;

pub use error::BuildError;
pub use vehicle::ElectricVehicleBuilder;
