//! Build errors for the vehicle builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a vehicle.
///
/// Missing inputs and unusable efficiency models are errors; out-of-range
/// vehicle values are clamped.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Battery size not specified. Call .battery_size(kwh) before .build()")]
    MissingBatterySize,

    #[error("State of charge not specified. Call .state_of_charge(fraction) before .build()")]
    MissingStateOfCharge,

    #[error("Default efficiency not specified. Call .default_efficiency(miles_per_kwh) before .build()")]
    MissingDefaultEfficiency,

    #[error("Efficiency model rejected: {0}")]
    InvalidModel(#[from] ConfigError),
}
