//! The electric vehicle entity.
//!
//! An [`ElectricVehicle`] holds one vehicle's energy profile. Construction
//! and mutation normalize their inputs through the shared bounds in
//! [`limits`](super::limits); no operation on a vehicle can fail.

use super::efficiency::EfficiencyModel;
use super::limits::{self, Bounds, BATTERY_SIZE_KWH, DEFAULT_EFFICIENCY, STATE_OF_CHARGE};
use crate::builder::ElectricVehicleBuilder;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};

/// One vehicle's current energy profile.
///
/// Battery size, nominal efficiency and name are fixed at construction.
/// State of charge changes through [`set_state_of_charge`], current
/// efficiency through [`update_efficiency`].
///
/// # Example
///
/// ```rust
/// use ev_range::ElectricVehicle;
///
/// let mut ev = ElectricVehicle::new("Porsche Taycan", 120.0, 0.9, 3.0);
/// assert_eq!(ev.to_string(), "Porsche Taycan SOC: 90.0% Range (miles): 324.0");
///
/// // Out-of-range input is clamped, not rejected.
/// ev.set_state_of_charge(0.05);
/// assert_eq!(ev.state_of_charge(), 0.15);
///
/// ev.update_efficiency(0.0);
/// assert_eq!(ev.current_efficiency(), 1.5);
/// ```
///
/// [`set_state_of_charge`]: ElectricVehicle::set_state_of_charge
/// [`update_efficiency`]: ElectricVehicle::update_efficiency
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "VehicleProfile", into = "VehicleProfile")]
pub struct ElectricVehicle {
    name: String,
    battery_size: f64,
    state_of_charge: f64,
    default_efficiency: f64,
    current_efficiency: f64,
    model: EfficiencyModel,
}

impl ElectricVehicle {
    /// Create a vehicle, clamping every numeric input to its bounds.
    ///
    /// An empty `name` is replaced with `"unknown EV"`.
    pub fn new(
        name: impl Into<String>,
        battery_size: f64,
        state_of_charge: f64,
        default_efficiency: f64,
    ) -> Self {
        let name = name.into();
        Self::from_parts(
            Some(&name),
            battery_size,
            state_of_charge,
            default_efficiency,
            EfficiencyModel::default(),
        )
    }

    /// Create a vehicle without a name; it is called `"unknown EV"`.
    pub fn unnamed(battery_size: f64, state_of_charge: f64, default_efficiency: f64) -> Self {
        Self::from_parts(
            None,
            battery_size,
            state_of_charge,
            default_efficiency,
            EfficiencyModel::default(),
        )
    }

    /// Start a builder for a vehicle with a custom efficiency model.
    pub fn builder() -> ElectricVehicleBuilder {
        ElectricVehicleBuilder::new()
    }

    pub(crate) fn from_parts(
        name: Option<&str>,
        battery_size: f64,
        state_of_charge: f64,
        default_efficiency: f64,
        model: EfficiencyModel,
    ) -> Self {
        let name = limits::normalize_name(name);
        let default_efficiency =
            clamp_input(DEFAULT_EFFICIENCY, default_efficiency, "default_efficiency");

        Self {
            battery_size: clamp_input(BATTERY_SIZE_KWH, battery_size, "battery_size"),
            state_of_charge: clamp_input(STATE_OF_CHARGE, state_of_charge, "state_of_charge"),
            default_efficiency,
            current_efficiency: default_efficiency,
            model,
            name,
        }
    }

    /// Miles available on the current charge at the current efficiency.
    pub fn range(&self) -> f64 {
        self.current_efficiency * self.state_of_charge * self.battery_size
    }

    /// Recompute current efficiency for an ambient temperature in °F.
    ///
    /// A NaN temperature leaves the current efficiency unchanged.
    pub fn update_efficiency(&mut self, current_temp: f64) {
        match self.model.derate(self.default_efficiency, current_temp) {
            Some(efficiency) => {
                trace!(
                    vehicle = %self.name,
                    temp_f = current_temp,
                    efficiency,
                    "efficiency updated"
                );
                self.current_efficiency = efficiency;
            }
            None => warn!(
                vehicle = %self.name,
                "ignoring efficiency update for NaN temperature"
            ),
        }
    }

    /// Set the state of charge, clamped to `0.15..=1.0`.
    pub fn set_state_of_charge(&mut self, state_of_charge: f64) {
        self.state_of_charge = clamp_input(STATE_OF_CHARGE, state_of_charge, "state_of_charge");
    }

    /// Vehicle name, `"unknown EV"` if none was given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Battery capacity in kWh.
    pub fn battery_size(&self) -> f64 {
        self.battery_size
    }

    /// State of charge as a fraction of capacity.
    pub fn state_of_charge(&self) -> f64 {
        self.state_of_charge
    }

    /// Nominal efficiency in miles per kWh.
    pub fn default_efficiency(&self) -> f64 {
        self.default_efficiency
    }

    /// Temperature-adjusted efficiency in miles per kWh.
    pub fn current_efficiency(&self) -> f64 {
        self.current_efficiency
    }

    /// Derating model applied by [`update_efficiency`](Self::update_efficiency).
    pub fn efficiency_model(&self) -> &EfficiencyModel {
        &self.model
    }
}

impl fmt::Display for ElectricVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} SOC: {:.1}% Range (miles): {:.1}",
            self.name,
            OneDecimal(self.state_of_charge * 100.0),
            OneDecimal(self.range())
        )
    }
}

/// Renders a value with one fractional digit, rounding half away from zero
/// on its exact binary value.
struct OneDecimal(f64);

impl fmt::Display for OneDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Decimal::from_f64_retain(self.0) {
            Some(exact) => write!(
                f,
                "{:.1}",
                exact.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
            ),
            // NaN, infinite, or beyond Decimal's range
            None => write!(f, "{:.1}", self.0),
        }
    }
}

fn clamp_input(bounds: Bounds, value: f64, field: &'static str) -> f64 {
    let clamped = bounds.clamp(value);
    if clamped != value {
        debug!(field, requested = value, clamped, "input clamped");
    }
    clamped
}

/// Construction inputs of a vehicle, before normalization.
///
/// This is the serialized form of an [`ElectricVehicle`]. Deserializing a
/// vehicle goes through the same clamping as [`ElectricVehicle::new`], so
/// out-of-range values in a document are normalized on load. The
/// temperature-adjusted efficiency is not part of the profile; a restored
/// vehicle starts at its nominal efficiency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    #[serde(default)]
    pub name: Option<String>,
    pub battery_size: f64,
    pub state_of_charge: f64,
    pub default_efficiency: f64,
}

impl From<VehicleProfile> for ElectricVehicle {
    fn from(profile: VehicleProfile) -> Self {
        Self::from_parts(
            profile.name.as_deref(),
            profile.battery_size,
            profile.state_of_charge,
            profile.default_efficiency,
            EfficiencyModel::default(),
        )
    }
}

impl From<ElectricVehicle> for VehicleProfile {
    fn from(vehicle: ElectricVehicle) -> Self {
        Self {
            name: Some(vehicle.name),
            battery_size: vehicle.battery_size,
            state_of_charge: vehicle.state_of_charge,
            default_efficiency: vehicle.default_efficiency,
        }
    }
}
