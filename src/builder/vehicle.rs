//! Builder for constructing vehicles.

use crate::builder::error::BuildError;
use crate::core::{EfficiencyModel, ElectricVehicle};

/// Builder for constructing vehicles with a fluent API.
///
/// Battery size, state of charge and nominal efficiency are required.
/// Name and efficiency model are optional. Supplied values are clamped
/// exactly as [`ElectricVehicle::new`] clamps them; a supplied model must
/// pass [`EfficiencyModel::validate`].
///
/// # Example
///
/// ```rust
/// use ev_range::{EfficiencyModel, ElectricVehicle};
///
/// let mut ev = ElectricVehicle::builder()
///     .name("Model 3")
///     .battery_size(75.0)
///     .state_of_charge(0.8)
///     .default_efficiency(4.0)
///     .efficiency_model(EfficiencyModel {
///         hot_factor: 0.9,
///         ..EfficiencyModel::default()
///     })
///     .build()
///     .unwrap();
///
/// ev.update_efficiency(95.0);
/// assert_eq!(ev.current_efficiency(), 3.6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ElectricVehicleBuilder {
    name: Option<String>,
    battery_size: Option<f64>,
    state_of_charge: Option<f64>,
    default_efficiency: Option<f64>,
    model: Option<EfficiencyModel>,
}

impl ElectricVehicleBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name (optional, defaults to `"unknown EV"`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the battery capacity in kWh (required).
    pub fn battery_size(mut self, kwh: f64) -> Self {
        self.battery_size = Some(kwh);
        self
    }

    /// Set the state of charge (required).
    pub fn state_of_charge(mut self, fraction: f64) -> Self {
        self.state_of_charge = Some(fraction);
        self
    }

    /// Set the nominal efficiency in miles per kWh (required).
    pub fn default_efficiency(mut self, miles_per_kwh: f64) -> Self {
        self.default_efficiency = Some(miles_per_kwh);
        self
    }

    /// Set the temperature derating model (optional).
    pub fn efficiency_model(mut self, model: EfficiencyModel) -> Self {
        self.model = Some(model);
        self
    }

    /// Build the vehicle.
    /// Returns an error if a required field is missing or the model is invalid.
    pub fn build(self) -> Result<ElectricVehicle, BuildError> {
        let battery_size = self.battery_size.ok_or(BuildError::MissingBatterySize)?;
        let state_of_charge = self
            .state_of_charge
            .ok_or(BuildError::MissingStateOfCharge)?;
        let default_efficiency = self
            .default_efficiency
            .ok_or(BuildError::MissingDefaultEfficiency)?;
        let model = self.model.unwrap_or_default();
        model.validate()?;

        Ok(ElectricVehicle::from_parts(
            self.name.as_deref(),
            battery_size,
            state_of_charge,
            default_efficiency,
            model,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::core::UNKNOWN_NAME;

    fn complete() -> ElectricVehicleBuilder {
        ElectricVehicleBuilder::new()
            .battery_size(120.0)
            .state_of_charge(0.9)
            .default_efficiency(3.0)
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = ElectricVehicleBuilder::new().build();

        assert!(matches!(result, Err(BuildError::MissingBatterySize)));
    }

    #[test]
    fn builder_reports_each_missing_field() {
        let no_charge = ElectricVehicleBuilder::new()
            .battery_size(120.0)
            .default_efficiency(3.0)
            .build();
        assert!(matches!(no_charge, Err(BuildError::MissingStateOfCharge)));

        let no_efficiency = ElectricVehicleBuilder::new()
            .battery_size(120.0)
            .state_of_charge(0.9)
            .build();
        assert!(matches!(
            no_efficiency,
            Err(BuildError::MissingDefaultEfficiency)
        ));
    }

    #[test]
    fn fluent_api_builds_vehicle() {
        let ev = complete().name("Porsche Taycan").build().unwrap();

        assert_eq!(ev, ElectricVehicle::new("Porsche Taycan", 120.0, 0.9, 3.0));
    }

    #[test]
    fn name_is_optional() {
        let ev = complete().build().unwrap();

        assert_eq!(ev.name(), UNKNOWN_NAME);
    }

    #[test]
    fn builder_clamps_instead_of_rejecting() {
        let ev = ElectricVehicleBuilder::new()
            .name("")
            .battery_size(5.0)
            .state_of_charge(1.1)
            .default_efficiency(0.3)
            .build()
            .unwrap();

        assert_eq!(ev.name(), UNKNOWN_NAME);
        assert_eq!(ev.battery_size(), 10.0);
        assert_eq!(ev.state_of_charge(), 1.0);
        assert_eq!(ev.current_efficiency(), 0.5);
    }

    #[test]
    fn custom_model_drives_updates() {
        let model = EfficiencyModel {
            max_cold_reduction: 0.2,
            ..EfficiencyModel::default()
        };
        let mut ev = complete().efficiency_model(model).build().unwrap();

        assert_eq!(ev.efficiency_model(), &model);

        ev.update_efficiency(0.0);
        assert!((ev.current_efficiency() - 2.4).abs() < 1e-9);
    }

    #[test]
    fn builder_rejects_invalid_model() {
        let result = complete()
            .efficiency_model(EfficiencyModel {
                hot_factor: 2.0,
                ..EfficiencyModel::default()
            })
            .build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidModel(ConfigError::Invalid {
                field: "hot_factor",
                ..
            }))
        ));
    }

    #[test]
    fn builder_rejects_nan_comfort_band() {
        let result = complete()
            .efficiency_model(EfficiencyModel {
                comfort_min_f: f64::NAN,
                ..EfficiencyModel::default()
            })
            .build();

        assert!(matches!(
            result,
            Err(BuildError::InvalidModel(ConfigError::Invalid {
                field: "comfort_min_f",
                ..
            }))
        ));
    }

    #[test]
    fn missing_fields_are_reported_before_the_model() {
        let result = ElectricVehicleBuilder::new()
            .efficiency_model(EfficiencyModel {
                hot_factor: 2.0,
                ..EfficiencyModel::default()
            })
            .build();

        assert!(matches!(result, Err(BuildError::MissingBatterySize)));
    }
}
