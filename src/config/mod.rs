//! Loading and validating efficiency model configuration.
//!
//! Vehicle inputs are clamped rather than rejected, but a derating model
//! is configuration: a malformed one is reported to the caller.

use crate::core::EfficiencyModel;
use tracing::debug;

pub mod error;

pub use error::ConfigError;

/// Parse an efficiency model from JSON and validate it.
///
/// Fields absent from the document keep their default values.
///
/// # Example
///
/// ```rust
/// use ev_range::config::load_model_json;
///
/// let model = load_model_json(r#"{ "comfort_max_f": 80.0 }"#).unwrap();
/// assert_eq!(model.comfort_max_f, 80.0);
/// assert_eq!(model.comfort_min_f, 65.0);
///
/// assert!(load_model_json(r#"{ "hot_factor": 1.5 }"#).is_err());
/// ```
pub fn load_model_json(json: &str) -> Result<EfficiencyModel, ConfigError> {
    let model: EfficiencyModel = serde_json::from_str(json)?;
    model.validate()?;
    debug!(?model, "efficiency model loaded");
    Ok(model)
}

impl EfficiencyModel {
    /// Check that every parameter is usable by the derating rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("comfort_min_f", self.comfort_min_f),
            ("comfort_max_f", self.comfort_max_f),
            ("hot_factor", self.hot_factor),
            ("cold_reduction_per_degree", self.cold_reduction_per_degree),
            ("max_cold_reduction", self.max_cold_reduction),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(invalid(field, format!("must be finite, got {value}")));
            }
        }

        if self.comfort_min_f > self.comfort_max_f {
            return Err(invalid(
                "comfort_min_f",
                format!(
                    "must not exceed comfort_max_f ({} > {})",
                    self.comfort_min_f, self.comfort_max_f
                ),
            ));
        }
        if self.hot_factor <= 0.0 || self.hot_factor > 1.0 {
            return Err(invalid(
                "hot_factor",
                format!("must be in (0, 1], got {}", self.hot_factor),
            ));
        }
        if self.cold_reduction_per_degree < 0.0 {
            return Err(invalid(
                "cold_reduction_per_degree",
                format!("must not be negative, got {}", self.cold_reduction_per_degree),
            ));
        }
        if self.max_cold_reduction < 0.0 || self.max_cold_reduction >= 1.0 {
            return Err(invalid(
                "max_cold_reduction",
                format!("must be in [0, 1), got {}", self.max_cold_reduction),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
