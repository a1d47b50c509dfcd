//! Temperature-based efficiency derating.
//!
//! A vehicle's nominal efficiency holds inside a comfortable temperature
//! band. Above the band a flat penalty applies; below it the penalty grows
//! linearly per degree up to a cap.

use serde::{Deserialize, Serialize};

/// Where an ambient temperature falls relative to the comfort band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TemperatureBand {
    /// Below the band, by `degrees_below` degrees Fahrenheit.
    Cold { degrees_below: f64 },
    /// Inside the band, edges included.
    Comfortable,
    /// Above the band.
    Hot,
}

/// Parameters of the derating rule.
///
/// The default reproduces the standard table:
///
/// | Temperature (°F) | Efficiency |
/// |---|---|
/// | `65.0 ..= 77.0` | nominal |
/// | above `77.0` | 85% of nominal |
/// | below `65.0` | 1% less per degree, at most 50% less |
///
/// Deserializing fills missing fields from the default, so a configuration
/// only needs to name what it overrides.
///
/// # Example
///
/// ```rust
/// use ev_range::core::{EfficiencyModel, TemperatureBand};
///
/// let model = EfficiencyModel::default();
///
/// assert_eq!(model.classify(70.0), Some(TemperatureBand::Comfortable));
/// assert_eq!(model.classify(80.0), Some(TemperatureBand::Hot));
/// assert_eq!(model.derate(3.0, 0.0), Some(1.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EfficiencyModel {
    /// Lower edge of the comfort band (°F, inclusive).
    pub comfort_min_f: f64,
    /// Upper edge of the comfort band (°F, inclusive).
    pub comfort_max_f: f64,
    /// Multiplier applied above the comfort band.
    pub hot_factor: f64,
    /// Fractional reduction per degree below the comfort band.
    pub cold_reduction_per_degree: f64,
    /// Cap on the cold-side reduction.
    pub max_cold_reduction: f64,
}

impl Default for EfficiencyModel {
    fn default() -> Self {
        Self {
            comfort_min_f: 65.0,
            comfort_max_f: 77.0,
            hot_factor: 0.85,
            cold_reduction_per_degree: 0.01,
            max_cold_reduction: 0.50,
        }
    }
}

impl EfficiencyModel {
    /// Place a temperature relative to the comfort band.
    ///
    /// Returns `None` for NaN, which belongs to no band.
    pub fn classify(&self, temp_f: f64) -> Option<TemperatureBand> {
        if temp_f.is_nan() {
            None
        } else if temp_f > self.comfort_max_f {
            Some(TemperatureBand::Hot)
        } else if temp_f < self.comfort_min_f {
            Some(TemperatureBand::Cold {
                degrees_below: self.comfort_min_f - temp_f,
            })
        } else {
            Some(TemperatureBand::Comfortable)
        }
    }

    /// Multiplier applied to nominal efficiency within `band`.
    pub fn factor(&self, band: TemperatureBand) -> f64 {
        match band {
            TemperatureBand::Comfortable => 1.0,
            TemperatureBand::Hot => self.hot_factor,
            TemperatureBand::Cold { degrees_below } => {
                let reduction =
                    (degrees_below * self.cold_reduction_per_degree).min(self.max_cold_reduction);
                1.0 - reduction
            }
        }
    }

    /// Efficiency at `temp_f` for a vehicle rated at `default_efficiency`.
    pub fn derate(&self, default_efficiency: f64, temp_f: f64) -> Option<f64> {
        self.classify(temp_f).map(|band| default_efficiency * self.factor(band))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn band_edges_are_comfortable() {
        let model = EfficiencyModel::default();

        assert_eq!(model.classify(65.0), Some(TemperatureBand::Comfortable));
        assert_eq!(model.classify(77.0), Some(TemperatureBand::Comfortable));
        assert_eq!(model.classify(77.0001), Some(TemperatureBand::Hot));
        assert!(matches!(
            model.classify(64.9999),
            Some(TemperatureBand::Cold { .. })
        ));
    }

    #[test]
    fn cold_band_reports_distance_below() {
        let model = EfficiencyModel::default();

        assert_eq!(
            model.classify(60.0),
            Some(TemperatureBand::Cold { degrees_below: 5.0 })
        );
    }

    #[test]
    fn nan_temperature_has_no_band() {
        let model = EfficiencyModel::default();

        assert_eq!(model.classify(f64::NAN), None);
        assert_eq!(model.derate(3.0, f64::NAN), None);
    }

    #[test]
    fn hot_side_applies_flat_penalty() {
        let model = EfficiencyModel::default();

        assert_close(model.derate(3.0, 80.0).unwrap(), 2.55);
        assert_close(model.derate(3.0, 120.0).unwrap(), 2.55);
    }

    #[test]
    fn cold_side_is_linear_per_degree() {
        let model = EfficiencyModel::default();

        assert_close(model.derate(3.0, 60.0).unwrap(), 2.85);
        assert_close(model.derate(3.0, 45.0).unwrap(), 2.4);
        assert_close(model.derate(3.0, 15.0).unwrap(), 1.5);
    }

    #[test]
    fn cold_reduction_is_capped() {
        let model = EfficiencyModel::default();

        assert_close(model.derate(3.0, 0.0).unwrap(), 1.5);
        assert_close(model.derate(3.0, -40.0).unwrap(), 1.5);
        assert_close(model.derate(3.0, f64::NEG_INFINITY).unwrap(), 1.5);
    }

    #[test]
    fn custom_model_moves_the_band() {
        let model = EfficiencyModel {
            comfort_min_f: 50.0,
            comfort_max_f: 90.0,
            hot_factor: 0.9,
            ..EfficiencyModel::default()
        };

        assert_eq!(model.factor(model.classify(60.0).unwrap()), 1.0);
        assert_close(model.derate(2.0, 95.0).unwrap(), 1.8);
        assert_close(model.derate(2.0, 40.0).unwrap(), 1.8);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let model: EfficiencyModel = serde_json::from_str(r#"{"hot_factor": 0.8}"#).unwrap();

        assert_eq!(model.hot_factor, 0.8);
        assert_eq!(model.comfort_min_f, 65.0);
        assert_eq!(model.max_cold_reduction, 0.5);
    }
}
