//! Value bounds for vehicle attributes.
//!
//! Every numeric attribute of an [`ElectricVehicle`](super::ElectricVehicle)
//! is normalized through one of the [`Bounds`] constants in this module, both
//! at construction and on mutation. Out-of-range input is clamped, never
//! rejected.

/// Name given to vehicles constructed without one.
pub const UNKNOWN_NAME: &str = "unknown EV";

/// Battery capacity in kilowatt-hours.
pub const BATTERY_SIZE_KWH: Bounds = Bounds::new(10.0, 150.0);

/// State of charge as a fraction of capacity.
pub const STATE_OF_CHARGE: Bounds = Bounds::new(0.15, 1.0);

/// Nominal efficiency in miles per kilowatt-hour.
pub const DEFAULT_EFFICIENCY: Bounds = Bounds::new(0.5, 4.5);

/// Inclusive interval used to normalize a numeric input.
///
/// # Example
///
/// ```rust
/// use ev_range::core::Bounds;
///
/// let bounds = Bounds::new(10.0, 150.0);
///
/// assert_eq!(bounds.clamp(5.0), 10.0);
/// assert_eq!(bounds.clamp(160.0), 150.0);
/// assert_eq!(bounds.clamp(42.0), 42.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    /// Create bounds from an inclusive `min..=max` pair. `min` must not
    /// exceed `max`.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn min(&self) -> f64 {
        self.min
    }

    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Constrain `value` to the interval.
    ///
    /// NaN normalizes to the lower bound so the result is always inside
    /// the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() || value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Check whether `value` already lies inside the interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Substitute [`UNKNOWN_NAME`] for an absent or empty name.
///
/// Whitespace-only names are kept verbatim.
pub fn normalize_name(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => UNKNOWN_NAME.to_string(),
    }
}
