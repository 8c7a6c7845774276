use std::fmt;

/// Errors returned when a [`SimulationConfig`](crate::config::SimulationConfig) or
/// [`Controls`](crate::config::Controls) value is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A value is outside of its inclusive range.
    OutOfRange {
        /// Name of the offending option.
        name: &'static str,
        /// Rejected value.
        value: f64,
        /// Smallest accepted value.
        min: f64,
        /// Largest accepted value.
        max: f64,
    },
    /// A value that must be strictly positive is not.
    NotPositive {
        /// Name of the offending option.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A value, or a quantity derived from configured values, overflows to infinity or is NaN.
    NotFinite {
        /// Name of the offending option or derived quantity.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The distance clamp has its lower bound above its upper bound.
    InvertedDistanceRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{} must be within [{}, {}], got {}", name, min, max, value),
            ConfigError::NotPositive { name, value } => {
                write!(f, "{} must be strictly positive, got {}", name, value)
            }
            ConfigError::NotFinite { name, value } => {
                write!(f, "{} must be finite, got {}", name, value)
            }
            ConfigError::InvertedDistanceRange { min, max } => write!(
                f,
                "Minimum distance ({}) is greater than maximum distance ({})",
                min, max
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
