//! Cycle defaults configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::user::{DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH};

/// Lengths applied when a registration leaves them out
#[derive(Debug, Clone, Deserialize)]
pub struct CycleConfig {
    #[serde(default = "default_cycle_length")]
    pub default_cycle_length: u32,

    #[serde(default = "default_period_length")]
    pub default_period_length: u32,
}

impl CycleConfig {
    /// Validate cycle defaults
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_cycle_length == 0 {
            return Err(ValidationError::InvalidCycleLength);
        }
        if self.default_period_length == 0
            || self.default_period_length >= self.default_cycle_length
        {
            return Err(ValidationError::InvalidPeriodLength);
        }
        Ok(())
    }
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            default_cycle_length: default_cycle_length(),
            default_period_length: default_period_length(),
        }
    }
}

fn default_cycle_length() -> u32 {
    DEFAULT_CYCLE_LENGTH
}

fn default_period_length() -> u32 {
    DEFAULT_PERIOD_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_defaults() {
        let config = CycleConfig::default();
        assert_eq!(config.default_cycle_length, 28);
        assert_eq!(config.default_period_length, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_period_must_be_shorter_than_cycle() {
        let config = CycleConfig {
            default_cycle_length: 5,
            default_period_length: 5,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPeriodLength)
        ));
    }

    #[test]
    fn test_zero_cycle_rejected() {
        let config = CycleConfig {
            default_cycle_length: 0,
            default_period_length: 5,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCycleLength)
        ));
    }
}
