//! Pricing rules configuration.
//!
//! Rules are loaded from environment variables with fallback to defaults.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `CHECKOUT_FREE_SHIPPING_THRESHOLD` | `50000` |
//! | `CHECKOUT_STANDARD_SHIPPING_COST` | `2500` |
//! | `CHECKOUT_DISCOUNT_PERCENT` | `0` |
//! | `CHECKOUT_ROUNDING` | `floor` |

use std::env;
use std::str::FromStr;

use checkout_core::{PricingRules, RoundingMode, ValidationError};
use serde::{Deserialize, Serialize};

pub const FREE_SHIPPING_THRESHOLD_VAR: &str = "CHECKOUT_FREE_SHIPPING_THRESHOLD";
pub const STANDARD_SHIPPING_COST_VAR: &str = "CHECKOUT_STANDARD_SHIPPING_COST";
pub const DISCOUNT_PERCENT_VAR: &str = "CHECKOUT_DISCOUNT_PERCENT";
pub const ROUNDING_VAR: &str = "CHECKOUT_ROUNDING";

/// Pricing configuration for the current process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Free shipping threshold, minor units
    pub free_shipping_threshold: i64,

    /// Shipping charged below the threshold, minor units
    pub standard_shipping_cost: i64,

    /// Discount campaign percentage (0-100)
    pub discount_percent: i64,

    /// Discount rounding mode
    pub rounding: RoundingMode,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            free_shipping_threshold: 50_000,
            standard_shipping_cost: 2_500,
            discount_percent: 0,
            rounding: RoundingMode::Floor,
        }
    }
}

impl PricingConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Missing keys take the default; present keys must parse and the
    /// resulting rule set must validate.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PricingConfig::default();

        let config = PricingConfig {
            free_shipping_threshold: parse_or(
                &lookup,
                FREE_SHIPPING_THRESHOLD_VAR,
                defaults.free_shipping_threshold,
            )?,
            standard_shipping_cost: parse_or(
                &lookup,
                STANDARD_SHIPPING_COST_VAR,
                defaults.standard_shipping_cost,
            )?,
            discount_percent: parse_or(&lookup, DISCOUNT_PERCENT_VAR, defaults.discount_percent)?,
            rounding: parse_or(&lookup, ROUNDING_VAR, defaults.rounding)?,
        };

        config.rules().validate()?;

        Ok(config)
    }

    /// The rule set handed to the calculator.
    pub fn rules(&self) -> PricingRules {
        PricingRules::new(
            self.free_shipping_threshold,
            self.standard_shipping_cost,
            self.discount_percent,
        )
        .with_rounding(self.rounding)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Pricing rules rejected: {0}")]
    Rules(#[from] ValidationError),
}
