//! Pricing configuration
//!
//! A [`PricingPolicy`] decides how much a promotion takes off an order and how the result is
//! rounded. Policies can be built in code or read from YAML:
//!
//! ```yaml
//! promo_discount: "15%"
//! rounding: half_even
//! ```

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::discounts::Rounding;

/// Discount taken off an order when its promo flag is set (15%).
pub const PROMO_DISCOUNT_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid percentage format or a value outside `0..=1`
    #[error("Invalid percentage: {0}")]
    InvalidPercentage(String),
}

/// Promotion pricing policy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PricingPolicy {
    promo_discount: Percentage,
    rounding: Rounding,
}

impl PricingPolicy {
    /// Creates a policy from a discount fraction (`0.15` for 15%) and a rounding mode.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPercentage`] if `discount` is outside `0..=1`.
    pub fn new(discount: Decimal, rounding: Rounding) -> Result<Self, ConfigError> {
        if discount < Decimal::ZERO || discount > Decimal::ONE {
            return Err(ConfigError::InvalidPercentage(discount.to_string()));
        }

        Ok(Self {
            promo_discount: Percentage::from(discount),
            rounding,
        })
    }

    /// Reads a policy from YAML text.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Yaml`]: the text is not a valid policy document.
    /// - [`ConfigError::InvalidPercentage`]: the discount cannot be parsed or is out of range.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let fixture: PricingPolicyFixture = serde_norway::from_str(yaml)?;

        let discount = parse_discount(&fixture.promo_discount)?;
        let policy = Self::new(discount, fixture.rounding)?;

        debug!(%discount, rounding = ?policy.rounding, "loaded pricing policy");

        Ok(policy)
    }

    /// Returns the promotional discount
    pub fn promo_discount(&self) -> &Percentage {
        &self.promo_discount
    }

    /// Returns the rounding mode applied to discounted totals
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            promo_discount: Percentage::from(PROMO_DISCOUNT_RATE),
            rounding: Rounding::default(),
        }
    }
}

/// Pricing policy as written in YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PricingPolicyFixture {
    /// Discount as a percentage ("15%") or a fraction ("0.15")
    promo_discount: String,

    #[serde(default)]
    rounding: Rounding,
}

/// Parse a discount string (e.g., "15%" or "0.15") into a fraction.
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a decimal.
pub fn parse_discount(s: &str) -> Result<Decimal, ConfigError> {
    let trimmed = s.trim();

    let (number, scale) = match trimmed.strip_suffix('%') {
        Some(percent_str) => (percent_str.trim(), Decimal::ONE_HUNDRED),
        None => (trimmed, Decimal::ONE),
    };

    let value = number
        .parse::<Decimal>()
        .map_err(|_err| ConfigError::InvalidPercentage(s.to_string()))?;

    value
        .checked_div(scale)
        .ok_or_else(|| ConfigError::InvalidPercentage(s.to_string()))
}
