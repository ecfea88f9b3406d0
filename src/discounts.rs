//! Discounts
//!
//! Percentage arithmetic over minor units, shared by order totals and anything else that needs
//! to take a cut off an integer amount.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::Deserialize;
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,
}

/// How fractional minor units are resolved.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Round to nearest, ties to even (`212.5 -> 212`, `213.5 -> 214`).
    #[default]
    HalfEven,

    /// Round to nearest, ties away from zero (`212.5 -> 213`).
    HalfUp,

    /// Drop the fraction (`435.8 -> 435`).
    Truncate,
}

impl From<Rounding> for RoundingStrategy {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
            Rounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Rounding::Truncate => RoundingStrategy::ToZero,
        }
    }
}

/// Take `percent` off a minor unit amount, i.e. `minor * (1 - percent)`.
///
/// The multiplication happens before rounding, so `512` with 15% off is `435.2 -> 435` rather
/// than `512 - round(76.8)`.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the calculation overflows.
pub fn apply_percentage_off(
    percent: &Percentage,
    minor: i64,
    rounding: Rounding,
) -> Result<i64, DiscountError> {
    // Multiplying by one is the only way to read a `Percentage` back as a `Decimal`.
    let factor = Decimal::ONE
        .checked_sub((*percent) * Decimal::ONE)
        .ok_or(DiscountError::PercentConversion)?;

    round_to_minor(Decimal::from(minor).checked_mul(factor), rounding)
}

fn round_to_minor(value: Option<Decimal>, rounding: Rounding) -> Result<i64, DiscountError> {
    value
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, rounding.into())
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}

#[cfg(test)]
mod tests {
    use decimal_percentage::Percentage;
    use testresult::TestResult;

    use super::*;

    fn fifteen_percent() -> Percentage {
        Percentage::from(Decimal::new(15, 2))
    }

    #[test]
    fn apply_percentage_off_result_out_of_range_returns_error() {
        // 200% off flips the sign, and -(i64::MIN) does not fit back into an i64.
        let double = Percentage::from(Decimal::from(2));

        assert_eq!(
            apply_percentage_off(&double, i64::MIN, Rounding::HalfEven),
            Err(DiscountError::PercentConversion)
        );
        assert_eq!(apply_percentage_off(&double, 40, Rounding::HalfEven), Ok(-40));
    }

    #[test]
    fn apply_percentage_off_full_discount_is_free() -> TestResult {
        let all = Percentage::from(Decimal::ONE);

        assert_eq!(apply_percentage_off(&all, i64::MAX, Rounding::HalfEven)?, 0);

        Ok(())
    }

    #[test]
    fn apply_percentage_off_multiplies_then_rounds() -> TestResult {
        assert_eq!(
            apply_percentage_off(&fifteen_percent(), 512, Rounding::HalfEven)?,
            435
        );
        assert_eq!(
            apply_percentage_off(&fifteen_percent(), 512, Rounding::Truncate)?,
            435
        );

        Ok(())
    }

    #[test]
    fn apply_percentage_off_resolves_ties_by_strategy() -> TestResult {
        // 250 * 0.85 = 212.5
        assert_eq!(
            apply_percentage_off(&fifteen_percent(), 250, Rounding::HalfEven)?,
            212
        );
        assert_eq!(
            apply_percentage_off(&fifteen_percent(), 250, Rounding::HalfUp)?,
            213
        );
        assert_eq!(
            apply_percentage_off(&fifteen_percent(), 250, Rounding::Truncate)?,
            212
        );

        Ok(())
    }

    #[test]
    fn apply_percentage_off_zero_percent_is_identity() -> TestResult {
        let none = Percentage::from(Decimal::ZERO);

        assert_eq!(apply_percentage_off(&none, 1024, Rounding::HalfEven)?, 1024);
        assert_eq!(apply_percentage_off(&none, 0, Rounding::HalfEven)?, 0);

        Ok(())
    }

    #[test]
    fn rounding_maps_to_decimal_strategy() {
        assert_eq!(
            RoundingStrategy::from(Rounding::HalfEven),
            RoundingStrategy::MidpointNearestEven
        );
        assert_eq!(
            RoundingStrategy::from(Rounding::HalfUp),
            RoundingStrategy::MidpointAwayFromZero
        );
        assert_eq!(
            RoundingStrategy::from(Rounding::Truncate),
            RoundingStrategy::ToZero
        );
    }
}
