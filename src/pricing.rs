//! Pricing

use thiserror::Error;

use crate::positions::{Position, PositionError, Priced};

/// Errors that can occur while calculating a total cost.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TotalCostError {
    /// A single position could not be priced.
    #[error(transparent)]
    Position(#[from] PositionError),

    /// The running total does not fit in minor units.
    #[error("total cost overflowed")]
    Overflow,
}

/// Calculates the total cost of a list of positions in minor units.
///
/// An empty list costs nothing.
///
/// # Errors
///
/// - [`TotalCostError::Position`]: a position's own cost overflowed.
/// - [`TotalCostError::Overflow`]: the sum overflowed.
pub fn total_cost(positions: &[Position<'_>]) -> Result<i64, TotalCostError> {
    positions.iter().try_fold(0i64, |acc, position| {
        acc.checked_add(position.cost()?)
            .ok_or(TotalCostError::Overflow)
    })
}
