//! Positions
//!
//! A position pairs a borrowed [`Item`] with a multiplier and produces a cost in minor units.
//! The set of positions is closed: every position is either counted or weighted.
//!
//! `Position` has no constructor of its own. A position is built from one of its variants:
//!
//! ```
//! use tally::{items::Item, positions::{CountedPosition, Position, Priced}};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let item = Item::new(0, "Spoon", 25)?;
//! let position = Position::from(CountedPosition::new(&item, 2)?);
//!
//! assert_eq!(position.cost()?, 50);
//! # Ok(())
//! # }
//! ```
//!
//! Asking the enum itself for a position does not compile, because there is no
//! `Position::new` (the setup is identical to the example above):
//!
//! ```compile_fail,E0599
//! use tally::{items::Item, positions::{CountedPosition, Position, Priced}};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let item = Item::new(0, "Spoon", 25)?;
//! let position = Position::new(&item, 2)?;
//!
//! assert_eq!(position.cost()?, 50);
//! # Ok(())
//! # }
//! ```

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use thiserror::Error;

use crate::items::Item;

/// Rounding applied to weighted costs.
pub const WEIGHT_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Errors raised while constructing or pricing a position.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    /// A counted position must hold at least one unit.
    #[error("count must be at least 1")]
    ZeroCount,

    /// A weighted position cannot have a negative weight.
    #[error("weight must not be negative, got {0}")]
    NegativeWeight(Decimal),

    /// A floating point weight was NaN, infinite or out of decimal range.
    #[error("weight is not a finite number")]
    NonFiniteWeight,

    /// The cost does not fit in minor units.
    #[error("position cost overflowed")]
    Overflow,
}

/// Something with an item and a cost.
pub trait Priced {
    /// Returns the wrapped item.
    fn item(&self) -> &Item;

    /// Returns the cost in minor units.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::Overflow`] if the cost cannot be represented.
    fn cost(&self) -> Result<i64, PositionError>;
}

/// A position priced per unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountedPosition<'a> {
    item: &'a Item,
    count: u32,
}

impl<'a> CountedPosition<'a> {
    /// Creates a counted position.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::ZeroCount`] if `count` is zero.
    pub fn new(item: &'a Item, count: u32) -> Result<Self, PositionError> {
        if count == 0 {
            return Err(PositionError::ZeroCount);
        }

        Ok(Self { item, count })
    }

    /// Creates a counted position holding a single unit.
    pub fn single(item: &'a Item) -> Self {
        Self { item, count: 1 }
    }

    /// Returns the number of units
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Priced for CountedPosition<'_> {
    fn item(&self) -> &Item {
        self.item
    }

    fn cost(&self) -> Result<i64, PositionError> {
        self.item
            .cost()
            .checked_mul(i64::from(self.count))
            .ok_or(PositionError::Overflow)
    }
}

/// A position priced by weight.
///
/// The cost is `item.cost * weight`, rounded half to even.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightedPosition<'a> {
    item: &'a Item,
    weight: Decimal,
}

impl<'a> WeightedPosition<'a> {
    /// Creates a weighted position.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::NegativeWeight`] if `weight` is below zero.
    pub fn new(item: &'a Item, weight: Decimal) -> Result<Self, PositionError> {
        if weight < Decimal::ZERO {
            return Err(PositionError::NegativeWeight(weight));
        }

        Ok(Self { item, weight })
    }

    /// Creates a weighted position from a floating point weight.
    ///
    /// The float goes through `rust_decimal`'s lossy conversion, which keeps `8.3` as `8.3`.
    ///
    /// # Errors
    ///
    /// - [`PositionError::NonFiniteWeight`]: `weight` is NaN, infinite or too large.
    /// - [`PositionError::NegativeWeight`]: `weight` is below zero.
    pub fn from_f64(item: &'a Item, weight: f64) -> Result<Self, PositionError> {
        let weight = Decimal::from_f64(weight).ok_or(PositionError::NonFiniteWeight)?;

        Self::new(item, weight)
    }

    /// Creates a weighted position with a weight of one.
    pub fn unit(item: &'a Item) -> Self {
        Self {
            item,
            weight: Decimal::ONE,
        }
    }

    /// Returns the weight
    pub fn weight(&self) -> Decimal {
        self.weight
    }
}

impl Priced for WeightedPosition<'_> {
    fn item(&self) -> &Item {
        self.item
    }

    fn cost(&self) -> Result<i64, PositionError> {
        Decimal::from(self.item.cost())
            .checked_mul(self.weight)
            .ok_or(PositionError::Overflow)?
            .round_dp_with_strategy(0, WEIGHT_ROUNDING)
            .to_i64()
            .ok_or(PositionError::Overflow)
    }
}

/// A line in an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position<'a> {
    /// Priced per unit.
    Counted(CountedPosition<'a>),

    /// Priced by weight.
    Weighted(WeightedPosition<'a>),
}

impl Priced for Position<'_> {
    fn item(&self) -> &Item {
        match self {
            Position::Counted(position) => position.item(),
            Position::Weighted(position) => position.item(),
        }
    }

    fn cost(&self) -> Result<i64, PositionError> {
        match self {
            Position::Counted(position) => position.cost(),
            Position::Weighted(position) => position.cost(),
        }
    }
}

impl<'a> From<CountedPosition<'a>> for Position<'a> {
    fn from(position: CountedPosition<'a>) -> Self {
        Position::Counted(position)
    }
}

impl<'a> From<WeightedPosition<'a>> for Position<'a> {
    fn from(position: WeightedPosition<'a>) -> Self {
        Position::Weighted(position)
    }
}
