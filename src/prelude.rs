//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    config::{ConfigError, PROMO_DISCOUNT_RATE, PricingPolicy},
    discounts::{DiscountError, Rounding},
    items::{Item, ItemError},
    list_twist::{ListTwist, ListTwistError},
    ocean::{Cell, Ocean, OceanError},
    orders::{Order, OrderError},
    positions::{CountedPosition, Position, PositionError, Priced, WeightedPosition},
    pricing::{TotalCostError, total_cost},
};
