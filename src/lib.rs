//! Tally
//!
//! Tally is a small collection of in-memory models: order pricing with promotional discounts,
//! a list with derived accessors, and a Game of Life variant played in an ocean.

pub mod config;
pub mod discounts;
pub mod items;
pub mod list_twist;
pub mod ocean;
pub mod orders;
pub mod positions;
pub mod prelude;
pub mod pricing;
