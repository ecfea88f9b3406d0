//! Orders

use thiserror::Error;
use tracing::debug;

use crate::{
    config::PricingPolicy,
    discounts::{DiscountError, apply_percentage_off},
    positions::Position,
    pricing::{TotalCostError, total_cost},
};

/// Errors raised while pricing an order.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Summing the positions failed.
    #[error(transparent)]
    TotalCost(#[from] TotalCostError),

    /// Applying the promotional discount failed.
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// An order made of positions, optionally discounted by a promotion.
///
/// The cost is never stored. Every call to [`Order::order_cost`] prices the positions as they
/// are now, under the promo flag as it is now.
#[derive(Debug, Clone)]
#[expect(
    clippy::struct_field_names,
    reason = "`order_id` is the public name of the order id"
)]
pub struct Order<'a> {
    order_id: i64,
    positions: Vec<Position<'a>>,
    have_promo: bool,
    policy: PricingPolicy,
}

impl<'a> Order<'a> {
    /// Create an empty order without a promotion.
    pub fn new(order_id: i64) -> Self {
        Self::with_policy(order_id, PricingPolicy::default())
    }

    /// Create an order with the given positions and promo flag.
    pub fn with_positions(
        order_id: i64,
        positions: impl IntoIterator<Item = Position<'a>>,
        have_promo: bool,
    ) -> Self {
        Self::with_positions_and_policy(order_id, positions, have_promo, PricingPolicy::default())
    }

    /// Create an empty order priced under a custom policy.
    pub fn with_policy(order_id: i64, policy: PricingPolicy) -> Self {
        Self::with_positions_and_policy(order_id, Vec::new(), false, policy)
    }

    /// Create an order with the given positions and promo flag, priced under a custom policy.
    pub fn with_positions_and_policy(
        order_id: i64,
        positions: impl IntoIterator<Item = Position<'a>>,
        have_promo: bool,
        policy: PricingPolicy,
    ) -> Self {
        Order {
            order_id,
            positions: positions.into_iter().collect(),
            have_promo,
            policy,
        }
    }

    /// Append a position to the order.
    pub fn add_position(&mut self, position: impl Into<Position<'a>>) {
        self.positions.push(position.into());
    }

    /// Get the order id.
    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    /// Get the positions in insertion order.
    pub fn positions(&self) -> &[Position<'a>] {
        &self.positions
    }

    /// Get the number of positions in the order.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the order has no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether the promotional discount applies.
    pub fn have_promo(&self) -> bool {
        self.have_promo
    }

    /// Switch the promotional discount on or off.
    pub fn set_promo(&mut self, have_promo: bool) {
        self.have_promo = have_promo;
    }

    /// Get the pricing policy.
    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Calculate the undiscounted total of all positions.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderError::TotalCost`] if a position cost or the sum overflows.
    pub fn subtotal(&self) -> Result<i64, OrderError> {
        Ok(total_cost(&self.positions)?)
    }

    /// Calculate the order cost, taking the promotion into account.
    ///
    /// With the promo flag set the subtotal is multiplied by `1 - discount` and rounded with the
    /// policy's rounding mode.
    ///
    /// # Errors
    ///
    /// - [`OrderError::TotalCost`]: a position cost or the sum overflows.
    /// - [`OrderError::Discount`]: the discounted amount cannot be represented.
    #[tracing::instrument(
        name = "orders.order_cost",
        skip(self),
        fields(
            order_id = self.order_id,
            positions = self.positions.len(),
            have_promo = self.have_promo
        ),
        err
    )]
    pub fn order_cost(&self) -> Result<i64, OrderError> {
        let subtotal = self.subtotal()?;

        let total = if self.have_promo {
            apply_percentage_off(
                self.policy.promo_discount(),
                subtotal,
                self.policy.rounding(),
            )?
        } else {
            subtotal
        };

        debug!(subtotal, total, "priced order");

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        discounts::Rounding,
        items::Item,
        positions::{CountedPosition, Priced, WeightedPosition},
    };

    use super::*;

    #[test]
    fn new_order_is_empty_without_promo() -> TestResult {
        let order = Order::new(7);

        assert_eq!(order.order_id(), 7);
        assert!(order.is_empty());
        assert!(!order.have_promo());
        assert_eq!(order.order_cost()?, 0);

        Ok(())
    }

    #[test]
    fn order_cost_without_promo() -> TestResult {
        let cable = Item::new(0, "USB cable", 256)?;

        let order = Order::with_positions(0, [CountedPosition::new(&cable, 4)?.into()], false);

        assert_eq!(order.order_cost()?, 1024);

        Ok(())
    }

    #[test]
    fn order_cost_with_promo() -> TestResult {
        let cable = Item::new(0, "USB cable", 256)?;

        let order = Order::with_positions(0, [CountedPosition::new(&cable, 2)?.into()], true);

        assert_eq!(order.subtotal()?, 512);
        assert_eq!(order.order_cost()?, 435);

        Ok(())
    }

    #[test]
    fn order_cost_sums_mixed_positions() -> TestResult {
        let melon = Item::new(0, "Melon", 40)?;
        let box_ = Item::new(0, "Box", 90)?;

        let mut order = Order::new(0);
        order.add_position(WeightedPosition::from_f64(&melon, 8.3)?);
        order.add_position(CountedPosition::new(&box_, 5)?);

        assert_eq!(order.len(), 2);
        assert_eq!(order.order_cost()?, 782);

        Ok(())
    }

    #[test]
    fn order_cost_many_counted_positions() -> TestResult {
        let books = (5..8)
            .map(|i| Item::new(i, "Book", i * 100))
            .collect::<Result<Vec<_>, _>>()?;

        let positions = books
            .iter()
            .zip(5u32..)
            .map(|(book, count)| CountedPosition::new(book, count).map(Position::from))
            .collect::<Result<Vec<_>, _>>()?;

        let order = Order::with_positions(0, positions, false);

        assert_eq!(order.order_cost()?, 11000);

        Ok(())
    }

    #[test]
    fn promo_discount_rounds_half_to_even() -> TestResult {
        let cheap = Item::new(1, "Book", 50)?;
        let dear = Item::new(2, "Book", 100)?;

        let order = Order::with_positions(
            0,
            [
                CountedPosition::new(&cheap, 1)?.into(),
                CountedPosition::new(&dear, 2)?.into(),
            ],
            true,
        );

        // 250 * 0.85 = 212.5
        assert_eq!(order.order_cost()?, 212);

        Ok(())
    }

    #[test]
    fn toggling_promo_is_reflected_on_every_read() -> TestResult {
        let cable = Item::new(0, "USB cable", 256)?;

        let mut order = Order::new(0);
        order.add_position(CountedPosition::new(&cable, 2)?);

        assert_eq!(order.order_cost()?, 512);

        order.set_promo(true);
        assert_eq!(order.order_cost()?, 435);
        assert_eq!(order.order_cost()?, 435);
        assert!(order.have_promo());

        order.set_promo(false);
        assert_eq!(order.order_cost()?, 512);

        Ok(())
    }

    #[test]
    fn added_positions_are_reflected_in_cost() -> TestResult {
        let cable = Item::new(0, "USB cable", 256)?;

        let mut order = Order::with_positions(0, [], true);
        assert_eq!(order.order_cost()?, 0);

        order.add_position(CountedPosition::new(&cable, 2)?);
        assert_eq!(order.order_cost()?, 435);

        order.add_position(CountedPosition::single(&cable));
        // 768 * 0.85 = 652.8
        assert_eq!(order.order_cost()?, 653);

        Ok(())
    }

    #[test]
    fn empty_orders_do_not_share_positions() -> TestResult {
        let cable = Item::new(0, "USB cable", 256)?;

        let mut first = Order::new(0);
        first.add_position(CountedPosition::new(&cable, 5)?);

        let second = Order::new(1);

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 0);
        assert_ne!(first.positions(), second.positions());

        Ok(())
    }

    #[test]
    fn positions_keep_insertion_order() -> TestResult {
        let a = Item::new(0, "Zinc", 10)?;
        let b = Item::new(1, "Apple", 99)?;

        let mut order = Order::new(0);
        order.add_position(CountedPosition::single(&a));
        order.add_position(WeightedPosition::unit(&b));
        order.add_position(CountedPosition::single(&a));

        let titles: Vec<&str> = order
            .positions()
            .iter()
            .map(|position| position.item().title())
            .collect();

        assert_eq!(titles, vec!["Zinc", "Apple", "Zinc"]);

        Ok(())
    }

    #[test]
    fn custom_policy_changes_discount_and_rounding() -> TestResult {
        let item = Item::new(0, "Book", 250)?;
        let policy = PricingPolicy::new(Decimal::new(15, 2), Rounding::HalfUp)?;

        let mut order = Order::with_policy(3, policy);
        order.add_position(CountedPosition::single(&item));
        order.set_promo(true);

        assert_eq!(order.policy(), &policy);
        assert_eq!(order.order_cost()?, 213);

        Ok(())
    }

    #[test]
    fn starting_positions_keep_custom_policy() -> TestResult {
        let cheap = Item::new(1, "Book", 50)?;
        let dear = Item::new(2, "Book", 100)?;
        let policy = PricingPolicy::new(Decimal::new(15, 2), Rounding::HalfUp)?;

        let mut order = Order::with_positions_and_policy(
            4,
            [
                CountedPosition::single(&cheap).into(),
                CountedPosition::new(&dear, 2)?.into(),
            ],
            true,
            policy,
        );

        assert_eq!(order.len(), 2);
        assert_eq!(order.policy(), &policy);
        // 250 * 0.85 = 212.5
        assert_eq!(order.order_cost()?, 213);

        order.set_promo(false);
        assert_eq!(order.order_cost()?, 250);

        Ok(())
    }

    #[test]
    fn overflow_surfaces_as_total_cost_error() -> TestResult {
        let item = Item::new(0, "Yacht", i64::MAX)?;

        let mut order = Order::new(0);
        order.add_position(CountedPosition::single(&item));
        order.add_position(CountedPosition::single(&item));

        assert_eq!(
            order.order_cost(),
            Err(OrderError::TotalCost(TotalCostError::Overflow))
        );

        Ok(())
    }
}
