//! OrderBook: one symbol's live orders plus the two aggregated sides.
//!
//! The registry is authoritative. Every aggregate change is driven by an
//! order entering or leaving it, so each level equals the sum of the live
//! orders at that price. The one known exception is a duplicate-id add,
//! which overwrites the registry entry without backing the old contribution
//! out of its level.

use crate::error::{Error, ValidationError};
use crate::{HalfOrderBook, Order, OrderId, OrderRegistry, Side};

/// What happened on [`OrderBook::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddOutcome {
    /// The order previously registered under the same id, if any.
    ///
    /// Its size is still counted in its old level.
    pub displaced: Option<Order>,
}

impl AddOutcome {
    /// Returns true if the id was already live.
    pub fn is_duplicate(&self) -> bool {
        self.displaced.is_some()
    }
}

/// The complete book for one symbol.
#[derive(Clone, Debug)]
pub struct OrderBook {
    /// Live orders by id
    registry: OrderRegistry,
    /// Buy side aggregates
    buys: HalfOrderBook,
    /// Sell side aggregates
    sells: HalfOrderBook,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create a new empty order book.
    pub fn new() -> Self {
        Self {
            registry: OrderRegistry::new(),
            buys: HalfOrderBook::new(Side::Buy),
            sells: HalfOrderBook::new(Side::Sell),
        }
    }

    // === Mutation ===

    /// Post `order` under `id`.
    ///
    /// A live `id` is overwritten and reported through
    /// [`AddOutcome::displaced`]; the displaced order's size is not removed
    /// from its level. If the level total would overflow, nothing changes
    /// and the add is [`ValidationError::SizeOverflow`].
    pub fn add(&mut self, id: OrderId, order: Order) -> Result<AddOutcome, ValidationError> {
        self.half_mut(order.side).add(order.price, order.size)?;
        let displaced = self.registry.insert(id, order);
        Ok(AddOutcome { displaced })
    }

    /// Remove the order registered under `id` and back its size out of its level.
    ///
    /// The registry entry is dropped before the level is touched, so even
    /// when the level update fails the id is gone and a second delete
    /// reports [`ValidationError::UnknownId`].
    pub fn delete(&mut self, id: OrderId) -> Result<Order, Error> {
        let order = self
            .registry
            .remove(id)
            .ok_or(ValidationError::UnknownId(id))?;

        self.half_mut(order.side).delete(order.price, order.size)?;
        Ok(order)
    }

    // === Access ===

    /// Get a live order by id.
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.registry.get(id)
    }

    /// Number of live orders.
    pub fn order_count(&self) -> usize {
        self.registry.len()
    }

    /// Returns true if neither side has a level.
    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }

    /// Buy side aggregates.
    pub fn buys(&self) -> &HalfOrderBook {
        &self.buys
    }

    /// Sell side aggregates.
    pub fn sells(&self) -> &HalfOrderBook {
        &self.sells
    }

    /// Get the aggregates for one side.
    pub fn half(&self, side: Side) -> &HalfOrderBook {
        match side {
            Side::Buy => &self.buys,
            Side::Sell => &self.sells,
        }
    }

    fn half_mut(&mut self, side: Side) -> &mut HalfOrderBook {
        match side {
            Side::Buy => &mut self.buys,
            Side::Sell => &mut self.sells,
        }
    }
}
