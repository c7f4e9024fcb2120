//! OrderRegistry: live orders of one symbol, keyed by id.

use rustc_hash::FxHashMap;

use crate::{Order, OrderId};

/// Id → order table for the live orders of one book.
#[derive(Clone, Debug, Default)]
pub struct OrderRegistry {
    orders: FxHashMap<OrderId, Order>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `order` under `id`, returning whatever was registered there before.
    pub fn insert(&mut self, id: OrderId, order: Order) -> Option<Order> {
        self.orders.insert(id, order)
    }

    /// Remove and return the order registered under `id`.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        self.orders.remove(&id)
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.orders.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
