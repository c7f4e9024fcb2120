//! Order representation

use crate::{Price, Quantity, Side};

/// A resting order as recorded in a book's registry.
///
/// The id is the registry key and is not repeated here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Order {
    /// Buy or sell
    pub side: Side,
    /// Limit price
    pub price: Price,
    /// Resting size contributed to the level at `price`
    pub size: Quantity,
}

impl Order {
    pub fn new(side: Side, price: Price, size: Quantity) -> Self {
        Self { side, price, size }
    }

    pub fn buy(price: Price, size: Quantity) -> Self {
        Self::new(Side::Buy, price, size)
    }

    pub fn sell(price: Price, size: Quantity) -> Self {
        Self::new(Side::Sell, price, size)
    }
}
