//! HalfOrderBook: aggregated resting size per price for one side of a book.
//!
//! Only totals are kept; individual orders live in the
//! [`OrderRegistry`](crate::OrderRegistry).

use std::collections::BTreeMap;

use crate::error::{InternalInconsistency, ValidationError};
use crate::{Price, Quantity, Side};

/// One side of a symbol's book (all buys or all sells).
///
/// The `BTreeMap` gives O(log n) updates and price-ordered iteration in
/// both directions.
#[derive(Clone, Debug)]
pub struct HalfOrderBook {
    /// Aggregate size per price level
    levels: BTreeMap<Price, Quantity>,
    /// Which side this represents (determines "best" direction)
    side: Side,
}

impl HalfOrderBook {
    /// Create an empty half book for the given side.
    pub fn new(side: Side) -> Self {
        Self {
            levels: BTreeMap::new(),
            side,
        }
    }

    /// Returns which side this half represents.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns true if no level exists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns the number of distinct price levels.
    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Aggregate size at `price`, if a level exists there.
    pub fn get(&self, price: Price) -> Option<Quantity> {
        self.levels.get(&price).copied()
    }

    /// Returns the best price (highest for buys, lowest for sells).
    pub fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// Returns the total size across all levels.
    pub fn total_quantity(&self) -> Quantity {
        self.levels.values().sum()
    }

    /// Create or increase the level at `price`.
    ///
    /// A zero `size` still creates the level; it stays until a delete
    /// brings it back to exactly zero. A total that would not fit in a
    /// [`Quantity`] is [`ValidationError::SizeOverflow`] and leaves the
    /// level untouched.
    pub fn add(&mut self, price: Price, size: Quantity) -> Result<(), ValidationError> {
        let held = self.get(price).unwrap_or(0);
        let total = held
            .checked_add(size)
            .ok_or(ValidationError::SizeOverflow {
                price,
                held,
                added: size,
            })?;
        self.levels.insert(price, total);
        Ok(())
    }

    /// Decrease the level at `price` by `size`.
    ///
    /// The level is removed when it reaches zero. Removing more than the
    /// level holds is an [`InternalInconsistency::OverDelete`]; the level is
    /// dropped anyway so it never goes negative.
    pub fn delete(&mut self, price: Price, size: Quantity) -> Result<(), InternalInconsistency> {
        let held = *self
            .levels
            .get(&price)
            .ok_or(InternalInconsistency::MissingLevel { price })?;

        match held.checked_sub(size) {
            Some(0) => {
                self.levels.remove(&price);
                Ok(())
            }
            Some(remaining) => {
                self.levels.insert(price, remaining);
                Ok(())
            }
            None => {
                self.levels.remove(&price);
                Err(InternalInconsistency::OverDelete {
                    price,
                    held,
                    removed: size,
                })
            }
        }
    }

    /// Levels from lowest to highest price.
    pub fn iter_ascending(&self) -> impl DoubleEndedIterator<Item = (Price, Quantity)> + '_ {
        self.levels.iter().map(|(p, q)| (*p, *q))
    }

    /// Levels from highest to lowest price.
    pub fn iter_descending(&self) -> impl Iterator<Item = (Price, Quantity)> + '_ {
        self.iter_ascending().rev()
    }
}
