//! BookCollection: one [`OrderBook`] per symbol.

use rustc_hash::FxHashMap;

use crate::book::AddOutcome;
use crate::error::{Error, ValidationError};
use crate::{Command, Order, OrderBook, Symbol};

/// Result of a successfully applied [`Command`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Added(AddOutcome),
    Deleted(Order),
}

/// Per-symbol books, kept in the order symbols were first added.
///
/// Books are created by the first Add for a symbol. A Delete never creates
/// one: deleting on an unseen symbol is
/// [`ValidationError::UnknownSymbol`] and the symbol stays absent.
///
/// ```
/// use depthbook::{BookCollection, Command, Order, OrderId, Price, Symbol};
///
/// let mut books = BookCollection::new();
/// books.apply(&Command::add("AAPL", OrderId(1), Order::buy(Price(150_2500), 100))).unwrap();
/// books.apply(&Command::add("AAPL", OrderId(2), Order::buy(Price(150_2500), 50))).unwrap();
///
/// let aapl = books.get(&Symbol::new("AAPL")).unwrap();
/// assert_eq!(aapl.buys().get(Price(150_2500)), Some(150));
///
/// assert!(books.apply(&Command::delete("MSFT", OrderId(1))).is_err());
/// assert!(books.get(&Symbol::new("MSFT")).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct BookCollection {
    /// Symbol → position in `books`
    index: FxHashMap<Symbol, usize>,
    /// Books in first-seen order
    books: Vec<(Symbol, OrderBook)>,
}

impl BookCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one decoded command.
    pub fn apply(&mut self, command: &Command) -> Result<Applied, Error> {
        match command {
            Command::Add { symbol, id, order } => {
                Ok(Applied::Added(self.get_or_create(symbol).add(*id, *order)?))
            }
            Command::Delete { symbol, id } => {
                let book = self
                    .get_mut(symbol)
                    .ok_or_else(|| ValidationError::UnknownSymbol {
                        symbol: symbol.clone(),
                        id: *id,
                    })?;
                book.delete(*id).map(Applied::Deleted)
            }
        }
    }

    /// Get or create the book for a symbol.
    pub fn get_or_create(&mut self, symbol: &Symbol) -> &mut OrderBook {
        let pos = match self.index.get(symbol) {
            Some(&pos) => pos,
            None => {
                let pos = self.books.len();
                self.books.push((symbol.clone(), OrderBook::new()));
                self.index.insert(symbol.clone(), pos);
                pos
            }
        };
        &mut self.books[pos].1
    }

    /// Get a reference to the book for a symbol, if it exists.
    pub fn get(&self, symbol: &Symbol) -> Option<&OrderBook> {
        self.index.get(symbol).map(|&pos| &self.books[pos].1)
    }

    /// Get a mutable reference to the book for a symbol, if it exists.
    pub fn get_mut(&mut self, symbol: &Symbol) -> Option<&mut OrderBook> {
        let pos = *self.index.get(symbol)?;
        Some(&mut self.books[pos].1)
    }

    /// Symbols in first-seen order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.books.iter().map(|(symbol, _)| symbol)
    }

    /// Books in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &OrderBook)> {
        self.books.iter().map(|(symbol, book)| (symbol, book))
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if no book exists.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
