// Allow our whole.ten-thousandths digit grouping convention (e.g., 150_2500 = 150.25)
#![allow(clippy::inconsistent_digit_grouping)]

//! # depthbook
//!
//! Per-symbol aggregated order book depth built from a stream of
//! pipe-delimited add/delete events.
//!
//! ## Features
//!
//! - **Event grammar**: `SYMBOL|A|SIDE|ID|SIZE|PRICE` and `SYMBOL|D|ID`
//! - **Aggregated levels**: resting size per price, per side, per symbol
//! - **Fixed-point prices**: equal decimal text always lands on the same level
//! - **Fault isolation**: a bad line is logged and skipped, never fatal
//!
//! ## Quick Start
//!
//! ```
//! use depthbook::{BookCollection, Command, Price, Symbol};
//!
//! let mut books = BookCollection::new();
//!
//! books.apply(&Command::parse("AAPL|A|B|1|100|150.25").unwrap()).unwrap();
//! books.apply(&Command::parse("AAPL|A|B|2|50|150.25").unwrap()).unwrap();
//!
//! let aapl = books.get(&Symbol::new("AAPL")).unwrap();
//! assert_eq!(aapl.buys().get(Price(150_2500)), Some(150));
//! ```
//!
//! ## Price Representation
//!
//! Prices are stored as [`i64`] ten-thousandths:
//!
//! ```
//! use depthbook::Price;
//!
//! let price = Price::parse_decimal("299.50").unwrap();
//! assert_eq!(price, Price(299_5000));
//! assert_eq!(price.to_string(), "299.5");
//! ```
//!
//! ## Errors
//!
//! Bad input yields a [`ValidationError`]; a disagreement between the
//! order registry and the aggregates yields an [`InternalInconsistency`].
//!
//! ```
//! use depthbook::{BookCollection, Command, Error, OrderId, ValidationError};
//!
//! assert!(matches!(
//!     Command::parse("AAPL|X|1"),
//!     Err(ValidationError::UnknownCommand('X'))
//! ));
//!
//! let mut books = BookCollection::new();
//! books.apply(&Command::parse("AAPL|A|S|1|10|5").unwrap()).unwrap();
//! books.apply(&Command::parse("AAPL|D|1").unwrap()).unwrap();
//! assert_eq!(
//!     books.apply(&Command::parse("AAPL|D|1").unwrap()),
//!     Err(Error::Validation(ValidationError::UnknownId(OrderId(1))))
//! );
//! ```
//!
//! ## Running a Batch
//!
//! ```
//! use depthbook::{render, Config, Driver, OutputFormat};
//!
//! let input = "MSFT|A|S|5|10|300.00\nMSFT|A|S|6|20|299.50\n";
//! let mut driver = Driver::new(&Config::default());
//! driver.run(input.as_bytes()).unwrap();
//!
//! let mut out = Vec::new();
//! render(driver.books(), OutputFormat::Text, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("        10 300\n        20 299.5\n"));
//! ```

mod book;
mod collection;
mod command;
pub mod config;
pub mod driver;
mod error;
mod half_book;
mod order;
pub mod parser;
mod registry;
mod side;
mod snapshot;
mod types;

// Re-export public API
pub use book::{AddOutcome, OrderBook};
pub use collection::{Applied, BookCollection};
pub use command::{Command, CommandKind};
pub use config::{Config, ConfigError, OutputFormat};
pub use driver::{Driver, RunError, RunStats};
pub use error::{Error, FieldError, InternalInconsistency, ValidationError};
pub use half_book::HalfOrderBook;
pub use order::Order;
pub use parser::CommandParser;
pub use registry::OrderRegistry;
pub use side::Side;
pub use snapshot::{render, DepthSnapshot, LevelSnapshot, SIDE_SEPARATOR};
pub use types::{OrderId, Price, Quantity, Symbol};
