//! Depth snapshots and end-of-run rendering.

use std::io::{self, Write};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::{BookCollection, OrderBook, Price, Quantity, Symbol};

/// Marker line between the buy and sell levels of the text format.
pub const SIDE_SEPARATOR: &str = "  //BUY\\\\  ===  \\\\SELL///";

/// Aggregated depth of one symbol at a point in time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DepthSnapshot {
    pub symbol: Symbol,
    /// Buy levels, lowest price first
    pub buys: Vec<LevelSnapshot>,
    /// Sell levels, highest price first
    pub sells: Vec<LevelSnapshot>,
}

/// A single aggregated price level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LevelSnapshot {
    pub price: Price,
    pub size: Quantity,
}

impl From<(Price, Quantity)> for LevelSnapshot {
    fn from((price, size): (Price, Quantity)) -> Self {
        Self { price, size }
    }
}

impl DepthSnapshot {
    /// Total size across buy levels.
    pub fn total_buy_size(&self) -> Quantity {
        self.buys.iter().map(|l| l.size).sum()
    }

    /// Total size across sell levels.
    pub fn total_sell_size(&self) -> Quantity {
        self.sells.iter().map(|l| l.size).sum()
    }

    /// Write this snapshot in the text format.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "[[[ {} ]]]", self.symbol)?;
        for level in &self.buys {
            writeln!(out, "{:>10} {}", level.size, level.price)?;
        }
        writeln!(out, "{SIDE_SEPARATOR}")?;
        for level in &self.sells {
            writeln!(out, "{:>10} {}", level.size, level.price)?;
        }
        Ok(())
    }
}

impl OrderBook {
    /// Take a snapshot of every level on both sides.
    pub fn snapshot(&self, symbol: &Symbol) -> DepthSnapshot {
        DepthSnapshot {
            symbol: symbol.clone(),
            buys: self.buys().iter_ascending().map(LevelSnapshot::from).collect(),
            sells: self.sells().iter_descending().map(LevelSnapshot::from).collect(),
        }
    }
}

impl BookCollection {
    /// Snapshots of all books in first-seen order.
    pub fn snapshots(&self) -> Vec<DepthSnapshot> {
        self.iter()
            .map(|(symbol, book)| book.snapshot(symbol))
            .collect()
    }
}

/// Write every book in `books` to `out` in the chosen format.
pub fn render<W: Write>(books: &BookCollection, format: OutputFormat, out: &mut W) -> io::Result<()> {
    let snapshots = books.snapshots();
    match format {
        OutputFormat::Text => {
            for snap in &snapshots {
                snap.write_text(out)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &snapshots).map_err(io::Error::other)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
