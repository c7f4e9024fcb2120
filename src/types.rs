//! Core types: Price, Quantity, OrderId, Symbol

use std::fmt;

use serde::{Serialize, Serializer};

/// Price in ten-thousandths (4 implied decimal places).
///
/// `Price(150_2500)` represents 150.25. Fixed-point keys make two events
/// quoting the same decimal price land on the same level, which binary
/// floating point cannot promise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(pub i64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Number of implied decimal places.
    pub const DECIMALS: u32 = 4;

    /// Units per whole price (10^DECIMALS).
    pub const SCALE: i64 = 10_000;

    /// Parse a decimal such as `150.25`, `-3`, `+0.0001` or `7.`.
    ///
    /// Returns `None` on empty input, stray characters, overflow, or
    /// non-zero digits beyond [`Price::DECIMALS`].
    pub fn parse_decimal(text: &str) -> Option<Price> {
        let (negative, body) = match text.as_bytes().first()? {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (whole, frac) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let mut units: i64 = 0;
        for b in whole.bytes() {
            units = units.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
        }
        units = units.checked_mul(Self::SCALE)?;

        let (kept, excess) = frac.split_at(frac.len().min(Self::DECIMALS as usize));
        if excess.bytes().any(|b| b != b'0') {
            return None;
        }
        let mut frac_units: i64 = 0;
        for b in kept.bytes() {
            frac_units = frac_units * 10 + i64::from(b - b'0');
        }
        frac_units *= 10i64.pow(Self::DECIMALS - kept.len() as u32);

        let units = units.checked_add(frac_units)?;
        Some(Price(if negative { -units } else { units }))
    }
}

impl fmt::Display for Price {
    /// Shortest exact decimal: `150.25`, `300`, `-0.5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        let whole = magnitude / scale;
        let frac = magnitude % scale;
        let sign = if self.0 < 0 { "-" } else { "" };

        if frac == 0 {
            return write!(f, "{sign}{whole}");
        }
        let digits = format!("{:0width$}", frac, width = Self::DECIMALS as usize);
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Resting size of an order or level. Never negative.
pub type Quantity = u64;

/// Order identifier as carried on the input line.
///
/// Unique among live orders within one symbol's book only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct OrderId(pub i64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instrument identifier, the top-level key of a [`BookCollection`](crate::BookCollection).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Symbol(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_ordering() {
        assert!(Price(100) < Price(200));
        assert!(Price(-50) < Price(50));
        assert_eq!(Price(100), Price(100));
    }

    #[test]
    fn parse_plain_decimals() {
        assert_eq!(Price::parse_decimal("150.25"), Some(Price(150_2500)));
        assert_eq!(Price::parse_decimal("300.00"), Some(Price(300_0000)));
        assert_eq!(Price::parse_decimal("300"), Some(Price(300_0000)));
        assert_eq!(Price::parse_decimal("0.0001"), Some(Price(1)));
        assert_eq!(Price::parse_decimal(".5"), Some(Price(5000)));
        assert_eq!(Price::parse_decimal("7."), Some(Price(7_0000)));
    }

    #[test]
    fn parse_signs() {
        assert_eq!(Price::parse_decimal("-1.5"), Some(Price(-1_5000)));
        assert_eq!(Price::parse_decimal("+2"), Some(Price(2_0000)));
    }

    #[test]
    fn same_decimal_same_key() {
        // 0.1 + 0.2 style drift cannot happen: equal text means equal key
        assert_eq!(Price::parse_decimal("299.50"), Price::parse_decimal("299.5"));
        assert_eq!(Price::parse_decimal("299.5000"), Price::parse_decimal("299.5"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Price::parse_decimal(""), None);
        assert_eq!(Price::parse_decimal("-"), None);
        assert_eq!(Price::parse_decimal("."), None);
        assert_eq!(Price::parse_decimal("12x"), None);
        assert_eq!(Price::parse_decimal("1.2.3"), None);
        assert_eq!(Price::parse_decimal(" 1"), None);
        assert_eq!(Price::parse_decimal("1e3"), None);
    }

    #[test]
    fn parse_excess_precision() {
        assert_eq!(Price::parse_decimal("1.000000"), Some(Price(1_0000)));
        assert_eq!(Price::parse_decimal("1.00001"), None);
    }

    #[test]
    fn parse_overflow() {
        assert_eq!(Price::parse_decimal("99999999999999999999"), None);
        assert_eq!(Price::parse_decimal("922337203685478"), None);
    }

    #[test]
    fn price_display() {
        assert_eq!(Price(150_2500).to_string(), "150.25");
        assert_eq!(Price(300_0000).to_string(), "300");
        assert_eq!(Price(1).to_string(), "0.0001");
        assert_eq!(Price(-5000).to_string(), "-0.5");
        assert_eq!(Price::ZERO.to_string(), "0");
    }

    #[test]
    fn order_id_display() {
        assert_eq!(OrderId(42).to_string(), "42");
        assert_eq!(OrderId(-3).to_string(), "-3");
    }

    #[test]
    fn symbol_as_str() {
        assert_eq!(Symbol::new("AAPL").as_str(), "AAPL");
        assert_eq!(Symbol::from("MSFT").to_string(), "MSFT");
    }
}
