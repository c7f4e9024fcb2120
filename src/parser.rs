//! CommandParser: a forward-only cursor over `|`-delimited fields.
//!
//! Each `read_*` call consumes exactly one segment, left to right. There is
//! no lookahead and no way to go back; callers read fields in the order the
//! command schema dictates.

use crate::error::FieldError;
use crate::Price;

/// Forward-only field cursor over one input line.
#[derive(Clone, Debug)]
pub struct CommandParser<'a> {
    /// Unconsumed tail of the line, `None` once the last segment was read
    rest: Option<&'a str>,
    /// Index of the next segment
    field: usize,
}

impl<'a> CommandParser<'a> {
    /// Start a cursor at the first segment of `line`.
    pub fn new(line: &'a str) -> Self {
        Self {
            rest: Some(line),
            field: 0,
        }
    }

    /// Number of segments consumed so far.
    #[inline]
    pub fn fields_read(&self) -> usize {
        self.field
    }

    /// Returns true if no segment is left to read.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.rest.is_none()
    }

    /// Read a segment as raw text.
    pub fn read_str(&mut self) -> Result<&'a str, FieldError> {
        self.advance().map(|(_, segment)| segment)
    }

    /// Read a segment as a signed decimal integer.
    ///
    /// The whole segment must be numeric; `12x` and the empty string fail.
    pub fn read_int(&mut self) -> Result<i64, FieldError> {
        let (field, segment) = self.advance()?;
        segment
            .parse::<i64>()
            .map_err(|_| FieldError::NumericParseFailure {
                field,
                text: segment.to_owned(),
            })
    }

    /// Read a segment as a fixed-point decimal price.
    pub fn read_decimal(&mut self) -> Result<Price, FieldError> {
        let (field, segment) = self.advance()?;
        Price::parse_decimal(segment).ok_or_else(|| FieldError::NumericParseFailure {
            field,
            text: segment.to_owned(),
        })
    }

    /// Read a segment that must hold exactly one character.
    pub fn read_char(&mut self) -> Result<char, FieldError> {
        let (field, segment) = self.advance()?;
        let mut chars = segment.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(FieldError::WrongLength {
                field,
                len: segment.chars().count(),
            }),
        }
    }

    /// Consume the next segment, returning its index and text.
    fn advance(&mut self) -> Result<(usize, &'a str), FieldError> {
        let rest = self
            .rest
            .ok_or(FieldError::FieldExhausted { field: self.field })?;

        let (segment, tail) = match rest.split_once('|') {
            Some((segment, tail)) => (segment, Some(tail)),
            None => (rest, None),
        };

        self.rest = tail;
        let field = self.field;
        self.field += 1;
        Ok((field, segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_fields_in_order() {
        let mut p = CommandParser::new("AAPL|A|B|1|100|150.25");

        assert_eq!(p.read_str(), Ok("AAPL"));
        assert_eq!(p.read_char(), Ok('A'));
        assert_eq!(p.read_char(), Ok('B'));
        assert_eq!(p.read_int(), Ok(1));
        assert_eq!(p.read_int(), Ok(100));
        assert_eq!(p.read_decimal(), Ok(Price(150_2500)));
        assert!(p.is_exhausted());
        assert_eq!(p.fields_read(), 6);
    }

    #[test]
    fn exhausted_past_last_field() {
        let mut p = CommandParser::new("AAPL|D");
        p.read_str().unwrap();
        p.read_char().unwrap();

        assert_eq!(p.read_int(), Err(FieldError::FieldExhausted { field: 2 }));
        // Stays exhausted
        assert_eq!(p.read_str(), Err(FieldError::FieldExhausted { field: 2 }));
    }

    #[test]
    fn trailing_pipe_yields_empty_segment() {
        let mut p = CommandParser::new("AAPL|");
        assert_eq!(p.read_str(), Ok("AAPL"));
        assert_eq!(p.read_str(), Ok(""));
        assert!(p.is_exhausted());
    }

    #[test]
    fn empty_line_has_one_empty_segment() {
        let mut p = CommandParser::new("");
        assert_eq!(p.read_str(), Ok(""));
        assert_eq!(p.read_str(), Err(FieldError::FieldExhausted { field: 1 }));
    }

    #[test]
    fn numeric_must_consume_segment() {
        let mut p = CommandParser::new("12x|7");
        assert_eq!(
            p.read_int(),
            Err(FieldError::NumericParseFailure {
                field: 0,
                text: "12x".into()
            })
        );
        // Cursor still moved past the bad segment
        assert_eq!(p.read_int(), Ok(7));
    }

    #[test]
    fn empty_numeric_fails() {
        let mut p = CommandParser::new("|");
        assert!(matches!(
            p.read_int(),
            Err(FieldError::NumericParseFailure { field: 0, .. })
        ));
        assert!(matches!(
            p.read_decimal(),
            Err(FieldError::NumericParseFailure { field: 1, .. })
        ));
    }

    #[test]
    fn signed_integers() {
        let mut p = CommandParser::new("-5|+6");
        assert_eq!(p.read_int(), Ok(-5));
        assert_eq!(p.read_int(), Ok(6));
    }

    #[test]
    fn decimal_with_trailing_text_fails() {
        let mut p = CommandParser::new("150.25abc");
        assert!(matches!(
            p.read_decimal(),
            Err(FieldError::NumericParseFailure { field: 0, .. })
        ));
    }

    #[test]
    fn char_wrong_length() {
        let mut p = CommandParser::new("AB||Ω");
        assert_eq!(
            p.read_char(),
            Err(FieldError::WrongLength { field: 0, len: 2 })
        );
        assert_eq!(
            p.read_char(),
            Err(FieldError::WrongLength { field: 1, len: 0 })
        );
        // One character, even if multi-byte
        assert_eq!(p.read_char(), Ok('Ω'));
    }
}
