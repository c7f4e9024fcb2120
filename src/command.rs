//! Typed book events decoded from one input line.
//!
//! Wire grammar, fields separated by `|`:
//!
//! | Command | Fields |
//! |---------|--------|
//! | Add     | `SYMBOL\|A\|SIDE\|ID\|SIZE\|PRICE` |
//! | Delete  | `SYMBOL\|D\|ID` |
//!
//! Segments beyond the schema are ignored.

use crate::error::ValidationError;
use crate::parser::CommandParser;
use crate::{Order, OrderId, Side, Symbol};

/// Command code, the second field of every line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Add,
    Delete,
}

impl CommandKind {
    /// Decode the single-character wire code (`A` or `D`).
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(CommandKind::Add),
            'D' => Some(CommandKind::Delete),
            _ => None,
        }
    }
}

/// A fully decoded event, ready to apply to a [`BookCollection`](crate::BookCollection).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Post an order
    Add {
        symbol: Symbol,
        id: OrderId,
        order: Order,
    },
    /// Remove a previously posted order
    Delete { symbol: Symbol, id: OrderId },
}

impl Command {
    /// Create an Add command.
    pub fn add(symbol: impl Into<Symbol>, id: OrderId, order: Order) -> Self {
        Command::Add {
            symbol: symbol.into(),
            id,
            order,
        }
    }

    /// Create a Delete command.
    pub fn delete(symbol: impl Into<Symbol>, id: OrderId) -> Self {
        Command::Delete {
            symbol: symbol.into(),
            id,
        }
    }

    /// Decode one line.
    ///
    /// The symbol and command code are read first, then the fields the
    /// command's schema names, in order.
    pub fn parse(line: &str) -> Result<Self, ValidationError> {
        let mut fields = CommandParser::new(line);

        let symbol = Symbol::new(fields.read_str()?);
        let code = fields.read_char()?;

        match CommandKind::from_code(code).ok_or(ValidationError::UnknownCommand(code))? {
            CommandKind::Add => {
                let side_code = fields.read_char()?;
                let id = OrderId(fields.read_int()?);
                let size = fields.read_int()?;
                let price = fields.read_decimal()?;

                let side =
                    Side::from_code(side_code).ok_or(ValidationError::UnknownSide(side_code))?;
                let size = u64::try_from(size).map_err(|_| ValidationError::NegativeSize(size))?;

                Ok(Command::Add {
                    symbol,
                    id,
                    order: Order::new(side, price, size),
                })
            }
            CommandKind::Delete => {
                let id = OrderId(fields.read_int()?);
                Ok(Command::Delete { symbol, id })
            }
        }
    }

    /// The symbol this command targets.
    pub fn symbol(&self) -> &Symbol {
        match self {
            Command::Add { symbol, .. } | Command::Delete { symbol, .. } => symbol,
        }
    }

    /// The command code.
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Add { .. } => CommandKind::Add,
            Command::Delete { .. } => CommandKind::Delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::Price;

    #[test]
    fn parse_add() {
        let cmd = Command::parse("AAPL|A|B|1|100|150.25").unwrap();
        assert_eq!(
            cmd,
            Command::add("AAPL", OrderId(1), Order::buy(Price(150_2500), 100))
        );
        assert_eq!(cmd.kind(), CommandKind::Add);
        assert_eq!(cmd.symbol().as_str(), "AAPL");
    }

    #[test]
    fn parse_add_sell() {
        let cmd = Command::parse("MSFT|A|S|5|10|300.00").unwrap();
        assert_eq!(
            cmd,
            Command::add("MSFT", OrderId(5), Order::sell(Price(300_0000), 10))
        );
    }

    #[test]
    fn parse_delete() {
        let cmd = Command::parse("AAPL|D|999").unwrap();
        assert_eq!(cmd, Command::delete("AAPL", OrderId(999)));
        assert_eq!(cmd.kind(), CommandKind::Delete);
    }

    #[test]
    fn extra_fields_ignored() {
        let cmd = Command::parse("AAPL|D|7|trailing|junk").unwrap();
        assert_eq!(cmd, Command::delete("AAPL", OrderId(7)));
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            Command::parse("AAPL|X|whatever"),
            Err(ValidationError::UnknownCommand('X'))
        );
    }

    #[test]
    fn multi_char_command_is_malformed() {
        assert_eq!(
            Command::parse("AAPL|ADD|B|1|1|1"),
            Err(ValidationError::MalformedField(FieldError::WrongLength {
                field: 1,
                len: 3
            }))
        );
    }

    #[test]
    fn unknown_side() {
        assert_eq!(
            Command::parse("AAPL|A|Q|1|100|1.0"),
            Err(ValidationError::UnknownSide('Q'))
        );
    }

    #[test]
    fn fields_parsed_before_side_checked() {
        // A malformed later field wins over a bad side code
        assert_eq!(
            Command::parse("AAPL|A|Q|1|100"),
            Err(ValidationError::MalformedField(FieldError::FieldExhausted {
                field: 5
            }))
        );
    }

    #[test]
    fn missing_fields() {
        assert_eq!(
            Command::parse("AAPL|D"),
            Err(ValidationError::MalformedField(FieldError::FieldExhausted {
                field: 2
            }))
        );
        assert_eq!(
            Command::parse("AAPL"),
            Err(ValidationError::MalformedField(FieldError::FieldExhausted {
                field: 1
            }))
        );
    }

    #[test]
    fn bad_numbers() {
        assert!(matches!(
            Command::parse("AAPL|A|B|x1|100|1.0"),
            Err(ValidationError::MalformedField(
                FieldError::NumericParseFailure { field: 3, .. }
            ))
        ));
        assert!(matches!(
            Command::parse("AAPL|A|B|1|100|1.0z"),
            Err(ValidationError::MalformedField(
                FieldError::NumericParseFailure { field: 5, .. }
            ))
        ));
    }

    #[test]
    fn negative_size_rejected() {
        assert_eq!(
            Command::parse("AAPL|A|B|1|-5|1.0"),
            Err(ValidationError::NegativeSize(-5))
        );
    }

    #[test]
    fn zero_size_accepted() {
        let cmd = Command::parse("AAPL|A|S|1|0|1.0").unwrap();
        assert_eq!(cmd, Command::add("AAPL", OrderId(1), Order::sell(Price(1_0000), 0)));
    }
}
