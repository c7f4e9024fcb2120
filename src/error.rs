//! Error types, split by severity.
//!
//! [`ValidationError`] means the input line was bad. [`InternalInconsistency`]
//! means the book's own bookkeeping disagreed with itself. Neither aborts a
//! run by default; the driver logs them on separate tags.

use thiserror::Error;

use crate::{OrderId, Price, Quantity, Symbol};

/// Failure to read one field from a `|`-delimited line.
///
/// `field` is the zero-based position of the segment on the line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field {field} requested past the end of the line")]
    FieldExhausted { field: usize },

    #[error("field {field} is not a number: '{text}'")]
    NumericParseFailure { field: usize, text: String },

    #[error("field {field} must be one character, got {len}")]
    WrongLength { field: usize, len: usize },
}

/// Rejection caused by bad input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown command '{0}'")]
    UnknownCommand(char),

    #[error("unknown side '{0}'")]
    UnknownSide(char),

    #[error("malformed field: {0}")]
    MalformedField(#[from] FieldError),

    #[error("negative size {0}")]
    NegativeSize(i64),

    #[error("delete of unknown order {0}")]
    UnknownId(OrderId),

    #[error("delete of order {id} on unknown symbol {symbol}")]
    UnknownSymbol { symbol: Symbol, id: OrderId },

    #[error("duplicate order entry {0}")]
    DuplicateId(OrderId),

    #[error("size overflow at {price}: level holds {held}, adding {added}")]
    SizeOverflow {
        price: Price,
        held: Quantity,
        added: Quantity,
    },
}

/// Bookkeeping defect: the registry and the aggregates disagree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InternalInconsistency {
    #[error("over-delete at {price}: level held {held}, removed {removed}")]
    OverDelete {
        price: Price,
        held: Quantity,
        removed: Quantity,
    },

    #[error("delete against missing level {price}")]
    MissingLevel { price: Price },
}

/// Any per-line failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Internal(#[from] InternalInconsistency),
}

impl Error {
    /// Returns true for bookkeeping defects rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}

impl From<FieldError> for Error {
    fn from(e: FieldError) -> Self {
        Error::Validation(ValidationError::MalformedField(e))
    }
}
