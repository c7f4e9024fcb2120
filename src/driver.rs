//! Driver: feeds input lines through the parser into a [`BookCollection`].
//!
//! One bad line never aborts a run. Validation failures are logged at
//! `warn` with the `Error processing:` tag, internal inconsistencies at
//! `error` with the `Internal Error processing:` tag. Only strict mode turns
//! an internal inconsistency into a fatal [`RunError`].

use std::io::{self, BufRead};

use log::{debug, error, info, warn};

use crate::collection::Applied;
use crate::error::{Error, InternalInconsistency, ValidationError};
use crate::{BookCollection, Command, Config};

/// Failure that ends a run early.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("strict mode: internal inconsistency on line {line_number} '{line}': {source}")]
    Strict {
        line_number: u64,
        line: String,
        source: InternalInconsistency,
    },
}

/// Per-run counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Lines read, including blank ones
    pub lines: u64,
    /// Empty lines, skipped without a diagnostic
    pub blank: u64,
    /// Commands applied (duplicate-id adds included)
    pub applied: u64,
    /// Lines rejected as bad input
    pub validation_errors: u64,
    /// Adds that overwrote a live id
    pub duplicate_ids: u64,
    /// Lines that hit an internal inconsistency
    pub internal_errors: u64,
}

impl RunStats {
    /// Lines rejected for any reason.
    pub fn rejected(&self) -> u64 {
        self.validation_errors + self.internal_errors
    }
}

/// Owns the books for one run and applies lines to them in order.
#[derive(Debug, Default)]
pub struct Driver {
    books: BookCollection,
    stats: RunStats,
    strict: bool,
}

impl Driver {
    /// Create a driver with empty books.
    pub fn new(config: &Config) -> Self {
        Self {
            books: BookCollection::new(),
            stats: RunStats::default(),
            strict: config.strict,
        }
    }

    /// Process every line of `reader`, then log a summary.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so the line still goes
    /// through the normal parse path.
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<RunStats, RunError> {
        for raw in reader.split(b'\n') {
            let raw = raw?;
            let line = String::from_utf8_lossy(&raw);
            self.process_line(&line)?;
        }

        let s = &self.stats;
        info!(
            "processed {} lines: {} applied, {} blank, {} rejected ({} validation, {} internal), {} duplicate ids, {} symbols",
            s.lines,
            s.applied,
            s.blank,
            s.rejected(),
            s.validation_errors,
            s.internal_errors,
            s.duplicate_ids,
            self.books.len()
        );
        Ok(self.stats)
    }

    /// Parse and apply one line.
    ///
    /// Returns an error only for strict-mode aborts.
    pub fn process_line(&mut self, line: &str) -> Result<(), RunError> {
        self.stats.lines += 1;
        let line_number = self.stats.lines;
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            self.stats.blank += 1;
            return Ok(());
        }

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                self.reject(line, line_number, &e);
                return Ok(());
            }
        };

        match (self.books.apply(&command), &command) {
            (Ok(Applied::Added(outcome)), Command::Add { id, .. }) => {
                self.stats.applied += 1;
                if let Some(displaced) = outcome.displaced {
                    self.stats.duplicate_ids += 1;
                    warn!(
                        "Duplicate order entry (line {line_number}): {}; displaced {} {} @ {} still counted",
                        ValidationError::DuplicateId(*id),
                        displaced.side,
                        displaced.size,
                        displaced.price
                    );
                }
            }
            (Ok(applied), _) => {
                self.stats.applied += 1;
                debug!("line {line_number}: {applied:?}");
            }
            (Err(Error::Validation(e)), _) => self.reject(line, line_number, &e),
            (Err(Error::Internal(e)), _) => {
                self.stats.internal_errors += 1;
                error!("Internal Error processing: {line} (line {line_number}): {e}");
                if self.strict {
                    return Err(RunError::Strict {
                        line_number,
                        line: line.to_owned(),
                        source: e,
                    });
                }
            }
        }
        Ok(())
    }

    fn reject(&mut self, line: &str, line_number: u64, e: &ValidationError) {
        self.stats.validation_errors += 1;
        warn!("Error processing: {line} (line {line_number}): {e}");
    }

    /// The books built so far.
    pub fn books(&self) -> &BookCollection {
        &self.books
    }

    /// Counters so far.
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Consume the driver, returning its books.
    pub fn into_books(self) -> BookCollection {
        self.books
    }
}
