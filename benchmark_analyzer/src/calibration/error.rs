//!
//! The calibration table errors.
//!

use std::path::PathBuf;

use crate::model::run_group::key::RunGroupKey;

///
/// The calibration entry invariant violation.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryError {
    /// The entry is not backed by any historical run.
    #[error("count must be at least 1")]
    ZeroCount,
    /// The reference throughput is not a positive number.
    #[error("expected TPS {0} must be positive")]
    ExpectedTps(f64),
    /// The observed ratios do not enclose the reference.
    #[error("ratios must satisfy 0 < min_ratio ({min_ratio}) <= 1 <= max_ratio ({max_ratio})")]
    Ratios {
        /// The minimal observed ratio.
        min_ratio: f64,
        /// The maximal observed ratio.
        max_ratio: f64,
    },
}

///
/// The calibration table loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum CalibrationError {
    /// Error reading the calibration file.
    #[error("Reading calibration file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the calibration file.
        path: PathBuf,
    },
    /// The row has too few columns.
    #[error("Calibration line {line}: expected at least {expected} columns, found {found}")]
    Columns {
        /// The 1-based line number.
        line: usize,
        /// The minimal number of columns.
        expected: usize,
        /// The actual number of columns.
        found: usize,
    },
    /// A column value cannot be parsed.
    #[error("Calibration line {line}: invalid {column} `{value}`")]
    Value {
        /// The 1-based line number.
        line: usize,
        /// The column name.
        column: &'static str,
        /// The raw value.
        value: String,
    },
    /// The row violates the entry invariants.
    #[error("Calibration line {line}: {error}")]
    Entry {
        /// The 1-based line number.
        line: usize,
        /// The invariant violation.
        error: EntryError,
    },
    /// The key has already been calibrated by a previous row.
    #[error("Calibration line {line}: duplicate entry for {key}")]
    Duplicate {
        /// The 1-based line number.
        line: usize,
        /// The duplicated key.
        key: RunGroupKey,
    },
}
