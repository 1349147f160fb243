//!
//! The result table field.
//!

use crate::results::RunResults;

///
/// The metric shown by a single-field result table.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Transactions per second.
    Tps,
    /// Gas per second.
    Gps,
    /// Gas per transaction.
    Gpt,
    /// Storage fee per transaction.
    StorageFee,
    /// The share of the wall time spent in execution.
    FractionInExecution,
    /// The share of the execution time spent in the VM.
    FractionOfExecutionInVm,
}

impl Field {
    /// The single-field tables in the order they are printed.
    pub const ALL: [Self; 6] = [
        Self::Tps,
        Self::Gps,
        Self::Gpt,
        Self::StorageFee,
        Self::FractionInExecution,
        Self::FractionOfExecutionInVm,
    ];

    ///
    /// The column header.
    ///
    pub fn header(self) -> &'static str {
        match self {
            Self::Tps => "t/s",
            Self::Gps => "g/s",
            Self::Gpt => "gas/txn",
            Self::StorageFee => "storage fee/txn",
            Self::FractionInExecution => "exe/total",
            Self::FractionOfExecutionInVm => "vm/exe",
        }
    }

    ///
    /// Whether the table has a column per execution-only sweep thread count.
    ///
    /// The per-transaction metrics do not depend on the parallelism.
    ///
    pub fn by_levels(self) -> bool {
        !matches!(self, Self::Gpt | Self::StorageFee)
    }

    ///
    /// The formatted cell value.
    ///
    pub fn format(self, results: &RunResults) -> String {
        match self {
            Self::Tps => format_integer(results.tps),
            Self::Gps => format_integer(results.gps),
            Self::Gpt => format_integer(results.gpt),
            Self::StorageFee => format_integer(results.storage_fee_pt),
            Self::FractionInExecution => format_fraction(results.fraction_in_execution),
            Self::FractionOfExecutionInVm => format_fraction(results.fraction_of_execution_in_vm),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header())
    }
}

///
/// Rounds the value to the nearest integer.
///
pub fn format_integer(value: f64) -> String {
    format!("{}", value.round() as i64)
}

///
/// Rounds the value to three decimal places.
///
pub fn format_fraction(value: f64) -> String {
    format!("{}", (value * 1000.0).round() / 1000.0)
}
