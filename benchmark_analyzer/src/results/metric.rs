//!
//! The benchmark output metric.
//!

use regex::Regex;

use super::error::ExtractionError;

///
/// The metric reported by the benchmark on a line of its output.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Transactions per second.
    Tps,
    /// Gas per second.
    Gps,
    /// Effective gas per second.
    EffectiveGps,
    /// IO gas per second.
    IoGps,
    /// Execution gas per second.
    ExecutionGps,
    /// Gas per transaction.
    Gpt,
    /// Storage fee per transaction.
    StorageFee,
    /// Output bytes per second.
    OutputBps,
    /// The share of the wall time spent in execution.
    FractionInExecution,
    /// The share of the execution time spent in the VM.
    FractionOfExecutionInVm,
    /// The share of the wall time spent in commit.
    FractionInCommit,
    /// Accounts created per second by the warmup.
    CreateDbTps,
}

impl Metric {
    /// The unsigned decimal number pattern.
    const NUMBER: &'static str = r"(\d+\.?\d*)";

    /// The signed decimal number pattern.
    const SIGNED_NUMBER: &'static str = r"(-?\d+\.?\d*)";

    ///
    /// The metric name used in diagnostics.
    ///
    pub fn name(self) -> &'static str {
        match self {
            Self::Tps => "TPS",
            Self::Gps => "GPS",
            Self::EffectiveGps => "effectiveGPS",
            Self::IoGps => "ioGPS",
            Self::ExecutionGps => "executionGPS",
            Self::Gpt => "GPT",
            Self::StorageFee => "storage fee",
            Self::OutputBps => "output",
            Self::FractionInExecution => "fraction in execution",
            Self::FractionOfExecutionInVm => "fraction of execution in VM",
            Self::FractionInCommit => "fraction in commit",
            Self::CreateDbTps => "account creation TPS",
        }
    }

    ///
    /// Whether the metric may be reported several times, the last report being the final one.
    ///
    /// The timing fractions are emitted with each progress report, while the rates are
    /// emitted exactly once at the end.
    ///
    pub fn is_repeated(self) -> bool {
        matches!(
            self,
            Self::FractionInExecution | Self::FractionOfExecutionInVm | Self::FractionInCommit
        )
    }

    ///
    /// The line pattern following the prefix.
    ///
    fn pattern(self) -> String {
        let number = Self::NUMBER;
        match self {
            Self::Tps => format!(r" TPS: {number} txn/s"),
            Self::Gps => format!(r" GPS: {number} gas/s"),
            Self::EffectiveGps => format!(r" effectiveGPS: {number} gas/s"),
            Self::IoGps => format!(r" ioGPS: {number} gas/s"),
            Self::ExecutionGps => format!(r" executionGPS: {number} gas/s"),
            Self::Gpt => format!(r" GPT: {number} gas/txn"),
            Self::StorageFee => format!(r" Storage fee: {} octas/txn", Self::SIGNED_NUMBER),
            Self::OutputBps => format!(r" output: {number} bytes/s"),
            Self::FractionInExecution => format!(r" fraction of total: {number} in execution"),
            Self::FractionOfExecutionInVm => format!(r" fraction of execution {number} in VM"),
            Self::FractionInCommit => format!(r" fraction of total: {number} in commit"),
            Self::CreateDbTps => format!(r" TPS: create_db: account creation: {number} txn/s"),
        }
    }

    ///
    /// Finds the metric value on the lines starting with `prefix`.
    ///
    pub fn find(self, output: &str, prefix: &str) -> Result<f64, ExtractionError> {
        let pattern = format!("{}{}", regex::escape(prefix), self.pattern());
        let regex = Regex::new(pattern.as_str()).expect("Always valid");

        let mut values = regex
            .captures_iter(output)
            .filter_map(|captures| captures.get(1))
            .map(|value| value.as_str().to_owned())
            .collect::<Vec<String>>();

        let value = match values.len() {
            0 => {
                return Err(ExtractionError::Missing {
                    metric: self.name(),
                    prefix: prefix.to_owned(),
                })
            }
            1 => values.remove(0),
            _ if self.is_repeated() => values.pop().expect("Always exists"),
            _ => {
                return Err(ExtractionError::Ambiguous {
                    metric: self.name(),
                    prefix: prefix.to_owned(),
                    values,
                })
            }
        };

        value.parse::<f64>().map_err(|_| ExtractionError::Number {
            metric: self.name(),
            prefix: prefix.to_owned(),
            value,
        })
    }
}
