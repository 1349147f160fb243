//!
//! The benchmark output extraction errors.
//!

///
/// The benchmark output extraction error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractionError {
    /// No line reports the metric.
    #[error("No `{prefix}` {metric} value found in the benchmark output")]
    Missing {
        /// The metric name.
        metric: &'static str,
        /// The line prefix.
        prefix: String,
    },
    /// Several lines report the metric, while exactly one is expected.
    #[error("Multiple `{prefix}` {metric} values found in the benchmark output: {values:?}")]
    Ambiguous {
        /// The metric name.
        metric: &'static str,
        /// The line prefix.
        prefix: String,
        /// All the values found.
        values: Vec<String>,
    },
    /// The metric value is not a number.
    #[error("Invalid `{prefix}` {metric} value `{value}` in the benchmark output")]
    Number {
        /// The metric name.
        metric: &'static str,
        /// The line prefix.
        prefix: String,
        /// The raw value.
        value: String,
    },
}
