//!
//! The test catalog errors.
//!

use std::path::PathBuf;

use benchmark_analyzer::FlowSet;
use benchmark_analyzer::RunGroupKey;

///
/// The test catalog loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Error reading the catalog file.
    #[error("Reading catalog file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the catalog file.
        path: PathBuf,
    },
    /// The catalog is not a valid YAML list of tests.
    #[error("Catalog parsing: {0}")]
    Parsing(#[from] serde_yaml::Error),
    /// The module working set is empty.
    #[error("Catalog test #{index} {key}: module working set size must be at least 1")]
    WorkingSetSize {
        /// The 0-based test index.
        index: usize,
        /// The test key.
        key: RunGroupKey,
    },
    /// The static expected throughput is not a positive number.
    #[error("Catalog test #{index} {key}: expected TPS {expected_tps} must be positive")]
    ExpectedTps {
        /// The 0-based test index.
        index: usize,
        /// The test key.
        key: RunGroupKey,
        /// The invalid value.
        expected_tps: f64,
    },
    /// Two tests with the same key would run in the same flow.
    #[error("Catalog test #{index} {key}: already defined by test #{previous} for flows {flows}")]
    Conflict {
        /// The 0-based test index.
        index: usize,
        /// The 0-based index of the test defined first.
        previous: usize,
        /// The test key.
        key: RunGroupKey,
        /// The flows both tests are included in.
        flows: FlowSet,
    },
}
