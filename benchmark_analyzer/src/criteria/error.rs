//!
//! The criteria resolution errors.
//!

use crate::model::run_group::key::RunGroupKey;

///
/// The criteria resolution error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CriteriaError {
    /// The test has neither a static expected throughput nor a calibration entry.
    #[error("{key} has neither a static expected TPS nor a calibration entry")]
    Uncalibrated {
        /// The test key.
        key: RunGroupKey,
    },
}
