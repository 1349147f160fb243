//!
//! The executed run group instance.
//!

use std::collections::BTreeMap;

use crate::model::run_group::key::RunGroupKey;
use crate::results::RunResults;

///
/// One executed benchmark, that is a row of the result tables.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RunGroupInstance {
    /// The configuration identity.
    pub key: RunGroupKey,
    /// The results of the main run.
    pub single_node_result: RunResults,
    /// The execution-only results keyed by the number of execution threads.
    pub number_of_threads_results: BTreeMap<usize, RunResults>,
    /// The block size used.
    pub block_size: usize,
    /// The expected throughput.
    pub expected_tps: f64,
}

impl RunGroupInstance {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        key: RunGroupKey,
        single_node_result: RunResults,
        number_of_threads_results: BTreeMap<usize, RunResults>,
        block_size: usize,
        expected_tps: f64,
    ) -> Self {
        Self {
            key,
            single_node_result,
            number_of_threads_results,
            block_size,
            expected_tps,
        }
    }
}
