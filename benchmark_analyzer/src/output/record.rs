//!
//! The per-test JSON record.
//!

use crate::criteria::Criteria;
use crate::flow::Flow;
use crate::model::executor_type::ExecutorType;
use crate::model::run_group::key::RunGroupKey;
use crate::results::RunResults;

///
/// The one-line JSON record of a test, grepped out of the logs by the dashboards.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Record<'a> {
    /// The marker the log aggregation filters on.
    pub grep: &'static str,
    /// Where the run was launched from.
    pub source: &'a str,
    /// The machine name.
    pub runner_name: &'a str,
    /// The transaction type.
    pub transaction_type: &'a str,
    /// The number of modules the workload is spread over.
    pub module_working_set_size: usize,
    /// The executor type.
    pub executor_type: ExecutorType,
    /// The block size used.
    pub block_size: usize,
    /// The number of execution threads of the main run.
    pub execution_threads: usize,
    /// The number of accounts created by the warmup.
    pub warmup_num_accounts: u64,
    /// The expected median throughput.
    pub expected_tps: f64,
    /// The regression threshold.
    pub expected_min_tps: f64,
    /// The improvement threshold.
    pub expected_max_tps: f64,
    /// Whether threshold violations are downgraded to warnings.
    pub waived: bool,
    /// The measured throughput.
    pub tps: f64,
    /// The measured gas per second.
    pub gps: f64,
    /// The measured gas per transaction.
    pub gpt: f64,
    /// The version of the benchmark code, bumped on changes invalidating the history.
    pub code_perf_version: &'static str,
    /// The active flow, in the `Flow.<NAME>` notation of the historical records.
    pub flow: String,
    /// The position of the test in the catalog.
    pub test_index: usize,
}

impl<'a> Record<'a> {
    /// The log aggregation marker.
    pub const GREP: &'static str = "grep_json_single_node_perf";

    /// The benchmark code version.
    pub const CODE_PERF_VERSION: &'static str = "v6";

    ///
    /// A shortcut constructor.
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: &'a str,
        runner_name: &'a str,
        key: &'a RunGroupKey,
        block_size: usize,
        execution_threads: usize,
        warmup_num_accounts: u64,
        criteria: &Criteria,
        waived: bool,
        results: &RunResults,
        flow: Flow,
        test_index: usize,
    ) -> Self {
        Self {
            grep: Self::GREP,
            source,
            runner_name,
            transaction_type: key.transaction_type.as_str(),
            module_working_set_size: key.module_working_set_size,
            executor_type: key.executor_type,
            block_size,
            execution_threads,
            warmup_num_accounts,
            expected_tps: criteria.expected_tps,
            expected_min_tps: criteria.min_tps,
            expected_max_tps: criteria.max_tps,
            waived,
            tps: results.tps,
            gps: results.gps,
            gpt: results.gpt,
            code_perf_version: Self::CODE_PERF_VERSION,
            flow: format!("Flow.{flow}"),
            test_index,
        }
    }

    ///
    /// Serializes the record into a single line.
    ///
    pub fn to_json_line(&self) -> anyhow::Result<String> {
        serde_json::to_string(self)
            .map_err(|error| anyhow::anyhow!("JSON record serialization: {error}"))
    }
}
