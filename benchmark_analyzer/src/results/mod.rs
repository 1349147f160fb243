//!
//! The benchmark run results.
//!

pub mod error;
pub mod metric;

use self::error::ExtractionError;
use self::metric::Metric;

///
/// The metrics of one benchmark run extracted from its output.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct RunResults {
    /// Transactions per second.
    pub tps: f64,
    /// Gas per second.
    pub gps: f64,
    /// Effective gas per second.
    pub effective_gps: f64,
    /// IO gas per second.
    pub io_gps: f64,
    /// Execution gas per second.
    pub execution_gps: f64,
    /// Gas per transaction.
    pub gpt: f64,
    /// Storage fee per transaction, in octas.
    pub storage_fee_pt: f64,
    /// Output bytes per second.
    pub output_bps: f64,
    /// The share of the wall time spent in execution.
    pub fraction_in_execution: f64,
    /// The share of the execution time spent in the VM.
    pub fraction_of_execution_in_vm: f64,
    /// The share of the wall time spent in commit.
    pub fraction_in_commit: f64,
}

impl RunResults {
    /// The prefix of the whole run summary lines.
    pub const PREFIX_OVERALL: &'static str = "Overall";

    /// The prefix of the execution-only run summary lines.
    pub const PREFIX_OVERALL_EXECUTION: &'static str = "Overall execution";

    ///
    /// The prefix of the pipeline stage summary lines.
    ///
    pub fn stage_prefix(index: usize) -> String {
        format!("Staged execution: stage {index}:")
    }

    ///
    /// Extracts the results reported on the lines starting with `prefix`.
    ///
    pub fn extract(output: &str, prefix: &str) -> Result<Self, ExtractionError> {
        Ok(Self {
            tps: Metric::Tps.find(output, prefix)?,
            gps: Metric::Gps.find(output, prefix)?,
            effective_gps: Metric::EffectiveGps.find(output, prefix)?,
            io_gps: Metric::IoGps.find(output, prefix)?,
            execution_gps: Metric::ExecutionGps.find(output, prefix)?,
            gpt: Metric::Gpt.find(output, prefix)?,
            storage_fee_pt: Metric::StorageFee.find(output, prefix)?,
            output_bps: Metric::OutputBps.find(output, prefix)?,
            fraction_in_execution: Metric::FractionInExecution.find(output, prefix)?,
            fraction_of_execution_in_vm: Metric::FractionOfExecutionInVm.find(output, prefix)?,
            fraction_in_commit: Metric::FractionInCommit.find(output, prefix)?,
        })
    }

    ///
    /// Extracts the results of the warmup database creation.
    ///
    /// Only the account creation throughput is reported there.
    ///
    pub fn extract_create_db(output: &str) -> Result<Self, ExtractionError> {
        Ok(Self {
            tps: Metric::CreateDbTps.find(output, Self::PREFIX_OVERALL)?,
            ..Self::default()
        })
    }

    ///
    /// Extracts the results of the pipeline stages, numbered contiguously from zero.
    ///
    pub fn extract_stages(output: &str) -> Result<Vec<(usize, Self)>, ExtractionError> {
        let mut stages = Vec::new();
        for index in 0.. {
            let prefix = Self::stage_prefix(index);
            if !output.contains(prefix.as_str()) {
                break;
            }
            stages.push((index, Self::extract(output, prefix.as_str())?));
        }
        Ok(stages)
    }
}
