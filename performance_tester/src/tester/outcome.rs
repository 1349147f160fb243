//!
//! The performance test run outcome.
//!

use colored::Colorize;

use benchmark_analyzer::Report;
use benchmark_analyzer::RunGroupInstance;

///
/// The outcome of the whole run.
///
#[derive(Debug, Default)]
pub struct Outcome {
    /// The executed instances, including the warmup and the pipeline stages.
    pub instances: Vec<RunGroupInstance>,
    /// The classification warnings and errors.
    pub report: Report,
    /// Whether the Move end-to-end benchmark has failed.
    pub prerequisite_failed: bool,
}

impl Outcome {
    ///
    /// Whether the run has been successful.
    ///
    pub fn is_successful(&self) -> bool {
        self.report.is_successful() && !self.prerequisite_failed
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.report)?;
        if self.prerequisite_failed {
            writeln!(
                f,
                "{}",
                "Move e2e benchmark failed, failing the job. See logs at the beginning for more details."
                    .bright_red()
                    .bold()
            )?;
        }
        Ok(())
    }
}
