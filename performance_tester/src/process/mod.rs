//!
//! The benchmark subprocess runners.
//!

pub mod error;
pub mod native;

use crate::benchmark::BenchmarkCommand;

use self::error::ProcessError;

///
/// The benchmark subprocess runner.
///
pub trait Runner {
    ///
    /// Runs the command to completion and returns its standard output.
    ///
    fn run(&mut self, command: &BenchmarkCommand) -> Result<String, ProcessError>;
}

impl<R> Runner for &mut R
where
    R: Runner + ?Sized,
{
    fn run(&mut self, command: &BenchmarkCommand) -> Result<String, ProcessError> {
        (**self).run(command)
    }
}

/// The marker of an error line in the benchmark logs.
pub const ERROR_MARKER: &str = " ERROR ";

///
/// Returns the first line with the error marker.
///
pub fn find_error_line(output: &str) -> Option<&str> {
    output.lines().find(|line| line.contains(ERROR_MARKER))
}
