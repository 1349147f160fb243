//!
//! The subprocess errors.
//!

use std::path::PathBuf;

///
/// The benchmark subprocess error.
///
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// The executable cannot be found.
    #[error("The `{program:?}` executable not found: {error}")]
    NotFound {
        /// The executable.
        program: PathBuf,
        /// The lookup error.
        error: which::Error,
    },
    /// The subprocess cannot be started.
    #[error("`{command}` subprocess spawning error: {error}")]
    Spawning {
        /// The command line.
        command: String,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The subprocess output cannot be read.
    #[error("`{command}` subprocess output reading error: {error}")]
    Reading {
        /// The command line.
        command: String,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The subprocess has exited unsuccessfully.
    #[error("`{command}` subprocess failed with {status}")]
    Status {
        /// The command line.
        command: String,
        /// The exit status.
        status: std::process::ExitStatus,
        /// The collected output.
        output: String,
    },
    /// The subprocess has succeeded, but logged an error.
    #[error("`{command}` subprocess logged an error: {line}")]
    ErrorLogged {
        /// The command line.
        command: String,
        /// The first error line.
        line: String,
    },
}
