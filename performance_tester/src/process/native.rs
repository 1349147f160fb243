//!
//! The native subprocess runner.
//!

use std::io::BufRead;
use std::io::BufReader;
use std::process::Stdio;

use crate::benchmark::BenchmarkCommand;

use super::error::ProcessError;
use super::Runner;

///
/// Runs the commands as blocking child processes, echoing their output line by line.
///
#[derive(Debug, Default, Clone)]
pub struct NativeRunner {
    /// Whether the output is only printed on failure.
    hide_output: bool,
}

impl NativeRunner {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(hide_output: bool) -> Self {
        Self { hide_output }
    }

    ///
    /// Prints the collected output if it has not been echoed.
    ///
    fn surface(&self, output: &str) {
        if self.hide_output {
            println!("{output}");
        }
    }
}

impl NativeRunner {
    ///
    /// Kills the subprocess whose output can no longer be read, and reaps it.
    ///
    fn terminate(process: &mut std::process::Child) {
        if let Err(error) = process.kill() {
            tracing::warn!(%error, "Subprocess killing failed");
        }
        if let Err(error) = process.wait() {
            tracing::warn!(%error, "Subprocess reaping failed");
        }
    }
}

impl Runner for NativeRunner {
    fn run(&mut self, benchmark: &BenchmarkCommand) -> Result<String, ProcessError> {
        let command_line = benchmark.to_string();
        tracing::info!(command = %command_line, "Executing command and waiting for it to finish");

        which::which(benchmark.program.as_path()).map_err(|error| ProcessError::NotFound {
            program: benchmark.program.clone(),
            error,
        })?;

        let mut command = std::process::Command::from(benchmark);
        command.stdout(Stdio::piped());
        let mut process = command.spawn().map_err(|error| ProcessError::Spawning {
            command: command_line.clone(),
            error,
        })?;

        let mut output = String::new();
        if let Some(stdout) = process.stdout.take() {
            for line in BufReader::new(stdout).lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(error) => {
                        Self::terminate(&mut process);
                        return Err(ProcessError::Reading {
                            command: command_line,
                            error,
                        });
                    }
                };
                if !self.hide_output {
                    println!("{line}");
                }
                output.push_str(line.as_str());
                output.push('\n');
            }
        }

        let status = process.wait().map_err(|error| ProcessError::Reading {
            command: command_line.clone(),
            error,
        })?;
        if !status.success() {
            self.surface(output.as_str());
            return Err(ProcessError::Status {
                command: command_line,
                status,
                output,
            });
        }

        if let Some(line) = super::find_error_line(output.as_str()) {
            tracing::error!("ERROR log line in execution");
            self.surface(output.as_str());
            return Err(ProcessError::ErrorLogged {
                command: command_line,
                line: line.to_owned(),
            });
        }

        Ok(output)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use crate::benchmark::BenchmarkCommand;
    use crate::process::error::ProcessError;
    use crate::process::Runner;

    use super::NativeRunner;

    fn shell(script: &str) -> BenchmarkCommand {
        BenchmarkCommand::new("sh").args(["-c", script])
    }

    #[test]
    fn ok() {
        let output = NativeRunner::new(true)
            .run(&shell("echo first; echo \"Overall TPS: $RATE txn/s\"").env("RATE", "500.0"))
            .expect("Always valid");
        assert_eq!(output, "first\nOverall TPS: 500.0 txn/s\n");
    }

    #[test]
    fn error_status() {
        let result = NativeRunner::new(true).run(&shell("echo partial; exit 3"));
        match result {
            Err(ProcessError::Status { status, output, .. }) => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(output, "partial\n");
            }
            result => panic!("Unexpected result: {result:?}"),
        }
    }

    #[test]
    fn error_logged() {
        let result = NativeRunner::new(true).run(&shell("echo '2024 ERROR [db] broken'"));
        match result {
            Err(ProcessError::ErrorLogged { line, .. }) => {
                assert_eq!(line, "2024 ERROR [db] broken");
            }
            result => panic!("Unexpected result: {result:?}"),
        }
    }

    #[test]
    fn error_reading_kills_subprocess() {
        let directory = tempfile::tempdir().expect("Always valid");
        let marker = directory.path().join("finished");

        let result = NativeRunner::new(true).run(
            &shell("printf 'first\\n\\377\\n'; sleep 1; touch \"$MARKER\"")
                .env("MARKER", &marker.to_string_lossy()),
        );
        assert!(matches!(result, Err(ProcessError::Reading { .. })));

        std::thread::sleep(std::time::Duration::from_secs(2));
        assert!(!marker.exists());
    }

    #[test]
    fn error_not_found() {
        let result =
            NativeRunner::new(true).run(&BenchmarkCommand::new("/nonexistent/benchmark"));
        assert!(matches!(result, Err(ProcessError::NotFound { .. })));
    }
}
