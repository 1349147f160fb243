//!
//! The benchmark command.
//!

use std::path::Path;
use std::path::PathBuf;

use benchmark_analyzer::ExecutorType;
use benchmark_analyzer::RunGroupConfig;

use crate::config::Config;

///
/// The command line of a build or benchmark subprocess.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkCommand {
    /// The executable.
    pub program: PathBuf,
    /// The arguments.
    pub arguments: Vec<String>,
    /// The environment variables set in addition to the inherited ones.
    pub environment: Vec<(String, String)>,
    /// The working directory, if different from the current one.
    pub current_dir: Option<PathBuf>,
}

impl BenchmarkCommand {
    /// The executor benchmark package and executable name.
    pub const EXECUTOR_BENCHMARK: &'static str = "aptos-executor-benchmark";

    /// The Move end-to-end benchmark package and executable name.
    pub const MOVE_E2E_BENCHMARK: &'static str = "aptos-move-e2e-benchmark";

    /// The cargo executable name.
    pub const CARGO: &'static str = "cargo";

    /// The database directory name inside the run directory.
    pub const DATA_DIRECTORY: &'static str = "db";

    /// The checkpoint directory name inside the run directory.
    pub const CHECKPOINT_DIRECTORY: &'static str = "cp";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            arguments: Vec::new(),
            environment: Vec::new(),
            current_dir: None,
        }
    }

    ///
    /// Appends an argument.
    ///
    pub fn arg(mut self, argument: impl ToString) -> Self {
        self.arguments.push(argument.to_string());
        self
    }

    ///
    /// Appends the arguments.
    ///
    pub fn args<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.arguments
            .extend(arguments.into_iter().map(|argument| argument.to_string()));
        self
    }

    ///
    /// Sets an environment variable.
    ///
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.environment.push((key.to_owned(), value.to_owned()));
        self
    }

    ///
    /// Sets the working directory.
    ///
    pub fn current_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(path.into());
        self
    }

    ///
    /// Builds the package with the configured profile.
    ///
    pub fn cargo_build(config: &Config, package: &str) -> Self {
        Self::new(Self::CARGO)
            .arg("build")
            .args(config.build_profile.cargo_arguments())
            .args(["--package", package])
            .current_dir(config.workspace.as_path())
    }

    ///
    /// Runs the Move end-to-end benchmark.
    ///
    pub fn move_e2e(config: &Config) -> Self {
        Self::benchmark(config, Self::MOVE_E2E_BENCHMARK)
    }

    ///
    /// Creates the warmup database in the run directory.
    ///
    pub fn create_db(config: &Config, run_directory: &Path) -> Self {
        Self::benchmark(config, Self::EXECUTOR_BENCHMARK)
            .arg("--block-size")
            .arg(config.max_block_size)
            .arg("--execution-threads")
            .arg(config.execution_threads)
            .args(config.db_flags())
            .args(config.pruner_flags())
            .arg("create-db")
            .args(config.feature_flags())
            .arg("--data-dir")
            .arg(Self::path(run_directory.join(Self::DATA_DIRECTORY)))
            .arg("--num-accounts")
            .arg(config.num_accounts())
    }

    ///
    /// Runs the execution-only sweep step with the number of execution threads.
    ///
    pub fn sweep_run(
        config: &Config,
        test: &RunGroupConfig,
        block_size: usize,
        execution_threads: usize,
        run_directory: &Path,
    ) -> Self {
        Self::benchmark(config, Self::EXECUTOR_BENCHMARK)
            .arg("--execution-threads")
            .arg(execution_threads)
            .arg("--skip-commit")
            .args(Self::run_executor_arguments(
                config,
                test,
                block_size,
                run_directory,
            ))
            .arg("--blocks")
            .arg(Config::NUM_BLOCKS_DETAILED)
    }

    ///
    /// Runs the main benchmark of the test.
    ///
    pub fn main_run(
        config: &Config,
        test: &RunGroupConfig,
        block_size: usize,
        run_directory: &Path,
    ) -> Self {
        Self::benchmark(config, Self::EXECUTOR_BENCHMARK)
            .arg("--execution-threads")
            .arg(config.execution_threads)
            .args(Self::run_executor_arguments(
                config,
                test,
                block_size,
                run_directory,
            ))
            .arg("--blocks")
            .arg(config.num_blocks)
    }

    ///
    /// The arguments of the executor, the workload and the database shared by the test runs.
    ///
    fn run_executor_arguments(
        config: &Config,
        test: &RunGroupConfig,
        block_size: usize,
        run_directory: &Path,
    ) -> Vec<String> {
        let mut arguments: Vec<String> = Vec::with_capacity(64);
        let mut push = |values: &[&str]| {
            arguments.extend(values.iter().map(|value| value.to_string()));
        };

        match test.key.executor_type {
            ExecutorType::VM => push(&["--transactions-per-sender", "1"]),
            ExecutorType::Native => push(&[
                "--use-native-executor",
                "--transactions-per-sender",
                "1",
            ]),
            ExecutorType::Sharded => {
                let shards = config.execution_threads.to_string();
                push(&["--num-executor-shards", shards.as_str()]);
                push(test.key_extra.sharding_traffic_flags().as_slice());
            }
        }
        if config.generate_then_execute() {
            push(&["--generate-then-execute"]);
        }
        let block_size = block_size.to_string();
        push(&["--block-size", block_size.as_str()]);
        push(config.db_flags());
        push(config.pruner_flags());
        push(&["run-executor"]);
        push(config.feature_flags());

        if let Some((transaction_types, transaction_weights)) =
            test.key_extra.workload(test.key.transaction_type.as_str())
        {
            push(&["--transaction-type"]);
            push(transaction_types.as_slice());
            push(&["--transaction-weights"]);
            push(transaction_weights.as_slice());
        }

        let module_working_set_size = test.key.module_working_set_size.to_string();
        let main_signer_accounts = config.main_signer_accounts().to_string();
        let additional_dst_pool_accounts = config.additional_dst_pool_accounts().to_string();
        let data_dir = Self::path(run_directory.join(Self::DATA_DIRECTORY));
        let checkpoint_dir = Self::path(run_directory.join(Self::CHECKPOINT_DIRECTORY));
        push(&[
            "--module-working-set-size",
            module_working_set_size.as_str(),
            "--main-signer-accounts",
            main_signer_accounts.as_str(),
            "--additional-dst-pool-accounts",
            additional_dst_pool_accounts.as_str(),
            "--data-dir",
            data_dir.as_str(),
            "--checkpoint-dir",
            checkpoint_dir.as_str(),
        ]);

        arguments
    }

    ///
    /// Runs a built benchmark executable with the backtraces enabled.
    ///
    fn benchmark(config: &Config, executable: &str) -> Self {
        Self::new(config.executable(executable)).env("RUST_BACKTRACE", "1")
    }

    ///
    /// Converts the path into an argument.
    ///
    fn path(path: PathBuf) -> String {
        path.to_string_lossy().into_owned()
    }
}

impl From<&BenchmarkCommand> for std::process::Command {
    fn from(benchmark: &BenchmarkCommand) -> Self {
        let mut command = std::process::Command::new(benchmark.program.as_path());
        command.args(benchmark.arguments.as_slice());
        command.envs(
            benchmark
                .environment
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );
        if let Some(current_dir) = benchmark.current_dir.as_ref() {
            command.current_dir(current_dir);
        }
        command
    }
}

impl std::fmt::Display for BenchmarkCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in self.environment.iter() {
            write!(f, "{key}={value} ")?;
        }
        write!(f, "{}", self.program.to_string_lossy())?;
        for argument in self.arguments.iter() {
            write!(f, " {argument}")?;
        }
        Ok(())
    }
}
