//!
//! The single-node performance tester arguments.
//!

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::ArgAction;
use clap::Parser;

use benchmark_analyzer::Flow;
use performance_tester::BuildProfile;
use performance_tester::Config;
use performance_tester::Source;

///
/// The single-node performance tester arguments.
///
/// Every option falls back to the environment variable CI jobs set.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The active flow.
    /// Available arguments: `LAND_BLOCKING`, `CONTINUOUS`, `REPRESENTATIVE`, `MAINNET`,
    /// `MAINNET_LARGE_DB`, `AGG_V2`, `RESOURCE_GROUPS`.
    #[arg(long, env = "FLOW", default_value_t = Flow::LandBlocking)]
    pub flow: Flow,

    /// Where the run has been launched from, copied into the JSON records.
    /// Available arguments: `ADHOC`, `CI`, `LOCAL`.
    #[arg(long, env = "SOURCE", default_value_t = Source::Local)]
    pub source: Source,

    /// The machine name, copied into the JSON records.
    #[arg(long, env = "RUNNER_NAME", default_value = Config::DEFAULT_RUNNER_NAME)]
    pub runner_name: String,

    /// The upper bound of the block size.
    #[arg(long, env = "MAX_BLOCK_SIZE", default_value_t = Config::DEFAULT_MAX_BLOCK_SIZE)]
    pub max_block_size: usize,

    /// The number of blocks of the main run of each test.
    #[arg(long, env = "NUM_BLOCKS_PER_TEST", default_value_t = Config::DEFAULT_NUM_BLOCKS)]
    pub num_blocks: usize,

    /// The number of accounts created by the warmup.
    /// Is 100 million for `MAINNET_LARGE_DB` and 2 million otherwise by default.
    #[arg(long, env = "NUM_INIT_ACCOUNTS")]
    pub num_init_accounts: Option<u64>,

    /// The number of execution threads of the main run.
    #[arg(
        long,
        env = "NUMBER_OF_EXECUTION_THREADS",
        default_value_t = Config::DEFAULT_EXECUTION_THREADS
    )]
    pub execution_threads: usize,

    /// Runs the execution-only sweep over the thread counts before each test.
    #[arg(
        long,
        env = "DETAILED",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub detailed: bool,

    /// Builds the executables with the release profile instead of the performance one.
    #[arg(
        long,
        env = "RELEASE_BUILD",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub release_build: bool,

    /// Uses the production database configuration.
    #[arg(
        long,
        env = "PROD_DB_FLAGS",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub prod_db_flags: bool,

    /// Keeps the APT fungible asset store features disabled and runs the native executor tests.
    #[arg(
        long,
        env = "DISABLE_FA_APT",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub disable_fa_apt: bool,

    /// Enables the database pruners.
    #[arg(
        long,
        env = "ENABLE_PRUNER",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub enable_pruner: bool,

    /// Hides the benchmark output and prints the tables only at the end.
    #[arg(
        long,
        env = "HIDE_OUTPUT",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub hide_output: bool,

    /// Skips the Move end-to-end benchmark.
    #[arg(
        long,
        env = "SKIP_MOVE_E2E",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub skip_move_e2e: bool,

    /// Path to the calibration table.
    /// The table shipped with the tester is used by default.
    #[arg(long)]
    pub calibration: Option<PathBuf>,

    /// Path to the test catalog.
    /// The catalog shipped with the tester is used by default.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// The workspace the benchmark executables are built in.
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Uses the executables already present in the build folder.
    #[arg(long)]
    pub skip_build: bool,

    /// Prints the tests selected for the flow with their criteria, and exits.
    #[arg(long)]
    pub list: bool,
}

impl Arguments {
    ///
    /// Validate the arguments passed from user, checking invariants that are not
    /// expressed in the type system.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.max_block_size == 0 {
            anyhow::bail!("The maximal block size must be positive");
        }
        if arguments.num_blocks == 0 {
            anyhow::bail!("The number of blocks per test must be positive");
        }
        if Config::required_accounts(arguments.max_block_size, arguments.num_blocks).is_none() {
            anyhow::bail!(
                "The maximal block size {} with {} blocks per test overflows the number of accounts",
                arguments.max_block_size,
                arguments.num_blocks
            );
        }
        if arguments.execution_threads == 0 {
            anyhow::bail!("The number of execution threads must be positive");
        }
        if !arguments.workspace.is_dir() {
            anyhow::bail!(
                "The workspace `{}` is not a directory",
                arguments.workspace.display()
            );
        }
        for path in [&arguments.calibration, &arguments.catalog]
            .into_iter()
            .flatten()
        {
            if !path.is_file() {
                anyhow::bail!("The file `{}` does not exist", path.display());
            }
        }

        Ok(arguments)
    }

    ///
    /// Captures the process configuration.
    ///
    pub fn config(&self) -> Config {
        let mut config = Config::new(self.flow);
        config.source = self.source;
        config.runner_name = self.runner_name.clone();
        config.max_block_size = self.max_block_size;
        config.num_blocks = self.num_blocks;
        if let Some(num_init_accounts) = self.num_init_accounts {
            config.num_init_accounts = num_init_accounts;
        }
        config.execution_threads = self.execution_threads;
        config.detailed = self.detailed;
        config.build_profile = if self.release_build {
            BuildProfile::Release
        } else {
            BuildProfile::Performance
        };
        config.prod_db_flags = self.prod_db_flags;
        config.disable_fa_apt = self.disable_fa_apt;
        config.enable_pruner = self.enable_pruner;
        config.hide_output = self.hide_output;
        config.skip_move_e2e = self.skip_move_e2e;
        config.skip_build = self.skip_build;
        config.workspace = self.workspace.clone();
        config
    }
}
