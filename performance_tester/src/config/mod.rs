//!
//! The performance tester configuration.
//!

pub mod build_profile;
pub mod source;

use std::path::PathBuf;

use benchmark_analyzer::Flow;
use benchmark_analyzer::NoiseLimits;

use self::build_profile::BuildProfile;
use self::source::Source;

///
/// The process configuration, captured once at startup.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The active flow.
    pub flow: Flow,
    /// Where the run has been launched from.
    pub source: Source,
    /// The machine name.
    pub runner_name: String,
    /// The upper bound of the block size.
    pub max_block_size: usize,
    /// The number of blocks of the main run.
    pub num_blocks: usize,
    /// The requested number of accounts created by the warmup.
    pub num_init_accounts: u64,
    /// The number of execution threads of the main run.
    pub execution_threads: usize,
    /// Whether to run the execution-only thread sweep.
    pub detailed: bool,
    /// The profile the benchmark executables are built with.
    pub build_profile: BuildProfile,
    /// Whether to use the production database configuration.
    pub prod_db_flags: bool,
    /// Whether to keep the APT fungible asset store features disabled.
    pub disable_fa_apt: bool,
    /// Whether to enable the database pruners.
    pub enable_pruner: bool,
    /// Whether to hide the benchmark output.
    pub hide_output: bool,
    /// Whether to skip the Move end-to-end benchmark.
    pub skip_move_e2e: bool,
    /// Whether to skip building the benchmark executables.
    pub skip_build: bool,
    /// The workspace the executables are built in.
    pub workspace: PathBuf,
}

impl Config {
    /// The default upper bound of the block size.
    pub const DEFAULT_MAX_BLOCK_SIZE: usize = 10_000;

    /// The default number of blocks of the main run.
    pub const DEFAULT_NUM_BLOCKS: usize = 15;

    /// The default number of execution threads, that is the production one.
    pub const DEFAULT_EXECUTION_THREADS: usize = 32;

    /// The default runner name.
    pub const DEFAULT_RUNNER_NAME: &'static str = "none";

    /// The number of blocks of an execution-only sweep run.
    pub const NUM_BLOCKS_DETAILED: usize = 10;

    /// The execution thread counts of the execution-only sweep.
    pub const DETAILED_EXECUTION_THREADS: [usize; 8] = [1, 2, 4, 8, 16, 32, 48, 60];

    /// The largest number of blocks that is generated upfront instead of while executing.
    pub const GENERATE_THEN_EXECUTE_MAX_BLOCKS: usize = 200;

    /// The non-production database flags.
    pub const DB_FLAGS: [&'static str; 1] = ["--enable-storage-sharding"];

    /// The features enabling the APT fungible asset store.
    pub const FEATURE_FLAGS: [&'static str; 4] = [
        "--enable-feature",
        "NEW_ACCOUNTS_DEFAULT_TO_FA_APT_STORE",
        "--enable-feature",
        "OPERATIONS_DEFAULT_TO_FA_APT_STORE",
    ];

    /// The database pruner flags.
    pub const PRUNER_FLAGS: [&'static str; 11] = [
        "--enable-state-pruner",
        "--enable-ledger-pruner",
        "--enable-epoch-snapshot-pruner",
        "--ledger-pruning-batch-size",
        "10000",
        "--state-prune-window",
        "3000000",
        "--epoch-snapshot-prune-window",
        "3000000",
        "--ledger-prune-window",
        "3000000",
    ];

    ///
    /// A shortcut constructor with the defaults of the flow.
    ///
    pub fn new(flow: Flow) -> Self {
        Self {
            flow,
            source: Source::default(),
            runner_name: Self::DEFAULT_RUNNER_NAME.to_owned(),
            max_block_size: Self::DEFAULT_MAX_BLOCK_SIZE,
            num_blocks: Self::DEFAULT_NUM_BLOCKS,
            num_init_accounts: flow.default_num_init_accounts(),
            execution_threads: Self::DEFAULT_EXECUTION_THREADS,
            detailed: false,
            build_profile: BuildProfile::default(),
            prod_db_flags: false,
            disable_fa_apt: false,
            enable_pruner: false,
            hide_output: false,
            skip_move_e2e: false,
            skip_build: false,
            workspace: PathBuf::from("."),
        }
    }

    ///
    /// The number of accounts created by the warmup.
    ///
    /// Raised so that every block of the main run can have two fresh accounts per transaction.
    ///
    pub fn num_accounts(&self) -> u64 {
        let required = Self::required_accounts(self.max_block_size, self.num_blocks)
            .map_or(u64::MAX, |required| required as u64);
        self.num_init_accounts.max(required)
    }

    ///
    /// The number of accounts consumed by the main runs, or `None` if it overflows.
    ///
    /// Bounds the signer and destination pool account counts as well.
    ///
    pub fn required_accounts(max_block_size: usize, num_blocks: usize) -> Option<usize> {
        num_blocks
            .checked_mul(2)?
            .checked_add(2)?
            .checked_mul(max_block_size)
    }

    ///
    /// The number of the main signer accounts.
    ///
    pub fn main_signer_accounts(&self) -> usize {
        2 * self.max_block_size
    }

    ///
    /// The number of the additional destination pool accounts.
    ///
    pub fn additional_dst_pool_accounts(&self) -> usize {
        2 * self.max_block_size * self.num_blocks
    }

    ///
    /// The noise limits of the uncalibrated tests.
    ///
    pub fn noise_limits(&self) -> NoiseLimits {
        NoiseLimits::for_flow(self.flow)
    }

    ///
    /// Whether improvements are not reported.
    ///
    pub fn suppress_improvement_notice(&self) -> bool {
        self.flow.suppresses_improvement_notice()
    }

    ///
    /// Whether the native executor tests are skipped.
    ///
    /// The native executor does not support the APT fungible asset store.
    ///
    pub fn skip_native(&self) -> bool {
        !self.disable_fa_apt
    }

    ///
    /// The execution thread counts of the execution-only sweep, empty if it is disabled.
    ///
    pub fn sweep_threads(&self) -> &'static [usize] {
        if self.detailed {
            &Self::DETAILED_EXECUTION_THREADS
        } else {
            &[]
        }
    }

    ///
    /// The database configuration flags.
    ///
    pub fn db_flags(&self) -> &'static [&'static str] {
        if self.prod_db_flags {
            &[]
        } else {
            &Self::DB_FLAGS
        }
    }

    ///
    /// The feature flags.
    ///
    pub fn feature_flags(&self) -> &'static [&'static str] {
        if self.disable_fa_apt {
            &[]
        } else {
            &Self::FEATURE_FLAGS
        }
    }

    ///
    /// The database pruner flags.
    ///
    pub fn pruner_flags(&self) -> &'static [&'static str] {
        if self.enable_pruner {
            &Self::PRUNER_FLAGS
        } else {
            &[]
        }
    }

    ///
    /// Whether the transactions are generated before the execution starts.
    ///
    pub fn generate_then_execute(&self) -> bool {
        self.num_blocks <= Self::GENERATE_THEN_EXECUTE_MAX_BLOCKS
    }

    ///
    /// The directory the benchmark executables are built into.
    ///
    pub fn build_folder(&self) -> PathBuf {
        self.workspace.join(self.build_profile.folder())
    }

    ///
    /// The path to the benchmark executable.
    ///
    pub fn executable(&self, package: &str) -> PathBuf {
        self.build_folder().join(package)
    }
}

#[cfg(test)]
mod tests;
