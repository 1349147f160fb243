//!
//! The performance tester configuration tests.
//!

use std::path::PathBuf;
use std::str::FromStr;

use benchmark_analyzer::Flow;
use benchmark_analyzer::NoiseLimits;

use super::build_profile::BuildProfile;
use super::source::Source;
use super::Config;

#[test]
fn defaults() {
    let config = Config::new(Flow::LandBlocking);

    assert_eq!(config.source, Source::Local);
    assert_eq!(config.runner_name, "none");
    assert_eq!(config.max_block_size, 10_000);
    assert_eq!(config.num_blocks, 15);
    assert_eq!(config.num_init_accounts, 2_000_000);
    assert_eq!(config.execution_threads, 32);
    assert_eq!(config.build_profile, BuildProfile::Performance);
}

#[test]
fn large_db_accounts() {
    let config = Config::new(Flow::MainnetLargeDb);
    assert_eq!(config.num_init_accounts, 100_000_000);
    assert_eq!(config.num_accounts(), 100_000_000);
}

#[test]
fn derived_accounts() {
    let config = Config::new(Flow::LandBlocking);
    assert_eq!(config.num_accounts(), 2_000_000);
    assert_eq!(config.main_signer_accounts(), 20_000);
    assert_eq!(config.additional_dst_pool_accounts(), 300_000);

    let mut config = Config::new(Flow::Continuous);
    config.num_blocks = 100;
    config.num_init_accounts = 1000;
    assert_eq!(config.num_accounts(), 2_020_000);
    assert_eq!(config.additional_dst_pool_accounts(), 2_000_000);
}

#[test]
fn required_accounts_overflow() {
    assert_eq!(Config::required_accounts(10_000, 15), Some(320_000));
    assert_eq!(Config::required_accounts(usize::MAX, 1), None);
    assert_eq!(Config::required_accounts(1, usize::MAX / 2), None);

    let mut config = Config::new(Flow::Continuous);
    config.max_block_size = usize::MAX;
    assert_eq!(config.num_accounts(), u64::MAX);
}

#[test]
fn noise_limits() {
    assert_eq!(
        Config::new(Flow::LandBlocking).noise_limits().lower,
        NoiseLimits::LOWER
    );
    assert_eq!(
        Config::new(Flow::Mainnet).noise_limits().lower,
        NoiseLimits::LOWER_MAINNET
    );
    assert!(Config::new(Flow::MainnetLargeDb).suppress_improvement_notice());
    assert!(!Config::new(Flow::Continuous).suppress_improvement_notice());
}

#[test]
fn flags() {
    let mut config = Config::new(Flow::LandBlocking);
    assert_eq!(config.db_flags(), &["--enable-storage-sharding"]);
    assert_eq!(config.feature_flags().len(), 4);
    assert!(config.pruner_flags().is_empty());
    assert!(config.sweep_threads().is_empty());
    assert!(config.skip_native());

    config.prod_db_flags = true;
    config.disable_fa_apt = true;
    config.enable_pruner = true;
    config.detailed = true;
    assert!(config.db_flags().is_empty());
    assert!(config.feature_flags().is_empty());
    assert_eq!(config.pruner_flags().len(), 11);
    assert_eq!(config.sweep_threads(), &[1, 2, 4, 8, 16, 32, 48, 60]);
    assert!(!config.skip_native());
}

#[test]
fn generate_then_execute() {
    let mut config = Config::new(Flow::LandBlocking);
    assert!(config.generate_then_execute());

    config.num_blocks = 200;
    assert!(config.generate_then_execute());

    config.num_blocks = 201;
    assert!(!config.generate_then_execute());
}

#[test]
fn build_folder() {
    let mut config = Config::new(Flow::LandBlocking);
    config.workspace = PathBuf::from("/aptos-core");
    assert_eq!(
        config.executable("aptos-executor-benchmark"),
        PathBuf::from("/aptos-core/target/performance/aptos-executor-benchmark")
    );

    config.build_profile = BuildProfile::Release;
    assert_eq!(
        config.build_folder(),
        PathBuf::from("/aptos-core/target/release")
    );
    assert_eq!(BuildProfile::Release.cargo_arguments(), &["--release"]);
}

#[test]
fn source() {
    for source in [Source::Adhoc, Source::Ci, Source::Local] {
        assert_eq!(
            Source::from_str(source.to_string().as_str()).expect("Always valid"),
            source
        );
    }
    assert!(Source::from_str("REMOTE").is_err());
}
