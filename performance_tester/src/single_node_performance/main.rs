//!
//! The single-node performance tester executable.
//!

pub(crate) mod arguments;

use std::str::FromStr;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use benchmark_analyzer::CalibrationTable;
use performance_tester::Catalog;
use performance_tester::NativeRunner;
use performance_tester::PerformanceTester;

use self::arguments::Arguments;

/// The success exit code.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
const EXIT_CODE_FAILURE: i32 = 1;

/// The log filter used if `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info";

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    println!(
        "    {} {} v{}",
        "Starting".bright_green().bold(),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    let calibration = match arguments.calibration.clone() {
        Some(path) => CalibrationTable::try_from(path)?,
        None => CalibrationTable::from_str(performance_tester::EMBEDDED_CALIBRATION)?,
    };
    tracing::info!(entries = calibration.len(), "Calibration table loaded");
    let catalog = match arguments.catalog.clone() {
        Some(path) => Catalog::try_from(path)?,
        None => Catalog::embedded()?,
    };
    tracing::info!(tests = catalog.tests().len(), "Test catalog loaded");

    let config = arguments.config();
    let runner = NativeRunner::new(config.hide_output);
    let mut tester = PerformanceTester::new(config, catalog, calibration, runner);

    if arguments.list {
        let plan = tester.plan()?;
        for test in plan.iter() {
            println!("{test}");
        }
        println!(
            "    {} {} test(s) of flow {}",
            "Selected".bright_green().bold(),
            plan.len(),
            tester.config().flow,
        );
        return Ok(());
    }

    let run_time_start = Instant::now();
    println!(
        "     {} flow {} with {} execution threads",
        "Running".bright_green().bold(),
        tester.config().flow,
        tester.config().execution_threads,
    );
    let outcome = tester.run()?;

    print!("{outcome}");
    println!(
        "    {} running tests in {}m{:02}s",
        "Finished".bright_green().bold(),
        run_time_start.elapsed().as_secs() / 60,
        run_time_start.elapsed().as_secs() % 60,
    );

    if !outcome.is_successful() {
        anyhow::bail!("");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use benchmark_analyzer::Flow;
    use performance_tester::BuildProfile;
    use performance_tester::Source;

    use crate::arguments::Arguments;

    #[test]
    fn defaults() {
        let arguments = Arguments::try_parse_from(["single-node-performance"])
            .expect("Always valid");
        let config = arguments.config();

        assert_eq!(config.flow, arguments.flow);
        assert_eq!(config.runner_name, arguments.runner_name);
        assert_eq!(config.workspace, PathBuf::from("."));
        assert!(!config.skip_build);
        assert_eq!(
            config.num_init_accounts,
            arguments
                .num_init_accounts
                .unwrap_or_else(|| arguments.flow.default_num_init_accounts())
        );
        assert_eq!(
            config.build_profile == BuildProfile::Release,
            arguments.release_build
        );
    }

    #[test]
    fn flags() {
        let arguments = Arguments::try_parse_from([
            "single-node-performance",
            "--flow",
            "MAINNET_LARGE_DB",
            "--source",
            "CI",
            "--max-block-size",
            "500",
            "--release-build",
            "--detailed",
            "--skip-build",
            "--workspace",
            "/tmp",
        ])
        .expect("Always valid");
        let arguments = Arguments::validate(arguments).expect("Always valid");
        let config = arguments.config();

        assert_eq!(config.flow, Flow::MainnetLargeDb);
        assert_eq!(config.source, Source::Ci);
        assert_eq!(config.max_block_size, 500);
        assert_eq!(config.build_profile, BuildProfile::Release);
        assert!(config.detailed);
        assert!(config.skip_build);
        assert_eq!(config.workspace, PathBuf::from("/tmp"));
        if arguments.num_init_accounts.is_none() {
            assert_eq!(config.num_init_accounts, Flow::DEFAULT_NUM_INIT_ACCOUNTS_LARGE_DB);
        }
    }

    #[test]
    fn error_unknown_flow() {
        let result = Arguments::try_parse_from(["single-node-performance", "--flow", "NIGHTLY"]);
        assert!(result.is_err());
    }

    #[test]
    fn error_zero_block_size() {
        let arguments =
            Arguments::try_parse_from(["single-node-performance", "--max-block-size", "0"])
                .expect("Always valid");
        assert!(Arguments::validate(arguments).is_err());
    }

    #[test]
    fn error_account_count_overflow() {
        let max_block_size = usize::MAX.to_string();
        let arguments = Arguments::try_parse_from([
            "single-node-performance",
            "--max-block-size",
            max_block_size.as_str(),
        ])
        .expect("Always valid");
        assert!(Arguments::validate(arguments).is_err());

        let num_blocks = (usize::MAX / 2).to_string();
        let arguments = Arguments::try_parse_from([
            "single-node-performance",
            "--num-blocks",
            num_blocks.as_str(),
        ])
        .expect("Always valid");
        assert!(Arguments::validate(arguments).is_err());
    }
}
