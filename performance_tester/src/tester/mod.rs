//!
//! The single-node performance tester.
//!

pub mod outcome;

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;

use benchmark_analyzer::CalibrationTable;
use benchmark_analyzer::Criteria;
use benchmark_analyzer::ExecutorType;
use benchmark_analyzer::JsonRecord;
use benchmark_analyzer::ResultTables;
use benchmark_analyzer::RunGroupInstance;
use benchmark_analyzer::RunGroupKey;
use benchmark_analyzer::RunResults;

use crate::benchmark::BenchmarkCommand;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::process::Runner;

use self::outcome::Outcome;
use self::planned_test::PlannedTest;

///
/// The single-node performance tester.
///
/// Runs the selected tests one by one against a single warmed up database,
/// and judges their throughput against the calibrated criteria.
///
pub struct PerformanceTester<R>
where
    R: Runner,
{
    /// The process configuration.
    config: Config,
    /// The test catalog.
    catalog: Catalog,
    /// The calibration table.
    calibration: CalibrationTable,
    /// The subprocess runner.
    runner: R,
}

impl<R> PerformanceTester<R>
where
    R: Runner,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config, catalog: Catalog, calibration: CalibrationTable, runner: R) -> Self {
        Self {
            config,
            catalog,
            calibration,
            runner,
        }
    }

    ///
    /// The process configuration.
    ///
    pub fn config(&self) -> &Config {
        &self.config
    }

    ///
    /// Selects the tests of the active flow and resolves their criteria.
    ///
    /// Every selected test is checked before returning, so that all the configuration
    /// errors are reported at once and before any benchmark is launched.
    ///
    pub fn plan(&self) -> anyhow::Result<Vec<PlannedTest<'_>>> {
        Self::plan_tests(&self.config, &self.catalog, &self.calibration)
    }

    ///
    /// Runs the whole performance test.
    ///
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        let plan = Self::plan_tests(&self.config, &self.catalog, &self.calibration)?;
        let config = &self.config;
        let runner = &mut self.runner;

        let mut outcome = Outcome {
            prerequisite_failed: Self::run_prerequisite(config, runner)?,
            ..Outcome::default()
        };

        if !config.skip_build {
            runner.run(&BenchmarkCommand::cargo_build(
                config,
                BenchmarkCommand::EXECUTOR_BENCHMARK,
            ))?;
        }

        let run_directory = tempfile::Builder::new()
            .prefix("single-node-performance")
            .tempdir()
            .map_err(|error| anyhow::anyhow!("Run directory creating: {error}"))?;

        println!(
            "      {} creating DB with {} accounts",
            "Warmup".bright_green().bold(),
            config.num_accounts(),
        );
        let output = runner.run(&BenchmarkCommand::create_db(config, run_directory.path()))?;
        let warmup_results = RunResults::extract_create_db(output.as_str())
            .map_err(|error| anyhow::anyhow!("Warmup: {error}"))?;
        outcome.instances.push(RunGroupInstance::new(
            RunGroupKey::warmup(),
            warmup_results,
            BTreeMap::new(),
            config.max_block_size,
            0.0,
        ));

        let source = config.source.to_string();
        for test in plan.iter() {
            let instances = Self::run_test(config, runner, test, run_directory.path())?;
            let main_results = instances
                .first()
                .map(|instance| instance.single_node_result.clone())
                .expect("Always exists");
            outcome.instances.extend(instances);

            let record = JsonRecord::new(
                source.as_str(),
                config.runner_name.as_str(),
                &test.config.key,
                test.block_size,
                config.execution_threads,
                config.num_accounts(),
                &test.criteria,
                test.config.waived,
                &main_results,
                config.flow,
                test.index,
            );
            println!("{}", record.to_json_line()?);

            if !config.hide_output {
                print!(
                    "{}",
                    ResultTables::new(outcome.instances.as_slice(), config.sweep_threads())
                );
            }

            let verdict = outcome.report.judge(
                &test.config.key,
                main_results.tps,
                &test.criteria,
                test.config.waived,
                config.suppress_improvement_notice(),
            );
            tracing::info!(key = %test.config.key, tps = main_results.tps, %verdict, "Judged");
        }

        if config.hide_output {
            println!(
                "{}",
                ResultTables::new(outcome.instances.as_slice(), config.sweep_threads()).full()
            );
        }

        Ok(outcome)
    }

    ///
    /// Selects the tests of the active flow and resolves their criteria.
    ///
    fn plan_tests<'a>(
        config: &Config,
        catalog: &'a Catalog,
        calibration: &CalibrationTable,
    ) -> anyhow::Result<Vec<PlannedTest<'a>>> {
        let noise_limits = config.noise_limits();

        let mut plan = Vec::new();
        let mut errors = Vec::new();
        for (index, test) in catalog.select(config.flow) {
            if config.skip_native() && test.key.executor_type == ExecutorType::Native {
                tracing::info!(key = %test.key, "Skipping the native executor test");
                continue;
            }

            match Criteria::resolve(test, calibration, &noise_limits) {
                Ok(criteria) => {
                    if test.expected_tps.is_some() {
                        tracing::warn!(key = %test.key, "Using uncalibrated TPS");
                    }
                    plan.push(PlannedTest::new(
                        index,
                        test,
                        criteria,
                        config.max_block_size,
                    ));
                }
                Err(error) => errors.push(error.to_string()),
            }
        }

        if !errors.is_empty() {
            anyhow::bail!(
                "{} test(s) of flow {} cannot be judged:\n{}",
                errors.len(),
                config.flow,
                errors.join("\n")
            );
        }
        Ok(plan)
    }

    ///
    /// Runs the Move end-to-end benchmark, returning whether it has failed.
    ///
    /// In the strict flow the failure aborts the run immediately, otherwise all the tests
    /// are run and the failure is reported at the end.
    ///
    fn run_prerequisite(config: &Config, runner: &mut R) -> anyhow::Result<bool> {
        if config.skip_move_e2e {
            return Ok(false);
        }

        if !config.skip_build {
            runner.run(&BenchmarkCommand::cargo_build(
                config,
                BenchmarkCommand::MOVE_E2E_BENCHMARK,
            ))?;
        }

        match runner.run(&BenchmarkCommand::move_e2e(config)) {
            Ok(_) => Ok(false),
            Err(error) if config.flow.is_strict() => {
                anyhow::bail!("Move e2e benchmark failed, exiting: {error}")
            }
            Err(error) => {
                tracing::error!(%error, "Move e2e benchmark failed, continuing with the tests");
                Ok(true)
            }
        }
    }

    ///
    /// Runs the sweep and the main benchmark of the test.
    ///
    /// Returns the main instance followed by the instances of the pipeline stages.
    ///
    fn run_test(
        config: &Config,
        runner: &mut R,
        test: &PlannedTest<'_>,
        run_directory: &Path,
    ) -> anyhow::Result<Vec<RunGroupInstance>> {
        let key = &test.config.key;
        println!("     {} {key}", "Testing".bright_green().bold());

        let mut number_of_threads_results = BTreeMap::new();
        for execution_threads in config.sweep_threads().iter().copied() {
            let output = runner.run(&BenchmarkCommand::sweep_run(
                config,
                test.config,
                test.block_size,
                execution_threads,
                run_directory,
            ))?;
            let results =
                RunResults::extract(output.as_str(), RunResults::PREFIX_OVERALL_EXECUTION)
                    .map_err(|error| {
                        anyhow::anyhow!("{key} with {execution_threads} threads: {error}")
                    })?;
            number_of_threads_results.insert(execution_threads, results);
        }

        let output = runner.run(&BenchmarkCommand::main_run(
            config,
            test.config,
            test.block_size,
            run_directory,
        ))?;
        let single_node_result = RunResults::extract(output.as_str(), RunResults::PREFIX_OVERALL)
            .map_err(|error| anyhow::anyhow!("{key}: {error}"))?;
        let stages = RunResults::extract_stages(output.as_str())
            .map_err(|error| anyhow::anyhow!("{key}: {error}"))?;

        let mut instances = Vec::with_capacity(1 + stages.len());
        instances.push(RunGroupInstance::new(
            key.clone(),
            single_node_result,
            number_of_threads_results.clone(),
            test.block_size,
            test.criteria.expected_tps,
        ));
        for (index, results) in stages.into_iter() {
            instances.push(RunGroupInstance::new(
                key.stage(index),
                results,
                number_of_threads_results.clone(),
                test.block_size,
                test.criteria.expected_tps,
            ));
        }
        Ok(instances)
    }
}
