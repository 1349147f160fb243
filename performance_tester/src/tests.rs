//!
//! The performance tester scenario tests.
//!

#![cfg(test)]

use std::collections::HashMap;
use std::str::FromStr;

use benchmark_analyzer::CalibrationTable;
use benchmark_analyzer::Flow;

use crate::benchmark::BenchmarkCommand;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::process::error::ProcessError;
use crate::process::Runner;
use crate::tester::PerformanceTester;

const CALIBRATION: &str = "\
no-op\t1\tVM\t15\t0.9\t1.1\t1000
slow\t1\tVM\t15\t0.9\t1.1\t1000
";

const CATALOG: &str = r#"
- key: { transaction_type: no-op }
  included_in: [LAND_BLOCKING, CONTINUOUS]
- key: { transaction_type: slow }
  included_in: [LAND_BLOCKING]
- key: { transaction_type: new }
  included_in: [LAND_BLOCKING, CONTINUOUS]
  expected_tps: 100
  waived: true
- key: { transaction_type: elsewhere }
  included_in: [MAINNET]
  expected_tps: 100
"#;

///
/// Replies to the benchmark commands with the synthetic summaries.
///
#[derive(Debug, Default)]
struct FakeRunner {
    /// The commands run so far.
    commands: Vec<BenchmarkCommand>,
    /// The throughput reported per transaction type.
    tps: HashMap<String, f64>,
    /// Whether the main runs report two pipeline stages.
    stages: bool,
    /// Whether the Move end-to-end benchmark fails.
    fail_move_e2e: bool,
}

impl FakeRunner {
    fn new(tps: &[(&str, f64)]) -> Self {
        Self {
            tps: tps
                .iter()
                .map(|(transaction_type, tps)| (transaction_type.to_string(), *tps))
                .collect(),
            ..Self::default()
        }
    }

    fn summary(prefix: &str, tps: f64) -> String {
        format!(
            "\
{prefix} TPS: {tps} txn/s
{prefix} GPS: 1000.0 gas/s
{prefix} effectiveGPS: 900.0 gas/s
{prefix} ioGPS: 400.0 gas/s
{prefix} executionGPS: 500.0 gas/s
{prefix} GPT: 10.0 gas/txn
{prefix} Storage fee: 2.5 octas/txn
{prefix} output: 12345.0 bytes/s
{prefix} fraction of total: 0.5 in execution
{prefix} fraction of execution 0.7 in VM
{prefix} fraction of total: 0.3 in commit
"
        )
    }

    fn count(&self, predicate: impl Fn(&BenchmarkCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    fn has_argument(command: &BenchmarkCommand, argument: &str) -> bool {
        command.arguments.iter().any(|element| element == argument)
    }
}

impl Runner for FakeRunner {
    fn run(&mut self, command: &BenchmarkCommand) -> Result<String, ProcessError> {
        self.commands.push(command.clone());

        let program = command.program.to_string_lossy().into_owned();
        if program == BenchmarkCommand::CARGO {
            return Ok(String::new());
        }
        if program.ends_with(BenchmarkCommand::MOVE_E2E_BENCHMARK) {
            if self.fail_move_e2e {
                return Err(ProcessError::ErrorLogged {
                    command: command.to_string(),
                    line: "2024 ERROR [e2e] gas mismatch".to_owned(),
                });
            }
            return Ok("Move e2e benchmark passed\n".to_owned());
        }
        if Self::has_argument(command, "create-db") {
            return Ok("Overall TPS: create_db: account creation: 150000.0 txn/s\n".to_owned());
        }

        let transaction_type = command
            .arguments
            .iter()
            .skip_while(|argument| argument.as_str() != "--transaction-type")
            .nth(1)
            .cloned()
            .unwrap_or_default();
        let tps = self.tps.get(&transaction_type).copied().unwrap_or(1000.0);

        if Self::has_argument(command, "--skip-commit") {
            return Ok(Self::summary("Overall execution", tps * 2.0));
        }

        let mut output = Self::summary("Overall", tps);
        if self.stages {
            output.push_str(Self::summary("Staged execution: stage 0:", tps * 3.0).as_str());
            output.push_str(Self::summary("Staged execution: stage 1:", tps * 1.5).as_str());
        }
        Ok(output)
    }
}

fn config(flow: Flow) -> Config {
    let mut config = Config::new(flow);
    config.hide_output = true;
    config
}

fn tester(config: Config, runner: &mut FakeRunner) -> PerformanceTester<&mut FakeRunner> {
    PerformanceTester::new(
        config,
        Catalog::from_str(CATALOG).expect("Always valid"),
        CalibrationTable::from_str(CALIBRATION).expect("Always valid"),
        runner,
    )
}

#[test]
fn embedded_resources_plan_every_flow() {
    let calibration =
        CalibrationTable::from_str(crate::EMBEDDED_CALIBRATION).expect("Always valid");
    assert!(!calibration.is_empty());

    for flow in Flow::ALL {
        let tester = PerformanceTester::new(
            config(flow),
            Catalog::embedded().expect("Always valid"),
            calibration.clone(),
            FakeRunner::default(),
        );
        let plan = tester.plan().expect("Always valid");
        assert!(
            plan.iter().all(|test| test.criteria.is_ordered() || flow.is_mainnet()),
            "flow {flow}"
        );
    }
}

#[test]
fn embedded_native_tests_are_skipped() {
    let calibration =
        CalibrationTable::from_str(crate::EMBEDDED_CALIBRATION).expect("Always valid");
    let tester = PerformanceTester::new(
        config(Flow::Continuous),
        Catalog::embedded().expect("Always valid"),
        calibration.clone(),
        FakeRunner::default(),
    );
    let plan = tester.plan().expect("Always valid");
    assert!(plan
        .iter()
        .all(|test| test.config.key.executor_type != benchmark_analyzer::ExecutorType::Native));

    let mut config = config(Flow::Continuous);
    config.disable_fa_apt = true;
    let tester = PerformanceTester::new(
        config,
        Catalog::embedded().expect("Always valid"),
        calibration,
        FakeRunner::default(),
    );
    let error = tester.plan().expect_err("Always invalid").to_string();
    assert!(error.contains("executor_type=native"), "{error}");
}

#[test]
fn plan() {
    let mut runner = FakeRunner::default();
    let tester = tester(config(Flow::LandBlocking), &mut runner);

    let plan = tester.plan().expect("Always valid");
    let selected = plan
        .iter()
        .map(|test| (test.index, test.config.key.transaction_type.as_str(), test.block_size))
        .collect::<Vec<(usize, &str, usize)>>();
    assert_eq!(selected, vec![(0, "no-op", 1000), (1, "slow", 1000), (2, "new", 100)]);
    assert!((plan[2].criteria.min_tps - 80.0).abs() < 1e-9);
}

#[test]
fn error_uncalibrated_before_any_process() {
    let mut runner = FakeRunner::default();
    let mut tester = PerformanceTester::new(
        config(Flow::LandBlocking),
        Catalog::from_str(CATALOG).expect("Always valid"),
        CalibrationTable::from_str("no-op\t1\tVM\t15\t0.9\t1.1\t1000\n").expect("Always valid"),
        &mut runner,
    );

    let error = tester.run().expect_err("Always invalid").to_string();
    assert!(error.contains("slow"), "{error}");
    drop(tester);
    assert!(runner.commands.is_empty());
}

#[test]
fn run() {
    let mut runner = FakeRunner::new(&[("no-op", 1000.0), ("slow", 500.0), ("new", 10.0)]);
    let outcome = tester(config(Flow::LandBlocking), &mut runner)
        .run()
        .expect("Always valid");

    let transaction_types = outcome
        .instances
        .iter()
        .map(|instance| instance.key.transaction_type.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(transaction_types, vec!["warmup", "no-op", "slow", "new"]);
    assert_eq!(outcome.instances[0].single_node_result.tps, 150000.0);
    assert_eq!(outcome.instances[0].block_size, 10000);
    assert_eq!(outcome.instances[1].single_node_result.tps, 1000.0);
    assert_eq!(outcome.instances[3].block_size, 100);

    assert_eq!(outcome.report.errors().len(), 1);
    assert!(outcome.report.errors()[0].contains("slow"));
    assert_eq!(outcome.report.warnings().len(), 1);
    assert!(outcome.report.warnings()[0].contains("new"));
    assert!(!outcome.prerequisite_failed);
    assert!(!outcome.is_successful());

    let programs = runner
        .commands
        .iter()
        .map(|command| command.program.to_string_lossy().into_owned())
        .collect::<Vec<String>>();
    assert_eq!(programs.len(), 7);
    assert_eq!(programs[0], "cargo");
    assert!(programs[1].ends_with(BenchmarkCommand::MOVE_E2E_BENCHMARK));
    assert_eq!(programs[2], "cargo");
    assert!(programs[3..]
        .iter()
        .all(|program| program.ends_with(BenchmarkCommand::EXECUTOR_BENCHMARK)));
    assert!(FakeRunner::has_argument(&runner.commands[3], "create-db"));
    assert_eq!(
        runner.count(|command| FakeRunner::has_argument(command, "run-executor")),
        3
    );
}

#[test]
fn run_detailed() {
    let mut config = config(Flow::Continuous);
    config.detailed = true;
    config.skip_move_e2e = true;
    config.skip_build = true;

    let mut runner = FakeRunner::default();
    let outcome = tester(config, &mut runner).run().expect("Always valid");

    assert_eq!(
        runner.count(|command| FakeRunner::has_argument(command, "--skip-commit")),
        2 * Config::DETAILED_EXECUTION_THREADS.len()
    );
    assert_eq!(runner.count(|command| command.program.as_os_str() == "cargo"), 0);

    let sweep = &outcome.instances[1].number_of_threads_results;
    assert_eq!(
        sweep.keys().copied().collect::<Vec<usize>>(),
        Config::DETAILED_EXECUTION_THREADS.to_vec()
    );
    assert!(sweep.values().all(|results| results.tps == 2000.0));
    assert!(outcome.is_successful());
}

#[test]
fn run_stages() {
    let mut config = config(Flow::Continuous);
    config.skip_move_e2e = true;

    let mut runner = FakeRunner::default();
    runner.stages = true;
    let outcome = tester(config, &mut runner).run().expect("Always valid");

    let transaction_types = outcome
        .instances
        .iter()
        .map(|instance| instance.key.transaction_type.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(
        transaction_types,
        vec![
            "warmup",
            "no-op",
            "no-op [stage 0]",
            "no-op [stage 1]",
            "new",
            "new [stage 0]",
            "new [stage 1]",
        ]
    );
    assert_eq!(outcome.instances[2].single_node_result.tps, 3000.0);
    assert_eq!(outcome.instances[2].expected_tps, 1000.0);

    // Stage throughputs are far outside the bands, but only the main results are judged.
    assert_eq!(outcome.report.errors().len(), 0);
    assert_eq!(outcome.report.warnings().len(), 1);
}

#[test]
fn prerequisite_failure_strict() {
    let mut runner = FakeRunner::default();
    runner.fail_move_e2e = true;

    let result = tester(config(Flow::LandBlocking), &mut runner).run();
    assert!(result.is_err());
    assert_eq!(
        runner.count(|command| FakeRunner::has_argument(command, "create-db")),
        0
    );
}

#[test]
fn prerequisite_failure_deferred() {
    let mut runner = FakeRunner::default();
    runner.fail_move_e2e = true;

    let outcome = tester(config(Flow::Continuous), &mut runner)
        .run()
        .expect("Always valid");
    assert!(outcome.prerequisite_failed);
    assert!(outcome.report.is_successful());
    assert!(!outcome.is_successful());
    assert_eq!(
        runner.count(|command| FakeRunner::has_argument(command, "run-executor")),
        2
    );
}

#[test]
fn mainnet_improvement_is_not_reported() {
    let mut config = config(Flow::Mainnet);
    config.skip_move_e2e = true;

    let mut runner = FakeRunner::new(&[("elsewhere", 1000.0)]);
    let outcome = tester(config, &mut runner).run().expect("Always valid");

    assert_eq!(outcome.instances.len(), 2);
    assert!(outcome.report.warnings().is_empty());
    assert!(outcome.report.errors().is_empty());
    assert!(outcome.is_successful());
}
