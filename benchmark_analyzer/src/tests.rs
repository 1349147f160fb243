//!
//! The benchmark analyzer scenario tests.
//!

#![cfg(test)]

use std::str::FromStr;

use crate::CalibrationTable;
use crate::Criteria;
use crate::Flow;
use crate::FlowSet;
use crate::NoiseLimits;
use crate::Report;
use crate::RunGroupConfig;
use crate::RunGroupKey;
use crate::RunResults;
use crate::Verdict;

const OUTPUT: &str = "\
Overall TPS: 500.0 txn/s
Overall GPS: 4000.0 gas/s
Overall effectiveGPS: 3800.0 gas/s
Overall ioGPS: 1000.0 gas/s
Overall executionGPS: 2800.0 gas/s
Overall GPT: 8.0 gas/txn
Overall Storage fee: 0.0 octas/txn
Overall output: 100000.0 bytes/s
Overall fraction of total: 0.5 in execution
Overall fraction of execution 0.4 in VM
Overall fraction of total: 0.3 in commit
";

#[test]
fn pass_within_band() {
    let criteria = Criteria {
        expected_tps: 500.0,
        min_tps: 400.0,
        min_warn_tps: 450.0,
        max_tps: 600.0,
        max_warn_tps: 550.0,
    };
    let results = RunResults::extract(OUTPUT, RunResults::PREFIX_OVERALL).expect("Always valid");

    let mut report = Report::default();
    let verdict = report.judge(
        &RunGroupKey::new("no-op"),
        results.tps,
        &criteria,
        false,
        false,
    );

    assert_eq!(verdict, Verdict::Pass);
    assert!(report.warnings().is_empty());
    assert!(report.errors().is_empty());
    assert!(report.is_successful());
}

#[test]
fn calibrated_regression_fails() {
    let calibration =
        CalibrationTable::from_str("no-op\t1\tVM\t15\t0.9\t1.1\t1000\n").expect("Always valid");
    let config = RunGroupConfig::new(
        RunGroupKey::new("no-op"),
        FlowSet::LAND_BLOCKING_AND_CONTINUOUS,
    );
    let flow = Flow::LandBlocking;

    let criteria = Criteria::resolve(&config, &calibration, &NoiseLimits::for_flow(flow))
        .expect("Always valid");
    let results = RunResults::extract(OUTPUT, RunResults::PREFIX_OVERALL).expect("Always valid");

    let mut report = Report::default();
    let verdict = report.judge(
        &config.key,
        results.tps,
        &criteria,
        config.waived,
        flow.suppresses_improvement_notice(),
    );

    assert_eq!(verdict, Verdict::Regression);
    assert_eq!(report.errors().len(), 1);
    assert!(!report.is_successful());
}

#[test]
fn mainnet_improvement_is_silent() {
    let config = RunGroupConfig::new(RunGroupKey::new("no-op"), Flow::Mainnet.into())
        .with_expected_tps(100.0);
    let flow = Flow::Mainnet;

    let criteria = Criteria::resolve(
        &config,
        &CalibrationTable::default(),
        &NoiseLimits::for_flow(flow),
    )
    .expect("Always valid");
    let results = RunResults::extract(OUTPUT, RunResults::PREFIX_OVERALL).expect("Always valid");

    let mut report = Report::default();
    let verdict = report.judge(
        &config.key,
        results.tps,
        &criteria,
        config.waived,
        flow.suppresses_improvement_notice(),
    );

    assert_eq!(verdict, Verdict::Pass);
    assert_eq!(report.to_string(), "");
}
