//!
//! The regression gate report.
//!

use colored::Colorize;

use crate::criteria::Criteria;
use crate::model::run_group::key::RunGroupKey;
use crate::verdict::severity::Severity;
use crate::verdict::Verdict;

///
/// The warnings and errors accumulated over the tests.
///
#[derive(Debug, Default)]
pub struct Report {
    /// The messages that do not fail the run.
    warnings: Vec<String>,
    /// The messages that fail the run.
    errors: Vec<String>,
}

impl Report {
    /// The hint printed after the warnings.
    pub const WARNINGS_HINT: &'static str =
        "You can run again to see if it is noise, or consistent.";

    /// The hint printed after the errors.
    pub const ERRORS_HINT: &'static str = "\
If you expect your change to affect the performance, you need to recalibrate the values.
To do so, run the test on your branch at least 6 times in the CONTINUOUS flow,
export the median, count, minimal and maximal ratio of each configuration from the dashboard,
and replace the affected lines of the calibration table.
Update only the lines of the affected tests, so as not to add unintentional drift to the others.";

    ///
    /// Classifies the measured throughput and records the verdict.
    ///
    pub fn judge(
        &mut self,
        key: &RunGroupKey,
        tps: f64,
        criteria: &Criteria,
        waived: bool,
        suppress_improvement_notice: bool,
    ) -> Verdict {
        let verdict = Verdict::classify(tps, criteria, suppress_improvement_notice);
        if let (Some(severity), Some(message)) = (
            verdict.severity(waived),
            verdict.message(tps, criteria, key),
        ) {
            self.push(severity, message);
        }
        verdict
    }

    ///
    /// Records a message.
    ///
    pub fn push(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::Warning => self.warnings.push(message),
            Severity::Error => self.errors.push(message),
        }
    }

    ///
    /// The recorded warnings.
    ///
    pub fn warnings(&self) -> &[String] {
        self.warnings.as_slice()
    }

    ///
    /// The recorded errors.
    ///
    pub fn errors(&self) -> &[String] {
        self.errors.as_slice()
    }

    ///
    /// Whether no error has been recorded.
    ///
    pub fn is_successful(&self) -> bool {
        self.errors.is_empty()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.warnings.is_empty() {
            writeln!(f, "{}", "Warnings:".bright_yellow().bold())?;
            for warning in self.warnings.iter() {
                writeln!(f, "{warning}")?;
            }
            writeln!(f, "{}", Self::WARNINGS_HINT)?;
        }

        if !self.errors.is_empty() {
            writeln!(f, "{}", "Errors:".bright_red().bold())?;
            for error in self.errors.iter() {
                writeln!(f, "{error}")?;
            }
            writeln!(f, "{}", Self::ERRORS_HINT)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::criteria::Criteria;
    use crate::model::run_group::key::RunGroupKey;
    use crate::verdict::Verdict;

    use super::Report;

    fn criteria() -> Criteria {
        Criteria {
            expected_tps: 500.0,
            min_tps: 400.0,
            min_warn_tps: 450.0,
            max_tps: 600.0,
            max_warn_tps: 550.0,
        }
    }

    #[test]
    fn pass_records_nothing() {
        let mut report = Report::default();
        let verdict = report.judge(&RunGroupKey::new("no-op"), 500.0, &criteria(), false, false);

        assert_eq!(verdict, Verdict::Pass);
        assert!(report.warnings().is_empty());
        assert!(report.errors().is_empty());
        assert!(report.is_successful());
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn regression_is_error() {
        let mut report = Report::default();
        report.judge(&RunGroupKey::new("no-op"), 300.0, &criteria(), false, false);

        assert_eq!(report.errors().len(), 1);
        assert!(report.warnings().is_empty());
        assert!(!report.is_successful());
    }

    #[test]
    fn waived_regression_is_warning() {
        let mut report = Report::default();
        report.judge(&RunGroupKey::new("no-op"), 300.0, &criteria(), true, false);

        assert!(report.errors().is_empty());
        assert_eq!(report.warnings().len(), 1);
        assert!(report.is_successful());
    }

    #[test]
    fn potential_regression_is_never_error() {
        let mut report = Report::default();
        report.judge(&RunGroupKey::new("no-op"), 420.0, &criteria(), false, false);

        assert!(report.is_successful());
        assert_eq!(report.warnings().len(), 1);
    }

    #[test]
    fn improvement_is_error() {
        let mut report = Report::default();
        report.judge(&RunGroupKey::new("no-op"), 700.0, &criteria(), false, false);
        assert!(!report.is_successful());

        let mut report = Report::default();
        report.judge(&RunGroupKey::new("no-op"), 700.0, &criteria(), false, true);
        assert!(report.is_successful());
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn accumulates() {
        let mut report = Report::default();
        report.judge(&RunGroupKey::new("a"), 300.0, &criteria(), false, false);
        report.judge(&RunGroupKey::new("b"), 560.0, &criteria(), false, false);
        report.judge(&RunGroupKey::new("c"), 700.0, &criteria(), true, false);

        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.warnings().len(), 2);

        let printed = report.to_string();
        assert!(printed.contains(Report::WARNINGS_HINT));
        assert!(printed.contains(Report::ERRORS_HINT));
    }
}
