//!
//! The throughput verdict.
//!

pub mod severity;

use crate::criteria::Criteria;
use crate::model::run_group::key::RunGroupKey;

use self::severity::Severity;

///
/// The classification of a measured throughput against the criteria.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Within the warning band.
    Pass,
    /// Below the warning band, but within the noise.
    PotentialRegression,
    /// Below the hard band.
    Regression,
    /// Above the warning band, but within the noise.
    PotentialImprovement,
    /// Above the hard band.
    Improvement,
}

impl Verdict {
    ///
    /// Classifies the throughput.
    ///
    /// The bands are checked from the most severe regression to the mildest improvement,
    /// and the improvement bands are skipped if the notice is suppressed.
    ///
    pub fn classify(tps: f64, criteria: &Criteria, suppress_improvement_notice: bool) -> Self {
        if tps < criteria.min_tps {
            Self::Regression
        } else if tps < criteria.min_warn_tps {
            Self::PotentialRegression
        } else if !suppress_improvement_notice && tps > criteria.max_tps {
            Self::Improvement
        } else if !suppress_improvement_notice && tps > criteria.max_warn_tps {
            Self::PotentialImprovement
        } else {
            Self::Pass
        }
    }

    ///
    /// How the verdict is reported, or `None` if it is not.
    ///
    /// Only the hard band violations are errors, and waiving downgrades them to warnings.
    ///
    pub fn severity(self, waived: bool) -> Option<Severity> {
        match self {
            Self::Pass => None,
            Self::PotentialRegression | Self::PotentialImprovement => Some(Severity::Warning),
            Self::Regression | Self::Improvement if waived => Some(Severity::Warning),
            Self::Regression | Self::Improvement => Some(Severity::Error),
        }
    }

    ///
    /// The threshold the throughput has crossed.
    ///
    pub fn threshold(self, criteria: &Criteria) -> Option<f64> {
        match self {
            Self::Pass => None,
            Self::PotentialRegression => Some(criteria.min_warn_tps),
            Self::Regression => Some(criteria.min_tps),
            Self::PotentialImprovement => Some(criteria.max_warn_tps),
            Self::Improvement => Some(criteria.max_tps),
        }
    }

    ///
    /// The report message, or `None` for a pass.
    ///
    /// The numbers always carry a decimal point, so `1000` is rendered as `1000.0`.
    ///
    pub fn message(self, tps: f64, criteria: &Criteria, key: &RunGroupKey) -> Option<String> {
        let threshold = self.threshold(criteria)?;
        let expected = criteria.expected_tps;
        let message = match self {
            Self::Pass => return None,
            Self::Regression => format!(
                "regression detected {tps:?}, expected median {expected:?}, threshold: {threshold:?}), {key} didn't meet TPS requirements"
            ),
            Self::PotentialRegression => format!(
                "potential (but within normal noise) regression detected {tps:?}, expected median {expected:?}, threshold: {threshold:?}), {key} didn't meet TPS requirements"
            ),
            Self::Improvement => format!(
                "perf improvement detected {tps:?}, expected median {expected:?}, threshold: {threshold:?}), {key} exceeded TPS requirements, increase TPS requirements to match new baseline"
            ),
            Self::PotentialImprovement => format!(
                "potential (but within normal noise) perf improvement detected {tps:?}, expected median {expected:?}, threshold: {threshold:?}), {key} exceeded TPS requirements, increase TPS requirements to match new baseline"
            ),
        };
        Some(message)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::PotentialRegression => write!(f, "potential regression"),
            Self::Regression => write!(f, "regression"),
            Self::PotentialImprovement => write!(f, "potential improvement"),
            Self::Improvement => write!(f, "improvement"),
        }
    }
}
