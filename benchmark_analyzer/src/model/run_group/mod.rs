//!
//! The run group configuration.
//!

pub mod key;
pub mod key_extra;

use crate::flow::set::FlowSet;
use crate::flow::Flow;

use self::key::RunGroupKey;
use self::key_extra::RunGroupKeyExtra;

///
/// The benchmark test definition.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunGroupConfig {
    /// The configuration identity.
    pub key: RunGroupKey,
    /// The flows the test runs in.
    pub included_in: FlowSet,
    /// The static expected throughput, bypassing the calibration.
    /// Set for new tests until enough runs have been collected to calibrate them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_tps: Option<f64>,
    /// The workload parameters outside of the identity.
    #[serde(default)]
    pub key_extra: RunGroupKeyExtra,
    /// Whether threshold violations are reported as warnings instead of errors.
    #[serde(default)]
    pub waived: bool,
}

impl RunGroupConfig {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(key: RunGroupKey, included_in: FlowSet) -> Self {
        Self {
            key,
            included_in,
            expected_tps: None,
            key_extra: RunGroupKeyExtra::default(),
            waived: false,
        }
    }

    ///
    /// Sets the static expected throughput.
    ///
    pub fn with_expected_tps(mut self, expected_tps: f64) -> Self {
        self.expected_tps = Some(expected_tps);
        self
    }

    ///
    /// Sets the extra workload parameters.
    ///
    pub fn with_key_extra(mut self, key_extra: RunGroupKeyExtra) -> Self {
        self.key_extra = key_extra;
        self
    }

    ///
    /// Marks the test as waived.
    ///
    pub fn waived(mut self) -> Self {
        self.waived = true;
        self
    }

    ///
    /// Whether the test runs in the flow.
    ///
    pub fn is_included_in(&self, flow: Flow) -> bool {
        self.included_in.contains(flow)
    }
}
