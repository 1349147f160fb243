//!
//! The noise limits of uncalibrated tests.
//!

use crate::flow::Flow;

///
/// The fixed multipliers applied to a static expected throughput.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseLimits {
    /// The hard lower limit.
    pub lower: f64,
    /// The warning lower limit.
    pub lower_warn: f64,
    /// The hard upper limit.
    pub upper: f64,
    /// The warning upper limit.
    pub upper_warn: f64,
}

impl NoiseLimits {
    /// The hard lower limit.
    pub const LOWER: f64 = 0.8;
    /// The hard lower limit of the mainnet hardware evaluation.
    pub const LOWER_MAINNET: f64 = 0.98;
    /// The warning lower limit.
    pub const LOWER_WARN: f64 = 0.9;
    /// The hard upper limit.
    /// May be raised temporarily, e.g. to 1.3, to calibrate after a performance improvement.
    pub const UPPER: f64 = 1.15;
    /// The warning upper limit.
    pub const UPPER_WARN: f64 = 1.05;

    ///
    /// The limits used in the flow.
    ///
    pub fn for_flow(flow: Flow) -> Self {
        Self {
            lower: if flow.is_mainnet() {
                Self::LOWER_MAINNET
            } else {
                Self::LOWER
            },
            lower_warn: Self::LOWER_WARN,
            upper: Self::UPPER,
            upper_warn: Self::UPPER_WARN,
        }
    }
}
