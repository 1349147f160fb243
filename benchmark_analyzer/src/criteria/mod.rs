//!
//! The throughput acceptance criteria.
//!

pub mod error;
pub mod noise_limits;

use crate::calibration::entry::CalibrationEntry;
use crate::calibration::CalibrationTable;
use crate::model::run_group::RunGroupConfig;

use self::error::CriteriaError;
use self::noise_limits::NoiseLimits;

///
/// The throughput band a single test run is judged against.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Criteria {
    /// The expected median throughput.
    pub expected_tps: f64,
    /// Below this throughput the run is a regression.
    pub min_tps: f64,
    /// Below this throughput the run is a potential regression within the noise.
    pub min_warn_tps: f64,
    /// Above this throughput the run is an improvement.
    pub max_tps: f64,
    /// Above this throughput the run is a potential improvement within the noise.
    pub max_warn_tps: f64,
}

impl Criteria {
    ///
    /// The exponent shrinking the observed ratios towards 1 for the warning band.
    ///
    /// Chosen by observing the calibration runs rather than derived, so it is a tunable.
    ///
    pub const WARN_RATIO_EXPONENT: f64 = 0.8;

    /// The inflation of the observed ratio gap per missing sample.
    pub const SAMPLE_INFLATION: f64 = 10.0;

    ///
    /// Resolves the criteria of the test.
    ///
    /// The static expected throughput takes precedence, and the calibration table is not
    /// consulted at all in that case.
    ///
    pub fn resolve(
        config: &RunGroupConfig,
        calibration: &CalibrationTable,
        noise_limits: &NoiseLimits,
    ) -> Result<Self, CriteriaError> {
        if let Some(expected_tps) = config.expected_tps {
            return Ok(Self::uncalibrated(expected_tps, noise_limits));
        }

        calibration
            .get(&config.key)
            .map(Self::calibrated)
            .ok_or_else(|| CriteriaError::Uncalibrated {
                key: config.key.clone(),
            })
    }

    ///
    /// The symmetric band around a static expected throughput.
    ///
    pub fn uncalibrated(expected_tps: f64, noise_limits: &NoiseLimits) -> Self {
        Self {
            expected_tps,
            min_tps: expected_tps * noise_limits.lower,
            min_warn_tps: expected_tps * noise_limits.lower_warn,
            max_tps: expected_tps * noise_limits.upper,
            max_warn_tps: expected_tps * noise_limits.upper_warn,
        }
    }

    ///
    /// The band derived from the historical statistics.
    ///
    /// The observed extremes are noisy estimates themselves, so the gap between 1 and each
    /// extreme is inflated by `SAMPLE_INFLATION / count`, and `1 / count` is added on top.
    /// The fewer samples there are, the wider the hard band is.
    ///
    pub fn calibrated(entry: &CalibrationEntry) -> Self {
        let count = entry.count as f64;
        let inflation = 1.0 + Self::SAMPLE_INFLATION / count;
        let margin = 1.0 / count;

        Self {
            expected_tps: entry.expected_tps,
            min_tps: entry.expected_tps * (1.0 - (1.0 - entry.min_ratio) * inflation - margin),
            min_warn_tps: entry.expected_tps * entry.min_ratio.powf(Self::WARN_RATIO_EXPONENT),
            max_tps: entry.expected_tps * (1.0 + (entry.max_ratio - 1.0) * inflation + margin),
            max_warn_tps: entry.expected_tps * entry.max_ratio.powf(Self::WARN_RATIO_EXPONENT),
        }
    }

    ///
    /// The block size used to run the test, that is the expected throughput capped by the maximum.
    ///
    pub fn block_size(&self, max_block_size: usize) -> usize {
        self.expected_tps.min(max_block_size as f64) as usize
    }

    ///
    /// Whether the bounds are ordered.
    ///
    pub fn is_ordered(&self) -> bool {
        self.min_tps <= self.min_warn_tps
            && self.min_warn_tps <= self.expected_tps
            && self.expected_tps <= self.max_warn_tps
            && self.max_warn_tps <= self.max_tps
    }
}
