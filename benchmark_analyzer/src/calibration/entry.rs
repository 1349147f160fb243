//!
//! The calibration entry.
//!

use super::error::EntryError;

///
/// The historical throughput statistics of one configuration.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CalibrationEntry {
    /// The reference median throughput.
    pub expected_tps: f64,
    /// The number of historical runs the ratios are observed on.
    pub count: usize,
    /// The smallest observed ratio of a run throughput to the reference.
    pub min_ratio: f64,
    /// The largest observed ratio of a run throughput to the reference.
    pub max_ratio: f64,
}

impl CalibrationEntry {
    ///
    /// A shortcut constructor, checking the entry invariants.
    ///
    pub fn new(
        expected_tps: f64,
        count: usize,
        min_ratio: f64,
        max_ratio: f64,
    ) -> Result<Self, EntryError> {
        if count == 0 {
            return Err(EntryError::ZeroCount);
        }
        if !(expected_tps > 0.0 && expected_tps.is_finite()) {
            return Err(EntryError::ExpectedTps(expected_tps));
        }
        if !(min_ratio > 0.0 && min_ratio <= 1.0 && max_ratio >= 1.0 && max_ratio.is_finite()) {
            return Err(EntryError::Ratios {
                min_ratio,
                max_ratio,
            });
        }

        Ok(Self {
            expected_tps,
            count,
            min_ratio,
            max_ratio,
        })
    }
}
