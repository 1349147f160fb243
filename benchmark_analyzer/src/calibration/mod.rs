//!
//! The calibration table.
//!

pub mod entry;
pub mod error;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

use crate::model::executor_type::ExecutorType;
use crate::model::run_group::key::RunGroupKey;

use self::entry::CalibrationEntry;
use self::error::CalibrationError;

///
/// The calibration table, mapping configurations to their historical statistics.
///
/// The text format is one whitespace-separated row per configuration:
/// `transaction_type module_working_set_size executor_type ... count min_ratio max_ratio expected_tps`.
/// The key is read from the leading columns and the statistics from the trailing ones,
/// so additional columns in between are tolerated.
///
#[derive(Debug, Default, Clone)]
pub struct CalibrationTable {
    /// The entries.
    entries: BTreeMap<RunGroupKey, CalibrationEntry>,
}

impl CalibrationTable {
    /// The minimal number of columns in a row.
    pub const MIN_COLUMNS: usize = 7;

    /// The `count` column offset from the row end.
    const COUNT_OFFSET: usize = 4;
    /// The `min_ratio` column offset from the row end.
    const MIN_RATIO_OFFSET: usize = 3;
    /// The `max_ratio` column offset from the row end.
    const MAX_RATIO_OFFSET: usize = 2;
    /// The `expected_tps` column offset from the row end.
    const EXPECTED_TPS_OFFSET: usize = 1;

    ///
    /// Returns the entry of the configuration.
    ///
    pub fn get(&self, key: &RunGroupKey) -> Option<&CalibrationEntry> {
        self.entries.get(key)
    }

    ///
    /// Iterates over the entries in key order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&RunGroupKey, &CalibrationEntry)> {
        self.entries.iter()
    }

    ///
    /// The number of calibrated configurations.
    ///
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    ///
    /// Whether no configuration is calibrated.
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    ///
    /// Parses a row into a key and its entry.
    ///
    fn parse_row(
        line: usize,
        columns: &[&str],
    ) -> Result<(RunGroupKey, CalibrationEntry), CalibrationError> {
        if columns.len() < Self::MIN_COLUMNS {
            return Err(CalibrationError::Columns {
                line,
                expected: Self::MIN_COLUMNS,
                found: columns.len(),
            });
        }
        let from_end = |offset: usize| columns[columns.len() - offset];

        let module_working_set_size = Self::parse_value::<usize>(
            line,
            "module_working_set_size",
            columns[1],
        )?;
        if module_working_set_size == 0 {
            return Err(CalibrationError::Value {
                line,
                column: "module_working_set_size",
                value: columns[1].to_owned(),
            });
        }
        let executor_type = Self::parse_value::<ExecutorType>(line, "executor_type", columns[2])?;
        let key = RunGroupKey::new(columns[0])
            .with_module_working_set_size(module_working_set_size)
            .with_executor_type(executor_type);

        let count = Self::parse_value::<usize>(line, "count", from_end(Self::COUNT_OFFSET))?;
        let min_ratio =
            Self::parse_value::<f64>(line, "min_ratio", from_end(Self::MIN_RATIO_OFFSET))?;
        let max_ratio =
            Self::parse_value::<f64>(line, "max_ratio", from_end(Self::MAX_RATIO_OFFSET))?;
        let expected_tps =
            Self::parse_value::<f64>(line, "expected_tps", from_end(Self::EXPECTED_TPS_OFFSET))?;

        let entry = CalibrationEntry::new(expected_tps, count, min_ratio, max_ratio)
            .map_err(|error| CalibrationError::Entry { line, error })?;
        Ok((key, entry))
    }

    ///
    /// Parses a single column value.
    ///
    fn parse_value<T>(line: usize, column: &'static str, value: &str) -> Result<T, CalibrationError>
    where
        T: FromStr,
    {
        value.parse::<T>().map_err(|_| CalibrationError::Value {
            line,
            column,
            value: value.to_owned(),
        })
    }
}

impl FromStr for CalibrationTable {
    type Err = CalibrationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut entries = BTreeMap::new();
        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let columns = line.split_whitespace().collect::<Vec<&str>>();
            let (key, entry) = Self::parse_row(line_number, columns.as_slice())?;
            if entries.contains_key(&key) {
                return Err(CalibrationError::Duplicate {
                    line: line_number,
                    key,
                });
            }
            entries.insert(key, entry);
        }
        Ok(Self { entries })
    }
}

impl TryFrom<PathBuf> for CalibrationTable {
    type Error = CalibrationError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path.as_path())
            .map_err(|error| CalibrationError::Reading { error, path })?;
        Self::from_str(text.as_str())
    }
}
