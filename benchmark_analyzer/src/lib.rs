//!
//! The single-node benchmark analyzer library.
//!

pub mod calibration;
pub mod criteria;
pub mod flow;
pub mod model;
pub mod output;
pub mod report;
pub mod results;
pub mod verdict;

mod tests;

pub use crate::calibration::entry::CalibrationEntry;
pub use crate::calibration::error::CalibrationError;
pub use crate::calibration::error::EntryError as CalibrationEntryError;
pub use crate::calibration::CalibrationTable;
pub use crate::criteria::error::CriteriaError;
pub use crate::criteria::noise_limits::NoiseLimits;
pub use crate::criteria::Criteria;
pub use crate::flow::set::FlowSet;
pub use crate::flow::Flow;
pub use crate::model::executor_type::ExecutorType;
pub use crate::model::run_group::key::RunGroupKey;
pub use crate::model::run_group::key_extra::RunGroupKeyExtra;
pub use crate::model::run_group::RunGroupConfig;
pub use crate::model::run_group_instance::RunGroupInstance;
pub use crate::output::field::Field as TableField;
pub use crate::output::record::Record as JsonRecord;
pub use crate::output::table::ResultTables;
pub use crate::report::Report;
pub use crate::results::error::ExtractionError;
pub use crate::results::RunResults;
pub use crate::verdict::severity::Severity;
pub use crate::verdict::Verdict;
