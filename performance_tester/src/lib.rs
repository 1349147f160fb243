//!
//! The single-node performance tester library.
//!

pub mod benchmark;
pub mod catalog;
pub mod config;
pub mod process;
pub mod tester;

mod tests;

pub use crate::benchmark::BenchmarkCommand;
pub use crate::catalog::error::CatalogError;
pub use crate::catalog::Catalog;
pub use crate::config::build_profile::BuildProfile;
pub use crate::config::source::Source;
pub use crate::config::Config;
pub use crate::process::error::ProcessError;
pub use crate::process::native::NativeRunner;
pub use crate::process::Runner;
pub use crate::tester::outcome::Outcome;
pub use crate::tester::planned_test::PlannedTest;
pub use crate::tester::PerformanceTester;

/// The calibration table shipped with the tester.
pub const EMBEDDED_CALIBRATION: &str = include_str!("../configs/calibration.tsv");
