//!
//! The benchmark data model.
//!

pub mod executor_type;
pub mod run_group;
pub mod run_group_instance;
