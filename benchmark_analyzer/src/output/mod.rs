//!
//! The benchmark analyzer output.
//!

pub mod field;
pub mod record;
pub mod table;
