//! Reshaping and metadata-driven extraction for outcome tables.
//!
//! Outcome data arrives in long format, one observation per row; analysis
//! wants one row per (year, geography) pair. [`long_to_wide`] performs
//! that pivot, and [`data_from_metadata`] drives it from a metadata query
//! table that names the variables of interest.

pub mod frame;
pub mod metadata;
pub mod reshape;

pub use frame::{any_to_string, column_value_opt, column_value_string, require_columns};
pub use metadata::data_from_metadata;
pub use reshape::long_to_wide;
