pub mod columns;
pub mod enums;
pub mod error;

pub use enums::{ColumnSet, GeoLevel, OutcomeDataset};
pub use error::{DataError, Result};
