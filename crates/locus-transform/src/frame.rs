//! DataFrame value-extraction helpers.
//!
//! The reshape code walks frames row by row; these helpers keep the
//! `AnyValue` handling in one place.

use polars::prelude::{AnyValue, DataFrame};

use locus_model::error::{DataError, Result};

/// Converts a Polars `AnyValue` to its text representation.
///
/// Null becomes the empty string. Tables loaded by this workspace are
/// all-String, but caller-built frames may carry other dtypes, which fall
/// back to their display form.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Gets the text value of column `name` at row `idx`.
///
/// Missing columns, out-of-range rows, and nulls all become the empty
/// string.
pub fn column_value_string(df: &DataFrame, name: &str, idx: usize) -> String {
    match df.column(name) {
        Ok(column) => any_to_string(column.get(idx).unwrap_or(AnyValue::Null)),
        Err(_) => String::new(),
    }
}

/// Gets the value of column `name` at row `idx`, keeping nulls as `None`.
pub fn column_value_opt(df: &DataFrame, name: &str, idx: usize) -> Option<String> {
    let column = df.column(name).ok()?;
    match column.get(idx).unwrap_or(AnyValue::Null) {
        AnyValue::Null => None,
        value => Some(any_to_string(value)),
    }
}

/// Checks that every name in `required` is a column of `df`.
pub fn require_columns(df: &DataFrame, required: &[&str]) -> Result<()> {
    let names = df.get_column_names();
    for required in required {
        if !names.iter().any(|name| name.as_str() == *required) {
            return Err(DataError::ColumnNotFound {
                column: (*required).to_string(),
            });
        }
    }
    Ok(())
}
