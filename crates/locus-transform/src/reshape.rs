//! Long-to-wide pivot over (year, geography) keys.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::{DataFrame, NamedFrom, Series};

use locus_model::columns;
use locus_model::error::{DataError, Result};

use crate::frame::{column_value_opt, column_value_string, require_columns};

/// Pivots a long-format outcome table into one row per (`YEAR`, geography)
/// pair, with one column per distinct `explanation` holding the matching
/// `value`.
///
/// Output columns are `YEAR`, the geography column, then the explanation
/// columns sorted by name; rows are sorted by key. Combinations absent
/// from the input come out null, and null input values stay null. A second
/// value for the same key and explanation is an error, never a silent
/// overwrite.
pub fn long_to_wide(df: &DataFrame, geo_column: &str) -> Result<DataFrame> {
    require_columns(
        df,
        &[columns::YEAR, geo_column, columns::VALUE, columns::EXPLANATION],
    )?;

    // Cells keyed by a (year, geography) tuple, so geography codes that
    // contain '_' stay intact through the pivot.
    let mut cells: BTreeMap<(String, String), BTreeMap<String, Option<String>>> = BTreeMap::new();
    let mut explanations = BTreeSet::new();

    for idx in 0..df.height() {
        let year = column_value_string(df, columns::YEAR, idx);
        let geo = column_value_string(df, geo_column, idx);
        let explanation = column_value_string(df, columns::EXPLANATION, idx);
        let value = column_value_opt(df, columns::VALUE, idx);

        explanations.insert(explanation.clone());
        let row = cells.entry((year.clone(), geo.clone())).or_default();
        if row.insert(explanation.clone(), value).is_some() {
            return Err(DataError::DuplicateKey {
                key: format!("{year}/{geo}"),
                column: explanation,
            });
        }
    }

    let mut years = Vec::with_capacity(cells.len());
    let mut geos = Vec::with_capacity(cells.len());
    let mut wide: BTreeMap<&String, Vec<Option<String>>> = explanations
        .iter()
        .map(|explanation| (explanation, Vec::with_capacity(cells.len())))
        .collect();

    for ((year, geo), row) in &cells {
        years.push(year.clone());
        geos.push(geo.clone());
        for (explanation, values) in &mut wide {
            values.push(row.get(*explanation).cloned().flatten());
        }
    }

    let mut out = vec![
        Series::new(columns::YEAR.into(), years).into(),
        Series::new(geo_column.into(), geos).into(),
    ];
    for (explanation, values) in wide {
        out.push(Series::new(explanation.as_str().into(), values).into());
    }

    DataFrame::new(out).map_err(Into::into)
}
