//! Joining metadata queries against long-format outcome data.

use polars::prelude::{
    DataFrame, IntoLazy, IntoSeries, JoinArgs, JoinType, StringChunkedBuilder, col, lit,
};

use locus_model::GeoLevel;
use locus_model::columns;
use locus_model::error::Result;

use crate::frame::{column_value_string, require_columns};
use crate::reshape::long_to_wide;

/// Builds a wide table of outcome values for the variables a metadata
/// query selects.
///
/// `query` needs `year`, `topic`, `variable_name`, and `explanation`
/// columns; `data` needs `YEAR`, the geography column for `geo_level`,
/// `variable`, and `value`. The caller's `query` is never modified: the
/// join key `topic_variableName` is derived on an internal copy. Data
/// rows whose geography carries the repeated-header sentinel are dropped,
/// rows matching no query variable fall out of the inner join, and the
/// survivors are pivoted with [`long_to_wide`].
pub fn data_from_metadata(
    query: &DataFrame,
    data: &DataFrame,
    geo_level: GeoLevel,
) -> Result<DataFrame> {
    let geo = geo_level.geo_column();
    require_columns(
        data,
        &[columns::YEAR, geo, columns::VARIABLE, columns::VALUE],
    )?;
    require_columns(
        query,
        &[
            columns::QUERY_YEAR,
            columns::TOPIC,
            columns::VARIABLE_NAME,
            columns::EXPLANATION,
        ],
    )?;

    // The join key is topic + '_' + variable_name.
    let mut variable = StringChunkedBuilder::new(columns::VARIABLE.into(), query.height());
    for idx in 0..query.height() {
        let topic = column_value_string(query, columns::TOPIC, idx);
        let name = column_value_string(query, columns::VARIABLE_NAME, idx);
        variable.append_value(format!("{topic}_{name}"));
    }

    let mut keys = query
        .clone()
        .lazy()
        .select([
            col(columns::QUERY_YEAR).alias(columns::YEAR),
            col(columns::EXPLANATION),
        ])
        .collect()?;
    keys.with_column(variable.finish().into_series())?;

    let narrowed = data
        .clone()
        .lazy()
        .select([
            col(columns::YEAR),
            col(geo),
            col(columns::VARIABLE),
            col(columns::VALUE),
        ])
        // Census exports repeat their header block mid-file; those rows
        // carry the sentinel in the geography column. Null geographies
        // are real data and stay.
        .filter(
            col(geo)
                .neq(lit(columns::GEO_HEADER_SENTINEL))
                .or(col(geo).is_null()),
        );

    let joined = narrowed
        .join(
            keys.lazy(),
            [col(columns::YEAR), col(columns::VARIABLE)],
            [col(columns::YEAR), col(columns::VARIABLE)],
            JoinArgs::new(JoinType::Inner),
        )
        .collect()?;
    tracing::debug!(rows = joined.height(), "matched outcome rows to query");

    long_to_wide(&joined, geo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    fn query_frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("year".into(), vec!["2010"]).into(),
            Series::new("topic".into(), vec!["census"]).into(),
            Series::new("variable_name".into(), vec!["pop"]).into(),
            Series::new("explanation".into(), vec!["Population"]).into(),
        ])
        .unwrap()
    }

    fn data_frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("YEAR".into(), vec!["2010", "2010", "2010"]).into(),
            Series::new("FIPS".into(), vec!["08031", "Id2", "08032"]).into(),
            Series::new(
                "variable".into(),
                vec!["census_pop", "census_pop", "acs_income"],
            )
            .into(),
            Series::new("value".into(), vec!["600000", "999", "51000"]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_selects_matching_variable_rows() {
        let wide = data_from_metadata(&query_frame(), &data_frame(), GeoLevel::County).unwrap();

        // The Id2 header row and the unmatched acs_income row both drop out.
        assert_eq!(wide.height(), 1);
        let fips = wide.column("FIPS").unwrap().str().unwrap();
        assert_eq!(fips.get(0), Some("08031"));
        let population = wide.column("Population").unwrap().str().unwrap();
        assert_eq!(population.get(0), Some("600000"));
    }

    #[test]
    fn test_query_frame_is_untouched() {
        let query = query_frame();
        let before: Vec<_> = query
            .get_column_names()
            .iter()
            .map(|n| n.as_str().to_string())
            .collect();

        data_from_metadata(&query, &data_frame(), GeoLevel::County).unwrap();

        let after: Vec<_> = query
            .get_column_names()
            .iter()
            .map(|n| n.as_str().to_string())
            .collect();
        assert_eq!(before, after);
        assert_eq!(query.width(), 4);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let query = query_frame();
        let data = data_frame();
        let first = data_from_metadata(&query, &data, GeoLevel::County).unwrap();
        let second = data_from_metadata(&query, &data, GeoLevel::County).unwrap();

        assert_eq!(first.shape(), second.shape());
        let a = first.column("Population").unwrap().str().unwrap();
        let b = second.column("Population").unwrap().str().unwrap();
        assert_eq!(a.get(0), b.get(0));
    }

    #[test]
    fn test_null_geography_rows_are_kept() {
        let data = DataFrame::new(vec![
            Series::new("YEAR".into(), vec!["2010", "2010"]).into(),
            Series::new("FIPS".into(), vec![Some("08031"), None::<&str>]).into(),
            Series::new("variable".into(), vec!["census_pop", "census_pop"]).into(),
            Series::new("value".into(), vec!["600000", "42"]).into(),
        ])
        .unwrap();

        let wide = data_from_metadata(&query_frame(), &data, GeoLevel::County).unwrap();
        // The null geography becomes its own empty-string key row.
        assert_eq!(wide.height(), 2);
    }

    #[test]
    fn test_missing_query_column_is_an_error() {
        let query = DataFrame::new(vec![
            Series::new("year".into(), vec!["2010"]).into(),
            Series::new("topic".into(), vec!["census"]).into(),
        ])
        .unwrap();

        let err = data_from_metadata(&query, &data_frame(), GeoLevel::County).unwrap_err();
        assert!(matches!(
            err,
            locus_model::DataError::ColumnNotFound { .. }
        ));
    }
}
