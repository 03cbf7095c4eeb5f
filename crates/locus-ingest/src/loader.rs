//! CSV loading with all-text schemas.
//!
//! Census exports mix identifiers that look numeric (FIPS, NAICS) with
//! real measurements, and leading zeros are significant. Every column is
//! therefore read as String and kept that way; numeric interpretation is
//! left to the caller.

use std::path::{Path, PathBuf};

use polars::functions::concat_df_diagonal;
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use locus_model::error::{DataError, Result};
use locus_model::{ColumnSet, GeoLevel};

use crate::progress::LoadObserver;

/// Reads a CSV file into a DataFrame with every column typed as String.
///
/// A missing file maps to [`DataError::MissingFile`] so multi-file loads
/// can tell "not there" apart from "there but unreadable".
pub fn read_string_csv(path: &Path) -> Result<DataFrame> {
    // Probe the file first; polars folds all io failures into one error.
    std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DataError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            DataError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    // An inference length of 0 disables schema inference, which leaves
    // every column as String.
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| DataError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| DataError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Restricts a loaded table to the strict column set for its level.
///
/// The projection also fixes the column order, so tables loaded from
/// different files concatenate cleanly.
fn project_strict(df: &DataFrame, geo_level: GeoLevel, path: &Path) -> Result<DataFrame> {
    let names = df.get_column_names();
    for required in geo_level.strict_columns() {
        if !names.iter().any(|name| name.as_str() == *required) {
            return Err(DataError::SchemaMismatch {
                column: (*required).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    df.select(geo_level.strict_columns().iter().copied())
        .map_err(Into::into)
}

/// Loads every path in `paths` and concatenates the results into one table.
///
/// Paths that do not exist are skipped with a warning; any other failure
/// aborts the load. [`ColumnSet::Strict`] projects each file to the strict
/// columns for `geo_level` before concatenation. [`ColumnSet::All`] keeps
/// everything, aligning mismatched columns by name and filling gaps with
/// nulls.
///
/// Returns [`DataError::EmptyResult`] when no file could be loaded at all.
pub fn load_from_paths(
    paths: &[PathBuf],
    geo_level: GeoLevel,
    column_set: ColumnSet,
    observer: &dyn LoadObserver,
) -> Result<DataFrame> {
    observer.begin(paths.len());
    let collected = collect_frames(paths, geo_level, column_set, observer);
    observer.finish();

    let (frames, skipped) = collected?;
    if frames.is_empty() {
        return Err(DataError::EmptyResult);
    }

    let combined = concat_df_diagonal(&frames)?;
    tracing::info!(
        files = frames.len(),
        skipped,
        rows = combined.height(),
        "loaded tables"
    );
    Ok(combined)
}

fn collect_frames(
    paths: &[PathBuf],
    geo_level: GeoLevel,
    column_set: ColumnSet,
    observer: &dyn LoadObserver,
) -> Result<(Vec<DataFrame>, usize)> {
    let mut frames = Vec::with_capacity(paths.len());
    let mut skipped = 0usize;

    for path in paths {
        match read_string_csv(path) {
            Ok(df) => {
                let df = match column_set {
                    ColumnSet::Strict => project_strict(&df, geo_level, path)?,
                    ColumnSet::All => df,
                };
                tracing::debug!(path = %path.display(), rows = df.height(), "loaded table");
                observer.file_loaded(path, df.height());
                frames.push(df);
            }
            Err(DataError::MissingFile { path }) => {
                tracing::warn!(path = %path.display(), "skipping missing file");
                observer.file_missing(&path);
                skipped += 1;
            }
            Err(other) => return Err(other),
        }
    }

    Ok((frames, skipped))
}
