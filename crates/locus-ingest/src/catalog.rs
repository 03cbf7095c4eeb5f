//! High-level loading operations over one data root.

use std::path::PathBuf;

use polars::prelude::DataFrame;

use locus_model::error::Result;
use locus_model::{ColumnSet, GeoLevel, OutcomeDataset};

use crate::layout::DataLayout;
use crate::loader::{load_from_paths, read_string_csv};
use crate::progress::{LoadObserver, ProgressObserver};

/// Entry point for loading tables from a data directory tree.
///
/// A catalog owns the layout for one data root plus the observer that
/// receives progress events during multi-file loads. The default observer
/// draws an indicatif bar on stderr, which hides itself on non-terminals;
/// swap in a `NullObserver` for fully silent loads.
pub struct DataCatalog {
    layout: DataLayout,
    observer: Box<dyn LoadObserver>,
}

impl DataCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            layout: DataLayout::new(root),
            observer: Box::new(ProgressObserver::new()),
        }
    }

    /// Replaces the progress observer.
    pub fn with_observer(mut self, observer: Box<dyn LoadObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    /// Loads and concatenates the per-year CBP slices for `years`.
    ///
    /// Years with no file on disk are skipped with a warning.
    pub fn load_by_year(
        &self,
        years: &[i32],
        geo_level: GeoLevel,
        column_set: ColumnSet,
    ) -> Result<DataFrame> {
        let paths = self.layout.year_paths(geo_level, years);
        load_from_paths(&paths, geo_level, column_set, self.observer.as_ref())
    }

    /// Loads per-industry CBP slices, selected either by explicit NAICS
    /// codes or by digit count. Supplying both selections is an error.
    pub fn load_by_naics<S: AsRef<str>>(
        &self,
        codes: &[S],
        naics_level: Option<u8>,
        geo_level: GeoLevel,
        column_set: ColumnSet,
    ) -> Result<DataFrame> {
        let paths = self
            .layout
            .naics_selection_paths(geo_level, codes, naics_level)?;
        load_from_paths(&paths, geo_level, column_set, self.observer.as_ref())
    }

    /// Loads and concatenates the per-geography CBP slices for `codes`.
    pub fn load_by_geo<S: AsRef<str>>(
        &self,
        codes: &[S],
        geo_level: GeoLevel,
        column_set: ColumnSet,
    ) -> Result<DataFrame> {
        let paths = self.layout.geo_paths(geo_level, codes);
        load_from_paths(&paths, geo_level, column_set, self.observer.as_ref())
    }

    /// Loads the complete CBP dataset for a geography level in one piece.
    ///
    /// Unlike the sliced loads this reads a single monolithic file, keeps
    /// every column, and treats a missing file as fatal.
    pub fn load_functional_data(&self, geo_level: GeoLevel) -> Result<DataFrame> {
        let path = self.layout.functional_path(geo_level);
        tracing::warn!(
            path = %path.display(),
            "loading the full functional dataset; this can take several minutes \
             and more than 10 GB of memory"
        );
        read_string_csv(&path)
    }

    /// Loads an ACS outcome export. A missing file is fatal.
    pub fn load_outcome_data(
        &self,
        geo_level: GeoLevel,
        dataset: OutcomeDataset,
    ) -> Result<DataFrame> {
        read_string_csv(&self.layout.outcome_path(geo_level, dataset))
    }

    /// Loads the outcome metadata table. A missing file is fatal.
    pub fn load_outcome_metadata(&self) -> Result<DataFrame> {
        read_string_csv(&self.layout.outcome_metadata_path())
    }
}
