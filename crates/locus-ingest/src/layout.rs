//! Path construction for the on-disk data layout.
//!
//! All tables live under one root directory:
//!
//! ```text
//! root/
//!   functional/
//!     cbp_<geography>.csv                        full CBP dataset
//!     year/<geography>/cbp_year_<geography>_<year>.csv
//!     naics/<geography>/cbp_naics_<geography>_<code>.csv
//!     geo/<geography>/cbp_<geography>_<code>.csv
//!   outcome/
//!     acs_<dataset>_<geography>.csv
//!   metadata/
//!     outcome_metadata.csv
//! ```
//!
//! Path builders are pure string work and never touch the filesystem;
//! the one exception is [`DataLayout::naics_level_paths`], which globs
//! the NAICS directory to find every code of a given digit length.

use std::path::{Path, PathBuf};

use glob::glob;

use locus_model::error::{DataError, Result};
use locus_model::{GeoLevel, OutcomeDataset};

/// Root of a data directory tree, with builders for every table path.
#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn functional_dir(&self) -> PathBuf {
        self.root.join("functional")
    }

    pub fn outcome_dir(&self) -> PathBuf {
        self.root.join("outcome")
    }

    pub fn metadata_dir(&self) -> PathBuf {
        self.root.join("metadata")
    }

    /// Path of the per-year CBP slice for one year.
    pub fn year_path(&self, geo_level: GeoLevel, year: i32) -> PathBuf {
        let geo = geo_level.as_str();
        self.functional_dir()
            .join("year")
            .join(geo)
            .join(format!("cbp_year_{geo}_{year}.csv"))
    }

    /// Paths of the per-year CBP slices for a list of years, in input order.
    pub fn year_paths(&self, geo_level: GeoLevel, years: &[i32]) -> Vec<PathBuf> {
        years
            .iter()
            .map(|year| self.year_path(geo_level, *year))
            .collect()
    }

    /// Path of the per-industry CBP slice for one NAICS code.
    pub fn naics_path(&self, geo_level: GeoLevel, code: &str) -> PathBuf {
        let geo = geo_level.as_str();
        self.functional_dir()
            .join("naics")
            .join(geo)
            .join(format!("cbp_naics_{geo}_{code}.csv"))
    }

    /// Paths of the per-industry CBP slices for a list of NAICS codes,
    /// in input order.
    pub fn naics_paths<S: AsRef<str>>(&self, geo_level: GeoLevel, codes: &[S]) -> Vec<PathBuf> {
        codes
            .iter()
            .map(|code| self.naics_path(geo_level, code.as_ref()))
            .collect()
    }

    /// Paths of every per-industry slice whose NAICS code has exactly
    /// `naics_level` digits, found by globbing the NAICS directory.
    ///
    /// Results are sorted by path so repeated calls see the same order
    /// regardless of directory iteration order. A code matches on length
    /// alone; `naics_level` 2 matches `23` and `42` but not `236`.
    pub fn naics_level_paths(&self, geo_level: GeoLevel, naics_level: u8) -> Result<Vec<PathBuf>> {
        let geo = geo_level.as_str();
        let wildcard = "?".repeat(usize::from(naics_level));
        let dir = self.functional_dir().join("naics").join(geo);
        let pattern = format!("{}/cbp_naics_{geo}_{wildcard}.csv", dir.display());

        let entries = glob(&pattern).map_err(|e| DataError::InvalidArgument {
            message: format!("invalid NAICS glob pattern '{pattern}': {e}"),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => paths.push(path),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry in NAICS directory");
                }
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Resolves a NAICS selection given either explicit codes or a level.
    ///
    /// Exactly one of the two may be supplied. Explicit codes map to their
    /// file paths directly; a level expands through the filesystem via
    /// [`DataLayout::naics_level_paths`].
    pub fn naics_selection_paths<S: AsRef<str>>(
        &self,
        geo_level: GeoLevel,
        codes: &[S],
        naics_level: Option<u8>,
    ) -> Result<Vec<PathBuf>> {
        match naics_level {
            Some(level) => {
                if !codes.is_empty() {
                    return Err(DataError::InvalidArgument {
                        message: "NAICS codes and a NAICS level are mutually exclusive; \
                                  supply one or the other"
                            .to_string(),
                    });
                }
                self.naics_level_paths(geo_level, level)
            }
            None => Ok(self.naics_paths(geo_level, codes)),
        }
    }

    /// Path of the per-geography CBP slice for one geography code.
    pub fn geo_path(&self, geo_level: GeoLevel, code: &str) -> PathBuf {
        let geo = geo_level.as_str();
        self.functional_dir()
            .join("geo")
            .join(geo)
            .join(format!("cbp_{geo}_{code}.csv"))
    }

    /// Paths of the per-geography CBP slices for a list of codes,
    /// in input order.
    pub fn geo_paths<S: AsRef<str>>(&self, geo_level: GeoLevel, codes: &[S]) -> Vec<PathBuf> {
        codes
            .iter()
            .map(|code| self.geo_path(geo_level, code.as_ref()))
            .collect()
    }

    /// Path of the complete CBP dataset for a geography level.
    pub fn functional_path(&self, geo_level: GeoLevel) -> PathBuf {
        self.functional_dir()
            .join(format!("cbp_{}.csv", geo_level.as_str()))
    }

    /// Path of an ACS outcome export.
    pub fn outcome_path(&self, geo_level: GeoLevel, dataset: OutcomeDataset) -> PathBuf {
        self.outcome_dir()
            .join(format!("acs_{}_{}.csv", dataset.as_str(), geo_level.as_str()))
    }

    /// Path of the outcome metadata file.
    pub fn outcome_metadata_path(&self) -> PathBuf {
        self.metadata_dir().join("outcome_metadata.csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn layout() -> DataLayout {
        DataLayout::new("/data")
    }

    #[test]
    fn test_year_path() {
        assert_eq!(
            layout().year_path(GeoLevel::County, 2010),
            PathBuf::from("/data/functional/year/county/cbp_year_county_2010.csv")
        );
        assert_eq!(
            layout().year_path(GeoLevel::Msa, 2016),
            PathBuf::from("/data/functional/year/msa/cbp_year_msa_2016.csv")
        );
    }

    #[test]
    fn test_naics_path() {
        assert_eq!(
            layout().naics_path(GeoLevel::County, "236"),
            PathBuf::from("/data/functional/naics/county/cbp_naics_county_236.csv")
        );
    }

    #[test]
    fn test_geo_path() {
        assert_eq!(
            layout().geo_path(GeoLevel::County, "08031"),
            PathBuf::from("/data/functional/geo/county/cbp_county_08031.csv")
        );
        assert_eq!(
            layout().geo_path(GeoLevel::Msa, "19740"),
            PathBuf::from("/data/functional/geo/msa/cbp_msa_19740.csv")
        );
    }

    #[test]
    fn test_functional_and_outcome_paths() {
        assert_eq!(
            layout().functional_path(GeoLevel::Msa),
            PathBuf::from("/data/functional/cbp_msa.csv")
        );
        assert_eq!(
            layout().outcome_path(GeoLevel::County, OutcomeDataset::Cleaned),
            PathBuf::from("/data/outcome/acs_cleaned_county.csv")
        );
        assert_eq!(
            layout().outcome_path(GeoLevel::Msa, OutcomeDataset::All),
            PathBuf::from("/data/outcome/acs_all_msa.csv")
        );
        assert_eq!(
            layout().outcome_metadata_path(),
            PathBuf::from("/data/metadata/outcome_metadata.csv")
        );
    }

    #[test]
    fn test_naics_level_paths_matches_digit_count() {
        let dir = TempDir::new().unwrap();
        let naics_dir = dir.path().join("functional/naics/county");
        fs::create_dir_all(&naics_dir).unwrap();
        for code in ["23", "42", "236", "4451"] {
            fs::write(
                naics_dir.join(format!("cbp_naics_county_{code}.csv")),
                "FIPS,YEAR\n",
            )
            .unwrap();
        }

        let layout = DataLayout::new(dir.path());
        let paths = layout.naics_level_paths(GeoLevel::County, 2).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["cbp_naics_county_23.csv", "cbp_naics_county_42.csv"]
        );

        let paths = layout.naics_level_paths(GeoLevel::County, 3).unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("cbp_naics_county_236.csv"));

        // No 5-digit files present.
        assert!(
            layout
                .naics_level_paths(GeoLevel::County, 5)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_naics_selection_rejects_both_codes_and_level() {
        let result = layout().naics_selection_paths(GeoLevel::County, &["23"], Some(2));
        assert!(matches!(result, Err(DataError::InvalidArgument { .. })));
    }

    #[test]
    fn test_naics_selection_with_codes_only() {
        let paths = layout()
            .naics_selection_paths(GeoLevel::County, &["23", "42"], None)
            .unwrap();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/data/functional/naics/county/cbp_naics_county_23.csv"),
                PathBuf::from("/data/functional/naics/county/cbp_naics_county_42.csv"),
            ]
        );
    }
}
