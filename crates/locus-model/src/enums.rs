//! Type-safe selectors for geography levels, column handling, and
//! outcome datasets.
//!
//! The on-disk layout encodes all three as lowercase name fragments;
//! these enums keep call sites honest about which tables they address.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::columns;
use crate::error::DataError;

/// Geography level of a CBP or ACS table.
///
/// The level determines both the directory a table lives in and the
/// geography key column inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GeoLevel {
    /// County tables, keyed by 5-digit FIPS code.
    #[default]
    County,

    /// Metro/micropolitan statistical area tables, keyed by MSA code.
    Msa,
}

impl GeoLevel {
    /// Returns the lowercase name used in directory and file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoLevel::County => "county",
            GeoLevel::Msa => "msa",
        }
    }

    /// Returns the geography key column for tables at this level.
    pub fn geo_column(&self) -> &'static str {
        match self {
            GeoLevel::County => columns::FIPS,
            GeoLevel::Msa => columns::MSA,
        }
    }

    /// Returns the strict column set for functional tables at this level.
    pub fn strict_columns(&self) -> &'static [&'static str] {
        match self {
            GeoLevel::County => &columns::COUNTY_COLUMNS,
            GeoLevel::Msa => &columns::MSA_COLUMNS,
        }
    }
}

impl fmt::Display for GeoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GeoLevel {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "county" => Ok(GeoLevel::County),
            "msa" => Ok(GeoLevel::Msa),
            _ => Err(DataError::InvalidArgument {
                message: format!("unknown geography level '{s}' (expected 'county' or 'msa')"),
            }),
        }
    }
}

/// Column handling when loading functional tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColumnSet {
    /// Keep only the strict column set for the geography level.
    #[default]
    Strict,

    /// Keep every column present in the source files.
    All,
}

impl ColumnSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnSet::Strict => "strict",
            ColumnSet::All => "all",
        }
    }
}

impl fmt::Display for ColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnSet {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(ColumnSet::Strict),
            "all" => Ok(ColumnSet::All),
            _ => Err(DataError::InvalidArgument {
                message: format!("unknown column set '{s}' (expected 'strict' or 'all')"),
            }),
        }
    }
}

/// Which ACS outcome export to load.
///
/// The name is embedded in the file name, `acs_<dataset>_<geography>.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutcomeDataset {
    /// The full export with every surveyed variable.
    All,

    /// The cleaned export restricted to curated variables.
    #[default]
    Cleaned,
}

impl OutcomeDataset {
    /// Returns the name fragment used in outcome file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeDataset::All => "all",
            OutcomeDataset::Cleaned => "cleaned",
        }
    }
}

impl fmt::Display for OutcomeDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutcomeDataset {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(OutcomeDataset::All),
            "cleaned" => Ok(OutcomeDataset::Cleaned),
            _ => Err(DataError::InvalidArgument {
                message: format!("unknown outcome dataset '{s}' (expected 'all' or 'cleaned')"),
            }),
        }
    }
}
