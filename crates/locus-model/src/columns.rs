//! Column names shared across CBP functional tables, ACS outcome tables,
//! and the outcome metadata file.
//!
//! The Census exports are not consistent about casing, so the names here
//! are the exact strings found in the files rather than one convention.

/// Year column carried by every functional and outcome table.
pub const YEAR: &str = "YEAR";

/// County geography column holding 5-digit state+county FIPS codes.
pub const FIPS: &str = "FIPS";

/// Metro/micropolitan statistical area geography column.
pub const MSA: &str = "MSA";

/// Observation value column in long-format outcome tables.
pub const VALUE: &str = "value";

/// Human-readable variable description, shared by metadata and long tables.
pub const EXPLANATION: &str = "explanation";

/// Fully qualified variable identifier in long-format outcome tables.
pub const VARIABLE: &str = "variable";

/// Metadata column holding the dataset topic prefix.
pub const TOPIC: &str = "topic";

/// Metadata column holding the bare variable name within its topic.
pub const VARIABLE_NAME: &str = "variable_name";

/// Lowercase year column as it appears in metadata query tables.
pub const QUERY_YEAR: &str = "year";

/// Geography value marking repeated Census header rows embedded in the data.
pub const GEO_HEADER_SENTINEL: &str = "Id2";

/// Strict column set for county-level functional tables, in output order.
pub const COUNTY_COLUMNS: [&str; 7] = [
    FIPS,
    YEAR,
    "naics_level",
    "naics",
    "emp_imputed",
    "PAYANN",
    "ESTAB",
];

/// Strict column set for MSA-level functional tables, in output order.
pub const MSA_COLUMNS: [&str; 6] = [MSA, YEAR, "NAICS", "emp_imputed", "PAYANN", "ESTAB"];
