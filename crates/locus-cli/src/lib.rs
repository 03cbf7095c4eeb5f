//! CLI library components for the locus-data tool.

pub mod logging;
