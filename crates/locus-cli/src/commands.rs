use std::fs::File;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, IntoLazy, SerWriter, col, lit};
use tracing::{info, warn};

use locus_ingest::{DataCatalog, NullObserver};
use locus_model::columns;
use locus_model::GeoLevel;
use locus_transform::data_from_metadata;

use crate::cli::{
    CommonArgs, ExtractArgs, FunctionalArgs, GeoArgs, MetadataArgs, NaicsArgs, OutcomeArgs,
    YearArgs,
};
use crate::summary::print_frame;

pub fn run_year(args: &YearArgs) -> Result<()> {
    let catalog = build_catalog(&args.common);
    let df = catalog.load_by_year(&args.years, args.geo_level.into(), args.columns.into())?;
    report(df, &args.common)
}

pub fn run_naics(args: &NaicsArgs) -> Result<()> {
    let catalog = build_catalog(&args.common);
    let df = catalog.load_by_naics(
        &args.codes,
        args.level,
        args.geo_level.into(),
        args.columns.into(),
    )?;
    report(df, &args.common)
}

pub fn run_geo(args: &GeoArgs) -> Result<()> {
    let catalog = build_catalog(&args.common);
    let df = catalog.load_by_geo(&args.codes, args.geo_level.into(), args.columns.into())?;
    report(df, &args.common)
}

pub fn run_functional(args: &FunctionalArgs) -> Result<()> {
    let catalog = build_catalog(&args.common);
    let df = catalog.load_functional_data(args.geo_level.into())?;
    report(df, &args.common)
}

pub fn run_outcome(args: &OutcomeArgs) -> Result<()> {
    let catalog = build_catalog(&args.common);
    let df = catalog.load_outcome_data(args.geo_level.into(), args.dataset.into())?;
    report(df, &args.common)
}

pub fn run_metadata(args: &MetadataArgs) -> Result<()> {
    let catalog = build_catalog(&args.common);
    let df = catalog.load_outcome_metadata()?;
    report(df, &args.common)
}

pub fn run_extract(args: &ExtractArgs) -> Result<()> {
    let catalog = build_catalog(&args.common);
    let geo_level: GeoLevel = args.geo_level.into();
    let mut query = catalog.load_outcome_metadata()?;
    if let Some(topic) = &args.topic {
        query = query
            .lazy()
            .filter(col(columns::TOPIC).eq(lit(topic.as_str())))
            .collect()?;
        if query.height() == 0 {
            warn!(topic = %topic, "no metadata rows match the requested topic");
        }
    }
    let data = catalog.load_outcome_data(geo_level, args.dataset.into())?;
    let wide = data_from_metadata(&query, &data, geo_level)?;
    report(wide, &args.common)
}

fn build_catalog(common: &CommonArgs) -> DataCatalog {
    let catalog = DataCatalog::new(&common.data_root);
    if common.quiet_progress {
        catalog.with_observer(Box::new(NullObserver))
    } else {
        catalog
    }
}

/// Preview the frame and, when `--output` was given, export it as CSV.
fn report(mut df: DataFrame, common: &CommonArgs) -> Result<()> {
    print_frame(&df, common.preview_rows);
    if let Some(path) = &common.output {
        let mut file = File::create(path)
            .with_context(|| format!("create output file {}", path.display()))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .with_context(|| format!("write output file {}", path.display()))?;
        info!(path = %path.display(), rows = df.height(), "wrote csv");
    }
    Ok(())
}
