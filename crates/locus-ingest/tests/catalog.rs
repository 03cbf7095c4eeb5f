use std::fs;
use std::path::Path;

use tempfile::TempDir;

use locus_ingest::{DataCatalog, NullObserver};
use locus_model::{ColumnSet, DataError, GeoLevel, OutcomeDataset};

const COUNTY_HEADER: &str = "FIPS,YEAR,naics_level,naics,emp_imputed,PAYANN,ESTAB";

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).expect("create dir");
    fs::write(&path, content).expect("write file");
}

fn county_rows(rows: &[&str]) -> String {
    let mut out = String::from(COUNTY_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

fn sample_tree() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path();

    write_file(
        root,
        "functional/year/county/cbp_year_county_2010.csv",
        &county_rows(&["08031,2010,2,23,100,5000,10", "08032,2010,2,23,90,4000,8"]),
    );
    write_file(
        root,
        "functional/year/county/cbp_year_county_2011.csv",
        &county_rows(&["08031,2011,2,23,110,5200,11"]),
    );
    write_file(
        root,
        "functional/naics/county/cbp_naics_county_23.csv",
        &county_rows(&["08031,2010,2,23,100,5000,10"]),
    );
    write_file(
        root,
        "functional/naics/county/cbp_naics_county_42.csv",
        &county_rows(&["08031,2010,2,42,50,2500,5"]),
    );
    write_file(
        root,
        "functional/naics/county/cbp_naics_county_236.csv",
        &county_rows(&["08031,2010,3,236,40,2100,4"]),
    );
    write_file(
        root,
        "functional/geo/county/cbp_county_08031.csv",
        &county_rows(&["08031,2010,2,23,100,5000,10", "08031,2011,2,23,110,5200,11"]),
    );
    write_file(
        root,
        "functional/cbp_county.csv",
        &county_rows(&["08031,2010,2,23,100,5000,10"]),
    );
    write_file(
        root,
        "outcome/acs_cleaned_county.csv",
        "YEAR,FIPS,variable,value,explanation\n2010,08031,census_pop,600000,Population\n",
    );
    write_file(
        root,
        "metadata/outcome_metadata.csv",
        "year,topic,variable_name,explanation\n2010,census,pop,Population\n",
    );

    dir
}

fn catalog(dir: &TempDir) -> DataCatalog {
    DataCatalog::new(dir.path()).with_observer(Box::new(NullObserver))
}

#[test]
fn loads_years_and_skips_missing_ones() {
    let dir = sample_tree();
    let df = catalog(&dir)
        .load_by_year(&[2010, 2011, 2012], GeoLevel::County, ColumnSet::Strict)
        .expect("load years");

    // 2012 has no file and is skipped, so only three rows arrive.
    assert_eq!(df.height(), 3);
    let names: Vec<_> = df
        .get_column_names()
        .iter()
        .map(|n| n.as_str().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["FIPS", "YEAR", "naics_level", "naics", "emp_imputed", "PAYANN", "ESTAB"]
    );
}

#[test]
fn loads_explicit_naics_codes() {
    let dir = sample_tree();
    let df = catalog(&dir)
        .load_by_naics(&["23", "42"], None, GeoLevel::County, ColumnSet::Strict)
        .expect("load codes");
    assert_eq!(df.height(), 2);
}

#[test]
fn naics_level_skips_longer_codes() {
    let dir = sample_tree();
    let df = catalog(&dir)
        .load_by_naics::<&str>(&[], Some(2), GeoLevel::County, ColumnSet::Strict)
        .expect("load level");

    // The 2-digit codes 23 and 42 match; 236 does not.
    assert_eq!(df.height(), 2);
    let naics = df.column("naics").expect("naics column");
    let codes: Vec<_> = naics.str().expect("string column").into_iter().flatten().collect();
    assert!(codes.contains(&"23") && codes.contains(&"42"));
}

#[test]
fn rejects_codes_and_level_together() {
    let dir = sample_tree();
    let result = catalog(&dir).load_by_naics(&["23"], Some(2), GeoLevel::County, ColumnSet::Strict);
    assert!(matches!(result, Err(DataError::InvalidArgument { .. })));
}

#[test]
fn loads_geography_slices() {
    let dir = sample_tree();
    let df = catalog(&dir)
        .load_by_geo(&["08031"], GeoLevel::County, ColumnSet::Strict)
        .expect("load geo");
    assert_eq!(df.height(), 2);
}

#[test]
fn empty_selection_is_an_error() {
    let dir = sample_tree();
    let result = catalog(&dir).load_by_year(&[1999], GeoLevel::County, ColumnSet::Strict);
    assert!(matches!(result, Err(DataError::EmptyResult)));
}

#[test]
fn functional_load_treats_missing_file_as_fatal() {
    let dir = sample_tree();
    // Only the county export exists in the fixture tree.
    let result = catalog(&dir).load_functional_data(GeoLevel::Msa);
    assert!(matches!(result, Err(DataError::MissingFile { .. })));

    let df = catalog(&dir)
        .load_functional_data(GeoLevel::County)
        .expect("county functional");
    assert_eq!(df.height(), 1);
}

#[test]
fn loads_outcome_data_and_metadata() {
    let dir = sample_tree();
    let catalog = catalog(&dir);

    let outcome = catalog
        .load_outcome_data(GeoLevel::County, OutcomeDataset::Cleaned)
        .expect("outcome data");
    assert_eq!(outcome.height(), 1);

    let metadata = catalog.load_outcome_metadata().expect("outcome metadata");
    let names: Vec<_> = metadata
        .get_column_names()
        .iter()
        .map(|n| n.as_str().to_string())
        .collect();
    assert_eq!(names, vec!["year", "topic", "variable_name", "explanation"]);
}
