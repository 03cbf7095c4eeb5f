//! Progress reporting for multi-file loads.
//!
//! Loading a year range or a whole NAICS level touches many files, so the
//! loader reports per-file events through the [`LoadObserver`] trait. The
//! default [`ProgressObserver`] renders an indicatif bar on stderr;
//! [`NullObserver`] turns reporting off entirely.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

/// Bar template for multi-file loads.
const LOAD_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Receives per-file events during a multi-file load.
///
/// Every method has a no-op default, so implementors override only the
/// events they care about.
pub trait LoadObserver {
    /// Called once before any file is opened, with the planned file count.
    fn begin(&self, _total_files: usize) {}

    /// Called after a file loads successfully.
    fn file_loaded(&self, _path: &Path, _rows: usize) {}

    /// Called when a planned file does not exist and is skipped.
    fn file_missing(&self, _path: &Path) {}

    /// Called once when the load ends, whether it succeeded or failed.
    fn finish(&self) {}
}

/// Observer that reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl LoadObserver for NullObserver {}

/// Observer that renders an indicatif progress bar on stderr.
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(LOAD_TEMPLATE)
                .unwrap()
                .progress_chars("#>-"),
        );
        Self { bar }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadObserver for ProgressObserver {
    fn begin(&self, total_files: usize) {
        self.bar.reset();
        self.bar.set_length(total_files as u64);
    }

    fn file_loaded(&self, path: &Path, rows: usize) {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            self.bar.set_message(format!("{name} ({rows} rows)"));
        }
        self.bar.inc(1);
    }

    fn file_missing(&self, path: &Path) {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            self.bar.set_message(format!("{name} (missing)"));
        }
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
