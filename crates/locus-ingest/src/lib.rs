//! Loading CBP functional and ACS outcome tables from a data directory.
//!
//! Loading is split into path construction ([`layout`]), CSV reading and
//! accumulation ([`loader`]), progress reporting ([`progress`]), and the
//! high-level [`DataCatalog`] facade that ties the three together. All
//! tables come back with every column typed as String.

pub mod catalog;
pub mod layout;
pub mod loader;
pub mod progress;

pub use catalog::DataCatalog;
pub use layout::DataLayout;
pub use loader::{load_from_paths, read_string_csv};
pub use progress::{LoadObserver, NullObserver, ProgressObserver};
