/// Catalog module for page-turner
///
/// In-memory book records, the search history log, and seed catalogs.

pub mod models;
pub mod seed;

pub use models::{Book, CatalogStats, SearchEntry, SearchHistory};
pub use seed::{default_catalog, load_seed};
