/// page-turner library
///
/// Core functionality for the in-memory book catalog: sorting, searching
/// and history-based recommendations.

pub mod catalog;
pub mod core;
pub mod error;
pub mod intelligence;
pub mod session;

// Re-exports for convenience
pub use catalog::{Book, SearchHistory};
pub use error::{CatalogError, Result};
pub use session::Session;
