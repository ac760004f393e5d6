/// Core functionality modules
///
/// Pure data operations over the catalog: sorting by a composite
/// criterion and multi-field substring search.

pub mod searcher;
pub mod sorter;

pub use searcher::search_books;
pub use sorter::{sort_books, sort_books_by_criterion, SortCriterion, SortField, SortOrder};
