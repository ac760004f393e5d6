// Session state - the catalog and search history for one run
//
// All mutable state lives here and is owned by the menu loop. The core
// functions only ever see read-only views of it.

use crate::catalog::{Book, CatalogStats, SearchHistory};
use std::collections::HashSet;

/// Owns the catalog and the search history for the life of the process
#[derive(Debug, Default)]
pub struct Session {
    catalog: Vec<Book>,
    history: SearchHistory,
}

impl Session {
    /// Start with an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-seeded catalog
    pub fn with_catalog(catalog: Vec<Book>) -> Self {
        Self {
            catalog,
            history: SearchHistory::new(),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.catalog
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Append a new book, trimming all fields
    pub fn add_book(&mut self, title: &str, author: &str, genre: &str) -> &Book {
        self.catalog.push(Book::new(title, author, genre));
        self.catalog.last().unwrap()
    }

    /// Record a search term to the history
    pub fn record_search(&mut self, raw_term: &str) {
        self.history.record(raw_term);
    }

    /// Counts for the status screen
    pub fn stats(&self) -> CatalogStats {
        let genres: HashSet<&str> = self.catalog.iter().map(|b| b.genre.as_str()).collect();
        let authors: HashSet<&str> = self.catalog.iter().map(|b| b.author.as_str()).collect();

        CatalogStats {
            total_books: self.catalog.len(),
            total_searches: self.history.len(),
            distinct_genres: genres.len(),
            distinct_authors: authors.len(),
        }
    }
}
