/// Data models for the book catalog
///
/// Book records are immutable after construction and carry no identity
/// beyond their position in the owning collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single book record
///
/// All fields are whitespace-trimmed at construction time. Duplicates are
/// allowed; there is no update or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl Book {
    /// Create a new book, trimming all fields
    pub fn new(title: &str, author: &str, genre: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            genre: genre.trim().to_string(),
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: \"{}\", Author: {}, Genre: {}",
            self.title, self.author, self.genre
        )
    }
}

/// A single recorded search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEntry {
    /// The term as searched, case-folded to lowercase at recording time
    pub term: String,
    pub searched_at: DateTime<Utc>,
}

/// Append-only log of search terms
///
/// Terms are never deduplicated or pruned; repeated searches count multiple
/// times when recommendations are computed.
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    entries: Vec<SearchEntry>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a search term, lowercasing it
    ///
    /// Empty terms are recorded too. The search itself rejects them, but
    /// the history keeps everything the user typed.
    pub fn record(&mut self, raw_term: &str) {
        self.entries.push(SearchEntry {
            term: raw_term.to_lowercase(),
            searched_at: Utc::now(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Iterate over the recorded terms, oldest first
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.term.as_str())
    }
}

/// Counts shown by the status screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_books: usize,
    pub total_searches: usize,
    pub distinct_genres: usize,
    pub distinct_authors: usize,
}
