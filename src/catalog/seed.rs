// Seed catalogs - the built-in starter shelf plus optional JSON loading
//
// Loading happens once at startup. Nothing is ever written back; the
// catalog lives and dies with the process.

use crate::catalog::Book;
use crate::error::{CatalogError, Result};
use std::fs;
use std::path::Path;

/// The built-in starter catalog
pub fn default_catalog() -> Vec<Book> {
    vec![
        Book::new("The Hobbit", "J.R.R. Tolkien", "Fantasy"),
        Book::new("1984", "George Orwell", "Science Fiction"),
        Book::new("The Da Vinci Code", "Dan Brown", "Mystery"),
        Book::new("To Kill a Mockingbird", "Harper Lee", "Fiction"),
        Book::new("A Brief History of Time", "Stephen Hawking", "Non-fiction"),
        Book::new("The Great Gatsby", "F. Scott Fitzgerald", "Fiction"),
    ]
}

/// Load a catalog from a JSON file
///
/// Expects an array of objects with `title`, `author` and `genre` string
/// fields. Fields are trimmed the same way user-entered books are.
pub fn load_seed(path: &Path) -> Result<Vec<Book>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CatalogError::Seed(format!("{}: {}", path.display(), e)))?;

    let raw: Vec<Book> = serde_json::from_str(&contents)?;

    Ok(raw
        .into_iter()
        .map(|b| Book::new(&b.title, &b.author, &b.genre))
        .collect())
}
