/// Substring search over the catalog
///
/// Case-insensitive containment across title, author and genre. Plain
/// substring matching only; no ranking, no fuzziness.

use crate::catalog::Book;

/// Search books by a case-insensitive substring
///
/// The term matches a book if it appears in the lowercased title, author
/// or genre. An empty term returns an empty result rather than the whole
/// catalog. Matches keep their original relative order.
pub fn search_books(books: &[Book], term: &str) -> Vec<Book> {
    if term.is_empty() {
        return Vec::new();
    }

    let lower = term.to_lowercase();
    books
        .iter()
        .filter(|b| {
            b.title.to_lowercase().contains(&lower)
                || b.author.to_lowercase().contains(&lower)
                || b.genre.to_lowercase().contains(&lower)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> Vec<Book> {
        vec![
            Book::new("The Hobbit", "J.R.R. Tolkien", "Fantasy"),
            Book::new("1984", "George Orwell", "Science Fiction"),
            Book::new("The Da Vinci Code", "Dan Brown", "Mystery"),
            Book::new("The Great Gatsby", "F. Scott Fitzgerald", "Fiction"),
        ]
    }

    #[test]
    fn test_empty_term_returns_nothing() {
        let results = search_books(&shelf(), "");
        assert!(results.is_empty());
    }

    #[test]
    fn test_match_on_title() {
        let results = search_books(&shelf(), "hobbit");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "The Hobbit");
    }

    #[test]
    fn test_match_on_author() {
        let results = search_books(&shelf(), "orwell");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "1984");
    }

    #[test]
    fn test_match_on_genre() {
        let results = search_books(&shelf(), "mystery");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "The Da Vinci Code");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let results = search_books(&shelf(), "TOLKIEN");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].author, "J.R.R. Tolkien");
    }

    #[test]
    fn test_matches_keep_catalog_order() {
        // "fiction" hits Science Fiction and Fiction genres
        let results = search_books(&shelf(), "fiction");
        let titles: Vec<&str> = results.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["1984", "The Great Gatsby"]);
    }

    #[test]
    fn test_no_match() {
        let results = search_books(&shelf(), "zzzz");
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_empty_catalog() {
        let results = search_books(&[], "hobbit");
        assert!(results.is_empty());
    }
}
