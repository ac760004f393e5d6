/// Recommendation engine
///
/// Turns the search history into per-genre and per-author match counts and
/// picks the top of each. Genre matching is exact (a search for "fantasy"
/// counts the Fantasy genre), author matching is substring ("tolkien"
/// counts J.R.R. Tolkien). The asymmetry is deliberate.

use crate::catalog::{Book, SearchHistory};

/// Outcome of a recommendation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// Nothing has been searched yet
    NoHistory,
    /// History exists but matched no genre or author
    NoMatches,
    /// At least one of the two sides found a winner
    Matches {
        genre: Option<String>,
        author: Option<String>,
    },
}

/// Recommend a genre and an author from the search history
///
/// Counts are keyed by the book's original-case genre/author. Ties go to
/// the key first encountered while walking history x catalog in order,
/// which makes the result deterministic.
pub fn recommend(books: &[Book], history: &SearchHistory) -> Recommendation {
    if history.is_empty() {
        return Recommendation::NoHistory;
    }

    let mut genre_counts: Vec<(String, u32)> = Vec::new();
    let mut author_counts: Vec<(String, u32)> = Vec::new();

    for term in history.terms() {
        let t = term.to_lowercase();
        for book in books {
            if book.genre.to_lowercase() == t {
                bump(&mut genre_counts, &book.genre);
            }
            if book.author.to_lowercase().contains(&t) {
                bump(&mut author_counts, &book.author);
            }
        }
    }

    let genre = top(&genre_counts);
    let author = top(&author_counts);

    if genre.is_none() && author.is_none() {
        Recommendation::NoMatches
    } else {
        Recommendation::Matches { genre, author }
    }
}

fn bump(counts: &mut Vec<(String, u32)>, key: &str) {
    match counts.iter_mut().find(|(k, _)| k == key) {
        Some(entry) => entry.1 += 1,
        None => counts.push((key.to_string(), 1)),
    }
}

/// Highest count wins; strictly-greater comparison keeps the
/// first-inserted key on a tie
fn top(counts: &[(String, u32)]) -> Option<String> {
    let mut best: Option<&(String, u32)> = None;
    for entry in counts {
        if best.map_or(true, |b| entry.1 > b.1) {
            best = Some(entry);
        }
    }
    best.map(|(key, _)| key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> Vec<Book> {
        vec![
            Book::new("The Hobbit", "J.R.R. Tolkien", "Fantasy"),
            Book::new("1984", "George Orwell", "Science Fiction"),
            Book::new("The Silmarillion", "J.R.R. Tolkien", "Fantasy"),
            Book::new("The Da Vinci Code", "Dan Brown", "Mystery"),
        ]
    }

    fn history_of(terms: &[&str]) -> SearchHistory {
        let mut history = SearchHistory::new();
        for term in terms {
            history.record(term);
        }
        history
    }

    #[test]
    fn test_empty_history() {
        let result = recommend(&shelf(), &SearchHistory::new());
        assert_eq!(result, Recommendation::NoHistory);
    }

    #[test]
    fn test_genre_exact_match() {
        let result = recommend(&shelf(), &history_of(&["fantasy"]));
        match result {
            Recommendation::Matches { genre, .. } => {
                assert_eq!(genre.as_deref(), Some("Fantasy"));
            }
            other => panic!("Expected Matches, got {:?}", other),
        }
    }

    #[test]
    fn test_author_substring_match() {
        let result = recommend(&shelf(), &history_of(&["tolkien"]));
        match result {
            Recommendation::Matches { genre, author } => {
                assert_eq!(author.as_deref(), Some("J.R.R. Tolkien"));
                assert_eq!(genre, None);
            }
            other => panic!("Expected Matches, got {:?}", other),
        }
    }

    #[test]
    fn test_genre_requires_exact_equality() {
        // "fant" is a substring of Fantasy but not equal to it, so the
        // genre side stays empty; no author contains "fant" either
        let result = recommend(&shelf(), &history_of(&["fant"]));
        assert_eq!(result, Recommendation::NoMatches);
    }

    #[test]
    fn test_no_matches_at_all() {
        let result = recommend(&shelf(), &history_of(&["cookbooks"]));
        assert_eq!(result, Recommendation::NoMatches);
    }

    #[test]
    fn test_duplicate_genre_counts_per_book() {
        // One "fantasy" search hits both Fantasy books, beating the
        // single Mystery hit
        let result = recommend(&shelf(), &history_of(&["mystery", "fantasy"]));
        match result {
            Recommendation::Matches { genre, .. } => {
                assert_eq!(genre.as_deref(), Some("Fantasy"));
            }
            other => panic!("Expected Matches, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_terms_raise_counts() {
        let books = vec![
            Book::new("A", "One", "Fantasy"),
            Book::new("B", "Two", "Mystery"),
        ];

        // Mystery searched twice, fantasy once: Mystery wins the genre
        let result = recommend(&books, &history_of(&["mystery", "fantasy", "mystery"]));
        match result {
            Recommendation::Matches { genre, .. } => {
                assert_eq!(genre.as_deref(), Some("Mystery"));
            }
            other => panic!("Expected Matches, got {:?}", other),
        }
    }

    #[test]
    fn test_tie_goes_to_first_encountered() {
        let books = vec![
            Book::new("A", "One", "Fantasy"),
            Book::new("B", "Two", "Mystery"),
        ];

        // One exact hit each; Fantasy was counted first because the
        // history lists it first
        let result = recommend(&books, &history_of(&["fantasy", "mystery"]));
        match result {
            Recommendation::Matches { genre, .. } => {
                assert_eq!(genre.as_deref(), Some("Fantasy"));
            }
            other => panic!("Expected Matches, got {:?}", other),
        }
    }

    #[test]
    fn test_both_sides_can_win() {
        // "science fiction" hits the genre exactly; "brown" hits the author
        let result = recommend(&shelf(), &history_of(&["science fiction", "brown"]));
        match result {
            Recommendation::Matches { genre, author } => {
                assert_eq!(genre.as_deref(), Some("Science Fiction"));
                assert_eq!(author.as_deref(), Some("Dan Brown"));
            }
            other => panic!("Expected Matches, got {:?}", other),
        }
    }

    #[test]
    fn test_history_with_empty_catalog() {
        let result = recommend(&[], &history_of(&["fantasy"]));
        assert_eq!(result, Recommendation::NoMatches);
    }
}
