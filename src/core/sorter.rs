/// Book sorting by a composite (field, order) criterion
///
/// The criterion arrives from the menu as a legacy "field_order" string
/// (e.g. "title_asc"); parsing lives at that boundary and the sort itself
/// takes an explicit enum pair.

use crate::catalog::Book;

/// Field to sort on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Author,
    Genre,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A parsed sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCriterion {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortCriterion {
    /// Parse the legacy "field_order" string format
    ///
    /// Accepts exactly two underscore-separated parts, a known field name
    /// and "asc" or "desc". Anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let parts: Vec<&str> = raw.split('_').collect();
        if parts.len() != 2 {
            return None;
        }

        let field = match parts[0] {
            "title" => SortField::Title,
            "author" => SortField::Author,
            "genre" => SortField::Genre,
            _ => return None,
        };

        let order = match parts[1] {
            "asc" => SortOrder::Ascending,
            "desc" => SortOrder::Descending,
            _ => return None,
        };

        Some(Self { field, order })
    }
}

/// Sort books by the given criterion
///
/// Comparison key is the chosen field lowercased. The sort is stable, and
/// descending order reverses the comparator rather than the sequence, so
/// equal-key books keep their original relative order either way. The
/// input is left untouched.
pub fn sort_books(books: &[Book], criterion: SortCriterion) -> Vec<Book> {
    let key = |b: &Book| match criterion.field {
        SortField::Title => b.title.to_lowercase(),
        SortField::Author => b.author.to_lowercase(),
        SortField::Genre => b.genre.to_lowercase(),
    };

    let mut sorted = books.to_vec();
    match criterion.order {
        SortOrder::Ascending => sorted.sort_by(|a, b| key(a).cmp(&key(b))),
        SortOrder::Descending => sorted.sort_by(|a, b| key(b).cmp(&key(a))),
    }
    sorted
}

/// Sort books by a raw criterion string
///
/// Malformed criteria (unknown field, unknown order, wrong shape) return
/// the books unchanged in their original order. Silent no-op, not an error.
pub fn sort_books_by_criterion(books: &[Book], raw: &str) -> Vec<Book> {
    match SortCriterion::parse(raw) {
        Some(criterion) => sort_books(books, criterion),
        None => books.to_vec(),
    }
}
