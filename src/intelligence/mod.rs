/// Intelligence module
///
/// Personalized recommendations derived from the search history.

pub mod recommender;

pub use recommender::{recommend, Recommendation};
