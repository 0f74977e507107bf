//! Keyword-weighted genre scoring for book descriptions.
//!
//! A [`GenreWeightTable`] maps each keyword to the genres it votes for. The
//! [`KeywordIndex`] finds every keyword occurrence in a description in one
//! pass and [`scorer`] turns those occurrences into per-genre scores.

pub mod error;
pub mod matcher;
pub mod persist;
pub mod scorer;
pub mod table;

pub use error::{GenreError, Result};
pub use matcher::{KeywordIndex, KeywordMatch};
pub use scorer::{score_book, score_collection, score_collection_sequential, GenreScorer};
pub use table::{build_table, Book, BookGenreResult, GenreScore, GenreWeight, GenreWeightTable, KeywordWeight, Weight};
