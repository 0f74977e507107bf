use crate::error::{GenreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type Weight = i64;

/// One row of the keyword source: `keyword` contributes `weight` to `genre`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub keyword: String,
    pub genre: String,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreWeight {
    pub genre: String,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Book {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreScore {
    pub genre: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookGenreResult {
    pub book: Book,
    pub genres: Vec<GenreScore>, // first-seen genre order, not sorted by score
}

/// Keyword -> (genre, weight) list. Keys keep the order in which they first
/// appeared in the source rows; that order decides same-position matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreWeightTable {
    keywords: Vec<String>,
    weights: HashMap<String, Vec<GenreWeight>>,
}

impl GenreWeightTable {
    pub fn new() -> Self { Self::default() }

    /// Keywords in first-appearance order.
    pub fn keywords(&self) -> &[String] { &self.keywords }

    pub fn get(&self, keyword: &str) -> Option<&[GenreWeight]> {
        self.weights.get(keyword).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize { self.keywords.len() }

    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }

    fn push(&mut self, row: &KeywordWeight) {
        if !self.weights.contains_key(&row.keyword) {
            self.keywords.push(row.keyword.clone());
        }
        self.weights
            .entry(row.keyword.clone())
            .or_default()
            .push(GenreWeight { genre: row.genre.clone(), weight: row.weight });
    }
}

/// Group keyword rows into a table. Rows are expected to be structurally
/// valid already; only empty keywords or genres are rejected here.
pub fn build_table(rows: &[KeywordWeight]) -> Result<GenreWeightTable> {
    let mut table = GenreWeightTable::new();
    for row in rows {
        if row.keyword.is_empty() {
            return Err(GenreError::EmptyKeyword { genre: row.genre.clone() });
        }
        if row.genre.is_empty() {
            return Err(GenreError::EmptyGenre { keyword: row.keyword.clone() });
        }
        table.push(row);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(keyword: &str, genre: &str, weight: Weight) -> KeywordWeight {
        KeywordWeight { keyword: keyword.into(), genre: genre.into(), weight }
    }

    #[test]
    fn groups_rows_by_keyword_in_first_appearance_order() {
        let table = build_table(&[
            row("war", "history", 4),
            row("magic", "fantasy", 5),
            row("war", "action", 6),
        ])
        .unwrap();
        assert_eq!(table.keywords(), ["war".to_string(), "magic".to_string()]);
        let war = table.get("war").unwrap();
        assert_eq!(war.len(), 2);
        assert_eq!(war[0].genre, "history");
        assert_eq!(war[1], GenreWeight { genre: "action".into(), weight: 6 });
    }

    #[test]
    fn rejects_empty_keyword_and_genre() {
        assert!(matches!(build_table(&[row("", "fantasy", 1)]), Err(GenreError::EmptyKeyword { .. })));
        assert!(matches!(build_table(&[row("magic", "", 1)]), Err(GenreError::EmptyGenre { .. })));
    }

    #[test]
    fn no_rows_gives_empty_table() {
        let table = build_table(&[]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(!build_table(&[row("magic", "fantasy", 5)]).unwrap().is_empty());
    }

    #[test]
    fn keeps_zero_and_negative_weights() {
        let table = build_table(&[row("dull", "thriller", -3), row("plain", "drama", 0)]).unwrap();
        assert_eq!(table.get("dull").unwrap()[0].weight, -3);
        assert_eq!(table.get("plain").unwrap()[0].weight, 0);
    }
}
