use crate::error::{GenreError, Result};
use crate::matcher::KeywordIndex;
use crate::table::{Book, BookGenreResult, GenreScore, GenreWeightTable, Weight};
use rayon::prelude::*;
use std::collections::HashMap;

#[derive(Default)]
struct GenreTally {
    points: Vec<Weight>,
    match_count: u64,
}

/// Score one description against `table`.
///
/// A genre's score is `match_count * mean(points)`, where `points` holds one
/// weight per distinct matched keyword mapping to the genre and `match_count`
/// counts every occurrence of those keywords. Genres come out in the order
/// they are first reached while walking the distinct keywords.
pub fn score_book(description: &str, table: &GenreWeightTable, index: &KeywordIndex) -> Result<Vec<GenreScore>> {
    let matched = index.find_keywords(description);
    if matched.is_empty() {
        return Ok(Vec::new());
    }

    // distinct keywords in first-occurrence order, with occurrence counts
    let mut unique: Vec<&str> = Vec::new();
    let mut occurrences: HashMap<&str, u64> = HashMap::new();
    for kw in matched {
        let n = occurrences.entry(kw).or_insert(0);
        if *n == 0 {
            unique.push(kw);
        }
        *n += 1;
    }

    let mut order: Vec<&str> = Vec::new();
    let mut tallies: HashMap<&str, GenreTally> = HashMap::new();
    for kw in unique {
        let weights = table
            .get(kw)
            .ok_or_else(|| GenreError::UnknownKeywordMapping { keyword: kw.to_string() })?;
        let count = occurrences[kw];
        for gw in weights {
            let tally = tallies.entry(gw.genre.as_str()).or_insert_with(|| {
                order.push(gw.genre.as_str());
                GenreTally::default()
            });
            tally.points.push(gw.weight);
            tally.match_count += count;
        }
    }

    let scores = order
        .into_iter()
        .map(|genre| {
            let tally = &tallies[genre];
            // i128 so rows near the i64 limits cannot overflow the sum
            let total: i128 = tally.points.iter().map(|&w| i128::from(w)).sum();
            let average = total as f64 / tally.points.len() as f64;
            GenreScore { genre: genre.to_string(), score: tally.match_count as f64 * average }
        })
        .collect();
    Ok(scores)
}

/// Score every book, keeping input order. Books without matches keep an
/// empty genre list.
pub fn score_collection(books: &[Book], table: &GenreWeightTable, index: &KeywordIndex) -> Result<Vec<BookGenreResult>> {
    books
        .par_iter()
        .map(|book| score_one(book, table, index))
        .collect()
}

pub fn score_collection_sequential(books: &[Book], table: &GenreWeightTable, index: &KeywordIndex) -> Result<Vec<BookGenreResult>> {
    books.iter().map(|book| score_one(book, table, index)).collect()
}

fn score_one(book: &Book, table: &GenreWeightTable, index: &KeywordIndex) -> Result<BookGenreResult> {
    let genres = score_book(&book.description, table, index)?;
    tracing::debug!(title = %book.title, genres = genres.len(), "scored book");
    Ok(BookGenreResult { book: book.clone(), genres })
}

/// A weight table together with the index compiled from it, so the two can
/// never disagree.
#[derive(Debug, Clone)]
pub struct GenreScorer {
    table: GenreWeightTable,
    index: KeywordIndex,
}

impl GenreScorer {
    pub fn new(table: GenreWeightTable) -> Result<Self> {
        let index = KeywordIndex::build(table.keywords().iter().cloned())?;
        Ok(Self { table, index })
    }

    pub fn table(&self) -> &GenreWeightTable { &self.table }

    pub fn index(&self) -> &KeywordIndex { &self.index }

    pub fn score_book(&self, description: &str) -> Result<Vec<GenreScore>> {
        score_book(description, &self.table, &self.index)
    }

    pub fn score_collection(&self, books: &[Book]) -> Result<Vec<BookGenreResult>> {
        score_collection(books, &self.table, &self.index)
    }

    pub fn score_collection_sequential(&self, books: &[Book]) -> Result<Vec<BookGenreResult>> {
        score_collection_sequential(books, &self.table, &self.index)
    }
}
