use anyhow::{Context, Result};
use genre_core::persist::{load_books, load_keyword_rows, sort_books, SortOrder};
use genre_core::{build_table, BookGenreResult, GenreScore, GenreScorer};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    pub books_path: PathBuf,
    pub keywords_path: PathBuf,
    pub order: SortOrder,
    pub parallel: bool,
}

/// Load both inputs, sort the catalog by title and score every book.
pub fn classify(opts: &ClassifyOptions) -> Result<Vec<BookGenreResult>> {
    let rows = load_keyword_rows(&opts.keywords_path)
        .with_context(|| format!("loading keyword weights from {}", opts.keywords_path.display()))?;
    let mut books = load_books(&opts.books_path)
        .with_context(|| format!("loading books from {}", opts.books_path.display()))?;
    sort_books(&mut books, opts.order);

    let table = build_table(&rows)?;
    if table.is_empty() {
        tracing::warn!(path = %opts.keywords_path.display(), "keyword file has no rows; every book will score empty");
    }
    tracing::info!(keywords = table.len(), books = books.len(), "scoring catalog");
    let scorer = GenreScorer::new(table)?;
    let results = if opts.parallel {
        scorer.score_collection(&books)?
    } else {
        scorer.score_collection_sequential(&books)?
    };
    let matched = results.iter().filter(|r| !r.genres.is_empty()).count();
    tracing::info!(books = results.len(), matched, "classification complete");
    Ok(results)
}

/// Plain listing: each book's title followed by `genre, score` lines, with
/// blank lines around and between books.
pub fn render_text(results: &[BookGenreResult]) -> String {
    let mut out = String::from("\n\n");
    for (idx, result) in results.iter().enumerate() {
        if idx > 0 {
            out.push_str("\n\n");
        }
        out.push_str(&result.book.title);
        out.push('\n');
        for g in &result.genres {
            let _ = writeln!(out, "{}, {}", g.genre, g.score);
        }
    }
    out.push_str("\n\n");
    out
}

#[derive(Serialize)]
struct BookView<'a> {
    title: &'a str,
    genres: &'a [GenreScore],
}

pub fn render_json(results: &[BookGenreResult]) -> Result<String> {
    let views: Vec<BookView<'_>> = results
        .iter()
        .map(|r| BookView { title: &r.book.title, genres: &r.genres })
        .collect();
    Ok(serde_json::to_string_pretty(&views)?)
}
