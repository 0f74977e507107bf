use crate::error::{GenreError, Result};
use crate::table::{Book, KeywordWeight};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const FIELD_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Parse keyword rows laid out as `genre, keyword, weight`. The first line
/// is a header; blank lines are ignored.
pub fn parse_keyword_rows(text: &str) -> Result<Vec<KeywordWeight>> {
    let mut rows = Vec::new();
    for (i, line) in text.lines().enumerate().skip(1) {
        let line_no = i + 1;
        if line.trim().is_empty() { continue; }
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let [genre, keyword, weight] = fields.as_slice() else {
            return Err(GenreError::MalformedKeywordRow { line: line_no, content: line.to_string() });
        };
        let weight = weight
            .trim()
            .parse()
            .map_err(|_| GenreError::InvalidWeight { line: line_no, value: weight.to_string() })?;
        rows.push(KeywordWeight { keyword: keyword.to_string(), genre: genre.to_string(), weight });
    }
    Ok(rows)
}

pub fn load_keyword_rows<P: AsRef<Path>>(path: P) -> Result<Vec<KeywordWeight>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    let rows = parse_keyword_rows(&text)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "loaded keyword weights");
    Ok(rows)
}

/// Load books from a `.json` file (array or single object), a `.jsonl` file,
/// or a directory of such files.
pub fn load_books<P: AsRef<Path>>(path: P) -> Result<Vec<Book>> {
    let path = path.as_ref();
    let mut files: Vec<PathBuf> = Vec::new();
    if path.is_dir() {
        for entry in WalkDir::new(path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(extension(p), Some("json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
        if files.is_empty() {
            tracing::warn!(path = %path.display(), "no .json or .jsonl files in catalog directory");
        }
    } else {
        files.push(path.to_path_buf());
    }

    let mut books = Vec::new();
    for file in files {
        if extension(&file) == Some("jsonl") {
            read_jsonl(&file, &mut books)?;
        } else {
            read_json(&file, &mut books)?;
        }
    }
    tracing::info!(path = %path.display(), books = books.len(), "loaded book catalog");
    Ok(books)
}

/// Stable sort by title.
pub fn sort_books(books: &mut [Book], order: SortOrder) {
    match order {
        SortOrder::Asc => books.sort_by(|a, b| a.title.cmp(&b.title)),
        SortOrder::Desc => books.sort_by(|a, b| b.title.cmp(&a.title)),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Many(Vec<Book>),
    One(Book),
}

fn read_json(file: &Path, books: &mut Vec<Book>) -> Result<()> {
    let f = File::open(file).map_err(|source| io_error(file, source))?;
    let parsed: CatalogFile = serde_json::from_reader(BufReader::new(f))
        .map_err(|source| GenreError::Json { path: file.to_path_buf(), source })?;
    match parsed {
        CatalogFile::Many(many) => books.extend(many),
        CatalogFile::One(one) => books.push(one),
    }
    Ok(())
}

fn read_jsonl(file: &Path, books: &mut Vec<Book>) -> Result<()> {
    let f = File::open(file).map_err(|source| io_error(file, source))?;
    for line in BufReader::new(f).lines() {
        let line = line.map_err(|source| io_error(file, source))?;
        if line.trim().is_empty() { continue; }
        let book: Book = serde_json::from_str(&line)
            .map_err(|source| GenreError::Json { path: file.to_path_buf(), source })?;
        books.push(book);
    }
    Ok(())
}

fn extension(p: &Path) -> Option<&str> {
    p.extension().and_then(|s| s.to_str())
}

fn io_error(path: &Path, source: std::io::Error) -> GenreError {
    GenreError::Io { path: path.to_path_buf(), source }
}
