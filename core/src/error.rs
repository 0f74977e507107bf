use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenreError>;

#[derive(Error, Debug)]
pub enum GenreError {
    #[error("keyword row {line} does not have three fields: {content:?}")]
    MalformedKeywordRow { line: usize, content: String },

    #[error("keyword row {line} has a non-integer weight: {value:?}")]
    InvalidWeight { line: usize, value: String },

    #[error("empty keyword for genre {genre:?}")]
    EmptyKeyword { genre: String },

    #[error("empty genre for keyword {keyword:?}")]
    EmptyGenre { keyword: String },

    #[error("keyword index cannot hold an empty keyword")]
    EmptyIndexKeyword,

    /// The matcher reported a keyword the weight table does not know about.
    /// Only happens when the index was built from a different table.
    #[error("matched keyword {keyword:?} has no genre mapping")]
    UnknownKeywordMapping { keyword: String },

    #[error("failed to compile keyword pattern: {0}")]
    PatternCompile(#[from] regex::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
