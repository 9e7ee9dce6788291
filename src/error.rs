// src/error.rs
use thiserror::Error;

/// Row- and bill-level failures raised by the parsing engine.
/// None of these are fatal to a run; the runner decides skip-vs-abort.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{bill_code} row {index}: expected 3 cells, found {found}")]
    MalformedRow {
        bill_code: String,
        index: usize,
        found: usize,
    },

    #[error("{bill_code} row {index}: cannot parse date '{raw}'")]
    DateParse {
        bill_code: String,
        index: usize,
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("{0}: no parsed actions")]
    MissingAction(String),
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned {status}")]
    Status { url: String, status: u16 },

    #[error("{what} not found on {url}")]
    MissingNode { what: &'static str, url: String },

    #[error("invalid taxonomy: {0}")]
    Taxonomy(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
