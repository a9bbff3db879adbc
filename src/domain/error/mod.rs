use thiserror::Error;

/// Row-level failures. These skip the offending row and let the run
/// continue; the display string is the console diagnostic for the skip.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Skipping row {row}: expected 5 columns, got {got} -> {contents:?}")]
    ShortRow {
        row: usize,
        got: usize,
        contents: Vec<String>,
    },
    #[error("Invalid date in row {row} ('{raw}'): {source}. Skipping.")]
    InvalidDate {
        row: usize,
        raw: String,
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
