use std::path::PathBuf;

use thiserror::Error;

/// Run-level failures. Each variant displays as the exact console line
/// reported before the run ends; none of them escapes the program.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Error: Input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },
    #[error("Error reading input file '{}': {}", .path.display(), .source)]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error reading CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("Error: CSV is empty.")]
    EmptyInput,
    #[error("Error writing QIF file '{}': {}", .path.display(), .source)]
    WriteQif {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
