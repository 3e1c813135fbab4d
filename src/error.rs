//! Error types for the gridline crate

use thiserror::Error;

/// Main error type for the gridline crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (board has {cells} cells)")]
    InvalidPosition { position: usize, cells: usize },

    #[error("board size must be a positive integer, got {size}")]
    InvalidBoardSize { size: usize },

    #[error("invalid board '{input}': {message}")]
    InvalidBoard { input: String, message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
