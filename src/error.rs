//! Error types for the game model and the console controller

use thiserror::Error;

/// Result type for game operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Row or column outside the 3x3 board
    #[error("Out of boundary: ({row}, {col})")]
    OutOfRange { row: usize, col: usize },

    /// Target cell already holds a mark
    #[error("Position is taken: ({row}, {col})")]
    CellOccupied { row: usize, col: usize },

    /// Move attempted after a winner was found or the board filled up
    #[error("Game has been completed")]
    GameAlreadyOver,

    /// No model was handed to the controller
    #[error("No game model supplied")]
    InvalidModel,

    /// Output could not be written, or input ran out before a move or quit
    #[error("Game aborted: {0}")]
    Aborted(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Aborted(err.to_string())
    }
}
