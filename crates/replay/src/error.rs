//! Error types for the replay core.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReplayError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("piece {0} was not found in the scene")]
    PieceNotFound(String),

    #[error("square {0} was not found in the scene")]
    SquareNotFound(String),

    #[error("piece {0} is not standing on the board")]
    OffBoard(String),

    #[error("invalid square identifier `{0}`")]
    InvalidSquare(String),

    #[error("configuration error: {0}")]
    Config(String),
}
