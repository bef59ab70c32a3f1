//! A single scripted move.

use crate::piece::PieceId;
use crate::square::Square;
use std::fmt;

/// Move `piece` to `destination`, wherever the piece currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: PieceId,
    pub destination: Square,
}

impl MoveRecord {
    pub fn new(piece: impl Into<PieceId>, destination: Square) -> Self {
        Self { piece: piece.into(), destination }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.piece, self.destination)
    }
}
