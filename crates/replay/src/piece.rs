//! Piece identifiers, kinds and sides.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Blue => "Blue",
        }
    }

    fn from_name(name: &str) -> Option<Side> {
        match name {
            "Red" => Some(Side::Red),
            "Blue" => Some(Side::Blue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    /// The rook. Identifiers spell it "Tower".
    Tower,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Tower => "Tower",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// Single-letter glyph used by the front-ends.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Tower => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    fn from_name(name: &str) -> Option<PieceKind> {
        match name {
            "Pawn" => Some(PieceKind::Pawn),
            "Tower" => Some(PieceKind::Tower),
            "Knight" => Some(PieceKind::Knight),
            "Bishop" => Some(PieceKind::Bishop),
            "Queen" => Some(PieceKind::Queen),
            "King" => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Stable label of one piece, e.g. `Pawn_Red_e2`.
///
/// The label is `Kind_Side_Origin` and is never renamed after the piece moves; where a piece
/// currently stands is tracked by the occupancy table and the scene, not by its name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(String);

impl PieceId {
    pub fn new(name: impl Into<String>) -> Self {
        PieceId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> Option<PieceKind> {
        self.0.split('_').next().and_then(PieceKind::from_name)
    }

    pub fn side(&self) -> Option<Side> {
        self.0.split('_').nth(1).and_then(Side::from_name)
    }

    /// True only when both sides are known and differ.
    pub fn is_opponent_of(&self, other: &PieceId) -> bool {
        match (self.side(), other.side()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PieceId {
    fn from(name: &str) -> Self {
        PieceId::new(name)
    }
}
