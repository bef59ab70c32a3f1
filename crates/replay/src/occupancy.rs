//! The occupancy table: which piece stands on which square.

use crate::layout::{Placement, STARTING_LAYOUT};
use crate::piece::PieceId;
use crate::square::Square;
use std::collections::BTreeMap;

/// Authoritative square -> piece record.
///
/// At most one piece per square. Callers keep a piece from appearing under two squares by
/// clearing its old square before `set`; the move applier does this on every move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancyTable {
    squares: BTreeMap<Square, PieceId>,
}

impl OccupancyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeded with the standard starting layout.
    pub fn standard() -> Self {
        Self::from_placements(STARTING_LAYOUT.iter())
    }

    pub fn from_placements<'a>(placements: impl IntoIterator<Item = &'a Placement>) -> Self {
        let mut table = Self::new();
        for p in placements {
            table.set(p.square, p.piece.clone());
        }
        table
    }

    pub fn get(&self, square: Square) -> Option<&PieceId> {
        self.squares.get(&square)
    }

    /// Records `piece` on `square`, returning whatever was recorded there before.
    pub fn set(&mut self, square: Square, piece: PieceId) -> Option<PieceId> {
        self.squares.insert(square, piece)
    }

    pub fn clear(&mut self, square: Square) -> Option<PieceId> {
        self.squares.remove(&square)
    }

    /// Reverse lookup by scanning the entries.
    pub fn find_square_of(&self, piece: &PieceId) -> Option<Square> {
        self.squares
            .iter()
            .find(|(_, occupant)| *occupant == piece)
            .map(|(square, _)| *square)
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Entries in square order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, &PieceId)> {
        self.squares.iter().map(|(square, piece)| (*square, piece))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_standard_layout() {
        let table = OccupancyTable::standard();
        assert_eq!(table.len(), 32);
        assert_eq!(table.get(sq("e2")), Some(&PieceId::from("Pawn_Red_e2")));
        assert_eq!(table.get(sq("h8")), Some(&PieceId::from("Tower_Blue_h2")));
        assert_eq!(table.get(sq("e4")), None);
    }

    #[test]
    fn test_set_clear_and_lookup() {
        let mut table = OccupancyTable::new();
        let pawn = PieceId::from("Pawn_Red_e2");
        assert!(table.is_empty());

        assert_eq!(table.set(sq("e2"), pawn.clone()), None);
        assert_eq!(table.find_square_of(&pawn), Some(sq("e2")));

        assert_eq!(table.clear(sq("e2")), Some(pawn.clone()));
        assert_eq!(table.clear(sq("e2")), None);
        assert_eq!(table.find_square_of(&pawn), None);

        table.set(sq("e4"), pawn.clone());
        let displaced = table.set(sq("e4"), PieceId::from("Queen_Blue_d8"));
        assert_eq!(displaced, Some(pawn.clone()));
        assert_eq!(table.find_square_of(&pawn), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_iteration_is_square_ordered() {
        let table = OccupancyTable::standard();
        let first: Vec<String> = table.iter().take(3).map(|(s, _)| s.to_string()).collect();
        assert_eq!(first, ["a1", "a2", "a7"]);
    }
}
