//! The standard starting placement.

use crate::constants::{BOARD_SIZE, FILE_NAMES};
use crate::piece::{PieceId, PieceKind, Side};
use crate::square::Square;
use once_cell::sync::Lazy;

/// A piece standing on its starting square.
#[derive(Debug, Clone)]
pub struct Placement {
    pub square: Square,
    pub piece: PieceId,
    pub kind: PieceKind,
    pub side: Side,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Tower,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Tower,
];

/// Red on ranks 1-2, Blue on ranks 7-8.
pub static STARTING_LAYOUT: Lazy<Vec<Placement>> = Lazy::new(|| {
    let mut placements = Vec::with_capacity(32);
    for side in [Side::Red, Side::Blue] {
        let (back, front) = match side {
            Side::Red => (0, 1),
            Side::Blue => (BOARD_SIZE - 1, BOARD_SIZE - 2),
        };

        // Towers, knights and bishops are told apart by a per-side ordinal rather than
        // their rank, so the h-file tower is `Tower_Red_h2`.
        let mut ordinals = [0u8; 6];
        for (file, kind) in BACK_RANK.iter().copied().enumerate() {
            let file = file as u8;
            let Some(square) = Square::from_coord(file, back) else {
                continue;
            };
            let label = match kind {
                PieceKind::Tower | PieceKind::Knight | PieceKind::Bishop => {
                    ordinals[kind as usize] += 1;
                    format!("{}{}", FILE_NAMES[file as usize], ordinals[kind as usize])
                }
                _ => square.to_string(),
            };
            placements.push(placement(square, kind, side, &label));
        }

        for file in 0..BOARD_SIZE {
            if let Some(square) = Square::from_coord(file, front) {
                placements.push(placement(square, PieceKind::Pawn, side, &square.to_string()));
            }
        }
    }
    placements
});

fn placement(square: Square, kind: PieceKind, side: Side, label: &str) -> Placement {
    Placement {
        square,
        piece: PieceId::new(format!("{}_{}_{}", kind.name(), side.name(), label)),
        kind,
        side,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn name_at(square: &str) -> String {
        let square: Square = square.parse().unwrap();
        STARTING_LAYOUT
            .iter()
            .find(|p| p.square == square)
            .map(|p| p.piece.to_string())
            .unwrap()
    }

    #[test]
    fn test_thirty_two_unique_pieces() {
        assert_eq!(STARTING_LAYOUT.len(), 32);
        let names: HashSet<_> = STARTING_LAYOUT.iter().map(|p| p.piece.clone()).collect();
        let squares: HashSet<_> = STARTING_LAYOUT.iter().map(|p| p.square).collect();
        assert_eq!(names.len(), 32);
        assert_eq!(squares.len(), 32);
    }

    #[test]
    fn test_labels() {
        assert_eq!(name_at("a1"), "Tower_Red_a1");
        assert_eq!(name_at("h1"), "Tower_Red_h2");
        assert_eq!(name_at("g1"), "Knight_Red_g2");
        assert_eq!(name_at("f1"), "Bishop_Red_f2");
        assert_eq!(name_at("d1"), "Queen_Red_d1");
        assert_eq!(name_at("e1"), "King_Red_e1");
        assert_eq!(name_at("e2"), "Pawn_Red_e2");
        assert_eq!(name_at("d7"), "Pawn_Blue_d7");
        assert_eq!(name_at("a8"), "Tower_Blue_a1");
        assert_eq!(name_at("c8"), "Bishop_Blue_c1");
        assert_eq!(name_at("d8"), "Queen_Blue_d8");
        assert_eq!(name_at("e8"), "King_Blue_e8");
    }

    #[test]
    fn test_sides_match_labels() {
        for p in STARTING_LAYOUT.iter() {
            assert_eq!(p.piece.side(), Some(p.side));
            assert_eq!(p.piece.kind(), Some(p.kind));
        }
    }
}
