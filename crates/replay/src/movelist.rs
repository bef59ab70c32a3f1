//! The fixed move lists replayed by the cursor.

use crate::error::{ReplayError, Result};
use crate::r#move::MoveRecord;
use std::ops::Index;
use std::str::FromStr;

/// An immutable, ordered sequence of moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<MoveRecord>,
}

impl MoveList {
    pub fn new(moves: Vec<MoveRecord>) -> Self {
        Self { moves }
    }

    /// Builds a list from `(piece, square)` pairs. Piece names are not checked here; a name
    /// the scene does not know is reported when the move is applied.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self> {
        let moves = pairs
            .iter()
            .map(|&(piece, square)| Ok(MoveRecord::new(piece, square.parse()?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { moves })
    }

    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.moves.get(index)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn as_slice(&self) -> &[MoveRecord] {
        &self.moves
    }
}

impl Index<usize> for MoveList {
    type Output = MoveRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

/// The scripted games that ship with the replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptedLine {
    /// A full game, 69 moves.
    #[default]
    MainLine,
    /// Shares the main line's opening and ends in a long back-and-forth of rook moves.
    /// Several of its later labels name pieces that were never set up.
    RookShuffle,
}

impl ScriptedLine {
    pub fn pairs(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ScriptedLine::MainLine => MAIN_LINE,
            ScriptedLine::RookShuffle => ROOK_SHUFFLE,
        }
    }

    pub fn move_list(self) -> Result<MoveList> {
        MoveList::from_pairs(self.pairs())
    }
}

impl FromStr for ScriptedLine {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "main-line" => Ok(ScriptedLine::MainLine),
            "shuffle" | "rook-shuffle" => Ok(ScriptedLine::RookShuffle),
            other => Err(ReplayError::Config(format!("unknown scripted line `{other}`"))),
        }
    }
}

const MAIN_LINE: &[(&str, &str)] = &[
    ("Pawn_Red_e2", "e4"),
    ("Pawn_Blue_c7", "c5"),
    ("Pawn_Red_c2", "c3"),
    ("Pawn_Blue_d7", "d5"),
    ("Pawn_Red_e2", "d5"),
    ("Queen_Blue_d8", "d5"),
    ("Pawn_Red_d2", "d4"),
    ("Knight_Blue_g2", "f6"),
    ("Knight_Red_g2", "f3"),
    ("Bishop_Blue_c1", "g4"),
    ("Bishop_Red_f2", "e2"),
    ("Pawn_Blue_e7", "e6"),
    ("Pawn_Red_h2", "h3"),
    ("Bishop_Blue_c1", "h5"),
    ("King_Red_e1", "g1"),
    ("Tower_Red_h2", "f1"),
    ("Knight_Blue_b1", "c6"),
    ("Bishop_Red_c1", "e3"),
    ("Pawn_Blue_c7", "d4"),
    ("Pawn_Red_c2", "d4"),
    ("Bishop_Blue_f2", "b4"),
    ("Pawn_Red_a2", "a3"),
    ("Bishop_Blue_f2", "a5"),
    ("Knight_Red_b1", "c3"),
    ("Queen_Blue_d8", "d6"),
    ("Knight_Red_b1", "b5"),
    ("Queen_Blue_d8", "e7"),
    ("Knight_Red_g2", "e5"),
    ("Bishop_Blue_c1", "e2"),
    ("Queen_Red_d1", "e2"),
    ("King_Blue_e8", "g8"),
    ("Tower_Blue_h2", "f8"),
    ("Tower_Red_a1", "c1"),
    ("Tower_Blue_a1", "c8"),
    ("Bishop_Red_c1", "g5"),
    ("Bishop_Blue_f2", "b6"),
    ("Bishop_Red_c1", "f6"),
    ("Pawn_Blue_g7", "f6"),
    ("Knight_Red_g2", "c4"),
    ("Tower_Blue_h2", "d8"),
    ("Knight_Red_g2", "b6"),
    ("Pawn_Blue_a7", "b6"),
    ("Tower_Red_h2", "d1"),
    ("Pawn_Blue_g7", "f5"),
    ("Queen_Red_d1", "e3"),
    ("Queen_Blue_d8", "f6"),
    ("Pawn_Red_c2", "d5"),
    ("Tower_Blue_h2", "d5"),
    ("Tower_Red_h2", "d5"),
    ("Pawn_Blue_e7", "d5"),
    ("Pawn_Red_b2", "b3"),
    ("King_Blue_e8", "h8"),
    ("Queen_Red_d1", "b6"),
    ("Tower_Blue_a1", "g8"),
    ("Queen_Red_d1", "c5"),
    ("Pawn_Blue_e7", "d4"),
    ("Knight_Red_b1", "d6"),
    ("Pawn_Blue_g7", "f4"),
    ("Knight_Red_b1", "b7"),
    ("Knight_Blue_b1", "e5"),
    ("Queen_Red_d1", "d5"),
    ("Pawn_Blue_g7", "f3"),
    ("Pawn_Red_g2", "g3"),
    ("Knight_Blue_b1", "d3"),
    ("Tower_Red_a1", "c7"),
    ("Tower_Blue_a1", "e8"),
    ("Knight_Red_b1", "d6"),
    ("Tower_Blue_a1", "e1"),
    ("King_Red_e1", "h2"),
];

const ROOK_SHUFFLE: &[(&str, &str)] = &[
    ("Pawn_Red_e2", "e4"),
    ("Pawn_Blue_c7", "c5"),
    ("Pawn_Red_c2", "c3"),
    ("Pawn_Blue_d7", "d5"),
    ("Pawn_Red_e2", "d5"),
    ("Queen_Blue_d8", "d5"),
    ("Pawn_Red_d2", "d4"),
    ("Knight_Blue_g2", "f6"),
    ("Knight_Red_g2", "f3"),
    ("Bishop_Blue_c1", "g4"),
    ("Bishop_Red_f2", "e2"),
    ("Pawn_Blue_e7", "e6"),
    ("Pawn_Red_h2", "h3"),
    ("Bishop_Blue_c1", "h5"),
    ("King_Red_e1", "g1"),
    ("Tower_Red_h2", "f1"),
    ("Knight_Blue_b1", "c6"),
    ("Bishop_Red_c1", "e3"),
    ("Pawn_Blue_c7", "d4"),
    ("Pawn_Red_c2", "d4"),
    ("Bishop_Blue_f2", "b4"),
    ("Pawn_Red_a2", "a3"),
    ("Bishop_Blue_f2", "a5"),
    ("Knight_Red_b1", "c3"),
    ("Queen_Blue_d8", "d6"),
    ("Knight_Red_b1", "b5"),
    ("Queen_Blue_d8", "e7"),
    ("Knight_Red_g2", "e5"),
    ("Bishop_Blue_c1", "e2"),
    ("Queen_Red_d1", "e2"),
    ("King_Blue_e8", "g8"),
    ("Tower_Blue_h2", "f8"),
    ("Tower_Red_a1", "c1"),
    ("Tower_Blue_a1", "c8"),
    ("Bishop_Red_c1", "g5"),
    ("Bishop_Blue_f2", "b6"),
    ("Bishop_Red_c1", "f6"),
    ("Pawn_Blue_g7", "f6"),
    ("Knight_Red_g2", "c4"),
    ("Tower_Blue_h2", "d8"),
    ("Knight_Red_g2", "b6"),
    ("Pawn_Blue_a7", "b6"),
    ("Tower_Red_h2", "d1"),
    ("Pawn_Blue_g7", "f5"),
    ("Queen_Red_d1", "e3"),
    ("Queen_Blue_d8", "f6"),
    ("Pawn_Red_c2", "d5"),
    ("Tower_Blue_a1", "d5"),
    ("Queen_Red_d1", "c5"),
    ("Pawn_Blue_e7", "d4"),
    ("Pawn_Red_b2", "b3"),
    ("King_Blue_e8", "h8"),
    ("Queen_Red_d1", "b6"),
    ("Tower_Blue_f6", "g8"),
    ("Queen_Blue_d8", "d8"),
    ("Rook_Red_d8", "g8"),
    ("Knight_Blue_f3", "h2"),
    ("Rook_Red_g8", "g7"),
    ("Knight_Blue_h2", "f3"),
    ("King_Red_e1", "g1"),
    ("Rook_Blue_g7", "g1"),
    ("Rook_Red_g1", "g7"),
    ("Knight_Blue_f3", "e4"),
    ("Rook_Red_g7", "g1"),
    ("Rook_Blue_g1", "g7"),
    ("Rook_Red_g1", "g7"),
    ("Knight_Blue_e4", "g3"),
    ("Rook_Red_g7", "g1"),
    ("Rook_Blue_g1", "g7"),
    ("Rook_Red_g7", "g1"),
    ("Rook_Blue_g7", "g1"),
    ("Rook_Red_g1", "g7"),
    ("Rook_Blue_g1", "g7"),
    ("Rook_Red_g7", "g1"),
    ("Rook_Blue_g7", "g1"),
    ("Rook_Red_g1", "g7"),
    ("Rook_Blue_g1", "g7"),
    ("Rook_Red_g7", "g1"),
    ("Rook_Blue_g1", "g7"),
    ("Rook_Red_g7", "g1"),
    ("Rook_Blue_g1", "g7"),
    ("Rook_Red_g1", "g7"),
    ("Rook_Blue_g7", "g1"),
];
