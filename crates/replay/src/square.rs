//! Square identifiers and their projection to and from world space.

use crate::constants::{BOARD_CENTER, BOARD_SIZE, BOARD_Z, FILE_NAMES};
use crate::error::ReplayError;
use crate::scene::Vec3;
use std::fmt;
use std::str::FromStr;

/// One of the 64 board cells.
///
/// `file` 0 is the `a` file and `rank` 0 is the first rank, so `Square::from_coord(4, 3)`
/// is `e4`. Ordering is file-major, which keeps iteration over an occupancy table stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Creates a square from a board coordinate. Returns `None` outside 0..7.
    pub fn from_coord(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Square { file: x, rank: y })
        } else {
            None
        }
    }

    /// The board coordinate `(x, y)` of this square.
    pub fn coord(self) -> (u8, u8) {
        (self.file, self.rank)
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Projects a world position onto the board, snapping to the nearest cell.
    pub fn from_world(position: Vec3) -> Option<Self> {
        let x = (position.x + BOARD_CENTER).round();
        let y = (position.y + BOARD_CENTER).round();
        if !(0.0..BOARD_SIZE as f32).contains(&x) || !(0.0..BOARD_SIZE as f32).contains(&y) {
            return None;
        }
        Square::from_coord(x as u8, y as u8)
    }

    /// Centre of the tile in world space, on the board layer.
    pub fn world_position(self) -> Vec3 {
        Vec3::new(
            self.file as f32 - BOARD_CENTER,
            self.rank as f32 - BOARD_CENTER,
            BOARD_Z,
        )
    }

    /// All 64 squares, file by file.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|file| (0..BOARD_SIZE).map(move |rank| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILE_NAMES[self.file as usize], self.rank + 1)
    }
}

impl FromStr for Square {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ReplayError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Square::from_coord(file, rank).ok_or_else(|| ReplayError::InvalidSquare(s.to_string()))
    }
}
