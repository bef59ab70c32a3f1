//! Constants shared by the board, the scene and the animation code.

use std::time::Duration;

/// Offset between a board coordinate (0..7) and its world coordinate.
/// Square `a1` sits at world (-3.5, -3.5).
pub const BOARD_CENTER: f32 = 3.5;

/// Number of files and ranks.
pub const BOARD_SIZE: u8 = 8;

/// Vertical layer of the board tiles.
pub const BOARD_Z: f32 = 0.0;

/// Vertical layer pieces are pinned to so they render above the board.
pub const PIECE_Z: f32 = 1.0;

pub const FILE_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

// --- Timing ---
pub const DEFAULT_MOVE_DURATION: Duration = Duration::from_millis(500);
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);
