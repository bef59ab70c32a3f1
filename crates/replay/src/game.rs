//! The replay state shared by the move applier and the cursor controller.

use crate::config::Config;
use crate::movelist::MoveList;
use crate::occupancy::OccupancyTable;
use crate::piece::PieceId;
use crate::scene::ObjectHandle;
use crate::square::Square;
use crate::tween::Tween;

/// The move currently being animated.
#[derive(Debug, Clone)]
pub(crate) struct Animation {
    pub(crate) piece: PieceId,
    pub(crate) handle: ObjectHandle,
    pub(crate) destination: Square,
    pub(crate) destination_tile: ObjectHandle,
    pub(crate) tween: Tween,
}

/// Everything one board needs to replay a line: the occupancy table, the in-flight
/// animation, the move cursor and the origin each applied move started from.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) occupancy: OccupancyTable,
    pub(crate) animation: Option<Animation>,
    pub(crate) moves: MoveList,
    pub(crate) cursor: usize,
    /// `origins[i]` is where `moves[i]` started from, if it was applied.
    pub(crate) origins: Vec<Option<Square>>,
    pub(crate) config: Config,
}

impl GameState {
    /// Starts from the standard layout.
    pub fn new(config: Config, moves: MoveList) -> Self {
        Self::with_occupancy(config, moves, OccupancyTable::standard())
    }

    pub fn with_occupancy(config: Config, moves: MoveList, occupancy: OccupancyTable) -> Self {
        let origins = vec![None; moves.len()];
        Self {
            occupancy,
            animation: None,
            moves,
            cursor: 0,
            origins,
            config,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Number of moves applied so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn moves(&self) -> &MoveList {
        &self.moves
    }

    pub fn occupancy(&self) -> &OccupancyTable {
        &self.occupancy
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Piece and destination of the move in flight.
    pub fn animating(&self) -> Option<(&PieceId, Square)> {
        self.animation.as_ref().map(|a| (&a.piece, a.destination))
    }

    /// Back to the standard layout with the cursor at the start.
    pub fn reset(&mut self) {
        self.occupancy = OccupancyTable::standard();
        self.animation = None;
        self.cursor = 0;
        self.origins.iter_mut().for_each(|origin| *origin = None);
    }
}
