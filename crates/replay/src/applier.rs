//! Applies a move: capture resolution, occupancy bookkeeping and the animated relocation.

use crate::constants::PIECE_Z;
use crate::error::{ReplayError, Result};
use crate::game::{Animation, GameState};
use crate::piece::PieceId;
use crate::r#move::MoveRecord;
use crate::scene::{Highlight, ObjectHandle, Scene, Vec3};
use crate::square::Square;
use crate::tween::Tween;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// What `apply_move` did with a request.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The piece is on its way. Occupancy of the destination is committed when the
    /// animation completes.
    Started {
        from: Square,
        captured: Option<PieceId>,
    },
    /// Another move was still animating; the request was discarded, not queued.
    Dropped,
    /// The piece or square could not be found. Nothing was changed.
    Unresolved(ReplayError),
}

struct Resolved {
    piece: ObjectHandle,
    tile: ObjectHandle,
    position: Vec3,
    from: Square,
}

fn resolve<S: Scene>(scene: &S, piece: &PieceId, destination: Square) -> Result<Resolved> {
    let handle = scene
        .resolve(piece.as_str())
        .ok_or_else(|| ReplayError::PieceNotFound(piece.to_string()))?;
    let tile = scene
        .resolve(&destination.to_string())
        .ok_or_else(|| ReplayError::SquareNotFound(destination.to_string()))?;
    let position = scene
        .position(handle)
        .ok_or_else(|| ReplayError::PieceNotFound(piece.to_string()))?;
    let from = Square::from_world(position).ok_or_else(|| ReplayError::OffBoard(piece.to_string()))?;
    Ok(Resolved { piece: handle, tile, position, from })
}

/// Moves `piece` to `destination`, capturing an opposing occupant.
///
/// No legality checks are made. A friendly occupant is logged and the move goes ahead.
pub fn apply_move<S: Scene>(
    state: &mut GameState,
    scene: &mut S,
    piece: &PieceId,
    destination: Square,
) -> MoveOutcome {
    if state.is_animating() {
        debug!(%piece, %destination, "move dropped, another move is still animating");
        return MoveOutcome::Dropped;
    }

    let resolved = match resolve(scene, piece, destination) {
        Ok(resolved) => resolved,
        Err(err) => {
            warn!(%piece, %destination, "move skipped: {err}");
            return MoveOutcome::Unresolved(err);
        }
    };

    // Free the source. Only this piece's own records are cleared so a piece it shares a
    // cell with keeps its entry.
    if state.occupancy.get(resolved.from) == Some(piece) {
        state.occupancy.clear(resolved.from);
    }
    if let Some(stale) = state.occupancy.find_square_of(piece) {
        state.occupancy.clear(stale);
    }

    scene.set_highlight(resolved.tile, Highlight::Destination);

    let captured = resolve_capture(state, scene, piece, destination);

    let start = Vec3 { z: PIECE_Z, ..resolved.position };
    let target = Vec3 { z: PIECE_Z, ..destination.world_position() };
    scene.set_position(resolved.piece, start);
    state.animation = Some(Animation {
        piece: piece.clone(),
        handle: resolved.piece,
        destination,
        destination_tile: resolved.tile,
        tween: Tween::new(start, target, state.config.move_duration, state.config.easing),
    });
    scene.request_frame();

    debug!(%piece, from = %resolved.from, %destination, "move started");
    MoveOutcome::Started { from: resolved.from, captured }
}

fn resolve_capture<S: Scene>(
    state: &mut GameState,
    scene: &mut S,
    piece: &PieceId,
    destination: Square,
) -> Option<PieceId> {
    let occupant = state.occupancy.get(destination)?.clone();
    if !occupant.is_opponent_of(piece) {
        warn!(%piece, %occupant, %destination, "target square is occupied by a friendly piece");
        return None;
    }

    if let Some(handle) = scene.resolve(occupant.as_str()) {
        scene.remove(handle);
    }
    state.occupancy.clear(destination);
    info!(%piece, captured = %occupant, %destination, "piece captured");
    Some(occupant)
}

/// Advances the animation in flight by `dt`.
///
/// Returns the move once it lands: the destination is recorded in the occupancy table, the
/// highlight is cleared and further moves are accepted again.
pub fn tick<S: Scene>(state: &mut GameState, scene: &mut S, dt: Duration) -> Option<MoveRecord> {
    let animation = state.animation.as_mut()?;
    let (position, finished) = animation.tween.advance(dt);
    scene.set_position(animation.handle, Vec3 { z: PIECE_Z, ..position });
    scene.request_frame();
    trace!(piece = %animation.piece, x = position.x, y = position.y, "frame");

    if !finished {
        return None;
    }

    let animation = state.animation.take()?;
    state.occupancy.set(animation.destination, animation.piece.clone());
    scene.clear_highlight(animation.destination_tile);
    info!(piece = %animation.piece, square = %animation.destination, "move committed");
    Some(MoveRecord::new(animation.piece, animation.destination))
}
