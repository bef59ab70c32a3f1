//! Steps the move cursor forwards and backwards through the move list.

use crate::applier::{apply_move, MoveOutcome};
use crate::game::GameState;
use crate::scene::Scene;
use tracing::debug;

/// What a cursor step did.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// The cursor moved and a move was handed to the applier.
    Applied(MoveOutcome),
    /// The cursor moved back over a move that never resolved, so no piece moved.
    CursorOnly,
    /// A move was still animating. The cursor did not move.
    Dropped,
    /// Already at the start or the end of the list.
    AtBoundary,
    /// Retreat was requested with undo turned off.
    Disabled,
}

/// Applies the move under the cursor and moves the cursor past it.
///
/// The cursor also moves past a move whose piece could not be resolved, so one stale label
/// does not stall the rest of the line.
pub fn advance<S: Scene>(state: &mut GameState, scene: &mut S) -> Step {
    let index = state.cursor;
    let Some(record) = state.moves.get(index).cloned() else {
        return Step::AtBoundary;
    };
    if state.is_animating() {
        debug!(cursor = index, "advance dropped while animating");
        return Step::Dropped;
    }

    let outcome = apply_move(state, scene, &record.piece, record.destination);
    state.origins[index] = match outcome {
        MoveOutcome::Started { from, .. } => Some(from),
        _ => None,
    };
    state.cursor += 1;
    Step::Applied(outcome)
}

/// Moves the cursor back one move and sends that move's piece back to where it started.
///
/// Captured pieces are not restored.
pub fn retreat<S: Scene>(state: &mut GameState, scene: &mut S) -> Step {
    if !state.config.undo_enabled {
        return Step::Disabled;
    }
    if state.cursor == 0 {
        return Step::AtBoundary;
    }
    if state.is_animating() {
        debug!(cursor = state.cursor, "retreat dropped while animating");
        return Step::Dropped;
    }

    state.cursor -= 1;
    let index = state.cursor;
    let piece = state.moves[index].piece.clone();
    match state.origins[index].take() {
        Some(origin) => Step::Applied(apply_move(state, scene, &piece, origin)),
        None => {
            debug!(cursor = index, %piece, "nothing to undo for a move that never resolved");
            Step::CursorOnly
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::movelist::MoveList;
    use crate::piece::PieceId;
    use crate::scene::SceneGraph;
    use crate::square::Square;
    use std::time::Duration;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn setup(pairs: &[(&str, &str)], undo_enabled: bool) -> (GameState, SceneGraph) {
        let config = Config { undo_enabled, ..Config::default() };
        let moves = MoveList::from_pairs(pairs).unwrap();
        (GameState::new(config, moves), SceneGraph::standard())
    }

    fn settle(state: &mut GameState, scene: &mut SceneGraph) {
        crate::applier::tick(state, scene, Duration::from_secs(1));
    }

    #[test]
    fn test_advance_to_the_end() {
        let (mut state, mut scene) = setup(&[("Pawn_Red_e2", "e4")], true);
        assert!(matches!(advance(&mut state, &mut scene), Step::Applied(MoveOutcome::Started { .. })));
        assert_eq!(state.cursor(), 1);
        settle(&mut state, &mut scene);
        assert_eq!(advance(&mut state, &mut scene), Step::AtBoundary);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_advance_dropped_while_animating() {
        let (mut state, mut scene) = setup(&[("Pawn_Red_e2", "e4"), ("Pawn_Blue_c7", "c5")], true);
        advance(&mut state, &mut scene);
        let before = state.occupancy().clone();

        assert_eq!(advance(&mut state, &mut scene), Step::Dropped);
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.occupancy(), &before);

        settle(&mut state, &mut scene);
        assert!(matches!(advance(&mut state, &mut scene), Step::Applied(_)));
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_unresolved_move_still_advances() {
        let (mut state, mut scene) = setup(&[("Rook_Red_d8", "g8"), ("Pawn_Red_e2", "e4")], true);
        assert!(matches!(
            advance(&mut state, &mut scene),
            Step::Applied(MoveOutcome::Unresolved(_))
        ));
        assert_eq!(state.cursor(), 1);
        assert!(!state.is_animating());

        assert_eq!(retreat(&mut state, &mut scene), Step::CursorOnly);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_retreat_returns_piece_to_origin() {
        let (mut state, mut scene) = setup(&[("Pawn_Red_e2", "e4")], true);
        let pawn = PieceId::from("Pawn_Red_e2");
        advance(&mut state, &mut scene);
        settle(&mut state, &mut scene);

        let step = retreat(&mut state, &mut scene);
        assert_eq!(step, Step::Applied(MoveOutcome::Started { from: sq("e4"), captured: None }));
        assert_eq!(state.cursor(), 0);
        settle(&mut state, &mut scene);
        assert_eq!(state.occupancy().get(sq("e2")), Some(&pawn));
        assert_eq!(state.occupancy().get(sq("e4")), None);

        assert_eq!(retreat(&mut state, &mut scene), Step::AtBoundary);
    }

    #[test]
    fn test_retreat_does_not_restore_captures() {
        let pairs = [("Pawn_Red_e2", "e4"), ("Pawn_Blue_d7", "d5"), ("Pawn_Red_e2", "d5")];
        let (mut state, mut scene) = setup(&pairs, true);
        for _ in 0..pairs.len() {
            advance(&mut state, &mut scene);
            settle(&mut state, &mut scene);
        }
        assert!(scene.resolve("Pawn_Blue_d7").is_none());

        retreat(&mut state, &mut scene);
        settle(&mut state, &mut scene);
        assert_eq!(state.occupancy().get(sq("e4")), Some(&PieceId::from("Pawn_Red_e2")));
        assert_eq!(state.occupancy().get(sq("d5")), None);
        assert!(scene.resolve("Pawn_Blue_d7").is_none());
    }

    #[test]
    fn test_retreat_disabled() {
        let (mut state, mut scene) = setup(&[("Pawn_Red_e2", "e4")], false);
        advance(&mut state, &mut scene);
        settle(&mut state, &mut scene);
        assert_eq!(retreat(&mut state, &mut scene), Step::Disabled);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_retreat_dropped_while_animating() {
        let (mut state, mut scene) = setup(&[("Pawn_Red_e2", "e4")], true);
        advance(&mut state, &mut scene);
        assert_eq!(retreat(&mut state, &mut scene), Step::Dropped);
        assert_eq!(state.cursor(), 1);
    }
}
