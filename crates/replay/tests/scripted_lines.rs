use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use replay::{Config, MoveOutcome, PieceId, SceneGraph, ScriptedLine, Session, Square, Step};
use std::collections::HashSet;
use std::time::Duration;

const SETTLE: Duration = Duration::from_millis(500);

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn session(line: ScriptedLine) -> Session<SceneGraph> {
    let config = Config { line, ..Config::default() };
    Session::standard(config, line.move_list().unwrap())
}

/// No piece is recorded twice and every recorded piece is in the scene, standing on the
/// square it is recorded under.
fn assert_consistent(session: &Session<SceneGraph>) {
    let mut seen = HashSet::new();
    for (square, piece) in session.state().occupancy().iter() {
        assert!(seen.insert(piece.clone()), "{piece} recorded twice");
        assert_eq!(
            session.square_of_piece(piece.as_str()),
            Some(square),
            "{piece} is not standing on {square}"
        );
    }
}

#[test]
fn main_line_keeps_one_entry_per_live_piece() {
    let mut session = session(ScriptedLine::MainLine);
    let mut captured = Vec::new();

    while session.state().cursor() < session.state().moves().len() {
        match session.on_advance_key() {
            Step::Applied(MoveOutcome::Started { captured: Some(piece), .. }) => captured.push(piece),
            Step::Applied(MoveOutcome::Started { .. }) => {}
            other => panic!("move {} was not applied: {other:?}", session.state().cursor()),
        }
        assert!(session.on_frame(SETTLE).is_some());

        assert_consistent(&session);
        assert_eq!(session.state().occupancy().len(), session.scene().pieces().count());
    }

    assert_eq!(captured.len(), 15);
    assert_eq!(captured[0], PieceId::from("Pawn_Blue_d7"));
    assert_eq!(captured[1], PieceId::from("Pawn_Red_e2"));
    assert_eq!(session.scene().pieces().count(), 17);

    let table = session.state().occupancy();
    assert_eq!(table.get(sq("d5")), Some(&PieceId::from("Queen_Red_d1")));
    assert_eq!(table.get(sq("h2")), Some(&PieceId::from("King_Red_e1")));
    assert_eq!(table.get(sq("h8")), Some(&PieceId::from("King_Blue_e8")));
    assert_eq!(table.get(sq("e1")), Some(&PieceId::from("Tower_Blue_a1")));
    assert_eq!(session.on_advance_key(), Step::AtBoundary);
}

#[test]
fn rook_shuffle_skips_unknown_pieces() {
    let mut session = session(ScriptedLine::RookShuffle);
    let mut unresolved = 0;

    loop {
        match session.on_advance_key() {
            Step::Applied(MoveOutcome::Unresolved(_)) => unresolved += 1,
            Step::Applied(_) => {}
            Step::AtBoundary => break,
            other => panic!("unexpected step {other:?}"),
        }
        session.on_frame(SETTLE);
        assert_consistent(&session);
    }

    assert_eq!(session.state().cursor(), 83);
    assert_eq!(unresolved, 28);
    assert_eq!(session.scene().pieces().count(), 20);

    // The queen lands on its own tower at d8; the tower stays on the board but loses its entry.
    let table = session.state().occupancy();
    assert_eq!(table.len(), 19);
    assert_eq!(table.get(sq("d8")), Some(&PieceId::from("Queen_Blue_d8")));
    assert_eq!(session.square_of_piece("Tower_Blue_h2"), Some(sq("d8")));
    assert_eq!(table.find_square_of(&PieceId::from("Tower_Blue_h2")), None);
}

#[test]
fn rook_shuffle_rewinds_to_the_start() {
    let mut session = session(ScriptedLine::RookShuffle);
    while session.on_advance_key() != Step::AtBoundary {
        session.on_frame(SETTLE);
    }
    let alive = session.scene().pieces().count();

    let mut cursor_only = 0;
    loop {
        match session.on_retreat_key() {
            Step::CursorOnly => cursor_only += 1,
            Step::Applied(_) => {}
            Step::AtBoundary => break,
            other => panic!("unexpected step {other:?}"),
        }
        session.on_frame(SETTLE);
        assert_consistent(&session);
    }

    assert_eq!(session.state().cursor(), 0);
    assert_eq!(cursor_only, 28);
    assert!(session.scene().pieces().count() <= alive);
}

#[test]
fn undo_can_be_turned_off() {
    let line = ScriptedLine::MainLine;
    let config = Config { undo_enabled: false, ..Config::default() };
    let mut session = Session::standard(config, line.move_list().unwrap());
    session.on_advance_key();
    session.on_frame(SETTLE);
    assert_eq!(session.on_retreat_key(), Step::Disabled);
    assert_eq!(session.state().cursor(), 1);
}

#[test]
fn random_key_presses_keep_the_table_consistent() {
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = session(ScriptedLine::MainLine);
        let mut alive = session.scene().pieces().count();

        for _ in 0..400 {
            let cursor = session.state().cursor();
            let animating = session.state().is_animating();
            let before = session.state().occupancy().clone();

            let step = if rng.gen_bool(0.65) {
                session.on_advance_key()
            } else {
                session.on_retreat_key()
            };
            if animating {
                assert!(matches!(step, Step::Dropped | Step::AtBoundary), "seed {seed}: {step:?}");
                assert_eq!(session.state().cursor(), cursor);
                assert_eq!(session.state().occupancy(), &before);
            }

            // Sometimes the next key arrives before the piece has landed.
            let dt = if rng.gen_bool(0.7) { SETTLE } else { Duration::from_millis(rng.gen_range(0..400)) };
            session.on_frame(dt);

            if !session.state().is_animating() {
                assert_consistent(&session);
            }
            let now_alive = session.scene().pieces().count();
            assert!(now_alive <= alive, "seed {seed}: a captured piece came back");
            alive = now_alive;
            assert!(session.state().occupancy().len() <= alive);
        }
    }
}
