//! A replay session: one `GameState` bound to the scene it drives.

use crate::applier::{self, MoveOutcome};
use crate::config::Config;
use crate::controller::{self, Step};
use crate::game::GameState;
use crate::movelist::MoveList;
use crate::piece::PieceId;
use crate::r#move::MoveRecord;
use crate::scene::{Body, Scene, SceneGraph};
use crate::square::Square;
use std::time::Duration;
use tracing::{debug, info};

/// The surface the input layer talks to.
pub struct Session<S: Scene> {
    state: GameState,
    scene: S,
}

impl<S: Scene> Session<S> {
    pub fn new(state: GameState, scene: S) -> Self {
        Self { state, scene }
    }

    pub fn on_advance_key(&mut self) -> Step {
        controller::advance(&mut self.state, &mut self.scene)
    }

    pub fn on_retreat_key(&mut self) -> Step {
        controller::retreat(&mut self.state, &mut self.scene)
    }

    /// Render-loop callback. Returns the move that landed this frame, if any.
    pub fn on_frame(&mut self, dt: Duration) -> Option<MoveRecord> {
        applier::tick(&mut self.state, &mut self.scene, dt)
    }

    /// Moves a piece outside the scripted line, e.g. from a click on the board.
    /// The cursor is left alone.
    pub fn apply_manual(&mut self, piece: &PieceId, destination: Square) -> MoveOutcome {
        applier::apply_move(&mut self.state, &mut self.scene, piece, destination)
    }

    /// The square a piece is standing on right now, taken from its scene position.
    pub fn square_of_piece(&self, name: &str) -> Option<Square> {
        let handle = self.scene.resolve(name)?;
        Square::from_world(self.scene.position(handle)?)
    }

    /// The last move the cursor stepped over.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.state.cursor().checked_sub(1).and_then(|i| self.state.moves().get(i))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }
}

impl Session<SceneGraph> {
    /// The standard board and starting layout.
    pub fn standard(config: Config, moves: MoveList) -> Self {
        let session = Self::new(GameState::new(config, moves), SceneGraph::standard());
        session.log_roster();
        session
    }

    /// Puts every piece back and rewinds the cursor.
    pub fn restart(&mut self) {
        self.state.reset();
        self.scene = SceneGraph::standard();
        info!("replay restarted");
    }

    fn log_roster(&self) {
        info!(
            pieces = self.scene.pieces().count(),
            moves = self.state.moves().len(),
            line = ?self.state.config().line,
            "replay ready"
        );
        for piece in self.scene.pieces() {
            if let Body::Piece { kind, side } = piece.body {
                debug!(name = %piece.name, ?kind, ?side, "piece");
            }
        }
    }
}
