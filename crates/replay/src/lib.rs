pub mod applier;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod game;
pub mod layout;
pub mod r#move;
pub mod movelist;
pub mod occupancy;
pub mod piece;
pub mod scene;
pub mod session;
pub mod square;
pub mod tween;
pub mod view;

pub use applier::MoveOutcome;
pub use config::Config;
pub use controller::Step;
pub use error::ReplayError;
pub use game::GameState;
pub use movelist::{MoveList, ScriptedLine};
pub use piece::{PieceId, PieceKind, Side};
pub use scene::{Scene, SceneGraph, Vec3};
pub use session::Session;
pub use square::Square;
