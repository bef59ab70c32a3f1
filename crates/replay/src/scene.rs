//! The scene the core drives: object lookup, positions, highlights and removal.
//!
//! `Scene` is the narrow surface the move applier needs from a renderer. `SceneGraph` is the
//! in-memory implementation both front-ends draw from; it resolves names through an index
//! built once at setup.

use crate::constants::PIECE_Z;
use crate::layout::STARTING_LAYOUT;
use crate::piece::{PieceKind, Side};
use crate::square::Square;
use std::collections::HashMap;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn lerp(self, to: Vec3, t: f32) -> Vec3 {
        self + (to - self) * t
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Opaque reference to an object in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(usize);

/// Visual state a square can be put in on top of its base shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// The square a piece is travelling to.
    Destination,
}

/// What the core needs from a renderer.
pub trait Scene {
    fn resolve(&self, name: &str) -> Option<ObjectHandle>;

    /// `None` once the object has been removed.
    fn position(&self, handle: ObjectHandle) -> Option<Vec3>;

    fn set_position(&mut self, handle: ObjectHandle, position: Vec3);

    fn set_highlight(&mut self, square: ObjectHandle, highlight: Highlight);

    /// Restores the square's previous appearance.
    fn clear_highlight(&mut self, square: ObjectHandle);

    fn remove(&mut self, handle: ObjectHandle);

    fn request_frame(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

#[derive(Debug, Clone)]
pub enum Body {
    Tile {
        square: Square,
        shade: Shade,
        highlight: Option<Highlight>,
    },
    Piece {
        kind: PieceKind,
        side: Side,
    },
}

#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub position: Vec3,
    pub body: Body,
}

/// In-memory scene holding the 64 tiles and the pieces still in play.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    objects: Vec<Option<SceneObject>>,
    index: HashMap<String, ObjectHandle>,
    redraw: bool,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The board plus all 32 pieces on their starting squares.
    pub fn standard() -> Self {
        let mut scene = Self::new();
        for square in Square::all() {
            let (x, y) = square.coord();
            let shade = if (x + y) % 2 == 0 { Shade::Light } else { Shade::Dark };
            scene.add(SceneObject {
                name: square.to_string(),
                position: square.world_position(),
                body: Body::Tile { square, shade, highlight: None },
            });
        }
        for p in STARTING_LAYOUT.iter() {
            let mut position = p.square.world_position();
            position.z = PIECE_Z;
            scene.add(SceneObject {
                name: p.piece.to_string(),
                position,
                body: Body::Piece { kind: p.kind, side: p.side },
            });
        }
        scene.redraw = true;
        scene
    }

    /// Adds an object and indexes it by name. A later object with the same name shadows the
    /// earlier one.
    pub fn add(&mut self, object: SceneObject) -> ObjectHandle {
        let handle = ObjectHandle(self.objects.len());
        self.index.insert(object.name.clone(), handle);
        self.objects.push(Some(object));
        handle
    }

    pub fn get(&self, handle: ObjectHandle) -> Option<&SceneObject> {
        self.objects.get(handle.0).and_then(Option::as_ref)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &SceneObject> {
        self.live().filter(|o| matches!(o.body, Body::Tile { .. }))
    }

    pub fn pieces(&self) -> impl Iterator<Item = &SceneObject> {
        self.live().filter(|o| matches!(o.body, Body::Piece { .. }))
    }

    pub fn highlight_of(&self, square: Square) -> Option<Highlight> {
        let handle = self.resolve(&square.to_string())?;
        match self.get(handle)?.body {
            Body::Tile { highlight, .. } => highlight,
            Body::Piece { .. } => None,
        }
    }

    /// True once after any `request_frame`.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    fn live(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().flatten()
    }

    fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut SceneObject> {
        self.objects.get_mut(handle.0).and_then(Option::as_mut)
    }
}

impl Scene for SceneGraph {
    fn resolve(&self, name: &str) -> Option<ObjectHandle> {
        let handle = *self.index.get(name)?;
        self.get(handle).map(|_| handle)
    }

    fn position(&self, handle: ObjectHandle) -> Option<Vec3> {
        self.get(handle).map(|o| o.position)
    }

    fn set_position(&mut self, handle: ObjectHandle, position: Vec3) {
        if let Some(object) = self.get_mut(handle) {
            object.position = position;
        }
    }

    fn set_highlight(&mut self, square: ObjectHandle, style: Highlight) {
        if let Some(SceneObject { body: Body::Tile { highlight, .. }, .. }) = self.get_mut(square) {
            *highlight = Some(style);
        }
    }

    fn clear_highlight(&mut self, square: ObjectHandle) {
        if let Some(SceneObject { body: Body::Tile { highlight, .. }, .. }) = self.get_mut(square) {
            *highlight = None;
        }
    }

    fn remove(&mut self, handle: ObjectHandle) {
        if let Some(slot) = self.objects.get_mut(handle.0) {
            if let Some(object) = slot.take() {
                if self.index.get(&object.name) == Some(&handle) {
                    self.index.remove(&object.name);
                }
            }
        }
    }

    fn request_frame(&mut self) {
        self.redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_scene() {
        let scene = SceneGraph::standard();
        assert_eq!(scene.tiles().count(), 64);
        assert_eq!(scene.pieces().count(), 32);

        let queen = scene.resolve("Queen_Red_d1").unwrap();
        assert_eq!(scene.position(queen), Some(Vec3::new(-0.5, -3.5, PIECE_Z)));
        let e4 = scene.resolve("e4").unwrap();
        assert_eq!(scene.position(e4), Some(Vec3::new(0.5, -0.5, 0.0)));
        assert!(scene.resolve("Rook_Red_d8").is_none());
    }

    #[test]
    fn test_tile_shades_alternate() {
        let scene = SceneGraph::standard();
        let shade = |name: &str| match scene.get(scene.resolve(name).unwrap()).unwrap().body {
            Body::Tile { shade, .. } => shade,
            Body::Piece { .. } => unreachable!(),
        };
        assert_eq!(shade("a1"), Shade::Light);
        assert_eq!(shade("b1"), Shade::Dark);
        assert_eq!(shade("h8"), Shade::Light);
    }

    #[test]
    fn test_remove_stops_resolving() {
        let mut scene = SceneGraph::standard();
        let pawn = scene.resolve("Pawn_Blue_d7").unwrap();
        scene.remove(pawn);
        assert!(scene.resolve("Pawn_Blue_d7").is_none());
        assert!(scene.position(pawn).is_none());
        assert_eq!(scene.pieces().count(), 31);

        // Writes to a removed object are ignored.
        scene.set_position(pawn, Vec3::default());
        assert!(scene.get(pawn).is_none());
    }

    #[test]
    fn test_highlight_and_restore() {
        let mut scene = SceneGraph::standard();
        let d5: Square = "d5".parse().unwrap();
        let handle = scene.resolve("d5").unwrap();

        scene.set_highlight(handle, Highlight::Destination);
        assert_eq!(scene.highlight_of(d5), Some(Highlight::Destination));
        scene.clear_highlight(handle);
        assert_eq!(scene.highlight_of(d5), None);

        // Highlighting a piece has no effect.
        let king = scene.resolve("King_Red_e1").unwrap();
        scene.set_highlight(king, Highlight::Destination);
        assert!(matches!(scene.get(king).unwrap().body, Body::Piece { .. }));
    }

    #[test]
    fn test_redraw_flag() {
        let mut scene = SceneGraph::new();
        assert!(!scene.take_redraw());
        scene.request_frame();
        assert!(scene.take_redraw());
        assert!(!scene.take_redraw());
    }

    #[test]
    fn test_lerp() {
        let from = Vec3::new(0.0, 0.0, 1.0);
        let to = Vec3::new(2.0, -4.0, 1.0);
        assert_eq!(from.lerp(to, 0.5), Vec3::new(1.0, -2.0, 1.0));
        assert_eq!(from.lerp(to, 0.0), from);
    }
}
