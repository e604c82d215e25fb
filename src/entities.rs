//! All game entity types. Pure data, no logic.

use glam::Vec2;

use crate::config::GameConfig;
use crate::registry::{EntityId, Registry};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box in logical units.  Used both for rendering
/// placement and for collision tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of the given size whose centre sits at `(cx, cy)`.
    pub fn from_center(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// ── Visuals ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// The player's ship.
    Ship,
    Circle,
    Square,
    TriangleUp,
    TriangleRight,
}

pub const ENEMY_SHAPES: [Shape; 4] = [
    Shape::Circle,
    Shape::Square,
    Shape::TriangleUp,
    Shape::TriangleRight,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Orange,
}

pub const ENEMY_TINTS: [Tint; 5] = [Tint::Red, Tint::Green, Tint::Yellow, Tint::Purple, Tint::Orange];

/// Pre-rendered appearance, fixed when the entity is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visual {
    pub shape: Shape,
    pub tint: Tint,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
    pub visual: Visual,
    pub speed: f32,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub rect: Rect,
    pub visual: Visual,
    pub size: u32,
    /// Unit vector, fixed for the enemy's lifetime.
    pub direction: Vec2,
    pub speed: f32,
}

#[derive(Clone, Debug)]
pub enum Entity {
    Player(Player),
    Enemy(Enemy),
}

impl Entity {
    pub fn rect(&self) -> &Rect {
        match self {
            Entity::Player(p) => &p.rect,
            Entity::Enemy(e) => &e.rect,
        }
    }

    pub fn visual(&self) -> &Visual {
        match self {
            Entity::Player(p) => &p.visual,
            Entity::Enemy(e) => &e.visual,
        }
    }

    pub fn is_enemy(&self) -> bool {
        matches!(self, Entity::Enemy(_))
    }
}

/// Screen edge an enemy enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

pub const EDGES: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

// ── Input ─────────────────────────────────────────────────────────────────────

/// Logical movement directions held during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Everything the loop consumed from the input queue for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub movement: Movement,
    pub quit: bool,
}

// ── Session state ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Terminated,
}

/// The entire session.  Owned by the main loop; nothing else holds it.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub registry: Registry,
    pub player: EntityId,
    pub score: u32,
    /// Ticks since the last spawn opportunity.
    pub spawn_timer: u32,
    pub status: SessionStatus,
    pub frame: u64,
    pub config: GameConfig,
}
