//! Geometry helpers: bounding boxes, playfield bounds, directions.
//!
//! World units are pixels of a 1600×900 field; the display scales them down
//! to terminal cells.

use glam::Vec2;

// ── Bounding extent ───────────────────────────────────────────────────────────

/// Axis-aligned bounding box stored as a center and a full size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// A square box of side `2 * radius` around `center`.
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self::new(center, Vec2::splat(radius * 2.0))
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Strict overlap: boxes that merely touch edges do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// ── Playfield ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Per-axis containment: `(horizontal_ok, vertical_ok)`.
    pub fn check_bound(&self, rect: &Rect) -> (bool, bool) {
        let horizontal = rect.left() >= 0.0 && rect.right() <= self.width;
        let vertical = rect.top() >= 0.0 && rect.bottom() <= self.height;
        (horizontal, vertical)
    }

    pub fn contains(&self, rect: &Rect) -> bool {
        self.check_bound(rect) == (true, true)
    }
}

/// Unit vector pointing from `from` toward `to`.
///
/// Coincident points have no direction; straight down is returned so a
/// projectile dropped on top of its target still falls.
pub fn orientation(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).try_normalize().unwrap_or(Vec2::Y)
}

// ── Facing ────────────────────────────────────────────────────────────────────

/// One of the eight octant directions the avatar can face.
/// Screen coordinates: +y points down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Facing {
    pub const ALL: [Facing; 8] = [
        Facing::Right,
        Facing::UpRight,
        Facing::Up,
        Facing::UpLeft,
        Facing::Left,
        Facing::DownLeft,
        Facing::Down,
        Facing::DownRight,
    ];

    /// Map a summed key vector (components in -1..=1) to a facing.
    /// Returns `None` for the zero vector.
    pub fn from_step(dx: i32, dy: i32) -> Option<Facing> {
        match (dx.signum(), dy.signum()) {
            (1, 0) => Some(Facing::Right),
            (1, -1) => Some(Facing::UpRight),
            (0, -1) => Some(Facing::Up),
            (-1, -1) => Some(Facing::UpLeft),
            (-1, 0) => Some(Facing::Left),
            (-1, 1) => Some(Facing::DownLeft),
            (0, 1) => Some(Facing::Down),
            (1, 1) => Some(Facing::DownRight),
            _ => None,
        }
    }

    /// Raw octant step, e.g. `(1, -1)` for up-right.
    pub fn step(self) -> (i32, i32) {
        match self {
            Facing::Right => (1, 0),
            Facing::UpRight => (1, -1),
            Facing::Up => (0, -1),
            Facing::UpLeft => (-1, -1),
            Facing::Left => (-1, 0),
            Facing::DownLeft => (-1, 1),
            Facing::Down => (0, 1),
            Facing::DownRight => (1, 1),
        }
    }

    /// Normalized direction vector.
    pub fn unit(self) -> Vec2 {
        let (dx, dy) = self.step();
        Vec2::new(dx as f32, dy as f32).normalize()
    }
}
