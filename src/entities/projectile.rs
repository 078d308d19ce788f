use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::assets::Rgb;
use crate::geometry::{orientation, Facing, Playfield, Rect};

pub const BOMB_SPEED: f32 = 6.0;
pub const BOMB_MIN_RADIUS: u32 = 10;
pub const BOMB_MAX_RADIUS: u32 = 50;
pub const BOMB_COLORS: [Rgb; 6] = [
    Rgb(255, 0, 0),
    Rgb(0, 255, 0),
    Rgb(0, 0, 255),
    Rgb(255, 255, 0),
    Rgb(255, 0, 255),
    Rgb(0, 255, 255),
];

pub const BEAM_SPEED: f32 = 10.0;
pub const BEAM_SIZE: Vec2 = Vec2::new(40.0, 40.0);

/// Hostile projectile. Aimed once, at spawn; never re-aimed in flight.
#[derive(Clone, Debug)]
pub struct Bomb {
    pub pos: Vec2,
    pub dir: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub color: Rgb,
}

impl Bomb {
    pub fn new(pos: Vec2, dir: Vec2, radius: f32, color: Rgb) -> Self {
        Self {
            pos,
            dir,
            speed: BOMB_SPEED,
            radius,
            color,
        }
    }

    /// Drop a bomb from the bottom edge of `origin`, aimed at `target`.
    /// Size and color are random.
    pub fn aimed(origin: &Rect, target: Vec2, rng: &mut impl Rng) -> Self {
        let radius = rng.gen_range(BOMB_MIN_RADIUS..=BOMB_MAX_RADIUS) as f32;
        let color = *BOMB_COLORS.choose(rng).unwrap_or(&BOMB_COLORS[0]);
        let dir = orientation(origin.center, target);
        let pos = Vec2::new(origin.center.x, origin.center.y + origin.size.y / 2.0);
        Self::new(pos, dir, radius, color)
    }

    pub fn rect(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }

    /// Move one step. Returns `false` once the bomb has left the playfield.
    pub fn advance(&mut self, playfield: &Playfield) -> bool {
        self.pos += self.dir * self.speed;
        playfield.contains(&self.rect())
    }
}

/// Avatar projectile, travelling along one of the eight facings.
#[derive(Clone, Debug)]
pub struct Beam {
    pub pos: Vec2,
    pub dir: Vec2,
    pub facing: Facing,
    pub speed: f32,
}

impl Beam {
    pub fn new(pos: Vec2, dir: Vec2, facing: Facing) -> Self {
        Self {
            pos,
            dir,
            facing,
            speed: BEAM_SPEED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, BEAM_SIZE)
    }

    /// Move one step. Returns `false` once the beam has left the playfield.
    pub fn advance(&mut self, playfield: &Playfield) -> bool {
        self.pos += self.dir * self.speed;
        playfield.contains(&self.rect())
    }
}
