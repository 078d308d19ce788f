use glam::Vec2;
use rand::Rng;

use crate::assets::ENEMY_VARIANTS;
use crate::geometry::{Playfield, Rect};

use super::projectile::Bomb;

pub const ENEMY_SIZE: Vec2 = Vec2::new(70.0, 70.0);
pub const ENEMY_DESCENT_SPEED: f32 = 6.0;
/// Highest point (smallest y) an enemy may stop at.
pub const ENEMY_MIN_STOP_Y: u32 = 50;
pub const ENEMY_MIN_BOMB_INTERVAL: u64 = 50;
pub const ENEMY_MAX_BOMB_INTERVAL: u64 = 300;
/// Fraction of the remaining offset covered per tick while assembling.
pub const ASSEMBLE_RATE: f32 = 0.02;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyState {
    Descending,
    Stopped,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub pos: Vec2,
    pub vy: f32,
    /// Once `pos.y` passes this the enemy parks for good.
    pub stop_y: f32,
    pub state: EnemyState,
    /// Ticks between bombs once stopped.
    pub bomb_interval: u64,
    /// Which of the alien sprites to draw.
    pub variant: u8,
}

impl Enemy {
    pub fn new(pos: Vec2, stop_y: f32, bomb_interval: u64, variant: u8) -> Self {
        Self {
            pos,
            vy: ENEMY_DESCENT_SPEED,
            stop_y,
            state: EnemyState::Descending,
            bomb_interval: bomb_interval.max(1),
            variant,
        }
    }

    /// A fresh enemy at a random column on the top edge.
    pub fn spawn(playfield: &Playfield, rng: &mut impl Rng) -> Self {
        let x = rng.gen_range(0.0..=playfield.width);
        let lowest_stop = ((playfield.height / 2.0) as u32).max(ENEMY_MIN_STOP_Y);
        let stop_y = rng.gen_range(ENEMY_MIN_STOP_Y..=lowest_stop) as f32;
        let interval = rng.gen_range(ENEMY_MIN_BOMB_INTERVAL..=ENEMY_MAX_BOMB_INTERVAL);
        let variant = rng.gen_range(0..ENEMY_VARIANTS);
        Self::new(Vec2::new(x, 0.0), stop_y, interval, variant)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, ENEMY_SIZE)
    }

    /// One tick of vertical motion. The switch to `Stopped` happens on the
    /// tick after the threshold is crossed and is never undone.
    pub fn descend(&mut self) {
        if self.pos.y > self.stop_y {
            self.vy = 0.0;
            self.state = EnemyState::Stopped;
        }
        self.pos.y += self.vy;
    }

    pub fn is_stopped(&self) -> bool {
        self.state == EnemyState::Stopped
    }

    pub fn should_drop_bomb(&self, frame: u64) -> bool {
        self.is_stopped() && frame % self.bomb_interval == 0
    }

    pub fn drop_bomb(&self, target: Vec2, rng: &mut impl Rng) -> Bomb {
        Bomb::aimed(&self.rect(), target, rng)
    }

    /// Pull toward `target` by a fixed share of the remaining offset.
    /// Returns `true` once the enemy has been absorbed.
    pub fn assemble(&mut self, target: Vec2) -> bool {
        self.pos += (target - self.pos) * ASSEMBLE_RATE;
        let offset = (target - self.pos).abs();
        offset.x < 1.0 && offset.y < 1.0
    }
}
