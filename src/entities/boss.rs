use glam::Vec2;
use rand::Rng;

use crate::geometry::{Playfield, Rect};

use super::projectile::Bomb;
use super::EntityId;

pub const BOSS_SIZE: Vec2 = Vec2::new(240.0, 240.0);
pub const BOSS_MAX_LIFE: i32 = 1000;
/// Life lost per tick in which a beam connects.
pub const BOSS_HIT_DAMAGE: i32 = 50;
/// Opacity at which the boss is fully booted.
pub const BOSS_FULL_ALPHA: u8 = 250;
pub const BOSS_MAX_SPEED: i32 = 6;
pub const BOSS_MIN_MOVE_INTERVAL: u64 = 200;
pub const BOSS_MAX_MOVE_INTERVAL: u64 = 400;
pub const DOMAIN_EXPANSION_TICKS: i32 = 400;
pub const NORMAL_MODE_TICKS: i32 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossMode {
    /// Raises a large domain that hurts the avatar.
    ExpandDomain,
    /// Rains bombs on the avatar.
    Normal,
}

impl BossMode {
    pub fn duration(self) -> i32 {
        match self {
            BossMode::ExpandDomain => DOMAIN_EXPANSION_TICKS,
            BossMode::Normal => NORMAL_MODE_TICKS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Boss {
    pub id: EntityId,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks between velocity changes; redrawn on every change.
    pub move_interval: u64,
    pub life: i32,
    pub max_life: i32,
    /// Fade-in opacity, 0 to `BOSS_FULL_ALPHA`.
    pub alpha: u8,
    pub mode: Option<BossMode>,
    pub mode_ticks: i32,
    /// Ticks between bombs while in `Normal` mode.
    pub bomb_cadence: u64,
    /// Draw the hit sprite until the next velocity change.
    pub hit: bool,
}

impl Boss {
    pub fn new(id: EntityId, pos: Vec2, vel: Vec2, move_interval: u64, bomb_cadence: u64) -> Self {
        Self {
            id,
            pos,
            vel,
            move_interval: move_interval.max(1),
            life: BOSS_MAX_LIFE,
            max_life: BOSS_MAX_LIFE,
            alpha: 0,
            mode: None,
            mode_ticks: 0,
            bomb_cadence: bomb_cadence.max(1),
            hit: false,
        }
    }

    /// Appear somewhere in the middle third of the playfield.
    pub fn spawn(id: EntityId, playfield: &Playfield, bomb_cadence: u64, rng: &mut impl Rng) -> Self {
        let x = rng.gen_range(playfield.width / 3.0..=playfield.width * 2.0 / 3.0);
        let y = rng.gen_range(playfield.height / 3.0..=playfield.height * 2.0 / 3.0);
        let vel = random_velocity(rng);
        let interval = rng.gen_range(BOSS_MIN_MOVE_INTERVAL..=BOSS_MAX_MOVE_INTERVAL);
        Self::new(id, Vec2::new(x, y), vel, interval, bomb_cadence)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, BOSS_SIZE)
    }

    /// Still fading in. Enemies are drawn into a booting boss.
    pub fn is_booting(&self) -> bool {
        self.alpha < BOSS_FULL_ALPHA
    }

    pub fn fade_in(&mut self) {
        if self.is_booting() {
            self.alpha += 1;
        }
    }

    /// Start a new mode if none is running. Returns the mode just chosen.
    pub fn choose_mode(&mut self, rng: &mut impl Rng) -> Option<BossMode> {
        if self.mode.is_some() {
            return None;
        }
        let mode = if rng.gen_bool(0.5) {
            BossMode::ExpandDomain
        } else {
            BossMode::Normal
        };
        self.mode = Some(mode);
        self.mode_ticks = mode.duration();
        Some(mode)
    }

    pub fn tick_mode(&mut self) {
        self.mode_ticks -= 1;
        if self.mode_ticks < 0 {
            self.mode = None;
        }
    }

    pub fn should_drop_bomb(&self, frame: u64) -> bool {
        self.mode == Some(BossMode::Normal) && frame % self.bomb_cadence == 0
    }

    pub fn drop_bomb(&self, target: Vec2, rng: &mut impl Rng) -> Bomb {
        Bomb::aimed(&self.rect(), target, rng)
    }

    /// Random-walk step. Every `move_interval` ticks the boss halts and picks
    /// a new heading; otherwise it drifts. A step that would leave the
    /// playfield is undone.
    pub fn wander(&mut self, frame: u64, playfield: &Playfield, rng: &mut impl Rng) {
        if frame % self.move_interval == 0 {
            self.vel = random_velocity(rng);
            self.move_interval = rng.gen_range(BOSS_MIN_MOVE_INTERVAL..=BOSS_MAX_MOVE_INTERVAL);
            self.hit = false;
            return;
        }
        let before = self.pos;
        self.pos += self.vel;
        if !playfield.contains(&self.rect()) {
            self.pos = before;
        }
    }

    pub fn take_hit(&mut self) {
        self.life -= BOSS_HIT_DAMAGE;
        self.hit = true;
    }

    pub fn is_defeated(&self) -> bool {
        self.life <= 0
    }
}

fn random_velocity(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen_range(-BOSS_MAX_SPEED..=BOSS_MAX_SPEED) as f32,
        rng.gen_range(-BOSS_MAX_SPEED..=BOSS_MAX_SPEED) as f32,
    )
}
