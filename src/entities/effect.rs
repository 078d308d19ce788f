use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::assets::Rgb;
use crate::geometry::Rect;

use super::EntityId;

pub const AVATAR_DOMAIN_RADIUS: f32 = 100.0;
pub const BOSS_DOMAIN_RADIUS: f32 = 250.0;
/// Domain opacity out of 255.
pub const DOMAIN_ALPHA: u8 = 170;
pub const DOMAIN_COLORS: [Rgb; 6] = [
    Rgb(139, 0, 0),
    Rgb(189, 183, 107),
    Rgb(147, 112, 219),
    Rgb(40, 40, 40),
    Rgb(50, 205, 50),
    Rgb(0, 0, 139),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplosionSize {
    Small,
    Large,
}

/// Cosmetic burst. The position is a snapshot of whatever blew up.
#[derive(Clone, Debug)]
pub struct Explosion {
    pub pos: Vec2,
    pub size: ExplosionSize,
    pub life: i32,
}

impl Explosion {
    pub fn new(pos: Vec2, size: ExplosionSize, life: i32) -> Self {
        Self { pos, size, life }
    }

    /// Count down one tick. Returns `false` once burnt out.
    pub fn tick(&mut self) -> bool {
        self.life -= 1;
        self.life >= 0
    }

    /// Which of the two alternating frames to show.
    pub fn frame(&self) -> u8 {
        self.life.div_euclid(10).rem_euclid(2) as u8
    }
}

/// Who raised a domain. Held as a handle, never as a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainOwner {
    Avatar,
    Boss(EntityId),
}

/// Circular area that follows its owner around.
#[derive(Clone, Debug)]
pub struct Domain {
    pub owner: DomainOwner,
    pub pos: Vec2,
    pub radius: f32,
    pub life: i32,
    pub color: Rgb,
}

impl Domain {
    pub fn new(owner: DomainOwner, center: Vec2, radius: f32, life: i32, rng: &mut impl Rng) -> Self {
        let color = *DOMAIN_COLORS.choose(rng).unwrap_or(&DOMAIN_COLORS[0]);
        Self {
            owner,
            pos: center,
            radius,
            life,
            color,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }

    /// Re-center on the owner and count down. `owner_pos` is `None` when the
    /// owner no longer exists. Returns `false` when the domain should go.
    pub fn follow(&mut self, owner_pos: Option<Vec2>) -> bool {
        let Some(pos) = owner_pos else {
            return false;
        };
        self.pos = pos;
        self.life -= 1;
        self.life >= 0
    }

    pub fn is_hostile(&self) -> bool {
        matches!(self.owner, DomainOwner::Boss(_))
    }
}
