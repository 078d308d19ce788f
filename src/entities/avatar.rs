use glam::Vec2;

use crate::assets::{DISTRESS_SKIN, JOY_SKIN};
use crate::geometry::{Facing, Playfield, Rect};
use crate::input::Directions;

use super::projectile::Beam;

pub const AVATAR_SIZE: Vec2 = Vec2::new(90.0, 90.0);
pub const AVATAR_SPEED: f32 = 10.0;
pub const AVATAR_MAX_LIFE: i32 = 100;
/// Score spent to raise the avatar's own domain.
pub const BUFF_COST: u32 = 50;
pub const BUFF_TICKS: i32 = 400;

/// Face shown on the avatar sprite. Sticks until the avatar next moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Normal,
    Joy,
    Distress,
}

#[derive(Clone, Debug)]
pub struct Avatar {
    pub pos: Vec2,
    pub facing: Facing,
    pub speed: f32,
    pub life: i32,
    pub max_life: i32,
    pub buff_active: bool,
    pub buff_ticks: i32,
    pub mood: Mood,
    pub skin: u8,
}

impl Avatar {
    pub fn new(skin: u8, pos: Vec2) -> Self {
        Self {
            pos,
            facing: Facing::Right,
            speed: AVATAR_SPEED,
            life: AVATAR_MAX_LIFE,
            max_life: AVATAR_MAX_LIFE,
            buff_active: false,
            buff_ticks: 0,
            mood: Mood::Normal,
            skin,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, AVATAR_SIZE)
    }

    /// Apply one frame of held movement keys.
    ///
    /// A move that would push the avatar off the playfield is reverted as a
    /// whole. Facing follows the held keys whenever they do not cancel out.
    pub fn move_with(&mut self, held: &Directions, playfield: &Playfield) {
        let (dx, dy) = held.step();
        let before = self.pos;
        self.pos += Vec2::new(dx as f32, dy as f32) * self.speed;
        if !playfield.contains(&self.rect()) {
            self.pos = before;
        }
        if let Some(facing) = Facing::from_step(dx, dy) {
            self.facing = facing;
            self.mood = Mood::Normal;
        }
    }

    /// Launch a beam one body length ahead, along the current facing.
    pub fn fire(&self) -> Beam {
        let dir = self.facing.unit();
        Beam::new(self.pos + AVATAR_SIZE * dir, dir, self.facing)
    }

    /// Life bottoms out at zero; the frame loop decides when the game ends.
    pub fn take_damage(&mut self, amount: i32) {
        self.life = (self.life - amount).max(0);
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0
    }

    /// Spend score to start the buff. Returns `false` (and changes nothing)
    /// when the buff is already running or the score is too low.
    pub fn activate_buff(&mut self, score: &mut u32) -> bool {
        if self.buff_active || *score < BUFF_COST {
            return false;
        }
        *score -= BUFF_COST;
        self.buff_active = true;
        self.buff_ticks = BUFF_TICKS;
        true
    }

    pub fn tick_buff(&mut self) {
        self.buff_ticks -= 1;
        if self.buff_ticks < 0 {
            self.buff_active = false;
        }
    }

    pub fn celebrate(&mut self) {
        self.mood = Mood::Joy;
    }

    pub fn distress(&mut self) {
        self.mood = Mood::Distress;
    }

    /// Sprite sheet to draw with, given the current mood.
    pub fn current_skin(&self) -> u8 {
        match self.mood {
            Mood::Normal => self.skin,
            Mood::Joy => JOY_SKIN,
            Mood::Distress => DISTRESS_SKIN,
        }
    }
}
