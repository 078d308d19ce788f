//! Session configuration.
//!
//! Everything here is fixed for the lifetime of a run. The binary fills it
//! from command-line flags; tests build it directly.

use std::time::Duration;

use glam::Vec2;

use crate::geometry::Playfield;

pub const DEFAULT_WIDTH: f32 = 1600.0;
pub const DEFAULT_HEIGHT: f32 = 900.0;
pub const DEFAULT_FPS: u32 = 50;
pub const DEFAULT_SKIN: u8 = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub playfield: Playfield,
    /// Target simulation rate in ticks per second.
    pub fps: u32,
    /// Avatar sprite sheet id.
    pub skin: u8,
    pub avatar_start: Vec2,
    /// Fixed RNG seed; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield: Playfield::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            fps: DEFAULT_FPS,
            skin: DEFAULT_SKIN,
            avatar_start: Vec2::new(900.0, 400.0),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Wall-clock duration of one tick.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}
