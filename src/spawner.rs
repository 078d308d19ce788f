//! Spawn policy for enemies and the boss.
//!
//! The enemy spawn rate lives in an explicit [`Spawner`] owned by the game
//! state, so two sessions never share it.

use std::time::Duration;

use rand::Rng;

use crate::entities::{Boss, Enemy, GameState};

pub const INITIAL_SPAWN_THRESHOLD: u64 = 200;
/// Added to the threshold after every enemy spawn.
pub const SPAWN_THRESHOLD_STEP: u64 = 50;
/// Real time that must pass before a boss can show up.
pub const BOSS_TIME_GATE: Duration = Duration::from_secs(30);
pub const BOSS_MIN_ENEMIES: usize = 5;
/// Boss bombs fall this many times faster than the triggering enemy's.
pub const BOSS_BOMB_SPEEDUP: u64 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spawner {
    /// An enemy appears on ticks that are a multiple of this.
    pub threshold: u64,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            threshold: INITIAL_SPAWN_THRESHOLD,
        }
    }

    pub fn enemy_due(&self, frame: u64) -> bool {
        frame % self.threshold == 0
    }

    /// Record a spawn; the rate only ever slows down.
    pub fn advance(&mut self) {
        self.threshold += SPAWN_THRESHOLD_STEP;
    }
}

/// Spawn one enemy when the threshold divides the frame count and no boss is
/// around. Returns whether an enemy was added.
pub fn spawn_enemy(state: &mut GameState, rng: &mut impl Rng) -> bool {
    if !state.bosses.is_empty() || !state.spawner.enemy_due(state.frame) {
        return false;
    }
    let enemy = Enemy::spawn(&state.playfield, rng);
    log::debug!(
        "enemy spawned at x={:.0}, stops at y={:.0}",
        enemy.pos.x,
        enemy.stop_y
    );
    state.enemies.push(enemy);
    state.spawner.advance();
    true
}

/// Spawn the boss once enough time has passed and enough enemies have
/// gathered. Returns whether a boss was added.
pub fn spawn_boss(state: &mut GameState, elapsed: Duration, rng: &mut impl Rng) -> bool {
    if elapsed <= BOSS_TIME_GATE
        || state.enemies.len() < BOSS_MIN_ENEMIES
        || !state.bosses.is_empty()
    {
        return false;
    }
    // The newest enemy is the one whose arrival tipped the count over.
    let cadence = state
        .enemies
        .last()
        .map(|e| e.bomb_interval / BOSS_BOMB_SPEEDUP)
        .unwrap_or(1)
        .max(1);
    let id = state.allocate_id();
    let boss = Boss::spawn(id, &state.playfield, cadence, rng);
    log::info!(
        "boss {:?} arrived at ({:.0}, {:.0}) with {} enemies on the field",
        id,
        boss.pos.x,
        boss.pos.y,
        state.enemies.len()
    );
    state.bosses.push(boss);
    true
}
