//! All game entity types and the master game state.
//!
//! Each entity owns its position and lifecycle counters. Collections in
//! [`GameState`] own the entities; the only cross-entity reference is the
//! [`DomainOwner`] handle, which is checked for liveness every tick.

mod avatar;
mod boss;
mod effect;
mod enemy;
mod hud;
mod projectile;

pub use avatar::*;
pub use boss::*;
pub use effect::*;
pub use enemy::*;
pub use hud::*;
pub use projectile::*;

use glam::Vec2;

use crate::geometry::Playfield;
use crate::spawner::Spawner;

/// Stable handle for entities that others may refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so `compute::tick` can hand back a new
/// copy without touching the caller's.
#[derive(Clone, Debug)]
pub struct GameState {
    pub avatar: Avatar,
    pub enemies: Vec<Enemy>,
    pub bosses: Vec<Boss>,
    /// Enemy and boss projectiles.
    pub bombs: Vec<Bomb>,
    /// Avatar projectiles.
    pub beams: Vec<Beam>,
    pub explosions: Vec<Explosion>,
    pub domains: Vec<Domain>,
    pub spawner: Spawner,
    pub score: u32,
    pub status: GameStatus,
    /// Ticks simulated so far.
    pub frame: u64,
    pub playfield: Playfield,
    next_id: u64,
}

impl GameState {
    pub fn new(avatar: Avatar, playfield: Playfield) -> Self {
        Self {
            avatar,
            enemies: Vec::new(),
            bosses: Vec::new(),
            bombs: Vec::new(),
            beams: Vec::new(),
            explosions: Vec::new(),
            domains: Vec::new(),
            spawner: Spawner::new(),
            score: 0,
            status: GameStatus::Playing,
            frame: 0,
            playfield,
            next_id: 0,
        }
    }

    /// Hand out a fresh, never reused id.
    pub fn allocate_id(&mut self) -> EntityId {
        self.next_id += 1;
        EntityId(self.next_id)
    }

    pub fn boss(&self, id: EntityId) -> Option<&Boss> {
        self.bosses.iter().find(|b| b.id == id)
    }

    /// Current center of a domain's owner, or `None` once it is gone.
    pub fn owner_position(&self, owner: DomainOwner) -> Option<Vec2> {
        match owner {
            DomainOwner::Avatar => Some(self.avatar.pos),
            DomainOwner::Boss(id) => self.boss(id).map(|b| b.pos),
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
