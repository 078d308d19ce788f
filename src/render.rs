//! Scene projection.
//!
//! Turns a `GameState` into an ordered list of draw calls. The binary paints
//! them; nothing here touches the terminal, so the projection is testable on
//! its own.

use glam::Vec2;

use crate::assets::{AssetId, Rgb};
use crate::entities::{ExplosionSize, GameState, GameStatus, HealthBar, DOMAIN_ALPHA};

pub const OPAQUE: u8 = 255;

/// Which unit a health bar belongs to; decides where the HUD puts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarOwner {
    Avatar,
    Boss,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Sprite {
        id: AssetId,
        center: Vec2,
        alpha: u8,
    },
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgb,
        alpha: u8,
    },
    Score(u32),
    HealthBar {
        owner: BarOwner,
        bar: HealthBar,
    },
    /// Ticks of buff remaining.
    BuffTimer(i32),
    GameOver {
        score: u32,
    },
}

/// Everything to paint this frame, back to front.
pub fn scene(state: &GameState) -> Vec<DrawCall> {
    let mut calls = Vec::new();

    for domain in &state.domains {
        calls.push(DrawCall::Disc {
            center: domain.pos,
            radius: domain.radius,
            color: domain.color,
            alpha: DOMAIN_ALPHA,
        });
    }

    let avatar = &state.avatar;
    let id = AssetId::Avatar {
        skin: avatar.current_skin(),
        facing: avatar.facing,
    };
    calls.push(sprite(id, avatar.pos));

    for beam in &state.beams {
        calls.push(sprite(AssetId::Beam(beam.facing), beam.pos));
    }
    for enemy in &state.enemies {
        calls.push(sprite(AssetId::Enemy(enemy.variant), enemy.pos));
    }
    for boss in &state.bosses {
        let id = if boss.hit { AssetId::BossHit } else { AssetId::Boss };
        calls.push(DrawCall::Sprite {
            id,
            center: boss.pos,
            alpha: boss.alpha,
        });
    }
    for bomb in &state.bombs {
        calls.push(DrawCall::Disc {
            center: bomb.pos,
            radius: bomb.radius,
            color: bomb.color,
            alpha: OPAQUE,
        });
    }
    for explosion in &state.explosions {
        let id = AssetId::Explosion {
            large: explosion.size == ExplosionSize::Large,
            frame: explosion.frame(),
        };
        calls.push(sprite(id, explosion.pos));
    }

    // ── HUD ──────────────────────────────────────────────────────────────────
    calls.push(DrawCall::Score(state.score));
    calls.push(DrawCall::HealthBar {
        owner: BarOwner::Avatar,
        bar: HealthBar::of(avatar.life, avatar.max_life),
    });
    if let Some(boss) = state.bosses.first() {
        calls.push(DrawCall::HealthBar {
            owner: BarOwner::Boss,
            bar: HealthBar::of(boss.life, boss.max_life),
        });
    }
    if avatar.buff_active {
        calls.push(DrawCall::BuffTimer(avatar.buff_ticks));
    }
    if state.status == GameStatus::GameOver {
        calls.push(DrawCall::GameOver { score: state.score });
    }

    calls
}

fn sprite(id: AssetId, center: Vec2) -> DrawCall {
    DrawCall::Sprite {
        id,
        center,
        alpha: OPAQUE,
    }
}
