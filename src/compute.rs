//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`. Side effects are limited to the injected RNG and logging.

use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use crate::collision;
use crate::config::GameConfig;
use crate::entities::{
    Avatar, BossMode, Domain, DomainOwner, GameState, GameStatus, AVATAR_DOMAIN_RADIUS,
    BOSS_DOMAIN_RADIUS,
};
use crate::input::{Directions, FrameInput};
use crate::spawner;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for a session.
pub fn init_state(config: &GameConfig) -> GameState {
    let avatar = Avatar::new(config.skin, config.avatar_start);
    GameState::new(avatar, config.playfield)
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_avatar(state: &GameState, held: &Directions) -> GameState {
    let mut next = state.clone();
    if !next.is_over() {
        next.avatar.move_with(held, &state.playfield);
    }
    next
}

/// Fire one beam along the avatar's facing.
pub fn fire_beam(state: &GameState) -> GameState {
    let mut next = state.clone();
    if !next.is_over() {
        let beam = next.avatar.fire();
        next.beams.push(beam);
    }
    next
}

/// Trade score for the avatar's buff and its protective domain. A no-op if
/// the buff is already running or the score is short.
pub fn activate_buff(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    if !next.is_over() {
        raise_avatar_domain(&mut next, rng);
    }
    next
}

fn raise_avatar_domain(state: &mut GameState, rng: &mut impl Rng) -> bool {
    if !state.avatar.activate_buff(&mut state.score) {
        return false;
    }
    let domain = Domain::new(
        DomainOwner::Avatar,
        state.avatar.pos,
        AVATAR_DOMAIN_RADIUS,
        state.avatar.buff_ticks,
        rng,
    );
    state.domains.push(domain);
    log::debug!("buff activated, score now {}", state.score);
    true
}

// ── Per-frame tick (RNG is injected) ─────────────────────────────────────────

/// Advance the simulation by one frame. `elapsed` is real time since the
/// session started. All randomness comes through `rng`.
///
/// A finished game is returned unchanged.
pub fn tick(
    state: &GameState,
    input: &FrameInput,
    elapsed: Duration,
    rng: &mut impl Rng,
) -> GameState {
    let mut next = state.clone();
    if next.is_over() {
        return next;
    }

    // ── 1. Input ─────────────────────────────────────────────────────────────
    for _ in 0..input.shots {
        let beam = next.avatar.fire();
        next.beams.push(beam);
    }
    if input.activate_buff {
        raise_avatar_domain(&mut next, rng);
    }
    next.avatar.move_with(&input.held, &state.playfield);
    next.avatar.tick_buff();

    // ── 2. Spawning ──────────────────────────────────────────────────────────
    spawner::spawn_enemy(&mut next, rng);
    spawner::spawn_boss(&mut next, elapsed, rng);

    // ── 3. Behaviour ─────────────────────────────────────────────────────────
    update_enemies(&mut next, rng);
    update_bosses(&mut next, rng);
    advance_projectiles(&mut next);
    update_effects(&mut next);

    // ── 4. Collisions ────────────────────────────────────────────────────────
    let report = collision::resolve(&mut next);
    if report != collision::CollisionReport::default() {
        log::debug!(
            "frame {}: {:?}, avatar lost {}",
            next.frame,
            report,
            report.avatar_damage()
        );
    }
    collision::resolve_defeated_bosses(&mut next);

    // ── 5. Game over ─────────────────────────────────────────────────────────
    if next.avatar.is_dead() {
        next.status = GameStatus::GameOver;
        log::info!(
            "game over at frame {} with score {}",
            next.frame,
            next.score
        );
    }

    next.frame += 1;
    next
}

/// Stopped enemies bomb the avatar; every enemy is drawn into a booting boss
/// and absorbed once it arrives; the rest keep descending.
fn update_enemies(state: &mut GameState, rng: &mut impl Rng) {
    let frame = state.frame;
    let target = state.avatar.pos;
    let rally_points: Vec<Vec2> = state
        .bosses
        .iter()
        .filter(|b| b.is_booting())
        .map(|b| b.pos)
        .collect();

    let mut bombs = Vec::new();
    state.enemies.retain_mut(|enemy| {
        if enemy.should_drop_bomb(frame) {
            bombs.push(enemy.drop_bomb(target, rng));
        }
        for &rally in &rally_points {
            if enemy.assemble(rally) {
                return false;
            }
        }
        enemy.descend();
        true
    });
    state.bombs.extend(bombs);
}

/// Each boss runs its own mode cycle, bombs the avatar while in `Normal`
/// mode, wanders, and fades in.
fn update_bosses(state: &mut GameState, rng: &mut impl Rng) {
    let frame = state.frame;
    let target = state.avatar.pos;
    let playfield = state.playfield;

    let mut domains = Vec::new();
    let mut bombs = Vec::new();
    for boss in &mut state.bosses {
        if boss.choose_mode(rng) == Some(BossMode::ExpandDomain) {
            log::debug!("boss {:?} expands its domain", boss.id);
            domains.push(Domain::new(
                DomainOwner::Boss(boss.id),
                boss.pos,
                BOSS_DOMAIN_RADIUS,
                boss.mode_ticks,
                rng,
            ));
        }
        if boss.should_drop_bomb(frame) {
            bombs.push(boss.drop_bomb(target, rng));
        }
        boss.wander(frame, &playfield, rng);
        boss.tick_mode();
        boss.fade_in();
    }
    state.domains.extend(domains);
    state.bombs.extend(bombs);
}

fn advance_projectiles(state: &mut GameState) {
    let playfield = state.playfield;
    state.beams.retain_mut(|b| b.advance(&playfield));
    state.bombs.retain_mut(|b| b.advance(&playfield));
}

/// Explosions burn down; domains follow their owners and vanish with them.
fn update_effects(state: &mut GameState) {
    state.explosions.retain_mut(|e| e.tick());

    let owners: Vec<Option<Vec2>> = state
        .domains
        .iter()
        .map(|d| state.owner_position(d.owner))
        .collect();
    let mut owners = owners.into_iter();
    state
        .domains
        .retain_mut(|d| d.follow(owners.next().flatten()));
}
