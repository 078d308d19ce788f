//! Collision resolution, run once per tick in a fixed order.
//!
//! Beam collisions come first so a beam that shoots down a bomb has also
//! removed that bomb before bombs are tested against the avatar. Every pass
//! marks hits against a snapshot of the collections and removes the marked
//! entities afterwards; an entity consumed by one pass is gone for the next.

use crate::entities::{DomainOwner, Explosion, ExplosionSize, GameState};
use crate::geometry::Rect;

pub const ENEMY_SCORE: u32 = 10;
pub const BOMB_SCORE: u32 = 1;
pub const BOSS_SCORE: u32 = 100;

pub const ENEMY_EXPLOSION_LIFE: i32 = 100;
pub const BOMB_EXPLOSION_LIFE: i32 = 50;
pub const BOSS_EXPLOSION_LIFE: i32 = 150;

/// Life lost per tick inside a hostile domain.
pub const DOMAIN_DAMAGE: i32 = 1;
/// Life lost per tick in which any bomb lands.
pub const BOMB_DAMAGE: i32 = 10;

/// What happened during one resolution pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub enemies_destroyed: usize,
    pub bombs_shot_down: usize,
    pub bosses_hit: usize,
    /// Hostile domains the avatar was standing in.
    pub domain_hits: usize,
    /// Bombs that reached the avatar.
    pub bombs_landed: usize,
}

impl CollisionReport {
    pub fn avatar_damage(&self) -> i32 {
        let bombs = if self.bombs_landed > 0 { BOMB_DAMAGE } else { 0 };
        self.domain_hits as i32 * DOMAIN_DAMAGE + bombs
    }
}

pub fn resolve(state: &mut GameState) -> CollisionReport {
    let mut report = CollisionReport::default();
    enemies_vs_beams(state, &mut report);
    bombs_vs_beams(state, &mut report);
    bosses_vs_beams(state, &mut report);
    domains_vs_avatar(state, &mut report);
    bombs_vs_avatar(state, &mut report);
    report
}

// ── Beam passes ───────────────────────────────────────────────────────────────

/// Pair every target with the beams touching it. A beam is spent on the
/// first target it touches, in collection order.
///
/// Returns `(targets_hit, beams_spent)` flags, parallel to the inputs.
fn match_beams(targets: &[Rect], beams: &[Rect]) -> (Vec<bool>, Vec<bool>) {
    let mut hit = vec![false; targets.len()];
    let mut spent = vec![false; beams.len()];
    for (ti, target) in targets.iter().enumerate() {
        for (bi, beam) in beams.iter().enumerate() {
            if !spent[bi] && target.overlaps(beam) {
                spent[bi] = true;
                hit[ti] = true;
            }
        }
    }
    (hit, spent)
}

fn retain_unmarked<T>(items: &mut Vec<T>, marked: &[bool]) {
    let mut flags = marked.iter();
    items.retain(|_| !flags.next().copied().unwrap_or(false));
}

fn beam_rects(state: &GameState) -> Vec<Rect> {
    state.beams.iter().map(|b| b.rect()).collect()
}

fn enemies_vs_beams(state: &mut GameState, report: &mut CollisionReport) {
    let targets: Vec<Rect> = state.enemies.iter().map(|e| e.rect()).collect();
    let (hit, spent) = match_beams(&targets, &beam_rects(state));

    for (enemy, _) in state.enemies.iter().zip(&hit).filter(|&(_, &h)| h) {
        state.explosions.push(Explosion::new(
            enemy.pos,
            ExplosionSize::Small,
            ENEMY_EXPLOSION_LIFE,
        ));
        state.score += ENEMY_SCORE;
        state.avatar.celebrate();
        report.enemies_destroyed += 1;
    }

    retain_unmarked(&mut state.enemies, &hit);
    retain_unmarked(&mut state.beams, &spent);
}

fn bombs_vs_beams(state: &mut GameState, report: &mut CollisionReport) {
    let targets: Vec<Rect> = state.bombs.iter().map(|b| b.rect()).collect();
    let (hit, spent) = match_beams(&targets, &beam_rects(state));

    for (bomb, _) in state.bombs.iter().zip(&hit).filter(|&(_, &h)| h) {
        state.explosions.push(Explosion::new(
            bomb.pos,
            ExplosionSize::Small,
            BOMB_EXPLOSION_LIFE,
        ));
        state.score += BOMB_SCORE;
        report.bombs_shot_down += 1;
    }

    retain_unmarked(&mut state.bombs, &hit);
    retain_unmarked(&mut state.beams, &spent);
}

/// Bosses soak up beams. Damage is applied once per boss per tick no matter
/// how many beams connect; death is settled by [`resolve_defeated_bosses`].
fn bosses_vs_beams(state: &mut GameState, report: &mut CollisionReport) {
    let targets: Vec<Rect> = state.bosses.iter().map(|b| b.rect()).collect();
    let (hit, spent) = match_beams(&targets, &beam_rects(state));

    for (boss, _) in state.bosses.iter_mut().zip(&hit).filter(|&(_, &h)| h) {
        boss.take_hit();
        state.avatar.celebrate();
        report.bosses_hit += 1;
    }

    retain_unmarked(&mut state.beams, &spent);
}

// ── Avatar passes ─────────────────────────────────────────────────────────────

fn domains_vs_avatar(state: &mut GameState, report: &mut CollisionReport) {
    if state.avatar.buff_active {
        return;
    }
    let avatar = state.avatar.rect();
    let touching = state
        .domains
        .iter()
        .filter(|d| d.is_hostile() && d.rect().overlaps(&avatar))
        .count();
    for _ in 0..touching {
        state.avatar.take_damage(DOMAIN_DAMAGE);
        state.avatar.distress();
    }
    report.domain_hits += touching;
}

fn bombs_vs_avatar(state: &mut GameState, report: &mut CollisionReport) {
    let avatar = state.avatar.rect();
    let before = state.bombs.len();
    state.bombs.retain(|b| !b.rect().overlaps(&avatar));
    let landed = before - state.bombs.len();
    if landed > 0 {
        state.avatar.distress();
        state.avatar.take_damage(BOMB_DAMAGE);
    }
    report.bombs_landed += landed;
}

// ── Boss deaths ───────────────────────────────────────────────────────────────

/// Remove every boss whose life is used up, after all of this tick's damage
/// is in. Each one leaves a large explosion, pays out, and takes its domains
/// with it. Returns how many bosses fell.
pub fn resolve_defeated_bosses(state: &mut GameState) -> usize {
    let fallen: Vec<_> = state
        .bosses
        .iter()
        .filter(|b| b.is_defeated())
        .map(|b| (b.id, b.pos))
        .collect();

    for &(id, pos) in &fallen {
        state.explosions.push(Explosion::new(
            pos,
            ExplosionSize::Large,
            BOSS_EXPLOSION_LIFE,
        ));
        state.score += BOSS_SCORE;
        log::info!("boss {id:?} defeated, score now {}", state.score);
    }

    state.bosses.retain(|b| !b.is_defeated());
    state.domains.retain(|d| match d.owner {
        DomainOwner::Boss(id) => fallen.iter().all(|&(gone, _)| gone != id),
        DomainOwner::Avatar => true,
    });
    fallen.len()
}
