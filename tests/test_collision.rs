use glam::Vec2;
use musou_kokaton::assets::Rgb;
use musou_kokaton::collision::*;
use musou_kokaton::compute::init_state;
use musou_kokaton::config::GameConfig;
use musou_kokaton::entities::*;
use musou_kokaton::geometry::Facing;

use rand::rngs::StdRng;
use rand::SeedableRng;

// Avatar starts at (900, 400); its box spans 855..945 × 355..445.
fn make_state() -> GameState {
    init_state(&GameConfig::default())
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(3)
}

fn beam_at(x: f32, y: f32) -> Beam {
    Beam::new(Vec2::new(x, y), Vec2::X, Facing::Right)
}

fn bomb_at(x: f32, y: f32) -> Bomb {
    Bomb::new(Vec2::new(x, y), Vec2::Y, 20.0, Rgb(255, 0, 0))
}

fn enemy_at(x: f32, y: f32) -> Enemy {
    Enemy::new(Vec2::new(x, y), 100.0, 100, 0)
}

fn add_boss(state: &mut GameState, pos: Vec2) -> EntityId {
    let id = state.allocate_id();
    state.bosses.push(Boss::new(id, pos, Vec2::ZERO, 400, 20));
    id
}

// ── Beams ─────────────────────────────────────────────────────────────────────

#[test]
fn beam_destroys_enemy() {
    let mut s = make_state();
    s.enemies.push(enemy_at(200.0, 200.0));
    s.beams.push(beam_at(200.0, 200.0));

    let report = resolve(&mut s);
    assert_eq!(report.enemies_destroyed, 1);
    assert!(s.enemies.is_empty());
    assert!(s.beams.is_empty());
    assert_eq!(s.score, ENEMY_SCORE);
    assert_eq!(s.explosions.len(), 1);
    assert_eq!(s.explosions[0].size, ExplosionSize::Small);
    assert_eq!(s.explosions[0].life, ENEMY_EXPLOSION_LIFE);
    assert_eq!(s.avatar.mood, Mood::Joy);
}

#[test]
fn beam_shoots_down_bomb() {
    let mut s = make_state();
    s.bombs.push(bomb_at(200.0, 600.0));
    s.beams.push(beam_at(200.0, 600.0));

    let report = resolve(&mut s);
    assert_eq!(report.bombs_shot_down, 1);
    assert!(s.bombs.is_empty());
    assert!(s.beams.is_empty());
    assert_eq!(s.score, BOMB_SCORE);
    assert_eq!(s.explosions[0].life, BOMB_EXPLOSION_LIFE);
}

#[test]
fn beam_is_spent_on_one_enemy() {
    let mut s = make_state();
    s.enemies.push(enemy_at(200.0, 200.0));
    s.enemies.push(enemy_at(230.0, 200.0));
    s.beams.push(beam_at(215.0, 200.0));

    let report = resolve(&mut s);
    assert_eq!(report.enemies_destroyed, 1);
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.enemies[0].pos.x, 230.0);
    assert_eq!(s.score, ENEMY_SCORE);
}

#[test]
fn missed_beam_keeps_flying() {
    let mut s = make_state();
    s.enemies.push(enemy_at(200.0, 200.0));
    s.beams.push(beam_at(600.0, 200.0));

    let report = resolve(&mut s);
    assert_eq!(report, CollisionReport::default());
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.beams.len(), 1);
}

// ── Boss ──────────────────────────────────────────────────────────────────────

#[test]
fn boss_takes_one_hit_per_tick() {
    let mut s = make_state();
    add_boss(&mut s, Vec2::new(300.0, 300.0));
    s.beams.push(beam_at(300.0, 300.0));
    s.beams.push(beam_at(310.0, 290.0));

    let report = resolve(&mut s);
    assert_eq!(report.bosses_hit, 1);
    assert_eq!(s.bosses[0].life, BOSS_MAX_LIFE - BOSS_HIT_DAMAGE);
    assert!(s.bosses[0].hit);
    assert!(s.beams.is_empty());
    assert_eq!(s.avatar.mood, Mood::Joy);
    assert_eq!(s.score, 0);
}

#[test]
fn defeated_boss_leaves_with_its_domain() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    let id = add_boss(&mut s, Vec2::new(300.0, 300.0));
    s.bosses[0].life = BOSS_HIT_DAMAGE;
    s.domains.push(Domain::new(
        DomainOwner::Boss(id),
        Vec2::new(300.0, 300.0),
        BOSS_DOMAIN_RADIUS,
        DOMAIN_EXPANSION_TICKS,
        &mut rng,
    ));
    s.avatar.buff_active = true;
    s.domains.push(Domain::new(
        DomainOwner::Avatar,
        s.avatar.pos,
        AVATAR_DOMAIN_RADIUS,
        BUFF_TICKS,
        &mut rng,
    ));
    s.beams.push(beam_at(300.0, 300.0));

    resolve(&mut s);
    assert_eq!(s.bosses.len(), 1, "death is settled separately");
    assert_eq!(resolve_defeated_bosses(&mut s), 1);

    assert!(s.bosses.is_empty());
    assert_eq!(s.score, BOSS_SCORE);
    let last = s.explosions.last().expect("boss explosion");
    assert_eq!(last.size, ExplosionSize::Large);
    assert_eq!(last.life, BOSS_EXPLOSION_LIFE);
    assert_eq!(s.domains.len(), 1);
    assert_eq!(s.domains[0].owner, DomainOwner::Avatar);
}

#[test]
fn living_boss_is_not_resolved() {
    let mut s = make_state();
    add_boss(&mut s, Vec2::new(300.0, 300.0));
    assert_eq!(resolve_defeated_bosses(&mut s), 0);
    assert_eq!(s.bosses.len(), 1);
    assert_eq!(s.score, 0);
}

// ── Domains ───────────────────────────────────────────────────────────────────

#[test]
fn hostile_domain_hurts_each_tick() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    let id = add_boss(&mut s, Vec2::new(1300.0, 400.0));
    s.domains.push(Domain::new(
        DomainOwner::Boss(id),
        s.avatar.pos,
        BOSS_DOMAIN_RADIUS,
        DOMAIN_EXPANSION_TICKS,
        &mut rng,
    ));

    let report = resolve(&mut s);
    assert_eq!(report.domain_hits, 1);
    assert_eq!(report.avatar_damage(), DOMAIN_DAMAGE);
    assert_eq!(s.avatar.life, AVATAR_MAX_LIFE - DOMAIN_DAMAGE);
    assert_eq!(s.avatar.mood, Mood::Distress);

    resolve(&mut s);
    assert_eq!(s.avatar.life, AVATAR_MAX_LIFE - 2 * DOMAIN_DAMAGE);
}

#[test]
fn overlapping_domains_stack() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    for _ in 0..2 {
        let id = add_boss(&mut s, Vec2::new(1300.0, 400.0));
        s.domains.push(Domain::new(
            DomainOwner::Boss(id),
            s.avatar.pos,
            BOSS_DOMAIN_RADIUS,
            DOMAIN_EXPANSION_TICKS,
            &mut rng,
        ));
    }

    let report = resolve(&mut s);
    assert_eq!(report.domain_hits, 2);
    assert_eq!(s.avatar.life, AVATAR_MAX_LIFE - 2 * DOMAIN_DAMAGE);
}

#[test]
fn buff_shields_from_hostile_domains() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.avatar.buff_active = true;
    let id = add_boss(&mut s, Vec2::new(1300.0, 400.0));
    s.domains.push(Domain::new(
        DomainOwner::Boss(id),
        s.avatar.pos,
        BOSS_DOMAIN_RADIUS,
        DOMAIN_EXPANSION_TICKS,
        &mut rng,
    ));

    let report = resolve(&mut s);
    assert_eq!(report.domain_hits, 0);
    assert_eq!(s.avatar.life, AVATAR_MAX_LIFE);
}

#[test]
fn own_domain_is_harmless() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.domains.push(Domain::new(
        DomainOwner::Avatar,
        s.avatar.pos,
        AVATAR_DOMAIN_RADIUS,
        BUFF_TICKS,
        &mut rng,
    ));

    resolve(&mut s);
    assert_eq!(s.avatar.life, AVATAR_MAX_LIFE);
    assert_eq!(s.avatar.mood, Mood::Normal);
}

// ── Bombs on the avatar ───────────────────────────────────────────────────────

#[test]
fn bombs_landing_together_hurt_once() {
    let mut s = make_state();
    s.bombs.push(bomb_at(900.0, 400.0));
    s.bombs.push(bomb_at(880.0, 420.0));
    s.bombs.push(bomb_at(200.0, 800.0));

    let report = resolve(&mut s);
    assert_eq!(report.bombs_landed, 2);
    assert_eq!(report.avatar_damage(), BOMB_DAMAGE);
    assert_eq!(s.avatar.life, AVATAR_MAX_LIFE - BOMB_DAMAGE);
    assert_eq!(s.bombs.len(), 1);
    assert_eq!(s.avatar.mood, Mood::Distress);
}

#[test]
fn bomb_shot_down_over_avatar_does_no_harm() {
    let mut s = make_state();
    s.bombs.push(bomb_at(900.0, 400.0));
    s.beams.push(beam_at(900.0, 400.0));

    let report = resolve(&mut s);
    assert_eq!(report.bombs_shot_down, 1);
    assert_eq!(report.bombs_landed, 0);
    assert_eq!(s.avatar.life, AVATAR_MAX_LIFE);
    assert_eq!(s.score, BOMB_SCORE);
}

#[test]
fn unrelated_collisions_all_resolve() {
    let mut s = make_state();
    s.enemies.push(enemy_at(200.0, 200.0));
    s.beams.push(beam_at(200.0, 200.0));
    s.bombs.push(bomb_at(600.0, 700.0));
    s.beams.push(beam_at(600.0, 700.0));
    s.bombs.push(bomb_at(900.0, 400.0));

    let report = resolve(&mut s);
    assert_eq!(report.enemies_destroyed, 1);
    assert_eq!(report.bombs_shot_down, 1);
    assert_eq!(report.bombs_landed, 1);
    assert_eq!(s.score, ENEMY_SCORE + BOMB_SCORE);
    assert_eq!(s.avatar.life, AVATAR_MAX_LIFE - BOMB_DAMAGE);
    assert!(s.beams.is_empty());
    assert!(s.bombs.is_empty());
    assert_eq!(s.explosions.len(), 2);
}
