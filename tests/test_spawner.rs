use std::time::Duration;

use glam::Vec2;
use musou_kokaton::compute::init_state;
use musou_kokaton::config::GameConfig;
use musou_kokaton::entities::*;
use musou_kokaton::spawner::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> GameState {
    init_state(&GameConfig::default())
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(11)
}

fn with_enemies(intervals: &[u64]) -> GameState {
    let mut s = make_state();
    for (i, &interval) in intervals.iter().enumerate() {
        s.enemies
            .push(Enemy::new(Vec2::new(100.0 * i as f32, 0.0), 200.0, interval, 0));
    }
    s
}

const PAST_GATE: Duration = Duration::from_secs(31);

// ── Enemies ───────────────────────────────────────────────────────────────────

#[test]
fn enemy_spawns_on_frame_zero() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    assert!(spawn_enemy(&mut s, &mut rng));
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.spawner.threshold, INITIAL_SPAWN_THRESHOLD + SPAWN_THRESHOLD_STEP);
}

#[test]
fn enemy_waits_for_threshold() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    s.frame = 199;
    assert!(!spawn_enemy(&mut s, &mut rng));
    s.frame = 200;
    assert!(spawn_enemy(&mut s, &mut rng));
    assert_eq!(s.spawner.threshold, 250);
}

#[test]
fn threshold_only_grows() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    let mut last = s.spawner.threshold;
    for frame in 0..20_000 {
        s.frame = frame;
        spawn_enemy(&mut s, &mut rng);
        assert!(s.spawner.threshold >= last);
        last = s.spawner.threshold;
    }
    assert!(s.enemies.len() > 1);
    assert_eq!(
        s.spawner.threshold,
        INITIAL_SPAWN_THRESHOLD + SPAWN_THRESHOLD_STEP * s.enemies.len() as u64
    );
}

#[test]
fn no_enemies_while_boss_is_out() {
    let mut rng = seeded_rng();
    let mut s = make_state();
    let id = s.allocate_id();
    s.bosses
        .push(Boss::new(id, Vec2::new(800.0, 450.0), Vec2::ZERO, 300, 20));
    assert!(!spawn_enemy(&mut s, &mut rng));
    assert!(s.enemies.is_empty());
    assert_eq!(s.spawner.threshold, INITIAL_SPAWN_THRESHOLD);
}

#[test]
fn spawner_is_per_session() {
    let mut rng = seeded_rng();
    let mut first = make_state();
    spawn_enemy(&mut first, &mut rng);
    let second = make_state();
    assert_eq!(second.spawner, Spawner::new());
}

// ── Boss ──────────────────────────────────────────────────────────────────────

#[test]
fn boss_needs_more_than_thirty_seconds() {
    let mut rng = seeded_rng();
    let mut s = with_enemies(&[100; 5]);
    assert!(!spawn_boss(&mut s, BOSS_TIME_GATE, &mut rng));
    assert!(s.bosses.is_empty());
    assert!(spawn_boss(&mut s, PAST_GATE, &mut rng));
    assert_eq!(s.bosses.len(), 1);
}

#[test]
fn boss_needs_five_enemies() {
    let mut rng = seeded_rng();
    let mut s = with_enemies(&[100; 4]);
    assert!(!spawn_boss(&mut s, PAST_GATE, &mut rng));
    assert!(s.bosses.is_empty());
}

#[test]
fn only_one_boss_at_a_time() {
    let mut rng = seeded_rng();
    let mut s = with_enemies(&[100; 6]);
    assert!(spawn_boss(&mut s, PAST_GATE, &mut rng));
    assert!(!spawn_boss(&mut s, PAST_GATE, &mut rng));
    assert_eq!(s.bosses.len(), 1);
}

#[test]
fn boss_bombs_faster_than_newest_enemy() {
    let mut rng = seeded_rng();
    let mut s = with_enemies(&[300, 300, 300, 300, 120]);
    assert!(spawn_boss(&mut s, PAST_GATE, &mut rng));
    assert_eq!(s.bosses[0].bomb_cadence, 120 / BOSS_BOMB_SPEEDUP);
}

#[test]
fn boss_cadence_never_zero() {
    let mut rng = seeded_rng();
    let mut s = with_enemies(&[100, 100, 100, 100, 3]);
    assert!(spawn_boss(&mut s, PAST_GATE, &mut rng));
    assert_eq!(s.bosses[0].bomb_cadence, 1);
}

#[test]
fn boss_arrives_faded_in_middle_third() {
    let mut rng = seeded_rng();
    let mut s = with_enemies(&[100; 5]);
    spawn_boss(&mut s, PAST_GATE, &mut rng);
    let boss = &s.bosses[0];
    assert!(boss.is_booting());
    assert_eq!(boss.life, BOSS_MAX_LIFE);
    assert!(boss.pos.x >= 1600.0 / 3.0 && boss.pos.x <= 1600.0 * 2.0 / 3.0);
    assert!(boss.pos.y >= 900.0 / 3.0 && boss.pos.y <= 900.0 * 2.0 / 3.0);
}
