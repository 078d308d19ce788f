use glam::Vec2;
use musou_kokaton::assets::{AssetId, Atlas, Rgb, DISTRESS_SKIN, JOY_SKIN};
use musou_kokaton::compute::init_state;
use musou_kokaton::config::GameConfig;
use musou_kokaton::entities::*;
use musou_kokaton::geometry::Facing;
use musou_kokaton::render::*;

fn make_state() -> GameState {
    init_state(&GameConfig::default())
}

fn sprite_ids(calls: &[DrawCall]) -> Vec<AssetId> {
    calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Sprite { id, .. } => Some(*id),
            _ => None,
        })
        .collect()
}

fn position(calls: &[DrawCall], pred: impl Fn(&DrawCall) -> bool) -> usize {
    calls.iter().position(pred).expect("draw call present")
}

#[test]
fn fresh_state_draws_avatar_and_hud() {
    let calls = scene(&make_state());
    assert_eq!(
        calls[0],
        DrawCall::Sprite {
            id: AssetId::Avatar {
                skin: 3,
                facing: Facing::Right,
            },
            center: Vec2::new(900.0, 400.0),
            alpha: OPAQUE,
        }
    );
    assert_eq!(calls[1], DrawCall::Score(0));
    assert!(matches!(
        calls[2],
        DrawCall::HealthBar {
            owner: BarOwner::Avatar,
            ..
        }
    ));
    assert_eq!(calls.len(), 3);
}

#[test]
fn domains_go_under_everything_and_hud_on_top() {
    let mut s = make_state();
    s.domains.push(Domain {
        owner: DomainOwner::Avatar,
        pos: s.avatar.pos,
        radius: AVATAR_DOMAIN_RADIUS,
        life: 10,
        color: Rgb(0, 0, 255),
    });
    s.enemies
        .push(Enemy::new(Vec2::new(200.0, 200.0), 100.0, 100, 1));
    s.bombs
        .push(Bomb::new(Vec2::new(300.0, 300.0), Vec2::Y, 15.0, Rgb(255, 0, 0)));
    s.explosions
        .push(Explosion::new(Vec2::new(400.0, 400.0), ExplosionSize::Small, 15));

    let calls = scene(&s);
    assert!(matches!(
        calls[0],
        DrawCall::Disc {
            alpha: DOMAIN_ALPHA,
            ..
        }
    ));
    let avatar = position(&calls, |c| {
        matches!(c, DrawCall::Sprite { id: AssetId::Avatar { .. }, .. })
    });
    let enemy = position(&calls, |c| {
        matches!(c, DrawCall::Sprite { id: AssetId::Enemy(1), .. })
    });
    let bomb = position(&calls, |c| {
        matches!(c, DrawCall::Disc { alpha: OPAQUE, .. })
    });
    let explosion = position(&calls, |c| {
        matches!(
            c,
            DrawCall::Sprite {
                id: AssetId::Explosion {
                    large: false,
                    frame: 1
                },
                ..
            }
        )
    });
    let score = position(&calls, |c| matches!(c, DrawCall::Score(_)));
    assert!(avatar < enemy);
    assert!(enemy < bomb);
    assert!(bomb < explosion);
    assert!(explosion < score);
}

#[test]
fn boss_draws_with_its_fade_and_hit_flash() {
    let mut s = make_state();
    let id = s.allocate_id();
    let mut boss = Boss::new(id, Vec2::new(800.0, 450.0), Vec2::ZERO, 300, 20);
    boss.alpha = 120;
    boss.life = 400;
    s.bosses.push(boss);

    let calls = scene(&s);
    assert!(calls.contains(&DrawCall::Sprite {
        id: AssetId::Boss,
        center: Vec2::new(800.0, 450.0),
        alpha: 120,
    }));
    assert!(calls.contains(&DrawCall::HealthBar {
        owner: BarOwner::Boss,
        bar: HealthBar::of(400, BOSS_MAX_LIFE),
    }));

    s.bosses[0].hit = true;
    assert!(sprite_ids(&scene(&s)).contains(&AssetId::BossHit));
}

#[test]
fn avatar_sprite_follows_every_facing() {
    let atlas = Atlas::builtin();
    let mut s = make_state();
    let mut ids = Vec::new();
    let mut art = Vec::new();
    for facing in Facing::ALL {
        s.avatar.facing = facing;
        let id = sprite_ids(&scene(&s))[0];
        assert_eq!(id, AssetId::Avatar { skin: 3, facing });
        ids.push(id);
        art.push(atlas.get(id).expect("builtin avatar pose").rows.clone());
    }
    for i in 0..ids.len() {
        for j in i + 1..ids.len() {
            assert_ne!(ids[i], ids[j]);
            assert_ne!(art[i], art[j], "{:?} and {:?} look alike", ids[i], ids[j]);
        }
    }
}

#[test]
fn mood_changes_avatar_sprite() {
    let mut s = make_state();
    s.avatar.celebrate();
    assert_eq!(
        sprite_ids(&scene(&s))[0],
        AssetId::Avatar {
            skin: JOY_SKIN,
            facing: Facing::Right
        }
    );
    s.avatar.distress();
    assert_eq!(
        sprite_ids(&scene(&s))[0],
        AssetId::Avatar {
            skin: DISTRESS_SKIN,
            facing: Facing::Right
        }
    );
}

#[test]
fn beams_draw_by_facing() {
    let mut s = make_state();
    s.beams
        .push(Beam::new(Vec2::new(500.0, 500.0), Vec2::NEG_Y, Facing::Up));
    assert!(sprite_ids(&scene(&s)).contains(&AssetId::Beam(Facing::Up)));
}

#[test]
fn buff_timer_only_while_active() {
    let mut s = make_state();
    assert!(!scene(&s).iter().any(|c| matches!(c, DrawCall::BuffTimer(_))));
    s.avatar.buff_active = true;
    s.avatar.buff_ticks = 123;
    assert!(scene(&s).contains(&DrawCall::BuffTimer(123)));
}

#[test]
fn game_over_is_drawn_last() {
    let mut s = make_state();
    s.score = 42;
    s.status = GameStatus::GameOver;
    let calls = scene(&s);
    assert_eq!(calls.last(), Some(&DrawCall::GameOver { score: 42 }));
}
