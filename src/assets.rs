//! Sprite atlas.
//!
//! The simulation refers to images only by [`AssetId`]. The built-in atlas
//! maps every id to terminal glyph art. Asking for an id the atlas does not
//! know is a configuration error and is never retried.

use std::collections::HashMap;

use anyhow::{anyhow, Result};

use crate::geometry::Facing;

/// 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Avatar skins shipped with the game.
pub const SKIN_COUNT: u8 = 10;
/// Skin shown while the avatar celebrates a hit.
pub const JOY_SKIN: u8 = 6;
/// Skin shown while the avatar takes damage.
pub const DISTRESS_SKIN: u8 = 8;
pub const ENEMY_VARIANTS: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetId {
    Avatar { skin: u8, facing: Facing },
    Enemy(u8),
    Boss,
    BossHit,
    Beam(Facing),
    Explosion { large: bool, frame: u8 },
}

/// Glyph art for one asset; every row has the same display width.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub rows: Vec<String>,
    pub color: Rgb,
}

impl Sprite {
    fn new(rows: &[&str], color: Rgb) -> Self {
        Self {
            rows: rows.iter().map(|r| r.to_string()).collect(),
            color,
        }
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Horizontal mirror, swapping the glyphs that have a direction.
    pub fn mirrored(&self) -> Sprite {
        let rows = self
            .rows
            .iter()
            .map(|row| row.chars().rev().map(mirror_char).collect())
            .collect();
        Sprite {
            rows,
            color: self.color,
        }
    }
}

fn mirror_char(c: char) -> char {
    match c {
        '<' => '>',
        '>' => '<',
        '(' => ')',
        ')' => '(',
        '/' => '\\',
        '\\' => '/',
        '[' => ']',
        ']' => '[',
        '«' => '»',
        '»' => '«',
        other => other,
    }
}

pub struct Atlas {
    sprites: HashMap<AssetId, Sprite>,
}

impl Atlas {
    /// An atlas with nothing in it; useful for tests of the failure path.
    pub fn empty() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }

    /// The glyph art that ships with the game.
    pub fn builtin() -> Self {
        let mut atlas = Self::empty();

        // Kokaton faces, one eye glyph per skin.
        const EYES: [char; SKIN_COUNT as usize] = ['o', 'O', '0', '@', '*', '°', '^', '-', 'x', '.'];
        for (skin, &eye) in EYES.iter().enumerate() {
            for facing in Facing::ALL {
                atlas.insert(
                    AssetId::Avatar {
                        skin: skin as u8,
                        facing,
                    },
                    avatar_sprite(eye, facing),
                );
            }
        }

        atlas.insert(AssetId::Enemy(0), Sprite::new(&["«▼»", "╚═╝"], Rgb(50, 205, 50)));
        atlas.insert(AssetId::Enemy(1), Sprite::new(&["(◎)", "╰─╯"], Rgb(255, 60, 60)));
        atlas.insert(AssetId::Enemy(2), Sprite::new(&["[▼]", "/ \\"], Rgb(200, 90, 255)));

        let boss = ["╔═▓▓═╗", "║ ◣◢ ║", "╚╦══╦╝"];
        atlas.insert(AssetId::Boss, Sprite::new(&boss, Rgb(147, 112, 219)));
        atlas.insert(AssetId::BossHit, Sprite::new(&boss, Rgb(255, 255, 255)));

        for facing in Facing::ALL {
            let glyph = match facing {
                Facing::Right | Facing::Left => "═",
                Facing::Up | Facing::Down => "║",
                Facing::UpRight | Facing::DownLeft => "╱",
                Facing::UpLeft | Facing::DownRight => "╲",
            };
            atlas.insert(AssetId::Beam(facing), Sprite::new(&[glyph], Rgb(0, 255, 255)));
        }

        let fire = Rgb(255, 140, 0);
        atlas.insert(
            AssetId::Explosion { large: false, frame: 0 },
            Sprite::new(&["\\|/", "-*-", "/|\\"], fire),
        );
        atlas.insert(
            AssetId::Explosion { large: false, frame: 1 },
            Sprite::new(&["* *", " # ", "* *"], fire),
        );
        atlas.insert(
            AssetId::Explosion { large: true, frame: 0 },
            Sprite::new(&["\\  |  /", " \\ | / ", "--***--", " / | \\ ", "/  |  \\"], fire),
        );
        atlas.insert(
            AssetId::Explosion { large: true, frame: 1 },
            Sprite::new(&["*  *  *", "  ###  ", "* ### *", "  ###  ", "*  *  *"], fire),
        );

        atlas
    }

    pub fn insert(&mut self, id: AssetId, sprite: Sprite) {
        self.sprites.insert(id, sprite);
    }

    pub fn get(&self, id: AssetId) -> Result<&Sprite> {
        self.sprites
            .get(&id)
            .ok_or_else(|| anyhow!("unresolvable asset id {id:?}"))
    }

    /// Resolve every asset a session with the given avatar skin can draw.
    /// Called once at startup so a bad skin fails before the first frame.
    pub fn preload(&self, skin: u8) -> Result<()> {
        for id in required_assets(skin) {
            self.get(id)?;
        }
        log::debug!("preloaded assets for skin {skin}");
        Ok(())
    }
}

/// Kokaton art drawn toward `facing`. Leftward poses mirror the rightward ones.
fn avatar_sprite(eye: char, facing: Facing) -> Sprite {
    let rows: [String; 2] = match facing {
        Facing::Right => [format!(" ({eye}>"), "<_/ ".to_string()],
        Facing::UpRight => [format!(" ({eye}/"), "<_/ ".to_string()],
        Facing::DownRight => [format!(" ({eye}\\"), "<_/ ".to_string()],
        Facing::Up => [" ^^ ".to_string(), format!("({eye}{eye})")],
        Facing::Down => [format!("({eye}{eye})"), " vv ".to_string()],
        Facing::Left => return avatar_sprite(eye, Facing::Right).mirrored(),
        Facing::UpLeft => return avatar_sprite(eye, Facing::UpRight).mirrored(),
        Facing::DownLeft => return avatar_sprite(eye, Facing::DownRight).mirrored(),
    };
    Sprite {
        rows: rows.to_vec(),
        color: Rgb(255, 210, 0),
    }
}

fn required_assets(skin: u8) -> Vec<AssetId> {
    let mut ids = Vec::new();
    for skin in [skin, JOY_SKIN, DISTRESS_SKIN] {
        ids.extend(
            Facing::ALL
                .into_iter()
                .map(|facing| AssetId::Avatar { skin, facing }),
        );
    }
    ids.extend([AssetId::Boss, AssetId::BossHit]);
    ids.extend((0..ENEMY_VARIANTS).map(AssetId::Enemy));
    ids.extend(Facing::ALL.into_iter().map(AssetId::Beam));
    for large in [false, true] {
        for frame in 0..2 {
            ids.push(AssetId::Explosion { large, frame });
        }
    }
    ids
}
