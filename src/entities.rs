//! Game entity types: pure data, no per-frame logic.
//!
//! Constructors place each kind where it first appears on the playfield;
//! movement lives in `behavior`.

use serde::Deserialize;

use crate::config::{
    AIRCRAFT_RECT, AIRCRAFT_SPEED, BACKGROUND_SPEED, BOMB_DROP_OFFSET, BOMB_SIZE, BOMB_SPEED,
    ENEMY_SIZE, ENEMY_SPEED, EXPLOSION_LIFE, EXPLOSION_SIZE, HAZARD_RECT, HAZARD_SPEED, PLAYFIELD,
    PLAYER_SIZE, SHOT_SIZE, SHOT_SPEED,
};
use crate::geometry::Rect;

/// Which descending entity the Spawn Controller produces for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpawnMode {
    Aircraft,
    Hazard,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Velocity { dx, dy }
    }
}

/// Logical image handle. The renderer maps these to whatever it draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Image {
    Player { flipped: bool },
    Enemy(u8),
    Hazard,
    Aircraft,
    Shot,
    Bomb,
    Explosion(u8),
    Background,
}

impl Image {
    /// Draw order: lower layers are composited first.
    pub fn layer(&self) -> u8 {
        match self {
            Image::Background => 0,
            Image::Explosion(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    /// Last non-zero direction (−1 or +1).
    pub facing: i32,
    /// Fire was held on the previous frame; releasing it re-arms the gun.
    pub reloading: bool,
    /// Top edge before the cosmetic bob is applied.
    pub orig_top: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player(PlayerState),
    Enemy,
    Hazard,
    Aircraft,
    Shot,
    Bomb,
    Explosion { life: i32 },
    Background,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Player(_) => "player",
            EntityKind::Enemy => "enemy",
            EntityKind::Hazard => "hazard",
            EntityKind::Aircraft => "aircraft",
            EntityKind::Shot => "shot",
            EntityKind::Bomb => "bomb",
            EntityKind::Explosion { .. } => "explosion",
            EntityKind::Background => "background",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub kind: EntityKind,
    pub rect: Rect,
    pub velocity: Velocity,
    /// Cleared when the entity leaves the registry.
    pub alive: bool,
    /// Animation frame counter.
    pub frame: u32,
    pub image: Image,
}

// ── Constructors ─────────────────────────────────────────────────────────────

impl Entity {
    fn new(kind: EntityKind, rect: Rect, velocity: Velocity, image: Image) -> Self {
        Entity { kind, rect, velocity, alive: true, frame: 0, image }
    }

    /// The player's craft, parked at the bottom centre of the playfield.
    pub fn player() -> Self {
        let (w, h) = PLAYER_SIZE;
        let rect = Rect::from_midbottom(w, h, PLAYFIELD.midbottom());
        let state = PlayerState { facing: -1, reloading: false, orig_top: rect.top() };
        Entity::new(
            EntityKind::Player(state),
            rect,
            Velocity::default(),
            Image::Player { flipped: false },
        )
    }

    /// An enemy entering from the top-left (moving right) or top-right
    /// (moving left).
    pub fn enemy(moving_right: bool) -> Self {
        let (w, h) = ENEMY_SIZE;
        let rect = entry_rect(Rect::new(0, 0, w, h), moving_right);
        Entity::new(EntityKind::Enemy, rect, horizontal(ENEMY_SPEED, moving_right), Image::Enemy(0))
    }

    pub fn hazard(moving_right: bool) -> Self {
        let rect = entry_rect(HAZARD_RECT, moving_right);
        Entity::new(EntityKind::Hazard, rect, horizontal(HAZARD_SPEED, moving_right), Image::Hazard)
    }

    pub fn aircraft(moving_right: bool) -> Self {
        let rect = entry_rect(AIRCRAFT_RECT, moving_right);
        Entity::new(
            EntityKind::Aircraft,
            rect,
            horizontal(AIRCRAFT_SPEED, moving_right),
            Image::Aircraft,
        )
    }

    /// Construct the descending entity for `mode`.
    pub fn descender(mode: SpawnMode, moving_right: bool) -> Self {
        match mode {
            SpawnMode::Aircraft => Entity::aircraft(moving_right),
            SpawnMode::Hazard => Entity::hazard(moving_right),
            SpawnMode::Enemy => Entity::enemy(moving_right),
        }
    }

    /// A projectile whose bottom-centre sits on the gun muzzle.
    pub fn shot(muzzle: (i32, i32)) -> Self {
        let (w, h) = SHOT_SIZE;
        let rect = Rect::from_midbottom(w, h, muzzle);
        Entity::new(EntityKind::Shot, rect, Velocity::new(0, SHOT_SPEED), Image::Shot)
    }

    /// A bomb released just below `bomber`.
    pub fn bomb(bomber: &Rect) -> Self {
        Entity::bomb_at(bomber.moved(0, BOMB_DROP_OFFSET).midbottom())
    }

    /// A bomb whose bottom-centre sits on `midbottom`.
    pub fn bomb_at(midbottom: (i32, i32)) -> Self {
        let (w, h) = BOMB_SIZE;
        let rect = Rect::from_midbottom(w, h, midbottom);
        Entity::new(EntityKind::Bomb, rect, Velocity::new(0, BOMB_SPEED), Image::Bomb)
    }

    /// An explosion centred on whatever occupied `around`.
    pub fn explosion(around: &Rect) -> Self {
        let (w, h) = EXPLOSION_SIZE;
        let rect = Rect::from_center(w, h, around.center());
        Entity::new(
            EntityKind::Explosion { life: EXPLOSION_LIFE },
            rect,
            Velocity::default(),
            Image::Explosion(0),
        )
    }

    /// A backdrop twice the playfield height that scrolls downward.
    pub fn background() -> Self {
        let rect = Rect::new(0, 0, PLAYFIELD.w, PLAYFIELD.h * 2);
        Entity::new(
            EntityKind::Background,
            rect,
            Velocity::new(0, BACKGROUND_SPEED),
            Image::Background,
        )
    }
}

fn horizontal(speed: i32, moving_right: bool) -> Velocity {
    Velocity::new(if moving_right { speed } else { -speed }, 0)
}

fn entry_rect(mut rect: Rect, moving_right: bool) -> Rect {
    if !moving_right {
        rect.set_right(PLAYFIELD.right());
    }
    rect
}
