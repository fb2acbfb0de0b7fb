//! Tunable game constants.
//!
//! Every knob has a default equal to the arcade values, so an empty (or
//! absent) TOML file yields the stock game. Sprite sizes and per-kind speeds
//! are fixed constants; only the pacing and odds are configurable.

use std::path::Path;

use serde::Deserialize;

use crate::entities::SpawnMode;
use crate::geometry::Rect;

// ── Playfield ────────────────────────────────────────────────────────────────

pub const PLAYFIELD: Rect = Rect::new(0, 0, 640, 480);

// ── Default tuning ───────────────────────────────────────────────────────────

/// Most player projectiles on screen at once.
pub const MAX_SHOTS: usize = 2;
/// Chance (1 in N) a new enemy appears once the reload gate is open.
pub const ALIEN_ODDS: u32 = 22;
/// Chance (1 in N) per frame that the most recent bomber drops a bomb.
pub const BOMB_ODDS: u32 = 60;
/// Frames between new enemies.
pub const ALIEN_RELOAD: u32 = 12;
pub const FRAME_RATE: u32 = 40;
/// A bomb whose bottom edge reaches this row detonates.
pub const BOMB_FLOOR: i32 = 470;
/// Horizontal period (pixels) of the player's cosmetic bob.
pub const PLAYER_BOUNCE: i32 = 24;
pub const FADE_MS: u64 = 1000;

// ── Per-kind geometry and speeds ─────────────────────────────────────────────

pub const PLAYER_SIZE: (i32, i32) = (60, 34);
pub const PLAYER_SPEED: i32 = 10;
pub const PLAYER_GUN_OFFSET: i32 = -11;

pub const ENEMY_SIZE: (i32, i32) = (80, 40);
pub const ENEMY_SPEED: i32 = 4;
pub const ENEMY_ANIM_CYCLE: u32 = 12;
pub const ENEMY_FRAMES: u32 = 3;

pub const HAZARD_RECT: Rect = Rect::new(10, 10, 100, 100);
pub const HAZARD_SPEED: i32 = 4;

pub const AIRCRAFT_RECT: Rect = Rect::new(10, 10, 90, 70);
pub const AIRCRAFT_SPEED: i32 = 4;

pub const SHOT_SIZE: (i32, i32) = (6, 18);
pub const SHOT_SPEED: i32 = -11;

pub const BOMB_SIZE: (i32, i32) = (10, 20);
pub const BOMB_SPEED: i32 = 9;
/// Bombs are released this far below the bomber's bottom edge.
pub const BOMB_DROP_OFFSET: i32 = 5;

pub const EXPLOSION_SIZE: (i32, i32) = (64, 64);
pub const EXPLOSION_LIFE: i32 = 12;
pub const EXPLOSION_ANIM_CYCLE: i32 = 3;
pub const EXPLOSION_FRAMES: i32 = 2;

pub const BACKGROUND_SPEED: i32 = 3;

// ── Loaded configuration ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_shots: usize,
    pub alien_odds: u32,
    pub bomb_odds: u32,
    pub alien_reload: u32,
    pub frame_rate: u32,
    pub bomb_floor: i32,
    pub player_bounce: i32,
    /// Fade-out applied to the audio when a round ends.
    pub fade_ms: u64,
    /// Spawn mode used when the round starts from "Resume".
    pub default_mode: SpawnMode,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_shots: MAX_SHOTS,
            alien_odds: ALIEN_ODDS,
            bomb_odds: BOMB_ODDS,
            alien_reload: ALIEN_RELOAD,
            frame_rate: FRAME_RATE,
            bomb_floor: BOMB_FLOOR,
            player_bounce: PLAYER_BOUNCE,
            fade_ms: FADE_MS,
            default_mode: SpawnMode::Enemy,
            seed: None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

impl GameConfig {
    /// Read a TOML file. Missing keys fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alien_odds == 0 {
            return Err(ConfigError::Invalid { field: "alien_odds", reason: "must be at least 1" });
        }
        if self.bomb_odds == 0 {
            return Err(ConfigError::Invalid { field: "bomb_odds", reason: "must be at least 1" });
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid { field: "frame_rate", reason: "must be at least 1" });
        }
        if self.max_shots == 0 {
            return Err(ConfigError::Invalid { field: "max_shots", reason: "must be at least 1" });
        }
        if self.player_bounce <= 0 {
            return Err(ConfigError::Invalid { field: "player_bounce", reason: "must be positive" });
        }
        Ok(())
    }
}
