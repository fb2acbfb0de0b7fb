//! Probabilistic spawning of descenders and bombs.
//!
//! All randomness comes through the `rng` argument so callers control
//! determinism (tests pass a seeded or scripted generator).

use log::debug;
use rand::Rng;

use crate::entities::{Entity, SpawnMode};
use crate::registry::{EntityId, Registry, Slot};

/// One Bernoulli trial with success probability `1 / odds`, drawn from a
/// uniform `[0, 1)` sample.
pub fn one_in(rng: &mut impl Rng, odds: u32) -> bool {
    let sample: f64 = rng.gen();
    (sample * f64::from(odds)) as u32 == 0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnTuning {
    pub alien_odds: u32,
    pub bomb_odds: u32,
    pub alien_reload: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub spawned: Option<EntityId>,
    pub bombs: Vec<EntityId>,
}

/// Slots whose occupant may drop bombs, in the order they are tried.
const BOMBERS: [Slot; 2] = [Slot::LastAircraft, Slot::LastEnemy];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnController {
    mode: SpawnMode,
    reload: u32,
    tuning: SpawnTuning,
}

impl SpawnController {
    /// A controller fixed to `mode` for the round, with the reload gate
    /// closed for `alien_reload` frames.
    pub fn new(mode: SpawnMode, tuning: SpawnTuning) -> Self {
        SpawnController { mode, reload: tuning.alien_reload, tuning }
    }

    pub fn mode(&self) -> SpawnMode {
        self.mode
    }

    /// Frames left before the next spawn trial.
    pub fn reload(&self) -> u32 {
        self.reload
    }

    /// Create one descender of the round's mode with a random heading.
    pub fn spawn_descender(&self, registry: &mut Registry, rng: &mut impl Rng) -> EntityId {
        let moving_right = rng.gen_bool(0.5);
        let id = registry.create(Entity::descender(self.mode, moving_right));
        debug!("spawned {:?} {id:?} heading {}", self.mode, if moving_right { "right" } else { "left" });
        id
    }

    /// Run this frame's enemy gate, then the bomb trials.
    pub fn step(&mut self, registry: &mut Registry, rng: &mut impl Rng) -> SpawnReport {
        let mut report = SpawnReport::default();

        if self.reload > 0 {
            self.reload -= 1;
        } else if one_in(rng, self.tuning.alien_odds) {
            report.spawned = Some(self.spawn_descender(registry, rng));
            self.reload = self.tuning.alien_reload;
        }

        for slot in BOMBERS {
            let Some(bomber) = registry.singleton(slot) else {
                continue;
            };
            if !one_in(rng, self.tuning.bomb_odds) {
                continue;
            }
            let Some(anchor) = registry.get(bomber).map(|e| e.rect) else {
                continue;
            };
            let bomb = registry.create(Entity::bomb(&anchor));
            debug!("{slot:?} {bomber:?} dropped bomb {bomb:?}");
            report.bombs.push(bomb);
        }
        report
    }
}
