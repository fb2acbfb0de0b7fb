//! The simulation context and its per-frame step.
//!
//! A `World` owns everything that changes during a round: the registry, the
//! RNG, the score and frame counters, and the spawn controller. Nothing is
//! global, so a seeded RNG makes a whole round reproducible.

use log::{debug, info, trace};
use rand::Rng;

use crate::audio::AudioEvent;
use crate::behavior::{move_player, pull_trigger, Arena};
use crate::collision::{resolve_all, CollisionReport};
use crate::config::{GameConfig, PLAYFIELD};
use crate::entities::{Entity, SpawnMode};
use crate::input::FrameInput;
use crate::registry::{EntityId, Group, Registry};
use crate::render::{DirtyTracker, RenderFrame, ScoreBoard};
use crate::spawn::{SpawnController, SpawnReport, SpawnTuning};

/// Everything observable about one simulated frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub shot: Option<EntityId>,
    pub spawn: SpawnReport,
    pub collisions: CollisionReport,
    pub events: Vec<AudioEvent>,
    pub render: RenderFrame,
    pub score: u32,
    pub player_alive: bool,
}

pub struct World<R: Rng> {
    registry: Registry,
    rng: R,
    score: u32,
    frame: u64,
    player: EntityId,
    spawner: SpawnController,
    arena: Arena,
    config: GameConfig,
    dirty: DirtyTracker,
    score_board: ScoreBoard,
}

impl<R: Rng> World<R> {
    /// A fresh round: scrolling background plus the player. No descenders
    /// exist until the spawn controller (or `spawn_opening`) makes one.
    pub fn new(config: GameConfig, mode: SpawnMode, rng: R) -> Self {
        let mut registry = Registry::new();
        registry.create(Entity::background());
        let player = registry.create(Entity::player());
        let tuning = SpawnTuning {
            alien_odds: config.alien_odds,
            bomb_odds: config.bomb_odds,
            alien_reload: config.alien_reload,
        };
        let arena = Arena { playfield: PLAYFIELD, bomb_floor: config.bomb_floor };
        info!("round starts in {mode:?} mode");
        World {
            registry,
            rng,
            score: 0,
            frame: 0,
            player,
            spawner: SpawnController::new(mode, tuning),
            arena,
            config,
            dirty: DirtyTracker::new(),
            score_board: ScoreBoard::new(),
        }
    }

    /// Put one descender on the field immediately (mode chosen from the
    /// options screen).
    pub fn spawn_opening(&mut self) -> EntityId {
        self.spawner.spawn_descender(&mut self.registry, &mut self.rng)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn player(&self) -> EntityId {
        self.player
    }

    pub fn player_alive(&self) -> bool {
        self.registry.is_alive(self.player)
    }

    pub fn spawner(&self) -> &SpawnController {
        &self.spawner
    }

    /// Simulate one frame: move everything, let the player act, spawn,
    /// resolve collisions, and build the draw list.
    pub fn step(&mut self, input: &FrameInput) -> FrameReport {
        self.frame += 1;
        let mut report = FrameReport { frame: self.frame, ..FrameReport::default() };

        let update = self.registry.update_all(Group::All, &self.arena);
        trace!(
            "frame {}: advanced {}, removed {}, spawned {}",
            self.frame,
            update.advanced,
            update.removed.len(),
            update.spawned.len()
        );

        report.shot = self.player_turn(input);
        if report.shot.is_some() {
            report.events.push(AudioEvent::ShotFired);
        }

        report.spawn = self.spawner.step(&mut self.registry, &mut self.rng);

        let collisions = resolve_all(&mut self.registry, Some(self.player));
        if collisions.score > 0 {
            self.score += collisions.score;
            debug!("score {} (+{})", self.score, collisions.score);
        }
        report.events.extend(collisions.events.iter().copied());
        report.collisions = collisions;

        report.render = self.render();
        report.score = self.score;
        report.player_alive = self.player_alive();
        report
    }

    fn player_turn(&mut self, input: &FrameInput) -> Option<EntityId> {
        let has_room = self.registry.len(Group::Shots) < self.config.max_shots;
        let player = self.registry.get_mut(self.player)?;
        move_player(player, input.direction, &self.arena.playfield, self.config.player_bounce);
        let muzzle = pull_trigger(player, input.fire, has_room)?;
        Some(self.registry.create(Entity::shot(muzzle)))
    }

    /// Current draw list with the regions that changed since last call.
    pub fn render(&mut self) -> RenderFrame {
        let sprites = self.registry.draw_all(Group::All);
        let dirty = self.dirty.diff(&sprites);
        let score_text = self.score_board.refresh(self.score);
        RenderFrame { sprites, dirty, score_text }
    }
}
