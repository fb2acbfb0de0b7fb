//! Top-level state machine: main menu → mode select → playing → round over.

use log::{debug, info};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::SpawnMode;
use crate::input::FrameInput;
use crate::world::{FrameReport, World};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    MainMenu,
    ModeSelect,
    Playing,
    RoundOver,
    /// The player asked to leave; the caller should shut down.
    Exited,
}

/// A button pressed on one of the menu screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Resume,
    Options,
    Quit,
    Mode(SpawnMode),
    Back,
}

pub struct Game<R: Rng> {
    state: GameState,
    config: GameConfig,
    /// Held until the round starts, then moved into the world.
    rng: Option<R>,
    world: Option<World<R>>,
    fullscreen: bool,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        Game {
            state: GameState::MainMenu,
            config,
            rng: Some(rng),
            world: None,
            fullscreen: false,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn world(&self) -> Option<&World<R>> {
        self.world.as_ref()
    }

    pub fn world_mut(&mut self) -> Option<&mut World<R>> {
        self.world.as_mut()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.world.as_ref().map_or(0, |world| world.score())
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Apply a menu button. Buttons that do not belong to the current
    /// screen are ignored.
    pub fn choose(&mut self, choice: MenuChoice) -> GameState {
        match (self.state, choice) {
            (GameState::MainMenu, MenuChoice::Resume) => {
                let mode = self.config.default_mode;
                self.start_round(mode, false);
            }
            (GameState::MainMenu, MenuChoice::Options) => self.transition(GameState::ModeSelect),
            (GameState::MainMenu, MenuChoice::Quit) => self.transition(GameState::Exited),
            (GameState::ModeSelect, MenuChoice::Mode(mode)) => self.start_round(mode, true),
            (GameState::ModeSelect, MenuChoice::Back) => self.transition(GameState::MainMenu),
            (state, choice) => debug!("ignoring {choice:?} in {state:?}"),
        }
        self.state
    }

    /// Window closed or escape pressed outside a round.
    pub fn quit(&mut self) {
        self.transition(GameState::Exited);
    }

    fn start_round(&mut self, mode: SpawnMode, opening_spawn: bool) {
        let Some(rng) = self.rng.take() else {
            debug!("round already played, ignoring start");
            return;
        };
        let mut world = World::new(self.config.clone(), mode, rng);
        if opening_spawn {
            world.spawn_opening();
        }
        self.world = Some(world);
        self.transition(GameState::Playing);
    }

    fn transition(&mut self, next: GameState) {
        if self.state != next {
            info!("{:?} -> {next:?}", self.state);
            self.state = next;
        }
    }

    /// Run one frame while playing. Returns `None` outside `Playing` or when
    /// the frame's input asked to quit. The frame that destroys the player
    /// still completes; the state is `RoundOver` once it returns.
    pub fn frame(&mut self, input: &FrameInput) -> Option<FrameReport> {
        if self.state != GameState::Playing {
            return None;
        }
        if input.quit {
            self.quit();
            return None;
        }
        if input.toggle_fullscreen {
            self.fullscreen = !self.fullscreen;
            info!("fullscreen {}", if self.fullscreen { "on" } else { "off" });
        }

        let report = self.world.as_mut()?.step(input);
        if !report.player_alive {
            info!("player down on frame {}, final score {}", report.frame, report.score);
            self.transition(GameState::RoundOver);
        }
        Some(report)
    }
}
