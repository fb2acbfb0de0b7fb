//! Logical input signals and the held-key model that produces them.
//!
//! Instead of acting on each key event individually, the tracker records
//! the frame number of the last press/repeat for every key. Each frame the
//! keys still "fresh" (within `HOLD_WINDOW` frames) are turned into one
//! [`FrameInput`], so fire and movement can be held at the same time.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): proper
//!   `Press` / `Repeat` / `Release` events, keys are dropped on release.
//! * **Classic terminals**: only `Press` events. Keys expire after
//!   `HOLD_WINDOW` frames of silence, shorter than the OS repeat interval.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::SpawnMode;
use crate::game::MenuChoice;

/// A key counts as held if its last press/repeat arrived within this many
/// frames. At 40 FPS this is 125 ms.
pub const HOLD_WINDOW: u64 = 5;

/// Everything the simulation consumes from the input device for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// −1 left, 0 still, +1 right.
    pub direction: i32,
    pub fire: bool,
    pub quit: bool,
    pub toggle_fullscreen: bool,
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    quit: bool,
    toggle_fullscreen: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: KeyEvent, frame: u64) {
        match event.kind {
            KeyEventKind::Press => {
                match event.code {
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.quit = true,
                    KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true
                    }
                    KeyCode::Char('f') | KeyCode::Char('F') => self.toggle_fullscreen = true,
                    _ => {}
                }
                self.key_frame.insert(event.code, frame);
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(event.code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&event.code);
            }
        }
    }

    /// True if `key` was seen within the last `HOLD_WINDOW` frames.
    pub fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .is_some_and(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|key| self.is_held(*key, frame))
    }

    /// Collapse the current key state into this frame's signals. One-shot
    /// signals (quit, fullscreen) are consumed.
    pub fn sample(&mut self, frame: u64) -> FrameInput {
        let left = self.any_held(&[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], frame);
        let right = self.any_held(&[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], frame);
        let input = FrameInput {
            direction: i32::from(right) - i32::from(left),
            fire: self.is_held(KeyCode::Char(' '), frame),
            quit: self.quit,
            toggle_fullscreen: self.toggle_fullscreen,
        };
        self.quit = false;
        self.toggle_fullscreen = false;
        input
    }
}

/// Menu buttons on the main screen: 1 Resume, 2 Options, 3 Quit.
pub fn main_menu_key(code: KeyCode) -> Option<MenuChoice> {
    match code {
        KeyCode::Char('1') | KeyCode::Enter => Some(MenuChoice::Resume),
        KeyCode::Char('2') | KeyCode::Char('o') | KeyCode::Char('O') => Some(MenuChoice::Options),
        KeyCode::Char('3') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            Some(MenuChoice::Quit)
        }
        _ => None,
    }
}

/// Mode-select buttons: 1 Aircraft, 2 Hazard, 3 Enemy, B Back.
pub fn mode_select_key(code: KeyCode) -> Option<MenuChoice> {
    match code {
        KeyCode::Char('1') => Some(MenuChoice::Mode(SpawnMode::Aircraft)),
        KeyCode::Char('2') => Some(MenuChoice::Mode(SpawnMode::Hazard)),
        KeyCode::Char('3') => Some(MenuChoice::Mode(SpawnMode::Enemy)),
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Backspace | KeyCode::Esc => {
            Some(MenuChoice::Back)
        }
        _ => None,
    }
}
