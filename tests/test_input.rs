use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use sky_defender::entities::SpawnMode;
use sky_defender::game::MenuChoice;
use sky_defender::input::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

fn repeat(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Repeat)
}

// ── Held-key model ────────────────────────────────────────────────────────────

#[test]
fn pressed_key_is_held_for_the_window() {
    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Left), 10);
    assert!(keys.is_held(KeyCode::Left, 10));
    assert!(keys.is_held(KeyCode::Left, 10 + HOLD_WINDOW));
    assert!(!keys.is_held(KeyCode::Left, 11 + HOLD_WINDOW));
}

#[test]
fn repeat_refreshes_the_window() {
    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Right), 0);
    keys.handle(repeat(KeyCode::Right), 5);
    assert!(keys.is_held(KeyCode::Right, 9));
}

#[test]
fn release_drops_the_key_immediately() {
    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Char(' ')), 0);
    keys.handle(release(KeyCode::Char(' ')), 1);
    assert!(!keys.sample(1).fire);
}

#[test]
fn direction_from_arrows_and_letters() {
    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Left), 0);
    assert_eq!(keys.sample(0).direction, -1);

    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Char('d')), 0);
    assert_eq!(keys.sample(0).direction, 1);
}

#[test]
fn opposite_directions_cancel() {
    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Left), 0);
    keys.handle(press(KeyCode::Right), 0);
    assert_eq!(keys.sample(0).direction, 0);
}

#[test]
fn fire_and_move_together() {
    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Char(' ')), 3);
    keys.handle(press(KeyCode::Char('a')), 3);
    let input = keys.sample(4);
    assert!(input.fire);
    assert_eq!(input.direction, -1);
}

#[test]
fn quit_is_a_one_shot_signal() {
    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Esc), 0);
    assert!(keys.sample(0).quit);
    assert!(!keys.sample(1).quit);
}

#[test]
fn ctrl_c_quits() {
    let mut keys = KeyTracker::new();
    keys.handle(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), 0);
    assert!(keys.sample(0).quit);

    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Char('c')), 0);
    assert!(!keys.sample(0).quit);
}

#[test]
fn fullscreen_toggle_is_a_one_shot_signal() {
    let mut keys = KeyTracker::new();
    keys.handle(press(KeyCode::Char('f')), 0);
    assert!(keys.sample(0).toggle_fullscreen);
    assert!(!keys.sample(0).toggle_fullscreen);
}

#[test]
fn nothing_pressed_is_idle() {
    let mut keys = KeyTracker::new();
    assert_eq!(keys.sample(100), FrameInput::default());
}

// ── Menus ─────────────────────────────────────────────────────────────────────

#[test]
fn main_menu_buttons() {
    assert_eq!(main_menu_key(KeyCode::Char('1')), Some(MenuChoice::Resume));
    assert_eq!(main_menu_key(KeyCode::Enter), Some(MenuChoice::Resume));
    assert_eq!(main_menu_key(KeyCode::Char('2')), Some(MenuChoice::Options));
    assert_eq!(main_menu_key(KeyCode::Char('3')), Some(MenuChoice::Quit));
    assert_eq!(main_menu_key(KeyCode::Esc), Some(MenuChoice::Quit));
    assert_eq!(main_menu_key(KeyCode::Char('x')), None);
}

#[test]
fn mode_select_buttons() {
    assert_eq!(mode_select_key(KeyCode::Char('1')), Some(MenuChoice::Mode(SpawnMode::Aircraft)));
    assert_eq!(mode_select_key(KeyCode::Char('2')), Some(MenuChoice::Mode(SpawnMode::Hazard)));
    assert_eq!(mode_select_key(KeyCode::Char('3')), Some(MenuChoice::Mode(SpawnMode::Enemy)));
    assert_eq!(mode_select_key(KeyCode::Char('b')), Some(MenuChoice::Back));
    assert_eq!(mode_select_key(KeyCode::Backspace), Some(MenuChoice::Back));
    assert_eq!(mode_select_key(KeyCode::Enter), None);
}
