//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of what to
//! show. No game logic is performed; this module only maps the 640×480
//! playfield onto the terminal grid and translates sprites into glyphs.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use sky_defender::config::PLAYFIELD;
use sky_defender::entities::Image;
use sky_defender::game::GameState;
use sky_defender::registry::Sprite;
use sky_defender::render::RenderFrame;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_HAZARD: Color = Color::Magenta;
const C_AIRCRAFT: Color = Color::Cyan;
const C_SHOT: Color = Color::Cyan;
const C_BOMB: Color = Color::Red;
const C_EXPLOSION: Color = Color::Yellow;
const C_STARS: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

const HINT: &str = "← → / A D : Move   SPACE : Shoot   F : Fullscreen   Q : Quit";

// ── Playfield → terminal mapping ──────────────────────────────────────────────

/// Terminal cells available for the playfield, inside the border.
struct Viewport {
    left: u16,
    top: u16,
    cols: u16,
    rows: u16,
}

impl Viewport {
    fn new(width: u16, height: u16, chrome: bool) -> Self {
        if chrome {
            Viewport {
                left: 1,
                top: 2,
                cols: width.saturating_sub(2).max(1),
                rows: height.saturating_sub(4).max(1),
            }
        } else {
            Viewport { left: 0, top: 0, cols: width.max(1), rows: height.max(1) }
        }
    }

    /// Terminal cell for a playfield point, or `None` when off-screen.
    fn cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if !(0..PLAYFIELD.w).contains(&x) || !(0..PLAYFIELD.h).contains(&y) {
            return None;
        }
        let col = x as i64 * self.cols as i64 / PLAYFIELD.w as i64;
        let row = y as i64 * self.rows as i64 / PLAYFIELD.h as i64;
        Some((self.left + col as u16, self.top + row as u16))
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one playing frame. Frames with nothing dirty are skipped.
pub fn render<W: Write>(
    out: &mut W,
    frame: &RenderFrame,
    score_text: &str,
    fullscreen: bool,
) -> std::io::Result<()> {
    if frame.dirty.is_empty() {
        return Ok(());
    }
    let (width, height) = terminal::size()?;
    let view = Viewport::new(width, height, !fullscreen);

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    if !fullscreen {
        draw_border(out, &view)?;
        draw_controls_hint(out, height)?;
    }

    for sprite in &frame.sprites {
        draw_sprite(out, &view, sprite)?;
    }

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(score_text))?;

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Draw the main menu or the options (mode select) screen.
pub fn render_menu<W: Write>(out: &mut W, state: GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  SKY  DEFENDER  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    let options: &[(&str, &str, Color)] = match state {
        GameState::ModeSelect => &[
            ("1", "Aircraft", C_AIRCRAFT),
            ("2", "Hazard", C_HAZARD),
            ("3", "Enemy", C_ENEMY),
            ("B", "Back", Color::White),
        ],
        _ => &[
            ("1", "Resume", Color::Green),
            ("2", "Options", Color::Yellow),
            ("3", "Quit", Color::Red),
        ],
    };

    for (i, (key, label, color)) in options.iter().enumerate() {
        let row = cy.saturating_sub(2) + i as u16 * 2;
        out.queue(cursor::MoveTo(cx.saturating_sub(8), row))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{}] ", key)))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*label))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

/// Overlay shown while the music fades after the player is destroyed.
pub fn render_round_over<W: Write>(out: &mut W, score: u32) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let lines: [(String, Color); 4] = [
        ("╔════════════════════╗".to_string(), Color::Red),
        ("║    GAME  OVER      ║".to_string(), Color::Red),
        ("╚════════════════════╝".to_string(), Color::Red),
        (format!("Final Score: {:>6}", score), Color::Yellow),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Chrome ───────────────────────────────────────────────────────────────────

/// Frame the viewport with a one-cell box.
fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let span = "─".repeat(view.cols as usize);
    let (left, right) = (view.left - 1, view.left + view.cols);
    let (top, bottom) = (view.top - 1, view.top + view.rows);

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(left, top))?;
    out.queue(Print(format!("┌{span}┐")))?;
    for row in view.top..bottom {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(right, row))?;
        out.queue(Print("│"))?;
    }
    out.queue(cursor::MoveTo(left, bottom))?;
    out.queue(Print(format!("└{span}┘")))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(HINT))?;
    Ok(())
}

// ── Sprites ───────────────────────────────────────────────────────────────────

fn glyph(image: Image) -> (&'static str, Color) {
    match image {
        Image::Player { flipped: false } => ("◄█▲", C_PLAYER),
        Image::Player { flipped: true } => ("▲█►", C_PLAYER),
        Image::Enemy(0) => ("«▼»", C_ENEMY),
        Image::Enemy(1) => ("‹▼›", C_ENEMY),
        Image::Enemy(_) => ("«▽»", C_ENEMY),
        Image::Hazard => ("(◯)", C_HAZARD),
        Image::Aircraft => ("═╦═", C_AIRCRAFT),
        Image::Shot => ("║", C_SHOT),
        Image::Bomb => ("↓", C_BOMB),
        Image::Explosion(0) => ("✶", C_EXPLOSION),
        Image::Explosion(_) => ("✷", C_EXPLOSION),
        Image::Background => (".", C_STARS),
    }
}

fn draw_sprite<W: Write>(out: &mut W, view: &Viewport, sprite: &Sprite) -> std::io::Result<()> {
    if sprite.image == Image::Background {
        return draw_stars(out, view, sprite);
    }
    let (text, color) = glyph(sprite.image);
    let (cx, cy) = sprite.rect.center();
    let Some((col, row)) = view.cell(cx, cy) else {
        return Ok(());
    };
    let half = text.chars().count() as u16 / 2;
    out.queue(cursor::MoveTo(col.saturating_sub(half).max(view.left), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

/// A sparse star grid that scrolls with the background's offset.
fn draw_stars<W: Write>(out: &mut W, view: &Viewport, sprite: &Sprite) -> std::io::Result<()> {
    const STAR_SPACING: i32 = 60;
    let (text, color) = glyph(Image::Background);
    out.queue(style::SetForegroundColor(color))?;
    let shift = sprite.rect.top().rem_euclid(STAR_SPACING);
    let mut y = shift;
    let mut band = 0;
    while y < PLAYFIELD.h {
        let mut x = if band % 2 == 0 { 17 } else { 47 };
        while x < PLAYFIELD.w {
            if let Some((col, row)) = view.cell(x, y) {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print(text))?;
            }
            x += STAR_SPACING;
        }
        y += STAR_SPACING;
        band += 1;
    }
    Ok(())
}
