//! Per-kind movement behaviors.
//!
//! `advance` touches only the entity it is given, so a group can be advanced
//! in any order. Anything that would affect other entities (removal,
//! spawning an explosion) is reported back as an [`Advance`] for the
//! registry to apply after the whole group has moved.

use crate::config::{
    ENEMY_ANIM_CYCLE, ENEMY_FRAMES, EXPLOSION_ANIM_CYCLE, EXPLOSION_FRAMES, PLAYER_GUN_OFFSET,
    PLAYER_SPEED,
};
use crate::entities::{Entity, EntityKind, Image};
use crate::geometry::Rect;

/// What the registry must do with an entity after it advanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Keep,
    Remove,
    /// Replace the entity with an explosion at its current location.
    Detonate,
}

/// Boundaries the behaviors are evaluated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arena {
    pub playfield: Rect,
    /// Row at which a falling bomb's bottom edge triggers detonation.
    pub bomb_floor: i32,
}

/// Advance one entity by a single frame.
pub fn advance(entity: &mut Entity, arena: &Arena) -> Advance {
    match &mut entity.kind {
        EntityKind::Enemy => {
            bounce(entity, &arena.playfield);
            entity.frame += 1;
            let index = entity.frame / ENEMY_ANIM_CYCLE % ENEMY_FRAMES;
            entity.image = Image::Enemy(index as u8);
            Advance::Keep
        }
        EntityKind::Hazard | EntityKind::Aircraft => {
            bounce(entity, &arena.playfield);
            entity.frame += 1;
            Advance::Keep
        }
        EntityKind::Shot => {
            translate(entity);
            if entity.rect.top() <= arena.playfield.top() {
                Advance::Remove
            } else {
                Advance::Keep
            }
        }
        EntityKind::Bomb => {
            translate(entity);
            if entity.rect.bottom() >= arena.bomb_floor {
                Advance::Detonate
            } else {
                Advance::Keep
            }
        }
        EntityKind::Explosion { life } => {
            *life -= 1;
            let index = life.div_euclid(EXPLOSION_ANIM_CYCLE).rem_euclid(EXPLOSION_FRAMES);
            let expired = *life <= 0;
            entity.image = Image::Explosion(index as u8);
            if expired {
                Advance::Remove
            } else {
                Advance::Keep
            }
        }
        EntityKind::Background => {
            translate(entity);
            if entity.rect.top() > 0 {
                let loop_top = -entity.rect.h / 2;
                entity.rect.set_top(loop_top);
            }
            Advance::Keep
        }
        // The player only moves in response to input; see `move_player`.
        EntityKind::Player(_) => Advance::Keep,
    }
}

fn translate(entity: &mut Entity) {
    entity.rect.move_ip(entity.velocity.dx, entity.velocity.dy);
}

/// Bounded-bounce: move, and if the rectangle left `bounds` reverse
/// horizontally, drop one rectangle-height below the old bottom edge, and
/// clamp back inside. Returns whether a bounce happened.
pub fn bounce(entity: &mut Entity, bounds: &Rect) -> bool {
    translate(entity);
    if bounds.contains(&entity.rect) {
        return false;
    }
    entity.velocity.dx = -entity.velocity.dx;
    let below = entity.rect.bottom() + 1;
    entity.rect.set_top(below);
    entity.rect = entity.rect.clamp(bounds);
    true
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Slide the player by `direction` (−1, 0, +1) and apply the cosmetic bob.
/// No-op for any other kind.
pub fn move_player(entity: &mut Entity, direction: i32, bounds: &Rect, bounce_period: i32) {
    let EntityKind::Player(state) = &mut entity.kind else {
        return;
    };
    let direction = direction.clamp(-1, 1);
    if direction != 0 {
        state.facing = direction;
    }
    entity.rect.move_ip(direction * PLAYER_SPEED, 0);
    entity.rect = entity.rect.clamp(bounds);
    match direction {
        d if d < 0 => entity.image = Image::Player { flipped: false },
        d if d > 0 => entity.image = Image::Player { flipped: true },
        _ => {}
    }
    let bob = entity.rect.left().div_euclid(bounce_period).rem_euclid(2);
    entity.rect.set_top(state.orig_top - bob);
}

/// Where a projectile leaves the player's gun: `(facing * offset + centre_x, top)`.
pub fn gun_position(entity: &Entity) -> Option<(i32, i32)> {
    match &entity.kind {
        EntityKind::Player(state) => Some((
            state.facing * PLAYER_GUN_OFFSET + entity.rect.center_x(),
            entity.rect.top(),
        )),
        _ => None,
    }
}

/// Latched trigger. Fires only when `fire_held` is newly pressed and there
/// is room for another projectile; returns the muzzle position to spawn at.
pub fn pull_trigger(entity: &mut Entity, fire_held: bool, has_room: bool) -> Option<(i32, i32)> {
    let EntityKind::Player(state) = &mut entity.kind else {
        return None;
    };
    let fires = !state.reloading && fire_held && has_room;
    state.reloading = fire_held;
    if fires {
        gun_position(entity)
    } else {
        None
    }
}
