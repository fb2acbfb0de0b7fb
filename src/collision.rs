//! Collision queries and the fixed-order resolution pass.
//!
//! Queries only report overlaps. Resolution walks the categories in
//! [`Category::ORDER`]; each category destroys what it hits before the next
//! one looks, so an entity removed earlier in the frame can never be hit
//! again later in the same frame.

use log::debug;

use crate::audio::AudioEvent;
use crate::entities::Entity;
use crate::geometry::Rect;
use crate::registry::{EntityId, Group, Registry};

/// Standard AABB intersection; symmetric in its arguments.
pub fn collide(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Every member of `group` overlapping `id`. Empty if `id` is gone.
pub fn sprite_collide(registry: &Registry, id: EntityId, group: Group) -> Vec<EntityId> {
    let Some(subject) = registry.get(id) else {
        return Vec::new();
    };
    registry
        .members(group)
        .into_iter()
        .filter(|other| *other != id)
        .filter(|other| registry.get(*other).is_some_and(|e| collide(&subject.rect, &e.rect)))
        .collect()
}

/// Every overlapping `(a, b)` pair with `a` in `group_a` and `b` in
/// `group_b`, each pair reported once.
pub fn group_collide(registry: &Registry, group_a: Group, group_b: Group) -> Vec<(EntityId, EntityId)> {
    let mut pairs = Vec::new();
    for a in registry.members(group_a) {
        for b in sprite_collide(registry, a, group_b) {
            pairs.push((a, b));
        }
    }
    pairs
}

// ── Resolution ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    PlayerAircraft,
    PlayerEnemy,
    PlayerHazard,
    ShotAircraft,
    ShotEnemy,
    ShotHazard,
    PlayerBomb,
}

impl Category {
    /// Player-contact checks run before projectile hits, bombs last.
    pub const ORDER: [Category; 7] = [
        Category::PlayerAircraft,
        Category::PlayerEnemy,
        Category::PlayerHazard,
        Category::ShotAircraft,
        Category::ShotEnemy,
        Category::ShotHazard,
        Category::PlayerBomb,
    ];

    pub fn target(&self) -> Group {
        match self {
            Category::PlayerAircraft | Category::ShotAircraft => Group::Aircraft,
            Category::PlayerEnemy | Category::ShotEnemy => Group::Enemies,
            Category::PlayerHazard | Category::ShotHazard => Group::Hazards,
            Category::PlayerBomb => Group::Bombs,
        }
    }

    pub fn involves_player(&self) -> bool {
        matches!(
            self,
            Category::PlayerAircraft
                | Category::PlayerEnemy
                | Category::PlayerHazard
                | Category::PlayerBomb
        )
    }

    /// Sound of the target going down.
    pub fn sound(&self) -> AudioEvent {
        match self {
            Category::PlayerHazard | Category::ShotHazard => AudioEvent::HazardDestroyed,
            _ => AudioEvent::EnemyDestroyed,
        }
    }
}

/// One resolved hit: `striker` (the player or a projectile) met `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub category: Category,
    pub striker: EntityId,
    pub target: EntityId,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub hits: Vec<Hit>,
    pub score: u32,
    pub player_destroyed: bool,
    pub events: Vec<AudioEvent>,
    pub explosions: Vec<EntityId>,
}

impl CollisionReport {
    fn absorb(&mut self, other: CollisionReport) {
        self.hits.extend(other.hits);
        self.score += other.score;
        self.player_destroyed |= other.player_destroyed;
        self.events.extend(other.events);
        self.explosions.extend(other.explosions);
    }
}

/// Run every category in order against the current registry.
pub fn resolve_all(registry: &mut Registry, player: Option<EntityId>) -> CollisionReport {
    let mut report = CollisionReport::default();
    for category in Category::ORDER {
        report.absorb(resolve(registry, player, category));
    }
    report
}

/// Resolve a single category. Each entity takes part in at most one hit.
pub fn resolve(registry: &mut Registry, player: Option<EntityId>, category: Category) -> CollisionReport {
    if category.involves_player() {
        resolve_player(registry, player, category)
    } else {
        resolve_shots(registry, category)
    }
}

fn resolve_player(registry: &mut Registry, player: Option<EntityId>, category: Category) -> CollisionReport {
    let mut report = CollisionReport::default();
    let Some(player) = player.filter(|id| registry.is_alive(*id)) else {
        return report;
    };
    let Some(target) = sprite_collide(registry, player, category.target()).into_iter().next() else {
        return report;
    };

    let (Some(target_entity), Some(player_entity)) = (registry.destroy(target), registry.destroy(player)) else {
        return report;
    };
    report.explosions.push(explode(registry, &target_entity));
    report.explosions.push(explode(registry, &player_entity));
    report.score += 1;
    report.player_destroyed = true;
    report.events.push(category.sound());
    report.events.push(AudioEvent::PlayerDestroyed);
    report.hits.push(Hit { category, striker: player, target });
    debug!("{category:?}: player {player:?} destroyed by {} {target:?}", target_entity.kind.name());
    report
}

fn resolve_shots(registry: &mut Registry, category: Category) -> CollisionReport {
    let mut report = CollisionReport::default();
    for target in registry.members(category.target()) {
        let Some(shot) = sprite_collide(registry, target, Group::Shots).into_iter().next() else {
            continue;
        };
        let Some(target_entity) = registry.destroy(target) else {
            continue;
        };
        registry.destroy(shot);
        report.explosions.push(explode(registry, &target_entity));
        report.score += 1;
        report.events.push(category.sound());
        report.hits.push(Hit { category, striker: shot, target });
        debug!("{category:?}: shot {shot:?} took out {} {target:?}", target_entity.kind.name());
    }
    report
}

fn explode(registry: &mut Registry, victim: &Entity) -> EntityId {
    registry.create(Entity::explosion(&victim.rect))
}
