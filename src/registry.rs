//! Entity registry: one arena owns every live entity, named groups hold
//! handles into it.
//!
//! Groups may overlap (an enemy sits in both `All` and `Enemies`). A
//! singleton slot remembers only the most recently created entity of its
//! kind. Removing an entity from the arena removes it from every group and
//! slot at once, so no group ever holds a dangling handle.

use std::collections::{BTreeSet, HashMap};

use log::trace;
use slotmap::SlotMap;

use crate::behavior::{advance, Advance, Arena};
use crate::entities::{Entity, EntityKind, Image};
use crate::geometry::Rect;

slotmap::new_key_type! {
    /// Stable handle to an entity in the registry.
    pub struct EntityId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    All,
    Enemies,
    Hazards,
    Aircraft,
    Shots,
    Bombs,
}

/// Single-entry groups tracking the latest spawn of a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    LastEnemy,
    LastHazard,
    LastAircraft,
}

/// Groups (and optional slot) an entity joins at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Membership {
    pub groups: &'static [Group],
    pub slot: Option<Slot>,
}

impl Membership {
    /// Default containers for each kind.
    pub fn for_kind(kind: &EntityKind) -> Membership {
        let (groups, slot): (&'static [Group], _) = match kind {
            EntityKind::Enemy => (&[Group::Enemies, Group::All], Some(Slot::LastEnemy)),
            EntityKind::Hazard => (&[Group::Hazards, Group::All], Some(Slot::LastHazard)),
            EntityKind::Aircraft => (&[Group::Aircraft, Group::All], Some(Slot::LastAircraft)),
            EntityKind::Shot => (&[Group::Shots, Group::All], None),
            EntityKind::Bomb => (&[Group::Bombs, Group::All], None),
            EntityKind::Player(_) | EntityKind::Explosion { .. } | EntityKind::Background => {
                (&[Group::All], None)
            }
        };
        Membership { groups, slot }
    }
}

/// One drawable item: where it is and what to draw there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub id: EntityId,
    pub rect: Rect,
    pub image: Image,
}

/// Result of advancing a group for one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub advanced: usize,
    pub removed: Vec<EntityId>,
    pub spawned: Vec<EntityId>,
}

#[derive(Debug, Default)]
pub struct Registry {
    entities: SlotMap<EntityId, Entity>,
    groups: HashMap<Group, BTreeSet<EntityId>>,
    slots: HashMap<Slot, EntityId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entity` into the groups its kind belongs to.
    pub fn create(&mut self, entity: Entity) -> EntityId {
        let membership = Membership::for_kind(&entity.kind);
        self.create_in(entity, membership)
    }

    /// Insert `entity` into exactly the groups named by `membership`.
    pub fn create_in(&mut self, mut entity: Entity, membership: Membership) -> EntityId {
        entity.alive = true;
        let kind = entity.kind.name();
        let id = self.entities.insert(entity);
        for group in membership.groups {
            self.groups.entry(*group).or_default().insert(id);
        }
        if let Some(slot) = membership.slot {
            self.slots.insert(slot, id);
        }
        trace!("created {kind} {id:?} in {:?}", membership.groups);
        id
    }

    /// Remove `id` from every group. Returns the entity (marked dead) if it
    /// was still alive; destroying twice is a no-op.
    pub fn destroy(&mut self, id: EntityId) -> Option<Entity> {
        let mut entity = self.entities.remove(id)?;
        entity.alive = false;
        for members in self.groups.values_mut() {
            members.remove(&id);
        }
        self.slots.retain(|_, held| *held != id);
        trace!("destroyed {} {id:?}", entity.kind.name());
        Some(entity)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn contains(&self, group: Group, id: EntityId) -> bool {
        self.groups.get(&group).is_some_and(|members| members.contains(&id))
    }

    /// Snapshot of a group's members, in a stable order.
    pub fn members(&self, group: Group) -> Vec<EntityId> {
        self.groups
            .get(&group)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn len(&self, group: Group) -> usize {
        self.groups.get(&group).map_or(0, BTreeSet::len)
    }

    pub fn is_empty(&self, group: Group) -> bool {
        self.len(group) == 0
    }

    /// The live occupant of a singleton slot, if any.
    pub fn singleton(&self, slot: Slot) -> Option<EntityId> {
        self.slots.get(&slot).copied().filter(|id| self.is_alive(*id))
    }

    /// Advance every member of `group` once. Removals and explosions are
    /// applied after all members have moved, so the result does not depend
    /// on iteration order. Entities spawned here are not advanced until the
    /// next frame.
    pub fn update_all(&mut self, group: Group, arena: &Arena) -> UpdateReport {
        let mut report = UpdateReport::default();
        let mut detonated: Vec<Rect> = Vec::new();

        for id in self.members(group) {
            let Some(entity) = self.entities.get_mut(id) else {
                continue;
            };
            report.advanced += 1;
            match advance(entity, arena) {
                Advance::Keep => {}
                Advance::Remove => report.removed.push(id),
                Advance::Detonate => {
                    detonated.push(entity.rect);
                    report.removed.push(id);
                }
            }
        }

        for id in &report.removed {
            self.destroy(*id);
        }
        for rect in detonated {
            report.spawned.push(self.create(Entity::explosion(&rect)));
        }
        report
    }

    /// Everything in `group` that should be drawn, bottom layer first.
    pub fn draw_all(&self, group: Group) -> Vec<Sprite> {
        let mut sprites: Vec<Sprite> = self
            .members(group)
            .into_iter()
            .filter_map(|id| {
                self.entities.get(id).map(|e| Sprite { id, rect: e.rect, image: e.image })
            })
            .collect();
        sprites.sort_by_key(|s| (s.image.layer(), s.id));
        sprites
    }
}
