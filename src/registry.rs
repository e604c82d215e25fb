//! Owner of every live entity.
//!
//! Insertion order is draw order.  Entities are addressed by an `EntityId`
//! handle that is never reused, so a removed entity cannot reappear under the
//! same identity.

use crate::entities::{Enemy, Entity, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

/// Outcome of an entity's per-tick update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fate {
    Alive,
    Dead,
}

#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: Vec<(EntityId, Entity)>,
    next_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, entity));
        id
    }

    /// Remove by identity.  Removing an absent id is a no-op.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entries.iter().position(|(eid, _)| *eid == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Run `update` on every entity in insertion order, dropping those that
    /// report `Fate::Dead`.  Survivors keep their relative order.
    pub fn update_all<F>(&mut self, mut update: F)
    where
        F: FnMut(&mut Entity) -> Fate,
    {
        self.entries
            .retain_mut(|(_, entity)| update(entity) == Fate::Alive);
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entries
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, entity)| entity)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn player(&self, id: EntityId) -> Option<&Player> {
        match self.get(id)? {
            Entity::Player(p) => Some(p),
            Entity::Enemy(_) => None,
        }
    }

    pub fn player_mut(&mut self, id: EntityId) -> Option<&mut Player> {
        self.entries
            .iter_mut()
            .find(|(eid, _)| *eid == id)
            .and_then(|(_, entity)| match entity {
                Entity::Player(p) => Some(p),
                Entity::Enemy(_) => None,
            })
    }

    /// Entities in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entries.iter().map(|(id, entity)| (*id, entity))
    }

    pub fn enemies(&self) -> impl Iterator<Item = (EntityId, &Enemy)> {
        self.entries.iter().filter_map(|(id, entity)| match entity {
            Entity::Enemy(e) => Some((*id, e)),
            Entity::Player(_) => None,
        })
    }

    pub fn enemies_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Enemy)> {
        self.entries.iter_mut().filter_map(|(id, entity)| match entity {
            Entity::Enemy(e) => Some((*id, e)),
            Entity::Player(_) => None,
        })
    }

    pub fn enemy_count(&self) -> usize {
        self.entries.iter().filter(|(_, e)| e.is_enemy()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
