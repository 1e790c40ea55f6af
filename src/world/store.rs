//! Entity storage.
//!
//! Ids are plain indices: the core never deletes entities, so slots are never
//! vacated and no generation tracking is needed. An id handed out by
//! [`EntityStore::insert`] stays valid for the store's whole life.

use crate::events::DomainEvent;

use super::entity::{Entity, EntityId, TraitSet};

/// Append-only collection of entities with stable ids.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the entity, assigning its permanent id.
    pub fn insert(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId::new(self.entities.len() as u32);
        entity.id = id;
        self.entities.push(entity);
        id
    }

    /// Stores the entity and announces it, the way spawn-style reactions and
    /// setup code introduce new objects mid-simulation.
    pub fn spawn(&mut self, entity: Entity) -> (EntityId, DomainEvent) {
        let id = self.insert(entity);
        (id, DomainEvent::EntityAdded { entity: id })
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index())
    }

    /// Mutable access to two distinct entities at once.
    pub fn get_pair_mut(
        &mut self,
        id_a: EntityId,
        id_b: EntityId,
    ) -> Option<(&mut Entity, &mut Entity)> {
        if id_a == id_b {
            return None;
        }
        let (first, second, flipped) = if id_a.index() < id_b.index() {
            (id_a.index(), id_b.index(), false)
        } else {
            (id_b.index(), id_a.index(), true)
        };
        if second >= self.entities.len() {
            return None;
        }

        let (left, right) = self.entities.split_at_mut(second);
        let pair = (&mut left[first], &mut right[0]);
        if flipped {
            Some((pair.1, pair.0))
        } else {
            Some(pair)
        }
    }

    /// Applies `update` to the entity, if present.
    pub fn update<F: FnOnce(&mut Entity)>(&mut self, id: EntityId, update: F) {
        if let Some(entity) = self.entities.get_mut(id.index()) {
            update(entity);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().map(|entity| entity.id)
    }

    /// Entities whose trait set contains all of `traits`.
    pub fn filter_by_trait(&self, traits: TraitSet) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter(move |entity| entity.traits.contains(traits))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
