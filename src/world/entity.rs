//! Entities: a body plus the kind tag and behavior tables that decide how it
//! interacts with everything else.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::body::Body;
use crate::dynamics::steering::MovementBehavior;

use super::dispatch::ContactTable;

/// Identifier assigned once, on first insertion into the store, and stable
/// for the entity's whole life. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(u32);

impl EntityId {
    pub(crate) fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_null(self) -> bool {
        self.0 == u32::MAX
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self(u32::MAX)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Closed set of entity kinds. Contact behavior is looked up by the *other*
/// side's kind; nothing here implies subtyping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Character,
    Projectile,
    Wall,
}

impl EntityKind {
    pub const COUNT: usize = 3;

    pub const fn index(self) -> usize {
        match self {
            EntityKind::Character => 0,
            EntityKind::Projectile => 1,
            EntityKind::Wall => 2,
        }
    }
}

/// Bitmask of orthogonal entity capabilities, queried by
/// [`EntityStore::filter_by_trait`](super::store::EntityStore::filter_by_trait).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraitSet(u32);

impl TraitSet {
    pub const NONE: Self = Self(0);
    /// Takes part in collision detection and motion integration.
    pub const PHYSICAL: Self = Self(1 << 0);
    /// Carries a movement behavior consumed by steering.
    pub const STEERABLE: Self = Self(1 << 1);
    /// May receive jump impulses.
    pub const JUMPER: Self = Self(1 << 2);

    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// A simulated object: stable identity, kind tag, rigid body, per-kind
/// contact behavior, and an optional steering intent.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub traits: TraitSet,
    pub body: Body,
    pub contacts: ContactTable,
    pub movement: Option<MovementBehavior>,
}

impl Entity {
    /// A physical entity with no contact rules and no steering; callers add
    /// those with [`with_contacts`](Self::with_contacts) /
    /// [`with_movement`](Self::with_movement). The id stays null until the
    /// store assigns one.
    pub fn new(kind: EntityKind, body: Body) -> Self {
        Self {
            id: EntityId::default(),
            kind,
            traits: TraitSet::PHYSICAL,
            body,
            contacts: ContactTable::new(),
            movement: None,
        }
    }

    pub fn with_contacts(mut self, contacts: ContactTable) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_movement(mut self, movement: MovementBehavior) -> Self {
        self.movement = Some(movement);
        self.traits = self.traits.with(TraitSet::STEERABLE);
        self
    }

    pub fn with_traits(mut self, traits: TraitSet) -> Self {
        self.traits = self.traits.with(traits);
        self
    }
}
