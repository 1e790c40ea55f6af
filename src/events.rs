//! Domain events surfaced to the embedding application.
//!
//! The loop itself never invents events; it concatenates whatever reactions
//! and spawn calls emit, in the order they ran.

use serde::{Deserialize, Serialize};

use crate::world::entity::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEvent {
    /// A new entity entered the store, e.g. a projectile spawned by a
    /// contact reaction or by setup code.
    EntityAdded { entity: EntityId },
}
