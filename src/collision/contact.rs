//! Contact descriptions produced by the narrow phase.

use crate::core::body::BodyPartId;
use crate::core::units::{Quantity, Seconds};
use crate::core::vector::Position;
use crate::world::entity::EntityId;

/// The earliest touch found between two bodies within a time budget.
///
/// `points` are given relative to the involved part's own position, in the
/// same order as `between_parts`, which in turn follows the order the bodies
/// were passed to [`detect`](crate::collision::narrowphase::detect).
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub time_to_impact: Quantity<Seconds>,
    pub between_parts: (BodyPartId, BodyPartId),
    pub points: (Position, Position),
}

/// A [`Contact`] lifted to the entity layer by the time-stepping loop.
#[derive(Debug, Clone, Copy)]
pub struct EntityContact {
    pub contact: Contact,
    pub between: (EntityId, EntityId),
}
