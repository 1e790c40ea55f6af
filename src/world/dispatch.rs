//! Per-kind contact behavior and its dispatch.
//!
//! Each entity carries a [`ContactTable`]: for every kind it knows how to
//! meet, whether the pair collides or overlaps, and which reactions run when
//! it does. A pair interacts only when *both* sides agree; a missing table
//! entry is a standing "no".

use log::debug;

use crate::collision::contact::EntityContact;
use crate::collision::resolution::{sphere_bounce_velocity, static_triangle_bounce_velocity};
use crate::core::body::{Body, BodyPartId, Shape};
use crate::core::vector::Velocity;
use crate::dynamics::motion::halt;
use crate::events::DomainEvent;

use super::entity::{Entity, EntityId, EntityKind};
use super::store::EntityStore;

/// Pure predicate deciding whether two concrete entities interact. Plain
/// function pointers keep the table free of boxed state.
pub type ContactPredicate = fn(&Entity, &Entity) -> bool;

pub fn always(_: &Entity, _: &Entity) -> bool {
    true
}

pub fn never(_: &Entity, _: &Entity) -> bool {
    false
}

/// Side effect run by a [`Reaction::Custom`]; may mutate the store (including
/// spawning) and emit events.
pub type ReactionFn = fn(&EntityContact, EntityId, EntityId, &mut EntityStore) -> Vec<DomainEvent>;

/// A contact side effect, applied to the entity whose table declared it. The
/// first three are the physics responses; `Custom` is the hook for gameplay
/// reactions such as spawning.
#[derive(Debug, Clone, Copy)]
pub enum Reaction {
    /// Elastic response: momentum exchange against another sphere, plane
    /// reflection against a triangle.
    Bounce,
    /// Reflection off the other part's plane regardless of anything else;
    /// a no-op unless the other part is a triangle.
    BounceOffStatic,
    /// Come to a dead stop.
    Stop,
    Custom(ReactionFn),
}

/// How an entity behaves toward one specific opposing kind.
#[derive(Debug, Clone)]
pub struct ContactBehavior {
    pub does_collide: ContactPredicate,
    pub on_collision: Vec<Reaction>,
    pub does_overlap: ContactPredicate,
    pub on_overlap: Vec<Reaction>,
}

impl Default for ContactBehavior {
    fn default() -> Self {
        Self {
            does_collide: never,
            on_collision: Vec::new(),
            does_overlap: never,
            on_overlap: Vec::new(),
        }
    }
}

impl ContactBehavior {
    /// Collides unconditionally, running `reactions`; never overlaps.
    pub fn colliding(reactions: Vec<Reaction>) -> Self {
        Self {
            does_collide: always,
            on_collision: reactions,
            ..Self::default()
        }
    }

    /// Overlaps unconditionally, running `reactions`; never collides.
    pub fn overlapping(reactions: Vec<Reaction>) -> Self {
        Self {
            does_overlap: always,
            on_overlap: reactions,
            ..Self::default()
        }
    }
}

/// Fixed per-kind lookup table. Indexed by the opposing entity's kind; an
/// unset slot means the pair never interacts from this side.
#[derive(Debug, Clone, Default)]
pub struct ContactTable {
    entries: [Option<ContactBehavior>; EntityKind::COUNT],
}

impl ContactTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, other_kind: EntityKind, behavior: ContactBehavior) -> Self {
        self.entries[other_kind.index()] = Some(behavior);
        self
    }

    pub fn against(&self, other_kind: EntityKind) -> Option<&ContactBehavior> {
        self.entries[other_kind.index()].as_ref()
    }
}

/// Both sides must independently agree to collide; one-sided consent (or a
/// missing entry on either side) is insufficient.
pub fn can_collide(a: &Entity, b: &Entity) -> bool {
    let Some(a_vs_b) = a.contacts.against(b.kind) else {
        return false;
    };
    let Some(b_vs_a) = b.contacts.against(a.kind) else {
        return false;
    };
    (a_vs_b.does_collide)(a, b) && (b_vs_a.does_collide)(b, a)
}

pub fn can_overlap(a: &Entity, b: &Entity) -> bool {
    let Some(a_vs_b) = a.contacts.against(b.kind) else {
        return false;
    };
    let Some(b_vs_a) = b.contacts.against(a.kind) else {
        return false;
    };
    (a_vs_b.does_overlap)(a, b) && (b_vs_a.does_overlap)(b, a)
}

/// Runs both entities' collision reactions for a detected contact.
///
/// Each side's list is folded left-to-right over the evolving store, first
/// the A-side against B's kind, then the B-side against A's kind; emitted
/// events concatenate in call order. The built-in physics reactions all read
/// the *pre-contact* snapshot of both bodies, so a symmetric pair of `Bounce`
/// entries produces the exact two-body impulse regardless of which side runs
/// first.
pub fn apply_contact_reactions(
    contact: &EntityContact,
    store: &mut EntityStore,
) -> Vec<DomainEvent> {
    let (a_id, b_id) = contact.between;
    let (part_a, part_b) = contact.contact.between_parts;

    let Some(entity_a) = store.get(a_id) else {
        return Vec::new();
    };
    let Some(entity_b) = store.get(b_id) else {
        return Vec::new();
    };
    let snapshot_a = entity_a.body.clone();
    let snapshot_b = entity_b.body.clone();
    let kind_a = entity_a.kind;
    let kind_b = entity_b.kind;

    let mut events = Vec::new();
    run_side(
        contact,
        Side {
            acting: a_id,
            acting_kind: kind_a,
            acting_part: part_a,
            other: b_id,
            other_kind: kind_b,
            other_part: part_b,
        },
        &snapshot_a,
        &snapshot_b,
        store,
        &mut events,
    );
    run_side(
        contact,
        Side {
            acting: b_id,
            acting_kind: kind_b,
            acting_part: part_b,
            other: a_id,
            other_kind: kind_a,
            other_part: part_a,
        },
        &snapshot_b,
        &snapshot_a,
        store,
        &mut events,
    );
    events
}

struct Side {
    acting: EntityId,
    acting_kind: EntityKind,
    acting_part: BodyPartId,
    other: EntityId,
    other_kind: EntityKind,
    other_part: BodyPartId,
}

fn run_side(
    contact: &EntityContact,
    side: Side,
    acting_snapshot: &Body,
    other_snapshot: &Body,
    store: &mut EntityStore,
    events: &mut Vec<DomainEvent>,
) {
    let reactions = match store
        .get(side.acting)
        .and_then(|entity| entity.contacts.against(side.other_kind))
    {
        Some(behavior) => behavior.on_collision.clone(),
        None => return,
    };

    for reaction in reactions {
        debug!(
            "contact reaction {:?}: {} ({:?}) against {} ({:?})",
            reaction, side.acting, side.acting_kind, side.other, side.other_kind
        );
        match reaction {
            Reaction::Bounce => {
                if let Some(velocity) =
                    bounce_velocity(acting_snapshot, side.acting_part, other_snapshot, side.other_part)
                {
                    store.update(side.acting, |entity| entity.body.velocity = velocity);
                }
            }
            Reaction::BounceOffStatic => {
                let other_part = other_snapshot.part(side.other_part);
                if other_part.shape.is_triangle() {
                    let velocity = static_triangle_bounce_velocity(
                        acting_snapshot,
                        other_snapshot,
                        other_part,
                    );
                    store.update(side.acting, |entity| entity.body.velocity = velocity);
                }
            }
            Reaction::Stop => {
                store.update(side.acting, |entity| halt(&mut entity.body));
            }
            Reaction::Custom(run) => {
                events.extend(run(contact, side.acting, side.other, store));
            }
        }
    }
}

/// Picks the physics response for a `Bounce` from the contacted part shapes.
/// A triangle owner never moves, so its side resolves to `None`.
fn bounce_velocity(
    acting: &Body,
    acting_part: BodyPartId,
    other: &Body,
    other_part: BodyPartId,
) -> Option<Velocity> {
    let part = acting.part(acting_part);
    let opposing = other.part(other_part);
    match (&part.shape, &opposing.shape) {
        (Shape::Sphere { .. }, Shape::Sphere { .. }) => {
            Some(sphere_bounce_velocity(acting, part, other, opposing))
        }
        (Shape::Sphere { .. }, Shape::Triangle { .. }) => {
            Some(static_triangle_bounce_velocity(acting, other, opposing))
        }
        _ => None,
    }
}
