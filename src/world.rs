//! The simulation world: entity storage plus the greedy earliest-event
//! time-stepping loop that drives it.

pub mod dispatch;
pub mod entity;
pub mod store;

use log::{trace, warn};

use crate::collision::contact::EntityContact;
use crate::collision::narrowphase;
use crate::config::{DEFAULT_GRAVITY, SUBSTEP_WARN_THRESHOLD};
use crate::core::units::{
    meters_per_squared_second, MetersPerSquaredSecond, Quantity, Seconds,
};
use crate::dynamics::motion::{apply_dampening, apply_gravity, integrate_position};
use crate::dynamics::steering::apply_steering;
use crate::events::DomainEvent;
use crate::utils::logging::ScopedTimer;

use dispatch::{apply_contact_reactions, can_collide};
use entity::{Entity, EntityId};
use store::EntityStore;

/// Single-threaded simulation container. One [`advance`](World::advance) call
/// per external tick runs to completion before returning; there is no
/// suspension and no I/O anywhere below it.
pub struct World {
    pub entities: EntityStore,
    gravity: Quantity<MetersPerSquaredSecond>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: EntityStore::new(),
            gravity: meters_per_squared_second(DEFAULT_GRAVITY),
        }
    }

    /// A world with a custom downward gravity magnitude; zero disables
    /// gravity entirely.
    pub fn with_gravity(gravity: Quantity<MetersPerSquaredSecond>) -> Self {
        Self {
            entities: EntityStore::new(),
            gravity,
        }
    }

    pub fn gravity(&self) -> Quantity<MetersPerSquaredSecond> {
        self.gravity
    }

    pub fn add(&mut self, entity: Entity) -> EntityId {
        self.entities.insert(entity)
    }

    /// Advances the whole scene by `dt`: steering intents, ambient forces,
    /// then collision-aware movement. Returns every domain event raised by
    /// contact reactions, in chronological order.
    pub fn advance(&mut self, dt: Quantity<Seconds>) -> Vec<DomainEvent> {
        let _timer = ScopedTimer::new("world::advance");
        for entity in self.entities.iter_mut() {
            if let Some(movement) = entity.movement {
                apply_steering(&mut entity.body, &movement, dt);
            }
            apply_gravity(&mut entity.body, self.gravity, dt);
            apply_dampening(&mut entity.body, dt);
        }
        self.move_with_collisions(dt)
    }

    /// Greedy earliest-event sub-stepping: repeatedly advance *every* entity
    /// to the next impact inside the remaining budget, react, and continue
    /// with the leftover time. Keeping all entities synchronized at each
    /// event means no entity is ever observed at a stale position relative to
    /// another within the tick.
    fn move_with_collisions(&mut self, duration: Quantity<Seconds>) -> Vec<DomainEvent> {
        let mut remaining = duration;
        let mut events = Vec::new();
        let mut substeps: u32 = 0;

        while remaining > Quantity::ZERO {
            let Some(hit) = self.earliest_contact(remaining) else {
                self.move_all(remaining);
                break;
            };

            let step = hit.contact.time_to_impact;
            trace!(
                "substep {substeps}: contact between {} and {} after {:?}",
                hit.between.0,
                hit.between.1,
                step
            );
            self.move_all(step);
            events.extend(apply_contact_reactions(&hit, &mut self.entities));

            remaining = (remaining - step).max(Quantity::ZERO);
            substeps += 1;
            if substeps == SUBSTEP_WARN_THRESHOLD {
                warn!(
                    "tick degenerated into {substeps} substeps with {:?} left",
                    remaining
                );
            }
        }

        events
    }

    fn move_all(&mut self, dt: Quantity<Seconds>) {
        for entity in self.entities.iter_mut() {
            integrate_position(&mut entity.body, dt);
        }
    }

    /// Scans every distinct consenting pair and returns the contact with the
    /// smallest time-to-impact within `budget`. Exact ties keep the first
    /// pair in id order.
    fn earliest_contact(&self, budget: Quantity<Seconds>) -> Option<EntityContact> {
        let mut earliest: Option<EntityContact> = None;

        let entities: Vec<&Entity> = self.entities.iter().collect();
        for (position, entity_a) in entities.iter().enumerate() {
            for entity_b in &entities[position + 1..] {
                if !can_collide(entity_a, entity_b) {
                    continue;
                }
                let Some(contact) = narrowphase::detect(&entity_a.body, &entity_b.body, budget)
                else {
                    continue;
                };

                let is_earlier = earliest
                    .map(|found| contact.time_to_impact < found.contact.time_to_impact)
                    .unwrap_or(true);
                if is_earlier {
                    earliest = Some(EntityContact {
                        contact,
                        between: (entity_a.id, entity_b.id),
                    });
                }
            }
        }

        earliest
    }
}
