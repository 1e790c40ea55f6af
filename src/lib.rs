//! Ricochet – a continuous-collision rigid body core for small 3D scenes.
//!
//! The crate simulates characters, projectiles, and static wall geometry that
//! move, collide, and bounce. Collisions are swept: each tick is consumed in
//! sub-steps up to the next earliest contact, so fast bodies never tunnel and
//! nothing interpenetrates by more than floating-point tolerance. Contact
//! side effects are dispatched through per-kind behavior tables layered on
//! top of the physics primitives.
//!
//! Rendering, input, and asset concerns live in the embedding application;
//! this crate only consumes a duration per tick and hands back the updated
//! entities plus any domain events the contacts raised.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod events;
pub mod utils;
pub mod world;

pub use crate::core::body::{Body, BodyBuilder, BodyError, BodyPart, BodyPartId, Shape};
pub use crate::core::units::{
    kilograms, meters, meters_per_second, meters_per_squared_second, radians, scalar, seconds,
    Quantity,
};
pub use crate::core::vector::{Direction, Position, Vec3, Velocity};

pub use collision::{Contact, EntityContact};
pub use dynamics::MovementBehavior;
pub use events::DomainEvent;
pub use world::dispatch::{ContactBehavior, ContactTable, Reaction};
pub use world::entity::{Entity, EntityId, EntityKind, TraitSet};
pub use world::store::EntityStore;
pub use world::World;
