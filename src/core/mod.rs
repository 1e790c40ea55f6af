//! Core data model: units of measure, dimensioned vectors, and rigid bodies.

pub mod body;
pub mod units;
pub mod vector;

pub use body::{Body, BodyBuilder, BodyError, BodyPart, BodyPartId, Shape};
pub use units::{Quantity, Unit};
pub use vector::{Direction, Position, Vec3, Velocity};
