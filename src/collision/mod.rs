//! Collision handling: swept narrow-phase detection and contact resolution.

pub mod contact;
pub mod narrowphase;
pub mod resolution;

pub use contact::{Contact, EntityContact};
pub use narrowphase::detect;
pub use resolution::{sphere_bounce_velocity, static_triangle_bounce_velocity};
