//! Per-tick motion primitives: translation, dampening, gravity, impulses.
//!
//! These are the only places body kinematics change outside of collision
//! resolution. All of them are plain linear updates; the sub-stepping loop
//! decides how much time each one is given.

use crate::core::body::Body;
use crate::core::units::{MetersPerSecond, MetersPerSquaredSecond, Quantity, Seconds};
use crate::core::vector::{Direction, Vec3, Velocity};

/// Moves the body along its velocity. A zero velocity never changes position,
/// for any duration.
pub fn integrate_position(body: &mut Body, dt: Quantity<Seconds>) {
    body.position = body.position + body.velocity * dt;
}

/// Slows the body against its motion direction. The subtracted speed is capped
/// at the current speed, so dampening stops a body but never reverses it.
pub fn apply_dampening(body: &mut Body, dt: Quantity<Seconds>) {
    let speed_loss = (body.dampening * dt).min(body.velocity.length());
    body.velocity = body.velocity - body.velocity.normalize() * speed_loss;
}

/// Accelerates the body straight down, if gravity applies to it.
pub fn apply_gravity(
    body: &mut Body,
    gravity: Quantity<MetersPerSquaredSecond>,
    dt: Quantity<Seconds>,
) {
    if !body.gravity_applies {
        return;
    }
    let down: Vec3<MetersPerSquaredSecond> = Vec3::new(0.0, -gravity.raw(), 0.0);
    body.velocity = body.velocity + down * dt;
}

/// Adds a discrete velocity change, e.g. a jump.
pub fn apply_impulse(body: &mut Body, impulse: Velocity) {
    body.velocity = body.velocity + impulse;
}

/// Integrates an acceleration into the velocity.
pub fn accelerate(
    body: &mut Body,
    acceleration: Vec3<MetersPerSquaredSecond>,
    dt: Quantity<Seconds>,
) {
    body.velocity = body.velocity + acceleration * dt;
}

/// Points the velocity along `direction` at the given speed.
pub fn set_velocity_toward(body: &mut Body, direction: Direction, speed: Quantity<MetersPerSecond>) {
    body.velocity = direction.normalize() * speed;
}

/// Brings the body to a dead stop.
pub fn halt(body: &mut Body) {
    body.velocity = Velocity::ZERO;
}
