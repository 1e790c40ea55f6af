//! Steering intents: biasing a body's velocity toward a desired direction
//! without exceeding its behavior's top speed.

use serde::{Deserialize, Serialize};

use crate::core::body::Body;
use crate::core::units::{MetersPerSecond, MetersPerSquaredSecond, Quantity, Seconds};
use crate::core::vector::{Direction, Vec3, Velocity};
use crate::dynamics::motion::accelerate;

/// A movement intent, independent of physics resolution. Consumed once per
/// tick to push the owning body toward `direction`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MovementBehavior {
    /// Desired heading; the zero vector means "do not accelerate".
    pub direction: Direction,
    pub acceleration: Quantity<MetersPerSquaredSecond>,
    pub max_velocity: Quantity<MetersPerSecond>,
}

impl MovementBehavior {
    pub fn stationary(
        acceleration: Quantity<MetersPerSquaredSecond>,
        max_velocity: Quantity<MetersPerSecond>,
    ) -> Self {
        Self {
            direction: Direction::ZERO,
            acceleration,
            max_velocity,
        }
    }

    /// Orders the entity to head in `direction` from the next tick on.
    pub fn steer(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Orders the entity to stop accelerating.
    pub fn halt(&mut self) {
        self.direction = Direction::ZERO;
    }
}

/// Scales a desired acceleration down so that applying it for `dt` cannot push
/// the speed past `max_velocity`. The clamp happens on the predicted velocity,
/// so a body already above the limit is braked back toward it rather than
/// frozen.
pub fn tune_acceleration(
    max_velocity: Quantity<MetersPerSecond>,
    dt: Quantity<Seconds>,
    current_velocity: Velocity,
    desired: Vec3<MetersPerSquaredSecond>,
) -> Vec3<MetersPerSquaredSecond> {
    let predicted = current_velocity + desired * dt;
    (predicted.clamp_length(max_velocity) - current_velocity) / dt
}

/// Consumes the behavior for one tick: tune the intended acceleration against
/// the speed limit, then integrate it.
pub fn apply_steering(body: &mut Body, behavior: &MovementBehavior, dt: Quantity<Seconds>) {
    let desired = behavior.direction * behavior.acceleration;
    let tuned = tune_acceleration(behavior.max_velocity, dt, body.velocity, desired);
    accelerate(body, tuned, dt);
}
