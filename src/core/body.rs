//! The physical representation of an entity: a point mass carrying one or
//! more shaped parts at local offsets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::units::{
    meters_per_squared_second, kilograms, Kilograms, Meters, MetersPerSquaredSecond, Quantity,
};
use super::vector::{Position, Velocity};

/// Collision geometry of a single body part, in part-local coordinates.
///
/// Triangles are one-sided: the front face is the one whose outward normal is
/// `(p2 - p1) x (p3 - p1)`; approaches from the back never collide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Shape {
    Sphere {
        radius: Quantity<Meters>,
    },
    Triangle {
        p1: Position,
        p2: Position,
        p3: Position,
    },
}

impl Shape {
    pub fn is_sphere(&self) -> bool {
        matches!(self, Shape::Sphere { .. })
    }

    pub fn is_triangle(&self) -> bool {
        matches!(self, Shape::Triangle { .. })
    }
}

/// Stable zero-based index of a part within its body.
pub type BodyPartId = usize;

/// A shape placed at an offset from the body origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyPart {
    pub shape: Shape,
    pub offset: Position,
}

impl BodyPart {
    pub fn sphere(radius: Quantity<Meters>, offset: Position) -> Self {
        Self {
            shape: Shape::Sphere { radius },
            offset,
        }
    }

    pub fn triangle(p1: Position, p2: Position, p3: Position, offset: Position) -> Self {
        Self {
            shape: Shape::Triangle { p1, p2, p3 },
            offset,
        }
    }

    /// World-space center of this part for a body at `body_position`.
    pub fn center(&self, body_position: Position) -> Position {
        body_position + self.offset
    }
}

/// Rigid body state: kinematics plus the coefficients that drive contact
/// response.
///
/// `mass` must be positive; a very large mass approximates an immovable
/// object. `elasticity` only matters when reflecting off static triangles --
/// sphere-sphere resolution is an exact momentum exchange and ignores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub position: Position,
    pub velocity: Velocity,
    /// Deceleration applied against the motion direction each tick.
    pub dampening: Quantity<MetersPerSquaredSecond>,
    pub mass: Quantity<Kilograms>,
    /// Fraction of the normal velocity component surviving a bounce off
    /// static geometry, in `[0, 1]`.
    pub elasticity: f32,
    pub gravity_applies: bool,
    /// Never empty; enforced by [`BodyBuilder::build`].
    pub parts: Vec<BodyPart>,
}

/// Invariant violations detectable when assembling a [`Body`].
#[derive(Debug, Error, PartialEq)]
pub enum BodyError {
    #[error("a body must carry at least one part")]
    NoParts,
    #[error("mass must be positive, got {0} kg")]
    NonPositiveMass(f32),
    #[error("elasticity must lie in [0, 1], got {0}")]
    ElasticityOutOfRange(f32),
}

impl Body {
    pub fn builder() -> BodyBuilder {
        BodyBuilder::new()
    }

    pub fn part(&self, id: BodyPartId) -> &BodyPart {
        &self.parts[id]
    }
}

/// Builder enforcing the body invariants at construction time.
pub struct BodyBuilder {
    position: Position,
    velocity: Velocity,
    dampening: Quantity<MetersPerSquaredSecond>,
    mass: Quantity<Kilograms>,
    elasticity: f32,
    gravity_applies: bool,
    parts: Vec<BodyPart>,
}

impl Default for BodyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyBuilder {
    pub fn new() -> Self {
        Self {
            position: Position::ZERO,
            velocity: Velocity::ZERO,
            dampening: meters_per_squared_second(0.0),
            mass: kilograms(1.0),
            elasticity: 1.0,
            gravity_applies: false,
            parts: Vec::new(),
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn dampening(mut self, dampening: Quantity<MetersPerSquaredSecond>) -> Self {
        self.dampening = dampening;
        self
    }

    pub fn mass(mut self, mass: Quantity<Kilograms>) -> Self {
        self.mass = mass;
        self
    }

    pub fn elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = elasticity;
        self
    }

    pub fn gravity(mut self, applies: bool) -> Self {
        self.gravity_applies = applies;
        self
    }

    pub fn part(mut self, part: BodyPart) -> Self {
        self.parts.push(part);
        self
    }

    /// Single sphere part centered on the body origin.
    pub fn sphere(self, radius: Quantity<Meters>) -> Self {
        self.part(BodyPart::sphere(radius, Position::ZERO))
    }

    /// A parallelogram wall panel: two triangles sharing the body origin,
    /// spanned by three of its corners. The face whose corners wind
    /// counter-clockwise when viewed from the front is the collidable side.
    pub fn parallelogram(self, left_bottom: Position, left_top: Position, right_top: Position) -> Self {
        let origin = left_bottom;
        self.part(BodyPart::triangle(
            Position::ZERO,
            left_top - origin,
            right_top - origin,
            Position::ZERO,
        ))
        .part(BodyPart::triangle(
            Position::ZERO,
            right_top - origin,
            (right_top - origin) - (left_top - origin),
            Position::ZERO,
        ))
    }

    pub fn build(self) -> Result<Body, BodyError> {
        if self.parts.is_empty() {
            return Err(BodyError::NoParts);
        }
        if self.mass.raw() <= 0.0 {
            return Err(BodyError::NonPositiveMass(self.mass.raw()));
        }
        if !(0.0..=1.0).contains(&self.elasticity) {
            return Err(BodyError::ElasticityOutOfRange(self.elasticity));
        }
        Ok(Body {
            position: self.position,
            velocity: self.velocity,
            dampening: self.dampening,
            mass: self.mass,
            elasticity: self.elasticity,
            gravity_applies: self.gravity_applies,
            parts: self.parts,
        })
    }
}
