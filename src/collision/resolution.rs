//! Post-contact velocity computation.
//!
//! Both routines are pure: they read pre-contact state and return the outgoing
//! velocity for the first body. Callers that need both sides resolved invoke
//! them twice with the arguments swapped, feeding each call the *original*
//! state of both bodies.

use crate::core::body::{Body, BodyPart, Shape};
use crate::core::units::scalar;
use crate::core::vector::Velocity;

/// Elastic two-body impulse between two sphere parts, projected onto the
/// center-to-center axis. Conserves momentum and kinetic energy exactly for
/// any mass ratio; `elasticity` plays no role here.
pub fn sphere_bounce_velocity(
    body: &Body,
    part: &BodyPart,
    other_body: &Body,
    other_part: &BodyPart,
) -> Velocity {
    debug_assert!(part.shape.is_sphere() && other_part.shape.is_sphere());

    let axis = (other_part.center(other_body.position) - part.center(body.position)).normalize();
    let own_speed = body.velocity.dot(axis);
    let other_speed = other_body.velocity.dot(axis);

    let exchange = scalar(2.0) * (own_speed - other_speed) / (body.mass + other_body.mass);
    body.velocity - axis * (exchange * other_body.mass)
}

/// Reflection of a sphere's velocity about a static triangle's plane normal.
/// The energy surviving the bounce is scaled by the product of both bodies'
/// elasticities; the triangle itself never moves.
pub fn static_triangle_bounce_velocity(
    sphere_body: &Body,
    triangle_body: &Body,
    triangle_part: &BodyPart,
) -> Velocity {
    let Shape::Triangle { p1, p2, p3 } = &triangle_part.shape else {
        return sphere_body.velocity;
    };

    let normal = (*p2 - *p1).cross(*p3 - *p1).normalize();
    let restitution = scalar(sphere_body.elasticity * triangle_body.elasticity);

    let along_normal = normal.dot(sphere_body.velocity) / normal.dot(normal);
    sphere_body.velocity - normal * (restitution * scalar(2.0) * along_normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body::BodyPart;
    use crate::core::units::{kilograms, meters};
    use crate::core::vector::Position;
    use approx::assert_relative_eq;

    fn ball(position: Position, velocity: Velocity, mass: f32, elasticity: f32) -> Body {
        Body::builder()
            .sphere(meters(1.0))
            .at(position)
            .velocity(velocity)
            .mass(kilograms(mass))
            .elasticity(elasticity)
            .build()
            .unwrap()
    }

    fn panel(elasticity: f32) -> Body {
        Body::builder()
            .part(BodyPart::triangle(
                Position::new(0.0, 0.0, 0.0),
                Position::new(0.0, 2.0, 0.0),
                Position::new(2.0, 2.0, 0.0),
                Position::ZERO,
            ))
            .elasticity(elasticity)
            .build()
            .unwrap()
    }

    #[test]
    fn equal_masses_swap_velocities() {
        let a = ball(Position::ZERO, Velocity::new(2.0, 0.0, 0.0), 1.0, 1.0);
        let b = ball(Position::new(2.0, 0.0, 0.0), Velocity::new(-1.0, 0.0, 0.0), 1.0, 1.0);

        let a_out = sphere_bounce_velocity(&a, &a.parts[0], &b, &b.parts[0]);
        let b_out = sphere_bounce_velocity(&b, &b.parts[0], &a, &a.parts[0]);

        assert_relative_eq!(a_out.x().raw(), -1.0, epsilon = 1e-5);
        assert_relative_eq!(b_out.x().raw(), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn momentum_is_conserved_for_any_mass_ratio() {
        let a = ball(Position::ZERO, Velocity::new(3.0, 0.0, 0.0), 0.4, 1.0);
        let b = ball(Position::new(2.0, 0.0, 0.0), Velocity::new(-0.5, 0.0, 0.0), 7.3, 1.0);

        let a_out = sphere_bounce_velocity(&a, &a.parts[0], &b, &b.parts[0]);
        let b_out = sphere_bounce_velocity(&b, &b.parts[0], &a, &a.parts[0]);

        let before = a.velocity * a.mass + b.velocity * b.mass;
        let after = a_out * a.mass + b_out * b.mass;
        assert_relative_eq!(before.x().raw(), after.x().raw(), epsilon = 1e-4);
        assert_relative_eq!(before.y().raw(), after.y().raw(), epsilon = 1e-4);
        assert_relative_eq!(before.z().raw(), after.z().raw(), epsilon = 1e-4);
    }

    #[test]
    fn kinetic_energy_survives_a_sphere_exchange() {
        let a = ball(Position::ZERO, Velocity::new(3.0, 0.0, 0.0), 2.0, 0.2);
        let b = ball(Position::new(2.0, 0.0, 0.0), Velocity::ZERO, 5.0, 0.2);

        let a_out = sphere_bounce_velocity(&a, &a.parts[0], &b, &b.parts[0]);
        let b_out = sphere_bounce_velocity(&b, &b.parts[0], &a, &a.parts[0]);

        let energy = |v: Velocity, m: f32| 0.5 * m * v.length_squared().raw();
        let before = energy(a.velocity, 2.0) + energy(b.velocity, 5.0);
        let after = energy(a_out, 2.0) + energy(b_out, 5.0);
        assert_relative_eq!(before, after, epsilon = 1e-4);
    }

    #[test]
    fn lossless_reflection_mirrors_the_normal_component() {
        let sphere = ball(Position::new(0.5, 0.5, 2.0), Velocity::new(1.0, 0.0, -3.0), 1.0, 1.0);
        let wall = panel(1.0);

        let out = static_triangle_bounce_velocity(&sphere, &wall, &wall.parts[0]);
        assert_relative_eq!(out.x().raw(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(out.z().raw(), 3.0, epsilon = 1e-5);
    }

    #[test]
    fn elasticity_product_controls_the_energy_loss() {
        let sphere = ball(Position::new(0.5, 0.5, 2.0), Velocity::new(0.0, 0.0, -4.0), 1.0, 0.5);
        let wall = panel(1.0);

        let out = static_triangle_bounce_velocity(&sphere, &wall, &wall.parts[0]);
        // v' = v - 0.5 * 2 * v_n: half the normal component survives, flipped.
        assert_relative_eq!(out.z().raw(), 0.0, epsilon = 1e-5);

        let absorbing = panel(0.0);
        let out = static_triangle_bounce_velocity(&sphere, &absorbing, &absorbing.parts[0]);
        assert_relative_eq!(out.z().raw(), -4.0, epsilon = 1e-5);
    }
}
