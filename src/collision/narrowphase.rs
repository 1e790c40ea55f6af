//! Swept (continuous) narrow-phase tests between body parts.
//!
//! Both tests work in the reference frame of the second body: its velocity is
//! subtracted from the first body's, and it is treated as stationary for the
//! rest of the sweep. A zero relative velocity is reported as "no contact"
//! even for already-overlapping parts -- there is no translation vector to
//! sweep along, and nothing will change within the budget that the caller's
//! next pass would not see identically.
//!
//! Every rejection branch is a necessary condition; reordering them changes
//! performance but never the outcome.
//!
//! Sphere-sphere sweep after the classic pool-hall derivation:
//! <https://www.gamasutra.com/view/feature/131424/pool_hall_lessons_fast_accurate_.php>

use crate::core::body::{Body, BodyPart, Shape};
use crate::core::units::{meters, scalar, Quantity, Seconds};
use crate::core::vector::Position;

use super::contact::Contact;

/// Earliest contact between any part pair of the two bodies within
/// `[0, duration]`, or `None` when nothing touches. Exact ties keep the first
/// pair in part-index iteration order.
///
/// # Panics
///
/// Panics on a part pairing with no sweep routine (triangle against triangle):
/// such a pair is a construction-time contract violation, not a runtime
/// condition.
pub fn detect(body_a: &Body, body_b: &Body, duration: Quantity<Seconds>) -> Option<Contact> {
    let mut earliest: Option<Contact> = None;

    for (i, part_a) in body_a.parts.iter().enumerate() {
        for (k, part_b) in body_b.parts.iter().enumerate() {
            let swept = match (&part_a.shape, &part_b.shape) {
                (Shape::Sphere { .. }, Shape::Sphere { .. }) => {
                    sweep_spheres(body_a, part_a, body_b, part_b, duration)
                }
                (Shape::Sphere { .. }, Shape::Triangle { .. }) => {
                    sweep_sphere_triangle(body_a, part_a, body_b, part_b, duration)
                }
                (Shape::Triangle { .. }, Shape::Sphere { .. }) => {
                    // Run the sphere-first routine, then restore body order.
                    sweep_sphere_triangle(body_b, part_b, body_a, part_a, duration)
                        .map(|(time, (sphere_point, triangle_point))| {
                            (time, (triangle_point, sphere_point))
                        })
                }
                (Shape::Triangle { .. }, Shape::Triangle { .. }) => {
                    panic!("no sweep routine for a triangle-triangle part pair")
                }
            };

            let Some((time_to_impact, points)) = swept else {
                continue;
            };
            let is_earlier = earliest
                .map(|found| time_to_impact < found.time_to_impact)
                .unwrap_or(true);
            if is_earlier {
                earliest = Some(Contact {
                    time_to_impact,
                    between_parts: (i, k),
                    points,
                });
            }
        }
    }

    earliest
}

type Sweep = Option<(Quantity<Seconds>, (Position, Position))>;

fn sweep_spheres(
    body_a: &Body,
    part_a: &BodyPart,
    body_b: &Body,
    part_b: &BodyPart,
    duration: Quantity<Seconds>,
) -> Sweep {
    let (Shape::Sphere { radius: radius_a }, Shape::Sphere { radius: radius_b }) =
        (&part_a.shape, &part_b.shape)
    else {
        return None;
    };

    // Reference frame of B: all relative motion belongs to A.
    let relative_velocity = body_a.velocity - body_b.velocity;
    if relative_velocity.is_zero() {
        return None;
    }

    let moving_center = part_a.center(body_a.position);
    let fixed_center = part_b.center(body_b.position);
    let radius_sum = *radius_a + *radius_b;
    let towards = fixed_center - moving_center;
    let translation = relative_velocity * duration;

    // The gap cannot be closed within the budget. A negative gap (already
    // overlapping) passes through and resolves to a time near zero below.
    let gap = towards.length() - radius_sum;
    if gap.squared() >= translation.length_squared() {
        return None;
    }

    // Moving away from (or parallel to) the other center.
    let approach = translation.normalize().dot(towards);
    if approach <= meters(0.0) {
        return None;
    }

    // Closest-approach distance along the path misses the combined radius.
    let radius_sum_sq = radius_sum.squared();
    let closest_sq = towards.length().squared() - approach.squared();
    if closest_sq >= radius_sum_sq {
        return None;
    }

    let reach_sq = radius_sum_sq - closest_sq;
    if reach_sq < Quantity::ZERO {
        return None;
    }

    // Touch happens beyond what this budget lets the part travel.
    let distance_till_collision = approach - reach_sq.sqrt();
    let translation_distance = translation.length();
    if translation_distance < distance_till_collision {
        return None;
    }

    let fraction = distance_till_collision / translation_distance;
    // The fraction applies equally to both bodies' own translations, so the
    // impact time can be recovered from either one that actually moves; body
    // A's frame is preferred when both do.
    let time_to_impact = if !body_a.velocity.is_zero() {
        (body_a.velocity * duration).length() * fraction / body_a.velocity.length()
    } else {
        (body_b.velocity * duration).length() * fraction / body_b.velocity.length()
    };

    let normal = towards.normalize();
    Some((
        time_to_impact,
        (normal * *radius_a, -(normal * *radius_b)),
    ))
}

fn sweep_sphere_triangle(
    sphere_body: &Body,
    sphere_part: &BodyPart,
    triangle_body: &Body,
    triangle_part: &BodyPart,
    duration: Quantity<Seconds>,
) -> Sweep {
    let Shape::Sphere { radius } = &sphere_part.shape else {
        return None;
    };
    let Shape::Triangle { p1, p2, p3 } = &triangle_part.shape else {
        return None;
    };

    let relative_velocity = sphere_body.velocity - triangle_body.velocity;
    if relative_velocity.is_zero() {
        return None;
    }

    let triangle_origin = triangle_part.center(triangle_body.position);
    let p1 = triangle_origin + *p1;
    let p2 = triangle_origin + *p2;
    let p3 = triangle_origin + *p3;
    let ab = p2 - p1;
    let ac = p3 - p1;
    let normal = ab.cross(ac).normalize();

    // One-sided: only count motion into the front face.
    let translation = relative_velocity * duration;
    let approach = translation.normalize().dot(-normal);
    if approach <= scalar(0.0) {
        return None;
    }

    // Sweep the sphere surface point nearest the plane along the translation
    // and intersect that segment with the triangle's plane.
    let sphere_center = sphere_part.center(sphere_body.position);
    let contact_on_sphere = sphere_center - normal * *radius;

    let plane_normal = ab.cross(ac);
    let plane_crossing = plane_normal.dot(translation);
    let t = (plane_normal.dot(p1) - plane_normal.dot(contact_on_sphere)) / plane_crossing;
    let intersection = contact_on_sphere + translation * t;

    let travel = intersection.distance(contact_on_sphere);
    let translation_distance = translation.length();
    if travel >= translation_distance {
        return None;
    }

    // Barycentric test: the plane hit must land inside the triangle.
    let to_hit = intersection - p1;
    let d00 = ab.dot(ab);
    let d01 = ab.dot(ac);
    let d11 = ac.dot(ac);
    let d20 = to_hit.dot(ab);
    let d21 = to_hit.dot(ac);
    let denom = d00 * d11 - d01 * d01;
    let gamma = (d11 * d20 - d01 * d21) / denom;
    let beta = (d00 * d21 - d01 * d20) / denom;
    let alpha = scalar(1.0) - gamma - beta;
    let inside = |w: Quantity<crate::core::units::Scalar>| scalar(0.0) <= w && w <= scalar(1.0);
    if !(inside(alpha) && inside(beta) && inside(gamma)) {
        return None;
    }

    let time_to_impact = travel * duration / translation_distance;
    Some((
        time_to_impact,
        (
            contact_on_sphere - sphere_center,
            intersection - triangle_origin,
        ),
    ))
}
