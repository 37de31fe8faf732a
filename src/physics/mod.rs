//! Physics for free-flying bodies.
//!
//! One tick of a free body is: gravity impulse, position integration,
//! rotation integration. Bounds and collision checks happen afterwards in
//! the world step, against the freshly integrated position.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::math::DVec3;

pub use gravity::{GRAVITY_STRENGTH, GravityField, INFLUENCE_RADIUS, TANGENTIAL_MAGNITUDE};
pub use integrator::{integrate_position, integrate_rotation};

use crate::types::FreeBody;

/// Move one free body forward by one tick.
///
/// Gravity is applied before integration so the impulse affects this
/// tick's displacement.
pub fn advance_free_body(body: &mut FreeBody, field: &GravityField, focus: DVec3, delta: f64) {
    field.apply_force(focus, body);
    integrate_position(body, delta);
    integrate_rotation(body);
}
