//! Explicit Euler integration for free bodies.
//!
//! Position advances by `velocity · delta`. Rotation advances by a fixed
//! amount per tick, matching the gravity impulse which is also per tick.

use crate::types::FreeBody;

/// Advance the body's position by one tick of length `delta` seconds.
#[inline]
pub fn integrate_position(body: &mut FreeBody, delta: f64) {
    body.position += body.velocity * delta;
    debug_assert!(body.position.is_finite(), "integration produced a non-finite position");
}

/// Advance the body's rotation by its per-tick rotation speed.
#[inline]
pub fn integrate_rotation(body: &mut FreeBody) {
    body.rotation += body.rotation_speed;
}
