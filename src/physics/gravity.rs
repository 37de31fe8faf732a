//! Gravity field around the planet.
//!
//! The field is a gameplay approximation rather than Newtonian gravity:
//! inside the influence radius each call adds an inverse-square pull toward
//! the planet plus a fixed sideways push that curves falling bodies into
//! rough orbits. Both are added straight to the velocity once per tick.

use bevy::math::DVec3;

use crate::types::FreeBody;

/// Strength of the inverse-square pull (velocity units · distance²).
pub const GRAVITY_STRENGTH: f64 = 100_000.0;

/// Bodies further than this from the planet feel nothing.
pub const INFLUENCE_RADIUS: f64 = 1500.0;

/// Magnitude of the sideways push added alongside the pull.
pub const TANGENTIAL_MAGNITUDE: f64 = 10.0;

/// Squared distance under which no force is applied (avoids the singularity).
const MIN_DISTANCE_SQUARED: f64 = 1.0;

/// Attractive plus circularizing field centered on a massive body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravityField {
    pub strength: f64,
    pub influence_radius: f64,
    pub tangential_magnitude: f64,
}

impl Default for GravityField {
    fn default() -> Self {
        Self {
            strength: GRAVITY_STRENGTH,
            influence_radius: INFLUENCE_RADIUS,
            tangential_magnitude: TANGENTIAL_MAGNITUDE,
        }
    }
}

impl GravityField {
    /// Magnitude of the radial pull at `distance` from the focus.
    #[inline]
    pub fn radial_magnitude(&self, distance: f64) -> f64 {
        self.strength / (distance * distance)
    }

    /// Velocity change a body at `position` receives in one tick.
    ///
    /// # Arguments
    /// * `focus` - Center of the field (planet position)
    /// * `position` - Position of the affected body
    ///
    /// # Returns
    /// The impulse to add to the body's velocity; zero outside the influence radius.
    pub fn impulse(&self, focus: DVec3, position: DVec3) -> DVec3 {
        let delta = focus - position;
        let distance_squared = delta.length_squared();

        if distance_squared <= MIN_DISTANCE_SQUARED {
            return DVec3::ZERO;
        }

        let distance = distance_squared.sqrt();
        if distance >= self.influence_radius {
            return DVec3::ZERO;
        }

        let direction = delta / distance;
        let pull = direction * self.radial_magnitude(distance);

        // Perpendicular to the pull in the x/y plane. Zero when the body sits
        // straight above or below the focus along z.
        let sideways = DVec3::new(-direction.y, direction.x, 0.0).normalize_or_zero()
            * self.tangential_magnitude;

        pull + sideways
    }

    /// Add this tick's impulse to the body's velocity.
    pub fn apply_force(&self, focus: DVec3, body: &mut FreeBody) {
        body.velocity += self.impulse(focus, body.position);
        debug_assert!(body.velocity.is_finite(), "gravity produced a non-finite velocity");
    }
}
