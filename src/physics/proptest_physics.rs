//! Property-based tests for the gravity field using proptest.

use bevy::math::DVec3;
use proptest::prelude::*;

use super::{GravityField, INFLUENCE_RADIUS, advance_free_body};
use crate::types::{BodyKind, FreeBody, PLANET_POSITION};

fn direction() -> impl Strategy<Value = DVec3> {
    (-1.0f64..1.0, -1.0f64..1.0, -1.0f64..1.0)
        .prop_filter("non-degenerate direction", |(x, y, z)| x * x + y * y + z * z > 1e-3)
        .prop_map(|(x, y, z)| DVec3::new(x, y, z).normalize())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Bodies at or beyond the influence radius keep their velocity.
    #[test]
    fn prop_no_impulse_outside_influence(
        dir in direction(),
        extra in 0.0f64..1.0e5,
        vx in -500.0f64..500.0,
        vy in -500.0f64..500.0,
    ) {
        let field = GravityField::default();
        let mut body = FreeBody::at_rest(BodyKind::Comet);
        body.position = PLANET_POSITION + dir * (INFLUENCE_RADIUS + extra);
        body.velocity = DVec3::new(vx, vy, 0.0);

        field.apply_force(PLANET_POSITION, &mut body);
        prop_assert_eq!(body.velocity, DVec3::new(vx, vy, 0.0));
    }

    /// Inside the influence radius the pull toward the planet is stronger
    /// the closer the body is.
    #[test]
    fn prop_radial_pull_monotonic(
        dir in direction(),
        near in 2.0f64..1400.0,
        gap in 1.0f64..100.0,
    ) {
        let field = GravityField::default();
        let far = near + gap;

        let radial = |distance: f64| {
            let impulse = field.impulse(PLANET_POSITION, PLANET_POSITION + dir * distance);
            impulse.dot(-dir)
        };

        prop_assert!(radial(near) > radial(far));
    }

    /// Without gravity, one tick moves a body by exactly `velocity * delta`.
    #[test]
    fn prop_free_flight_is_linear(
        z in 3600.0f64..1.0e4,
        vz in -100.0f64..100.0,
        delta in 0.0f64..0.1,
    ) {
        let mut body = FreeBody::at_rest(BodyKind::Asteroid);
        body.position = DVec3::new(0.0, 0.0, z);
        body.velocity = DVec3::new(0.0, 0.0, vz);

        advance_free_body(&mut body, &GravityField::default(), PLANET_POSITION, delta);
        prop_assert!((body.position.z - (z + vz * delta)).abs() < 1e-9);
    }
}
