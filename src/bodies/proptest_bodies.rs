//! Property-based tests for body recycling using proptest.

use bevy::math::DVec3;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::SpawnParams;
use crate::test_utils::{assertions, fixtures};
use crate::types::{BodyKind, FreeBody};

fn any_kind() -> impl Strategy<Value = BodyKind> {
    prop_oneof![Just(BodyKind::Asteroid), Just(BodyKind::Comet)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Whatever state a body is in, a reset puts it back inside the scene
    /// with a speed from its kind's range.
    #[test]
    fn prop_reset_lands_inside_scene(
        seed in any::<u64>(),
        kind in any_kind(),
        x in -1.0e6f64..1.0e6,
        y in -1.0e6f64..1.0e6,
        z in -1.0e6f64..1.0e6,
    ) {
        let params: SpawnParams = fixtures::spawn_params();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut body = FreeBody::at_rest(kind);
        body.position = DVec3::new(x, y, z);
        body.velocity = DVec3::new(z, x, y);

        params.reset_body(&mut body, &mut rng);

        let range = params.speed_range(kind);
        assertions::assert_within_sphere(body.position, DVec3::ZERO, params.scene_radius);
        prop_assert!(body.speed() >= range.min - 1e-9 && body.speed() <= range.max + 1e-9);
        prop_assert!(!params.check_bounds(&body));
        prop_assert_eq!(body.kind, kind);
    }

    /// The bounds check agrees with the distance from the origin.
    #[test]
    fn prop_bounds_match_distance(
        x in -5000.0f64..5000.0,
        y in -5000.0f64..5000.0,
        z in -5000.0f64..5000.0,
    ) {
        let params = fixtures::spawn_params();
        let mut body = FreeBody::at_rest(BodyKind::Asteroid);
        body.position = DVec3::new(x, y, z);

        prop_assert_eq!(params.check_bounds(&body), body.position.length() > 3000.0);
    }
}
