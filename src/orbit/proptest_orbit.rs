//! Property-based tests for the orbit solver using proptest.
//!
//! These tests verify geometric invariants across a wide range of orbital parameters.

use std::f64::consts::TAU;

use bevy::math::DVec3;
use proptest::prelude::*;

use super::{OrbitalParameters, solve_position};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A circular orbit keeps its distance from the focus at every phase.
    #[test]
    fn prop_circular_radius_invariant(
        radius in 1.0f64..5000.0,
        inclination in -3.2f64..3.2,
        angle in -100.0f64..100.0,
        fx in -2000.0f64..2000.0,
        fy in -2000.0f64..2000.0,
        fz in -2000.0f64..2000.0,
    ) {
        let focus = DVec3::new(fx, fy, fz);
        let params = OrbitalParameters::circular(radius, inclination, 10.0);
        let distance = (solve_position(focus, &params, angle) - focus).length();

        prop_assert!(
            (distance - radius).abs() < 1e-9 * radius.max(1.0) * 10.0,
            "distance {} differs from radius {}", distance, radius
        );
    }

    /// Adding a full turn to the phase lands on the same point.
    #[test]
    fn prop_position_is_periodic(
        semi_major_axis in 1.0f64..5000.0,
        eccentricity in 0.0f64..0.9,
        inclination in -3.2f64..3.2,
        angle in -50.0f64..50.0,
    ) {
        let params = OrbitalParameters {
            semi_major_axis,
            eccentricity,
            inclination,
            orbital_period: 10.0,
        };

        let a = solve_position(DVec3::ZERO, &params, angle);
        let b = solve_position(DVec3::ZERO, &params, angle + TAU);
        let tolerance = 1e-7 * semi_major_axis / (1.0 - eccentricity);

        prop_assert!((a - b).length() < tolerance, "{:?} vs {:?}", a, b);
    }

    /// Every point of an ellipse lies between periapsis and apoapsis.
    #[test]
    fn prop_radius_between_apsides(
        semi_major_axis in 1.0f64..5000.0,
        eccentricity in 0.0f64..0.95,
        angle in -50.0f64..50.0,
    ) {
        let params = OrbitalParameters {
            semi_major_axis,
            eccentricity,
            inclination: 0.0,
            orbital_period: 1.0,
        };
        let r = params.radius_at(angle);
        let periapsis = semi_major_axis * (1.0 - eccentricity);
        let apoapsis = semi_major_axis * (1.0 + eccentricity);
        let slack = 1e-9 * apoapsis;

        prop_assert!(r >= periapsis - slack && r <= apoapsis + slack);
    }
}
