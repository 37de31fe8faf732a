//! Test utilities for the simulation.
//!
//! Provides fixtures for building deterministic worlds and scripted inputs,
//! and assertions for the geometric invariants the tests check repeatedly.

use std::collections::HashMap;

use bevy::math::DVec3;

use crate::bodies::SpawnParams;
use crate::config::{ControlParams, SimulationConfig};
use crate::types::PointerTarget;
use crate::world::{FrameInput, RenderId, Renderable, SimulationWorld};

/// Fixtures for worlds, inputs and renderer stand-ins.
pub mod fixtures {
    use super::*;

    /// Spawn parameters of the default scene.
    pub fn spawn_params() -> SpawnParams {
        SimulationConfig::default().spawn_params()
    }

    /// Default scene with a fixed seed.
    pub fn world(seed: u64) -> SimulationWorld {
        SimulationWorld::new(SimulationConfig::seeded(seed)).expect("default config is valid")
    }

    /// Scene with custom pool sizes, for tests that place bodies by hand.
    ///
    /// At least one of the counts must be non-zero.
    pub fn quiet_world(seed: u64, asteroids: usize, comets: usize) -> SimulationWorld {
        let config = SimulationConfig {
            asteroid_count: asteroids,
            comet_count: comets,
            ..SimulationConfig::seeded(seed)
        };
        SimulationWorld::new(config).expect("pool sizes are valid")
    }

    /// Centered pointer at default control values.
    pub fn input(delta: f64) -> FrameInput {
        input_towards(0.0, 0.0, delta)
    }

    /// Pointer at normalized `(x, y)` at default control values.
    pub fn input_towards(x: f64, y: f64, delta: f64) -> FrameInput {
        FrameInput {
            delta,
            pointer: PointerTarget::new(x, y),
            params: ControlParams::default(),
        }
    }

    /// Overwrite a pooled body's position and velocity and stop its spin.
    pub fn place_body(world: &mut SimulationWorld, slot: usize, position: DVec3, velocity: DVec3) {
        let body = &mut world.free_bodies_mut()[slot];
        body.position = position;
        body.velocity = velocity;
        body.rotation_speed = DVec3::ZERO;
    }

    /// Renderer stand-in that records what it was handed.
    #[derive(Default, Debug)]
    pub struct RecordingSink {
        pub transforms: HashMap<RenderId, (DVec3, DVec3)>,
        /// Point count and opacity per particle system.
        pub point_clouds: HashMap<RenderId, (usize, f64)>,
    }

    impl Renderable for RecordingSink {
        fn set_transform(&mut self, id: RenderId, position: DVec3, rotation: DVec3) {
            self.transforms.insert(id, (position, rotation));
        }

        fn set_points(&mut self, id: RenderId, points: impl Iterator<Item = DVec3>, opacity: f64) {
            self.point_clouds.insert(id, (points.count(), opacity));
        }
    }
}

/// Assertions for geometric invariants.
pub mod assertions {
    use super::*;

    /// Assert `point` lies within `radius` of `center`, allowing for rounding.
    ///
    /// # Panics
    /// Panics with the offending distance if the point is outside.
    pub fn assert_within_sphere(point: DVec3, center: DVec3, radius: f64) {
        let distance = point.distance(center);
        assert!(
            distance <= radius * (1.0 + 1e-12),
            "point {point:?} is {distance:.6} from {center:?}, outside radius {radius}"
        );
    }

    /// Assert two vectors agree component-wise within `tolerance`.
    pub fn assert_vec_close(actual: DVec3, expected: DVec3, tolerance: f64) {
        assert!(
            (actual - expected).abs().max_element() <= tolerance,
            "expected {expected:?}, got {actual:?} (tolerance {tolerance:e})"
        );
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BodyKind;

    #[test]
    fn test_quiet_world_pool_sizes() {
        let world = fixtures::quiet_world(1, 3, 2);
        assert_eq!(world.registry().count(BodyKind::Asteroid), 3);
        assert_eq!(world.registry().count(BodyKind::Comet), 2);
    }

    #[test]
    fn test_place_body_overrides_state() {
        let mut world = fixtures::quiet_world(2, 1, 0);
        fixtures::place_body(&mut world, 0, DVec3::X, DVec3::Y);

        let body = &world.free_bodies()[0];
        assert_eq!(body.position, DVec3::X);
        assert_eq!(body.velocity, DVec3::Y);
        assert_eq!(body.rotation_speed, DVec3::ZERO);
    }

    #[test]
    fn test_same_seed_builds_same_world() {
        let a = fixtures::world(3);
        let b = fixtures::world(3);
        assert_eq!(a.free_bodies(), b.free_bodies());
    }

    #[test]
    fn test_within_sphere_accepts_boundary() {
        assertions::assert_within_sphere(DVec3::new(3.0, 4.0, 0.0), DVec3::ZERO, 5.0);
    }

    #[test]
    #[should_panic(expected = "outside radius")]
    fn test_within_sphere_rejects_outside() {
        assertions::assert_within_sphere(DVec3::new(3.0, 4.0, 0.1), DVec3::ZERO, 5.0);
    }
}
