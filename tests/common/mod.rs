//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use rocket_field::config::{ControlParams, SimulationConfig};
use rocket_field::types::PointerTarget;
use rocket_field::world::{FrameInput, SimulationWorld};

/// Seeded world with custom pool sizes.
pub fn world_with_pools(seed: u64, asteroids: usize, comets: usize) -> SimulationWorld {
    let config = SimulationConfig {
        asteroid_count: asteroids,
        comet_count: comets,
        ..SimulationConfig::seeded(seed)
    };
    SimulationWorld::new(config).expect("valid pool sizes")
}

/// Seeded default scene.
pub fn default_world(seed: u64) -> SimulationWorld {
    SimulationWorld::new(SimulationConfig::seeded(seed)).expect("default config is valid")
}

/// Frame input with the pointer at normalized `(x, y)` and default controls.
pub fn frame(x: f64, y: f64, delta: f64) -> FrameInput {
    FrameInput {
        delta,
        pointer: PointerTarget::new(x, y),
        params: ControlParams::default(),
    }
}

/// Overwrite a pooled body's position and velocity.
pub fn place_body(world: &mut SimulationWorld, slot: usize, position: DVec3, velocity: DVec3) {
    let body = &mut world.free_bodies_mut()[slot];
    body.position = position;
    body.velocity = velocity;
}
