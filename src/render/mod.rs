//! Rendering systems for the rocket field.
//!
//! Everything is drawn with gizmos from the stepped world: the world
//! publishes its state into a [`GizmoSink`] once per frame, after the tick.
//! A fixed star field sits behind it.

mod background;
pub mod bodies;
pub mod effects;
mod orbits;

use bevy::prelude::*;

use crate::stepper::SimulationSet;
use crate::world::SimulationWorld;

use self::background::BackgroundPlugin;
use self::orbits::{OrbitPathPlugin, draw_orbit_paths};

pub use self::bodies::GizmoSink;
pub use self::orbits::{OrbitPathSettings, dash_visible, orbit_path};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BackgroundPlugin, OrbitPathPlugin))
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(
                Update,
                (draw_orbit_paths, draw_world).in_set(SimulationSet::Present),
            );
    }
}

/// Publish the world into the gizmo renderer.
fn draw_world(mut gizmos: Gizmos, world: Res<SimulationWorld>) {
    let mut sink = GizmoSink::new(&mut gizmos, world.orbiting_bodies());
    world.publish(&mut sink);
}
