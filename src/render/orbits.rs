//! Orbit path rendering using Bevy Gizmos.
//!
//! Paths are sampled from the same solver that places the orbiting bodies,
//! so each body always sits on its drawn curve.

use std::f64::consts::TAU;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::orbit::{OrbitalParameters, solve_position};
use crate::world::SimulationWorld;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>();
    }
}

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    pub visible: bool,
    /// Number of segments per orbit (higher = smoother).
    pub segments: u32,
    pub alpha: f32,
    /// Dash pattern: draw `dash_on` segments, then skip `dash_off`.
    ///
    /// Set to (1, 0) for a solid line.
    pub dash_on: u32,
    pub dash_off: u32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 128,
            alpha: 0.3,
            dash_on: 2,
            dash_off: 3,
        }
    }
}

/// Closed polyline of an orbit: `segments + 1` points, first equal to last.
pub fn orbit_path(focus: DVec3, params: &OrbitalParameters, segments: u32) -> Vec<DVec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = f64::from(i) / f64::from(segments) * TAU;
            solve_position(focus, params, angle)
        })
        .collect()
}

/// Whether segment `index` is drawn under a dash pattern.
pub fn dash_visible(index: u32, on: u32, off: u32) -> bool {
    let on = on.max(1);
    index % (on + off) < on
}

/// Draw the orbit of every orbiting body around the planet.
pub fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    world: Res<SimulationWorld>,
) {
    if !settings.visible {
        return;
    }

    let color = Color::srgba(0.5, 0.5, 0.5, settings.alpha);
    let focus = world.planet().position;

    for body in world.orbiting_bodies() {
        let path = orbit_path(focus, &body.params, settings.segments);
        for (index, pair) in (0u32..).zip(path.windows(2)) {
            if dash_visible(index, settings.dash_on, settings.dash_off) {
                gizmos.line(pair[0].as_vec3(), pair[1].as_vec3(), color);
            }
        }
    }
}
