//! Particle effects: exhaust plume and explosion debris.
//!
//! Each particle is drawn as a small cross, tinted per system and faded by
//! the opacity the world reports.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::world::RenderId;

/// Half-width of the cross drawn for one particle.
const PARTICLE_SIZE: f32 = 1.5;

/// Base color of a particle system at full opacity.
pub fn particle_color(id: RenderId, opacity: f32) -> Color {
    let alpha = opacity.clamp(0.0, 1.0);
    match id {
        RenderId::Thruster => Color::srgba(1.0, 0.6, 0.1, alpha),
        RenderId::Explosion(_) => Color::srgba(1.0, 0.9, 0.3, alpha),
        _ => Color::srgba(1.0, 1.0, 1.0, alpha),
    }
}

/// Draw every point of a particle system.
pub fn draw_point_cloud(
    gizmos: &mut Gizmos,
    id: RenderId,
    points: impl Iterator<Item = DVec3>,
    opacity: f32,
) {
    if opacity <= 0.0 {
        return;
    }

    let color = particle_color(id, opacity);
    let dx = Vec3::new(PARTICLE_SIZE, 0.0, 0.0);
    let dy = Vec3::new(0.0, PARTICLE_SIZE, 0.0);

    for point in points {
        let center = point.as_vec3();
        gizmos.line(center - dx, center + dx, color);
        gizmos.line(center - dy, center + dy, color);
    }
}
