//! Gizmo drawing of the world's solid objects.
//!
//! [`GizmoSink`] receives the world's per-tick state through
//! [`Renderable`] and turns every object into wireframe gizmos.
//! Particle systems go through [`super::effects`].

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::orbit::OrbitingBody;
use crate::types::BodyKind;
use crate::world::{RenderId, Renderable};

use super::effects::draw_point_cloud;

/// Visual radius of the planet. Larger than its impact radius.
pub const PLANET_VISUAL_RADIUS: f32 = 650.0;
pub const ASTEROID_VISUAL_RADIUS: f32 = 20.0;
/// Length of the streak drawn for a comet.
pub const COMET_LENGTH: f32 = 20.0;
/// Length of the rocket from tail to nose.
pub const ROCKET_LENGTH: f32 = 30.0;

/// How a solid object is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyShape {
    /// Wire sphere of the given radius.
    Sphere { radius: f32 },
    /// Line segment centered on the object, oriented by its rotation.
    Needle { length: f32 },
}

/// Visual radius of an orbiting body, by name.
pub fn orbiting_radius(name: &str) -> f32 {
    match name {
        "moon" => 100.0,
        "satellite" => 20.0,
        _ => 40.0,
    }
}

/// Shape and color for a solid object.
///
/// `orbiting` resolves the names of `RenderId::Orbiting` indices.
/// Returns `None` for particle systems and unknown orbit indices.
pub fn body_style(id: RenderId, orbiting: &[OrbitingBody]) -> Option<(BodyShape, Color)> {
    let style = match id {
        RenderId::Planet => (
            BodyShape::Sphere {
                radius: PLANET_VISUAL_RADIUS,
            },
            Color::srgb(0.2, 0.5, 0.8),
        ),
        RenderId::Orbiting(index) => (
            BodyShape::Sphere {
                radius: orbiting_radius(orbiting.get(index)?.name),
            },
            Color::srgb(0.6, 0.6, 0.6),
        ),
        RenderId::Player => (
            BodyShape::Needle {
                length: ROCKET_LENGTH,
            },
            Color::WHITE,
        ),
        RenderId::FreeBody {
            kind: BodyKind::Asteroid,
            ..
        } => (
            BodyShape::Sphere {
                radius: ASTEROID_VISUAL_RADIUS,
            },
            Color::srgb(0.55, 0.45, 0.35),
        ),
        RenderId::FreeBody {
            kind: BodyKind::Comet,
            ..
        } => (
            BodyShape::Needle {
                length: COMET_LENGTH,
            },
            Color::srgb(0.7, 0.9, 1.0),
        ),
        RenderId::Thruster | RenderId::Explosion(_) => return None,
    };
    Some(style)
}

/// Orientation from Euler angles (x, y, z) in radians.
pub fn euler_rotation(rotation: DVec3) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        rotation.x as f32,
        rotation.y as f32,
        rotation.z as f32,
    )
}

/// End points of a needle centered on `center`. Unrotated needles point along +y.
pub fn needle_endpoints(center: Vec3, rotation: Quat, length: f32) -> (Vec3, Vec3) {
    let half = rotation * Vec3::Y * (length * 0.5);
    (center - half, center + half)
}

/// Renderer that draws through Bevy's immediate-mode gizmos.
pub struct GizmoSink<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    orbiting: &'a [OrbitingBody],
}

impl<'a, 'w, 's> GizmoSink<'a, 'w, 's> {
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, orbiting: &'a [OrbitingBody]) -> Self {
        Self { gizmos, orbiting }
    }
}

impl Renderable for GizmoSink<'_, '_, '_> {
    fn set_transform(&mut self, id: RenderId, position: DVec3, rotation: DVec3) {
        let Some((shape, color)) = body_style(id, self.orbiting) else {
            return;
        };

        let center = position.as_vec3();
        let rotation = euler_rotation(rotation);

        match shape {
            BodyShape::Sphere { radius } => {
                self.gizmos
                    .sphere(Isometry3d::new(center, rotation), radius, color);
            }
            BodyShape::Needle { length } => {
                let (tail, nose) = needle_endpoints(center, rotation, length);
                self.gizmos.line(tail, nose, color);
            }
        }
    }

    fn set_points(&mut self, id: RenderId, points: impl Iterator<Item = DVec3>, opacity: f64) {
        draw_point_cloud(self.gizmos, id, points, opacity as f32);
    }
}
