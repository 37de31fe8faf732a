//! Camera for the rocket field.
//!
//! A fixed perspective camera on the +z axis looking back at the origin.
//! The pointer mapping in `PointerTarget` assumes this framing.

use std::f32::consts::FRAC_PI_3;

use bevy::prelude::*;

/// Camera distance from the origin along +z.
pub const CAMERA_DISTANCE: f32 = 1000.0;

/// Vertical field of view, radians.
pub const FIELD_OF_VIEW: f32 = FRAC_PI_3;

pub const NEAR_PLANE: f32 = 1.0;
pub const FAR_PLANE: f32 = 10_000.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing the main camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Spawn the main camera with perspective projection.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FIELD_OF_VIEW,
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}
