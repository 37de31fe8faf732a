//! Background star field.
//!
//! Stars are placed once at startup and drawn every frame as small white
//! crosses behind the scene.

use bevy::prelude::*;
use rand::Rng;

use crate::stepper::SimulationSet;

/// Number of stars in the field.
pub const STAR_COUNT: usize = 200;

/// Edge length of the cube the stars are scattered in, centered on the origin.
pub const STAR_SPREAD: f32 = 4000.0;

/// Half-width of the cross drawn for one star.
const STAR_SIZE: f32 = 2.0;

/// Plugin providing the star field.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_starfield)
            .add_systems(Update, draw_starfield.in_set(SimulationSet::Present));
    }
}

/// Fixed star positions.
#[derive(Resource, Clone, Debug, Default)]
pub struct Starfield {
    pub stars: Vec<Vec3>,
}

impl Starfield {
    /// Scatter [`STAR_COUNT`] stars uniformly through the spread cube.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let half = STAR_SPREAD / 2.0;
        let stars = (0..STAR_COUNT)
            .map(|_| {
                Vec3::new(
                    rng.random_range(-half..half),
                    rng.random_range(-half..half),
                    rng.random_range(-half..half),
                )
            })
            .collect();

        Self { stars }
    }
}

fn spawn_starfield(mut commands: Commands) {
    let starfield = Starfield::generate(&mut rand::rng());
    info!("Spawned {} background stars", starfield.stars.len());
    commands.insert_resource(starfield);
}

fn draw_starfield(mut gizmos: Gizmos, starfield: Res<Starfield>) {
    let dx = Vec3::new(STAR_SIZE, 0.0, 0.0);
    let dy = Vec3::new(0.0, STAR_SIZE, 0.0);

    for &star in &starfield.stars {
        gizmos.line(star - dx, star + dx, Color::WHITE);
        gizmos.line(star - dy, star + dy, Color::WHITE);
    }
}
