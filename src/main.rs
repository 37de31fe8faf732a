//! Rocket Field - real-time orbital scene
//!
//! Steer the rocket with the mouse through a field of asteroids and comets
//! falling around a planet. Escape pauses.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use rocket_field::camera::CameraPlugin;
use rocket_field::config::SimulationConfig;
use rocket_field::input::InputPlugin;
use rocket_field::render::RenderPlugin;
use rocket_field::stepper::SimulationPlugin;
use rocket_field::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Rocket Field".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Simulation first: it owns the resources and system sets the rest use
        .add_plugins(SimulationPlugin {
            config: SimulationConfig::default(),
        })
        .add_plugins((CameraPlugin, InputPlugin, RenderPlugin, UiPlugin))
        .run();
}
