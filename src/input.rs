//! Input handling: pointer tracking for the rocket and the pause key.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::stepper::{FrameStepper, SimulationSet};
use crate::types::PointerTarget;

/// Plugin providing pointer tracking and keyboard shortcuts.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (track_pointer, keyboard_shortcuts).in_set(SimulationSet::Input),
        );
    }
}

/// Store the cursor position in normalized coordinates.
///
/// Keeps the last known target when the cursor leaves the window.
fn track_pointer(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerTarget>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let target = PointerTarget::from_screen(cursor, window.size());
    if *pointer != target {
        *pointer = target;
    }
}

/// Escape: toggle pause.
fn keyboard_shortcuts(keys: Res<ButtonInput<KeyCode>>, mut stepper: ResMut<FrameStepper>) {
    if keys.just_pressed(KeyCode::Escape) {
        stepper.toggle_pause();
    }
}
