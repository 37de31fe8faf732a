//! UI module providing the egui-based controls.

mod control_panel;
pub mod icons;
mod pause_overlay;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use control_panel::ControlSliders;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlSliders>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    control_panel::control_panel_system,
                    pause_overlay::pause_overlay_system,
                )
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
