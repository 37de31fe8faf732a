//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

pub const PLAY: &str = egui_phosphor::regular::PLAY;
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Speed slider
pub const SPEED: &str = egui_phosphor::regular::GAUGE;
/// Density slider
pub const DENSITY: &str = egui_phosphor::regular::GRID_FOUR;
/// Frequency slider
pub const FREQUENCY: &str = egui_phosphor::regular::WAVEFORM;
pub const ASTEROID: &str = egui_phosphor::regular::ASTERISK;
pub const EXPLOSION: &str = egui_phosphor::regular::SHOOTING_STAR;
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
