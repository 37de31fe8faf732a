//! Control panel: the speed, density and frequency sliders.
//!
//! Slider positions live in [`ControlSliders`] and are mapped into
//! [`ControlParams`] whenever one of them moves. The world reads the new
//! values at the end of its next tick.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::{ControlParams, SLIDER_DEFAULT, SLIDER_MAX};
use crate::stepper::FrameStepper;
use crate::world::SimulationWorld;

use super::icons;

/// Colors for the panel.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 230);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const DIM: Color32 = Color32::from_rgb(140, 140, 150);
}

/// Raw slider positions, each in `[0, SLIDER_MAX]`.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ControlSliders {
    pub speed: f64,
    pub density: f64,
    pub frequency: f64,
}

impl Default for ControlSliders {
    fn default() -> Self {
        Self {
            speed: SLIDER_DEFAULT,
            density: SLIDER_DEFAULT,
            frequency: SLIDER_DEFAULT,
        }
    }
}

impl ControlSliders {
    pub fn params(&self) -> ControlParams {
        ControlParams::from_sliders(self.speed, self.density, self.frequency)
    }
}

/// System that renders the control panel in the top-left corner.
pub fn control_panel_system(
    mut contexts: EguiContexts,
    mut sliders: ResMut<ControlSliders>,
    mut params: ResMut<ControlParams>,
    stepper: Res<FrameStepper>,
    world: Res<SimulationWorld>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut edited = *sliders;

    egui::Window::new("controls")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .corner_radius(6.0)
                .inner_margin(egui::Margin::same(12)),
        )
        .show(ctx, |ui| {
            ui.visuals_mut().override_text_color = Some(colors::TEXT);

            slider_row(ui, icons::SPEED, "Speed", &mut edited.speed);
            slider_row(ui, icons::DENSITY, "Density", &mut edited.density);
            slider_row(ui, icons::FREQUENCY, "Frequency", &mut edited.frequency);

            ui.separator();
            render_stats(ui, &world, stepper.is_paused());
        });

    if edited != *sliders {
        *sliders = edited;
        *params = edited.params();
        debug!(
            "Control params: speed {:.2}, density {:.2}, frequency {:.2}",
            params.speed, params.density, params.frequency
        );
    }
}

fn slider_row(ui: &mut egui::Ui, icon: &str, label: &str, value: &mut f64) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon).size(16.0));
        ui.add(
            egui::Slider::new(value, 0.0..=SLIDER_MAX)
                .text(label)
                .fixed_decimals(0),
        );
    });
}

/// Session counters under the sliders.
fn render_stats(ui: &mut egui::Ui, world: &SimulationWorld, paused: bool) {
    let (state_icon, state) = if paused {
        (icons::PAUSE, "paused")
    } else {
        (icons::PLAY, "running")
    };

    ui.label(
        egui::RichText::new(format!(
            "{state_icon} {state}   {} {:.1}s",
            icons::CLOCK,
            world.elapsed()
        ))
        .color(colors::DIM),
    );
    ui.label(
        egui::RichText::new(format!(
            "{} {} bodies   {} {} explosions",
            icons::ASTEROID,
            world.free_bodies().len(),
            icons::EXPLOSION,
            world.explosions().len(),
        ))
        .color(colors::DIM),
    );
}
