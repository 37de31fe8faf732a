//! Pause overlay shown while the stepper is paused.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::stepper::FrameStepper;

use super::icons;

/// Render the overlay and its Resume button.
pub fn pause_overlay_system(mut contexts: EguiContexts, mut stepper: ResMut<FrameStepper>) {
    if !stepper.is_paused() {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut resume = false;

    egui::Window::new("Paused")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .frame(
            egui::Frame::NONE
                .fill(egui::Color32::from_rgba_unmultiplied(10, 10, 20, 220))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::same(24)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Paused")
                        .size(28.0)
                        .color(egui::Color32::WHITE)
                        .strong(),
                );
                ui.add_space(12.0);

                let button = egui::Button::new(
                    egui::RichText::new(format!("{} Resume", icons::PLAY)).size(18.0),
                )
                .min_size(egui::vec2(140.0, 36.0));

                if ui.add(button).on_hover_text("Resume (Esc)").clicked() {
                    resume = true;
                }
            });
        });

    if resume {
        stepper.set_paused(false);
    }
}
