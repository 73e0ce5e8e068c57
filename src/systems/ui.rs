use bevy::prelude::*;
use bevy_egui::EguiContexts;
use bevy_egui::egui;

use crate::driver::FrameDriver;
use crate::registry::BodyRegistry;
use crate::resources::SimConfig;

/// Read-only panel showing the frame counter and where each body is.
pub fn body_inspector(
    mut contexts: EguiContexts,
    registry: Res<BodyRegistry>,
    driver: Res<FrameDriver>,
    config: Res<SimConfig>,
    mut frames_rendered: Local<usize>,
) {
    if *frames_rendered < 5 {
        *frames_rendered += 1;
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        egui::Window::new("Bodies")
            .default_pos(egui::pos2(10.0, 10.0))
            .max_size([340.0, 360.0])
            .vscroll(true)
            .show(ctx, |ui| {
                ui.label(format!("Frame: {}", driver.frames()));
                ui.label(format!("G: {}", config.gravity_constant));
                if let Some(frame) = driver.first_non_finite() {
                    ui.colored_label(
                        egui::Color32::LIGHT_RED,
                        format!("Non-finite state since frame {frame}"),
                    );
                }

                ui.separator();
                egui::Grid::new("bodies").striped(true).show(ui, |ui| {
                    ui.strong("Body");
                    ui.strong("Position");
                    ui.strong("Drift");
                    ui.strong("Orbit");
                    ui.end_row();

                    for body in registry.iter() {
                        let position = body.position();
                        let drift = (position - body.initial_position()).length();
                        let [r, g, b, _] = body.color().to_u8_array();
                        ui.colored_label(egui::Color32::from_rgb(r, g, b), body.name());
                        ui.label(format!("({:.3}, {:.3})", position.x, position.y));
                        ui.label(format!("{drift:.6}"));
                        match body.orbit() {
                            Some(orbit) => ui.label(format!(
                                "r {} / w {}",
                                orbit.distance, orbit.angular_speed
                            )),
                            None => ui.label("central"),
                        };
                        ui.end_row();
                    }
                });
            });
    }
}
