/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting simulation parameters.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether boids should be reset and whether the
// number of boids changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> (bool, bool) {
    let mut should_reset_boids = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Boid Parameters", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range())
                        .text("Number of Boids"),
                );

                if ui.button("Reset Boids").clicked() {
                    should_reset_boids = true;
                }

                ui.add(
                    egui::Slider::new(&mut params.max_speed, SimulationParams::get_speed_range())
                        .text("Initial Speed Spread"),
                );
                ui.add(
                    egui::Slider::new(&mut params.min_speed, SimulationParams::get_speed_range())
                        .text("Cruise Speed"),
                );
            });

            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.alignment_weight, SimulationParams::get_weight_range())
                        .text("Alignment Weight"),
                );
                ui.add(
                    egui::Slider::new(&mut params.cohesion_weight, SimulationParams::get_weight_range())
                        .text("Cohesion Weight"),
                );
                ui.add(
                    egui::Slider::new(&mut params.separation_weight, SimulationParams::get_weight_range())
                        .text("Separation Weight"),
                );
                ui.add(
                    egui::Slider::new(&mut params.perception_radius, SimulationParams::get_radius_range())
                        .text("Perception Radius"),
                );
                ui.add(
                    egui::Slider::new(&mut params.separation_radius, SimulationParams::get_radius_range())
                        .text("Separation Radius"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.min_alignment_dist,
                        SimulationParams::get_radius_range(),
                    )
                    .text("Alignment Inner Cutoff"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.max_acceleration,
                        SimulationParams::get_max_acceleration_range(),
                    )
                    .text("Max Acceleration"),
                );
            });

            ui.collapsing("Separation Variant", |ui| {
                ui.checkbox(&mut params.cap_separation, "Cap Separation Response");
                ui.checkbox(&mut params.average_separation, "Average Over Neighbors");
            });

            ui.separator();

            // Performance metrics
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!(
                "Frame time: {:.2} ms",
                debug_info.frame_time.as_secs_f64() * 1000.0
            ));

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Detect parameter changes
    let (num_boids_changed, _ui_changed) = params.detect_changes();

    (should_reset_boids, num_boids_changed)
}
