/*
 * Application Module
 *
 * This module defines the main application model and update logic. It is the
 * driver and clock for the simulation core: it owns the window, runs the
 * parameter UI, and calls Flock::step once per frame (uncapped cadence).
 * The simulation core never schedules or draws anything itself.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::params::SimulationParams;
use crate::renderer;
use crate::ui;
use crate::world::WorldBounds;

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Flocking Simulation")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters
    let params = SimulationParams::default();

    // The window is the world: positions live in [0, width) x [0, height)
    let bounds = WorldBounds::new(window_width as f64, window_height as f64);
    let flock = Flock::new(bounds, &params, &mut rand::thread_rng());

    Model {
        flock,
        params,
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Advance the simulation and the UI by one frame
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and detect parameter changes
    let (should_reset_boids, num_boids_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    // Re-seed the population outside of the UI closure
    if should_reset_boids || num_boids_changed {
        model.flock.reset(&model.params, &mut rand::thread_rng());
    }

    // Only step the flock if the simulation is not paused
    if !model.params.pause_simulation {
        model.flock.step(&model.params);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
