/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the flocking simulation. These parameters can be
 * modified through the UI. It also provides methods for parameter change
 * detection and management to improve separation of concerns.
 */

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_boids: usize,
    pub max_speed: f64,
    pub min_speed: f64,
    pub perception_radius: f64,
    pub min_alignment_dist: f64,
    pub separation_radius: f64,
    pub max_acceleration: f64,
    pub alignment_weight: f64,
    pub cohesion_weight: f64,
    pub separation_weight: f64,
    // By default the separation rule is uncapped and sums its neighbor
    // terms without averaging, unlike the other two rules. Flipping these
    // produces the symmetric variant.
    pub cap_separation: bool,
    pub average_separation: bool,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_boids: usize,
    max_speed: f64,
    min_speed: f64,
    perception_radius: f64,
    min_alignment_dist: f64,
    separation_radius: f64,
    max_acceleration: f64,
    alignment_weight: f64,
    cohesion_weight: f64,
    separation_weight: f64,
    cap_separation: bool,
    average_separation: bool,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 150,
            max_speed: 3.0,
            min_speed: 1.7,
            perception_radius: 80.0,
            min_alignment_dist: 5.0,
            separation_radius: 50.0,
            max_acceleration: 0.04,
            alignment_weight: 1.0,
            cohesion_weight: 0.2,
            separation_weight: 1.4,
            cap_separation: false,
            average_separation: false,
            show_debug: false,
            pause_simulation: false,
            // Initialize with no previous values
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_boids: self.num_boids,
            max_speed: self.max_speed,
            min_speed: self.min_speed,
            perception_radius: self.perception_radius,
            min_alignment_dist: self.min_alignment_dist,
            separation_radius: self.separation_radius,
            max_acceleration: self.max_acceleration,
            alignment_weight: self.alignment_weight,
            cohesion_weight: self.cohesion_weight,
            separation_weight: self.separation_weight,
            cap_separation: self.cap_separation,
            average_separation: self.average_separation,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check if any parameters have changed since the last snapshot
    // Returns a tuple of (num_boids_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool) {
        let mut num_boids_changed = false;
        let mut ui_changed = false;

        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            if self.num_boids != prev.num_boids {
                num_boids_changed = true;
                ui_changed = true;
            }

            if self.max_speed != prev.max_speed
                || self.min_speed != prev.min_speed
                || self.perception_radius != prev.perception_radius
                || self.min_alignment_dist != prev.min_alignment_dist
                || self.separation_radius != prev.separation_radius
                || self.max_acceleration != prev.max_acceleration
                || self.alignment_weight != prev.alignment_weight
                || self.cohesion_weight != prev.cohesion_weight
                || self.separation_weight != prev.separation_weight
                || self.cap_separation != prev.cap_separation
                || self.average_separation != prev.average_separation
                || self.show_debug != prev.show_debug
                || self.pause_simulation != prev.pause_simulation
            {
                ui_changed = true;
            }
        }

        (num_boids_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        10..=2000
    }

    pub fn get_speed_range() -> std::ops::RangeInclusive<f64> {
        0.5..=10.0
    }

    pub fn get_weight_range() -> std::ops::RangeInclusive<f64> {
        0.0..=3.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f64> {
        5.0..=200.0
    }

    pub fn get_max_acceleration_range() -> std::ops::RangeInclusive<f64> {
        0.001..=0.5
    }
}
