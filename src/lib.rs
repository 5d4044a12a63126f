/*
 * Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation crate.
 * The core (vector, boid, steering, flock, params, world) is pure simulation
 * state with no rendering or timing of its own; the app, renderer, and ui
 * modules form the nannou collaborator layer that drives and displays it.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use flock::Flock;
pub use params::SimulationParams;
pub use vector::Vector2;
pub use world::WorldBounds;

// Define modules
pub mod boid;
pub mod flock;
pub mod params;
pub mod steering;
pub mod vector;
pub mod world;

pub mod app;
pub mod debug;
pub mod renderer;
pub mod ui;

// Constants
pub const BOID_SIZE: f32 = 6.0;
