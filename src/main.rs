/*
 * Flocking Simulation
 *
 * This application simulates the emergent flocking behavior of boids based on
 * three local rules:
 * 1. Cohesion: Steer towards the average position of neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Separation: Avoid crowding neighbors
 *
 * Boids move at constant speed on a wrapping plane; the simulation includes
 * interactive sliders to adjust parameters in real-time.
 */

use flocksim::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}
