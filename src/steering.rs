/*
 * Steering Module
 *
 * This module contains the three local steering rules as pure functions of a
 * boid and a read-only population snapshot:
 * 1. Cohesion: steer towards the average position of perceived neighbors
 * 2. Alignment: steer towards the average velocity of perceived neighbors
 * 3. Separation: steer away from close neighbors, harder the closer they are
 *
 * Every rule falls back to the boid's previous acceleration (not zero) when
 * no neighbor qualifies, which keeps a lone boid turning along its last
 * curve instead of snapping straight.
 */

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::vector::Vector2;

// Per-axis repulsion used by separation when two boids share an exact
// coordinate: the 1/d term has no finite value there, so substitute a large
// finite push instead of dividing by zero
pub const AXIS_OVERLAP_REPULSION: f64 = 1.0e6;

// Steer towards the centroid of all other boids within the perception
// radius; capped to max_acceleration
pub fn cohesion(boid: &Boid, boids: &[Boid], params: &SimulationParams) -> Vector2 {
    let mut avg_position = Vector2::ZERO;
    let mut num_neighbors = 0;

    for other in boids {
        let dist = boid.position.distance(other.position);

        if other.id != boid.id && dist < params.perception_radius {
            avg_position += other.position;
            num_neighbors += 1;
        }
    }

    if num_neighbors > 0 {
        let mut steering = avg_position / num_neighbors as f64 - boid.position;
        steering.cap(params.max_acceleration);
        return steering;
    }

    boid.acceleration
}

// Steer towards the average velocity of other boids in the open distance
// band (min_alignment_dist, perception_radius); capped to max_acceleration.
// The inner cutoff keeps near-overlapping boids from dominating the average.
pub fn alignment(boid: &Boid, boids: &[Boid], params: &SimulationParams) -> Vector2 {
    let mut avg_velocity = Vector2::ZERO;
    let mut num_neighbors = 0;

    for other in boids {
        let dist = boid.position.distance(other.position);

        if other.id != boid.id
            && dist < params.perception_radius
            && dist > params.min_alignment_dist
        {
            avg_velocity += other.velocity;
            num_neighbors += 1;
        }
    }

    if num_neighbors > 0 {
        let mut steering = avg_velocity / num_neighbors as f64 - boid.velocity;
        steering.cap(params.max_acceleration);
        return steering;
    }

    boid.acceleration
}

// Steer away from every other boid within the separation radius by
// accumulating the per-axis reciprocal of the offset from neighbor to self.
// Unlike the other two rules the result is a raw sum and is not capped;
// both behaviors are tunable through average_separation and cap_separation.
pub fn separation(boid: &Boid, boids: &[Boid], params: &SimulationParams) -> Vector2 {
    let mut accumulated = Vector2::ZERO;
    let mut num_neighbors = 0;

    for other in boids {
        let dist = boid.position.distance(other.position);

        if other.id != boid.id && dist < params.separation_radius {
            let offset = boid.position - other.position;
            accumulated += Vector2::new(axis_repulsion(offset.x), axis_repulsion(offset.y));
            num_neighbors += 1;
        }
    }

    if num_neighbors > 0 {
        if params.average_separation {
            accumulated = accumulated / num_neighbors as f64;
        }

        let mut steering = accumulated - boid.velocity;
        if params.cap_separation {
            steering.cap(params.max_acceleration);
        }
        return steering;
    }

    boid.acceleration
}

fn axis_repulsion(delta: f64) -> f64 {
    if delta == 0.0 {
        AXIS_OVERLAP_REPULSION
    } else {
        1.0 / delta
    }
}
