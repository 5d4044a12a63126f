/*
 * Boid Module
 *
 * This module defines the Boid struct and its per-step behavior. Each boid
 * steers by three local rules (cohesion, alignment, separation), combines
 * their contributions into an acceleration, and integrates at constant speed:
 * velocity is renormalized to min_speed after every step, so acceleration
 * only ever changes the heading.
 */

use crate::params::SimulationParams;
use crate::steering;
use crate::vector::Vector2;
use crate::world::WorldBounds;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct Boid {
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
    // Assigned by the flock at construction; identifies the boid to the
    // renderer and excludes it from its own neighbor scans
    pub id: usize,
}

impl Boid {
    pub fn new<R: Rng>(
        id: usize,
        bounds: WorldBounds,
        params: &SimulationParams,
        rng: &mut R,
    ) -> Self {
        // Random heading: each velocity component uniform over
        // (-max_speed/sqrt(2), max_speed/sqrt(2))
        let spread = params.max_speed / std::f64::consts::SQRT_2;

        Self {
            position: bounds.random_point(rng),
            velocity: Vector2::new(rng.gen_range(-spread..spread), rng.gen_range(-spread..spread)),
            acceleration: Vector2::ZERO,
            id,
        }
    }

    // Heading angle in radians for the renderer
    pub fn heading(&self) -> f64 {
        self.velocity.argument()
    }

    // Recompute acceleration from the current population state as a weighted
    // blend of the three steering rules
    pub fn flock(&mut self, boids: &[Boid], params: &SimulationParams) {
        let alignment = steering::alignment(self, boids, params);
        let cohesion = steering::cohesion(self, boids, params);
        let separation = steering::separation(self, boids, params);

        self.acceleration = (alignment * params.alignment_weight
            + cohesion * params.cohesion_weight
            + separation * params.separation_weight)
            / 2.0;
    }

    // Advance one step: move, turn, renormalize speed, wrap at the edges
    pub fn integrate(&mut self, bounds: WorldBounds, params: &SimulationParams) {
        self.position += self.velocity;
        self.velocity += self.acceleration;
        self.velocity.normalize(params.min_speed);

        // Wrap each axis independently: a hard teleport to the opposite
        // edge, not a bounce
        if self.position.x < 0.0 {
            self.position.x = bounds.width;
        }
        if self.position.x > bounds.width {
            self.position.x = 0.0;
        }
        if self.position.y < 0.0 {
            self.position.y = bounds.height;
        }
        if self.position.y > bounds.height {
            self.position.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn test_bounds() -> WorldBounds {
        WorldBounds::new(800.0, 600.0)
    }

    fn boid_at(id: usize, x: f64, y: f64, vx: f64, vy: f64) -> Boid {
        Boid {
            position: Vector2::new(x, y),
            velocity: Vector2::new(vx, vy),
            acceleration: Vector2::ZERO,
            id,
        }
    }

    #[test]
    fn integrate_renormalizes_speed_regardless_of_acceleration() {
        let params = SimulationParams::default();
        let mut boid = boid_at(0, 100.0, 100.0, 2.0, 0.5);
        boid.acceleration = Vector2::new(9.0, -4.0);

        boid.integrate(test_bounds(), &params);

        assert!((boid.velocity.magnitude() - params.min_speed).abs() < EPSILON);
    }

    #[test]
    fn integrate_moves_by_velocity_before_turning() {
        let params = SimulationParams::default();
        let mut boid = boid_at(0, 100.0, 100.0, 2.0, -1.0);
        boid.acceleration = Vector2::new(0.5, 0.5);

        boid.integrate(test_bounds(), &params);

        // Position advances by the pre-update velocity
        assert!((boid.position.x - 102.0).abs() < EPSILON);
        assert!((boid.position.y - 99.0).abs() < EPSILON);
    }

    #[test]
    fn integrate_wraps_past_right_edge_to_small_positive_x() {
        let params = SimulationParams::default();
        let bounds = test_bounds();
        let mut boid = boid_at(0, bounds.width - 0.5, 300.0, 1.0, 0.0);

        boid.integrate(bounds, &params);

        // Crossed the right edge, teleported back to the left
        assert!((boid.position.x - 0.0).abs() < EPSILON);
        assert!(boid.position.x < bounds.width);
    }

    #[test]
    fn integrate_wraps_below_zero_to_opposite_extent() {
        let params = SimulationParams::default();
        let bounds = test_bounds();
        let mut boid = boid_at(0, 250.0, 0.3, 0.0, -1.0);

        boid.integrate(bounds, &params);

        assert!((boid.position.y - bounds.height).abs() < EPSILON);
    }

    #[test]
    fn heading_points_along_velocity() {
        let boid = boid_at(0, 0.0, 0.0, 0.0, 2.0);
        assert!((boid.heading() - std::f64::consts::FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn flock_blends_rules_with_weights_and_halves() {
        let params = SimulationParams::default();
        // A lone boid: every rule falls back to the previous acceleration,
        // so the combine reduces to acceleration * (sum of weights) / 2
        let mut boid = boid_at(0, 400.0, 300.0, 1.0, 0.0);
        boid.acceleration = Vector2::new(0.02, -0.01);
        let population = [boid];

        let expected_scale = (params.alignment_weight
            + params.cohesion_weight
            + params.separation_weight)
            / 2.0;
        let expected = Vector2::new(0.02 * expected_scale, -0.01 * expected_scale);

        boid.flock(&population, &params);

        assert!((boid.acceleration.x - expected.x).abs() < EPSILON);
        assert!((boid.acceleration.y - expected.y).abs() < EPSILON);
    }

    #[test]
    fn new_boids_start_inside_bounds_at_bounded_speed() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let params = SimulationParams::default();
        let bounds = test_bounds();
        let mut rng = StdRng::seed_from_u64(11);

        for id in 0..200 {
            let boid = Boid::new(id, bounds, &params, &mut rng);
            assert!(boid.position.x >= 0.0 && boid.position.x < bounds.width);
            assert!(boid.position.y >= 0.0 && boid.position.y < bounds.height);
            // Component-wise bound implies |velocity| <= max_speed
            assert!(boid.velocity.magnitude() <= params.max_speed + EPSILON);
            assert_eq!(boid.id, id);
        }
    }
}
