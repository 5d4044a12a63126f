/*
 * Flock Module
 *
 * This module owns the boid population and drives one simulation step. The
 * update policy is deliberately interleaved: each boid recomputes its
 * acceleration from the live population and integrates before the next boid
 * is visited, so later boids in iteration order observe the same-step state
 * of earlier boids. A barrier model (compute all, then integrate all)
 * produces different emergent dynamics.
 */

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::world::WorldBounds;
use rand::Rng;

pub struct Flock {
    boids: Vec<Boid>,
    bounds: WorldBounds,
}

impl Flock {
    // Spawn num_boids at random positions with random headings
    pub fn new<R: Rng>(bounds: WorldBounds, params: &SimulationParams, rng: &mut R) -> Self {
        let boids = (0..params.num_boids)
            .map(|id| Boid::new(id, bounds, params, rng))
            .collect();

        Self { boids, bounds }
    }

    // Build a flock from explicit initial state; ids are reassigned from
    // the positions in the sequence
    pub fn from_boids(bounds: WorldBounds, mut boids: Vec<Boid>) -> Self {
        for (id, boid) in boids.iter_mut().enumerate() {
            boid.id = id;
        }

        Self { boids, bounds }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    // Advance the whole flock by one step
    pub fn step(&mut self, params: &SimulationParams) {
        for i in 0..self.boids.len() {
            // Copy out so the rules can scan the full population, self
            // included (rules skip it by id)
            let mut boid = self.boids[i];
            boid.flock(&self.boids, params);
            boid.integrate(self.bounds, params);
            self.boids[i] = boid;
        }
    }

    // Re-randomize the population, resizing it to the current num_boids.
    // Called by the driver when the population size changes or on reset.
    pub fn reset<R: Rng>(&mut self, params: &SimulationParams, rng: &mut R) {
        let bounds = self.bounds;
        self.boids.clear();
        self.boids
            .extend((0..params.num_boids).map(|id| Boid::new(id, bounds, params, rng)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPSILON: f64 = 1e-9;

    fn test_bounds() -> WorldBounds {
        WorldBounds::new(800.0, 600.0)
    }

    fn boid_at(x: f64, y: f64, vx: f64, vy: f64) -> Boid {
        Boid {
            position: Vector2::new(x, y),
            velocity: Vector2::new(vx, vy),
            acceleration: Vector2::ZERO,
            id: 0,
        }
    }

    fn fixed_population() -> Vec<Boid> {
        vec![
            boid_at(100.0, 100.0, 1.0, 0.5),
            boid_at(130.0, 110.0, -0.5, 1.0),
            boid_at(90.0, 140.0, 0.3, -1.2),
            boid_at(400.0, 300.0, -1.0, -1.0),
            boid_at(700.0, 550.0, 1.5, 0.2),
        ]
    }

    #[test]
    fn new_assigns_sequential_ids() {
        let params = SimulationParams::default();
        let mut rng = StdRng::seed_from_u64(3);
        let flock = Flock::new(test_bounds(), &params, &mut rng);

        assert_eq!(flock.boids().len(), params.num_boids);
        for (i, boid) in flock.boids().iter().enumerate() {
            assert_eq!(boid.id, i);
        }
    }

    #[test]
    fn step_holds_every_boid_at_min_speed_inside_bounds() {
        let params = SimulationParams::default();
        let bounds = test_bounds();
        let mut rng = StdRng::seed_from_u64(42);
        let mut flock = Flock::new(bounds, &params, &mut rng);

        for _ in 0..50 {
            flock.step(&params);
            for boid in flock.boids() {
                assert!((boid.velocity.magnitude() - params.min_speed).abs() < 1e-6);
                assert!(boid.position.x >= 0.0 && boid.position.x <= bounds.width);
                assert!(boid.position.y >= 0.0 && boid.position.y <= bounds.height);
            }
        }
    }

    #[test]
    fn step_is_deterministic_from_identical_state() {
        let params = SimulationParams::default();
        let mut a = Flock::from_boids(test_bounds(), fixed_population());
        let mut b = Flock::from_boids(test_bounds(), fixed_population());

        for _ in 0..100 {
            a.step(&params);
            b.step(&params);
        }

        for (x, y) in a.boids().iter().zip(b.boids()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.velocity, y.velocity);
            assert_eq!(x.acceleration, y.acceleration);
        }
    }

    #[test]
    fn later_boids_observe_earlier_boids_same_step_state() {
        let params = SimulationParams::default();

        // Two boids inside each other's perception. Run one interleaved
        // step, then replay boid 1's update by hand against boid 0's
        // already-advanced state: the results must match.
        let initial = vec![boid_at(100.0, 100.0, 1.0, 0.0), boid_at(120.0, 100.0, 0.0, 1.0)];
        let mut flock = Flock::from_boids(test_bounds(), initial.clone());
        flock.step(&params);

        let mut first = initial[0];
        first.id = 0;
        let mut second = initial[1];
        second.id = 1;

        let mut replay_first = first;
        replay_first.flock(&[first, second], &params);
        replay_first.integrate(test_bounds(), &params);

        let mut replay_second = second;
        replay_second.flock(&[replay_first, second], &params);
        replay_second.integrate(test_bounds(), &params);

        let stepped = flock.boids();
        assert!((stepped[1].position.x - replay_second.position.x).abs() < EPSILON);
        assert!((stepped[1].position.y - replay_second.position.y).abs() < EPSILON);
        assert!((stepped[1].velocity.x - replay_second.velocity.x).abs() < EPSILON);
        assert!((stepped[1].velocity.y - replay_second.velocity.y).abs() < EPSILON);
    }

    #[test]
    fn reset_resizes_to_current_num_boids() {
        let mut params = SimulationParams::default();
        let mut rng = StdRng::seed_from_u64(9);
        let mut flock = Flock::new(test_bounds(), &params, &mut rng);

        params.num_boids = 40;
        flock.reset(&params, &mut rng);

        assert_eq!(flock.boids().len(), 40);
        for (i, boid) in flock.boids().iter().enumerate() {
            assert_eq!(boid.id, i);
        }
    }
}
