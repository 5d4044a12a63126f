/*
 * World Module
 *
 * This module defines the WorldBounds struct describing the simulation plane.
 * The bounds are supplied by the embedding application (window size or an
 * abstract extent) at flock construction time and stay fixed for the
 * simulation's lifetime. Positions live in [0, width) x [0, height).
 */

use crate::vector::Vector2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct WorldBounds {
    pub width: f64,
    pub height: f64,
}

impl WorldBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    // Uniformly random point inside the bounds, used for initial placement
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Vector2 {
        Vector2::new(
            rng.gen_range(0.0..self.width),
            rng.gen_range(0.0..self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_points_fall_inside_bounds() {
        let bounds = WorldBounds::new(640.0, 480.0);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let p = bounds.random_point(&mut rng);
            assert!(p.x >= 0.0 && p.x < bounds.width);
            assert!(p.y >= 0.0 && p.y < bounds.height);
        }
    }
}
