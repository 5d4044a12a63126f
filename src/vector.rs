/*
 * Vector Module
 *
 * This module defines the Vector2 value type used throughout the simulation.
 * Arithmetic operations return new vectors; the normalize family (normalize,
 * cap, bottle) rescales the receiver in place.
 */

use std::ops::{Add, AddAssign, Div, Mul, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    // Heading angle in radians, in (-pi, pi]
    pub fn argument(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn distance(&self, other: Vector2) -> f64 {
        (other - *self).magnitude()
    }

    // Rescale in place so the magnitude becomes exactly `length`.
    // A zero vector has no direction to scale along, so it is left unchanged
    // rather than producing NaN from the division.
    pub fn normalize(&mut self, length: f64) {
        let mag = self.magnitude();
        if mag > 0.0 {
            self.x *= length / mag;
            self.y *= length / mag;
        }
    }

    // Clamp the magnitude down to at most `length`
    pub fn cap(&mut self, length: f64) {
        if self.magnitude() > length {
            self.normalize(length);
        }
    }

    // Clamp the magnitude up to at least `length`
    pub fn bottle(&mut self, length: f64) {
        if self.magnitude() < length {
            self.normalize(length);
        }
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Vector2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x / scalar, self.y / scalar)
    }
}
