//! Particle and coordinate types.

use std::ops::{Add, AddAssign, Sub};

use crate::color::Rgb;

/// 2D screen coordinate. `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Point {
    /// Creates a new point
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Origin
    pub const ZERO: Self = Self::new(0.0, 0.0);
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// A single "+" glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Current position.
    pub position: Point,
    /// Current radius. Shrinks every tick.
    pub radius: f32,
    /// Color, fixed at spawn.
    pub color: Rgb,
}

impl Particle {
    /// Creates a particle.
    #[must_use]
    pub const fn new(position: Point, radius: f32, color: Rgb) -> Self {
        Self {
            position,
            radius,
            color,
        }
    }

    /// Is this particle alive?
    ///
    /// A radius of exactly zero still counts.
    #[inline]
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.radius >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_radius_is_alive() {
        let mut p = Particle::new(Point::ZERO, 0.0, Rgb::default());
        assert!(p.is_alive());

        p.radius = -0.01;
        assert!(!p.is_alive());
    }

    #[test]
    fn test_point_math() {
        let mut a = Point::new(1.0, 2.0);
        a += Point::new(0.5, -1.0);
        assert_eq!(a, Point::new(1.5, 1.0));
        assert_eq!(a - Point::new(1.5, 1.0), Point::ZERO);
        assert_eq!(Point::from((3.0, 4.0)) + Point::ZERO, Point::new(3.0, 4.0));
    }
}
