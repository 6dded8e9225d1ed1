use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use super::Coord;

/// A point (or displacement) on the fixed-point grid.
///
/// Equality is exact; there is no tolerance built into the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Dot product, widened so that grid-sized inputs cannot overflow.
    #[must_use]
    pub fn dot(self, other: Self) -> i128 {
        i128::from(self.x) * i128::from(other.x) + i128::from(self.y) * i128::from(other.y)
    }

    /// Z component of the 2D cross product `self × other`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    #[must_use]
    pub fn cross(self, other: Self) -> i128 {
        i128::from(self.x) * i128::from(other.y) - i128::from(self.y) * i128::from(other.x)
    }

    /// Squared Euclidean length.
    #[must_use]
    pub fn length_squared(self) -> i128 {
        self.dot(self)
    }

    /// Euclidean length.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn length(self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Rotates this vector counter-clockwise by `angle` radians around the
    /// origin, rounding the result back onto the grid.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let x = self.x as f64;
        let y = self.y as f64;
        Self::from_f64(x * cos - y * sin, x * sin + y * cos)
    }

    /// Rotates this vector by exactly 90 degrees counter-clockwise.
    #[must_use]
    pub fn turn_90_ccw(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Returns a vector with the direction of `self` and the given length.
    ///
    /// A zero vector stays zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn normal(self, len: f64) -> Self {
        let current = self.length();
        if current == 0.0 {
            return self;
        }
        let factor = len / current;
        Self::from_f64(self.x as f64 * factor, self.y as f64 * factor)
    }

    /// Scales both coordinates by a floating-point factor, rounding to the grid.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn scaled(self, factor: f64) -> Self {
        Self::from_f64(self.x as f64 * factor, self.y as f64 * factor)
    }

    /// Rounds floating-point coordinates to the nearest grid point.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self::new(x.round() as Coord, y.round() as Coord)
    }

    /// Returns the coordinates as `[x, y]` floats.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> [f64; 2] {
        [self.x as f64, self.y as f64]
    }
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

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<Coord> for Point {
    type Output = Self;

    fn mul(self, rhs: Coord) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(Coord, Coord)> for Point {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn dot_and_cross() {
        let a = Point::new(3, 0);
        let b = Point::new(0, 4);
        assert_eq!(a.dot(b), 0);
        assert_eq!(a.cross(b), 12);
        assert_eq!(b.cross(a), -12);
    }

    #[test]
    fn length_of_pythagorean_triple() {
        let v = Point::new(3, 4);
        assert_eq!(v.length_squared(), 25);
        assert!((v.length() - 5.0).abs() < 1e-12);
        assert!((Point::new(1, 1).distance(Point::new(4, 5)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn rotate_quarter_turn_matches_turn_90() {
        let v = Point::new(1000, 250);
        assert_eq!(v.rotate(FRAC_PI_2), v.turn_90_ccw());
    }

    #[test]
    fn normal_rescales_direction() {
        let v = Point::new(300, 400).normal(10.0);
        assert_eq!(v, Point::new(6, 8));
        assert_eq!(Point::default().normal(10.0), Point::default());
    }

    #[test]
    fn large_coordinates_do_not_overflow_products() {
        let big = Point::new(i64::from(i32::MAX) * 4, i64::from(i32::MAX) * 4);
        assert!(big.dot(big) > 0);
        assert_eq!(big.cross(big), 0);
    }

    #[test]
    fn operators() {
        let mut p = Point::new(1, 2) + Point::new(3, 4);
        assert_eq!(p, Point::new(4, 6));
        p -= Point::new(1, 1);
        assert_eq!(p, Point::new(3, 5));
        assert_eq!(-p * 2, Point::new(-6, -10));
    }
}
