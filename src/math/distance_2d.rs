use super::Point;

/// Unsigned angle between two vectors in radians, in `[0, π]`.
///
/// Returns `π / 2` when either vector has zero length.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn angle_between(a: Point, b: Point) -> f64 {
    let la = a.length();
    let lb = b.length();
    if la == 0.0 || lb == 0.0 {
        return std::f64::consts::FRAC_PI_2;
    }
    (a.dot(b) as f64 / (la * lb)).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn angles() {
        assert!((angle_between(Point::new(1, 0), Point::new(0, 5)) - FRAC_PI_2).abs() < 1e-12);
        assert!((angle_between(Point::new(1, 0), Point::new(-3, 0)) - PI).abs() < 1e-12);
        assert!((angle_between(Point::new(0, 0), Point::new(-3, 0)) - FRAC_PI_2).abs() < 1e-12);
    }
}
