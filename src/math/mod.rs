pub mod distance_2d;
pub mod point;
pub mod polygon_2d;

pub use point::Point;

/// Integer grid coordinate. One unit is one micrometer.
pub type Coord = i64;

/// 2x2 linear transform applied to points as column vectors.
pub type PointMatrix = nalgebra::Matrix2<f64>;

/// 3x3 homogeneous affine transform applied to points as `(x, y, 1)`.
pub type Point3Matrix = nalgebra::Matrix3<f64>;

/// Largest coordinate magnitude accepted at the clipping boundary.
///
/// Coordinates travel to the clipping engine as `f64`, which holds integers
/// exactly only below 2^53. This bounds single coordinates; the size of the
/// input as a whole is bounded by [`MAX_CLIP_EXTENT`].
pub const MAX_COORD: Coord = 1 << 50;

/// Largest width or height of the combined input of one clipping call,
/// offset margins included.
///
/// The engine centres its input and rescales it by a power of two onto a
/// 32-bit grid. Below this extent the scale is at least 2, so every integer
/// input point (and every half-unit centre) lands on the engine grid exactly.
pub const MAX_CLIP_EXTENT: Coord = (1 << 30) - 1;

/// Outset used by the approximate convex hull (100 mm).
pub const APPROX_HULL_OVERSHOOT: Coord = 100_000;

/// Radius of the diamonds cut out at coincident vertices by manifold repair.
pub const MANIFOLD_DOT_RADIUS: Coord = 5;

/// Returns the counter-clockwise rotation matrix for `angle` radians.
#[must_use]
pub fn rotation_matrix(angle: f64) -> PointMatrix {
    let (sin, cos) = angle.sin_cos();
    PointMatrix::new(cos, -sin, sin, cos)
}

/// Applies a 2x2 matrix to a grid point, rounding the result.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn apply_point_matrix(matrix: &PointMatrix, p: Point) -> Point {
    let v = matrix * nalgebra::Vector2::new(p.x as f64, p.y as f64);
    Point::from_f64(v.x, v.y)
}

/// Applies a homogeneous 3x3 matrix to a grid point, rounding the result.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn apply_point3_matrix(matrix: &Point3Matrix, p: Point) -> Point {
    let v = matrix * nalgebra::Vector3::new(p.x as f64, p.y as f64, 1.0);
    if v.z == 0.0 || (v.z - 1.0).abs() < f64::EPSILON {
        Point::from_f64(v.x, v.y)
    } else {
        Point::from_f64(v.x / v.z, v.y / v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn rotation_matrix_half_turn() {
        let m = rotation_matrix(PI);
        assert_eq!(apply_point_matrix(&m, Point::new(10, -20)), Point::new(-10, 20));
    }

    #[test]
    fn homogeneous_translation() {
        let m = Point3Matrix::new(1.0, 0.0, 5.0, 0.0, 1.0, -7.0, 0.0, 0.0, 1.0);
        assert_eq!(apply_point3_matrix(&m, Point::new(1, 1)), Point::new(6, -6));
    }
}
