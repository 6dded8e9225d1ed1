use crate::math::polygon_2d::{
    classify_point, path_length, signed_area_2d, signed_area_x2, PointClassification,
};
use crate::math::{apply_point3_matrix, apply_point_matrix, Point, Point3Matrix, PointMatrix};

use super::path::{Path, ShapeKind};

/// Winding of a closed contour.
///
/// Outer contours run counter-clockwise (positive area), holes clockwise
/// (negative area). Contours with fewer than three points or zero area are
/// `Degenerate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    Outer,
    Hole,
    #[default]
    Degenerate,
}

impl Orientation {
    fn of(points: &[Point]) -> Self {
        match signed_area_x2(points) {
            0 => Self::Degenerate,
            a if a > 0 => Self::Outer,
            _ => Self::Hole,
        }
    }
}

/// A closed contour.
///
/// The orientation tag is computed when the polygon is built and refreshed by
/// every method that changes the points, so it always matches the sign of the
/// area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
    points: Vec<Point>,
    orientation: Orientation,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        let orientation = Orientation::of(&points);
        Self {
            points,
            orientation,
        }
    }

    /// The vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the polygon, returning its vertices.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The first vertex, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns `true` for clockwise contours.
    #[must_use]
    pub fn is_hole(&self) -> bool {
        self.orientation == Orientation::Hole
    }

    /// Returns `true` for counter-clockwise contours.
    #[must_use]
    pub fn is_outer(&self) -> bool {
        self.orientation == Orientation::Outer
    }

    /// Signed area; negative for holes.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Circumference, including the closing edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        path_length(&self.points, true)
    }

    /// Mutates the vertices through `edit` and refreshes the orientation.
    pub fn edit<R>(&mut self, edit: impl FnOnce(&mut Vec<Point>) -> R) -> R {
        let result = edit(&mut self.points);
        self.orientation = Orientation::of(&self.points);
        result
    }

    /// Reverses the vertex order, flipping outer and hole.
    pub fn reverse(&mut self) {
        self.edit(|pts| pts.reverse());
    }

    /// Moves every vertex by `delta`.
    pub fn translate(&mut self, delta: Point) {
        for p in &mut self.points {
            *p += delta;
        }
    }

    /// Applies a linear transform to every vertex.
    pub fn apply_matrix(&mut self, matrix: &PointMatrix) {
        self.edit(|pts| {
            for p in pts.iter_mut() {
                *p = apply_point_matrix(matrix, *p);
            }
        });
    }

    /// Applies a homogeneous affine transform to every vertex.
    pub fn apply_point3_matrix(&mut self, matrix: &Point3Matrix) {
        self.edit(|pts| {
            for p in pts.iter_mut() {
                *p = apply_point3_matrix(matrix, *p);
            }
        });
    }

    /// Classifies `p` against this contour alone.
    #[must_use]
    pub fn classify(&self, p: Point) -> PointClassification {
        classify_point(p, &self.points)
    }

    /// Returns `true` if `p` lies inside this contour alone, or
    /// `border_result` if it lies exactly on an edge.
    #[must_use]
    pub fn inside(&self, p: Point, border_result: bool) -> bool {
        match self.classify(p) {
            PointClassification::Inside => true,
            PointClassification::Outside => false,
            PointClassification::OnBoundary => border_result,
        }
    }

    /// Views this polygon as a path of the given closed kind.
    #[must_use]
    pub fn to_path(&self, kind: ShapeKind) -> Path {
        Path::new(self.points.clone(), kind)
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn square(size: i64) -> Polygon {
        Polygon::new(vec![
            Point::new(0, 0),
            Point::new(size, 0),
            Point::new(size, size),
            Point::new(0, size),
        ])
    }

    #[test]
    fn orientation_is_tagged_on_construction() {
        let outer = square(10);
        assert!(outer.is_outer());
        let mut hole = outer.clone();
        hole.reverse();
        assert!(hole.is_hole());
        assert!((hole.area() + 100.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_orientation() {
        let line = Polygon::new(vec![Point::new(0, 0), Point::new(5, 5)]);
        assert_eq!(line.orientation(), Orientation::Degenerate);
        let flat = Polygon::new(vec![Point::new(0, 0), Point::new(5, 5), Point::new(10, 10)]);
        assert_eq!(flat.orientation(), Orientation::Degenerate);
    }

    #[test]
    fn edit_refreshes_orientation() {
        let mut poly = square(10);
        poly.edit(|pts| pts.truncate(2));
        assert_eq!(poly.orientation(), Orientation::Degenerate);
    }

    #[test]
    fn mirroring_matrix_flips_orientation() {
        let mut poly = square(10);
        poly.apply_matrix(&PointMatrix::new(-1.0, 0.0, 0.0, 1.0));
        assert!(poly.is_hole());
        poly.apply_matrix(&crate::math::rotation_matrix(PI));
        assert!(poly.is_hole());
    }

    #[test]
    fn translate_keeps_area() {
        let mut poly = square(10);
        poly.translate(Point::new(-50, 20));
        assert_eq!(poly.first(), Some(Point::new(-50, 20)));
        assert!((poly.area() - 100.0).abs() < 1e-9);
        assert!((poly.length() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn inside_with_border_result() {
        let poly = square(10);
        assert!(poly.inside(Point::new(5, 5), false));
        assert!(!poly.inside(Point::new(15, 5), true));
        assert!(poly.inside(Point::new(10, 5), true));
        assert!(!poly.inside(Point::new(10, 5), false));
    }
}
