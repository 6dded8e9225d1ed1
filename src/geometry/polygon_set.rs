use std::ops::Index;

use crate::math::{Point, Point3Matrix, PointMatrix};

use super::polygon::Polygon;

/// An ordered collection of closed contours.
///
/// Position in the set implies nothing about nesting; containment has to be
/// computed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolygonSet {
    polygons: Vec<Polygon>,
}

impl PolygonSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from polygons.
    #[must_use]
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Creates a set from raw contours.
    #[must_use]
    pub fn from_contours(contours: Vec<Vec<Point>>) -> Self {
        contours.into_iter().map(Polygon::new).collect()
    }

    /// Number of polygons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `true` if the set holds no polygons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Consumes the set, returning its polygons.
    #[must_use]
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.polygons
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Polygon> {
        self.polygons.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Polygon> {
        self.polygons.iter_mut()
    }

    pub fn push(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    /// Appends copies of every polygon in `other`.
    pub fn add(&mut self, other: &PolygonSet) {
        self.polygons.extend(other.polygons.iter().cloned());
    }

    /// Appends `polygon` unless it has no vertices.
    pub fn add_if_not_empty(&mut self, polygon: Polygon) {
        if !polygon.is_empty() {
            self.polygons.push(polygon);
        }
    }

    /// Appends a two-point contour representing the line `from → to`.
    pub fn add_line(&mut self, from: Point, to: Point) {
        self.polygons.push(Polygon::new(vec![from, to]));
    }

    /// Removes the polygon at `index` by moving the last polygon into its
    /// slot and returns it. Order is not preserved. Out-of-range indices
    /// return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<Polygon> {
        (index < self.polygons.len()).then(|| self.polygons.swap_remove(index))
    }

    /// Keeps only the polygons for which `keep` returns `true`.
    pub fn retain(&mut self, keep: impl FnMut(&Polygon) -> bool) {
        self.polygons.retain(keep);
    }

    pub fn clear(&mut self) {
        self.polygons.clear();
    }

    /// Total number of vertices over all polygons.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.polygons.iter().map(Polygon::len).sum()
    }

    /// Sum of signed areas; holes subtract.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    /// Sum of all circumferences.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.polygons.iter().map(Polygon::length).sum()
    }

    /// Component-wise minimum over all vertices, or `None` if there are none.
    #[must_use]
    pub fn min(&self) -> Option<Point> {
        self.all_points()
            .reduce(|a, b| Point::new(a.x.min(b.x), a.y.min(b.y)))
    }

    /// Component-wise maximum over all vertices, or `None` if there are none.
    #[must_use]
    pub fn max(&self) -> Option<Point> {
        self.all_points()
            .reduce(|a, b| Point::new(a.x.max(b.x), a.y.max(b.y)))
    }

    /// Iterates over every vertex of every polygon.
    pub fn all_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.polygons.iter().flat_map(|poly| poly.points().iter().copied())
    }

    /// Scales every vertex about the origin. A ratio of one is a no-op.
    pub fn scale(&mut self, ratio: f64) {
        if (ratio - 1.0).abs() < f64::EPSILON {
            return;
        }
        for poly in &mut self.polygons {
            poly.edit(|pts| {
                for p in pts.iter_mut() {
                    *p = p.scaled(ratio);
                }
            });
        }
    }

    /// Moves every vertex by `delta`.
    pub fn translate(&mut self, delta: Point) {
        if delta == Point::default() {
            return;
        }
        for poly in &mut self.polygons {
            poly.translate(delta);
        }
    }

    /// Applies a linear transform to every polygon.
    pub fn apply_matrix(&mut self, matrix: &PointMatrix) {
        for poly in &mut self.polygons {
            poly.apply_matrix(matrix);
        }
    }

    /// Applies a homogeneous affine transform to every polygon.
    pub fn apply_point3_matrix(&mut self, matrix: &Point3Matrix) {
        for poly in &mut self.polygons {
            poly.apply_point3_matrix(matrix);
        }
    }
}

impl Index<usize> for PolygonSet {
    type Output = Polygon;

    fn index(&self, index: usize) -> &Polygon {
        &self.polygons[index]
    }
}

impl FromIterator<Polygon> for PolygonSet {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self {
            polygons: iter.into_iter().collect(),
        }
    }
}

impl Extend<Polygon> for PolygonSet {
    fn extend<I: IntoIterator<Item = Polygon>>(&mut self, iter: I) {
        self.polygons.extend(iter);
    }
}

impl IntoIterator for PolygonSet {
    type Item = Polygon;
    type IntoIter = std::vec::IntoIter<Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.into_iter()
    }
}

impl<'a> IntoIterator for &'a PolygonSet {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
