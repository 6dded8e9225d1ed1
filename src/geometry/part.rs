use crate::math::polygon_2d::PointClassification;
use crate::math::Point;

use super::polygon::Polygon;
use super::polygon_set::PolygonSet;

/// One connected region: an outer contour followed by its direct holes.
///
/// Islands inside a hole are not part of this region; they form parts of
/// their own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Part {
    polygons: Vec<Polygon>,
}

impl Part {
    /// Starts a part from its outer contour.
    #[must_use]
    pub fn new(outer: Polygon) -> Self {
        Self {
            polygons: vec![outer],
        }
    }

    /// Appends a hole.
    pub fn push_hole(&mut self, hole: Polygon) {
        self.polygons.push(hole);
    }

    #[must_use]
    pub fn outer(&self) -> Option<&Polygon> {
        self.polygons.first()
    }

    #[must_use]
    pub fn holes(&self) -> &[Polygon] {
        self.polygons.get(1..).unwrap_or_default()
    }

    /// All contours, outer first.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of contours, outer included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Signed area: outer minus holes.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    /// Returns `true` if `p` lies inside the outer contour and outside every
    /// hole. Points on any boundary yield `border_result` for that contour.
    #[must_use]
    pub fn inside(&self, p: Point, border_result: bool) -> bool {
        let Some(outer) = self.outer() else {
            return false;
        };
        if !outer.inside(p, border_result) {
            return false;
        }
        for hole in self.holes() {
            match hole.classify(p) {
                PointClassification::Inside => return false,
                PointClassification::OnBoundary => return border_result,
                PointClassification::Outside => {}
            }
        }
        true
    }

    /// Flattens the part into a plain set, outer first.
    #[must_use]
    pub fn into_set(self) -> PolygonSet {
        PolygonSet::from_polygons(self.polygons)
    }
}

impl From<Vec<Polygon>> for Part {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }
}
