use crate::geometry::{Polygon, PolygonSet};
use crate::math::Point;

/// Cross product of `a → b` and `a → c`: positive when `c` lies left of the
/// line through `a` and `b`.
fn side(a: Point, b: Point, c: Point) -> i128 {
    (b - a).cross(c - a)
}

/// Extends `hull` along `points`, keeping only left turns. Points below
/// index `floor` are never popped.
fn chain(hull: &mut Vec<Point>, points: impl Iterator<Item = Point>, floor: usize) {
    for p in points {
        while hull.len() >= floor + 2 {
            let n = hull.len();
            let turns_right = side(hull[n - 2], hull[n - 1], p) <= 0;
            // Never leave the first point on the inside of the upper chain.
            let hides_front = n > floor + 2 && side(hull[n - 2], hull[n - 1], hull[0]) < 0;
            if !(turns_right || hides_front) {
                break;
            }
            hull.pop();
        }
        hull.push(p);
    }
}

impl PolygonSet {
    /// Replaces the set with the convex hull of all its vertices.
    ///
    /// The hull is counter-clockwise, starts at the lowest-left vertex and
    /// has no colinear vertices. An empty set stays empty.
    pub fn make_convex(&mut self) {
        let mut points: Vec<Point> = self.all_points().collect();
        if points.is_empty() {
            return;
        }
        points.sort_unstable();
        points.dedup();

        let mut hull: Vec<Point> = Vec::with_capacity(points.len() + 1);
        chain(&mut hull, points.iter().copied(), 0);
        let lower = hull.len() - 1;
        chain(&mut hull, points.iter().rev().skip(1).copied(), lower);
        // The upper chain ends on the start point.
        if hull.len() > 1 && hull.first() == hull.last() {
            hull.pop();
        }
        *self = PolygonSet::from_polygons(vec![Polygon::new(hull)]);
    }
}
