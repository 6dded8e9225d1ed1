use tracing::debug;

use crate::geometry::{Polygon, PolygonSet};
use crate::math::distance_2d::angle_between;
use crate::math::{Coord, Point};

/// Turn direction at `b` on the way `a → b → c`: positive for a left turn.
fn turn(a: Point, b: Point, c: Point) -> i128 {
    (b - a).cross(c - b)
}

impl Polygon {
    /// Removes short zig-zag steps.
    ///
    /// A vertex is dropped when the edge reaching it from the last kept
    /// vertex is shorter than `remove_length` and the path turns the other
    /// way at the following vertex, so that the short edge is a sidestep
    /// rather than part of a curve. The first vertex is always kept.
    #[must_use]
    pub fn smooth(&self, remove_length: Coord) -> Polygon {
        let pts = self.points();
        let n = pts.len();
        if n < 4 {
            return self.clone();
        }
        let limit = i128::from(remove_length) * i128::from(remove_length);
        let mut out: Vec<Point> = Vec::with_capacity(n);
        out.push(pts[0]);
        for i in 1..n {
            let prev = out[out.len() - 1];
            let cur = pts[i];
            let next = pts[(i + 1) % n];
            let after = pts[(i + 2) % n];
            let short = (cur - prev).length_squared() < limit;
            let zigzag = turn(prev, cur, next).signum() * turn(cur, next, after).signum() < 0;
            let remaining = out.len() + (n - i - 1);
            if short && zigzag && remaining >= 3 {
                continue;
            }
            out.push(cur);
        }
        Polygon::new(out)
    }

    /// Removes vertices whose edges on both sides are shorter than
    /// `remove_length`. The first vertex is always kept.
    #[must_use]
    pub fn smooth2(&self, remove_length: Coord) -> Polygon {
        let pts = self.points();
        let n = pts.len();
        if n < 4 {
            return self.clone();
        }
        let limit = i128::from(remove_length) * i128::from(remove_length);
        let mut out: Vec<Point> = Vec::with_capacity(n);
        out.push(pts[0]);
        for i in 1..n {
            let prev = out[out.len() - 1];
            let cur = pts[i];
            let next = pts[(i + 1) % n];
            let removable = (cur - prev).length_squared() < limit
                && (next - cur).length_squared() < limit;
            let remaining = out.len() + (n - i - 1);
            if removable && remaining >= 3 {
                continue;
            }
            out.push(cur);
        }
        Polygon::new(out)
    }

    /// Cuts off sharp concave corners, growing the area.
    ///
    /// A concave corner whose angle is below `max_angle` (radians) is
    /// replaced by two points at most `shortcut_length / 2` away along each
    /// of its edges.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn smooth_outward(&self, max_angle: f64, shortcut_length: Coord) -> Polygon {
        let pts = self.points();
        let n = pts.len();
        if n < 3 {
            return self.clone();
        }
        let winding = if self.is_hole() { -1 } else { 1 };
        let half = shortcut_length as f64 / 2.0;
        let mut out: Vec<Point> = Vec::with_capacity(n + 4);
        for i in 0..n {
            let prev = pts[(i + n - 1) % n];
            let cur = pts[i];
            let next = pts[(i + 1) % n];
            let concave = turn(prev, cur, next).signum() == -winding;
            let corner = angle_between(prev - cur, next - cur);
            if !concave || corner >= max_angle {
                out.push(cur);
                continue;
            }
            let back = ((prev - cur).length() / 2.0).min(half);
            let ahead = ((next - cur).length() / 2.0).min(half);
            let a = cur + (prev - cur).normal(back);
            let b = cur + (next - cur).normal(ahead);
            out.push(a);
            if b != a {
                out.push(b);
            }
        }
        Polygon::new(out)
    }

    /// Removes vertices where the direction changes by less than
    /// `max_deviation_angle` (radians), together with repeated points.
    /// Stops before the contour drops below three vertices.
    pub fn remove_colinear_edges(&mut self, max_deviation_angle: f64) {
        self.edit(|pts| {
            pts.dedup();
            while pts.len() > 3 && pts.first() == pts.last() {
                pts.pop();
            }
            loop {
                let n = pts.len();
                if n <= 3 {
                    break;
                }
                let found = (0..n).find(|&i| {
                    let prev = pts[(i + n - 1) % n];
                    let cur = pts[i];
                    let next = pts[(i + 1) % n];
                    cur == next || angle_between(cur - prev, next - cur) < max_deviation_angle
                });
                match found {
                    Some(i) => {
                        pts.remove(i);
                    }
                    None => break,
                }
            }
        });
    }
}

/// Runs a per-contour simplification over a set: contours with fewer than
/// three points are skipped, triangles pass through unchanged and results
/// that collapse below three points are discarded.
fn simplify_each(set: &PolygonSet, simplify: impl Fn(&Polygon) -> Polygon) -> PolygonSet {
    let mut out = PolygonSet::new();
    let mut discarded = 0_usize;
    for poly in set {
        match poly.len() {
            0..=2 => discarded += 1,
            3 => out.push(poly.clone()),
            _ => {
                let simplified = simplify(poly);
                if simplified.len() < 3 {
                    discarded += 1;
                } else {
                    out.push(simplified);
                }
            }
        }
    }
    if discarded > 0 {
        debug!(discarded, "dropped contours during simplification");
    }
    out
}

impl PolygonSet {
    /// Applies [`Polygon::smooth`] to every contour.
    #[must_use]
    pub fn smooth(&self, remove_length: Coord) -> PolygonSet {
        simplify_each(self, |poly| poly.smooth(remove_length))
    }

    /// Applies [`Polygon::smooth2`] to every contour with at least
    /// `min_area` absolute area and more than five points; other non-empty
    /// contours pass through unchanged.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn smooth2(&self, remove_length: Coord, min_area: Coord) -> PolygonSet {
        let mut out = PolygonSet::new();
        for poly in self {
            if poly.is_empty() {
                continue;
            }
            if poly.area().abs() < min_area as f64 || poly.len() <= 5 {
                out.push(poly.clone());
                continue;
            }
            let simplified = poly.smooth2(remove_length);
            if simplified.len() >= 3 {
                out.push(simplified);
            }
        }
        out
    }

    /// Applies [`Polygon::smooth_outward`] to every contour.
    #[must_use]
    pub fn smooth_outward(&self, max_angle: f64, shortcut_length: Coord) -> PolygonSet {
        simplify_each(self, |poly| poly.smooth_outward(max_angle, shortcut_length))
    }

    /// Applies [`Polygon::remove_colinear_edges`] to every contour in place,
    /// dropping contours left with fewer than three points.
    pub fn remove_colinear_edges(&mut self, max_deviation_angle: f64) {
        for poly in self.iter_mut() {
            poly.remove_colinear_edges(max_deviation_angle);
        }
        self.retain(|poly| poly.len() >= 3);
    }
}
