use tracing::debug;

use crate::geometry::{PathSet, PolygonSet};
use crate::math::Point;

/// A vertex is degenerate when the path doubles back on itself there: the
/// incoming and outgoing edges are exactly anti-parallel, or one of them has
/// zero length.
fn is_degenerate(prev: Point, vertex: Point, next: Point) -> bool {
    let incoming = vertex - prev;
    let outgoing = next - vertex;
    incoming.cross(outgoing) == 0 && incoming.dot(outgoing) <= 0
}

/// Removes degenerate vertices, cascading backwards when a removal makes
/// the new neighbours degenerate.
///
/// Open paths keep their first and last vertex. For closed paths the seam
/// between the last and first vertex is re-checked until it is clean, so
/// running this twice gives the same result as running it once.
#[must_use]
pub fn remove_degenerate_points(points: &[Point], closed: bool) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() == Some(&p) {
            continue;
        }
        while out.len() >= 2 && is_degenerate(out[out.len() - 2], out[out.len() - 1], p) {
            out.pop();
        }
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    if !closed {
        return out;
    }

    while out.len() >= 3 {
        let n = out.len();
        if out[n - 1] == out[0] || is_degenerate(out[n - 2], out[n - 1], out[0]) {
            out.pop();
        } else if is_degenerate(out[n - 1], out[0], out[1]) {
            out.remove(0);
        } else {
            break;
        }
    }
    out
}

impl PolygonSet {
    /// Removes degenerate vertices from every contour and drops contours
    /// left with fewer than three vertices.
    pub fn remove_degenerate_verts(&mut self) {
        let before = self.len();
        for poly in self.iter_mut() {
            poly.edit(|pts| *pts = remove_degenerate_points(pts, true));
        }
        self.retain(|poly| poly.len() >= 3);
        if self.len() < before {
            debug!(dropped = before - self.len(), "removed collapsed contours");
        }
    }
}

impl PathSet {
    /// Removes degenerate vertices from every path. Closed paths left with
    /// fewer than three vertices are dropped; open paths are always kept.
    pub fn remove_degenerate_verts(&mut self) {
        for path in &mut self.paths {
            path.points = remove_degenerate_points(&path.points, path.kind.is_closed());
        }
        self.paths
            .retain(|path| !path.kind.is_closed() || path.points.len() >= 3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Path, Polygon, ShapeKind};

    fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn spike_is_removed() {
        // Square with a spike going out and straight back.
        let input = pts(&[(0, 0), (100, 0), (100, 50), (150, 50), (100, 50), (100, 100), (0, 100)]);
        let out = remove_degenerate_points(&input, true);
        assert_eq!(out, pts(&[(0, 0), (100, 0), (100, 50), (100, 100), (0, 100)]));
    }

    #[test]
    fn cascade_removes_nested_spikes() {
        let input = pts(&[(0, 0), (10, 0), (20, 0), (10, 0), (0, 0), (0, 10)]);
        let out = remove_degenerate_points(&input, true);
        assert!(out.len() < 3, "everything folds away: {out:?}");
    }

    #[test]
    fn seam_is_cleaned() {
        // The spike straddles the closing edge.
        let input = pts(&[(50, 0), (100, 0), (100, 100), (0, 100), (0, 0), (-50, 0)]);
        let out = remove_degenerate_points(&input, true);
        assert_eq!(out, pts(&[(50, 0), (100, 0), (100, 100), (0, 100), (0, 0)]));
        assert_eq!(remove_degenerate_points(&out, true), out);
    }

    #[test]
    fn open_paths_keep_endpoints() {
        let input = pts(&[(0, 0), (10, 0), (5, 0)]);
        let out = remove_degenerate_points(&input, false);
        assert_eq!(out, pts(&[(0, 0), (5, 0)]));

        let mut set: PathSet = vec![Path::open(pts(&[(0, 0), (0, 0)]))].into_iter().collect();
        set.remove_degenerate_verts();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn collapsed_polygons_are_dropped() {
        let mut set = PolygonSet::from_polygons(vec![
            Polygon::new(pts(&[(0, 0), (10, 0), (20, 0)])),
            Polygon::new(pts(&[(0, 0), (10, 0), (10, 10)])),
        ]);
        set.remove_degenerate_verts();
        assert_eq!(set.len(), 1);

        let mut paths: PathSet = vec![Path::new(pts(&[(0, 0), (10, 0), (0, 0)]), ShapeKind::Closed)]
            .into_iter()
            .collect();
        paths.remove_degenerate_verts();
        assert!(paths.is_empty());
    }

    #[test]
    fn idempotent() {
        let input = pts(&[
            (0, 0),
            (0, 0),
            (100, 0),
            (200, 0),
            (100, 0),
            (100, 100),
            (100, 50),
            (0, 100),
        ]);
        let once = remove_degenerate_points(&input, true);
        assert_eq!(remove_degenerate_points(&once, true), once);
    }
}
