use crate::geometry::PolygonSet;
use crate::math::polygon_2d::{edge_crossing, scanline_x, EdgeCrossing, PointClassification};
use crate::math::{Coord, Point};

impl PolygonSet {
    /// Even-odd membership of `p` across all contours.
    ///
    /// Each contour is tested on its own and the point is inside if an odd
    /// number of contours contain it. A point on any contour's boundary
    /// yields `border_result` straight away.
    #[must_use]
    pub fn inside(&self, p: Point, border_result: bool) -> bool {
        let mut count = 0_usize;
        for poly in self {
            match poly.classify(p) {
                PointClassification::Inside => count += 1,
                PointClassification::OnBoundary => return border_result,
                PointClassification::Outside => {}
            }
        }
        count % 2 == 1
    }

    /// Crossing-number membership of `p`, counting ray crossings over the
    /// edges of all contours together.
    #[must_use]
    pub fn inside_old(&self, p: Point, border_result: bool) -> bool {
        let mut crossings = 0_usize;
        for poly in self {
            let Some(&last) = poly.points().last() else {
                continue;
            };
            let mut p0 = last;
            for &p1 in poly {
                match edge_crossing(p, p0, p1) {
                    EdgeCrossing::Crosses => crossings += 1,
                    EdgeCrossing::OnEdge => return border_result,
                    EdgeCrossing::Misses => {}
                }
                p0 = p1;
            }
        }
        crossings % 2 == 1
    }

    /// Index of the innermost contour enclosing `p`.
    ///
    /// A contour encloses the point when the ray from `p` towards `+x`
    /// crosses it an odd number of times; the innermost one is the contour
    /// whose nearest crossing lies closest. If an even number of contours
    /// enclose the point they cancel out and `None` is returned.
    ///
    /// With `border_result` set, a point on an edge returns that edge's
    /// contour right away; otherwise on-edge hits are not counted.
    #[must_use]
    pub fn find_inside(&self, p: Point, border_result: bool) -> Option<usize> {
        let mut best: Option<(usize, Coord)> = None;
        let mut enclosing = 0_usize;
        for (poly_idx, poly) in self.iter().enumerate() {
            let Some(&last) = poly.points().last() else {
                continue;
            };
            let mut crossings = 0_usize;
            let mut min_x = Coord::MAX;
            let mut p0 = last;
            for &p1 in poly {
                match edge_crossing(p, p0, p1) {
                    EdgeCrossing::Crosses => {
                        crossings += 1;
                        min_x = min_x.min(scanline_x(p.y, p0, p1));
                    }
                    EdgeCrossing::OnEdge if border_result => return Some(poly_idx),
                    EdgeCrossing::OnEdge | EdgeCrossing::Misses => {}
                }
                p0 = p1;
            }
            if crossings % 2 == 1 {
                enclosing += 1;
                if best.is_none_or(|(_, x)| min_x < x) {
                    best = Some((poly_idx, min_x));
                }
            }
        }
        if enclosing % 2 == 0 {
            return None;
        }
        best.map(|(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;

    fn rect(x0: i64, y0: i64, x1: i64, y1: i64) -> Polygon {
        Polygon::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    fn stack(levels: i64) -> PolygonSet {
        (0..levels)
            .map(|i| rect(i * 10, i * 10, 200 - i * 10, 200 - i * 10))
            .collect()
    }

    #[test]
    fn square_with_hole() {
        let mut hole = rect(250, 250, 750, 750);
        hole.reverse();
        let set = PolygonSet::from_polygons(vec![rect(0, 0, 1000, 1000), hole]);
        assert!(!set.inside(Point::new(500, 500), true));
        assert!(set.inside(Point::new(100, 100), false));
        assert!(!set.inside_old(Point::new(500, 500), true));
        assert!(set.inside_old(Point::new(100, 100), false));
    }

    #[test]
    fn boundary_short_circuits() {
        let set = stack(2);
        assert!(set.inside(Point::new(0, 50), true));
        assert!(!set.inside(Point::new(0, 50), false));
        assert!(set.inside_old(Point::new(10, 50), true));
        assert!(!set.inside_old(Point::new(10, 50), false));
    }

    #[test]
    fn find_inside_parity() {
        let odd = stack(3);
        assert_eq!(odd.find_inside(Point::new(100, 100), false), Some(2));
        let even = stack(2);
        assert_eq!(even.find_inside(Point::new(100, 100), false), None);
        assert_eq!(odd.find_inside(Point::new(5, 100), false), Some(0));
        assert_eq!(odd.find_inside(Point::new(500, 100), false), None);
    }

    #[test]
    fn find_inside_on_edge() {
        let set = stack(3);
        assert_eq!(set.find_inside(Point::new(10, 100), true), Some(1));
        // The skipped edge leaves the touched contour with one crossing, so
        // two contours enclose the point and cancel out.
        assert_eq!(set.find_inside(Point::new(10, 100), false), None);
    }

    #[test]
    fn empty_set() {
        let set = PolygonSet::new();
        assert!(!set.inside(Point::new(0, 0), true));
        assert!(!set.inside_old(Point::new(0, 0), true));
        assert_eq!(set.find_inside(Point::new(0, 0), true), None);
    }
}
