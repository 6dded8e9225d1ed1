use super::{Coord, Point};

/// Twice the signed area of a closed contour (shoelace formula), exact.
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_x2(points: &[Point]) -> i128 {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    let mut sum = 0_i128;
    let mut prev = points[n - 1];
    for &p in points {
        sum += prev.cross(p);
        prev = p;
    }
    sum
}

/// Signed area of a closed contour in square grid units.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn signed_area_2d(points: &[Point]) -> f64 {
    signed_area_x2(points) as f64 * 0.5
}

/// Total edge length of a contour; `closed` adds the edge from last to first.
#[must_use]
pub fn path_length(points: &[Point], closed: bool) -> f64 {
    let mut total: f64 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
    if closed && points.len() > 2 {
        total += points[points.len() - 1].distance(points[0]);
    }
    total
}

/// Signed test of `p` against the directed line `a → b`.
///
/// Positive if `p` lies left of the line, negative if right, zero if on it.
#[must_use]
pub fn point_is_left_of_line(p: Point, a: Point, b: Point) -> i128 {
    (b - a).cross(p - a)
}

/// Relation of a horizontal ray cast from a query point towards `+x` with
/// one directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeCrossing {
    /// The ray crosses the edge strictly right of the query point.
    Crosses,
    /// The query point lies exactly on the edge.
    OnEdge,
    /// The edge does not cross the ray.
    Misses,
}

/// Classifies edge `p0 → p1` against the ray from `p` towards `+x`.
///
/// Edges are treated as half-open in `y` so that a ray through a shared
/// vertex is counted exactly once.
#[must_use]
pub fn edge_crossing(p: Point, p0: Point, p1: Point) -> EdgeCrossing {
    if p == p0 || p == p1 {
        return EdgeCrossing::OnEdge;
    }
    if p0.y == p1.y {
        if p.y == p0.y && p0.x.min(p1.x) <= p.x && p.x <= p0.x.max(p1.x) {
            return EdgeCrossing::OnEdge;
        }
        return EdgeCrossing::Misses;
    }
    let (lo, hi) = if p0.y < p1.y { (p0, p1) } else { (p1, p0) };
    if p.y < lo.y || p.y >= hi.y {
        return EdgeCrossing::Misses;
    }
    match point_is_left_of_line(p, lo, hi) {
        0 => EdgeCrossing::OnEdge,
        side if side > 0 => EdgeCrossing::Crosses,
        _ => EdgeCrossing::Misses,
    }
}

/// X coordinate where the non-horizontal edge `p0 → p1` meets the scanline
/// `y`, truncated towards zero. Horizontal edges report `p0.x`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn scanline_x(y: Coord, p0: Point, p1: Point) -> Coord {
    if p1.y == p0.y {
        return p0.x;
    }
    let dx = i128::from(p1.x - p0.x);
    let dy = i128::from(p1.y - p0.y);
    let t = i128::from(y - p0.y);
    (i128::from(p0.x) + dx * t / dy) as Coord
}

/// Classification of a point relative to a closed contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
    OnBoundary,
}

/// Classifies `p` against a closed contour using the crossing number.
#[must_use]
pub fn classify_point(p: Point, points: &[Point]) -> PointClassification {
    let Some(&last) = points.last() else {
        return PointClassification::Outside;
    };
    let mut crossings = 0_usize;
    let mut p0 = last;
    for &p1 in points {
        match edge_crossing(p, p0, p1) {
            EdgeCrossing::Crosses => crossings += 1,
            EdgeCrossing::OnEdge => return PointClassification::OnBoundary,
            EdgeCrossing::Misses => {}
        }
        p0 = p1;
    }
    if crossings % 2 == 1 {
        PointClassification::Inside
    } else {
        PointClassification::Outside
    }
}
