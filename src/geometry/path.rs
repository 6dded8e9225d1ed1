use crate::math::polygon_2d::path_length;
use crate::math::Point;

/// How a point sequence is interpreted.
///
/// The kind decides whether there is an implicit closing edge, which end
/// caps an offset uses, and whether simplification treats the first and last
/// vertex specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    /// A polyline; no edge from the last point back to the first.
    Open,
    /// A closed ring used as a line (offsets trace both sides of it).
    Closed,
    /// A closed ring enclosing an area.
    #[default]
    Filled,
}

impl ShapeKind {
    /// Returns `true` if the last point connects back to the first.
    #[must_use]
    pub fn is_closed(self) -> bool {
        !matches!(self, Self::Open)
    }

    /// Minimum number of points a path of this kind keeps when simplified.
    #[must_use]
    pub fn min_points(self) -> usize {
        if self.is_closed() {
            3
        } else {
            2
        }
    }
}

/// An ordered sequence of grid points tagged with a [`ShapeKind`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    pub points: Vec<Point>,
    pub kind: ShapeKind,
}

impl Path {
    /// Creates a path from points.
    #[must_use]
    pub fn new(points: Vec<Point>, kind: ShapeKind) -> Self {
        Self { points, kind }
    }

    /// Creates an open polyline.
    #[must_use]
    pub fn open(points: Vec<Point>) -> Self {
        Self::new(points, ShapeKind::Open)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of edges in this path.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }
        if self.kind.is_closed() {
            n
        } else {
            n - 1
        }
    }

    /// Total length of all edges, including the closing edge if closed.
    #[must_use]
    pub fn length(&self) -> f64 {
        path_length(&self.points, self.kind.is_closed())
    }

    /// Returns a new path with the points in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self {
            points,
            kind: self.kind,
        }
    }
}

/// An ordered collection of paths of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathSet {
    pub paths: Vec<Path>,
}

impl PathSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` if the set holds no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Appends a path.
    pub fn push(&mut self, path: Path) {
        self.paths.push(path);
    }

    /// Iterates over the paths.
    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    /// Sum of all path lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.paths.iter().map(Path::length).sum()
    }
}

impl FromIterator<Path> for PathSet {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts() -> Vec<Point> {
        vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)]
    }

    #[test]
    fn open_path_segments() {
        let path = Path::open(pts());
        assert_eq!(path.segment_count(), 2);
        assert!((path.length() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn closed_path_segments() {
        let path = Path::new(pts(), ShapeKind::Closed);
        assert_eq!(path.segment_count(), 3); // 3 sides of triangle
        assert!(path.length() > 34.0);
    }

    #[test]
    fn reversed_keeps_kind() {
        let path = Path::new(pts(), ShapeKind::Filled).reversed();
        assert_eq!(path.points[0], Point::new(10, 10));
        assert_eq!(path.kind, ShapeKind::Filled);
    }

    #[test]
    fn min_points_per_kind() {
        assert_eq!(ShapeKind::Open.min_points(), 2);
        assert_eq!(ShapeKind::Closed.min_points(), 3);
        assert_eq!(ShapeKind::Filled.min_points(), 3);
    }

    #[test]
    fn degenerate_segment_count() {
        assert_eq!(Path::open(vec![Point::new(1, 1)]).segment_count(), 0);
        assert!(PathSet::new().is_empty());
    }
}
