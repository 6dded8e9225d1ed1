use crate::geometry::{Path, Polygon, PolygonSet, ShapeKind};
use crate::math::distance_2d::angle_between;
use crate::math::{Coord, Point};

/// Parameters for corner smoothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothSettings {
    /// Segments shorter than this are candidates for smoothing.
    pub max_resolution: Coord,
    /// Distance a corner point is pulled along its long neighbouring segment.
    /// Zero disables smoothing.
    pub smooth_distance: Coord,
    /// Minimum change of direction, in radians, for a short segment to be
    /// smoothed.
    pub fluid_angle: f64,
}

impl Default for SmoothSettings {
    fn default() -> Self {
        Self {
            max_resolution: 250,
            smooth_distance: 0,
            fluid_angle: 5_f64.to_radians(),
        }
    }
}

impl SmoothSettings {
    #[must_use]
    pub fn new(max_resolution: Coord, smooth_distance: Coord, fluid_angle: f64) -> Self {
        Self {
            max_resolution,
            smooth_distance,
            fluid_angle,
        }
    }
}

/// Index of the next point after `from` that has not been removed.
fn next_alive(alive: &[bool], from: usize, cyclic: bool) -> Option<usize> {
    let n = alive.len();
    (1..n).map(|step| from + step).find_map(|idx| {
        if idx >= n && !cyclic {
            return None;
        }
        let idx = idx % n;
        alive[idx].then_some(idx)
    })
}

/// Change of direction over the window `p0 → p1 → p2 → p3`: the angle the
/// short middle segment makes with the incoming one, compared with the angle
/// the outgoing segment makes with it.
fn deviation(p0: Point, p1: Point, p2: Point, p3: Point) -> f64 {
    let ab = p1 - p0;
    let bc = p2 - p1;
    let cd = p3 - p2;
    (angle_between(ab, bc) - angle_between(ab, cd)).abs()
}

/// Moves `point` towards `towards` by `distance`.
#[allow(clippy::cast_precision_loss)]
fn pull(point: Point, towards: Point, distance: Coord) -> Point {
    point + (towards - point).normal(distance as f64)
}

/// Smooths short zig-zag segments between longer ones.
///
/// Looks at every window of four consecutive points. When the middle
/// segment is shorter than `max_resolution` and the direction changes by at
/// least `fluid_angle`, each end of the short segment is either pulled by
/// `smooth_distance` along its long neighbouring segment or, if that segment
/// is too short to pull along, marked for removal. Marked points are removed
/// in a single pass at the end, so earlier removals never shift the windows.
/// The sequence never drops below the minimum point count of `kind`.
pub fn smooth_corners(points: &mut Vec<Point>, kind: ShapeKind, settings: &SmoothSettings) {
    let n = points.len();
    if settings.smooth_distance == 0 || n < 4 {
        return;
    }
    let cyclic = kind.is_closed();
    let min_points = kind.min_points();
    let max_sq = i128::from(settings.max_resolution) * i128::from(settings.max_resolution);
    let pull_threshold = i128::from(settings.smooth_distance) * 2;
    let pull_threshold_sq = pull_threshold * pull_threshold;

    let mut alive = vec![true; n];
    let mut remaining = n;
    for i0 in 0..n {
        if !alive[i0] {
            continue;
        }
        let Some(i1) = next_alive(&alive, i0, cyclic) else {
            break;
        };
        let Some(i2) = next_alive(&alive, i1, cyclic) else {
            break;
        };
        let Some(i3) = next_alive(&alive, i2, cyclic) else {
            break;
        };
        if i3 == i0 {
            // Fewer than four points left.
            break;
        }
        let (p0, p1, p2, p3) = (points[i0], points[i1], points[i2], points[i3]);
        if (p2 - p1).length_squared() >= max_sq || deviation(p0, p1, p2, p3) < settings.fluid_angle
        {
            continue;
        }

        if (p1 - p0).length_squared() > pull_threshold_sq {
            points[i1] = pull(p1, p0, settings.smooth_distance);
        } else if remaining > min_points {
            alive[i1] = false;
            remaining -= 1;
        }

        if (p3 - p2).length_squared() > pull_threshold_sq {
            points[i2] = pull(p2, p3, settings.smooth_distance);
        } else if remaining > min_points {
            alive[i2] = false;
            remaining -= 1;
        }
    }

    if remaining < n {
        let mut idx = 0;
        points.retain(|_| {
            let keep = alive[idx];
            idx += 1;
            keep
        });
    }
}

impl Path {
    /// Applies [`smooth_corners`] to this path.
    pub fn smooth_corners(&mut self, settings: &SmoothSettings) {
        smooth_corners(&mut self.points, self.kind, settings);
    }
}

impl Polygon {
    /// Applies [`smooth_corners`] to this contour.
    pub fn smooth_corners(&mut self, settings: &SmoothSettings) {
        self.edit(|pts| smooth_corners(pts, ShapeKind::Closed, settings));
    }
}

impl PolygonSet {
    /// Applies [`smooth_corners`] to every contour.
    pub fn smooth_corners(&mut self, settings: &SmoothSettings) {
        for poly in self.iter_mut() {
            poly.smooth_corners(settings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SmoothSettings {
        SmoothSettings::new(100, 10, 10_f64.to_radians())
    }

    /// A long run with a short sidestep in the middle.
    fn zigzag() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(1000, 0),
            Point::new(1000, 50),
            Point::new(2000, 50),
        ]
    }

    #[test]
    fn disabled_or_too_short_is_noop() {
        let mut pts = zigzag();
        smooth_corners(&mut pts, ShapeKind::Open, &SmoothSettings::new(100, 0, 0.1));
        assert_eq!(pts, zigzag());

        let mut tri = vec![Point::new(0, 0), Point::new(10, 0), Point::new(0, 10)];
        smooth_corners(&mut tri, ShapeKind::Closed, &settings());
        assert_eq!(tri.len(), 3);
    }

    #[test]
    fn long_neighbours_are_pulled() {
        let mut pts = zigzag();
        smooth_corners(&mut pts, ShapeKind::Open, &settings());
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(990, 0),
                Point::new(1010, 50),
                Point::new(2000, 50),
            ]
        );
    }

    #[test]
    fn short_neighbours_are_removed_once() {
        let mut pts = vec![
            Point::new(0, 0),
            Point::new(15, 0),
            Point::new(15, 50),
            Point::new(30, 50),
            Point::new(30, 1000),
        ];
        smooth_corners(&mut pts, ShapeKind::Open, &settings());
        // Both ends of the first sidestep go; the open minimum of two points
        // is respected.
        assert!(pts.len() >= 2);
        assert!(pts.len() < 5);
        assert_eq!(pts.first(), Some(&Point::new(0, 0)));
    }

    #[test]
    fn closed_never_below_three() {
        let mut pts = vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        smooth_corners(&mut pts, ShapeKind::Closed, &settings());
        assert!(pts.len() >= 3);
    }

    #[test]
    fn straight_runs_are_untouched() {
        let mut pts = vec![
            Point::new(0, 0),
            Point::new(1000, 0),
            Point::new(1050, 0),
            Point::new(2000, 0),
        ];
        smooth_corners(&mut pts, ShapeKind::Open, &settings());
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[1], Point::new(1000, 0));
    }
}
