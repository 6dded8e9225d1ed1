use i_overlay::core::fill_rule::FillRule as OverlayFillRule;
use i_overlay::float::clip::FloatClip;
use i_overlay::string::clip::ClipRule;
use tracing::debug;

use crate::error::{ClipError, Result};
use crate::geometry::{Path, PathSet, PolygonSet, ShapeKind};
use crate::math::Point;

use super::engine::{check_extent, set_to_float, to_float_contour, FloatContour};

/// Pieces lying on the boundary of the clip area are kept.
const CLIP_RULE: ClipRule = ClipRule {
    invert: false,
    boundary_included: true,
};

/// Rounds an engine polyline back onto the grid. Unlike a contour, a
/// polyline keeps a last point equal to its first.
fn polyline_from_float(line: &[[f64; 2]]) -> Result<Vec<Point>> {
    let mut points: Vec<Point> = Vec::with_capacity(line.len());
    for &[x, y] in line {
        if !x.is_finite() || !y.is_finite() {
            return Err(ClipError::NonFiniteOutput.into());
        }
        let p = Point::from_f64(x, y);
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    Ok(points)
}

impl PathSet {
    /// Clips the paths of this set against the filled area of `clip`, using
    /// the even-odd rule, and returns the open pieces that lie inside.
    ///
    /// Closed paths are clipped as polylines running around their ring.
    /// Pieces running along the boundary of `clip` count as inside.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is out of the supported range, or if
    /// a path and `clip` together are too large for the clipping engine.
    pub fn intersection_polylines(&self, clip: &PolygonSet) -> Result<PathSet> {
        let contours: Vec<FloatContour> = set_to_float(clip)?
            .into_iter()
            .filter(|c| c.len() >= 3)
            .collect();
        let mut out = PathSet::new();
        if contours.is_empty() {
            return Ok(out);
        }
        for path in self {
            if path.len() < 2 {
                continue;
            }
            let mut line = to_float_contour(&path.points)?;
            if path.kind != ShapeKind::Open {
                if let Some(&first) = line.first() {
                    line.push(first);
                }
            }
            check_extent(&[contours.as_slice(), std::slice::from_ref(&line)], 0)?;
            for piece in line.clip_by(&contours, OverlayFillRule::EvenOdd, CLIP_RULE) {
                let points = polyline_from_float(&piece)?;
                if points.len() >= 2 {
                    out.push(Path::open(points));
                }
            }
        }
        debug!(
            inputs = self.len(),
            pieces = out.len(),
            "polyline clip finished"
        );
        Ok(out)
    }
}
