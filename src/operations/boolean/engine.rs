use i_overlay::float::single::SingleFloatOverlay;
use tracing::{debug, trace};

use crate::error::{ClipError, Result};
use crate::geometry::{Polygon, PolygonSet};
use crate::math::polygon_2d::signed_area_x2;
use crate::math::{Coord, Point, MAX_CLIP_EXTENT, MAX_COORD};

use super::select::{BooleanOp, FillRule};

/// A contour in the clipping engine's coordinate format.
pub(crate) type FloatContour = Vec<[f64; 2]>;

/// An outer contour followed by its holes, back on the grid.
pub(crate) type GridShape = Vec<Vec<Point>>;

fn check_coord(value: Coord) -> std::result::Result<(), ClipError> {
    if value.abs() > MAX_COORD {
        return Err(ClipError::CoordinateOutOfRange {
            value,
            max: MAX_COORD,
        });
    }
    Ok(())
}

/// Checks that the contours of all `groups` together, grown by `margin` on
/// every side, fit the extent the engine represents exactly.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub(crate) fn check_extent(
    groups: &[&[FloatContour]],
    margin: Coord,
) -> std::result::Result<(), ClipError> {
    let mut min = [f64::INFINITY; 2];
    let mut max = [f64::NEG_INFINITY; 2];
    for &[x, y] in groups.iter().flat_map(|group| group.iter()).flatten() {
        min = [min[0].min(x), min[1].min(y)];
        max = [max[0].max(x), max[1].max(y)];
    }
    if min[0] > max[0] {
        return Ok(());
    }
    let extent = (max[0] - min[0]).max(max[1] - min[1]) + 2.0 * margin.unsigned_abs() as f64;
    if extent > MAX_CLIP_EXTENT as f64 {
        return Err(ClipError::ExtentOutOfRange {
            extent: extent as i64,
            max: MAX_CLIP_EXTENT,
        });
    }
    Ok(())
}

/// Converts a grid contour into engine format, rejecting coordinates the
/// engine cannot represent exactly.
pub(crate) fn to_float_contour(points: &[Point]) -> Result<FloatContour> {
    let mut contour = Vec::with_capacity(points.len());
    for p in points {
        check_coord(p.x)?;
        check_coord(p.y)?;
        contour.push(p.to_f64());
    }
    Ok(contour)
}

/// Converts every non-empty polygon of `set` into engine format.
pub(crate) fn set_to_float(set: &PolygonSet) -> Result<Vec<FloatContour>> {
    set.iter()
        .filter(|poly| !poly.is_empty())
        .map(|poly| to_float_contour(poly.points()))
        .collect()
}

/// Rounds an engine contour back onto the grid, dropping repeated points
/// created by the rounding.
pub(crate) fn contour_from_float(contour: &[[f64; 2]]) -> Result<Vec<Point>> {
    let mut points: Vec<Point> = Vec::with_capacity(contour.len());
    for &[x, y] in contour {
        if !x.is_finite() || !y.is_finite() {
            return Err(ClipError::NonFiniteOutput.into());
        }
        let p = Point::from_f64(x, y);
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    Ok(points)
}

/// Brings engine shapes back onto the grid.
///
/// Outer contours are oriented counter-clockwise and holes clockwise. A
/// shape whose outer contour collapses under rounding is dropped together
/// with its holes.
pub(crate) fn shapes_from_float(shapes: Vec<Vec<FloatContour>>) -> Result<Vec<GridShape>> {
    let mut out = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let mut grid_shape: GridShape = Vec::with_capacity(shape.len());
        for (idx, contour) in shape.iter().enumerate() {
            let mut points = contour_from_float(contour)?;
            if points.len() < 3 {
                if idx == 0 {
                    break;
                }
                continue;
            }
            let area = signed_area_x2(&points);
            if area == 0 {
                if idx == 0 {
                    break;
                }
                continue;
            }
            let is_outer = idx == 0;
            if (area > 0) != is_outer {
                points.reverse();
            }
            grid_shape.push(points);
        }
        if !grid_shape.is_empty() {
            out.push(grid_shape);
        }
    }
    Ok(out)
}

/// Flattens shapes into a set: each outer contour followed by its holes.
pub(crate) fn shapes_to_set(shapes: Vec<GridShape>) -> PolygonSet {
    shapes
        .into_iter()
        .flatten()
        .map(Polygon::new)
        .collect()
}

/// Runs the clipping engine on engine-format contours.
///
/// # Errors
///
/// Returns [`ClipError::ExtentOutOfRange`] if subject and clip together are
/// too large for the engine to represent exactly.
#[allow(clippy::ptr_arg)]
pub(crate) fn overlay_float(
    subject: &Vec<FloatContour>,
    clip: &Vec<FloatContour>,
    op: BooleanOp,
    fill: FillRule,
) -> std::result::Result<Vec<Vec<FloatContour>>, ClipError> {
    if subject.is_empty() && clip.is_empty() {
        return Ok(Vec::new());
    }
    if subject.is_empty() && matches!(op, BooleanOp::Intersection | BooleanOp::Difference) {
        return Ok(Vec::new());
    }
    check_extent(&[subject.as_slice(), clip.as_slice()], 0)?;
    trace!(
        subject = subject.len(),
        clip = clip.len(),
        ?op,
        ?fill,
        "running overlay"
    );
    Ok(subject.overlay(clip, op.overlay_rule(), fill.overlay_fill_rule()))
}

/// Runs a boolean operation and returns the result grouped by shape.
///
/// # Errors
///
/// Returns [`ClipError`] if an input coordinate exceeds [`MAX_COORD`], the
/// input spans more than [`MAX_CLIP_EXTENT`], or the engine produces a
/// coordinate that cannot be mapped back onto the grid.
pub(crate) fn boolean_shapes(
    subject: &PolygonSet,
    clip: &PolygonSet,
    op: BooleanOp,
    fill: FillRule,
) -> Result<Vec<GridShape>> {
    let subject = set_to_float(subject)?;
    let clip = set_to_float(clip)?;
    let shapes = shapes_from_float(overlay_float(&subject, &clip, op, fill)?)?;
    debug!(?op, shapes = shapes.len(), "boolean operation finished");
    Ok(shapes)
}

/// Runs a boolean operation and returns the flat result.
///
/// # Errors
///
/// See [`boolean_shapes`].
pub fn boolean_op(
    subject: &PolygonSet,
    clip: &PolygonSet,
    op: BooleanOp,
    fill: FillRule,
) -> Result<PolygonSet> {
    boolean_shapes(subject, clip, op, fill).map(shapes_to_set)
}
