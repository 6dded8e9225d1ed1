use i_overlay::mesh::outline::offset::OutlineOffset;
use i_overlay::mesh::stroke::offset::StrokeOffset;
use i_overlay::mesh::style::{OutlineStyle, StrokeStyle};
use tracing::debug;

use crate::error::{ClipError, Result};
use crate::geometry::{Path, PathSet, PolygonSet, ShapeKind};
use crate::math::Coord;
use crate::operations::boolean::{
    boolean_op, check_extent, overlay_float, shapes_from_float, shapes_to_set, to_float_contour,
    BooleanOp, FillRule, FloatContour,
};

use super::params::{EndType, OffsetParams};

/// Grows or shrinks a set of paths by a fixed distance.
///
/// Filled input is unioned before offsetting so that overlapping contours do
/// not create loops. Closed and open lines are traced on both sides, giving a
/// band `2·|distance|` wide. A zero distance returns the input unchanged.
#[derive(Debug)]
pub struct PolygonOffset<'a> {
    paths: &'a PathSet,
    distance: Coord,
    params: OffsetParams,
}

impl<'a> PolygonOffset<'a> {
    /// Creates a new offset operation with default parameters.
    #[must_use]
    pub fn new(paths: &'a PathSet, distance: Coord) -> Self {
        Self {
            paths,
            distance,
            params: OffsetParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: OffsetParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the offset.
    ///
    /// # Errors
    ///
    /// - [`ClipError::InvalidParameters`] for a miter limit or arc step that
    ///   is not a positive finite number
    /// - [`ClipError::CoordinateOutOfRange`] if an input coordinate cannot be
    ///   represented by the clipping engine
    /// - [`ClipError::ExtentOutOfRange`] if the input grown by the distance is
    ///   too large for the clipping engine
    pub fn execute(&self) -> Result<PolygonSet> {
        self.validate()?;
        if self.distance == 0 {
            return Ok(self
                .paths
                .iter()
                .map(|path| path.points.iter().copied().collect())
                .collect());
        }
        let inputs = self
            .paths
            .iter()
            .map(|path| to_float_contour(&path.points))
            .collect::<Result<Vec<FloatContour>>>()?;
        check_extent(&[inputs.as_slice()], self.distance)?;

        let mut filled = PolygonSet::new();
        let mut lines: Vec<(&Path, EndType)> = Vec::new();
        for path in self.paths {
            match self.end_type(path) {
                EndType::ClosedPolygon => filled.push(path.points.iter().copied().collect()),
                end => lines.push((path, end)),
            }
        }

        let mut contours: Vec<FloatContour> = Vec::new();
        if !filled.is_empty() {
            contours.extend(self.outline_filled(&filled)?);
        }
        for (path, end) in lines {
            contours.extend(self.stroke_line(path, end)?);
        }

        let shapes = shapes_from_float(overlay_float(
            &contours,
            &Vec::new(),
            BooleanOp::Union,
            FillRule::NonZero,
        )?)?;
        debug!(
            distance = self.distance,
            inputs = self.paths.len(),
            shapes = shapes.len(),
            "offset finished"
        );
        Ok(shapes_to_set(shapes))
    }

    /// How `path` is offset: filled paths as areas, closed paths as rings
    /// and open paths as the parameters say.
    fn end_type(&self, path: &Path) -> EndType {
        match path.kind {
            ShapeKind::Filled => EndType::ClosedPolygon,
            ShapeKind::Closed => EndType::ClosedLine,
            ShapeKind::Open => self.params.open_end(),
        }
    }

    fn validate(&self) -> Result<()> {
        let OffsetParams {
            miter_limit,
            arc_step,
            ..
        } = self.params;
        if !miter_limit.is_finite() || miter_limit <= 0.0 {
            return Err(ClipError::InvalidParameters(format!("miter limit {miter_limit}")).into());
        }
        if !arc_step.is_finite() || arc_step <= 0.0 {
            return Err(ClipError::InvalidParameters(format!("arc step {arc_step}")).into());
        }
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn outline_filled(&self, filled: &PolygonSet) -> Result<Vec<FloatContour>> {
        let merged = boolean_op(filled, &PolygonSet::new(), BooleanOp::Union, FillRule::NonZero)?;
        let style = OutlineStyle::new(self.distance as f64).line_join(self.params.line_join());

        // Each shape is outlined on its own; overlaps between the grown
        // shapes are merged by the final union.
        let mut out = Vec::new();
        let mut shape: Vec<FloatContour> = Vec::new();
        for poly in merged.iter() {
            if poly.is_outer() && !shape.is_empty() {
                out.extend(shape.outline(&style).into_iter().flatten());
                shape.clear();
            }
            shape.push(to_float_contour(poly.points())?);
        }
        if !shape.is_empty() {
            out.extend(shape.outline(&style).into_iter().flatten());
        }
        Ok(out)
    }

    #[allow(clippy::cast_precision_loss)]
    fn stroke_line(&self, path: &Path, end: EndType) -> Result<Vec<FloatContour>> {
        if path.len() < 2 {
            return Ok(Vec::new());
        }
        let width = 2.0 * self.distance.unsigned_abs() as f64;
        let style = StrokeStyle::new(width)
            .line_join(self.params.line_join())
            .start_cap(self.params.line_cap(end))
            .end_cap(self.params.line_cap(end));
        let line = to_float_contour(&path.points)?;
        Ok(line
            .stroke(style, end == EndType::ClosedLine)
            .into_iter()
            .flatten()
            .collect())
    }
}

impl PolygonSet {
    /// Offsets the filled area of this set with default parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn offset(&self, distance: Coord) -> Result<PolygonSet> {
        self.offset_with(distance, OffsetParams::default())
    }

    /// Offsets the filled area of this set.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn offset_with(&self, distance: Coord, params: OffsetParams) -> Result<PolygonSet> {
        if distance == 0 {
            return Ok(self.clone());
        }
        let paths: PathSet = self.iter().map(|poly| poly.to_path(ShapeKind::Filled)).collect();
        PolygonOffset::new(&paths, distance).with_params(params).execute()
    }

    /// The band between the area grown by `outer_offset` and the area shrunk
    /// by `inner_offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn tube_shape(&self, inner_offset: Coord, outer_offset: Coord) -> Result<PolygonSet> {
        let outer = self.offset(outer_offset)?;
        let inner = self.offset(-inner_offset)?;
        outer.difference(&inner)
    }
}

impl PathSet {
    /// Offsets every path according to its kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn offset(&self, distance: Coord, params: OffsetParams) -> Result<PolygonSet> {
        PolygonOffset::new(self, distance).with_params(params).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolysetError;
    use crate::geometry::Polygon;
    use crate::math::{Point, MAX_CLIP_EXTENT};
    use crate::operations::offset::JoinType;

    fn square(x0: i64, y0: i64, x1: i64, y1: i64) -> Polygon {
        Polygon::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    #[test]
    fn zero_distance_is_identity() {
        let set = PolygonSet::from_polygons(vec![square(0, 0, 10, 10), square(5, 5, 20, 20)]);
        assert_eq!(set.offset(0).unwrap(), set);
    }

    #[test]
    fn miter_outset_of_square() {
        let set = PolygonSet::from_polygons(vec![square(0, 0, 1000, 1000)]);
        let params = OffsetParams::default().with_miter_limit(2.0);
        let out = set.offset_with(100, params).unwrap();
        assert_eq!(out.len(), 1);
        // Between fully beveled and fully mitered corners.
        assert!(out.area() > 1_419_000.0);
        assert!(out.area() < 1_440_001.0);
    }

    #[test]
    fn inset_can_vanish() {
        let set = PolygonSet::from_polygons(vec![square(0, 0, 100, 100)]);
        assert!(set.offset(-60).unwrap().is_empty());
    }

    #[test]
    fn overlapping_inputs_are_merged_first() {
        let set =
            PolygonSet::from_polygons(vec![square(0, 0, 1000, 1000), square(500, 0, 1500, 1000)]);
        let out = set.offset(-100).unwrap();
        assert_eq!(out.len(), 1);
        assert!((out.area() - 1300.0 * 800.0).abs() < 1.0);
    }

    #[test]
    fn tube_shape_is_a_ring() {
        let set = PolygonSet::from_polygons(vec![square(0, 0, 1000, 1000)]);
        let tube = set.tube_shape(100, 100).unwrap();
        assert_eq!(tube.len(), 2);
        let inner = 800.0 * 800.0;
        assert!(tube.area() > 1_419_000.0 - inner);
        assert!(tube.area() < 1_440_001.0 - inner);
    }

    #[test]
    fn open_line_becomes_band() {
        let paths: PathSet = vec![Path::open(vec![Point::new(0, 0), Point::new(1000, 0)])]
            .into_iter()
            .collect();
        let params = OffsetParams::default().with_join(JoinType::Square);
        let out = paths.offset(50, params).unwrap();
        assert_eq!(out.len(), 1);
        // Round caps add a bit more than the plain 1000 x 100 band.
        assert!(out.area() > 100_000.0);
        assert!(out.area() < 100_000.0 + std::f64::consts::PI * 2500.0 + 1.0);
    }

    fn segment() -> PathSet {
        vec![Path::open(vec![Point::new(0, 0), Point::new(1000, 0)])]
            .into_iter()
            .collect()
    }

    #[test]
    fn zero_distance_keeps_every_path() {
        let triangle = vec![Point::new(0, 0), Point::new(100, 0), Point::new(0, 100)];
        let paths: PathSet = vec![
            Path::open(vec![Point::new(0, 500), Point::new(300, 500)]),
            Path::new(triangle, ShapeKind::Filled),
        ]
        .into_iter()
        .collect();
        let out = paths.offset(0, OffsetParams::default()).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].len(), 2);
        assert_eq!(out[1].len(), 3);
    }

    #[test]
    fn open_end_override() {
        let butt = OffsetParams::default().with_end(EndType::OpenButt);
        let out = segment().offset(50, butt).unwrap();
        assert!((out.area() - 100_000.0).abs() < 1.0);

        let square = OffsetParams::default().with_end(EndType::OpenSquare);
        let out = segment().offset(50, square).unwrap();
        assert!((out.area() - 110_000.0).abs() < 1.0);
    }

    #[test]
    fn open_path_as_area_or_ring() {
        let open: PathSet = vec![Path::open(vec![
            Point::new(0, 0),
            Point::new(1000, 0),
            Point::new(1000, 1000),
            Point::new(0, 1000),
        ])]
        .into_iter()
        .collect();
        let params = OffsetParams::default().with_join(JoinType::Square);

        let area = open.offset(-100, params.with_end(EndType::ClosedPolygon)).unwrap();
        assert_eq!(area.len(), 1);
        assert!((area.area() - 640_000.0).abs() < 1.0);

        let ring = open.offset(100, params.with_end(EndType::ClosedLine)).unwrap();
        assert_eq!(ring.len(), 2);
        assert!(ring.iter().any(Polygon::is_hole));
    }

    #[test]
    fn offset_margin_counts_towards_engine_extent() {
        let set = PolygonSet::from_polygons(vec![square(0, 0, MAX_CLIP_EXTENT - 100, 10)]);
        assert!(matches!(
            set.offset(100),
            Err(PolysetError::Clip(ClipError::ExtentOutOfRange { .. }))
        ));
        assert!(set.offset(10).is_ok());
    }
}
