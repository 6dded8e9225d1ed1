use tracing::debug;

use crate::error::Result;
use crate::geometry::{PathSet, PolygonSet, ShapeKind};
use crate::math::{Coord, APPROX_HULL_OVERSHOOT};
use crate::operations::offset::{JoinType, OffsetParams, PolygonOffset};

impl PolygonSet {
    /// A rounded outline around the set that bridges concavities up to
    /// roughly [`APPROX_HULL_OVERSHOOT`] wide, grown by `extra_outset`.
    ///
    /// Every contour is grown on its own, holes included, so overlapping
    /// contours never interact during the first offset. The grown shapes are
    /// merged and then shrunk back.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn approx_convex_hull(&self, extra_outset: Coord) -> Result<PolygonSet> {
        let round = OffsetParams::default().with_join(JoinType::Round);
        let mut grown = PolygonSet::new();
        for poly in self.iter().filter(|poly| poly.len() >= 3) {
            let mut outline = poly.clone();
            if outline.is_hole() {
                outline.reverse();
            }
            let paths: PathSet = std::iter::once(outline.to_path(ShapeKind::Filled)).collect();
            grown.add(
                &PolygonOffset::new(&paths, APPROX_HULL_OVERSHOOT)
                    .with_params(round)
                    .execute()?,
            );
        }
        let merged = grown.union()?;
        let hull = merged.offset_with(extra_outset - APPROX_HULL_OVERSHOOT, round)?;
        debug!(inputs = self.len(), outputs = hull.len(), "approximate hull");
        Ok(hull)
    }
}
