use std::collections::HashSet;

use tracing::debug;

use crate::error::Result;
use crate::geometry::{Polygon, PolygonSet};
use crate::math::{Point, MANIFOLD_DOT_RADIUS};

/// Small diamond centred on `p`.
fn dot(p: Point) -> Polygon {
    let r = MANIFOLD_DOT_RADIUS;
    Polygon::new(vec![
        p + Point::new(r, 0),
        p + Point::new(0, r),
        p + Point::new(-r, 0),
        p + Point::new(0, -r),
    ])
}

impl PolygonSet {
    /// Vertex locations that occur more than once in the set, in order of
    /// their second occurrence.
    #[must_use]
    pub fn duplicate_locations(&self) -> Vec<Point> {
        let mut seen: HashSet<Point> = HashSet::new();
        let mut reported: HashSet<Point> = HashSet::new();
        let mut out = Vec::new();
        for p in self.all_points() {
            if !seen.insert(p) && reported.insert(p) {
                out.push(p);
            }
        }
        out
    }

    /// Separates contours that touch in a single shared vertex.
    ///
    /// Every vertex location used more than once is cut out with a small
    /// diamond, so that the touching contours no longer meet.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input. The set is
    /// left untouched in that case.
    pub fn ensure_manifold(&mut self) -> Result<()> {
        let duplicates = self.duplicate_locations();
        if duplicates.is_empty() {
            return Ok(());
        }
        let dots: PolygonSet = duplicates.iter().map(|&p| dot(p)).collect();
        let cut = dots.union()?;
        *self = self.difference(&cut)?;
        debug!(locations = duplicates.len(), "separated touching contours");
        Ok(())
    }
}
