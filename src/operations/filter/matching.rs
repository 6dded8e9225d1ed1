use crate::geometry::{Polygon, PolygonSet};
use crate::math::Coord;

/// Returns `true` if `candidate` traces the same ring as `kept`, allowing
/// for a different start vertex and per-vertex deviations of up to
/// `tolerance`.
///
/// The start offset is taken from the vertex of `candidate` closest to the
/// first vertex of `kept`.
fn matches_cyclic(kept: &Polygon, candidate: &Polygon, tolerance: Coord) -> bool {
    let keep = kept.points();
    let other = candidate.points();
    if other.is_empty() || other.len() != keep.len() {
        return false;
    }
    let limit = i128::from(tolerance) * i128::from(tolerance);
    let Some((offset, closest)) = other
        .iter()
        .map(|&p| (p - keep[0]).length_squared())
        .enumerate()
        .min_by_key(|&(idx, dist)| (dist, idx))
    else {
        return false;
    };
    if closest > limit {
        return false;
    }
    let n = other.len();
    keep.iter()
        .enumerate()
        .all(|(idx, &p)| (other[(offset + idx) % n] - p).length_squared() <= limit)
}

impl PolygonSet {
    /// Returns the contours of this set that have no match in
    /// `to_be_removed`.
    ///
    /// Two contours match if they have the same number of vertices and, once
    /// aligned on the vertex closest to the kept contour's start, every pair
    /// of vertices lies within `tolerance`. Empty contours are kept.
    #[must_use]
    pub fn remove(&self, to_be_removed: &PolygonSet, tolerance: Coord) -> PolygonSet {
        self.iter()
            .filter(|kept| {
                kept.is_empty()
                    || !to_be_removed
                        .iter()
                        .any(|candidate| matches_cyclic(kept, candidate, tolerance))
            })
            .cloned()
            .collect()
    }
}
