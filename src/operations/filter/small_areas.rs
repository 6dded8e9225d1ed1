use tracing::debug;

use crate::geometry::{Polygon, PolygonSet};
use crate::math::Coord;

impl PolygonSet {
    /// Removes contours whose absolute area is below `min_area`.
    ///
    /// With `remove_holes`, outlines and holes are treated alike. Otherwise
    /// small outlines are removed, while a small hole is removed only if its
    /// first vertex lies inside one of the removed outlines; holes of
    /// surviving outlines are kept whatever their size.
    ///
    /// Removed contours are replaced by the last contour of the set, so the
    /// order of the survivors is not preserved.
    pub fn remove_small_areas(&mut self, min_area: f64, remove_holes: bool) {
        let before = self.len();
        let mut removed_outlines: Vec<Polygon> = Vec::new();
        let mut small_holes: Vec<usize> = Vec::new();
        let mut idx = 0;
        while idx < self.len() {
            let area = self[idx].area();
            if area.abs() >= min_area {
                idx += 1;
                continue;
            }
            if remove_holes || area >= 0.0 {
                if let Some(outline) = self.remove_at(idx) {
                    if !remove_holes {
                        removed_outlines.push(outline);
                    }
                }
                continue;
            }
            small_holes.push(idx);
            idx += 1;
        }

        // Holes were recorded in increasing order and only unvisited
        // contours were moved since, so removing from the back keeps the
        // remaining indices valid.
        for &hole_idx in small_holes.iter().rev() {
            let orphaned = self[hole_idx].first().is_some_and(|p| {
                removed_outlines.iter().any(|outline| outline.inside(p, false))
            });
            if orphaned {
                self.remove_at(hole_idx);
            }
        }
        if self.len() < before {
            debug!(removed = before - self.len(), min_area, "removed small areas");
        }
    }

    /// Removes outlines whose absolute area is below `min_area` or whose
    /// circumference is below `min_circumference`, together with every hole
    /// that follows a removed outline up to the next outline.
    ///
    /// Holes after a kept outline are kept, unless `remove_holes` is set and
    /// they fail the thresholds themselves.
    #[allow(clippy::cast_precision_loss)]
    pub fn remove_small_area_circumference(
        &mut self,
        min_area: f64,
        min_circumference: Coord,
        remove_holes: bool,
    ) {
        let before = self.len();
        let min_circumference = min_circumference as f64;
        let passes = |poly: &Polygon| {
            poly.length() >= min_circumference && poly.area().abs() >= min_area
        };
        let mut outline_removed = false;
        self.retain(|poly| {
            if poly.area() >= 0.0 {
                outline_removed = !passes(poly);
                return !outline_removed;
            }
            if outline_removed {
                return false;
            }
            !remove_holes || passes(poly)
        });
        if self.len() < before {
            debug!(removed = before - self.len(), "removed small contours");
        }
    }

    /// [`PolygonSet::remove_small_area_circumference`] without an area
    /// threshold.
    pub fn remove_small_circumference(&mut self, min_circumference: Coord, remove_holes: bool) {
        self.remove_small_area_circumference(0.0, min_circumference, remove_holes);
    }
}
