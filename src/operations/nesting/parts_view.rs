use crate::error::{PolysetError, Result};
use crate::geometry::{Part, PolygonSet};

use super::split::{split_fill, walk_parts};

/// Part membership over a reordered polygon set.
///
/// Holds, for every part, the positions of its contours (outer first) in the
/// set it was built from. The view owns a copy of that set, so lookups never
/// read stale data; [`PartsView::check_against`] tells whether a caller's
/// set still matches the snapshot.
#[derive(Debug, Clone, Default)]
pub struct PartsView {
    polygons: PolygonSet,
    parts: Vec<Vec<usize>>,
}

impl PartsView {
    /// Number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The reordered set the indices refer to.
    #[must_use]
    pub fn polygons(&self) -> &PolygonSet {
        &self.polygons
    }

    /// Indices of the contours of part `part_idx`, outer first.
    #[must_use]
    pub fn part_indices(&self, part_idx: usize) -> Option<&[usize]> {
        self.parts.get(part_idx).map(Vec::as_slice)
    }

    /// Finds the part owning contour `poly_idx`.
    ///
    /// Returns the part index and the index of that part's outer boundary in
    /// the reordered set.
    #[must_use]
    pub fn get_part_containing(&self, poly_idx: usize) -> Option<(usize, usize)> {
        self.parts.iter().enumerate().find_map(|(part_idx, indices)| {
            let &boundary = indices.first()?;
            indices
                .contains(&poly_idx)
                .then_some((part_idx, boundary))
        })
    }

    /// Copies the contours of part `part_idx` out of the snapshot, outer
    /// first. Out-of-range parts yield an empty part.
    #[must_use]
    pub fn assemble_part(&self, part_idx: usize) -> Part {
        let Some(indices) = self.parts.get(part_idx) else {
            return Part::default();
        };
        indices
            .iter()
            .filter_map(|&idx| self.polygons.get(idx).cloned())
            .collect::<Vec<_>>()
            .into()
    }

    /// Assembles the part owning contour `poly_idx`; empty if no part owns it.
    #[must_use]
    pub fn assemble_part_containing(&self, poly_idx: usize) -> Part {
        self.get_part_containing(poly_idx)
            .map_or_else(Part::default, |(part_idx, _)| self.assemble_part(part_idx))
    }

    /// Checks that `set` is the set this view was built from.
    ///
    /// # Errors
    ///
    /// Returns [`PolysetError::StaleIndex`] if `set` differs from the
    /// snapshot.
    pub fn check_against(&self, set: &PolygonSet) -> Result<()> {
        if set.len() != self.polygons.len() {
            return Err(PolysetError::StaleIndex(format!(
                "view was built for {} contours, set has {}",
                self.polygons.len(),
                set.len()
            )));
        }
        if let Some(idx) = set
            .iter()
            .zip(self.polygons.iter())
            .position(|(a, b)| a != b)
        {
            return Err(PolysetError::StaleIndex(format!("contour {idx} was modified")));
        }
        Ok(())
    }
}

impl PolygonSet {
    /// Splits the set into parts like [`PolygonSet::split_into_parts`], but
    /// replaces the set with its contours in depth-first part order and
    /// returns a view indexing into it.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input. The set is
    /// left untouched in that case.
    pub fn split_into_parts_view(&mut self, union_all: bool) -> Result<PartsView> {
        let mut view = PartsView::default();
        if self.is_empty() {
            return Ok(view);
        }
        let tree = self.union_tree(split_fill(union_all))?;
        let mut reordered = PolygonSet::new();
        walk_parts(&tree, |part| {
            let start = reordered.len();
            let count = part.len();
            reordered.extend(part.polygons().iter().cloned());
            view.parts.push((start..start + count).collect());
        })?;
        view.polygons = reordered.clone();
        *self = reordered;
        Ok(view)
    }
}
