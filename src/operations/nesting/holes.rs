use crate::error::Result;
use crate::geometry::{Polygon, PolygonSet};
use crate::operations::boolean::{FillRule, NestingTree, NodeId};

impl PolygonSet {
    /// Outermost contours of the even-odd union, without holes or islands.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn get_outside_polygons(&self) -> Result<PolygonSet> {
        if self.is_empty() {
            return Ok(PolygonSet::new());
        }
        let tree = self.union_tree(FillRule::EvenOdd)?;
        tree.roots()
            .iter()
            .map(|&id| -> Result<Polygon> { Ok(tree.node(id)?.contour.clone()) })
            .collect()
    }

    /// The even-odd union without the holes that hold no islands.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn remove_empty_holes(&self) -> Result<PolygonSet> {
        self.filter_holes(true)
    }

    /// Holes of the even-odd union that hold no islands.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn get_empty_holes(&self) -> Result<PolygonSet> {
        self.filter_holes(false)
    }

    /// With `keep_outlines`, collects every outline and every non-empty
    /// hole; otherwise collects only the empty holes. Islands inside
    /// non-empty holes are searched either way.
    fn filter_holes(&self, keep_outlines: bool) -> Result<PolygonSet> {
        let mut out = PolygonSet::new();
        if self.is_empty() {
            return Ok(out);
        }
        let tree = self.union_tree(FillRule::EvenOdd)?;
        let mut pending: Vec<NodeId> = tree.roots().iter().rev().copied().collect();
        while let Some(outline_id) = pending.pop() {
            let outline = tree.node(outline_id)?;
            if keep_outlines {
                out.push(outline.contour.clone());
            }
            for &hole_id in &outline.children {
                let hole = tree.node(hole_id)?;
                let empty = hole.children.is_empty();
                if empty != keep_outlines {
                    out.push(hole.contour.clone());
                }
                push_islands(&tree, hole_id, &mut pending);
            }
        }
        Ok(out)
    }
}

fn push_islands(tree: &NestingTree, hole: NodeId, pending: &mut Vec<NodeId>) {
    pending.extend(tree.children(hole).iter().rev().copied());
}
