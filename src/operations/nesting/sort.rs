use crate::error::Result;
use crate::geometry::PolygonSet;
use crate::operations::boolean::{FillRule, NodeId};

impl PolygonSet {
    /// Groups the contours of the even-odd union by nesting depth.
    ///
    /// Layer 0 holds the outermost contours, layer 1 their holes, layer 2 the
    /// islands inside those holes, and so on.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn sort_by_nesting(&self) -> Result<Vec<PolygonSet>> {
        let mut layers: Vec<PolygonSet> = Vec::new();
        if self.is_empty() {
            return Ok(layers);
        }
        let tree = self.union_tree(FillRule::EvenOdd)?;
        let mut pending: Vec<(NodeId, usize)> =
            tree.roots().iter().rev().map(|&id| (id, 0)).collect();
        while let Some((id, depth)) = pending.pop() {
            let node = tree.node(id)?;
            if layers.len() <= depth {
                layers.resize_with(depth + 1, PolygonSet::new);
            }
            layers[depth].push(node.contour.clone());
            pending.extend(node.children.iter().rev().map(|&c| (c, depth + 1)));
        }
        Ok(layers)
    }
}
