use tracing::debug;

use crate::error::Result;
use crate::geometry::{Part, PolygonSet};
use crate::operations::boolean::{FillRule, NestingTree, NodeId};

/// Fill rule for the union preceding a split.
pub(crate) fn split_fill(union_all: bool) -> FillRule {
    if union_all {
        FillRule::NonZero
    } else {
        FillRule::EvenOdd
    }
}

/// One step of the part walk.
///
/// Starts a part at `node`: its contour is the outer boundary and each direct
/// child is appended as a hole. Returns the part together with the nodes the
/// walk continues on, which are the islands inside those holes; each of them
/// starts a part of its own.
///
/// # Errors
///
/// Returns an error if `node` or one of its children is not in `tree`.
pub fn walk_step(tree: &NestingTree, node: NodeId) -> Result<(Part, Vec<NodeId>)> {
    let outer = tree.node(node)?;
    let mut part = Part::new(outer.contour.clone());
    let mut next = Vec::new();
    for &hole_id in &outer.children {
        let hole = tree.node(hole_id)?;
        part.push_hole(hole.contour.clone());
        next.extend_from_slice(&hole.children);
    }
    Ok((part, next))
}

/// Visits every part of `tree` in depth-first order.
pub(crate) fn walk_parts(tree: &NestingTree, mut visit: impl FnMut(Part)) -> Result<()> {
    let mut pending: Vec<NodeId> = tree.roots().iter().rev().copied().collect();
    while let Some(node) = pending.pop() {
        let (part, islands) = walk_step(tree, node)?;
        visit(part);
        pending.extend(islands.into_iter().rev());
    }
    Ok(())
}

impl PolygonSet {
    /// Splits the set into connected parts.
    ///
    /// The set is first unioned, with the non-zero rule if `union_all` is
    /// set and the even-odd rule otherwise. Every outer contour of the result
    /// starts a part holding its direct holes; islands inside those holes
    /// start parts of their own.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn split_into_parts(&self, union_all: bool) -> Result<Vec<Part>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        let tree = self.union_tree(split_fill(union_all))?;
        let mut parts = Vec::new();
        walk_parts(&tree, |part| parts.push(part))?;
        debug!(contours = self.len(), parts = parts.len(), "split into parts");
        Ok(parts)
    }
}
