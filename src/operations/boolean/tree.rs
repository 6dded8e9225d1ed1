use slotmap::SlotMap;

use crate::error::GeometryError;
use crate::geometry::{Polygon, PolygonSet};
use crate::math::polygon_2d::{classify_point, signed_area_x2, PointClassification};
use crate::math::Point;

use super::engine::GridShape;

slotmap::new_key_type! {
    /// Unique identifier for a contour node in a [`NestingTree`].
    pub struct NodeId;
}

/// One contour of a nesting tree.
#[derive(Debug, Clone)]
pub struct NestingNode {
    /// The contour itself.
    pub contour: Polygon,
    /// Contours nested directly inside this one.
    pub children: Vec<NodeId>,
    /// `true` at odd depth.
    pub is_hole: bool,
}

/// Parent/child structure of non-crossing contours.
///
/// Roots are outermost contours. The children of an outer contour are its
/// holes; the children of a hole are the outer contours of islands inside it.
#[derive(Debug, Default)]
pub struct NestingTree {
    nodes: SlotMap<NodeId, NestingNode>,
    roots: Vec<NodeId>,
}

impl NestingTree {
    /// Creates a new, empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an outermost contour and returns its ID.
    pub fn add_root(&mut self, contour: Polygon) -> NodeId {
        let id = self.nodes.insert(NestingNode {
            contour,
            children: Vec::new(),
            is_hole: false,
        });
        self.roots.push(id);
        id
    }

    /// Inserts a contour nested directly inside `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is not in this tree.
    pub fn add_child(&mut self, parent: NodeId, contour: Polygon) -> Result<NodeId, GeometryError> {
        let is_hole = !self.node(parent)?.is_hole;
        let id = self.nodes.insert(NestingNode {
            contour,
            children: Vec::new(),
            is_hole,
        });
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Returns a reference to the node, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in this tree.
    pub fn node(&self, id: NodeId) -> Result<&NestingNode, GeometryError> {
        self.nodes
            .get(id)
            .ok_or(GeometryError::NodeNotFound)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NestingNode, GeometryError> {
        self.nodes
            .get_mut(id)
            .ok_or(GeometryError::NodeNotFound)
    }

    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Children of `id`; empty for unknown IDs.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map_or(&[], |node| node.children.as_slice())
    }

    /// Number of contours in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All contours in depth-first pre-order.
    #[must_use]
    pub fn to_polygon_set(&self) -> PolygonSet {
        let mut out = PolygonSet::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get(id) {
                out.push(node.contour.clone());
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Builds the tree from engine shapes.
    ///
    /// Each shape's holes become children of its outer contour. A shape whose
    /// outer contour lies inside a hole of another shape becomes a child of the
    /// smallest such hole.
    pub(crate) fn from_shapes(shapes: Vec<GridShape>) -> Self {
        let parents = find_enclosing_holes(&shapes);

        let mut tree = Self::new();
        let mut outer_ids = Vec::with_capacity(shapes.len());
        let mut hole_ids: Vec<Vec<NodeId>> = Vec::with_capacity(shapes.len());
        for shape in shapes {
            let mut contours = shape.into_iter();
            let Some(outer) = contours.next() else {
                outer_ids.push(None);
                hole_ids.push(Vec::new());
                continue;
            };
            let outer_id = tree.nodes.insert(NestingNode {
                contour: Polygon::new(outer),
                children: Vec::new(),
                is_hole: false,
            });
            let holes: Vec<NodeId> = contours
                .map(|hole| {
                    tree.nodes.insert(NestingNode {
                        contour: Polygon::new(hole),
                        children: Vec::new(),
                        is_hole: true,
                    })
                })
                .collect();
            if let Some(node) = tree.nodes.get_mut(outer_id) {
                node.children.clone_from(&holes);
            }
            outer_ids.push(Some(outer_id));
            hole_ids.push(holes);
        }

        for (shape_idx, parent) in parents.into_iter().enumerate() {
            let Some(outer_id) = outer_ids[shape_idx] else {
                continue;
            };
            match parent {
                Some((parent_shape, hole_idx)) => {
                    let hole_id = hole_ids[parent_shape][hole_idx - 1];
                    tree.link_island(hole_id, outer_id);
                }
                None => tree.roots.push(outer_id),
            }
        }
        tree
    }

    /// Attaches the island rooted at `island` below the hole `hole`, fixing
    /// up the parity of the island's subtree.
    fn link_island(&mut self, hole: NodeId, island: NodeId) {
        if let Some(node) = self.nodes.get_mut(hole) {
            node.children.push(island);
        }
        let hole_is_hole = self.nodes.get(hole).is_some_and(|n| n.is_hole);
        let mut stack = vec![(island, !hole_is_hole)];
        while let Some((id, is_hole)) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(id) {
                node.is_hole = is_hole;
                stack.extend(node.children.iter().map(|&c| (c, !is_hole)));
            }
        }
    }
}

/// For every shape, finds the smallest hole of another shape containing its
/// outer contour, as `(shape index, contour index)`.
fn find_enclosing_holes(shapes: &[GridShape]) -> Vec<Option<(usize, usize)>> {
    shapes
        .iter()
        .enumerate()
        .map(|(shape_idx, shape)| {
            let outer = shape.first()?;
            let mut best: Option<((usize, usize), i128)> = None;
            for (other_idx, other) in shapes.iter().enumerate() {
                if other_idx == shape_idx {
                    continue;
                }
                for (hole_idx, hole) in other.iter().enumerate().skip(1) {
                    let area = signed_area_x2(hole).abs();
                    if best.is_some_and(|(_, best_area)| best_area <= area) {
                        continue;
                    }
                    if contour_inside(outer, hole) {
                        best = Some(((other_idx, hole_idx), area));
                    }
                }
            }
            best.map(|(at, _)| at)
        })
        .collect()
}

/// Containment of a non-crossing contour: decided by the first vertex that
/// is not on the other contour's boundary.
fn contour_inside(inner: &[Point], outer: &[Point]) -> bool {
    for &p in inner {
        match classify_point(p, outer) {
            PointClassification::Inside => return true,
            PointClassification::Outside => return false,
            PointClassification::OnBoundary => {}
        }
    }
    false
}
