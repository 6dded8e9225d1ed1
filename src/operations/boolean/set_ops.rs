use crate::error::Result;
use crate::geometry::{Polygon, PolygonSet};

use super::engine::{boolean_op, boolean_shapes};
use super::select::{BooleanOp, FillRule};
use super::tree::NestingTree;

impl PolygonSet {
    /// Merges all contours of this set, filling by the non-zero rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn union(&self) -> Result<PolygonSet> {
        self.execute(FillRule::NonZero)
    }

    /// Union of this set and `other` under the given fill rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn union_with(&self, other: &PolygonSet, fill: FillRule) -> Result<PolygonSet> {
        boolean_op(self, other, BooleanOp::Union, fill)
    }

    /// Area covered by both sets.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn intersection(&self, other: &PolygonSet) -> Result<PolygonSet> {
        boolean_op(self, other, BooleanOp::Intersection, FillRule::EvenOdd)
    }

    /// Area of this set not covered by `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn difference(&self, other: &PolygonSet) -> Result<PolygonSet> {
        boolean_op(self, other, BooleanOp::Difference, FillRule::EvenOdd)
    }

    /// Area covered by exactly one of the two sets.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn xor(&self, other: &PolygonSet) -> Result<PolygonSet> {
        boolean_op(self, other, BooleanOp::Xor, FillRule::EvenOdd)
    }

    /// Resolves self-overlaps with the even-odd rule, so that overlapping
    /// regions cancel out.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn process_even_odd(&self) -> Result<PolygonSet> {
        self.execute(FillRule::EvenOdd)
    }

    /// Resolves self-overlaps of this set under `fill`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn execute(&self, fill: FillRule) -> Result<PolygonSet> {
        boolean_op(self, &PolygonSet::new(), BooleanOp::Union, fill)
    }

    /// Runs a boolean operation and returns the result as a nesting tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn boolean_tree(
        &self,
        other: &PolygonSet,
        op: BooleanOp,
        fill: FillRule,
    ) -> Result<NestingTree> {
        boolean_shapes(self, other, op, fill).map(NestingTree::from_shapes)
    }

    /// Self-union as a nesting tree.
    pub(crate) fn union_tree(&self, fill: FillRule) -> Result<NestingTree> {
        self.boolean_tree(&PolygonSet::new(), BooleanOp::Union, fill)
    }
}

impl Polygon {
    /// Area shared by this contour and `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipping engine rejects the input.
    pub fn intersection(&self, other: &Polygon) -> Result<PolygonSet> {
        let subject = PolygonSet::from_polygons(vec![self.clone()]);
        let clip = PolygonSet::from_polygons(vec![other.clone()]);
        subject.intersection(&clip)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Point;

    fn rect(x0: i64, y0: i64, x1: i64, y1: i64) -> Polygon {
        Polygon::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    fn set(polys: Vec<Polygon>) -> PolygonSet {
        PolygonSet::from_polygons(polys)
    }

    #[test]
    fn set_algebra() {
        let a = set(vec![rect(0, 0, 100, 100)]);
        let b = set(vec![rect(50, 50, 150, 150)]);

        assert_relative_eq!(a.intersection(&b).unwrap().area(), 2500.0);
        assert_relative_eq!(a.difference(&b).unwrap().area(), 7500.0);
        assert_relative_eq!(a.xor(&b).unwrap().area(), 15_000.0);
        assert_relative_eq!(
            a.union_with(&b, FillRule::NonZero).unwrap().area(),
            17_500.0
        );
    }

    #[test]
    fn fill_rules_on_self_overlap() {
        let overlapping = set(vec![rect(0, 0, 100, 100), rect(50, 0, 150, 100)]);
        assert_relative_eq!(overlapping.union().unwrap().area(), 15_000.0);
        assert_relative_eq!(overlapping.process_even_odd().unwrap().area(), 10_000.0);
    }

    #[test]
    fn polygon_intersection() {
        let out = rect(0, 0, 10, 10).intersection(&rect(5, 5, 20, 20)).unwrap();
        assert_eq!(out.len(), 1);
        assert_relative_eq!(out.area(), 25.0);
    }

    #[test]
    fn tree_of_square_with_hole() {
        let mut hole = rect(250, 250, 750, 750);
        hole.reverse();
        let input = set(vec![rect(0, 0, 1000, 1000), hole]);
        let tree = input.union_tree(FillRule::EvenOdd).unwrap();
        assert_eq!(tree.roots().len(), 1);
        let children = tree.children(tree.roots()[0]);
        assert_eq!(children.len(), 1);
        assert!(tree.node(children[0]).unwrap().is_hole);
    }
}
