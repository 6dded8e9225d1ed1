mod engine;
mod polyline_clip;
mod select;
mod set_ops;
mod tree;

pub(crate) use engine::{
    boolean_shapes, check_extent, overlay_float, set_to_float, shapes_from_float, shapes_to_set,
    to_float_contour, FloatContour, GridShape,
};
pub use engine::boolean_op;
pub use select::{BooleanOp, FillRule};
pub use tree::{NestingNode, NestingTree, NodeId};
