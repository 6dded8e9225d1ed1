//! Fixed-point planar polygon kernel.
//!
//! Contours live on an integer grid ([`Coord`](math::Coord), one unit per
//! micrometer) and are grouped into a [`PolygonSet`]. Boolean operations and
//! offsets go through an exact clipping engine; everything else (nesting,
//! containment, smoothing, repair) is computed directly on the grid.

pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod operations;

pub use error::{PolysetError, Result};
pub use geometry::{Orientation, Part, Path, PathSet, Polygon, PolygonSet, ShapeKind};
pub use math::{Coord, Point};
pub use operations::boolean::{BooleanOp, FillRule, NestingTree, NodeId};
pub use operations::nesting::PartsView;
pub use operations::offset::{EndType, JoinType, OffsetParams};
