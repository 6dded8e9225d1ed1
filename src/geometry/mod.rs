pub mod part;
pub mod path;
pub mod polygon;
pub mod polygon_set;

pub use part::Part;
pub use path::{Path, PathSet, ShapeKind};
pub use polygon::{Orientation, Polygon};
pub use polygon_set::PolygonSet;
