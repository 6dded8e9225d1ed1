mod params;
mod polygon_offset;

pub use params::{EndType, JoinType, OffsetParams};
pub use polygon_offset::PolygonOffset;
