//! Operations on polygon sets.
//!
//! Each submodule extends [`PolygonSet`](crate::geometry::PolygonSet) (and,
//! where it applies, [`PathSet`](crate::geometry::PathSet)) with inherent
//! methods; the types that configure an operation are exported here.

pub mod boolean;
pub mod filter;
pub mod hull;
pub mod nesting;
pub mod offset;
pub mod query;
pub mod simplify;
