//! Textual exchange format for polygon sets.

pub mod wkt;
