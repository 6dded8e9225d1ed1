mod degenerate;
mod primitives;
mod smooth;

pub use degenerate::remove_degenerate_points;
pub use smooth::{smooth_corners, SmoothSettings};
