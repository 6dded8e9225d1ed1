mod holes;
mod parts_view;
mod sort;
mod split;

pub use parts_view::PartsView;
pub use split::walk_step;
