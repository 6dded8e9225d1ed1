#![allow(dead_code)]

use polyset::{Point, Polygon, PolygonSet};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber controlled by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Counter-clockwise axis-aligned rectangle.
pub fn rect(x0: i64, y0: i64, x1: i64, y1: i64) -> Polygon {
    Polygon::new(vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ])
}

/// Clockwise axis-aligned rectangle.
pub fn hole(x0: i64, y0: i64, x1: i64, y1: i64) -> Polygon {
    let mut poly = rect(x0, y0, x1, y1);
    poly.reverse();
    poly
}

/// Outer square with a hole, an island inside the hole, and a separate
/// square to the right. All contours are counter-clockwise.
pub fn nested_scene() -> PolygonSet {
    PolygonSet::from_polygons(vec![
        rect(0, 0, 1000, 1000),
        rect(100, 100, 900, 900),
        rect(400, 400, 600, 600),
        rect(2000, 0, 3000, 1000),
    ])
}
