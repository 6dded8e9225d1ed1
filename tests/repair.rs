#![allow(clippy::unwrap_used)]

mod common;

use std::f64::consts::PI;

use approx::assert_relative_eq;
use common::{hole, init_tracing, rect};
use polyset::math::rotation_matrix;
use polyset::operations::simplify::remove_degenerate_points;
use polyset::{Point, Polygon, PolygonSet};

fn poly(coords: &[(i64, i64)]) -> Polygon {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn area_is_invariant_under_rotation_and_reversal() {
    let original = poly(&[(0, 0), (4000, 0), (4000, 1000), (1000, 1000), (1000, 3000), (0, 3000)]);
    let area = original.area();
    assert_relative_eq!(area, 6_000_000.0);

    let mut quarter = original.clone();
    quarter.apply_matrix(&rotation_matrix(PI / 2.0));
    assert_relative_eq!(quarter.area(), area);

    let mut tilted = original.clone();
    tilted.apply_matrix(&rotation_matrix(0.5));
    assert_relative_eq!(tilted.area(), area, max_relative = 1e-3);

    let mut reversed = original.clone();
    reversed.reverse();
    assert_relative_eq!(reversed.area(), -area);
    assert!(reversed.is_hole());
}

#[test]
fn degenerate_removal_is_idempotent() {
    let inputs = [
        poly(&[(0, 0), (100, 0), (200, 0), (100, 0), (100, 100), (0, 100)]),
        poly(&[
            (0, 0),
            (0, 0),
            (50, 0),
            (50, 50),
            (50, 0),
            (100, 0),
            (100, 100),
            (0, 100),
            (0, 50),
            (0, 200),
        ]),
        poly(&[(10, 0), (20, 0), (20, 10), (0, 10), (0, 0), (-30, 0)]),
        poly(&[(0, 0), (10, 0), (0, 0)]),
    ];
    for input in &inputs {
        let once = remove_degenerate_points(input.points(), true);
        let twice = remove_degenerate_points(&once, true);
        assert_eq!(once, twice, "input {input:?}");
    }

    let mut set: PolygonSet = inputs.into_iter().collect();
    set.remove_degenerate_verts();
    let snapshot = set.clone();
    set.remove_degenerate_verts();
    assert_eq!(set, snapshot);
    assert!(set.iter().all(|p| p.len() >= 3));
}

#[test]
fn remove_matches_within_tolerance() {
    let set = PolygonSet::from_polygons(vec![rect(0, 0, 100, 100), rect(500, 0, 600, 100)]);
    let mut shifted = set.clone();
    shifted.translate(Point::new(1, 1));

    assert_eq!(set.remove(&shifted, 1).len(), 2);
    assert!(set.remove(&shifted, 2).is_empty());
    assert!(set.remove(&set, 0).is_empty());

    let only_first = PolygonSet::from_polygons(vec![rect(0, 0, 100, 100)]);
    let rest = set.remove(&only_first, 0);
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0], set[1]);
}

#[test]
fn l_shape_convex_hull() {
    let mut set = PolygonSet::from_wkt(
        "POLYGON ((0 0, 2000 0, 2000 1000, 1000 1000, 1000 2000, 0 2000, 0 0))",
    )
    .unwrap();
    set.make_convex();
    assert_eq!(
        set.to_wkt(),
        "POLYGON ((0 0, 2000 0, 2000 1000, 1000 2000, 0 2000, 0 0))"
    );
}

#[test]
fn tiny_outline_followed_by_larger_hole() {
    init_tracing();
    let mut set = PolygonSet::from_polygons(vec![
        rect(0, 0, 10, 10),
        hole(-500, -500, 500, 500),
        rect(1000, 0, 2000, 1000),
    ]);
    set.remove_small_area_circumference(1000.0, 0, false);
    assert_eq!(set.len(), 1);
    assert_relative_eq!(set.area(), 1_000_000.0);
}

#[test]
fn touching_squares_become_manifold() {
    init_tracing();
    let mut set = PolygonSet::from_polygons(vec![rect(0, 0, 100, 100), rect(100, 100, 200, 200)]);
    set.ensure_manifold().unwrap();
    assert!(set.duplicate_locations().is_empty());
    assert_eq!(set.split_into_parts(true).unwrap().len(), 2);
}

#[test]
fn smoothing_keeps_the_shape_closed() {
    let mut set = PolygonSet::from_polygons(vec![poly(&[
        (0, 0),
        (5000, 0),
        (5000, 2000),
        (5100, 2050),
        (5200, 2000),
        (5200, 5000),
        (0, 5000),
    ])]);
    let before = set.area();
    let settings = polyset::operations::simplify::SmoothSettings::new(250, 20, 5f64.to_radians());
    set.smooth_corners(&settings);
    assert!(set[0].len() >= 3);
    assert_relative_eq!(set.area(), before, max_relative = 0.01);

    let simplified = set.smooth(50);
    assert_eq!(simplified.len(), 1);
}
