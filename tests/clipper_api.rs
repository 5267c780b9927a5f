use wasm_polyclip::clipper::{self, ClipType, PolyFillType};
use wasm_polyclip::clipper_config::ClipperConfig;
use wasm_polyclip::geometry::point::Point;
use wasm_polyclip::geometry::polygon::{is_simple, signed_area};
use wasm_polyclip::{pack_polygons, simplify_inner, union_inner};

fn to_points(coords: &[(i64, i64)]) -> Vec<Point> {
    coords.iter().map(|&p| Point::from(p)).collect()
}

fn square(x: i64, y: i64, size: i64) -> Vec<Point> {
    to_points(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
}

#[test]
fn test_square_is_returned_unchanged() {
    let result = clipper::simplify_default(&square(0, 0, 10)).unwrap();

    assert_eq!(result.outer, vec![square(0, 0, 10)]);
    assert!(result.holes.is_empty());
}

#[test]
fn test_overlapping_squares_union_area() {
    let result = clipper::union(&[square(0, 0, 10), square(5, 5, 10)]).unwrap();

    assert_eq!(result.outer.len(), 1);
    assert!(result.holes.is_empty());
    // twice the area of 175
    assert_eq!(signed_area(&result.outer[0]), 350);
}

#[test]
fn test_bowtie_splits_into_triangles() {
    let bowtie = to_points(&[(0, 0), (10, 10), (10, 0), (0, 10)]);

    let result = clipper::simplify_default(&bowtie).unwrap();

    assert_eq!(result.outer.len(), 2);
    for ring in &result.outer {
        assert_eq!(signed_area(ring), 50);
        assert!(is_simple(ring));
    }
}

fn looped_ring() -> Vec<Point> {
    // the small loop inside [10, 20] x [10, 20] winds twice
    to_points(&[
        (0, 0),
        (30, 0),
        (30, 20),
        (10, 20),
        (10, 10),
        (20, 10),
        (20, 30),
        (0, 30),
    ])
}

#[test]
fn test_self_overlapping_ring_fill_rules() {
    let non_zero = clipper::simplify(&looped_ring(), PolyFillType::NonZero).unwrap();
    let even_odd = clipper::simplify(&looped_ring(), PolyFillType::EvenOdd).unwrap();

    let outline = to_points(&[(0, 0), (30, 0), (30, 20), (20, 20), (20, 30), (0, 30)]);

    assert_eq!(non_zero.outer, vec![outline.clone()]);
    assert!(non_zero.holes.is_empty());

    assert_eq!(even_odd.outer, vec![outline]);
    assert_eq!(even_odd.holes, vec![to_points(&[(10, 10), (10, 20), (20, 20), (20, 10)])]);
    assert_eq!(non_zero.signed_area() - even_odd.signed_area(), 200);

    for ring in non_zero.rings().chain(even_odd.rings()) {
        assert!(is_simple(ring), "{:?}", ring);
    }
}

#[test]
fn test_simplify_output_is_stable() {
    let first = clipper::simplify_default(&looped_ring()).unwrap();

    let second = clipper::simplify_default(&first.outer[0]).unwrap();

    assert_eq!(second, first);
}

#[test]
fn test_disjoint_union_keeps_every_ring() {
    let rings: Vec<Vec<Point>> = (0..5).map(|i| square(i * 20, i * 3, 10 + i)).collect();
    let expected: i128 = rings.iter().map(|ring| signed_area(ring)).sum();

    let result = clipper::union(&rings).unwrap();

    assert_eq!(result.outer.len(), 5);
    assert_eq!(result.signed_area(), expected);
}

#[test]
fn test_frame_from_four_bars() {
    // four overlapping bars enclose a hole
    let bars = vec![
        to_points(&[(0, 0), (30, 0), (30, 10), (0, 10)]),
        to_points(&[(20, 0), (30, 0), (30, 30), (20, 30)]),
        to_points(&[(0, 20), (30, 20), (30, 30), (0, 30)]),
        to_points(&[(0, 0), (10, 0), (10, 30), (0, 30)]),
    ];

    let result = clipper::union(&bars).unwrap();

    assert_eq!(result.outer, vec![square(0, 0, 30)]);
    assert_eq!(result.holes, vec![to_points(&[(10, 10), (10, 20), (20, 20), (20, 10)])]);
}

#[test]
fn test_union_orientation_marks_holes() {
    let mut inner = square(10, 10, 10);
    inner.reverse();
    let mut reversed_outer = square(0, 0, 30);
    reversed_outer.reverse();

    let result = clipper::union(&[square(0, 0, 30), inner.clone()]).unwrap();
    let all_reversed = clipper::union(&[reversed_outer, inner]).unwrap();

    assert_eq!(result.outer, vec![square(0, 0, 30)]);
    assert_eq!(result.holes, vec![to_points(&[(10, 10), (10, 20), (20, 20), (20, 10)])]);
    assert!(all_reversed.is_empty());
}

#[test]
fn test_combine_rejects_degenerate_ring() {
    let error = clipper::combine(
        &[square(0, 0, 10), to_points(&[(0, 0), (4, 4), (8, 8)])],
        ClipType::Union,
        PolyFillType::NonZero,
        PolyFillType::NonZero,
    )
    .unwrap_err();

    assert!(!error.is_internal());
}

#[test]
fn test_marshaled_union_round_trip() {
    let config = ClipperConfig::default();
    let squares = vec![
        to_points(&[(0, 0), (10, 0), (10, 10), (0, 10)]),
        to_points(&[(5, 5), (15, 5), (15, 15), (5, 15)]),
    ];
    let refs: Vec<&Vec<Point>> = squares.iter().collect();
    let packed = pack_polygons(&refs, 1.0);

    let result = union_inner(&packed, &config).unwrap();

    assert_eq!(result[0], 1.0);
    assert_eq!(result[1], 0.0);
    assert_eq!(result.len(), 3 + 16);
    assert!(result[3..].iter().all(|v| v.fract() == 0.0));
}

#[test]
fn test_marshaled_simplify_rejects_odd_input() {
    assert!(simplify_inner(&[0.0, 0.0, 1.0], &ClipperConfig::default()).is_err());
}
