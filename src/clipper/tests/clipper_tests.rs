use crate::clipper::clipper::Clipper;
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::geometry::point::Point;
use serde::Deserialize;

const TEST_DATA: &str = include_str!("../__data__/clipper.json");

#[derive(Debug, Deserialize)]
struct PointData {
    x: i64,
    y: i64,
}

#[derive(Debug, Deserialize)]
struct TestInput {
    #[serde(rename = "subjectPolygons")]
    subject_polygons: Vec<Vec<PointData>>,
    #[serde(rename = "clipPolygons")]
    clip_polygons: Vec<Vec<PointData>>,
    #[serde(rename = "clipType")]
    clip_type: u8,
    #[serde(rename = "fillType")]
    fill_type: u8,
}

#[derive(Debug, Deserialize)]
struct TestCase {
    id: String,
    input: TestInput,
    output: Vec<Vec<PointData>>,
}

#[derive(Debug, Deserialize)]
struct TestSuite {
    id: String,
    data: Vec<TestCase>,
}

#[derive(Debug, Deserialize)]
struct TestDataStructure {
    suites: Vec<TestSuite>,
}

fn load_test_data() -> TestDataStructure {
    serde_json::from_str(TEST_DATA).expect("Failed to parse clipper test data")
}

fn create_polygon(points: &[PointData]) -> Vec<Point> {
    points.iter().map(|p| Point::new(p.x, p.y)).collect()
}

fn execute_clipper_operation(input: &TestInput) -> Vec<Vec<Point>> {
    let mut clipper = Clipper::new();

    for polygon_data in &input.subject_polygons {
        clipper
            .add_path(&create_polygon(polygon_data), PolyType::Subject)
            .expect("subject polygon rejected");
    }

    for polygon_data in &input.clip_polygons {
        clipper
            .add_path(&create_polygon(polygon_data), PolyType::Clip)
            .expect("clip polygon rejected");
    }

    let clip_type = ClipType::from_u8(input.clip_type).expect("invalid clip type");
    let fill_type = PolyFillType::from_u8(input.fill_type).expect("invalid fill type");

    clipper
        .execute(clip_type, fill_type, fill_type)
        .expect("Clipper execution failed")
}

/// Order-free comparison; every ring may start at any of its points.
fn compare_polygons(actual: &[Vec<Point>], expected: &[Vec<PointData>]) -> bool {
    if actual.len() != expected.len() {
        eprintln!(
            "Different polygon count: actual={}, expected={}",
            actual.len(),
            expected.len()
        );
        return false;
    }

    let mut matched = vec![false; actual.len()];

    for (exp_idx, expected_poly) in expected.iter().enumerate() {
        let expected_poly = create_polygon(expected_poly);
        let found = actual.iter().enumerate().position(|(act_idx, actual_poly)| {
            !matched[act_idx]
                && actual_poly.len() == expected_poly.len()
                && (0..actual_poly.len()).any(|offset| {
                    let mut rotated = actual_poly.clone();
                    rotated.rotate_left(offset);
                    rotated == expected_poly
                })
        });

        match found {
            Some(act_idx) => matched[act_idx] = true,
            None => {
                eprintln!("Could not find match for expected polygon {}", exp_idx);
                return false;
            }
        }
    }

    true
}

fn run_case(suite_id: &str, case_id: &str) {
    let test_data = load_test_data();
    let suite = test_data
        .suites
        .iter()
        .find(|s| s.id == suite_id)
        .unwrap_or_else(|| panic!("{} suite not found", suite_id));
    let data = suite
        .data
        .iter()
        .find(|d| d.id == case_id)
        .unwrap_or_else(|| panic!("{} test not found", case_id));

    let solution = execute_clipper_operation(&data.input);

    assert!(
        compare_polygons(&solution, &data.output),
        "Polygon comparison failed for {}: {:?}",
        case_id,
        solution
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipperError;

    #[test]
    fn test_overlapping_squares_union() {
        run_case("union_operations", "overlapping_squares_union");
    }

    #[test]
    fn test_adjacent_squares_union() {
        run_case("union_operations", "adjacent_squares_union");
    }

    #[test]
    fn test_disjoint_squares_union() {
        run_case("union_operations", "disjoint_squares_union");
    }

    #[test]
    fn test_nested_squares_even_odd() {
        run_case("union_operations", "nested_squares_even_odd");
    }

    #[test]
    fn test_nested_squares_non_zero() {
        run_case("union_operations", "nested_squares_non_zero");
    }

    #[test]
    fn test_overlapping_squares_intersection() {
        run_case("intersection_operations", "overlapping_squares_intersection");
    }

    #[test]
    fn test_disjoint_squares_intersection() {
        run_case("intersection_operations", "disjoint_squares_intersection");
    }

    #[test]
    fn test_overlapping_squares_difference() {
        run_case("difference_operations", "overlapping_squares_difference");
    }

    #[test]
    fn test_inner_square_difference() {
        run_case("difference_operations", "inner_square_difference");
    }

    #[test]
    fn test_overlapping_squares_xor() {
        run_case("xor_operations", "overlapping_squares_xor");
    }

    #[test]
    fn test_bowtie_non_zero() {
        run_case("self_intersection", "bowtie_non_zero");
    }

    #[test]
    fn test_bowtie_positive() {
        run_case("self_intersection", "bowtie_positive");
    }

    #[test]
    fn test_every_fixture_case_runs() {
        let test_data = load_test_data();

        for suite in &test_data.suites {
            for data in &suite.data {
                let solution = execute_clipper_operation(&data.input);
                assert!(
                    compare_polygons(&solution, &data.output),
                    "{}/{} failed",
                    suite.id,
                    data.id
                );
            }
        }
    }

    #[test]
    fn test_add_path_rejects_short_ring() {
        let mut clipper = Clipper::new();
        let ring = vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 0)];

        let result = clipper.add_path(&ring, PolyType::Subject);

        assert!(matches!(result, Err(ClipperError::InvalidInput(_))));
        assert_eq!(clipper.path_count(), 0);
    }

    #[test]
    fn test_add_path_rejects_out_of_range() {
        let mut clipper = Clipper::new();
        let ring = vec![Point::new(0, 0), Point::new(1 << 40, 0), Point::new(0, 10)];

        assert!(clipper.add_path(&ring, PolyType::Subject).is_err());
    }

    #[test]
    fn test_execute_without_paths() {
        let mut clipper = Clipper::new();

        let solution = clipper
            .execute(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap();

        assert!(solution.is_empty());
    }

    #[test]
    fn test_execute_is_repeatable() {
        let mut clipper = Clipper::new();
        let square = vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        clipper.add_path(&square, PolyType::Subject).unwrap();

        let first = clipper
            .execute(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap();
        let second = clipper
            .execute(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_triple_crossing_collapses_to_one_vertex() {
        // three thin triangles whose long edges all cross at (10, 10)
        let mut clipper = Clipper::new();
        let rings = vec![
            vec![Point::new(0, 0), Point::new(20, 20), Point::new(0, 1)],
            vec![Point::new(20, 0), Point::new(0, 20), Point::new(20, 1)],
            vec![Point::new(10, 0), Point::new(11, 0), Point::new(10, 20)],
        ];
        clipper.add_paths(&rings, PolyType::Subject).unwrap();

        let solution = clipper
            .execute(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap();

        assert!(!solution.is_empty());
        for ring in &solution {
            assert!(crate::geometry::polygon::is_simple(ring), "{:?}", ring);
            assert!(crate::geometry::polygon::signed_area(ring) != 0);
        }
    }
}
