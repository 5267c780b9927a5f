use crate::geometry::point::Point;
use crate::geometry::segment::{segment_intersection, SegmentIntersection};
use crate::utils::math::cycle_index;

/// Twice the signed area (shoelace sum). Positive for counter-clockwise
/// rings with the Y axis pointing up.
pub fn signed_area(ring: &[Point]) -> i128 {
    let point_count = ring.len();
    if point_count < 3 {
        return 0;
    }

    let mut acc: i128 = 0;
    for i in 0..point_count {
        let curr = &ring[i];
        let next = &ring[cycle_index(i, point_count, 1)];
        acc += curr.x as i128 * next.y as i128 - next.x as i128 * curr.y as i128;
    }

    acc
}

pub fn area(ring: &[Point]) -> f64 {
    signed_area(ring) as f64 * 0.5
}

pub fn is_clockwise(ring: &[Point]) -> bool {
    signed_area(ring) < 0
}

/// Rotates the ring so it starts at its lowest, then leftmost point.
pub fn normalize_start(ring: &mut [Point]) {
    let start = ring
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.sweep_cmp(b))
        .map(|(index, _)| index);

    if let Some(start) = start {
        ring.rotate_left(start);
    }
}

/// A ring is simple when no two of its edges meet except consecutive edges
/// at their shared vertex.
pub fn is_simple(ring: &[Point]) -> bool {
    let point_count = ring.len();
    if point_count < 3 {
        return false;
    }

    for i in 0..point_count {
        let a1 = &ring[i];
        let a2 = &ring[cycle_index(i, point_count, 1)];
        if a1 == a2 {
            return false;
        }

        for j in (i + 1)..point_count {
            let b1 = &ring[j];
            let b2 = &ring[cycle_index(j, point_count, 1)];
            let is_next = j == i + 1;
            let is_prev = i == 0 && j == point_count - 1;

            match segment_intersection(a1, a2, b1, b2) {
                SegmentIntersection::None => {}
                SegmentIntersection::Point(point) => {
                    let shared = if is_next {
                        Some(a2)
                    } else if is_prev {
                        Some(a1)
                    } else {
                        None
                    };
                    if shared != Some(&point) {
                        return false;
                    }
                }
                SegmentIntersection::Overlap(_, _) => return false,
            }
        }
    }

    true
}
