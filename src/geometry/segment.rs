use crate::geometry::point::Point;
use crate::utils::math::div_round;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentIntersection {
    None,
    Point(Point),
    /// Collinear segments sharing a sub-segment; both ends of the overlap.
    Overlap(Point, Point),
}

/// `p` lies on the closed segment `s1..s2`.
pub fn on_segment(p: &Point, s1: &Point, s2: &Point) -> bool {
    Point::cross(s1, s2, p) == 0
        && p.x >= s1.x.min(s2.x)
        && p.x <= s1.x.max(s2.x)
        && p.y >= s1.y.min(s2.y)
        && p.y <= s1.y.max(s2.y)
}

/// `p` lies on the segment `s1..s2` but is neither of its endpoints.
pub fn is_interior(p: &Point, s1: &Point, s2: &Point) -> bool {
    p != s1 && p != s2 && on_segment(p, s1, s2)
}

/// Exact classification of how two segments meet.
///
/// A proper crossing is reported at the exact intersection rounded half away
/// from zero. Both argument orders describe the same rational point, so the
/// rounded result is commutative.
pub fn segment_intersection(a1: &Point, a2: &Point, b1: &Point, b2: &Point) -> SegmentIntersection {
    let d1 = Point::cross(b1, b2, a1);
    let d2 = Point::cross(b1, b2, a2);

    if d1 == 0 && d2 == 0 {
        return collinear_overlap(a1, a2, b1, b2);
    }

    let d3 = Point::cross(a1, a2, b1);
    let d4 = Point::cross(a1, a2, b2);

    if (d1 > 0 && d2 > 0) || (d1 < 0 && d2 < 0) || (d3 > 0 && d4 > 0) || (d3 < 0 && d4 < 0) {
        return SegmentIntersection::None;
    }

    // touching: an endpoint lies on the other segment
    if d1 == 0 {
        return SegmentIntersection::Point(*a1);
    }
    if d2 == 0 {
        return SegmentIntersection::Point(*a2);
    }
    if d3 == 0 {
        return SegmentIntersection::Point(*b1);
    }
    if d4 == 0 {
        return SegmentIntersection::Point(*b2);
    }

    SegmentIntersection::Point(crossing_point(a1, a2, b1, b2))
}

/// Intersection test returning a single shared point, the first end of the
/// overlap for collinear segments.
pub fn segments_intersect(a1: &Point, a2: &Point, b1: &Point, b2: &Point) -> Option<Point> {
    match segment_intersection(a1, a2, b1, b2) {
        SegmentIntersection::None => None,
        SegmentIntersection::Point(point) => Some(point),
        SegmentIntersection::Overlap(point, _) => Some(point),
    }
}

fn crossing_point(a1: &Point, a2: &Point, b1: &Point, b2: &Point) -> Point {
    // a1 + (a2 - a1) * d1 / (d1 - d2), kept as one fraction per axis
    let d1 = Point::cross(b1, b2, a1);
    let d2 = Point::cross(b1, b2, a2);
    let denominator = d1 - d2;

    let x = div_round(a2.x as i128 * d1 - a1.x as i128 * d2, denominator);
    let y = div_round(a2.y as i128 * d1 - a1.y as i128 * d2, denominator);

    Point::new(x as i64, y as i64)
}

fn collinear_overlap(a1: &Point, a2: &Point, b1: &Point, b2: &Point) -> SegmentIntersection {
    let use_x = (a2.x - a1.x).abs() >= (a2.y - a1.y).abs();
    let key = |p: &Point| if use_x { p.x } else { p.y };

    let (a_lo, a_hi) = if key(a1) <= key(a2) { (a1, a2) } else { (a2, a1) };
    let (b_lo, b_hi) = if key(b1) <= key(b2) { (b1, b2) } else { (b2, b1) };

    let lo = if key(a_lo) >= key(b_lo) { a_lo } else { b_lo };
    let hi = if key(a_hi) <= key(b_hi) { a_hi } else { b_hi };

    match key(lo).cmp(&key(hi)) {
        std::cmp::Ordering::Greater => SegmentIntersection::None,
        std::cmp::Ordering::Equal => SegmentIntersection::Point(*lo),
        std::cmp::Ordering::Less => SegmentIntersection::Overlap(*lo, *hi),
    }
}
