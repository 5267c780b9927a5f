use std::cmp::Ordering;

/// Integer vertex of the clipping space.
///
/// Every predicate below is evaluated in `i128`, which keeps it exact as long
/// as both coordinates stay inside `±HI_RANGE`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline(always)]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Cross product of `b - a` and `c - a`. Positive when `a -> b -> c`
    /// turns counter-clockwise.
    #[inline(always)]
    pub fn cross(a: &Point, b: &Point, c: &Point) -> i128 {
        let abx = (b.x - a.x) as i128;
        let aby = (b.y - a.y) as i128;
        let acx = (c.x - a.x) as i128;
        let acy = (c.y - a.y) as i128;

        abx * acy - aby * acx
    }

    /// Dot product of `b - a` and `c - a`.
    #[inline(always)]
    pub fn dot(a: &Point, b: &Point, c: &Point) -> i128 {
        let abx = (b.x - a.x) as i128;
        let aby = (b.y - a.y) as i128;
        let acx = (c.x - a.x) as i128;
        let acy = (c.y - a.y) as i128;

        abx * acx + aby * acy
    }

    #[inline(always)]
    pub fn len2(&self, other: &Point) -> i128 {
        let dx = (self.x - other.x) as i128;
        let dy = (self.y - other.y) as i128;
        dx * dx + dy * dy
    }

    #[inline(always)]
    pub fn close_to(&self, other: &Point, dist_sqrd: f64) -> bool {
        self == other || (self.len2(other) as f64) <= dist_sqrd
    }

    /// True when `curr` lies within `sqrt(dist_sqrd)` of the line through
    /// `prev` and `next`. With a zero distance this is exact collinearity,
    /// spikes included.
    pub fn slopes_near_collinear(prev: &Point, curr: &Point, next: &Point, dist_sqrd: f64) -> bool {
        let cross = Point::cross(prev, next, curr);
        if cross == 0 {
            return true;
        }

        let base = prev.len2(next);
        if base == 0 {
            return curr.close_to(prev, dist_sqrd);
        }

        let cross = cross as f64;
        cross * cross <= dist_sqrd * (base as f64)
    }

    pub fn in_range(&self, range: i64) -> bool {
        self.x.abs() <= range && self.y.abs() <= range
    }

    /// Sweep order: bottom to top, then left to right.
    #[inline(always)]
    pub fn sweep_cmp(&self, other: &Point) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}
