use std::cmp::Ordering;
use std::collections::HashMap;

use crate::clipper::constants::HI_RANGE;
use crate::clipper::enums::{EdgeSide, PolyType};
use crate::error::{ClipperError, ClipperResult};
use crate::geometry::point::Point;

struct Segment {
    from: Point,
    to: Point,
    poly_type: PolyType,
}

struct Edge {
    bot: Point,
    top: Point,
    // per operand, indexed by PolyType
    wind_delta: [i32; 2],
    side: EdgeSide,
}

/// Edge arena of one execution.
///
/// Input rings first become directed segments that are split in place while
/// intersections are resolved. `build_edges` then merges identical segments
/// into undirected edges (`bot` below `top`, or left of it for horizontals)
/// carrying the summed winding delta of each operand. Crossing an edge from
/// left to right adds its delta: `+1` for a segment running downwards, `-1`
/// for one running upwards, so a counter-clockwise ring winds `+1` inside.
pub struct TEdge {
    segments: Vec<Segment>,
    edges: Vec<Edge>,
}

impl TEdge {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Drops repeated vertices and checks the ring can take part in a sweep.
    pub fn prepare_path(polygon: &[Point]) -> ClipperResult<Vec<Point>> {
        if let Some(point) = polygon.iter().find(|point| !point.in_range(HI_RANGE)) {
            return Err(ClipperError::invalid_input(format!(
                "coordinate ({}, {}) is outside of the supported range",
                point.x, point.y
            )));
        }

        let mut path: Vec<Point> = Vec::with_capacity(polygon.len());
        for point in polygon {
            if path.last() != Some(point) {
                path.push(*point);
            }
        }
        while path.len() > 1 && path.first() == path.last() {
            path.pop();
        }

        if path.len() < 3 {
            return Err(ClipperError::invalid_input(format!(
                "ring has {} distinct points, at least 3 are required",
                path.len()
            )));
        }

        Ok(path)
    }

    pub fn create_path(&mut self, path: &[Point], poly_type: PolyType) {
        let point_count = path.len();
        for i in 0..point_count {
            let from = path[i];
            let to = path[(i + 1) % point_count];
            if from != to {
                self.segments.push(Segment { from, to, poly_type });
            }
        }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, index: usize) -> (Point, Point) {
        let segment = &self.segments[index];
        (segment.from, segment.to)
    }

    pub fn min_y(&self, index: usize) -> i64 {
        let segment = &self.segments[index];
        segment.from.y.min(segment.to.y)
    }

    pub fn max_y(&self, index: usize) -> i64 {
        let segment = &self.segments[index];
        segment.from.y.max(segment.to.y)
    }

    pub fn x_ranges_overlap(&self, index1: usize, index2: usize) -> bool {
        let s1 = &self.segments[index1];
        let s2 = &self.segments[index2];

        s1.from.x.min(s1.to.x) <= s2.from.x.max(s2.to.x)
            && s2.from.x.min(s2.to.x) <= s1.from.x.max(s1.to.x)
    }

    pub fn sorted_by_min_y(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.segments.len()).collect();
        order.sort_by_key(|&index| self.min_y(index));
        order
    }

    /// Cuts a segment at the given points. The first piece keeps the index,
    /// the others are appended with the same operand.
    pub fn split_segment(&mut self, index: usize, mut points: Vec<Point>) {
        let Segment { from, to, poly_type } = self.segments[index];

        points.retain(|point| *point != from && *point != to);
        points.sort_by_key(|point| Point::dot(&from, &to, point));
        points.dedup();

        if points.is_empty() {
            return;
        }

        self.segments[index].to = points[0];
        for pair in points.windows(2) {
            self.segments.push(Segment {
                from: pair[0],
                to: pair[1],
                poly_type,
            });
        }
        if let Some(&last) = points.last() {
            self.segments.push(Segment {
                from: last,
                to,
                poly_type,
            });
        }
    }

    /// Merges identical segments into edges. Non-horizontal edges whose
    /// deltas cancel out for both operands cannot separate two different
    /// regions and are dropped.
    pub fn build_edges(&mut self) {
        let mut lookup: HashMap<(Point, Point), usize> = HashMap::with_capacity(self.segments.len());
        self.edges.clear();

        for segment in &self.segments {
            let (bot, top, delta) = if segment.from.y == segment.to.y {
                if segment.from.x < segment.to.x {
                    (segment.from, segment.to, 0)
                } else {
                    (segment.to, segment.from, 0)
                }
            } else if segment.from.y < segment.to.y {
                (segment.from, segment.to, -1)
            } else {
                (segment.to, segment.from, 1)
            };

            let edges = &mut self.edges;
            let edge_index = *lookup.entry((bot, top)).or_insert_with(|| {
                edges.push(Edge {
                    bot,
                    top,
                    wind_delta: [0, 0],
                    side: EdgeSide::Unvisited,
                });
                edges.len() - 1
            });

            self.edges[edge_index].wind_delta[segment.poly_type.index()] += delta;
        }

        self.edges
            .retain(|edge| edge.bot.y == edge.top.y || edge.wind_delta != [0, 0]);
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline(always)]
    pub fn bot(&self, index: usize) -> Point {
        self.edges[index].bot
    }

    #[inline(always)]
    pub fn top(&self, index: usize) -> Point {
        self.edges[index].top
    }

    #[inline(always)]
    pub fn wind_delta(&self, index: usize) -> [i32; 2] {
        self.edges[index].wind_delta
    }

    #[inline(always)]
    pub fn is_horizontal(&self, index: usize) -> bool {
        self.edges[index].bot.y == self.edges[index].top.y
    }

    #[inline(always)]
    pub fn side(&self, index: usize) -> EdgeSide {
        self.edges[index].side
    }

    pub fn set_side(&mut self, index: usize, side: EdgeSide) {
        self.edges[index].side = side;
    }

    /// X of a non-horizontal edge at `y2 / 2` as the fraction
    /// `numerator / denominator`, denominator positive.
    fn x_fraction(&self, index: usize, y2: i128) -> (i128, i128) {
        let edge = &self.edges[index];
        let dx = (edge.top.x - edge.bot.x) as i128;
        let dy = (edge.top.y - edge.bot.y) as i128;

        (
            2 * edge.bot.x as i128 * dy + (y2 - 2 * edge.bot.y as i128) * dx,
            2 * dy,
        )
    }

    /// Orders two non-horizontal edges by their X at height `y2 / 2`.
    pub fn compare_x(&self, index1: usize, index2: usize, y2: i128) -> Ordering {
        let (n1, d1) = self.x_fraction(index1, y2);
        let (n2, d2) = self.x_fraction(index2, y2);

        (n1 * d2).cmp(&(n2 * d1))
    }

    /// Orders the X of a non-horizontal edge at height `y2 / 2` against `x2 / 2`.
    pub fn compare_x_with(&self, index: usize, y2: i128, x2: i128) -> Ordering {
        let (numerator, denominator) = self.x_fraction(index, y2);

        (2 * numerator).cmp(&(x2 * denominator))
    }

    pub fn dispose(&mut self) {
        self.segments.clear();
        self.edges.clear();
    }
}

impl Default for TEdge {
    fn default() -> Self {
        Self::new()
    }
}
