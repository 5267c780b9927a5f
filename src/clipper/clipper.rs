use std::cmp::Ordering;

use crate::clipper::{
    constants::MAX_SPLIT_PASSES,
    enums::{ClipType, EdgeSide, PolyFillType, PolyType},
    intersect_node::IntersectNode,
    local_minima::LocalMinima,
    out_rec::OutRec,
    scanbeam::Scanbeam,
    t_edge::TEdge,
};
use crate::error::{ClipperError, ClipperResult};
use crate::geometry::point::Point;
use crate::geometry::segment::{segment_intersection, SegmentIntersection};

/// Scanline boolean-operation engine.
///
/// Paths are collected per operand with `add_path`; every `execute` builds a
/// fresh edge table, resolves intersections, sweeps the scanbeams bottom to
/// top and links the emitted boundary fragments into rings.
pub struct Clipper {
    paths: Vec<(Vec<Point>, PolyType)>,
    t_edge: TEdge,
    intersections: IntersectNode,
    local_minima: LocalMinima,
    scanbeam: Scanbeam,
    horizontals: Vec<usize>,
    out_rec: OutRec,
    clip_type: ClipType,
    fill_types: [PolyFillType; 2],
}

impl Clipper {
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            t_edge: TEdge::new(),
            intersections: IntersectNode::new(),
            local_minima: LocalMinima::new(),
            scanbeam: Scanbeam::new(),
            horizontals: Vec::new(),
            out_rec: OutRec::new(),
            clip_type: ClipType::Union,
            fill_types: [PolyFillType::NonZero, PolyFillType::NonZero],
        }
    }

    pub fn add_path(&mut self, polygon: &[Point], poly_type: PolyType) -> ClipperResult<()> {
        let path = TEdge::prepare_path(polygon)?;
        self.paths.push((path, poly_type));
        Ok(())
    }

    pub fn add_paths(&mut self, polygons: &[Vec<Point>], poly_type: PolyType) -> ClipperResult<()> {
        for polygon in polygons {
            self.add_path(polygon, poly_type)?;
        }
        Ok(())
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn execute(
        &mut self,
        clip_type: ClipType,
        subject_fill_type: PolyFillType,
        clip_fill_type: PolyFillType,
    ) -> ClipperResult<Vec<Vec<Point>>> {
        self.clip_type = clip_type;
        self.fill_types = [subject_fill_type, clip_fill_type];

        let result = self.execute_internal();

        self.dispose();
        result
    }

    fn execute_internal(&mut self) -> ClipperResult<Vec<Vec<Point>>> {
        for (path, poly_type) in &self.paths {
            self.t_edge.create_path(path, *poly_type);
        }

        self.resolve_intersections()?;
        self.t_edge.build_edges();
        self.reset();
        self.sweep()?;

        self.out_rec.build_result()
    }

    fn dispose(&mut self) {
        self.t_edge.dispose();
        self.intersections.clean();
        self.local_minima.clean();
        self.scanbeam.clean();
        self.horizontals.clear();
        self.out_rec.dispose();
    }

    fn resolve_intersections(&mut self) -> ClipperResult<()> {
        for _ in 0..MAX_SPLIT_PASSES {
            if !self.build_intersect_list() {
                return Ok(());
            }
            self.process_intersect_list();
        }

        Err(ClipperError::internal(format!(
            "intersections still unresolved after {} passes",
            MAX_SPLIT_PASSES
        )))
    }

    /// Sweeps the segments by their lower Y, testing each one against the
    /// segments whose Y-range is still open. Returns whether any split point
    /// was found.
    fn build_intersect_list(&mut self) -> bool {
        let order = self.t_edge.sorted_by_min_y();
        let mut active: Vec<usize> = Vec::new();

        for &index in &order {
            let min_y = self.t_edge.min_y(index);
            let t_edge = &self.t_edge;
            active.retain(|&other| t_edge.max_y(other) >= min_y);

            for &other in &active {
                if self.t_edge.x_ranges_overlap(index, other) {
                    self.add_intersections(other, index);
                }
            }
            active.push(index);
        }

        !self.intersections.is_empty()
    }

    fn add_intersections(&mut self, index1: usize, index2: usize) {
        let (a1, a2) = self.t_edge.segment(index1);
        let (b1, b2) = self.t_edge.segment(index2);

        match segment_intersection(&a1, &a2, &b1, &b2) {
            SegmentIntersection::None => {}
            SegmentIntersection::Point(point) => {
                self.add_split(index1, &a1, &a2, point);
                self.add_split(index2, &b1, &b2, point);
            }
            SegmentIntersection::Overlap(lo, hi) => {
                for point in [lo, hi] {
                    self.add_split(index1, &a1, &a2, point);
                    self.add_split(index2, &b1, &b2, point);
                }
            }
        }
    }

    fn add_split(&mut self, index: usize, from: &Point, to: &Point, point: Point) {
        // touching at an own endpoint needs no cut
        if point != *from && point != *to {
            self.intersections.add(index, point);
        }
    }

    fn process_intersect_list(&mut self) {
        for (index, points) in self.intersections.take_grouped() {
            self.t_edge.split_segment(index, points);
        }
    }

    fn reset(&mut self) {
        self.scanbeam.clean();
        self.local_minima.clean();
        self.horizontals.clear();

        for index in 0..self.t_edge.len() {
            let bot = self.t_edge.bot(index);
            let top = self.t_edge.top(index);
            self.scanbeam.insert(bot.y);
            self.scanbeam.insert(top.y);

            if self.t_edge.is_horizontal(index) {
                self.horizontals.push(index);
            } else {
                self.local_minima.insert(bot.y, bot.x, index);
            }
        }

        let t_edge = &self.t_edge;
        self.horizontals
            .sort_by(|&a, &b| t_edge.bot(a).sweep_cmp(&t_edge.bot(b)));
    }

    fn sweep(&mut self) -> ClipperResult<()> {
        let mut active: Vec<usize> = Vec::new();
        let mut horz_index = 0;

        while let Some(bot_y) = self.scanbeam.pop() {
            let t_edge = &self.t_edge;
            let mut next_active: Vec<usize> = active
                .iter()
                .copied()
                .filter(|&index| t_edge.top(index).y > bot_y)
                .collect();
            while let Some(index) = self.local_minima.pop_at(bot_y) {
                next_active.push(index);
            }

            match self.scanbeam.peek() {
                Some(top_y) => {
                    self.sort_active(&mut next_active, bot_y, top_y)?;
                    self.process_scanbeam(&next_active)?;
                }
                None if !next_active.is_empty() => {
                    return Err(ClipperError::internal(
                        "active edges extend past the last scanline",
                    ));
                }
                None => {}
            }

            while horz_index < self.horizontals.len()
                && self.t_edge.bot(self.horizontals[horz_index]).y == bot_y
            {
                let index = self.horizontals[horz_index];
                self.process_horizontal(index, bot_y, &active, &next_active)?;
                horz_index += 1;
            }

            active = next_active;
        }

        if !self.local_minima.is_empty() || horz_index != self.horizontals.len() {
            return Err(ClipperError::internal("edges left behind by the sweep"));
        }

        Ok(())
    }

    /// Orders the active edges by X inside the scanbeam `bot_y..top_y`. No
    /// pair may swap places between the bottom and the top of the beam.
    fn sort_active(&self, active: &mut [usize], bot_y: i64, top_y: i64) -> ClipperResult<()> {
        let mid_y2 = bot_y as i128 + top_y as i128;
        active.sort_by(|&a, &b| self.t_edge.compare_x(a, b, mid_y2));

        for pair in active.windows(2) {
            let crosses = self.t_edge.compare_x(pair[0], pair[1], 2 * bot_y as i128)
                == Ordering::Greater
                || self.t_edge.compare_x(pair[0], pair[1], 2 * top_y as i128)
                    == Ordering::Greater;
            if crosses {
                return Err(ClipperError::internal(format!(
                    "edges {} and {} cross inside scanbeam {}..{}",
                    pair[0], pair[1], bot_y, top_y
                )));
            }
        }

        Ok(())
    }

    /// Accumulates the winding counts across the beam and classifies every
    /// active edge by the fill state of the gaps on either side of it.
    fn process_scanbeam(&mut self, active: &[usize]) -> ClipperResult<()> {
        let mut wind_cnt = [0i32; 2];

        for &index in active {
            let is_left_filled = self.is_filled(wind_cnt);
            let delta = self.t_edge.wind_delta(index);
            wind_cnt[0] += delta[0];
            wind_cnt[1] += delta[1];
            let is_right_filled = self.is_filled(wind_cnt);

            self.set_edge_side(index, EdgeSide::from_fill(is_left_filled, is_right_filled, false))?;
        }

        if wind_cnt != [0, 0] {
            return Err(ClipperError::internal(format!(
                "winding counts {:?} do not close across the scanbeam",
                wind_cnt
            )));
        }

        Ok(())
    }

    /// A horizontal edge separates the beam below from the beam above; it is
    /// part of the boundary when the fill state differs across its midpoint.
    fn process_horizontal(
        &mut self,
        index: usize,
        y: i64,
        below: &[usize],
        above: &[usize],
    ) -> ClipperResult<()> {
        let mid_x2 = self.t_edge.bot(index).x as i128 + self.t_edge.top(index).x as i128;
        let y2 = 2 * y as i128;

        let is_below_filled = self.is_filled(self.wind_cnt_left_of(below, y2, mid_x2)?);
        let is_above_filled = self.is_filled(self.wind_cnt_left_of(above, y2, mid_x2)?);

        self.set_edge_side(index, EdgeSide::from_fill(is_below_filled, is_above_filled, true))
    }

    fn wind_cnt_left_of(&self, edges: &[usize], y2: i128, x2: i128) -> ClipperResult<[i32; 2]> {
        let mut wind_cnt = [0i32; 2];

        for &index in edges {
            match self.t_edge.compare_x_with(index, y2, x2) {
                Ordering::Less => {
                    let delta = self.t_edge.wind_delta(index);
                    wind_cnt[0] += delta[0];
                    wind_cnt[1] += delta[1];
                }
                Ordering::Greater => {}
                Ordering::Equal => {
                    return Err(ClipperError::internal(format!(
                        "edge {} passes through the inside of a horizontal edge",
                        index
                    )));
                }
            }
        }

        Ok(wind_cnt)
    }

    #[inline(always)]
    fn is_filled(&self, wind_cnt: [i32; 2]) -> bool {
        self.clip_type.apply(
            self.fill_types[PolyType::Subject.index()].is_filled(wind_cnt[0]),
            self.fill_types[PolyType::Clip.index()].is_filled(wind_cnt[1]),
        )
    }

    /// Records how an edge bounds the result and emits it the first time it
    /// is seen. An edge spanning several beams must be classified the same in
    /// each of them.
    fn set_edge_side(&mut self, index: usize, side: EdgeSide) -> ClipperResult<()> {
        let current = self.t_edge.side(index);

        if current == EdgeSide::Unvisited {
            self.t_edge.set_side(index, side);
            let bot = self.t_edge.bot(index);
            let top = self.t_edge.top(index);
            match side {
                EdgeSide::Forward => self.out_rec.add_fragment(bot, top),
                EdgeSide::Reverse => self.out_rec.add_fragment(top, bot),
                EdgeSide::Inner | EdgeSide::Unvisited => {}
            }
            return Ok(());
        }

        if current != side {
            return Err(ClipperError::internal(format!(
                "edge {} changes side between scanbeams",
                index
            )));
        }

        Ok(())
    }
}

impl Default for Clipper {
    fn default() -> Self {
        Self::new()
    }
}
