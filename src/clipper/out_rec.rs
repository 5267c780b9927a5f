use std::cmp::Ordering;
use std::collections::HashMap;

use crate::clipper::constants::UNASSIGNED;
use crate::clipper::utils::clean_polygon;
use crate::error::{ClipperError, ClipperResult};
use crate::geometry::point::Point;

/// Directed boundary fragments emitted by the sweep, linked back into rings.
pub struct OutRec {
    starts: Vec<Point>,
    ends: Vec<Point>,
}

impl OutRec {
    pub fn new() -> Self {
        Self {
            starts: Vec::new(),
            ends: Vec::new(),
        }
    }

    pub fn add_fragment(&mut self, start: Point, end: Point) {
        self.starts.push(start);
        self.ends.push(end);
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Links every fragment into closed rings. The fragments may arrive in
    /// any order; each ring keeps the filled region on its left.
    pub fn build_result(&self) -> ClipperResult<Vec<Vec<Point>>> {
        let fragment_count = self.len();
        let mut outgoing: HashMap<Point, Vec<usize>> = HashMap::with_capacity(fragment_count);
        let mut incoming: HashMap<Point, usize> = HashMap::with_capacity(fragment_count);

        for i in 0..fragment_count {
            outgoing.entry(self.starts[i]).or_default().push(i);
            *incoming.entry(self.ends[i]).or_default() += 1;
        }

        for (point, count) in &incoming {
            let out_count = outgoing.get(point).map_or(0, |fragments| fragments.len());
            if out_count != *count {
                return Err(ClipperError::internal(format!(
                    "vertex ({}, {}) has {} incoming and {} outgoing fragments",
                    point.x, point.y, count, out_count
                )));
            }
        }

        let mut next: Vec<usize> = vec![UNASSIGNED; fragment_count];
        let mut is_claimed: Vec<bool> = vec![false; fragment_count];

        for i in 0..fragment_count {
            let candidates = outgoing.get(&self.ends[i]).ok_or_else(|| {
                ClipperError::internal(format!(
                    "fragment end ({}, {}) has no continuation",
                    self.ends[i].x, self.ends[i].y
                ))
            })?;
            let successor = self.pick_successor(i, candidates)?;

            if is_claimed[successor] {
                return Err(ClipperError::internal(format!(
                    "fragment {} continues two rings",
                    successor
                )));
            }
            is_claimed[successor] = true;
            next[i] = successor;
        }

        let mut is_visited: Vec<bool> = vec![false; fragment_count];
        let mut result: Vec<Vec<Point>> = Vec::new();

        for first in 0..fragment_count {
            if is_visited[first] {
                continue;
            }

            let mut path: Vec<Point> = Vec::new();
            let mut index = first;
            while !is_visited[index] {
                is_visited[index] = true;
                path.push(self.starts[index]);
                index = next[index];
            }

            for ring in split_touching(path) {
                let cleaned = clean_polygon(&ring, 0.0);
                if !cleaned.is_empty() {
                    result.push(cleaned);
                }
            }
        }

        Ok(result)
    }

    /// Among the fragments leaving the end of `index`, picks the first one
    /// met when turning clockwise from the reversed incoming direction, i.e.
    /// the sharpest left turn.
    fn pick_successor(&self, index: usize, candidates: &[usize]) -> ClipperResult<usize> {
        let vertex = self.ends[index];
        let back = direction(&vertex, &self.starts[index]);

        candidates
            .iter()
            .copied()
            .max_by(|&a, &b| {
                let dir_a = direction(&vertex, &self.ends[a]);
                let dir_b = direction(&vertex, &self.ends[b]);
                ccw_angle_cmp(back, dir_a, dir_b)
            })
            .ok_or_else(|| ClipperError::internal("fragment without continuation"))
    }

    pub fn dispose(&mut self) {
        self.starts.clear();
        self.ends.clear();
    }
}

impl Default for OutRec {
    fn default() -> Self {
        Self::new()
    }
}

fn direction(from: &Point, to: &Point) -> (i128, i128) {
    ((to.x - from.x) as i128, (to.y - from.y) as i128)
}

#[inline(always)]
fn cross(a: (i128, i128), b: (i128, i128)) -> i128 {
    a.0 * b.1 - a.1 * b.0
}

// 0 for angles in [0, PI) counter-clockwise from `base`, 1 for [PI, 2 PI)
fn half_plane(base: (i128, i128), dir: (i128, i128)) -> u8 {
    let turn = cross(base, dir);
    let dot = base.0 * dir.0 + base.1 * dir.1;

    if turn > 0 || (turn == 0 && dot > 0) {
        0
    } else {
        1
    }
}

/// Orders two directions by their counter-clockwise angle from `base`.
fn ccw_angle_cmp(base: (i128, i128), dir1: (i128, i128), dir2: (i128, i128)) -> Ordering {
    half_plane(base, dir1)
        .cmp(&half_plane(base, dir2))
        .then_with(|| 0.cmp(&cross(dir1, dir2)))
}

/// Splits a closed vertex walk wherever it revisits a vertex, so no ring
/// touches itself.
fn split_touching(path: Vec<Point>) -> Vec<Vec<Point>> {
    let mut result: Vec<Vec<Point>> = Vec::new();
    let mut stack: Vec<Point> = Vec::with_capacity(path.len());
    let mut positions: HashMap<Point, usize> = HashMap::with_capacity(path.len());

    for point in path {
        if let Some(&position) = positions.get(&point) {
            let ring: Vec<Point> = stack.drain(position..).collect();
            for removed in &ring {
                positions.remove(removed);
            }
            result.push(ring);
        }

        positions.insert(point, stack.len());
        stack.push(point);
    }

    if !stack.is_empty() {
        result.push(stack);
    }

    result
}
