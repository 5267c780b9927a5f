use crate::geometry::point::Point;

/// Pending split points: every entry asks for `edge_index` to be cut at
/// `point`.
pub struct IntersectNode {
    nodes: Vec<(usize, Point)>,
}

impl IntersectNode {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn add(&mut self, edge_index: usize, point: Point) {
        self.nodes.push((edge_index, point));
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drains the nodes grouped per edge, each group free of duplicates.
    pub fn take_grouped(&mut self) -> Vec<(usize, Vec<Point>)> {
        let mut nodes = std::mem::take(&mut self.nodes);
        nodes.sort_unstable_by(|a, b| a.0.cmp(&b.0).then(a.1.sweep_cmp(&b.1)));
        nodes.dedup();

        let mut result: Vec<(usize, Vec<Point>)> = Vec::new();
        for (edge_index, point) in nodes {
            match result.last_mut() {
                Some((index, points)) if *index == edge_index => points.push(point),
                _ => result.push((edge_index, vec![point])),
            }
        }

        result
    }

    pub fn clean(&mut self) {
        self.nodes.clear();
    }
}

impl Default for IntersectNode {
    fn default() -> Self {
        Self::new()
    }
}
