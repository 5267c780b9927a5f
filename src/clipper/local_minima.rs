/// Schedule of non-horizontal edges keyed by the Y where they enter the
/// active edge list.
pub struct LocalMinima {
    // (y, x, edge index), sorted descending so the next minimum pops from the back
    data: Vec<(i64, i64, usize)>,
    is_sorted: bool,
}

impl LocalMinima {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            is_sorted: true,
        }
    }

    pub fn insert(&mut self, y: i64, x: i64, edge_index: usize) {
        self.data.push((y, x, edge_index));
        self.is_sorted = false;
    }

    fn sort(&mut self) {
        if !self.is_sorted {
            self.data.sort_unstable_by(|a, b| b.cmp(a));
            self.is_sorted = true;
        }
    }

    pub fn min_y(&mut self) -> Option<i64> {
        self.sort();
        self.data.last().map(|&(y, _, _)| y)
    }

    /// Pops the next edge if it starts at `y`.
    pub fn pop_at(&mut self, y: i64) -> Option<usize> {
        if self.min_y() != Some(y) {
            return None;
        }

        self.data.pop().map(|(_, _, edge_index)| edge_index)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn clean(&mut self) {
        self.data.clear();
        self.is_sorted = true;
    }
}

impl Default for LocalMinima {
    fn default() -> Self {
        Self::new()
    }
}
