/// Distinct sweep Y values, popped bottom to top.
pub struct Scanbeam {
    // kept sorted in descending order so the lowest Y pops from the back
    data: Vec<i64>,
}

impl Scanbeam {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn insert(&mut self, y: i64) {
        // duplicates are ignored
        if let Err(index) = self.data.binary_search_by(|probe| y.cmp(probe)) {
            self.data.insert(index, y);
        }
    }

    pub fn pop(&mut self) -> Option<i64> {
        self.data.pop()
    }

    pub fn peek(&self) -> Option<i64> {
        self.data.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn clean(&mut self) {
        self.data.clear();
    }
}

impl Default for Scanbeam {
    fn default() -> Self {
        Self::new()
    }
}
