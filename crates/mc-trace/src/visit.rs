use mc_core::{Coord, Dims};

#[derive(Debug, Clone, Default)]
pub struct VisitTracker {
    dims: Dims,
    flags: Vec<u8>,
    marked: usize,
}

impl VisitTracker {
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            flags: vec![0; dims.len()],
            marked: 0,
        }
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    // false when already marked or outside the grid
    #[inline]
    pub fn mark(&mut self, c: Coord) -> bool {
        let Some(i) = self.dims.index_of(c) else {
            return false;
        };
        if self.flags[i] != 0 {
            return false;
        }
        self.flags[i] = 1;
        self.marked += 1;
        true
    }

    #[inline]
    pub fn is_marked(&self, c: Coord) -> bool {
        self.dims.index_of(c).is_some_and(|i| self.flags[i] != 0)
    }

    pub fn reset(&mut self) {
        self.flags.fill(0);
        self.marked = 0;
    }

    pub fn reset_for(&mut self, dims: Dims) {
        self.dims = dims;
        self.flags.clear();
        self.flags.resize(dims.len(), 0);
        self.marked = 0;
    }

    pub fn marked_count(&self) -> usize {
        self.marked
    }
}
