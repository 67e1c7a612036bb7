use core::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coord {
    pub row: isize,
    pub col: isize,
}

impl Coord {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    pub fn from_index(row: usize, col: usize) -> Self {
        Self {
            row: row as isize,
            col: col as isize,
        }
    }

    pub fn is_unit_step(self, other: Self) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr + dc == 1
    }

    pub fn chebyshev(self, other: Self) -> isize {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }
}

impl Add<(isize, isize)> for Coord {
    type Output = Coord;

    fn add(self, rhs: (isize, isize)) -> Self::Output {
        Coord {
            row: self.row + rhs.0,
            col: self.col + rhs.1,
        }
    }
}

impl Sub for Coord {
    type Output = (isize, isize);

    fn sub(self, rhs: Coord) -> Self::Output {
        (self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::from_index(row, col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl Dims {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows && (c.col as usize) < self.cols
    }

    pub fn index_of(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols + c.col as usize)
    }

    pub fn is_on_frame(&self, c: Coord) -> bool {
        self.contains(c)
            && (c.row == 0
                || c.col == 0
                || c.row as usize == self.rows - 1
                || c.col as usize == self.cols - 1)
    }
}
