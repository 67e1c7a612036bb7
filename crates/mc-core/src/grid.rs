use crate::{Coord, Dims, Error};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = rows.checked_mul(cols).ok_or(Error::InvalidGridShape {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::InvalidGridShape {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { rows, cols, data })
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, Error> {
        let cols = rows.first().map_or(0, Vec::len);
        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for row in rows {
            if row.len() != cols {
                return Err(Error::InvalidGridShape {
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            rows: n_rows,
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dims(&self) -> Dims {
        Dims::new(self.rows, self.cols)
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<T> {
        self.data
    }

    pub fn as_view(&self) -> GridView<'_, T> {
        GridView {
            rows: self.rows,
            cols: self.cols,
            pitch: self.cols,
            data: &self.data,
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get_mut(row * self.cols + col)
    }
}

impl<T: Clone> Grid<T> {
    pub fn new_fill(rows: usize, cols: usize, value: T) -> Self {
        let len = rows.checked_mul(cols).expect("grid size overflow");
        Self {
            rows,
            cols,
            data: vec![value; len],
        }
    }

    /// Fills the inclusive-exclusive block `[row0, row1) x [col0, col1)`, clipped to the grid.
    pub fn fill_rect(&mut self, row0: usize, col0: usize, row1: usize, col1: usize, value: T) {
        for r in row0..row1.min(self.rows) {
            for c in col0..col1.min(self.cols) {
                self.data[r * self.cols + c] = value.clone();
            }
        }
    }
}

/// Borrowed grid. Rows are `pitch` elements apart, so a padded frame buffer
/// can be scanned in place.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a, T> {
    rows: usize,
    cols: usize,
    pitch: usize,
    data: &'a [T],
}

impl<'a, T> GridView<'a, T> {
    pub fn from_slice(
        rows: usize,
        cols: usize,
        pitch: usize,
        data: &'a [T],
    ) -> Result<Self, Error> {
        if pitch < cols {
            return Err(Error::InvalidStride);
        }

        // the last row needs no padding after it
        let needed = match rows {
            0 => Some(0),
            _ if cols == 0 => Some(0),
            n => (n - 1).checked_mul(pitch).and_then(|v| v.checked_add(cols)),
        };
        match needed {
            Some(n) if data.len() >= n => Ok(Self {
                rows,
                cols,
                pitch,
                data,
            }),
            _ => Err(Error::InvalidGridShape {
                expected: needed.unwrap_or(usize::MAX),
                actual: data.len(),
            }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dims(&self) -> Dims {
        Dims::new(self.rows, self.cols)
    }

    pub fn row(&self, r: usize) -> &'a [T] {
        assert!(r < self.rows, "row index out of bounds");
        let start = r * self.pitch;
        &self.data[start..start + self.cols]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.pitch + col)
    }

    pub fn iter_coords(&self) -> impl Iterator<Item = (Coord, &'a T)> + '_ {
        (0..self.rows).flat_map(move |r| {
            self.row(r)
                .iter()
                .enumerate()
                .map(move |(c, v)| (Coord::from_index(r, c), v))
        })
    }
}

impl<T: Copy> GridView<'_, T> {
    #[inline]
    pub fn at(&self, c: Coord) -> Option<T> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        self.get(c.row as usize, c.col as usize).copied()
    }
}

impl<T: Copy + PartialEq> GridView<'_, T> {
    #[inline]
    pub fn matches(&self, c: Coord, value: T) -> bool {
        self.at(c) == Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, GridView};
    use crate::{Coord, Error};

    #[test]
    fn shape_mismatch_fails_fast() {
        let err = Grid::from_vec(3, 3, vec![0u8; 8]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidGridShape {
                expected: 9,
                actual: 8
            }
        );

        let overflow = Grid::from_vec(usize::MAX, 2, vec![0u8; 4]).unwrap_err();
        assert!(matches!(overflow, Error::InvalidGridShape { .. }));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::from_rows(vec![vec![1u8, 2], vec![3], vec![4, 5, 6]]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidGridShape {
                expected: 2,
                actual: 1
            }
        );

        let g = Grid::from_rows(vec![vec![1u8, 2], vec![3, 4]]).expect("rectangular rows");
        assert_eq!((g.rows(), g.cols()), (2, 2));
        assert_eq!(g.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn empty_grid_is_valid() {
        let g = Grid::<u8>::from_vec(0, 5, Vec::new()).expect("empty grid");
        assert!(g.dims().is_empty());
        assert_eq!(g.as_view().iter_coords().count(), 0);

        let g = Grid::<u8>::from_rows(Vec::new()).expect("no rows");
        assert_eq!((g.rows(), g.cols()), (0, 0));
    }

    #[test]
    fn padded_rows_are_skipped() {
        let data = vec![1u8, 2, 3, 99, 4, 5, 6, 88];
        let view = GridView::from_slice(2, 3, 4, &data).expect("valid view");

        assert_eq!(view.row(0), &[1, 2, 3]);
        assert_eq!(view.row(1), &[4, 5, 6]);
        assert_eq!(view.get(1, 0), Some(&4));
        assert_eq!(view.get(1, 2), Some(&6));
        assert_eq!(view.get(1, 3), None);
        assert_eq!(view.at(Coord::new(1, 1)), Some(5));
        assert_eq!(view.at(Coord::new(-1, 1)), None);
        assert!(view.matches(Coord::new(0, 2), 3));
        assert!(!view.matches(Coord::new(0, 3), 99));

        assert_eq!(
            GridView::from_slice(2, 4, 3, &data).unwrap_err(),
            Error::InvalidStride
        );
        assert_eq!(
            GridView::from_slice(3, 3, 4, &data).unwrap_err(),
            Error::InvalidGridShape {
                expected: 11,
                actual: 8
            }
        );

        // trailing padding after the last row is optional
        let view = GridView::from_slice(2, 3, 4, &data[..7]).expect("unpadded last row");
        assert_eq!(view.row(1), &[4, 5, 6]);
    }

    #[test]
    fn iter_coords_is_row_major() {
        let g = Grid::from_vec(2, 2, vec![1u8, 2, 3, 4]).expect("valid grid");
        let seen: Vec<(Coord, u8)> = g.as_view().iter_coords().map(|(c, &v)| (c, v)).collect();
        assert_eq!(
            seen,
            vec![
                (Coord::new(0, 0), 1),
                (Coord::new(0, 1), 2),
                (Coord::new(1, 0), 3),
                (Coord::new(1, 1), 4),
            ]
        );
    }

    #[test]
    fn fill_rect_clips_to_grid() {
        let mut g = Grid::new_fill(3, 3, 0u8);
        g.fill_rect(1, 1, 10, 10, 7);
        assert_eq!(g.data(), &[0, 0, 0, 0, 7, 7, 0, 7, 7]);
        *g.get_mut(0, 0).expect("in bounds") = 9;
        assert_eq!(g.into_raw()[0], 9);
    }
}
