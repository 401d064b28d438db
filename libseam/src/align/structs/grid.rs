use std::io::Write;

use anyhow::Result;
use serde::Serialize;

/// A `(row, col)` index pair into an alignment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// A dynamic programming grid with dimensions
/// `(seq_1.length + 1) x (seq_2.length + 1)`.
#[derive(Clone)]
pub struct Grid<T> {
    pub row_count: usize,
    pub col_count: usize,
    /// The grid cells as a flat, row-major vector.
    ///
    /// It's stored in the following pattern:
    ///
    /// ```text
    ///     [
    ///         c_(0, 0), c_(0, 1), ... c_(0, M),
    ///         ...
    ///         c_(N, 0), c_(N, 1), ... c_(N, M)
    ///     ]
    /// ```
    ///
    /// where:
    ///
    /// ```text
    ///     N:        <row_count - 1>
    ///     M:        <col_count - 1>
    ///     c_(i, j): the cell at row i, column j
    /// ```
    ///
    data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    pub fn new(row_count: usize, col_count: usize) -> Self {
        Grid {
            row_count,
            col_count,
            data: vec![T::default(); row_count * col_count],
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.row_count);
        debug_assert!(col < self.col_count);
        self.data[row * self.col_count + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.row_count);
        debug_assert!(col < self.col_count);
        self.data[row * self.col_count + col] = value;
    }
}

impl<T: Copy + Default + std::fmt::Debug> Grid<T> {
    pub fn dump(&self, out: &mut impl Write) -> Result<()> {
        let row_idx_width = (self.row_count - 1).to_string().len();
        let column_width = 7;

        // write the column indices
        write!(out, "{}", " ".repeat(row_idx_width + 1))?;
        for col in 0..self.col_count {
            write!(out, "{:>column_width$} ", col)?;
        }
        writeln!(out)?;

        write!(out, "{}", " ".repeat(row_idx_width + 1))?;
        for _ in 0..self.col_count {
            write!(out, "{} ", "-".repeat(column_width))?;
        }
        writeln!(out)?;

        for row in 0..self.row_count {
            write!(out, "{:>row_idx_width$} ", row)?;
            for col in 0..self.col_count {
                write!(out, "{:>column_width$} ", format!("{:?}", self.get(row, col)))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_get_set() {
        let mut grid: Grid<isize> = Grid::new(3, 4);

        assert!(grid.get(0, 0) == 0);
        assert!(grid.get(2, 3) == 0);

        grid.set(1, 2, -7);
        grid.set(2, 3, 11);

        assert!(grid.get(1, 2) == -7);
        assert!(grid.get(2, 3) == 11);
        // neighbors are untouched
        assert!(grid.get(1, 3) == 0);
        assert!(grid.get(2, 2) == 0);
    }

    #[test]
    fn test_grid_dump() {
        let mut grid: Grid<isize> = Grid::new(2, 2);
        grid.set(1, 1, 5);

        let mut buf: Vec<u8> = vec![];
        grid.dump(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('5'));
    }
}
