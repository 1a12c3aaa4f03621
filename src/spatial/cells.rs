//! Filled-cell bitset for a square grid

use bitvec::prelude::*;
use std::fmt;

/// Set of filled cells on a square `grid_size × grid_size` grid
///
/// Cells are addressed by `(column, row)` and stored row-major in a bitset,
/// giving O(1) membership tests. Coordinates outside the grid are ignored on
/// insert and reported as empty on lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellSet {
    bits: BitVec,
    grid_size: usize,
}

impl CellSet {
    /// Create a set with no filled cells
    pub fn new(grid_size: usize) -> Self {
        Self {
            bits: bitvec![0; grid_size * grid_size],
            grid_size,
        }
    }

    /// Number of cells along each side of the grid
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Column on the vertical axis of symmetry
    pub const fn center_column(&self) -> usize {
        self.grid_size / 2
    }

    /// Column reflected across the vertical axis of symmetry
    pub const fn mirror_column(&self, column: usize) -> usize {
        self.grid_size.saturating_sub(1).saturating_sub(column)
    }

    const fn index(&self, column: usize, row: usize) -> Option<usize> {
        if column < self.grid_size && row < self.grid_size {
            Some(row * self.grid_size + column)
        } else {
            None
        }
    }

    /// Mark a cell as filled
    ///
    /// Returns `true` if the cell was previously empty
    pub fn insert(&mut self, column: usize, row: usize) -> bool {
        let Some(index) = self.index(column, row) else {
            return false;
        };
        let was_filled = self.bits.replace(index, true);
        !was_filled
    }

    /// Test whether a cell is filled
    pub fn contains(&self, column: usize, row: usize) -> bool {
        self.index(column, row)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Count filled cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no cells are filled
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Iterate filled cells as `(column, row)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let grid_size = self.grid_size;
        self.bits
            .iter_ones()
            .map(move |index| (index % grid_size, index / grid_size))
    }

    /// Check that every filled cell has its mirror image filled
    pub fn is_mirror_symmetric(&self) -> bool {
        self.iter()
            .all(|(column, row)| self.contains(self.mirror_column(column), row))
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid_size {
            for column in 0..self.grid_size {
                let symbol = if self.contains(column, row) { 'X' } else { '-' };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
