//! Ocean Life
//!
//! A Game of Life variant played on a fixed grid of empty water, rocks, fish and shrimp.
//!
//! Each generation is computed from the Moore neighbourhood of every cell (the 8 surrounding
//! cells, clipped at the edges):
//!
//! - rocks never change
//! - fish and shrimp survive with 2 or 3 neighbours of their own kind, otherwise they die
//! - empty water with exactly 3 fish neighbours spawns a fish, otherwise exactly 3 shrimp
//!   neighbours spawn a shrimp

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::trace;

/// Errors related to ocean construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OceanError {
    /// A row's length differs from the first row (row index, row length, expected length).
    #[error("Row {0} has {1} cells, but the ocean is {2} cells wide")]
    RaggedRow(usize, usize, usize),

    /// A numeric cell code outside `0..=3`.
    #[error("Unknown cell code {0}")]
    UnknownCell(u8),
}

/// A single ocean cell.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    /// Open water
    #[default]
    Empty,

    /// Rock, never changes
    Rock,

    /// Fish
    Fish,

    /// Shrimp
    Shrimp,
}

impl TryFrom<u8> for Cell {
    type Error = OceanError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Rock),
            2 => Ok(Cell::Fish),
            3 => Ok(Cell::Shrimp),
            other => Err(OceanError::UnknownCell(other)),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => 0,
            Cell::Rock => 1,
            Cell::Fish => 2,
            Cell::Shrimp => 3,
        }
    }
}

/// Neighbour coordinates of a cell, at most 8.
pub type Neighbours = SmallVec<[(usize, usize); 8]>;

/// A rectangular grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ocean {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Ocean {
    /// Create an ocean from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`OceanError::RaggedRow`] if the rows are not all the same length.
    pub fn new(grid: Vec<Vec<Cell>>) -> Result<Self, OceanError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(rows * cols);

        for (i, row) in grid.into_iter().enumerate() {
            if row.len() != cols {
                return Err(OceanError::RaggedRow(i, row.len(), cols));
            }

            cells.extend(row);
        }

        Ok(Ocean { cells, rows, cols })
    }

    /// Create an ocean from numeric codes (0 = empty, 1 = rock, 2 = fish, 3 = shrimp).
    ///
    /// # Errors
    ///
    /// - [`OceanError::UnknownCell`]: a code is outside `0..=3`.
    /// - [`OceanError::RaggedRow`]: the rows are not all the same length.
    pub fn from_codes(codes: Vec<Vec<u8>>) -> Result<Self, OceanError> {
        let grid = codes
            .into_iter()
            .map(|row| row.into_iter().map(Cell::try_from).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<Vec<Cell>>, _>>()?;

        Self::new(grid)
    }

    /// Convert the ocean back to numeric codes.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .filter_map(|col| self.cell(row, col))
                    .map(u8::from)
                    .collect()
            })
            .collect()
    }

    /// Get the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get a cell, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if col >= self.cols {
            return None;
        }

        row.checked_mul(self.cols)
            .and_then(|start| start.checked_add(col))
            .and_then(|idx| self.cells.get(idx))
            .copied()
    }

    /// Coordinates of the Moore neighbourhood of a cell, clipped to the grid.
    pub fn neighbours(&self, row: usize, col: usize) -> Neighbours {
        let mut neighbours = Neighbours::new();

        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
                else {
                    continue;
                };

                if r < self.rows && c < self.cols {
                    neighbours.push((r, c));
                }
            }
        }

        neighbours
    }

    /// Count the neighbours of a cell holding `kind`.
    pub fn count_neighbours(&self, row: usize, col: usize, kind: Cell) -> usize {
        self.neighbours(row, col)
            .into_iter()
            .filter(|&(r, c)| self.cell(r, c) == Some(kind))
            .count()
    }

    /// Count the cells holding `kind`.
    pub fn population(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    /// Compute the next generation without changing this one.
    #[must_use]
    pub fn next_generation(&self) -> Ocean {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .zip(self.cells.iter().copied())
            .map(|((row, col), cell)| self.evolve(row, col, cell))
            .collect();

        let next = Ocean {
            cells,
            rows: self.rows,
            cols: self.cols,
        };

        trace!(
            rows = self.rows,
            cols = self.cols,
            fish = next.population(Cell::Fish),
            shrimp = next.population(Cell::Shrimp),
            "computed next generation"
        );

        next
    }

    /// Replace this generation with the next one.
    pub fn advance(&mut self) {
        *self = self.next_generation();
    }

    fn evolve(&self, row: usize, col: usize, cell: Cell) -> Cell {
        match cell {
            Cell::Rock => Cell::Rock,
            Cell::Fish | Cell::Shrimp => {
                if matches!(self.count_neighbours(row, col, cell), 2 | 3) {
                    cell
                } else {
                    Cell::Empty
                }
            }
            Cell::Empty => {
                if self.count_neighbours(row, col, Cell::Fish) == 3 {
                    Cell::Fish
                } else if self.count_neighbours(row, col, Cell::Shrimp) == 3 {
                    Cell::Shrimp
                } else {
                    Cell::Empty
                }
            }
        }
    }
}
