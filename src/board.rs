use std::ops::Index;

use array2d::Array2D;
use serde::{Deserialize, Serialize};

use crate::Error;

/// A `(row, column)` position in the grid.
pub type Coordinate = (usize, usize);

/// One grid position: `None` while unused, otherwise the letter written there.
pub type Cell = Option<char>;

/// The dimensions of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    /// The number of columns.
    pub width: usize,

    /// The number of rows.
    pub height: usize,
}

impl BoardSize {
    /// Creates a new [BoardSize] with the given number of columns and rows.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Whether `coord` lies inside `[0, height) x [0, width)`.
    pub fn contains(&self, (row, col): Coordinate) -> bool {
        row < self.height && col < self.width
    }
}

/// The mutable grid of cells that words are written into.
///
/// Once a cell holds a letter it can only be written again with that same letter, which is how
/// crossing words share a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Array2D<Cell>,
}

impl Board {
    /// Creates a board of `size.height` rows and `size.width` columns with every cell empty.
    pub fn new(size: BoardSize) -> Self {
        Self {
            cells: Array2D::filled_with(None, size.height, size.width),
        }
    }

    /// The dimensions of the board.
    pub fn size(&self) -> BoardSize {
        BoardSize::new(self.width(), self.height())
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.cells.num_columns()
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.cells.num_rows()
    }

    /// Returns the cell at `coord`, or [Error::OutOfBounds] if the coordinate is off the board.
    pub fn get(&self, coord: Coordinate) -> Result<Cell, Error> {
        self.cells
            .get(coord.0, coord.1)
            .copied()
            .ok_or(Error::OutOfBounds {
                row: coord.0,
                col: coord.1,
                width: self.width(),
                height: self.height(),
            })
    }

    /// Whether `ch` may be written at `coord`: the cell is empty or already holds exactly `ch`.
    ///
    /// Coordinates off the board never accept.
    pub fn can_accept(&self, coord: Coordinate, ch: char) -> bool {
        match self.get(coord) {
            Ok(None) => true,
            Ok(Some(existing)) => existing == ch,
            Err(_) => false,
        }
    }

    /// Writes `ch` at `coord`.
    ///
    /// The caller must have checked [Board::can_accept] first. Panics if `coord` is off the board.
    pub fn write(&mut self, coord: Coordinate, ch: char) {
        debug_assert!(self.can_accept(coord, ch), "conflicting write at {coord:?}");
        self.cells[coord] = Some(ch);
    }

    /// Whether every cell is still empty.
    pub fn is_empty(&self) -> bool {
        self.cells.elements_row_major_iter().all(Option::is_none)
    }

    /// Iterates over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Cell>> {
        self.cells.rows_iter()
    }

    /// Exports the grid as rows of strings, with an empty string for every unused cell.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows()
            .map(|row| {
                row.map(|cell| cell.map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

impl Index<Coordinate> for Board {
    type Output = Cell;

    fn index(&self, index: Coordinate) -> &Self::Output {
        &self.cells[index]
    }
}
