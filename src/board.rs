use std::fmt;

use thiserror::Error;
use tracing::trace;

use crate::chip::Chip;
use crate::limits::ConnectXLimits;

/// A cell of the board, counted from the bottom-left corner
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("grid height {height} out of range, must be between {min} and {max}")]
    HeightOutOfRange { height: usize, min: usize, max: usize },
    #[error("grid width {width} out of range, must be between {min} and {max}")]
    WidthOutOfRange { width: usize, min: usize, max: usize },
}

/// A gravity-filled grid of chips
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Chip>, // cells are stored left-to-right, bottom-to-top
    heights: Vec<usize>,
}

impl Board {
    /// Creates an empty board, checking its dimensions against `limits`
    pub fn new(height: usize, width: usize, limits: &dyn ConnectXLimits) -> Result<Self, BoardError> {
        let (min, max) = (limits.min_grid_height(), limits.max_grid_height());
        if height < min || height > max {
            return Err(BoardError::HeightOutOfRange { height, min, max });
        }
        let (min, max) = (limits.min_grid_width(), limits.max_grid_width());
        if width < min || width > max {
            return Err(BoardError::WidthOutOfRange { width, min, max });
        }

        Ok(Self {
            height,
            width,
            cells: vec![Chip::NONE; height * width],
            heights: vec![0; width],
        })
    }

    pub fn nb_rows(&self) -> usize {
        self.height
    }

    pub fn nb_columns(&self) -> usize {
        self.width
    }

    pub fn nb_positions(&self) -> usize {
        self.height * self.width
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.height && position.column < self.width
    }

    /// Returns the chip at `position`, [`Chip::NONE`] for an empty cell
    pub fn chip(&self, position: Position) -> Chip {
        debug_assert!(self.contains(position), "position {} outside the board", position);
        if !self.contains(position) {
            return Chip::NONE;
        }
        self.cells[self.index(position)]
    }

    /// The number of chips in `column`
    pub fn column_height(&self, column: usize) -> usize {
        debug_assert!(column < self.width, "column {} outside the board", column);
        self.heights.get(column).copied().unwrap_or(0)
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        debug_assert!(column < self.width, "column {} outside the board", column);
        match self.heights.get(column) {
            Some(&height) => height >= self.height,
            None => true,
        }
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&height| height >= self.height)
    }

    /// Columns that can still take a chip, left to right
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width).filter(move |&column| self.heights[column] < self.height)
    }

    /// Drops `chip` into the lowest empty cell of `column`
    ///
    /// Returns the position the chip landed on, or `None` if the column is
    /// full, in which case the board is unchanged.
    pub fn drop_chip(&mut self, column: usize, chip: Chip) -> Option<Position> {
        debug_assert!(column < self.width, "column {} outside the board", column);
        debug_assert!(!chip.is_empty(), "dropping the empty chip");
        if column >= self.width || self.is_column_full(column) {
            return None;
        }

        let position = Position::new(self.heights[column], column);
        let index = self.index(position);
        self.cells[index] = chip;
        self.heights[column] += 1;
        trace!(%position, "chip dropped");
        Some(position)
    }

    /// An empty board of the same dimensions
    pub fn emptied(&self) -> Board {
        Board {
            height: self.height,
            width: self.width,
            cells: vec![Chip::NONE; self.height * self.width],
            heights: vec![0; self.width],
        }
    }

    /// Removes the top chip of `column`, reversing the last drop into it
    pub(crate) fn lift_chip(&mut self, column: usize) -> Option<(Position, Chip)> {
        debug_assert!(column < self.width, "column {} outside the board", column);
        match self.heights.get(column) {
            Some(&height) if height > 0 => {
                let position = Position::new(height - 1, column);
                let index = self.index(position);
                let chip = std::mem::replace(&mut self.cells[index], Chip::NONE);
                self.heights[column] -= 1;
                Some((position, chip))
            }
            _ => None,
        }
    }

    fn index(&self, position: Position) -> usize {
        position.column + self.width * position.row
    }
}
