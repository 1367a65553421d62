use std::fmt;

use crate::error::{ConfigError, InvalidMove};

use super::player::Player;

/// Standard board height.
pub const ROWS: usize = 6;
/// Standard board width.
pub const COLS: usize = 7;
/// Run length needed to win on a standard board.
pub const CONNECT: usize = 4;
/// Largest board accepted, in cells.
pub const MAX_CELLS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Owner of the disc in this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// Board dimensions and the run length that wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
    pub connect: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            columns: COLS,
            rows: ROWS,
            connect: CONNECT,
        }
    }
}

impl BoardConfig {
    /// Reject boards that could never finish a game or would not fit in memory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::Validation(
                "board.columns must be >= 1".into(),
            ));
        }
        if self.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be >= 1".into()));
        }
        match self.columns.checked_mul(self.rows) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(ConfigError::Validation(format!(
                    "board {}x{} exceeds {} cells",
                    self.columns, self.rows, MAX_CELLS
                )));
            }
        }
        if self.connect < 2 {
            return Err(ConfigError::Validation(
                "board.connect must be >= 2".into(),
            ));
        }
        if self.connect > self.columns.max(self.rows) {
            return Err(ConfigError::Validation(format!(
                "board.connect ({}) does not fit on a {}x{} board",
                self.connect, self.columns, self.rows
            )));
        }
        Ok(())
    }
}

/// A cell coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// Grid of cells stored row-major. Discs always rest on the bottom row or on
/// another disc, so every column is a contiguous stack growing upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty standard board
    pub fn new() -> Self {
        Self::empty(BoardConfig::default())
    }

    /// Create an empty board with custom dimensions
    pub fn with_config(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    /// `config` must already have passed [`BoardConfig::validate`].
    pub(super) fn empty(config: BoardConfig) -> Self {
        Board {
            config,
            cells: vec![Cell::Empty; config.columns * config.rows],
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn columns(&self) -> usize {
        self.config.columns
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn connect(&self) -> usize {
        self.config.connect
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, the last row is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.config.columns + col]
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.get(pos.row, pos.col)
    }

    /// Cell at a signed coordinate, `None` when off the board
    pub(crate) fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.config.rows || col >= self.config.columns {
            return None;
        }
        Some(self.get(row, col))
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.config.columns + col] = cell;
    }

    /// Number of discs stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        if col >= self.config.columns {
            return 0;
        }
        (0..self.config.rows)
            .rev()
            .take_while(|&row| self.get(row, col) != Cell::Empty)
            .count()
    }

    /// Row the next disc dropped in `col` would land on
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.config.columns {
            return None;
        }
        let height = self.column_height(col);
        (height < self.config.rows).then(|| self.config.rows - 1 - height)
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, InvalidMove> {
        if col >= self.config.columns {
            return Err(InvalidMove::OutOfRange {
                column: col,
                columns: self.config.columns,
            });
        }

        let row = self
            .landing_row(col)
            .ok_or(InvalidMove::ColumnFull { column: col })?;
        self.set(row, col, cell);
        Ok(row)
    }

    /// Clear the highest disc of a column, returning what was there
    pub fn remove_top(&mut self, col: usize) -> Option<Cell> {
        let height = self.column_height(col);
        if height == 0 {
            return None;
        }
        let row = self.config.rows - height;
        let cell = self.get(row, col);
        self.set(row, col, Cell::Empty);
        Some(cell)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.config.columns).all(|col| self.is_column_full(col))
    }

    pub fn disc_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.config.rows {
            let line: String = (0..self.config.columns)
                .map(|col| self.get(row, col).symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
