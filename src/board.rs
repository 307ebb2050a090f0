use std::fmt;

use crate::error::{Error, MoveRejection, Result};
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

/// The two sides of a game. The human is player one and moves first by convention
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Occupied(player) => Some(*player),
            Cell::Empty => None,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Cell::Occupied(player) => player.symbol(),
            Cell::Empty => '.',
        }
    }
}

// (row, column) steps of the rays checked for four in a row
const WIN_RAYS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A 7x6 Connect 4 grid
///
/// Row 0 is the top of the board and row `HEIGHT - 1` is the floor. Pieces
/// obey gravity: an occupied cell is always on the floor or on top of another
/// occupied cell.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a position from a string of 1-indexed column digits
    ///
    /// Players alternate starting with the human. The final move may win the
    /// game, but no move may follow a win.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::Human;
        let mut decided = false;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    if decided {
                        return Err(Error::GameOver);
                    }
                    let column = column - 1;
                    let row = board.drop_target(column)?.ok_or(Error::InvalidMove {
                        column,
                        reason: MoveRejection::ColumnFull,
                    })?;
                    board.set(row, column, Cell::Occupied(player));
                    decided = board.check_win(player);
                    player = player.opponent();
                }
                _ => {
                    return Err(Error::UnparsableMove {
                        character: column_char,
                    })
                }
            }
        }
        Ok(board)
    }

    /// Builds a position from `HEIGHT` text rows, top row first
    ///
    /// `.` is an empty cell, `X` a human piece and `O` a computer piece.
    /// Whitespace inside a row is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != HEIGHT {
            return Err(Error::MalformedRows { rows: rows.len() });
        }
        let mut board = Self::new();

        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if symbols.len() != WIDTH {
                return Err(Error::BadRowLength {
                    row,
                    length: symbols.len(),
                });
            }
            for (column, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][column] = match symbol {
                    '.' => Cell::Empty,
                    'X' | 'x' => Cell::Occupied(Player::Human),
                    'O' | 'o' => Cell::Occupied(Player::Computer),
                    character => return Err(Error::UnknownCell { character }),
                };
            }
        }

        for row in 0..HEIGHT - 1 {
            for column in 0..WIDTH {
                if !board.cells[row][column].is_empty() && board.cells[row + 1][column].is_empty() {
                    return Err(Error::FloatingPiece { row, column });
                }
            }
        }
        Ok(board)
    }

    /// The cell at (`row`, `column`)
    ///
    /// Panics if the coordinates are off the board, use `cell_at` for a
    /// checked lookup.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Bounds-checked cell lookup, `None` off the board
    pub fn cell_at(&self, row: isize, column: isize) -> Option<Cell> {
        if row < 0 || column < 0 || row >= HEIGHT as isize || column >= WIDTH as isize {
            return None;
        }
        Some(self.cells[row as usize][column as usize])
    }

    /// Writes a cell without any gravity check
    ///
    /// Panics if the coordinates are off the board.
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) {
        self.cells[row][column] = cell;
    }

    /// Empties a cell, panics if the coordinates are off the board
    pub fn clear(&mut self, row: usize, column: usize) {
        self.cells[row][column] = Cell::Empty;
    }

    /// The row a piece dropped into `column` lands on, or `None` if the column is full
    pub fn drop_target(&self, column: usize) -> Result<Option<usize>> {
        if column >= WIDTH {
            return Err(Error::OutOfRangeColumn { column });
        }
        for row in 0..HEIGHT {
            if !self.cells[row][column].is_empty() {
                // the cell above the topmost piece, none if that piece is in row 0
                return Ok(row.checked_sub(1));
            }
        }
        Ok(Some(HEIGHT - 1))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// True if a piece may be placed at (`row`, `column`) right now
    ///
    /// Coordinates off the board are never valid drops.
    pub fn is_valid_drop(&self, row: usize, column: usize) -> bool {
        if row >= HEIGHT || column >= WIDTH || !self.cells[row][column].is_empty() {
            return false;
        }
        row == HEIGHT - 1 || !self.cells[row + 1][column].is_empty()
    }

    /// Every (`row`, `column`) a piece may be placed at right now, in column order
    ///
    /// The placements are collected up front, so the board can be changed
    /// while the iterator is consumed.
    pub fn valid_drops(&self) -> impl Iterator<Item = (usize, usize)> {
        let mut drops = [None; WIDTH];
        for (column, drop) in drops.iter_mut().enumerate() {
            *drop = (0..HEIGHT)
                .find(|&row| self.is_valid_drop(row, column))
                .map(|row| (row, column));
        }
        IntoIterator::into_iter(drops).flatten()
    }

    /// Scans the whole board for four of `player`'s pieces in a row
    pub fn check_win(&self, player: Player) -> bool {
        let target = Some(Cell::Occupied(player));
        for row in 0..HEIGHT as isize {
            for column in 0..WIDTH as isize {
                for &(dy, dx) in WIN_RAYS.iter() {
                    if (0..WIN_LENGTH as isize)
                        .all(|i| self.cell_at(row + i * dy, column + i * dx) == target)
                    {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Places a piece, runs `f` on the board and takes the piece back again
    ///
    /// The cell is restored whatever `f` returns, so callers can bail out of
    /// `f` early without leaving the hypothetical move behind.
    pub fn with_piece<R>(
        &mut self,
        row: usize,
        column: usize,
        player: Player,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        debug_assert!(self.is_valid_drop(row, column));
        self.cells[row][column] = Cell::Occupied(player);
        let result = f(self);
        self.cells[row][column] = Cell::Empty;
        result
    }

    pub fn num_pieces(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// The board reflected left to right
    pub fn mirrored(&self) -> Self {
        let mut mirror = *self;
        for row in mirror.cells.iter_mut() {
            row.reverse();
        }
        mirror
    }

    /// The board with the owners of every piece exchanged
    pub fn swapped(&self) -> Self {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut().flatten() {
            if let Cell::Occupied(player) = *cell {
                *cell = Cell::Occupied(player.opponent());
            }
        }
        swapped
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            let line: String = row.iter().map(Cell::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
