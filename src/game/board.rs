pub const SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Single-character representation used in the board state key.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A (row, col) position on the board.
pub type Coord = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds { row: usize, col: usize },
    CellOccupied { row: usize, col: usize },
}

/// Result of evaluating a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Cell),
    Draw,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check whether a coordinate is inside the grid and currently empty.
    pub fn is_legal_move(&self, coord: Coord) -> bool {
        let (row, col) = coord;
        row < SIZE && col < SIZE && self.cells[row][col] == Cell::Empty
    }

    /// All empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Coord> {
        let mut moves = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col] == Cell::Empty {
                    moves.push((row, col));
                }
            }
        }
        moves
    }

    /// Place a mark at the given coordinate. The board is unchanged on error.
    pub fn apply(&mut self, coord: Coord, cell: Cell) -> Result<(), MoveError> {
        let (row, col) = coord;
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if self.cells[row][col] != Cell::Empty {
            return Err(MoveError::CellOccupied { row, col });
        }
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Return a copy of the board with one extra mark placed.
    pub fn with_move(&self, coord: Coord, cell: Cell) -> Result<Board, MoveError> {
        let mut next = *self;
        next.apply(coord, cell)?;
        Ok(next)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&c| c != Cell::Empty))
    }

    /// Deterministic key for the policy table: all 9 cells read row-major.
    pub fn state_key(&self) -> String {
        let mut key = String::with_capacity(SIZE * SIZE);
        for row in &self.cells {
            for &cell in row {
                key.push(cell.to_char());
            }
        }
        key
    }

    /// Classify the position. Rows are checked first, then columns, then the
    /// two diagonals. Win detection takes precedence over draw detection.
    pub fn evaluate(&self) -> Outcome {
        for row in 0..SIZE {
            if let Some(winner) = self.check_line((row, 0), (0, 1)) {
                return Outcome::Win(winner);
            }
        }
        for col in 0..SIZE {
            if let Some(winner) = self.check_line((0, col), (1, 0)) {
                return Outcome::Win(winner);
            }
        }
        if let Some(winner) = self.check_line((0, 0), (1, 1)) {
            return Outcome::Win(winner);
        }
        if let Some(winner) = self.check_line((0, SIZE - 1), (1, -1)) {
            return Outcome::Win(winner);
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Check one line of 3 cells starting at `start`, stepping by `step`.
    fn check_line(&self, start: Coord, step: (i32, i32)) -> Option<Cell> {
        let first = self.cells[start.0][start.1];
        if first == Cell::Empty {
            return None;
        }
        for i in 1..SIZE as i32 {
            let row = (start.0 as i32 + i * step.0) as usize;
            let col = (start.1 as i32 + i * step.1) as usize;
            if self.cells[row][col] != first {
                return None;
            }
        }
        Some(first)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
