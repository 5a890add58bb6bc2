use super::{Board, Coord, Outcome, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds { row: usize, col: usize },
    CellOccupied { row: usize, col: usize },
    GameOver,
}

impl From<super::board::MoveError> for MoveError {
    fn from(err: super::board::MoveError) -> Self {
        match err {
            super::board::MoveError::OutOfBounds { row, col } => MoveError::OutOfBounds { row, col },
            super::board::MoveError::CellOccupied { row, col } => {
                MoveError::CellOccupied { row, col }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::X, // X starts
            outcome: Outcome::InProgress,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Outcome of the game so far. Always recomputable from the board;
    /// cached here so terminal checks are free.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Get list of legal moves (empty cells, row-major)
    pub fn legal_actions(&self) -> Vec<Coord> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.available_moves()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, coord: Coord) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(coord)?;
        Ok(next)
    }

    /// Apply move in place
    pub fn apply_move_mut(&mut self, coord: Coord) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.apply(coord, self.current_player.to_cell())?;
        self.outcome = self.board.evaluate();
        self.current_player = self.current_player.other();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::X);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 9);
    }

    #[test]
    fn test_apply_move_alternates_players() {
        let state = GameState::initial();
        let next = state.apply_move((1, 1)).unwrap();

        assert_eq!(next.current_player(), Player::O);
        assert_eq!(next.board().get(1, 1), Cell::X);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // X: top row, O: middle row
        state.apply_move_mut((0, 0)).unwrap();
        state.apply_move_mut((1, 0)).unwrap();
        state.apply_move_mut((0, 1)).unwrap();
        state.apply_move_mut((1, 1)).unwrap();
        state.apply_move_mut((0, 2)).unwrap();

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Outcome::Win(Cell::X));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::initial();

        // Ends at X O X / X O X / O X O with no line of three
        for coord in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ] {
            state.apply_move_mut(coord).unwrap();
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut state = GameState::initial();
        state.apply_move_mut((0, 0)).unwrap();
        state.apply_move_mut((1, 0)).unwrap();
        state.apply_move_mut((0, 1)).unwrap();
        state.apply_move_mut((1, 1)).unwrap();
        state.apply_move_mut((0, 2)).unwrap();

        assert_eq!(state.apply_move_mut((2, 2)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::initial();
        state.apply_move_mut((0, 0)).unwrap();
        assert_eq!(
            state.apply_move_mut((0, 0)),
            Err(MoveError::CellOccupied { row: 0, col: 0 })
        );
    }
}
