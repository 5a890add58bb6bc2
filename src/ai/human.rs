use crate::game::{Coord, GameState, MoveError, Player};

/// The human-controlled side of a game.
///
/// Has no policy table and no trajectory. Its only contract is to play an
/// externally supplied coordinate through the same apply/evaluate path the
/// agents use. The caller is responsible for driving turn order.
pub struct HumanSide {
    player: Player,
}

impl HumanSide {
    pub fn new(player: Player) -> Self {
        HumanSide { player }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Play a coordinate supplied by the presentation layer.
    pub fn submit(&self, state: &mut GameState, coord: Coord) -> Result<(), MoveError> {
        debug_assert_eq!(
            state.current_player(),
            self.player,
            "move submitted out of turn"
        );
        state.apply_move_mut(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_submit_plays_through_engine_path() {
        let human = HumanSide::new(Player::X);
        let mut state = GameState::initial();

        human.submit(&mut state, (0, 0)).unwrap();
        assert_eq!(state.board().get(0, 0), Cell::X);
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_submit_occupied_cell_rejected() {
        let human_x = HumanSide::new(Player::X);
        let human_o = HumanSide::new(Player::O);
        let mut state = GameState::initial();

        human_x.submit(&mut state, (1, 1)).unwrap();
        assert_eq!(
            human_o.submit(&mut state, (1, 1)),
            Err(MoveError::CellOccupied { row: 1, col: 1 })
        );
    }
}
