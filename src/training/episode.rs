use crate::ai::{Agent, ValueAgent};
use crate::error::TrainingError;
use crate::game::{GameState, Outcome, Player};
use crate::training::metrics::EpisodeResult;

/// Play one training game between the learning agent and an opponent.
///
/// After each of the learner's moves the resulting board key is recorded
/// into its trajectory; at game end the terminal reward (from the learner's
/// perspective) is fed back and the trajectory is consumed.
pub fn play_training_game(
    learner: &mut ValueAgent,
    opponent: &mut dyn Agent,
    learner_side: Player,
) -> Result<EpisodeResult, TrainingError> {
    let mut state = GameState::initial();
    let mut game_length = 0;

    while !state.is_terminal() {
        let is_learner_turn = state.current_player() == learner_side;
        let coord = if is_learner_turn {
            learner.choose_action(state.board(), learner_side)?
        } else {
            opponent.select_action(&state, true)?
        };
        state
            .apply_move_mut(coord)
            .map_err(|_| TrainingError::IllegalMove {
                row: coord.0,
                col: coord.1,
            })?;
        if is_learner_turn {
            learner.record_visited(state.board().state_key());
        }
        game_length += 1;
    }

    let outcome = state.outcome();
    let reward = learner
        .config()
        .terminal_reward(outcome, learner_side)
        .expect("terminal game has a reward");
    learner.feed_reward(reward);

    Ok(EpisodeResult {
        winner: winner_of(outcome),
        learner_side,
        game_length,
    })
}

/// Play a single evaluation game, greedy on the learner's side.
/// Returns Some(true) if the learner won, Some(false) if it lost, None on a draw.
pub fn play_eval_game(
    learner: &mut ValueAgent,
    opponent: &mut dyn Agent,
    learner_side: Player,
) -> Result<Option<bool>, TrainingError> {
    let mut state = GameState::initial();

    while !state.is_terminal() {
        let coord = if state.current_player() == learner_side {
            learner.select_action(&state, false)?
        } else {
            opponent.select_action(&state, false)?
        };
        state
            .apply_move_mut(coord)
            .map_err(|_| TrainingError::IllegalMove {
                row: coord.0,
                col: coord.1,
            })?;
    }

    Ok(winner_of(state.outcome()).map(|winner| winner == learner_side))
}

fn winner_of(outcome: Outcome) -> Option<Player> {
    match outcome {
        Outcome::Win(cell) => Player::from_cell(cell),
        Outcome::InProgress | Outcome::Draw => None,
    }
}
