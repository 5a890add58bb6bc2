use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::AgentError;
use crate::game::{Coord, GameState};

use super::agent::Agent;

/// An agent that selects uniformly at random from legal moves. Used as the
/// fixed training and evaluation opponent.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState, _training: bool) -> Result<Coord, AgentError> {
        let actions = state.legal_actions();
        if actions.is_empty() {
            return Err(AgentError::NoAvailableMoves {
                board_key: state.board().state_key(),
            });
        }
        let idx = self.rng.random_range(0..actions.len());
        Ok(actions[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_selects_legal_move() {
        let mut agent = RandomAgent::with_seed(3);
        let state = GameState::initial();
        let legal = state.legal_actions();

        for _ in 0..100 {
            let action = agent.select_action(&state, false).unwrap();
            assert!(legal.contains(&action), "move {:?} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::with_seed(1);
        let mut agent2 = RandomAgent::with_seed(2);
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let action = if turn % 2 == 0 {
                agent1.select_action(&state, false).unwrap()
            } else {
                agent2.select_action(&state, false).unwrap()
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(state.is_terminal());
        assert!(turn <= 9);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
