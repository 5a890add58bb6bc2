use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{AgentError, PolicyError};
use crate::game::{Board, Coord, GameState, Outcome, Player};
use crate::policy::{PolicyStore, PolicyTable};

use super::agent::Agent;

/// Hyperparameters for the tabular value agent.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ValueAgentConfig {
    /// Probability of picking a uniformly random legal move.
    pub exploration_rate: f64,
    /// Step size for value updates.
    pub learning_rate: f64,
    /// Discount applied when propagating a later state's value backward.
    pub decay_factor: f64,
    pub win_reward: f64,
    pub loss_reward: f64,
    pub draw_reward: f64,
}

impl Default for ValueAgentConfig {
    fn default() -> Self {
        ValueAgentConfig {
            exploration_rate: 0.3,
            learning_rate: 0.2,
            decay_factor: 0.9,
            win_reward: 1.0,
            loss_reward: 0.0,
            draw_reward: 0.1,
        }
    }
}

impl ValueAgentConfig {
    /// Terminal reward from `side`'s perspective. None while in progress.
    pub fn terminal_reward(&self, outcome: Outcome, side: Player) -> Option<f64> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Draw => Some(self.draw_reward),
            Outcome::Win(cell) => {
                if cell == side.to_cell() {
                    Some(self.win_reward)
                } else {
                    Some(self.loss_reward)
                }
            }
        }
    }
}

/// Tabular TD-learning agent.
///
/// Owns a policy table mapping board state keys to value estimates and the
/// trajectory of keys visited during the current game. Action selection is
/// ε-greedy over one-ply lookahead values; reward propagation walks the
/// trajectory backward at game end.
pub struct ValueAgent {
    id: String,
    config: ValueAgentConfig,
    table: PolicyTable,
    trajectory: Vec<String>,
    rng: StdRng,
}

impl ValueAgent {
    pub fn new(id: impl Into<String>, config: ValueAgentConfig) -> Self {
        ValueAgent {
            id: id.into(),
            config,
            table: PolicyTable::new(),
            trajectory: Vec::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Construct with a fixed RNG seed for reproducible exploration.
    pub fn with_seed(id: impl Into<String>, config: ValueAgentConfig, seed: u64) -> Self {
        ValueAgent {
            id: id.into(),
            config,
            table: PolicyTable::new(),
            trajectory: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &ValueAgentConfig {
        &self.config
    }

    pub fn policy(&self) -> &PolicyTable {
        &self.table
    }

    pub fn exploration_rate(&self) -> f64 {
        self.config.exploration_rate
    }

    pub fn set_exploration_rate(&mut self, epsilon: f64) {
        self.config.exploration_rate = epsilon;
    }

    pub fn trajectory_len(&self) -> usize {
        self.trajectory.len()
    }

    /// Pick a move for `side` on `board`.
    ///
    /// With probability ε, a uniformly random legal move. Otherwise the move
    /// whose hypothetical next board has the highest table value, ties broken
    /// by first-encountered row-major order.
    pub fn choose_action(&mut self, board: &Board, side: Player) -> Result<Coord, AgentError> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(AgentError::NoAvailableMoves {
                board_key: board.state_key(),
            });
        }

        if self.rng.random::<f64>() < self.config.exploration_rate {
            let idx = self.rng.random_range(0..moves.len());
            return Ok(moves[idx]);
        }

        let mut best = moves[0];
        let mut best_value = f64::NEG_INFINITY;
        for &coord in &moves {
            let next = board
                .with_move(coord, side.to_cell())
                .expect("available move is legal");
            let value = self.table.value(&next.state_key());
            if value > best_value {
                best_value = value;
                best = coord;
            }
        }

        Ok(best)
    }

    /// Record the board key reached by the agent's own move.
    pub fn record_visited(&mut self, board_key: String) {
        self.trajectory.push(board_key);
    }

    /// Backward value propagation over the recorded trajectory.
    ///
    /// Walks the visited keys most-recent-first, nudging each value toward
    /// the discounted value of the state that followed it:
    /// `V(k) ← V(k) + α·(γ·target − V(k))`, then `target ← V(k)`.
    /// The trajectory is cleared afterwards.
    pub fn feed_reward(&mut self, reward: f64) {
        let mut target = reward;
        for key in self.trajectory.iter().rev() {
            let current = self.table.value(key);
            let updated = current
                + self.config.learning_rate * (self.config.decay_factor * target - current);
            self.table.set_value(key.clone(), updated);
            target = updated;
        }
        self.trajectory.clear();
    }

    /// Discard the current trajectory without updating any values
    /// (abandoned game).
    pub fn reset(&mut self) {
        self.trajectory.clear();
    }

    /// Flush the policy table to the store under this agent's identifier.
    pub fn save_policy(&self, store: &PolicyStore) -> Result<PathBuf, PolicyError> {
        store.save(&self.id, &self.table)
    }

    /// Load a previously saved policy table if one exists. A missing file
    /// starts the agent with an empty table; a corrupt file does the same
    /// with a warning. Never a hard failure.
    pub fn load_policy(&mut self, store: &PolicyStore) {
        match store.load(&self.id) {
            Ok(Some(table)) => self.table = table,
            Ok(None) => {}
            Err(e) => {
                eprintln!(
                    "Warning: failed to load policy for '{}' ({}), starting fresh",
                    self.id, e
                );
            }
        }
    }
}

impl Agent for ValueAgent {
    fn select_action(&mut self, state: &GameState, training: bool) -> Result<Coord, AgentError> {
        let side = state.current_player();
        if training {
            self.choose_action(state.board(), side)
        } else {
            // Greedy for evaluation / real play
            let saved = self.config.exploration_rate;
            self.config.exploration_rate = 0.0;
            let result = self.choose_action(state.board(), side);
            self.config.exploration_rate = saved;
            result
        }
    }

    fn name(&self) -> &str {
        &self.id
    }
}
