use crate::error::AgentError;
use crate::game::{Coord, GameState};

/// Common interface for automated move selection.
///
/// The human side deliberately does not implement this: it has no policy and
/// is driven purely by externally supplied coordinates (see `HumanSide`).
pub trait Agent {
    /// Select a move for the current player of `state`.
    /// When `training` is true, the agent may explore; otherwise it exploits.
    fn select_action(&mut self, state: &GameState, training: bool) -> Result<Coord, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
