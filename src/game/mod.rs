//! Core tic-tac-toe game logic: board representation, player types, outcome
//! evaluation, and game state machine with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Coord, Outcome, SIZE};
pub use player::Player;
pub use state::{GameState, MoveError};
