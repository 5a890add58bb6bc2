//! # RL Tic-Tac-Toe
//!
//! A tic-tac-toe engine with a tabular reinforcement learning agent. The
//! agent learns a state-value function through temporal-difference updates
//! fed back at the end of each game, and persists its policy table across
//! sessions.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, outcome evaluation
//! - [`ai`] — Agent trait, tabular value agent, random opponent, human side
//! - [`policy`] — State-value table and on-disk persistence
//! - [`training`] — Training loop, episode runner, metrics collection
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod policy;
pub mod training;
