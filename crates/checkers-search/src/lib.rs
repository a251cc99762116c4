//! Search engines for checkers.
//!
//! This crate provides the two move-deciding engines and the agent
//! abstraction the driver uses to mix them:
//! - [`minimax`](minimax::minimax) - exhaustive fixed-depth search over
//!   board snapshots
//! - [`MctsEngine`] - Monte Carlo tree search with UCB-style selection,
//!   heuristic rollouts, and tree reuse across turns
//! - [`Agent`] - the seam between the game loop and a move source, with
//!   [`MinimaxAgent`], [`MctsAgent`], and [`RandomAgent`] implementations

mod agent;
mod config;
pub mod mcts;
pub mod minimax;

pub use agent::{Agent, MctsAgent, MinimaxAgent, RandomAgent};
pub use config::MctsConfig;
pub use mcts::MctsEngine;
