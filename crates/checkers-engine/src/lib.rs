//! Checkers board representation, move generation, and game control.
//!
//! This crate provides:
//! - [`Board`] - 8x8 grid of pieces with move application and evaluation
//! - Move generation including multi-jump capture chains
//! - [`Move`] - a candidate transition with a lazily computed final state
//! - [`Game`] - turn alternation, draw detection, and the human
//!   selection interface
//!
//! # Architecture
//!
//! Boards are value-like: every speculative search step clones the board
//! it explores, so no two search branches ever alias mutable state. The
//! grid owns its pieces; detached [`Piece`](checkers_core::Piece) copies
//! circulate through move generation and capture lists.
//!
//! Captures are *not* forced: simple moves and capture moves coexist in
//! the generated move map. Standard draughts rules force captures when
//! available; this engine deliberately plays the unforced variant.

mod board;
mod game;
mod mov;
pub mod movegen;

pub use board::{Board, EvalWeights};
pub use game::{Game, GameError, GameOutcome};
pub use mov::{all_moves, Move};
pub use movegen::MoveMap;
