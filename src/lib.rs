//! Reversi/Othello engine: board rules, minimax search with two evaluation
//! strategies, a game driver and a parallel self-play runner.

pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;

#[cfg(test)]
mod logic_tests;

pub use crate::core::{Board, Move, Outcome, Side};
pub use crate::error::{GameError, GameResult};
