//! Error types for the game core
//!
//! These all signal a caller defect (a move that was never offered by the move
//! generator, or a search started on a finished position) and are never retried.

use crate::core::{Move, Side};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The move does not flip any disc, or its square is occupied.
    #[error("illegal move {mv} for {side}")]
    IllegalMove { mv: Move, side: Side },

    /// Coordinates outside the 8x8 grid.
    #[error("move {0} is off the board")]
    OutOfBounds(Move),

    /// A move was requested for a side that has none.
    #[error("{0} has no legal move")]
    NoLegalMove(Side),
}

pub type GameResult<T> = Result<T, GameError>;
