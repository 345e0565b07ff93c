use crate::core::{Board, Move};

/// A move source for one side.
pub trait PlayerController {
    /// Picks one of `legal_moves` (never empty when the game driver calls).
    /// `None` means the source gave up, e.g. its input was closed.
    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move>;
    fn name(&self) -> &str;
}
