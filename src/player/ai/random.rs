use crate::core::{Board, Move};
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

/// Picks uniformly among the legal moves.
pub struct RandomAI {
    pub name: String,
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new(name: &str) -> Self {
        Self::with_rng(name, StdRng::from_entropy())
    }

    /// Same seed, same sequence of choices.
    pub fn seeded(name: &str, seed: u64) -> Self {
        Self::with_rng(name, StdRng::seed_from_u64(seed))
    }

    fn with_rng(name: &str, rng: StdRng) -> Self {
        RandomAI {
            name: name.to_string(),
            rng: RefCell::new(rng),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, _board: &Board, legal_moves: &[Move]) -> Option<Move> {
        let mut rng = self.rng.borrow_mut();
        legal_moves.choose(&mut *rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;
    use crate::logic::legal_moves;

    #[test]
    fn test_seeded_choices_repeat() {
        let board = Board::new();
        let moves = legal_moves(&board, Side::Black);
        let a = RandomAI::seeded("a", 42);
        let b = RandomAI::seeded("b", 42);
        for _ in 0..20 {
            assert_eq!(a.choose_move(&board, &moves), b.choose_move(&board, &moves));
        }
    }

    #[test]
    fn test_choice_is_always_legal() {
        let board = Board::new();
        let moves = legal_moves(&board, Side::Black);
        let ai = RandomAI::new("r");
        for _ in 0..50 {
            let mv = ai.choose_move(&board, &moves).unwrap();
            assert!(moves.contains(&mv));
        }
        assert_eq!(ai.choose_move(&board, &[]), None);
    }

    #[test]
    fn test_roughly_uniform() {
        let board = Board::new();
        let moves = legal_moves(&board, Side::Black);
        let ai = RandomAI::seeded("r", 7);
        let mut hits = [0usize; 4];
        for _ in 0..4000 {
            let mv = ai.choose_move(&board, &moves).unwrap();
            let idx = moves.iter().position(|m| *m == mv).unwrap();
            hits[idx] += 1;
        }
        for h in hits {
            assert!((800..1200).contains(&h), "skewed draw: {:?}", hits);
        }
    }
}
