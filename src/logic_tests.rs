#[cfg(test)]
mod tests {
    use crate::core::{Board, Outcome, Side};
    use crate::game::{Game, Ply};
    use crate::logic::{apply_move, flips, is_terminal, legal_moves, winner, SQUARES};
    use crate::player::ai::{Evaluator, HeuristicWeights, MinimaxAI, RandomAI};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    #[test]
    fn test_disc_total_invariant_on_random_playouts() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..50 {
            let mut board = Board::new();
            loop {
                let (b, w) = board.score_by_count();
                assert_eq!(b + w + board.empty_count(), SQUARES);

                let moves = legal_moves(&board, board.to_move);
                let Some(&mv) = moves.choose(&mut rng) else {
                    break;
                };
                let before = board;
                let flipped = flips(&board, mv, board.to_move).len();
                board = apply_move(&board, mv).unwrap();

                // mover gains the placed disc plus every flip; opponent loses the flips
                let (b2, w2) = board.score_by_count();
                let (gain, loss) = match before.to_move {
                    Side::Black => (b2 as i64 - b as i64, w as i64 - w2 as i64),
                    Side::White => (w2 as i64 - w as i64, b as i64 - b2 as i64),
                };
                assert_eq!(gain, flipped as i64 + 1);
                assert_eq!(loss, flipped as i64);
            }
            assert!(is_terminal(&board));
        }
    }

    #[test]
    fn test_opening_moves_flip_one_disc_each() {
        let board = Board::new();
        let moves = legal_moves(&board, board.to_move);
        assert_eq!(moves.len(), 4);
        for mv in moves {
            let next = apply_move(&board, mv).unwrap();
            assert_eq!(next.score_by_count(), (4, 1));
            assert_eq!(next.to_move, Side::White);
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_search_vs_search_material_depth_three() {
        let black = MinimaxAI::new("Black AI", Evaluator::Material, 3);
        let white = MinimaxAI::new("White AI", Evaluator::Material, 3);
        let mut game = Game::default();
        let outcome = game.play(&black, &white).unwrap();

        assert!(game.history.len() <= 60);
        assert!(is_terminal(&game.board));
        let (b, w) = game.board.score_by_count();
        let expected = match b.cmp(&w) {
            std::cmp::Ordering::Greater => Outcome::Win(Side::Black),
            std::cmp::Ordering::Less => Outcome::Win(Side::White),
            std::cmp::Ordering::Equal => Outcome::Tie,
        };
        assert_eq!(outcome, expected);
        assert_eq!(outcome, winner(&game.board));
    }

    #[test]
    fn test_search_vs_search_is_reproducible() {
        let play = || {
            let black = MinimaxAI::new("b", Evaluator::Material, 2);
            let white = MinimaxAI::new("w", Evaluator::Material, 2);
            let mut game = Game::default();
            let outcome = game.play(&black, &white).unwrap();
            (game.history, outcome)
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_seeded_random_vs_search_is_deterministic() {
        let play = |seed: u64| {
            let random = RandomAI::seeded("random", seed);
            let search = MinimaxAI::new("search", Evaluator::Material, 3);
            let mut game = Game::default();
            let outcome = game.play(&random, &search).unwrap();
            (game.history, outcome)
        };
        let (moves_a, outcome_a) = play(11);
        let (moves_b, outcome_b) = play(11);
        assert_eq!(moves_a, moves_b);
        assert_eq!(outcome_a, outcome_b);
        assert!(moves_a.iter().all(|p| matches!(p, Ply::Place(_))));
    }

    #[test]
    fn test_heuristic_search_game_terminates() {
        let black = MinimaxAI::new(
            "heuristic",
            Evaluator::Heuristic(HeuristicWeights::default()),
            2,
        );
        let white = RandomAI::seeded("random", 5);
        let mut game = Game::default();
        let outcome = game.play(&black, &white).unwrap();
        assert_ne!(outcome, Outcome::Aborted);
        assert!(game.moves_played() <= 60);
        assert_eq!(outcome, winner(&game.board));
    }
}
