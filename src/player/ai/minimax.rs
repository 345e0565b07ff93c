use super::evaluator::Evaluator;
use crate::core::{Board, Move, Side};
use crate::error::{GameError, GameResult};
use crate::game::PassRule;
use crate::logic::{apply_move, has_legal_move, legal_moves};
use crate::player::PlayerController;
use std::cell::Cell;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub best: Move,
    pub score: i32,
    /// Positions visited, root children included.
    pub nodes: u64,
}

/// Plain depth-limited minimax. No pruning, no tables: every node works on its
/// own copy of the board and is dropped when the call returns.
#[derive(Debug, Clone, Copy)]
pub struct Minimax {
    pub evaluator: Evaluator,
    pub depth: usize,
    /// Must match the driver's rule, or the search misjudges blocked positions.
    pub pass_rule: PassRule,
}

impl Minimax {
    pub fn new(evaluator: Evaluator, depth: usize) -> Self {
        Self {
            evaluator,
            depth,
            pass_rule: PassRule::default(),
        }
    }

    pub fn with_pass_rule(mut self, pass_rule: PassRule) -> Self {
        self.pass_rule = pass_rule;
        self
    }

    /// Minimax value of `board` for `perspective`.
    pub fn search(&self, board: &Board, depth: usize, maximizing: bool, perspective: Side) -> i32 {
        let mut nodes = 0;
        self.minimax(board, depth, maximizing, perspective, &mut nodes)
    }

    fn minimax(
        &self,
        board: &Board,
        depth: usize,
        maximizing: bool,
        perspective: Side,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        if depth == 0 {
            return self.evaluator.evaluate(board, perspective);
        }

        let moves = legal_moves(board, board.to_move);
        if moves.is_empty() {
            // パスは1手として数える
            if self.pass_rule == PassRule::Pass && has_legal_move(board, board.to_move.opponent()) {
                let mut passed = *board;
                passed.pass_turn();
                return self.minimax(&passed, depth - 1, !maximizing, perspective, nodes);
            }
            return self.evaluator.evaluate(board, perspective);
        }

        let children = moves
            .into_iter()
            .filter_map(|mv| apply_move(board, mv).ok());

        if maximizing {
            let mut max_eval = i32::MIN;
            for next_board in children {
                let eval = self.minimax(&next_board, depth - 1, false, perspective, nodes);
                max_eval = max_eval.max(eval);
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for next_board in children {
                let eval = self.minimax(&next_board, depth - 1, true, perspective, nodes);
                min_eval = min_eval.min(eval);
            }
            min_eval
        }
    }

    /// Best move for the side to move.
    ///
    /// Each child is searched to `self.depth` with the opponent to reply. The
    /// first move (row-major) with the strictly highest score wins ties.
    pub fn best_move(&self, board: &Board) -> GameResult<SearchReport> {
        let me = board.to_move;
        let moves = legal_moves(board, me);
        if moves.is_empty() {
            return Err(GameError::NoLegalMove(me));
        }

        let mut nodes = 0;
        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            let next_board = apply_move(board, mv)?;
            let score = self.minimax(&next_board, self.depth, false, me, &mut nodes);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((mv, score)),
            }
        }

        // moves was non-empty, so best is set
        let (best, score) = best.ok_or(GameError::NoLegalMove(me))?;
        Ok(SearchReport { best, score, nodes })
    }
}

pub struct MinimaxAI {
    pub name: String,
    pub engine: Minimax,
    nodes_evaluated: Cell<u64>,
}

impl MinimaxAI {
    pub fn new(name: &str, evaluator: Evaluator, depth: usize) -> Self {
        Self {
            name: name.to_string(),
            engine: Minimax::new(evaluator, depth),
            nodes_evaluated: Cell::new(0),
        }
    }

    pub fn with_pass_rule(mut self, pass_rule: PassRule) -> Self {
        self.engine = self.engine.with_pass_rule(pass_rule);
        self
    }

    /// Nodes visited across every search this player has run.
    pub fn nodes_evaluated(&self) -> u64 {
        self.nodes_evaluated.get()
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, moves: &[Move]) -> Option<Move> {
        if moves.is_empty() {
            return None;
        }

        match self.engine.best_move(board) {
            Ok(report) => {
                self.nodes_evaluated
                    .set(self.nodes_evaluated.get() + report.nodes);
                tracing::debug!(
                    player = %self.name,
                    mv = %report.best,
                    score = report.score,
                    nodes = report.nodes,
                    "search finished"
                );
                Some(report.best)
            }
            Err(e) => {
                tracing::warn!(player = %self.name, "search failed: {}", e);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::setup_from_strings;
    use crate::player::ai::config::HeuristicWeights;

    #[test]
    fn test_depth_zero_is_static_eval() {
        let board = apply_move(&Board::new(), Move::new(2, 4)).unwrap();
        for evaluator in [
            Evaluator::Material,
            Evaluator::Heuristic(HeuristicWeights::default()),
        ] {
            let engine = Minimax::new(evaluator, 3);
            for side in [Side::Black, Side::White] {
                for maximizing in [true, false] {
                    assert_eq!(
                        engine.search(&board, 0, maximizing, side),
                        evaluator.evaluate(&board, side)
                    );
                }
            }
        }
    }

    #[test]
    fn test_terminal_position_is_static_eval() {
        let board = setup_from_strings(&["BBBB....", "W......."], Side::White);
        let engine = Minimax::new(Evaluator::Material, 3);
        assert_eq!(engine.search(&board, 3, true, Side::Black), 3);
    }

    #[test]
    fn test_depth_one_picks_greedy_reply() {
        let board = Board::new();
        let engine = Minimax::new(Evaluator::Material, 1);
        // Black maximizes material: every opening move gives +3
        assert_eq!(engine.search(&board, 1, true, Side::Black), 3);
        // minimizing from Black's view: all replies equal as well
        assert_eq!(engine.search(&board, 1, false, Side::Black), 3);
    }

    #[test]
    fn test_blocked_side_passes_under_pass_rule() {
        // White cannot move; Black can extend the row to (0,2)
        let board = setup_from_strings(&["BW......"], Side::White);
        let end_game = Minimax::new(Evaluator::Material, 2);
        let pass = end_game.with_pass_rule(PassRule::Pass);

        assert_eq!(end_game.search(&board, 2, false, Side::Black), 0);
        // White passes, then Black flips (0,1)
        assert_eq!(pass.search(&board, 2, false, Side::Black), 3);
        // the pass uses up the only ply
        assert_eq!(pass.search(&board, 1, false, Side::Black), 0);
    }

    #[test]
    fn test_pass_then_wipeout() {
        // terminal under the default rule, but with passing Black takes (2,0)
        // and White is left with nothing
        let board = setup_from_strings(&["BBBB....", "W......."], Side::White);
        let engine = Minimax::new(Evaluator::Material, 3).with_pass_rule(PassRule::Pass);
        assert_eq!(engine.search(&board, 3, false, Side::Black), 6);
    }

    #[test]
    fn test_best_move_breaks_ties_by_order() {
        // All four opening moves are symmetric, so the first one wins
        let engine = Minimax::new(Evaluator::Material, 0);
        let report = engine.best_move(&Board::new()).unwrap();
        assert_eq!(report.best, Move::new(2, 4));
        assert_eq!(report.score, 3);
        assert_eq!(report.nodes, 4);
    }

    #[test]
    fn test_best_move_takes_the_bigger_capture() {
        // (0,0) flips one disc; (2,0) comes later but flips two
        let board = setup_from_strings(
            &[
                ".WB.....", //
                "........", //
                ".WWB....", //
            ],
            Side::Black,
        );
        let engine = Minimax::new(Evaluator::Material, 0);
        let report = engine.best_move(&board).unwrap();
        assert_eq!(report.best, Move::new(2, 0));
        assert_eq!(report.score, 4);
    }

    #[test]
    fn test_best_move_on_terminal_position_errors() {
        let board = setup_from_strings(&["BBBB....", "W......."], Side::White);
        let engine = Minimax::new(Evaluator::Material, 3);
        assert_eq!(
            engine.best_move(&board),
            Err(GameError::NoLegalMove(Side::White))
        );
    }

    #[test]
    fn test_search_does_not_touch_board() {
        let board = Board::new();
        let snapshot = board;
        let engine = Minimax::new(Evaluator::Heuristic(HeuristicWeights::default()), 2);
        let _ = engine.best_move(&board).unwrap();
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_controller_counts_nodes() {
        let ai = MinimaxAI::new("AI", Evaluator::Material, 1);
        let board = Board::new();
        let moves = legal_moves(&board, Side::Black);
        assert_eq!(ai.choose_move(&board, &moves), Some(Move::new(2, 4)));
        assert!(ai.nodes_evaluated() > 4);
        assert_eq!(ai.choose_move(&board, &[]), None);
    }
}
