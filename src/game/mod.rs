use crate::core::{Board, Move, Outcome, Side};
use crate::error::{GameError, GameResult};
use crate::logic::{apply_move, has_legal_move, legal_moves, winner};
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// What happens when the side to move has no legal move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum PassRule {
    /// The game ends immediately.
    #[default]
    EndGame,
    /// Standard Othello: the blocked side passes; the game ends once neither side
    /// can move.
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Finished(Outcome),
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ply {
    Place(Move),
    Pass,
}

/// 棋譜
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub black: String,
    pub white: String,
    pub plies: Vec<Ply>,
    pub outcome: Outcome,
    pub black_discs: usize,
    pub white_discs: usize,
}

pub struct Game {
    pub board: Board,
    pub state: GameState,
    pub history: Vec<Ply>,
    pub pass_rule: PassRule,
    deadline: Option<Instant>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Board::new())
    }
}

impl Game {
    pub fn new(board: Board) -> Self {
        Game {
            board,
            state: GameState::InProgress,
            history: Vec::new(),
            pass_rule: PassRule::default(),
            deadline: None,
        }
    }

    pub fn with_pass_rule(mut self, pass_rule: PassRule) -> Self {
        self.pass_rule = pass_rule;
        self
    }

    /// Wall-clock budget for the whole game, checked between plies.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.deadline = Some(Instant::now() + limit);
        self
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Finished(outcome) => Some(outcome),
            GameState::InProgress => None,
        }
    }

    /// Discs placed so far (passes excluded).
    pub fn moves_played(&self) -> usize {
        self.history
            .iter()
            .filter(|p| matches!(p, Ply::Place(_)))
            .count()
    }

    fn finish(&mut self, outcome: Outcome) -> GameState {
        self.state = GameState::Finished(outcome);
        self.state
    }

    /// Advances the game by one ply.
    ///
    /// A move that is not in the legal list is a controller bug and is returned
    /// as `IllegalMove` without touching the board.
    pub fn step(
        &mut self,
        black: &dyn PlayerController,
        white: &dyn PlayerController,
    ) -> GameResult<GameState> {
        if let GameState::Finished(_) = self.state {
            return Ok(self.state);
        }

        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            tracing::warn!(plies = self.history.len(), "time limit reached, aborting game");
            return Ok(self.finish(Outcome::Aborted));
        }

        let side = self.board.to_move;
        let moves = legal_moves(&self.board, side);

        if moves.is_empty() {
            if self.pass_rule == PassRule::Pass && has_legal_move(&self.board, side.opponent()) {
                tracing::debug!(%side, "no legal move, passing");
                self.board.pass_turn();
                self.history.push(Ply::Pass);
                return Ok(self.state);
            }
            return Ok(self.finish(winner(&self.board)));
        }

        let controller = match side {
            Side::Black => black,
            Side::White => white,
        };

        let Some(mv) = controller.choose_move(&self.board, &moves) else {
            tracing::info!(player = controller.name(), %side, "no move chosen, aborting game");
            return Ok(self.finish(Outcome::Aborted));
        };
        if !moves.contains(&mv) {
            return Err(GameError::IllegalMove { mv, side });
        }

        self.board = apply_move(&self.board, mv)?;
        self.history.push(Ply::Place(mv));
        tracing::trace!(player = controller.name(), %side, %mv, "move played");
        Ok(self.state)
    }

    /// Plays to the end, calling `on_ply` after every ply.
    pub fn play_with<F>(
        &mut self,
        black: &dyn PlayerController,
        white: &dyn PlayerController,
        mut on_ply: F,
    ) -> GameResult<Outcome>
    where
        F: FnMut(&Board, Ply),
    {
        loop {
            let before = self.history.len();
            if let GameState::Finished(outcome) = self.step(black, white)? {
                return Ok(outcome);
            }
            if let Some(&ply) = self.history.get(before) {
                on_ply(&self.board, ply);
            }
        }
    }

    pub fn play(
        &mut self,
        black: &dyn PlayerController,
        white: &dyn PlayerController,
    ) -> GameResult<Outcome> {
        self.play_with(black, white, |_, _| {})
    }

    pub fn record(&self, black: &str, white: &str) -> GameRecord {
        let (black_discs, white_discs) = self.board.score_by_count();
        GameRecord {
            black: black.to_string(),
            white: white.to_string(),
            plies: self.history.clone(),
            outcome: self.outcome().unwrap_or(Outcome::Aborted),
            black_discs,
            white_discs,
        }
    }
}
