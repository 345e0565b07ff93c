//! Evaluation strategy selection
//!
//! One `Evaluator` is picked per run and copied into every game; it holds no
//! mutable state so concurrent games can share the same value.

use super::config::{AIConfig, HeuristicWeights};
use super::eval;
use crate::core::{Board, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

/// CLI/config-facing choice of strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EvaluatorKind {
    /// Disc count difference
    Material,
    /// Weighted tile/corner/proximity/mobility/positional score
    Heuristic,
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvaluatorKind::Material => write!(f, "material"),
            EvaluatorKind::Heuristic => write!(f, "heuristic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluator {
    Material,
    Heuristic(HeuristicWeights),
}

impl Evaluator {
    /// Heuristic weights come from the installed `AIConfig`.
    pub fn from_kind(kind: EvaluatorKind) -> Self {
        match kind {
            EvaluatorKind::Material => Evaluator::Material,
            EvaluatorKind::Heuristic => Evaluator::Heuristic(AIConfig::get().evaluation),
        }
    }

    pub fn kind(&self) -> EvaluatorKind {
        match self {
            Evaluator::Material => EvaluatorKind::Material,
            Evaluator::Heuristic(_) => EvaluatorKind::Heuristic,
        }
    }

    /// Score `board` for `perspective`.
    ///
    /// Returns:
    ///   - Positive score: `perspective` is ahead
    ///   - Negative score: the opponent is ahead
    pub fn evaluate(&self, board: &Board, perspective: Side) -> i32 {
        let black_score = match self {
            Evaluator::Material => eval::material(board),
            Evaluator::Heuristic(weights) => eval::heuristic(board, weights),
        };
        perspective.sign() * black_score
    }

    pub fn name(&self) -> &'static str {
        match self {
            Evaluator::Material => "material",
            Evaluator::Heuristic(_) => "heuristic",
        }
    }
}
