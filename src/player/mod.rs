pub mod ai;
pub mod console;
pub mod controller;

pub use ai::{MinimaxAI, RandomAI};
pub use console::ConsoleController;
pub use controller::PlayerController;

use crate::game::PassRule;
use crate::player::ai::Evaluator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a side's moves come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MoveSource {
    /// Minimax search
    Search,
    /// Uniformly random legal move
    Random,
    /// Typed in on the console
    Human,
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveSource::Search => write!(f, "search"),
            MoveSource::Random => write!(f, "random"),
            MoveSource::Human => write!(f, "human"),
        }
    }
}

/// Builds the controller for one side of one game.
///
/// `seed` only matters for `Random`; `None` draws from entropy. `pass_rule`
/// should be the one the game is played under.
pub fn build_controller(
    source: MoveSource,
    name: &str,
    evaluator: Evaluator,
    depth: usize,
    seed: Option<u64>,
    pass_rule: PassRule,
) -> Box<dyn PlayerController> {
    match source {
        MoveSource::Search => {
            Box::new(MinimaxAI::new(name, evaluator, depth).with_pass_rule(pass_rule))
        }
        MoveSource::Random => match seed {
            Some(seed) => Box::new(RandomAI::seeded(name, seed)),
            None => Box::new(RandomAI::new(name)),
        },
        MoveSource::Human => Box::new(ConsoleController::stdio(name)),
    }
}
