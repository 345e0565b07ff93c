pub mod config;
pub mod eval;
pub mod evaluator;
pub mod minimax;
pub mod pst;
pub mod random;

pub use config::{AIConfig, HeuristicWeights};
pub use evaluator::{Evaluator, EvaluatorKind};
pub use minimax::{Minimax, MinimaxAI, SearchReport};
pub use random::RandomAI;
