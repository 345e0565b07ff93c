use crate::core::{Outcome, Side};
use crate::game::{Game, GameRecord, PassRule};
use crate::player::ai::{Evaluator, EvaluatorKind};
use crate::player::{build_controller, MoveSource};
use anyhow::Context;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub const RECORD_DIR: &str = "selfplay_records";

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub num_games: usize,
    pub evaluator: Evaluator,
    pub black: MoveSource,
    pub white: MoveSource,
    pub depth: usize,
    /// Worker threads; `None` uses the available hardware parallelism.
    pub threads: Option<usize>,
    /// Base seed for random move sources. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub pass_rule: PassRule,
    /// Per-game wall-clock limit; exceeding it yields `Outcome::Aborted`.
    pub time_limit: Option<Duration>,
    /// Write each game's record under this directory.
    pub record_dir: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_games: 1,
            evaluator: Evaluator::Material,
            black: MoveSource::Search,
            white: MoveSource::Random,
            depth: 3,
            threads: None,
            seed: None,
            pass_rule: PassRule::default(),
            time_limit: None,
            record_dir: None,
        }
    }
}

impl SimulationConfig {
    fn involves_human(&self) -> bool {
        self.black == MoveSource::Human || self.white == MoveSource::Human
    }

    /// Seeds for game `index`: black and white never share a stream.
    fn seeds_for(&self, index: usize) -> (Option<u64>, Option<u64>) {
        match self.seed {
            Some(base) => {
                let offset = 2 * index as u64;
                (
                    Some(base.wrapping_add(offset)),
                    Some(base.wrapping_add(offset + 1)),
                )
            }
            None => (None, None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub index: usize,
    pub outcome: Outcome,
    pub evaluator: EvaluatorKind,
    pub plies: usize,
    pub black_discs: usize,
    pub white_discs: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationStats {
    pub total_games: usize,
    pub black_wins: usize,
    pub white_wins: usize,
    pub ties: usize,
    pub aborted: usize,
    pub avg_plies: f64,
    pub avg_time_ms: f64,
    pub evaluator: EvaluatorKind,
    pub black_source: MoveSource,
    pub white_source: MoveSource,
    pub depth: usize,
    pub games: Vec<GameSummary>,
}

impl SimulationStats {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            total_games: 0,
            black_wins: 0,
            white_wins: 0,
            ties: 0,
            aborted: 0,
            avg_plies: 0.0,
            avg_time_ms: 0.0,
            evaluator: config.evaluator.kind(),
            black_source: config.black,
            white_source: config.white,
            depth: config.depth,
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: GameSummary) {
        self.total_games += 1;
        match result.outcome {
            Outcome::Win(Side::Black) => self.black_wins += 1,
            Outcome::Win(Side::White) => self.white_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Aborted => self.aborted += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_plies: usize = self.games.iter().map(|g| g.plies).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_plies = total_plies as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }

    pub fn percent(&self, count: usize) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            count as f64 / self.total_games as f64 * 100.0
        }
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Plays a single self-contained game. Everything it touches is owned here.
pub fn play_one(index: usize, config: &SimulationConfig) -> anyhow::Result<GameSummary> {
    let start_time = Instant::now();
    let (black_seed, white_seed) = config.seeds_for(index);
    let black_name = format!("{}-Black", config.black);
    let white_name = format!("{}-White", config.white);
    let black = build_controller(
        config.black,
        &black_name,
        config.evaluator,
        config.depth,
        black_seed,
        config.pass_rule,
    );
    let white = build_controller(
        config.white,
        &white_name,
        config.evaluator,
        config.depth,
        white_seed,
        config.pass_rule,
    );

    let mut game = Game::default().with_pass_rule(config.pass_rule);
    if let Some(limit) = config.time_limit {
        game = game.with_time_limit(limit);
    }

    let outcome = game
        .play(black.as_ref(), white.as_ref())
        .with_context(|| format!("game {}", index))?;

    let elapsed = start_time.elapsed();
    let (black_discs, white_discs) = game.board.score_by_count();
    tracing::info!(
        game = index,
        evaluator = %config.evaluator.kind(),
        winner = %outcome,
        plies = game.history.len(),
        black_discs,
        white_discs,
        "game finished"
    );

    if let Some(dir) = &config.record_dir {
        save_record(dir, index, &game.record(&black_name, &white_name))?;
    }

    Ok(GameSummary {
        index,
        outcome,
        evaluator: config.evaluator.kind(),
        plies: game.history.len(),
        black_discs,
        white_discs,
        time_ms: elapsed.as_millis(),
    })
}

/// Runs `num_games` independent games on a fixed-size worker pool and waits for
/// all of them before aggregating.
pub fn run_simulations(config: &SimulationConfig) -> anyhow::Result<SimulationStats> {
    anyhow::ensure!(config.num_games > 0, "simulation count must be positive");
    anyhow::ensure!(config.depth > 0, "search depth must be positive");

    let threads = if config.involves_human() {
        if config.threads.is_some_and(|t| t > 1) {
            tracing::warn!("human move source present, running games one at a time");
        }
        1
    } else {
        config.threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("sim-worker-{}", i))
        .build()
        .context("building worker pool")?;

    tracing::info!(
        games = config.num_games,
        threads,
        evaluator = %config.evaluator.kind(),
        black = %config.black,
        white = %config.white,
        depth = config.depth,
        "starting simulations"
    );

    let mut results: Vec<GameSummary> = pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|index| play_one(index, config))
            .collect::<anyhow::Result<Vec<_>>>()
    })?;
    results.sort_by_key(|g| g.index);

    let mut stats = SimulationStats::new(config);
    for result in results {
        stats.add_result(result);
    }
    Ok(stats)
}

fn save_record(dir: &Path, index: usize, record: &GameRecord) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let filename = dir.join(format!(
        "game_{:04}_{}.json",
        index,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let file = std::fs::File::create(&filename)
        .with_context(|| format!("creating {}", filename.display()))?;
    serde_json::to_writer(file, record)?;
    Ok(())
}
