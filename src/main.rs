use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use reversi_sim::display::{render_board, DisplayState};
use reversi_sim::game::{Game, PassRule, Ply};
use reversi_sim::player::ai::{AIConfig, Evaluator, EvaluatorKind};
use reversi_sim::player::{build_controller, MoveSource};
use reversi_sim::selfplay::{run_simulations, SimulationConfig, SimulationStats, RECORD_DIR};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "reversi-sim", version, about = "Reversi minimax self-play runner")]
struct Cli {
    /// Write the log (one record per finished game) to this file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// AI config (heuristic weights, default depth)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Args)]
struct MatchArgs {
    /// Evaluation strategy used by every search player
    #[arg(short, long, value_enum, default_value_t = EvaluatorKind::Material)]
    evaluator: EvaluatorKind,

    /// Move source for Black (moves first)
    #[arg(long, value_enum, default_value_t = MoveSource::Search)]
    black: MoveSource,

    /// Move source for White
    #[arg(long, value_enum, default_value_t = MoveSource::Random)]
    white: MoveSource,

    /// Search depth (defaults to the AI config, 3 out of the box)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    depth: Option<u32>,

    /// Seed for random move sources
    #[arg(long)]
    seed: Option<u64>,

    /// What to do when the side to move is blocked
    #[arg(long, value_enum, default_value_t = PassRule::EndGame)]
    pass_rule: PassRule,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run many independent games in parallel and report win/loss/tie tallies
    Simulate {
        #[command(flatten)]
        game: MatchArgs,

        /// Number of games
        #[arg(short = 'n', long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
        games: u64,

        /// Worker threads (default: available parallelism)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Abort any game that runs longer than this many seconds
        #[arg(long, value_name = "SECS")]
        time_limit: Option<u64>,

        /// Write the aggregated stats as JSON
        #[arg(long, value_name = "FILE")]
        summary: Option<PathBuf>,

        /// Save every game record under selfplay_records/
        #[arg(long)]
        save_records: bool,
    },
    /// Play a single game on the console
    Play {
        #[command(flatten)]
        game: MatchArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let ai_config = match &cli.config {
        Some(path) => AIConfig::load_from(path)?,
        None => AIConfig::load_or_default(),
    };
    let default_depth = ai_config.search.depth;
    AIConfig::init(ai_config);

    match cli.cmd {
        Command::Simulate {
            game,
            games,
            threads,
            time_limit,
            summary,
            save_records,
        } => {
            let config = SimulationConfig {
                num_games: games as usize,
                evaluator: Evaluator::from_kind(game.evaluator),
                black: game.black,
                white: game.white,
                depth: game.depth.map_or(default_depth, |d| d as usize),
                threads,
                seed: game.seed,
                pass_rule: game.pass_rule,
                time_limit: time_limit.map(Duration::from_secs),
                record_dir: save_records.then(|| PathBuf::from(RECORD_DIR)),
            };
            let stats = run_simulations(&config)?;
            print_stats(&stats);
            if let Some(path) = summary {
                stats.save_json(&path)?;
                println!("Summary written to {}", path.display());
            }
        }
        Command::Play { game } => play_console(&game, default_depth)?,
    }
    Ok(())
}

fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn print_stats(stats: &SimulationStats) {
    println!("=== Simulation Results ===");
    println!(
        "{} games | evaluator: {} | Black: {} | White: {} | depth {}",
        stats.total_games, stats.evaluator, stats.black_source, stats.white_source, stats.depth
    );
    println!(
        "Black wins: {} ({:.1}%)",
        stats.black_wins,
        stats.percent(stats.black_wins)
    );
    println!(
        "White wins: {} ({:.1}%)",
        stats.white_wins,
        stats.percent(stats.white_wins)
    );
    println!("Ties: {} ({:.1}%)", stats.ties, stats.percent(stats.ties));
    if stats.aborted > 0 {
        println!("Aborted: {}", stats.aborted);
    }
    println!("Avg plies: {:.1}", stats.avg_plies);
    println!("Avg time: {:.2}s", stats.avg_time_ms / 1000.0);
}

fn play_console(args: &MatchArgs, default_depth: usize) -> anyhow::Result<()> {
    let evaluator = Evaluator::from_kind(args.evaluator);
    let depth = args.depth.map_or(default_depth, |d| d as usize);
    let black = build_controller(
        args.black,
        "Black",
        evaluator,
        depth,
        args.seed,
        args.pass_rule,
    );
    let white = build_controller(
        args.white,
        "White",
        evaluator,
        depth,
        args.seed.map(|s| s.wrapping_add(1)),
        args.pass_rule,
    );

    let mut game = Game::default().with_pass_rule(args.pass_rule);
    let mut last_move = None;
    let outcome = game.play_with(black.as_ref(), white.as_ref(), |board, ply| {
        // 直前の手番側
        let mover = board.to_move.opponent();
        match ply {
            Ply::Place(mv) => {
                last_move = Some(mv);
                println!("{} plays {}", mover, mv);
            }
            Ply::Pass => println!("{} passes", mover),
        }
    })?;

    let state = DisplayState {
        status_msg: Some(format!("Game over: {}", outcome)),
        last_move,
        color: true,
        ..DisplayState::default()
    };
    render_board(&mut std::io::stdout(), &game.board, &state)?;
    Ok(())
}
