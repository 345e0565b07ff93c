use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use reversi_sim::game::Game;
use reversi_sim::player::ai::{Evaluator, HeuristicWeights, Minimax, MinimaxAI, RandomAI};
use reversi_sim::Board;
use std::hint::black_box;

fn bench_best_move(c: &mut Criterion) {
    let board = Board::new();
    let material = Minimax::new(Evaluator::Material, 3);
    let heuristic = Minimax::new(Evaluator::Heuristic(HeuristicWeights::default()), 3);

    c.bench_function("best_move/material_d3_opening", |b| {
        b.iter(|| material.best_move(black_box(&board)))
    });
    c.bench_function("best_move/heuristic_d3_opening", |b| {
        b.iter(|| heuristic.best_move(black_box(&board)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("game/search_d2_vs_random", |b| {
        b.iter_batched(
            || {
                (
                    MinimaxAI::new("search", Evaluator::Material, 2),
                    RandomAI::seeded("random", 13),
                )
            },
            |(search, random)| {
                let mut game = Game::default();
                black_box(game.play(&search, &random))
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_best_move, bench_full_game);
criterion_main!(benches);
