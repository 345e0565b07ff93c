//! # Evaluation Module
//!
//! Static evaluation of a `Board`. Every function here scores the position from
//! Black's point of view (positive = Black ahead); `Evaluator` flips the sign for
//! White.
//!
//! ## Heuristic signals
//! 1. **Tiles**: disc-count ratio of the leading side.
//! 2. **Corners**: corner ownership.
//! 3. **Proximity**: discs next to a corner, which tend to hand the corner away.
//! 4. **Mobility**: legal-move ratio of the side with more options.
//! 5. **Positional**: static square weights (see `pst`).

use super::config::HeuristicWeights;
use crate::core::{Board, Cell, Move, Side, BOARD_SIZE};
use crate::logic::legal_moves;
use crate::player::ai::pst::get_square_weight;

const LAST: usize = BOARD_SIZE - 1;
const CORNERS: [Move; 4] = [
    Move { row: 0, col: 0 },
    Move { row: 0, col: LAST },
    Move { row: LAST, col: 0 },
    Move { row: LAST, col: LAST },
];

/// Signed share of the leader: `+100·a/(a+b)` when `a` leads, `-100·b/(a+b)`
/// when `b` leads, 0 on a tie (including 0/0).
fn ratio(a: usize, b: usize) -> i32 {
    let (a, b) = (a as i32, b as i32);
    if a > b {
        100 * a / (a + b)
    } else if b > a {
        -100 * b / (a + b)
    } else {
        0
    }
}

fn count_on(board: &Board, squares: impl Iterator<Item = Move>) -> (i32, i32) {
    squares.fold((0, 0), |(black, white), pos| match board.get(pos) {
        Cell::Disc(Side::Black) => (black + 1, white),
        Cell::Disc(Side::White) => (black, white + 1),
        Cell::Empty => (black, white),
    })
}

/// Squares touching a corner, diagonals included. The corners themselves are
/// not part of the set.
fn corner_neighbours() -> impl Iterator<Item = Move> {
    CORNERS.into_iter().flat_map(|corner| {
        (-1isize..=1)
            .flat_map(move |dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| (dr, dc) != (0, 0))
            .filter_map(move |(dr, dc)| {
                let row = corner.row.checked_add_signed(dr)?;
                let col = corner.col.checked_add_signed(dc)?;
                let pos = Move::new(row, col);
                pos.in_bounds().then_some(pos)
            })
    })
}

/// Black discs minus White discs.
pub fn material(board: &Board) -> i32 {
    let (black, white) = board.score_by_count();
    black as i32 - white as i32
}

pub fn tile_balance(board: &Board) -> i32 {
    let (black, white) = board.score_by_count();
    ratio(black, white)
}

pub fn corner_balance(board: &Board) -> i32 {
    let (black, white) = count_on(board, CORNERS.into_iter());
    25 * (black - white)
}

pub fn proximity_penalty(board: &Board) -> i32 {
    let (black, white) = count_on(board, corner_neighbours());
    -125 * (black - white)
}

pub fn mobility_balance(board: &Board) -> i32 {
    let black = legal_moves(board, Side::Black).len();
    let white = legal_moves(board, Side::White).len();
    ratio(black, white)
}

pub fn positional_weight(board: &Board) -> i32 {
    Board::squares()
        .map(|pos| match board.get(pos) {
            Cell::Disc(side) => side.sign() * get_square_weight(pos),
            Cell::Empty => 0,
        })
        .sum()
}

/// Weighted sum of the five signals, from Black's point of view.
///
/// Summed in `i64` and clamped so that `i32::MIN`/`i32::MAX` stay free for the
/// search's sentinels.
pub fn heuristic(board: &Board, weights: &HeuristicWeights) -> i32 {
    // 設定ファイルの重みは任意なので飽和演算
    let score = [
        (weights.tiles, tile_balance(board)),
        (weights.corners, corner_balance(board)),
        (weights.proximity, proximity_penalty(board)),
        (weights.mobility, mobility_balance(board)),
        (weights.positional, positional_weight(board)),
    ]
    .into_iter()
    .fold(0i64, |acc, (weight, signal)| {
        acc.saturating_add(weight.saturating_mul(signal as i64))
    });
    score.clamp(i32::MIN as i64 + 1, i32::MAX as i64 - 1) as i32
}
