use crate::core::{Board, Cell, Move, Outcome, Side, BOARD_SIZE};
use crate::error::{GameError, GameResult};

/// 8方向 (row, col)
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn offset(pos: Move, dr: isize, dc: isize) -> Option<Move> {
    let row = pos.row.checked_add_signed(dr)?;
    let col = pos.col.checked_add_signed(dc)?;
    let next = Move::new(row, col);
    next.in_bounds().then_some(next)
}

/// Number of opposing discs bracketed by `side` when walking from `pos` in one
/// direction. Zero when the run is empty, hits an empty square or leaves the board.
fn bracketed_run(board: &Board, pos: Move, dr: isize, dc: isize, side: Side) -> usize {
    let opponent = Cell::Disc(side.opponent());
    let mut len = 0;
    let mut cur = pos;
    while let Some(next) = offset(cur, dr, dc) {
        match board.get(next) {
            c if c == opponent => len += 1,
            Cell::Disc(s) if s == side => return len,
            _ => return 0,
        }
        cur = next;
    }
    0
}

/// 合法手判定
pub fn is_legal_move(board: &Board, mv: Move, side: Side) -> bool {
    if !mv.in_bounds() || !board.get(mv).is_empty() {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| bracketed_run(board, mv, dr, dc, side) > 0)
}

/// Discs that `side` would flip by playing `mv`, direction by direction.
/// Empty for an illegal move.
pub fn flips(board: &Board, mv: Move, side: Side) -> Vec<Move> {
    if !mv.in_bounds() || !board.get(mv).is_empty() {
        return Vec::new();
    }
    let mut flipped = Vec::new();
    for &(dr, dc) in DIRECTIONS.iter() {
        let len = bracketed_run(board, mv, dr, dc, side);
        let mut cur = mv;
        for _ in 0..len {
            // bracketed_run already walked these squares
            if let Some(next) = offset(cur, dr, dc) {
                flipped.push(next);
                cur = next;
            }
        }
    }
    flipped
}

/// 着手して新しい盤面を返す (元の盤面は変更しない)
pub fn apply_move(board: &Board, mv: Move) -> GameResult<Board> {
    if !mv.in_bounds() {
        return Err(GameError::OutOfBounds(mv));
    }
    let side = board.to_move;
    let flipped = flips(board, mv, side);
    if flipped.is_empty() {
        return Err(GameError::IllegalMove { mv, side });
    }

    let mut next = *board;
    next.set(mv, Cell::Disc(side));
    for pos in flipped {
        next.set(pos, Cell::Disc(side));
    }
    next.to_move = side.opponent();
    Ok(next)
}

/// 合法手生成 (row-major order)
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    Board::squares()
        .filter(|&mv| is_legal_move(board, mv, side))
        .collect()
}

pub fn has_legal_move(board: &Board, side: Side) -> bool {
    Board::squares().any(|mv| is_legal_move(board, mv, side))
}

/// The side to move has nothing to play. Under the default rule the game ends here.
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board, board.to_move)
}

/// 勝敗判定 (石数の多い方が勝ち)
pub fn winner(board: &Board) -> Outcome {
    let (black, white) = board.score_by_count();
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Outcome::Win(Side::Black),
        std::cmp::Ordering::Less => Outcome::Win(Side::White),
        std::cmp::Ordering::Equal => Outcome::Tie,
    }
}

/// Total squares on the board; disc counts plus empties always sum to this.
pub const SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
