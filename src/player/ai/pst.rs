use crate::core::{Move, BOARD_SIZE};

// Static square weights. Corners are worth the most; the X-squares diagonal to
// a corner are the worst place to be.
const POSITION_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [20, -3, 11, 8, 8, 11, -3, 20],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [-3, -7, -4, 1, 1, -4, -7, -3],
    [20, -3, 11, 8, 8, 11, -3, 20],
];

pub fn get_square_weight(pos: Move) -> i32 {
    POSITION_WEIGHTS[pos.row][pos.col]
}
