use crate::core::{Board, Cell, Move, Side, BOARD_SIZE};

/// 文字列配列から盤面を初期化する
///
/// Each row lists up to 8 cells; whitespace is ignored. `B`/`X` is a Black disc,
/// `W`/`O` a White disc, anything else an empty square.
pub fn setup_from_strings(setup: &[&str], to_move: Side) -> Board {
    let mut board = Board::empty(to_move);

    for (row, line) in setup.iter().take(BOARD_SIZE).enumerate() {
        let cells = line.chars().filter(|c| !c.is_whitespace()).take(BOARD_SIZE);
        for (col, ch) in cells.enumerate() {
            let cell = match ch.to_ascii_uppercase() {
                'B' | 'X' => Cell::Disc(Side::Black),
                'W' | 'O' => Cell::Disc(Side::White),
                _ => continue,
            };
            board.set(Move::new(row, col), cell);
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_matches_opening() {
        let board = setup_from_strings(
            &[
                "........",
                "........",
                "........",
                "...BW...",
                "...WB...",
                "........",
                "........",
                "........",
            ],
            Side::Black,
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_setup_accepts_spaced_rows() {
        let board = setup_from_strings(&["X . O"], Side::White);
        assert_eq!(board.get(Move::new(0, 0)), Cell::Disc(Side::Black));
        assert!(board.get(Move::new(0, 1)).is_empty());
        assert_eq!(board.get(Move::new(0, 2)), Cell::Disc(Side::White));
        assert_eq!(board.to_move, Side::White);
        assert_eq!(board.empty_count(), 62);
    }
}
