use super::r#move::Move;
use super::types::{Cell, Side, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面
///
/// A small `Copy` value: the search copies it once per node instead of undoing moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    /// 手番
    pub to_move: Side,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening: Black on (3,3)/(4,4), White on (3,4)/(4,3), Black to move.
    pub fn new() -> Self {
        let mut board = Self::empty(Side::Black);
        board.set(Move::new(3, 3), Cell::Disc(Side::Black));
        board.set(Move::new(4, 4), Cell::Disc(Side::Black));
        board.set(Move::new(3, 4), Cell::Disc(Side::White));
        board.set(Move::new(4, 3), Cell::Disc(Side::White));
        board
    }

    pub fn empty(to_move: Side) -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            to_move,
        }
    }

    pub fn get(&self, pos: Move) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Move, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Disc(side))
            .count()
    }

    /// (black, white) disc tally.
    pub fn score_by_count(&self) -> (usize, usize) {
        (self.count(Side::Black), self.count(Side::White))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count()
    }

    /// Hands the turn to the other side without placing a disc.
    pub fn pass_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Iterates all 64 squares in row-major order.
    pub fn squares() -> impl Iterator<Item = Move> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Move::new(row, col)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|c| c.display_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
