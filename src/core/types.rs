use serde::{Deserialize, Serialize};
use std::fmt;

/// 盤面サイズ (8x8 固定)
pub const BOARD_SIZE: usize = 8;

/// 手番側。Black が先手 (side A)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    White,
}

impl Default for Side {
    fn default() -> Self {
        Side::Black
    }
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// +1 for the reference side (Black), -1 for White.
    pub fn sign(self) -> i32 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// マスの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Disc(Side),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn display_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Disc(Side::Black) => 'B',
            Cell::Disc(Side::White) => 'W',
        }
    }
}

/// 対局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Side),
    Tie,
    /// The game was cut short (deadline hit or a move source gave up).
    Aborted,
}

impl Outcome {
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(side),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Win(side) => write!(f, "{} wins", side),
            Outcome::Tie => write!(f, "Tie"),
            Outcome::Aborted => write!(f, "Aborted"),
        }
    }
}
