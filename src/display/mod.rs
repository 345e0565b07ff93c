use crate::core::{Board, Cell, Move, Side, BOARD_SIZE};
use crossterm::style::Stylize;
use std::io::{self, Write};

#[derive(Default)]
pub struct DisplayState {
    /// Squares to mark as playable.
    pub highlights: Vec<Move>,
    pub status_msg: Option<String>,
    /// Drawn in red when colours are on.
    pub last_move: Option<Move>,
    /// ANSI colours on/off (off for files and tests)
    pub color: bool,
}

pub fn render_board<W: Write>(out: &mut W, board: &Board, state: &DisplayState) -> io::Result<()> {
    if let Some(msg) = &state.status_msg {
        if state.color {
            writeln!(out, "{}", msg.clone().bold().yellow())?;
        } else {
            writeln!(out, "{}", msg)?;
        }
    }

    // 列番号
    write!(out, "  ")?;
    for col in 0..BOARD_SIZE {
        write!(out, " {}", col)?;
    }
    writeln!(out)?;

    for row in 0..BOARD_SIZE {
        write!(out, "{} ", row)?;
        for col in 0..BOARD_SIZE {
            let pos = Move::new(row, col);
            let cell = board.get(pos);
            let ch = if cell.is_empty() && state.highlights.contains(&pos) {
                '*'
            } else {
                cell.display_char()
            };
            let text = format!(" {}", ch);

            if !state.color {
                write!(out, "{}", text)?;
            } else if state.last_move == Some(pos) {
                write!(out, "{}", text.red())?;
            } else {
                match cell {
                    Cell::Disc(Side::Black) => write!(out, "{}", text.cyan())?,
                    Cell::Disc(Side::White) => write!(out, "{}", text.magenta())?,
                    Cell::Empty if ch == '*' => write!(out, "{}", text.green())?,
                    Cell::Empty => write!(out, "{}", text)?,
                }
            }
        }
        writeln!(out)?;
    }

    let (black, white) = board.score_by_count();
    writeln!(
        out,
        "Black: {}  White: {}  ({} to move)",
        black, white, board.to_move
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_render() {
        let mut buf = Vec::new();
        let state = DisplayState {
            highlights: vec![Move::new(2, 4)],
            status_msg: Some("hello".to_string()),
            ..DisplayState::default()
        };
        render_board(&mut buf, &Board::new(), &state).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "hello");
        assert_eq!(lines[1], "   0 1 2 3 4 5 6 7");
        assert_eq!(lines[4], "2  . . . . * . . .");
        assert_eq!(lines[5], "3  . . . B W . . .");
        assert!(lines.last().unwrap().starts_with("Black: 2  White: 2"));
    }

    #[test]
    fn test_last_move_is_marked_only_in_colour() {
        // crossterm drops every colour under NO_COLOR
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        let render = |last_move: Option<Move>, color: bool| {
            let mut buf = Vec::new();
            let state = DisplayState {
                last_move,
                color,
                ..DisplayState::default()
            };
            render_board(&mut buf, &Board::new(), &state).unwrap();
            String::from_utf8(buf).unwrap()
        };
        let marked = Some(Move::new(3, 3));

        assert_ne!(render(marked, true), render(None, true));
        assert_eq!(render(marked, false), render(None, false));
    }
}
