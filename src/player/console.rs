use crate::core::{Board, Move};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};

/// Reads `row col` lines from a human. Bad input is re-prompted here; the game
/// driver only ever sees legal moves or `None` (input closed).
pub struct ConsoleController<R: BufRead, W: Write> {
    name: String,
    input: RefCell<R>,
    output: RefCell<W>,
    pub color: bool,
}

impl ConsoleController<io::BufReader<io::Stdin>, io::Stdout> {
    pub fn stdio(name: &str) -> Self {
        // one byte per read: two consoles on the same stdin must not buffer each other's lines
        let input = io::BufReader::with_capacity(1, io::stdin());
        let mut controller = Self::new(name, input, io::stdout());
        controller.color = true;
        controller
    }
}

impl<R: BufRead, W: Write> ConsoleController<R, W> {
    pub fn new(name: &str, input: R, output: W) -> Self {
        Self {
            name: name.to_string(),
            input: RefCell::new(input),
            output: RefCell::new(output),
            color: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    fn prompt(&self, board: &Board, legal_moves: &[Move]) -> io::Result<Option<Move>> {
        let mut out = self.output.borrow_mut();
        let state = DisplayState {
            highlights: legal_moves.to_vec(),
            status_msg: Some(format!("{}'s turn ({})", self.name, board.to_move)),
            color: self.color,
            ..DisplayState::default()
        };
        render_board(&mut *out, board, &state)?;

        let mut input = self.input.borrow_mut();
        loop {
            write!(out, "Enter your move (row col): ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_move(&line) {
                Some(mv) if legal_moves.contains(&mv) => return Ok(Some(mv)),
                Some(mv) => writeln!(out, "Invalid move {}! Try again.", mv)?,
                None => writeln!(out, "Could not read \"{}\" as row and column.", line.trim())?,
            }
        }
    }
}

/// `"2 4"` or `"2,4"` -> (2, 4)
pub fn parse_move(line: &str) -> Option<Move> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(row, col))
}

impl<R: BufRead, W: Write> PlayerController for ConsoleController<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move> {
        match self.prompt(board, legal_moves) {
            Ok(mv) => mv,
            Err(e) => {
                tracing::warn!(player = %self.name, "console input failed: {}", e);
                None
            }
        }
    }
}
