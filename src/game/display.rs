use std::fmt::Write;

use termion::{clear, color, cursor};

use crate::board::position::{Position, BOARD_SIZE};
use crate::move_generation::MoveMatrix;

use super::chess_match::{ChessMatch, MatchStatus};

/// Draws a match to the terminal. Each frame is built in a buffer and
/// written in one go.
pub struct GameDisplay {
    buffer: String,
    clear_screen: bool,
    highlight_moves: bool,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl GameDisplay {
    pub fn new(clear_screen: bool, highlight_moves: bool) -> Self {
        Self {
            buffer: String::with_capacity(2048),
            clear_screen,
            highlight_moves,
        }
    }

    fn clear(&mut self) {
        self.buffer.clear();
        if self.clear_screen {
            write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All).unwrap();
        }
    }

    /// Builds a frame: the board with `highlights` marked, then the match
    /// state and an optional message.
    pub fn compose(
        &mut self,
        chess_match: &ChessMatch,
        highlights: Option<&MoveMatrix>,
        message: Option<&str>,
    ) -> &str {
        self.clear();
        let board = chess_match.board();

        self.buffer.push_str("  a b c d e f g h\n");
        for row in 0..BOARD_SIZE {
            let rank = BOARD_SIZE - row;
            write!(self.buffer, "{} ", rank).unwrap();
            for column in 0..BOARD_SIZE {
                let position = Position::at(row, column);
                let symbol = match board.get(position) {
                    Some(piece) => piece.kind().to_unicode_piece_char(piece.color()),
                    None => '·',
                };
                let highlighted =
                    self.highlight_moves && highlights.map_or(false, |m| m.contains(position));
                if highlighted {
                    write!(
                        self.buffer,
                        "{}{}{} ",
                        color::Bg(color::Green),
                        symbol,
                        color::Bg(color::Reset)
                    )
                    .unwrap();
                } else {
                    write!(self.buffer, "{} ", symbol).unwrap();
                }
            }
            writeln!(self.buffer, "{}", rank).unwrap();
        }
        self.buffer.push_str("  a b c d e f g h\n\n");

        let captured: String = chess_match
            .captured_pieces()
            .iter()
            .map(|piece| piece.kind().to_unicode_piece_char(piece.color()))
            .collect();
        if !captured.is_empty() {
            writeln!(self.buffer, "Captured: {}", captured).unwrap();
        }

        writeln!(
            self.buffer,
            "Turn {}, {} to move",
            chess_match.current_turn(),
            chess_match.current_mover()
        )
        .unwrap();
        match chess_match.status() {
            MatchStatus::Checkmate { winner } => {
                writeln!(self.buffer, "Checkmate! {} wins.", winner).unwrap()
            }
            MatchStatus::Check => {
                writeln!(self.buffer, "{} is in check.", chess_match.current_mover()).unwrap()
            }
            MatchStatus::InProgress => {}
        }
        if let Some(position) = chess_match.pending_promotion() {
            writeln!(self.buffer, "The pawn on {} must be promoted.", position).unwrap();
        }
        if let Some(message) = message {
            writeln!(self.buffer, "{}", message).unwrap();
        }

        &self.buffer
    }

    pub fn render(
        &mut self,
        chess_match: &ChessMatch,
        highlights: Option<&MoveMatrix>,
        message: Option<&str>,
    ) {
        let frame = self.compose(chess_match, highlights, message);
        print!("{}", frame);
    }
}
