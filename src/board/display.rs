use super::position::{Position, BOARD_SIZE};
use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for column in 0..BOARD_SIZE {
                let c = match self.get(Position::at(row, column)) {
                    Some(piece) => piece.to_fen(),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

/// Builds a `Board` from a picture drawn from white's side: the first line
/// is rank 8, uppercase letters are white, `.` is an empty square.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(
            pieces.len(),
            64,
            "Invalid number of squares. Expected 64, got {}",
            pieces.len()
        );
        // The picture is already in row order: character `i` sits on row
        // `i / 8`, column `i % 8`.
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (kind, color) = $crate::board::piece::PieceKind::from_fen(c)
                    .expect("Invalid character in chess position");
                let position = $crate::board::position::Position::new(i / 8, i % 8)
                    .expect("index below 64 is on the board");
                board.spawn(position, kind, color);
            }
        }
        board
    }};
}
