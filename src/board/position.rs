use std::fmt;

use super::error::BoardError;
use super::square::Square;

pub const BOARD_SIZE: usize = 8;

/// Zero-based `(row, column)` index into the board. Row 0 holds rank 8.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE || column >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { row, column });
        }
        Ok(Self { row, column })
    }

    /// Callers guarantee both coordinates are below `BOARD_SIZE`.
    pub(crate) const fn at(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// The position `d_row` rows and `d_column` columns away, if it is on the board.
    pub fn offset(&self, d_row: isize, d_column: isize) -> Option<Position> {
        let row = self.row as isize + d_row;
        let column = self.column as isize + d_column;
        if super::Board::is_in_bounds(row, column) {
            Some(Self::at(row as usize, column as usize))
        } else {
            None
        }
    }

    /// Every position on the board, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |column| Position::at(row, column)))
    }

    pub fn to_square(&self) -> Square {
        Square::from_position(*self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_square())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_bounds() {
        assert!(Position::new(0, 0).is_ok());
        assert!(Position::new(7, 7).is_ok());
        assert_eq!(
            Err(BoardError::OutOfBounds { row: 8, column: 0 }),
            Position::new(8, 0)
        );
        assert!(Position::new(0, 8).is_err());
    }

    #[test]
    fn test_offset() {
        let origin = Position::new(0, 0).unwrap();
        assert_eq!(None, origin.offset(-1, 0));
        assert_eq!(None, origin.offset(0, -1));
        assert_eq!(Some(Position::at(1, 2)), origin.offset(1, 2));
        assert_eq!(None, Position::at(7, 7).offset(1, 1));
    }

    #[test]
    fn test_all_covers_board() {
        let positions: Vec<_> = Position::all().collect();
        assert_eq!(64, positions.len());
        assert_eq!(Position::at(0, 0), positions[0]);
        assert_eq!(Position::at(0, 1), positions[1]);
        assert_eq!(Position::at(7, 7), positions[63]);
    }

    #[test]
    fn test_display_uses_algebraic_square() {
        assert_eq!("a8", Position::at(0, 0).to_string());
        assert_eq!("h1", Position::at(7, 7).to_string());
        assert_eq!("e2", Position::at(6, 4).to_string());
    }
}
