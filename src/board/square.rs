//! Translation between algebraic squares (`e4`) and board positions.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::BoardError;
use super::position::{Position, BOARD_SIZE};

static SQUARE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-zA-Z])([0-9]+)$").expect("SQUARE_RE regex should be valid")
});

/// A square as players name it: file `a`..`h`, rank `1`..`8`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Square {
    file: char,
    rank: u8,
}

impl Square {
    pub fn new(file: char, rank: u32) -> Result<Self, BoardError> {
        if !('a'..='h').contains(&file) {
            return Err(BoardError::InvalidFile { file });
        }
        if !(1..=BOARD_SIZE as u32).contains(&rank) {
            return Err(BoardError::InvalidRank { rank });
        }
        Ok(Self {
            file,
            rank: rank as u8,
        })
    }

    pub fn file(&self) -> char {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn to_position(&self) -> Position {
        let row = BOARD_SIZE - self.rank as usize;
        let column = (self.file as u8 - b'a') as usize;
        Position::at(row, column)
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            file: (b'a' + position.column() as u8) as char,
            rank: (BOARD_SIZE - position.row()) as u8,
        }
    }
}

/// Parses `e4` (file case-insensitive), reporting which half was wrong.
impl FromStr for Square {
    type Err = BoardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let caps = SQUARE_RE
            .captures(trimmed)
            .ok_or_else(|| BoardError::MalformedSquare {
                input: input.to_string(),
            })?;

        let file = caps[1]
            .chars()
            .next()
            .map(|c| c.to_ascii_lowercase())
            .ok_or_else(|| BoardError::MalformedSquare {
                input: input.to_string(),
            })?;
        // an absurdly long digit run still fails as a rank, not as a panic
        let rank = caps[2].parse::<u32>().unwrap_or(u32::MAX);

        Square::new(file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_position() {
        assert_eq!(Position::new(7, 0).unwrap(), Square::new('a', 1).unwrap().to_position());
        assert_eq!(Position::new(0, 7).unwrap(), Square::new('h', 8).unwrap().to_position());
        assert_eq!(Position::new(4, 4).unwrap(), Square::new('e', 4).unwrap().to_position());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(Err(BoardError::InvalidFile { file: 'i' }), Square::new('i', 1));
        assert_eq!(Err(BoardError::InvalidRank { rank: 0 }), Square::new('a', 0));
        assert_eq!(Err(BoardError::InvalidRank { rank: 9 }), Square::new('a', 9));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Square::new('e', 2).unwrap(), "e2".parse().unwrap());
        assert_eq!(Square::new('e', 2).unwrap(), "E2".parse().unwrap());
        assert_eq!(Square::new('h', 8).unwrap(), " h8 ".parse().unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            Err(BoardError::InvalidFile { file: 'z' }),
            "z1".parse::<Square>()
        );
        assert_eq!(
            Err(BoardError::InvalidRank { rank: 9 }),
            "a9".parse::<Square>()
        );
        assert_eq!(
            Err(BoardError::InvalidRank {
                rank: u32::MAX
            }),
            "a99999999999".parse::<Square>()
        );
        assert!(matches!(
            "".parse::<Square>(),
            Err(BoardError::MalformedSquare { .. })
        ));
        assert!(matches!(
            "e".parse::<Square>(),
            Err(BoardError::MalformedSquare { .. })
        ));
        assert!(matches!(
            "4e".parse::<Square>(),
            Err(BoardError::MalformedSquare { .. })
        ));
    }

    #[test]
    fn test_roundtrip_through_position() {
        for file in 'a'..='h' {
            for rank in 1..=8 {
                let square = Square::new(file, rank).unwrap();
                let position = square.to_position();
                assert_eq!(square, Square::from_position(position));
                assert_eq!(square, square.to_string().parse().unwrap());
            }
        }
    }
}
