//! Player input parsing.

use std::io::{self, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::error::BoardError;
use crate::board::piece::PieceKind;
use crate::board::square::Square;

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-zA-Z][0-9]+)([a-zA-Z][0-9]+)([nbrqNBRQ])?$")
        .expect("COORD_RE regex should be valid")
});
static EXIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("(?i)^(q|quit|exit)$").expect("EXIT_RE regex should be valid"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("{error}")]
    InvalidSquare {
        #[from]
        error: BoardError,
    },
    #[error("a pawn can only become a knight, bishop, rook or queen, not {input:?}")]
    InvalidPromotion { input: String },
    #[error("user exit")]
    UserExit,
}

/// A whole move typed at once, like `e2e4` or `e7e8q`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinateMove {
    pub source: Square,
    pub target: Square,
    pub promotion: Option<PieceKind>,
}

impl FromStr for CoordinateMove {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let caps = COORD_RE.captures(trimmed).ok_or_else(|| InputError::InvalidInput {
            input: input.to_string(),
        })?;

        let promotion = match caps.get(3) {
            Some(letter) => Some(parse_promotion(letter.as_str())?),
            None => None,
        };
        Ok(CoordinateMove {
            source: caps[1].parse()?,
            target: caps[2].parse()?,
            promotion,
        })
    }
}

pub fn parse_square(input: &str) -> Result<Square, InputError> {
    Ok(input.trim().parse::<Square>()?)
}

/// Accepts `N`, `B`, `R`, `Q` in either case, or the piece's name.
pub fn parse_promotion(input: &str) -> Result<PieceKind, InputError> {
    match input.parse::<PieceKind>() {
        Ok(kind) if kind.is_promotion_target() => Ok(kind),
        _ => Err(InputError::InvalidPromotion {
            input: input.trim().to_string(),
        }),
    }
}

pub fn is_exit_command(input: &str) -> bool {
    EXIT_RE.is_match(input.trim())
}

/// Prints `prompt` and reads one trimmed line from stdin. End of input is
/// reported as `UserExit`.
pub fn read_line(prompt: &str) -> Result<String, InputError> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|error| InputError::IOError {
        error: error.to_string(),
    })?;

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => Err(InputError::UserExit),
        Ok(_n) => Ok(input.trim().to_string()),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}
