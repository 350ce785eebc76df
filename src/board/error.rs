use thiserror::Error;

use super::square::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid file `{file}`, files run from a to h")]
    InvalidFile { file: char },
    #[error("invalid rank `{rank}`, ranks run from 1 to 8")]
    InvalidRank { rank: u32 },
    #[error("cannot read a square from {input:?}, expected something like `e2`")]
    MalformedSquare { input: String },
    #[error("row {row} column {column} is not on the board")]
    OutOfBounds { row: usize, column: usize },
    #[error("unknown piece kind {input:?}")]
    UnknownPieceKind { input: String },
    #[error("cannot apply move, there is no piece on {square}")]
    EmptySourceSquare { square: Square },
    #[error("invalid castle state: {msg}")]
    InvalidCastleState { msg: &'static str },
}
