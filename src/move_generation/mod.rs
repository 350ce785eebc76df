//! Pseudo-legal move generation.
//!
//! Every piece kind answers one question: given the board, which squares may
//! it move to right now? The answer obeys blocking and capture rules but does
//! not look at whether the mover's own king would be left attacked; the match
//! settles that by trying the move.

mod targets;

use std::fmt;

use crate::board::color::Color;
use crate::board::piece::PieceKind;
use crate::board::position::{Position, BOARD_SIZE};
use crate::board::Board;

/// An 8x8 grid of flags, `true` where a piece may move (or attacks).
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveMatrix([[bool; BOARD_SIZE]; BOARD_SIZE]);

impl MoveMatrix {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.0[position.row()][position.column()]
    }

    pub(crate) fn insert(&mut self, position: Position) {
        self.0[position.row()][position.column()] = true;
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        self.0.iter().flatten().filter(|&&flag| flag).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&position| self.contains(position))
    }

    pub fn rows(&self) -> &[[bool; BOARD_SIZE]; BOARD_SIZE] {
        &self.0
    }

    fn union(&mut self, other: &MoveMatrix) {
        for position in other.positions() {
            self.insert(position);
        }
    }
}

impl fmt::Debug for MoveMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.iter() {
            let line: String = row.iter().map(|&flag| if flag { 'x' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// The slice of match state that pawns and kings need beyond the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveContext {
    /// Where the pawn that may be captured en passant stands, if any.
    pub en_passant: Option<Position>,
    /// Whether kings may generate castling moves. Attack queries turn this
    /// off: castling never captures, and leaving it on would make castling
    /// depend on the opponent's castling.
    pub castling: bool,
}

impl Default for MoveContext {
    fn default() -> Self {
        Self {
            en_passant: None,
            castling: true,
        }
    }
}

impl MoveContext {
    pub fn without_castling(self) -> Self {
        Self {
            castling: false,
            ..self
        }
    }
}

/// Squares the piece on `from` may move to. Empty if `from` is vacant.
pub fn generate(board: &Board, from: Position, context: MoveContext) -> MoveMatrix {
    let piece = match board.get(from) {
        Some(piece) => piece,
        None => return MoveMatrix::new(),
    };

    match piece.kind() {
        PieceKind::Pawn => targets::pawn_targets(board, from, piece, context),
        PieceKind::Knight => targets::knight_targets(board, from, piece),
        PieceKind::Bishop => targets::sliding_targets(board, from, piece, &targets::DIAGONALS),
        PieceKind::Rook => targets::sliding_targets(board, from, piece, &targets::ORTHOGONALS),
        PieceKind::Queen => {
            let mut matrix = targets::sliding_targets(board, from, piece, &targets::DIAGONALS);
            matrix.union(&targets::sliding_targets(
                board,
                from,
                piece,
                &targets::ORTHOGONALS,
            ));
            matrix
        }
        PieceKind::King => targets::king_targets(board, from, piece, context),
    }
}

/// Squares the piece on `from` attacks, whether or not anything stands
/// there. Differs from `generate` only for pawns (diagonals, never pushes)
/// and kings (no castling).
pub fn attacks(board: &Board, from: Position) -> MoveMatrix {
    match board.get(from) {
        Some(piece) if piece.kind() == PieceKind::Pawn => targets::pawn_attacks(from, piece),
        Some(_) => generate(board, from, MoveContext::default().without_castling()),
        None => MoveMatrix::new(),
    }
}

/// Every square attacked by at least one piece of `color`.
pub fn attacked_squares(board: &Board, color: Color) -> MoveMatrix {
    let mut attacked = MoveMatrix::new();
    for (position, piece) in board.pieces() {
        if piece.color() == color {
            attacked.union(&attacks(board, position));
        }
    }
    attacked
}
