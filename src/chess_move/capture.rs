use crate::board::piece::Piece;
use crate::board::position::Position;

/// A piece taken by a move, with everything needed to put it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture {
    pub piece: Piece,
    /// Where the piece stood. Differs from the move's target for en passant.
    pub position: Position,
    /// Slot the piece held in the roster of pieces in play.
    pub roster_index: usize,
}
