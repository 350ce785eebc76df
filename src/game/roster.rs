use crate::board::piece::{Piece, PieceId};
use crate::board::position::Position;
use crate::board::Board;
use crate::chess_move::capture::Capture;

/// Which pieces are still in play, in a stable order, and which have been
/// taken. Must always agree with the occupied squares of the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    on_board: Vec<PieceId>,
    captured: Vec<Piece>,
}

impl Roster {
    /// Lists the board's pieces in row-major order.
    pub fn from_board(board: &Board) -> Self {
        Self {
            on_board: board.pieces().map(|(_, piece)| piece.id()).collect(),
            captured: Vec::new(),
        }
    }

    pub fn on_board(&self) -> &[PieceId] {
        &self.on_board
    }

    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Moves `piece` from play to the captured pile, remembering its slot
    /// so `restore` can put it back exactly where it was.
    pub(crate) fn capture(&mut self, piece: Piece, position: Position) -> Capture {
        let roster_index = self
            .on_board
            .iter()
            .position(|&id| id == piece.id())
            .unwrap_or(self.on_board.len());
        debug_assert!(
            roster_index < self.on_board.len(),
            "captured piece {:?} was not in the roster",
            piece
        );
        if roster_index < self.on_board.len() {
            self.on_board.remove(roster_index);
        }
        self.captured.push(piece);
        Capture {
            piece,
            position,
            roster_index,
        }
    }

    /// Inverse of `capture`. Captures are undone last-in first-out.
    pub(crate) fn restore(&mut self, capture: &Capture) {
        let popped = self.captured.pop();
        debug_assert_eq!(Some(capture.piece), popped, "captures restored out of order");
        let index = capture.roster_index.min(self.on_board.len());
        self.on_board.insert(index, capture.piece.id());
    }

    /// Gives `replacement` the roster slot held by `original`.
    pub(crate) fn replace(&mut self, original: PieceId, replacement: PieceId) -> bool {
        match self.on_board.iter_mut().find(|id| **id == original) {
            Some(slot) => {
                *slot = replacement;
                true
            }
            None => false,
        }
    }
}
