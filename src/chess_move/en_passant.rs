use log::debug;

use crate::board::piece::{Piece, PieceKind};
use crate::board::position::Position;
use crate::board::Board;
use crate::game::roster::Roster;

use super::capture::Capture;

/// The side effect of an en passant capture: the victim does not stand on
/// the target square but one row behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnPassantChessMove {
    captured_at: Position,
}

impl EnPassantChessMove {
    /// A pawn moving diagonally onto an empty square can only be capturing
    /// en passant. Must be called before the board is changed.
    pub fn detect(
        board: &Board,
        mover: &Piece,
        source: Position,
        target: Position,
    ) -> Option<Self> {
        if mover.kind() != PieceKind::Pawn
            || source.column() == target.column()
            || board.is_occupied(target)
        {
            return None;
        }

        // the captured pawn is "behind" the target square
        let captured_at = target.offset(-mover.color().forward(), 0)?;
        match board.get(captured_at) {
            Some(victim) if victim.kind() == PieceKind::Pawn && victim.color() != mover.color() => {
                Some(Self { captured_at })
            }
            _ => None,
        }
    }

    pub fn captured_at(&self) -> Position {
        self.captured_at
    }

    pub(crate) fn apply(&self, board: &mut Board, roster: &mut Roster) -> Option<Capture> {
        let victim = board.remove(self.captured_at)?;
        debug!("en passant captures {} on {}", victim, self.captured_at);
        Some(roster.capture(victim, self.captured_at))
    }
}
