use core::fmt;

use log::debug;

use crate::board::error::BoardError;
use crate::board::piece::{Piece, PieceKind};
use crate::board::position::Position;
use crate::board::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// The rook half of a castle. The king half is an ordinary two-column king
/// move; this relocates the rook beside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastleChessMove {
    side: CastleSide,
    rook_from: Position,
    rook_to: Position,
}

impl CastleChessMove {
    /// Recognises a castle purely from the mover and the geometry: a king
    /// moving two columns along its row.
    pub fn detect(mover: &Piece, source: Position, target: Position) -> Option<Self> {
        if mover.kind() != PieceKind::King || source.row() != target.row() {
            return None;
        }

        match target.column() as isize - source.column() as isize {
            2 => Some(Self {
                side: CastleSide::Kingside,
                rook_from: source.offset(0, 3)?,
                rook_to: source.offset(0, 1)?,
            }),
            -2 => Some(Self {
                side: CastleSide::Queenside,
                rook_from: source.offset(0, -4)?,
                rook_to: source.offset(0, -1)?,
            }),
            _ => None,
        }
    }

    pub fn side(&self) -> CastleSide {
        self.side
    }

    pub fn rook_from(&self) -> Position {
        self.rook_from
    }

    pub fn rook_to(&self) -> Position {
        self.rook_to
    }

    /// Fails without touching the board if the rook is not where it should be.
    pub(crate) fn verify(&self, board: &Board, king: &Piece) -> Result<(), BoardError> {
        match board.get(self.rook_from) {
            Some(rook) if rook.is(PieceKind::Rook, king.color()) => {}
            _ => {
                return Err(BoardError::InvalidCastleState {
                    msg: "rook_from is not a rook of the castling side",
                })
            }
        }
        if board.is_occupied(self.rook_to) {
            return Err(BoardError::InvalidCastleState {
                msg: "rook_to is not empty",
            });
        }
        Ok(())
    }

    pub(crate) fn apply(&self, board: &mut Board) {
        if let Some(mut rook) = board.remove(self.rook_from) {
            rook.increment_move_count();
            board.put(self.rook_to, rook);
            debug!("castle {}: rook {} -> {}", self, self.rook_from, self.rook_to);
        }
    }

    pub(crate) fn undo(&self, board: &mut Board) {
        if let Some(mut rook) = board.remove(self.rook_to) {
            rook.decrement_move_count();
            board.put(self.rook_from, rook);
        }
    }
}

impl fmt::Display for CastleChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.side {
            CastleSide::Kingside => "kingside",
            CastleSide::Queenside => "queenside",
        };
        write!(f, "{}", side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;

    fn pos(square: &str) -> Position {
        square.parse::<crate::board::square::Square>().unwrap().to_position()
    }

    #[test]
    fn test_detect() {
        let board = chess_position! {
            r...k..r
            ........
            ........
            ........
            ........
            ........
            ........
            R...K..R
        };
        let white_king = board.get(pos("e1")).unwrap();
        let kingside = CastleChessMove::detect(&white_king, pos("e1"), pos("g1")).unwrap();
        assert_eq!(CastleSide::Kingside, kingside.side());
        assert_eq!(pos("h1"), kingside.rook_from());
        assert_eq!(pos("f1"), kingside.rook_to());

        let black_king = board.get(pos("e8")).unwrap();
        let queenside = CastleChessMove::detect(&black_king, pos("e8"), pos("c8")).unwrap();
        assert_eq!(CastleSide::Queenside, queenside.side());
        assert_eq!(pos("a8"), queenside.rook_from());
        assert_eq!(pos("d8"), queenside.rook_to());

        assert_eq!(None, CastleChessMove::detect(&white_king, pos("e1"), pos("f1")));
        let rook = board.get(pos("a1")).unwrap();
        assert_eq!(None, CastleChessMove::detect(&rook, pos("a1"), pos("c1")));
    }

    #[test]
    fn test_apply_and_undo_rook_relocation() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            R...K...
        };
        println!("Testing board:\n{}", board);
        let before = board.clone();
        let king = board.get(pos("e1")).unwrap();
        let castle = CastleChessMove::detect(&king, pos("e1"), pos("c1")).unwrap();
        castle.verify(&board, &king).unwrap();

        castle.apply(&mut board);
        println!("After applying castle:\n{}", board);
        let rook = board.get(pos("d1")).unwrap();
        assert!(rook.is(PieceKind::Rook, king.color()));
        assert_eq!(1, rook.move_count());
        assert_eq!(None, board.get(pos("a1")));

        castle.undo(&mut board);
        assert_eq!(before, board);
    }

    #[test]
    fn test_verify_rejects_missing_rook() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            ....K...
        };
        let king = board.get(pos("e1")).unwrap();
        let castle = CastleChessMove::detect(&king, pos("e1"), pos("g1")).unwrap();
        assert!(matches!(
            castle.verify(&board, &king),
            Err(BoardError::InvalidCastleState { .. })
        ));
    }
}
