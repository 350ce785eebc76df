use core::fmt;

use log::trace;

use crate::board::error::BoardError;
use crate::board::piece::{Piece, PieceKind};
use crate::board::position::Position;
use crate::board::Board;
use crate::game::roster::Roster;

use super::capture::Capture;
use super::castle::CastleChessMove;
use super::en_passant::EnPassantChessMove;

/// The part of a move beyond relocating the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialMove {
    Castle(CastleChessMove),
    EnPassant(EnPassantChessMove),
}

/// Everything a move changed, so that it can be reversed exactly.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    source: Position,
    target: Position,
    /// The mover as it stands after the move.
    piece: Piece,
    captures: Option<Capture>,
    special: Option<SpecialMove>,
}

impl AppliedMove {
    /// Moves the piece on `source` to `target` without asking whether the
    /// move is legal. Castling and en passant are recognised from the mover
    /// and the geometry before anything is touched, so a failure leaves
    /// the board and roster unchanged.
    #[must_use = "the applied move is needed to undo it"]
    pub fn apply(
        board: &mut Board,
        roster: &mut Roster,
        source: Position,
        target: Position,
    ) -> Result<Self, BoardError> {
        let mover = board.get(source).ok_or(BoardError::EmptySourceSquare {
            square: source.to_square(),
        })?;

        let special = match CastleChessMove::detect(&mover, source, target) {
            Some(castle) => {
                castle.verify(board, &mover)?;
                Some(SpecialMove::Castle(castle))
            }
            None => EnPassantChessMove::detect(board, &mover, source, target)
                .map(SpecialMove::EnPassant),
        };

        // captures come off the board before the mover lands
        let captures = match special {
            Some(SpecialMove::EnPassant(en_passant)) => en_passant.apply(board, roster),
            _ => board.remove(target).map(|victim| roster.capture(victim, target)),
        };

        let mut piece = board
            .remove(source)
            .expect("source square was checked to be occupied");
        piece.increment_move_count();
        board.put(target, piece);

        if let Some(SpecialMove::Castle(castle)) = special {
            castle.apply(board);
        }

        let applied = Self {
            source,
            target,
            piece,
            captures,
            special,
        };
        trace!("applied {}", applied);
        Ok(applied)
    }

    /// Restores the board and roster to exactly what they were before
    /// `apply`. Moves must be undone in the reverse order they were applied.
    pub fn undo(&self, board: &mut Board, roster: &mut Roster) {
        if let Some(SpecialMove::Castle(castle)) = self.special {
            castle.undo(board);
        }

        board.remove(self.target);
        let mut piece = self.piece;
        piece.decrement_move_count();
        board.put(self.source, piece);

        if let Some(capture) = &self.captures {
            board.put(capture.position, capture.piece);
            roster.restore(capture);
        }
        trace!("undid {}", self);
    }

    pub fn source(&self) -> Position {
        self.source
    }

    pub fn target(&self) -> Position {
        self.target
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn captures(&self) -> Option<Capture> {
        self.captures
    }

    pub fn special(&self) -> Option<SpecialMove> {
        self.special
    }

    pub fn is_castle(&self) -> bool {
        matches!(self.special, Some(SpecialMove::Castle(_)))
    }

    pub fn is_en_passant(&self) -> bool {
        matches!(self.special, Some(SpecialMove::EnPassant(_)))
    }

    /// A pawn advancing two rows, which makes it capturable en passant for
    /// exactly one reply.
    pub fn is_double_pawn_step(&self) -> bool {
        self.piece.kind() == PieceKind::Pawn
            && (self.target.row() as isize - self.source.row() as isize).abs() == 2
    }
}

impl fmt::Display for AppliedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let move_type = match self.special {
            Some(SpecialMove::Castle(castle)) => format!("Castle {}", castle),
            Some(SpecialMove::EnPassant(_)) => "En Passant".to_string(),
            None => "Move".to_string(),
        };
        let capture = match self.captures {
            Some(capture) => format!(" capturing {}", capture.piece),
            None => "".to_string(),
        };
        write!(
            f,
            "{} {} {}{}{}",
            move_type, self.piece, self.source, self.target, capture
        )
    }
}

impl fmt::Debug for AppliedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::chess_position;

    fn pos(square: &str) -> Position {
        square.parse::<crate::board::square::Square>().unwrap().to_position()
    }

    fn assert_undo_restores(mut board: Board, source: &str, target: &str) -> AppliedMove {
        let mut roster = Roster::from_board(&board);
        let board_before = board.clone();
        let roster_before = roster.clone();
        println!("Testing board:\n{}", board);

        let applied =
            AppliedMove::apply(&mut board, &mut roster, pos(source), pos(target)).unwrap();
        println!("After {}:\n{}", applied, board);
        assert_ne!(board_before, board);

        applied.undo(&mut board, &mut roster);
        assert_eq!(board_before, board);
        assert_eq!(roster_before, roster);
        applied
    }

    #[test]
    fn test_apply_standard_move() {
        let mut board = Board::starting_position();
        let mut roster = Roster::from_board(&board);
        let applied = AppliedMove::apply(&mut board, &mut roster, pos("e2"), pos("e4")).unwrap();

        assert_eq!(None, board.get(pos("e2")));
        let pawn = board.get(pos("e4")).unwrap();
        assert!(pawn.is(PieceKind::Pawn, Color::White));
        assert_eq!(1, pawn.move_count());
        assert_eq!(pawn, applied.piece());
        assert_eq!(None, applied.captures());
        assert!(applied.is_double_pawn_step());
        assert_eq!(32, roster.on_board().len());
    }

    #[test]
    fn test_apply_capture() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ...p....
            ....P...
            ........
            ........
            ....K...
        };
        let mut roster = Roster::from_board(&board);
        let victim = board.get(pos("d5")).unwrap();
        let applied = AppliedMove::apply(&mut board, &mut roster, pos("e4"), pos("d5")).unwrap();

        let capture = applied.captures().unwrap();
        assert_eq!(victim, capture.piece);
        assert_eq!(pos("d5"), capture.position);
        assert_eq!(&[victim], roster.captured());
        assert_eq!(3, roster.on_board().len());
        assert!(board.get(pos("d5")).unwrap().is(PieceKind::Pawn, Color::White));
    }

    #[test]
    fn test_apply_empty_source_fails_cleanly() {
        let mut board = Board::starting_position();
        let mut roster = Roster::from_board(&board);
        let before = board.clone();

        let result = AppliedMove::apply(&mut board, &mut roster, pos("e4"), pos("e5"));
        assert_eq!(
            Err(BoardError::EmptySourceSquare {
                square: pos("e4").to_square()
            }),
            result
        );
        assert_eq!(before, board);
    }

    #[test]
    fn test_undo_standard_move() {
        let applied = assert_undo_restores(Board::starting_position(), "g1", "f3");
        assert!(!applied.is_castle());
    }

    #[test]
    fn test_undo_capture_restores_roster_order() {
        let board = chess_position! {
            rnbqkbnr
            ppp.pppp
            ........
            ...p....
            ....P...
            ........
            PPPP.PPP
            RNBQKBNR
        };
        let applied = assert_undo_restores(board, "e4", "d5");
        assert!(applied.captures().is_some());
    }

    #[test]
    fn test_undo_castle() {
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
        let applied = assert_undo_restores(board.clone(), "e1", "g1");
        assert!(applied.is_castle());
        assert_undo_restores(board.clone(), "e1", "c1");
        assert_undo_restores(board.clone(), "e8", "g8");
        assert_undo_restores(board, "e8", "c8");
    }

    #[test]
    fn test_castle_moves_both_pieces() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            ....K..R
        };
        let mut roster = Roster::from_board(&board);
        AppliedMove::apply(&mut board, &mut roster, pos("e1"), pos("g1")).unwrap();
        println!("After castling:\n{}", board);

        assert!(board.get(pos("g1")).unwrap().is(PieceKind::King, Color::White));
        assert!(board.get(pos("f1")).unwrap().is(PieceKind::Rook, Color::White));
        assert_eq!(None, board.get(pos("e1")));
        assert_eq!(None, board.get(pos("h1")));
    }

    #[test]
    fn test_castle_without_rook_fails_cleanly() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            ....K...
        };
        let mut roster = Roster::from_board(&board);
        let before = board.clone();
        let result = AppliedMove::apply(&mut board, &mut roster, pos("e1"), pos("g1"));
        assert!(matches!(result, Err(BoardError::InvalidCastleState { .. })));
        assert_eq!(before, board);
    }

    #[test]
    fn test_en_passant_apply_and_undo() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ...pP...
            ........
            ........
            ........
            ....K...
        };
        let mut applied_board = board.clone();
        let mut roster = Roster::from_board(&applied_board);
        let applied =
            AppliedMove::apply(&mut applied_board, &mut roster, pos("e5"), pos("d6")).unwrap();
        assert!(applied.is_en_passant());
        assert_eq!(pos("d5"), applied.captures().unwrap().position);
        assert_eq!(None, applied_board.get(pos("d5")));

        assert_undo_restores(board, "e5", "d6");
    }
}
