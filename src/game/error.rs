use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::PieceKind;
use crate::board::square::Square;

/// Why a move or promotion request was refused. Every variant except the
/// integrity faults leaves the match exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("there is no piece on {square}")]
    NoPieceAtSource { square: Square },
    #[error("the piece on {square} belongs to {owner}, but it is {mover}'s turn")]
    NotYourPiece {
        square: Square,
        owner: Color,
        mover: Color,
    },
    #[error("the piece on {square} has no legal moves")]
    NoLegalMoves { square: Square },
    #[error("the piece on {from} cannot move to {to}")]
    IllegalDestination { from: Square, to: Square },
    #[error("that move would leave your king in check")]
    SelfCheck,
    #[error("a pawn is waiting to be promoted")]
    PromotionPending,
    #[error("there is no pawn waiting to be promoted")]
    NoPromotionPending,
    #[error("a pawn cannot be promoted to a {kind}")]
    InvalidPromotionKind { kind: PieceKind },
    #[error("the match is over, {winner} won by checkmate")]
    MatchIsOver { winner: Color },
    #[error("board error: {error}")]
    BoardError {
        #[from]
        error: BoardError,
    },
    #[error("integrity violation: there is no {color} king on the board")]
    MissingKing { color: Color },
    #[error("integrity violation: the pawn awaiting promotion is not on the board")]
    PromotedPawnMissing,
    #[error("integrity violation: {color} is in check but it is not {color}'s turn")]
    KingLeftInCheck { color: Color },
}

impl MatchError {
    /// Integrity faults mean the match state can no longer be trusted.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MatchError::MissingKing { .. }
                | MatchError::PromotedPawnMissing
                | MatchError::KingLeftInCheck { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_integrity_faults_are_fatal() {
        assert!(MatchError::MissingKing { color: Color::White }.is_fatal());
        assert!(MatchError::PromotedPawnMissing.is_fatal());
        assert!(MatchError::KingLeftInCheck { color: Color::Black }.is_fatal());
        assert!(!MatchError::SelfCheck.is_fatal());
        assert!(!MatchError::PromotionPending.is_fatal());
    }

    #[test]
    fn test_messages_name_squares() {
        let error = MatchError::IllegalDestination {
            from: "e2".parse().unwrap(),
            to: "e5".parse().unwrap(),
        };
        assert_eq!("the piece on e2 cannot move to e5", error.to_string());
    }
}
