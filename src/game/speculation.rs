use core::ops::Deref;

use log::trace;

use crate::board::position::Position;
use crate::chess_move::AppliedMove;

use super::chess_match::ChessMatch;
use super::error::MatchError;

/// A move applied to a match on trial. Dropping the guard reverses the move,
/// whichever way the enclosing scope is left; `commit` keeps it.
pub(crate) struct Speculation<'a> {
    chess_match: &'a mut ChessMatch,
    applied: AppliedMove,
    committed: bool,
}

impl<'a> Speculation<'a> {
    pub(crate) fn begin(
        chess_match: &'a mut ChessMatch,
        source: Position,
        target: Position,
    ) -> Result<Self, MatchError> {
        let applied = chess_match.apply_move(source, target)?;
        Ok(Self {
            chess_match,
            applied,
            committed: false,
        })
    }

    pub(crate) fn commit(mut self) -> AppliedMove {
        self.committed = true;
        self.applied
    }
}

impl Deref for Speculation<'_> {
    type Target = ChessMatch;

    fn deref(&self) -> &ChessMatch {
        &*self.chess_match
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        if !self.committed {
            trace!("rolling back {}", self.applied);
            self.chess_match.reverse_move(&self.applied);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::Square;

    fn pos(square: &str) -> Position {
        square.parse::<Square>().unwrap().to_position()
    }

    #[test]
    fn test_dropped_speculation_rolls_back() {
        let mut chess_match = ChessMatch::new();
        let before = chess_match.clone();
        {
            let speculation = Speculation::begin(&mut chess_match, pos("e2"), pos("e4")).unwrap();
            assert!(speculation.board().is_occupied(pos("e4")));
        }
        assert_eq!(before, chess_match);
    }

    #[test]
    fn test_rollback_on_early_return() {
        fn try_move(chess_match: &mut ChessMatch) -> Result<(), MatchError> {
            let _speculation = Speculation::begin(chess_match, pos("g1"), pos("f3"))?;
            Err(MatchError::SelfCheck)
        }

        let mut chess_match = ChessMatch::new();
        let before = chess_match.clone();
        assert_eq!(Err(MatchError::SelfCheck), try_move(&mut chess_match));
        assert_eq!(before, chess_match);
    }

    #[test]
    fn test_committed_speculation_is_kept() {
        let mut chess_match = ChessMatch::new();
        let applied = Speculation::begin(&mut chess_match, pos("e2"), pos("e4"))
            .unwrap()
            .commit();
        assert_eq!(pos("e4"), applied.target());
        assert!(chess_match.board().is_occupied(pos("e4")));
        assert!(!chess_match.board().is_occupied(pos("e2")));
    }
}
