use log::{debug, info};

use crate::board::color::Color;
use crate::board::piece::{Piece, PieceId, PieceKind};
use crate::board::position::Position;
use crate::board::square::Square;
use crate::board::{Board, Cells};
use crate::chess_move::AppliedMove;
use crate::move_generation::{self, MoveContext, MoveMatrix};

use super::error::MatchError;
use super::roster::Roster;
use super::speculation::Speculation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    /// The side to move is in check but has a way out.
    Check,
    Checkmate { winner: Color },
}

/// One game between two players. Owns the board and everything needed to
/// referee it: whose turn it is, the pieces in play and captured, check
/// state, the pawn open to en passant and a promotion waiting for a choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChessMatch {
    board: Board,
    roster: Roster,
    turn: u32,
    mover: Color,
    check: bool,
    winner: Option<Color>,
    en_passant: Option<PieceId>,
    pending_promotion: Option<PieceId>,
}

impl Default for ChessMatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessMatch {
    pub fn new() -> Self {
        let board = Board::starting_position();
        Self {
            roster: Roster::from_board(&board),
            board,
            turn: 1,
            mover: Color::White,
            check: false,
            winner: None,
            en_passant: None,
            pending_promotion: None,
        }
    }

    /// Starts a match from an arbitrary position with `mover` to play.
    /// Both kings must be on the board, and the side that just moved must
    /// not be left in check.
    pub fn from_board(board: Board, mover: Color) -> Result<Self, MatchError> {
        let mut chess_match = Self {
            roster: Roster::from_board(&board),
            board,
            turn: 1,
            mover,
            check: false,
            winner: None,
            en_passant: None,
            pending_promotion: None,
        };
        if chess_match.king_attacked(mover.opposite())? {
            return Err(MatchError::KingLeftInCheck {
                color: mover.opposite(),
            });
        }
        chess_match.check = chess_match.king_attacked(mover)?;
        if chess_match.check && chess_match.is_checkmated(mover)? {
            chess_match.winner = Some(mover.opposite());
        }
        Ok(chess_match)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> Cells {
        self.board.snapshot()
    }

    pub fn current_turn(&self) -> u32 {
        self.turn
    }

    pub fn current_mover(&self) -> Color {
        self.mover
    }

    /// Whether the side last evaluated is in check. After a checkmate this
    /// describes the mated side.
    pub fn is_in_check(&self) -> bool {
        self.check
    }

    pub fn is_checkmate(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn status(&self) -> MatchStatus {
        if let Some(winner) = self.winner {
            MatchStatus::Checkmate { winner }
        } else if self.check {
            MatchStatus::Check
        } else {
            MatchStatus::InProgress
        }
    }

    /// Pieces in play, in the order they were set up.
    pub fn pieces_on_board(&self) -> Vec<(Position, Piece)> {
        self.roster
            .on_board()
            .iter()
            .filter_map(|&id| {
                let position = self.board.locate(id)?;
                self.board.get(position).map(|piece| (position, piece))
            })
            .collect()
    }

    /// Captured pieces, oldest capture first.
    pub fn captured_pieces(&self) -> &[Piece] {
        self.roster.captured()
    }

    pub(crate) fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The pawn that may be captured en passant on this turn, if any.
    pub fn en_passant_vulnerable(&self) -> Option<Position> {
        self.en_passant.and_then(|id| self.board.locate(id))
    }

    /// The pawn waiting on its last rank for `resolve_promotion`, if any.
    pub fn pending_promotion(&self) -> Option<Position> {
        self.pending_promotion.and_then(|id| self.board.locate(id))
    }

    fn move_context(&self) -> MoveContext {
        MoveContext {
            en_passant: self.en_passant_vulnerable(),
            castling: true,
        }
    }

    /// Destinations for the piece on `position`, for either color, with no
    /// turn checks. Moves that would leave the mover's own king in check
    /// are still listed.
    pub(crate) fn candidate_moves(&self, position: Position) -> MoveMatrix {
        move_generation::generate(&self.board, position, self.move_context())
    }

    /// Checks that the current mover may move the piece on `source` and
    /// returns where it can go. Destinations that would leave the mover's
    /// own king in check are still listed; `perform_move` rejects them.
    pub fn legal_moves(&self, source: Position) -> Result<MoveMatrix, MatchError> {
        if let Some(winner) = self.winner {
            return Err(MatchError::MatchIsOver { winner });
        }
        if self.pending_promotion.is_some() {
            return Err(MatchError::PromotionPending);
        }

        let piece = self.board.get(source).ok_or(MatchError::NoPieceAtSource {
            square: source.to_square(),
        })?;
        if piece.color() != self.mover {
            return Err(MatchError::NotYourPiece {
                square: source.to_square(),
                owner: piece.color(),
                mover: self.mover,
            });
        }

        let moves = self.candidate_moves(source);
        if moves.is_empty() {
            return Err(MatchError::NoLegalMoves {
                square: source.to_square(),
            });
        }
        Ok(moves)
    }

    pub fn legal_moves_at(&self, square: Square) -> Result<MoveMatrix, MatchError> {
        self.legal_moves(square.to_position())
    }

    pub fn perform_move_at(
        &mut self,
        source: Square,
        target: Square,
    ) -> Result<Option<Piece>, MatchError> {
        self.perform_move(source.to_position(), target.to_position())
    }

    /// Plays a move for the current mover and returns what it captured.
    ///
    /// On any error the match is left untouched. When a pawn reaches its
    /// last rank the turn does not pass until `resolve_promotion` is called.
    pub fn perform_move(
        &mut self,
        source: Position,
        target: Position,
    ) -> Result<Option<Piece>, MatchError> {
        if !self.legal_moves(source)?.contains(target) {
            return Err(MatchError::IllegalDestination {
                from: source.to_square(),
                to: target.to_square(),
            });
        }

        let mover = self.mover;
        let speculation = Speculation::begin(self, source, target)?;
        if speculation.king_attacked(mover)? {
            debug!("rejected {}{}: {} king would be in check", source, target, mover);
            return Err(MatchError::SelfCheck);
        }
        let applied = speculation.commit();
        self.finish_move(applied)
    }

    fn finish_move(&mut self, applied: AppliedMove) -> Result<Option<Piece>, MatchError> {
        info!("turn {}: {} plays {}", self.turn, self.mover, applied);

        // the marker lasts exactly one reply
        self.en_passant = if applied.is_double_pawn_step() {
            Some(applied.piece().id())
        } else {
            None
        };

        let piece = applied.piece();
        let captured = applied.captures().map(|capture| capture.piece);
        if piece.kind() == PieceKind::Pawn
            && applied.target().row() == piece.color().promotion_row()
        {
            debug!("{} pawn on {} awaits promotion", piece.color(), applied.target());
            // a committed move never leaves the mover in check
            self.check = false;
            self.pending_promotion = Some(piece.id());
            return Ok(captured);
        }

        self.evaluate_opponent()?;
        Ok(captured)
    }

    /// Replaces the pawn waiting on its last rank with a fresh piece of
    /// `kind`, then finishes the turn the pawn's move started.
    pub fn resolve_promotion(&mut self, kind: PieceKind) -> Result<Piece, MatchError> {
        let pawn_id = self.pending_promotion.ok_or(MatchError::NoPromotionPending)?;
        if !kind.is_promotion_target() {
            return Err(MatchError::InvalidPromotionKind { kind });
        }

        let position = self
            .board
            .locate(pawn_id)
            .ok_or(MatchError::PromotedPawnMissing)?;
        let pawn = self.board.get(position).ok_or(MatchError::PromotedPawnMissing)?;
        let replacement = self
            .board
            .issue_piece(kind, pawn.color())
            .with_move_count(pawn.move_count());
        if !self.roster.replace(pawn_id, replacement.id()) {
            return Err(MatchError::PromotedPawnMissing);
        }
        self.board.put(position, replacement);
        self.pending_promotion = None;
        info!("{} pawn on {} promoted to {}", pawn.color(), position, kind);

        self.evaluate_opponent()?;
        Ok(replacement)
    }

    /// Decides check and checkmate for the side about to move, and passes
    /// the turn unless the game is over.
    fn evaluate_opponent(&mut self) -> Result<(), MatchError> {
        let opponent = self.mover.opposite();
        self.check = self.king_attacked(opponent)?;
        if self.check && self.is_checkmated(opponent)? {
            self.winner = Some(self.mover);
            info!("checkmate, {} wins on turn {}", self.mover, self.turn);
            return Ok(());
        }
        if self.check {
            info!("{} is in check", opponent);
        }
        self.turn += 1;
        self.mover = opponent;
        Ok(())
    }

    /// Moves a piece with no legality checks and no turn bookkeeping.
    /// Must be paired with `reverse_move`.
    pub(crate) fn apply_move(
        &mut self,
        source: Position,
        target: Position,
    ) -> Result<AppliedMove, MatchError> {
        Ok(AppliedMove::apply(&mut self.board, &mut self.roster, source, target)?)
    }

    pub(crate) fn reverse_move(&mut self, applied: &AppliedMove) {
        applied.undo(&mut self.board, &mut self.roster);
    }

    fn king_position(&self, color: Color) -> Result<Position, MatchError> {
        self.board
            .pieces()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(position, _)| position)
            .ok_or(MatchError::MissingKing { color })
    }

    /// Whether any piece of the other color could move onto `color`'s king.
    pub(crate) fn king_attacked(&self, color: Color) -> Result<bool, MatchError> {
        let king = self.king_position(color)?;
        Ok(move_generation::attacked_squares(&self.board, color.opposite()).contains(king))
    }

    /// Tries every move `color` has and reports whether none of them gets
    /// its king out of check. The match is unchanged afterwards.
    pub(crate) fn is_checkmated(&mut self, color: Color) -> Result<bool, MatchError> {
        if !self.king_attacked(color)? {
            return Ok(false);
        }

        let candidates: Vec<(Position, Position)> = self
            .board
            .pieces()
            .filter(|(_, piece)| piece.color() == color)
            .flat_map(|(source, _)| {
                self.candidate_moves(source)
                    .positions()
                    .map(move |target| (source, target))
                    .collect::<Vec<_>>()
            })
            .collect();

        for (source, target) in candidates {
            let speculation = Speculation::begin(self, source, target)?;
            if !speculation.king_attacked(color)? {
                debug!("{} escapes check with {}{}", color, source, target);
                return Ok(false);
            }
        }
        Ok(true)
    }
}
