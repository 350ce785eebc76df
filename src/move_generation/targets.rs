use crate::board::piece::{Piece, PieceKind};
use crate::board::position::Position;
use crate::board::Board;

use super::{attacked_squares, MoveContext, MoveMatrix};

pub(super) const ORTHOGONALS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(super) const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_STEPS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Kings castle only from the e-file; rooks from the corners.
const KING_HOME_COLUMN: usize = 4;
const QUEENSIDE_ROOK_COLUMN: usize = 0;
const KINGSIDE_ROOK_COLUMN: usize = 7;

fn is_friendly(board: &Board, position: Position, piece: Piece) -> bool {
    matches!(board.get(position), Some(other) if other.color() == piece.color())
}

fn is_enemy(board: &Board, position: Position, piece: Piece) -> bool {
    matches!(board.get(position), Some(other) if other.color() != piece.color())
}

/// Walks each ray until the edge; a friendly piece ends the ray before its
/// square, an enemy piece after it.
pub(super) fn sliding_targets(
    board: &Board,
    from: Position,
    piece: Piece,
    directions: &[(isize, isize)],
) -> MoveMatrix {
    let mut matrix = MoveMatrix::new();
    for &(d_row, d_column) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_column) {
            if is_friendly(board, next, piece) {
                break;
            }
            matrix.insert(next);
            if board.is_occupied(next) {
                break;
            }
            current = next;
        }
    }
    matrix
}

fn step_targets(
    board: &Board,
    from: Position,
    piece: Piece,
    steps: &[(isize, isize)],
) -> MoveMatrix {
    let mut matrix = MoveMatrix::new();
    steps
        .iter()
        .filter_map(|&(d_row, d_column)| from.offset(d_row, d_column))
        .filter(|&to| !is_friendly(board, to, piece))
        .for_each(|to| matrix.insert(to));
    matrix
}

pub(super) fn knight_targets(board: &Board, from: Position, piece: Piece) -> MoveMatrix {
    step_targets(board, from, piece, &KNIGHT_JUMPS)
}

pub(super) fn king_targets(
    board: &Board,
    from: Position,
    piece: Piece,
    context: MoveContext,
) -> MoveMatrix {
    let mut matrix = step_targets(board, from, piece, &KING_STEPS);
    if context.castling {
        add_castling_targets(board, from, piece, &mut matrix);
    }
    matrix
}

fn is_unmoved_rook(board: &Board, position: Position, king: Piece) -> bool {
    matches!(
        board.get(position),
        Some(rook) if rook.is(PieceKind::Rook, king.color()) && !rook.has_moved()
    )
}

fn add_castling_targets(board: &Board, from: Position, king: Piece, matrix: &mut MoveMatrix) {
    if king.has_moved() || from.column() != KING_HOME_COLUMN {
        return;
    }

    let row = from.row();
    let kingside_rook = Position::at(row, KINGSIDE_ROOK_COLUMN);
    let queenside_rook = Position::at(row, QUEENSIDE_ROOK_COLUMN);
    let kingside_open = is_unmoved_rook(board, kingside_rook, king)
        && (KING_HOME_COLUMN + 1..KINGSIDE_ROOK_COLUMN)
            .all(|c| !board.is_occupied(Position::at(row, c)));
    let queenside_open = is_unmoved_rook(board, queenside_rook, king)
        && (QUEENSIDE_ROOK_COLUMN + 1..KING_HOME_COLUMN)
            .all(|c| !board.is_occupied(Position::at(row, c)));
    if !kingside_open && !queenside_open {
        return;
    }

    // Only pay for the attack map when a castle is geometrically possible.
    let attacked = attacked_squares(board, king.color().opposite());
    if attacked.contains(from) {
        return;
    }
    // The landing square is covered by the self-check test on the move
    // itself; the square the king crosses is not, so it is checked here.
    if kingside_open && !attacked.contains(Position::at(row, KING_HOME_COLUMN + 1)) {
        matrix.insert(Position::at(row, KING_HOME_COLUMN + 2));
    }
    if queenside_open && !attacked.contains(Position::at(row, KING_HOME_COLUMN - 1)) {
        matrix.insert(Position::at(row, KING_HOME_COLUMN - 2));
    }
}

pub(super) fn pawn_targets(
    board: &Board,
    from: Position,
    piece: Piece,
    context: MoveContext,
) -> MoveMatrix {
    let mut matrix = MoveMatrix::new();
    let color = piece.color();
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0) {
        if !board.is_occupied(one) {
            matrix.insert(one);
            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * forward, 0) {
                    if !board.is_occupied(two) {
                        matrix.insert(two);
                    }
                }
            }
        }
    }

    for &d_column in [-1, 1].iter() {
        if let Some(diagonal) = from.offset(forward, d_column) {
            if is_enemy(board, diagonal, piece) {
                matrix.insert(diagonal);
            }
        }
    }

    if let Some(victim_position) = context.en_passant {
        let adjacent = victim_position.row() == from.row()
            && (victim_position.column() as isize - from.column() as isize).abs() == 1;
        let is_enemy_pawn = matches!(
            board.get(victim_position),
            Some(victim) if victim.kind() == PieceKind::Pawn && victim.color() != color
        );
        if adjacent && is_enemy_pawn {
            if let Some(behind) = victim_position.offset(forward, 0) {
                if !board.is_occupied(behind) {
                    matrix.insert(behind);
                }
            }
        }
    }

    matrix
}

pub(super) fn pawn_attacks(from: Position, piece: Piece) -> MoveMatrix {
    let mut matrix = MoveMatrix::new();
    let forward = piece.color().forward();
    for &d_column in [-1, 1].iter() {
        if let Some(diagonal) = from.offset(forward, d_column) {
            matrix.insert(diagonal);
        }
    }
    matrix
}
