pub mod color;
pub mod error;
pub mod piece;
pub mod position;
pub mod square;

mod display;

use color::Color;
use piece::{Piece, PieceId, PieceKind};
use position::{Position, BOARD_SIZE};

use crate::chess_position;

pub type Cells = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

/// The 8x8 grid. It knows where pieces stand and nothing about how they
/// move; captures, turns and legality belong to the match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
    next_piece_id: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            next_piece_id: 0,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        }
    }

    pub fn is_in_bounds(row: isize, column: isize) -> bool {
        (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&column)
    }

    pub fn get(&self, position: Position) -> Option<Piece> {
        self.cells[position.row()][position.column()]
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    /// Overwrites whatever stands on `position`.
    pub fn put(&mut self, position: Position, piece: Piece) {
        self.cells[position.row()][position.column()] = Some(piece);
    }

    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        self.cells[position.row()][position.column()].take()
    }

    /// Creates a piece with a fresh identity and places it on `position`.
    pub fn spawn(&mut self, position: Position, kind: PieceKind, color: Color) -> Piece {
        let piece = self.issue_piece(kind, color);
        self.put(position, piece);
        piece
    }

    /// Creates a piece with a fresh identity without placing it.
    pub(crate) fn issue_piece(&mut self, kind: PieceKind, color: Color) -> Piece {
        let id = PieceId::new(self.next_piece_id);
        self.next_piece_id += 1;
        Piece::new(id, kind, color)
    }

    pub fn locate(&self, id: PieceId) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.id() == id)
            .map(|(position, _)| position)
    }

    /// Occupied squares in row-major order, rank 8 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all()
            .filter_map(move |position| self.get(position).map(|piece| (position, piece)))
    }

    pub fn snapshot(&self) -> Cells {
        self.cells
    }
}
