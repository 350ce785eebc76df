use std::fmt;
use std::str::FromStr;

use super::color::Color;
use super::error::BoardError;

/// Identity of a piece for the lifetime of a match. Issued by the board, so
/// two pieces of the same kind and color can still be told apart.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u32);

impl PieceId {
    pub(crate) fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    pub fn is_promotion_target(&self) -> bool {
        Self::PROMOTIONS.contains(self)
    }

    pub fn to_fen(&self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen(c: char) -> Option<(PieceKind, Color)> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some((kind, color))
    }

    pub fn to_unicode_piece_char(&self, color: Color) -> char {
        match (self, color) {
            (PieceKind::Pawn, Color::White) => '♙',
            (PieceKind::Knight, Color::White) => '♘',
            (PieceKind::Bishop, Color::White) => '♗',
            (PieceKind::Rook, Color::White) => '♖',
            (PieceKind::Queen, Color::White) => '♕',
            (PieceKind::King, Color::White) => '♔',
            (PieceKind::Pawn, Color::Black) => '♟',
            (PieceKind::Knight, Color::Black) => '♞',
            (PieceKind::Bishop, Color::Black) => '♝',
            (PieceKind::Rook, Color::Black) => '♜',
            (PieceKind::Queen, Color::Black) => '♛',
            (PieceKind::King, Color::Black) => '♚',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{}", name)
    }
}

/// Accepts a single letter (`q`, `N`) or the full name (`queen`).
impl FromStr for PieceKind {
    type Err = BoardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();
        let kind = match trimmed.as_str() {
            "p" | "pawn" => PieceKind::Pawn,
            "n" | "knight" => PieceKind::Knight,
            "b" | "bishop" => PieceKind::Bishop,
            "r" | "rook" => PieceKind::Rook,
            "q" | "queen" => PieceKind::Queen,
            "k" | "king" => PieceKind::King,
            _ => {
                return Err(BoardError::UnknownPieceKind {
                    input: input.to_string(),
                })
            }
        };
        Ok(kind)
    }
}

/// A piece carries its own attributes only. Where it stands is a question
/// for the board.
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    move_count: u32,
}

impl Piece {
    pub(crate) fn new(id: PieceId, kind: PieceKind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            move_count: 0,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }

    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    pub fn to_fen(&self) -> char {
        self.kind.to_fen(self.color)
    }

    pub(crate) fn increment_move_count(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn decrement_move_count(&mut self) {
        debug_assert!(self.move_count > 0, "move count underflow on {:?}", self);
        self.move_count = self.move_count.saturating_sub(1);
    }

    pub(crate) fn with_move_count(mut self, move_count: u32) -> Self {
        self.move_count = move_count;
        self
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_roundtrip() {
        for &color in Color::ALL.iter() {
            for &kind in [
                PieceKind::Pawn,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
                PieceKind::King,
            ]
            .iter()
            {
                assert_eq!(Some((kind, color)), PieceKind::from_fen(kind.to_fen(color)));
            }
        }
        assert_eq!(None, PieceKind::from_fen('x'));
    }

    #[test]
    fn test_parse_piece_kind() {
        assert_eq!(PieceKind::Queen, "q".parse().unwrap());
        assert_eq!(PieceKind::Knight, "N".parse().unwrap());
        assert_eq!(PieceKind::Bishop, "bishop".parse().unwrap());
        assert!("z".parse::<PieceKind>().is_err());
    }

    #[test]
    fn test_promotion_targets() {
        assert!(PieceKind::Queen.is_promotion_target());
        assert!(PieceKind::Knight.is_promotion_target());
        assert!(!PieceKind::King.is_promotion_target());
        assert!(!PieceKind::Pawn.is_promotion_target());
    }

    #[test]
    fn test_move_count() {
        let mut piece = Piece::new(PieceId::new(0), PieceKind::Rook, Color::White);
        assert!(!piece.has_moved());
        piece.increment_move_count();
        assert_eq!(1, piece.move_count());
        piece.decrement_move_count();
        assert!(!piece.has_moved());
    }
}
